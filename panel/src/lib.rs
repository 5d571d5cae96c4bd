//! Terminal host pieces for the todo panel: line commands, the ureq-backed
//! transport and logging setup. `main.rs` wires them together.

pub mod commands;
pub mod logging;
pub mod transport;

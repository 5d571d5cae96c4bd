//! Terminal host for the todo panel.
//!
//! Reads one command per stdin line, dispatches the resulting intents and
//! prints the re-rendered panel. Diagnostics go to stderr via `tracing`.

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use todo_core::{PanelConfig, SyncError, TodoApi, TodoClient, TodoPanel};
use todo_panel::commands::{Command, HELP};
use todo_panel::logging;
use todo_panel::transport::UreqTransport;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    if !logging::init() {
        eprintln!("tracing subscriber already installed");
    }

    let config = PanelConfig::from_env();
    info!(base_url = %config.base_url, "starting todo panel");

    let api = TodoApi::new(TodoClient::new(&config.base_url), UreqTransport::new());
    let mut panel = TodoPanel::mount(api).await;
    println!("{}", panel.view());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => {
                println!("{HELP}");
                continue;
            }
            _ => {}
        }

        let intents = match command.into_intents(&panel.view()) {
            Ok(intents) => intents,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        for intent in intents {
            match panel.dispatch(intent).await {
                Ok(()) => {}
                Err(notice @ SyncError::EmptyInput) => println!("{notice}"),
                // Logged by the sync layer.
                Err(_) => {}
            }
        }
        println!("{}", panel.view());
    }

    info!("todo panel closed");
    Ok(())
}

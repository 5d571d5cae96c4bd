//! Line commands typed into the terminal host.
//!
//! Each line maps onto one or more panel intents. Row numbers refer to the
//! rendering printed just before the command was typed.

use thiserror::Error;
use todo_core::{Intent, PanelView};

pub const HELP: &str = "\
commands:
  type <text>    replace the input buffer (no text clears it)
  add [<text>]   add the buffer, or <text> if given
  toggle <n>     flip row n
  delete <n>     delete row n
  clear          clear completed
  remove-all     remove every row
  reload         fetch the list again
  help           show this help
  quit           leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Type(String),
    Add(Option<String>),
    Toggle(usize),
    Delete(usize),
    ClearCompleted,
    RemoveAll,
    Reload,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command `{0}`; type `help`")]
    Unknown(String),
    #[error("`{0}` needs a row number")]
    MissingRow(&'static str),
    #[error("`{0}` is not a row number")]
    BadRow(String),
    #[error("there is no row {0}")]
    NoSuchRow(usize),
}

impl Command {
    /// Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();
        if trimmed.is_empty() {
            return Ok(None);
        }
        let (verb, rest) = match trimmed.split_once(' ') {
            Some((verb, rest)) => (verb, rest),
            None => (trimmed, ""),
        };

        let command = match verb {
            "type" => Command::Type(rest.to_string()),
            "add" if rest.is_empty() => Command::Add(None),
            "add" => Command::Add(Some(rest.to_string())),
            "toggle" => Command::Toggle(parse_row("toggle", rest)?),
            "delete" => Command::Delete(parse_row("delete", rest)?),
            "clear" => Command::ClearCompleted,
            "remove-all" => Command::RemoveAll,
            "reload" => Command::Reload,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }

    /// Resolve the command against the current rendering. `Help` and `Quit`
    /// are handled by the host and produce no intents.
    pub fn into_intents(self, view: &PanelView) -> Result<Vec<Intent>, CommandError> {
        let intents = match self {
            Command::Type(text) => vec![Intent::InputChanged(text)],
            Command::Add(None) => vec![Intent::Add],
            Command::Add(Some(text)) => vec![Intent::InputChanged(text), Intent::Add],
            Command::Toggle(n) => vec![view.row(n).ok_or(CommandError::NoSuchRow(n))?.toggle_intent()],
            Command::Delete(n) => vec![view.row(n).ok_or(CommandError::NoSuchRow(n))?.delete_intent()],
            Command::ClearCompleted => vec![Intent::ClearCompleted],
            Command::RemoveAll => vec![Intent::RemoveAll],
            Command::Reload => vec![Intent::Reload],
            Command::Help | Command::Quit => Vec::new(),
        };
        Ok(intents)
    }
}

fn parse_row(verb: &'static str, rest: &str) -> Result<usize, CommandError> {
    let rest = rest.trim();
    if rest.is_empty() {
        return Err(CommandError::MissingRow(verb));
    }
    rest.parse().map_err(|_| CommandError::BadRow(rest.to_string()))
}

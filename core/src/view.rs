//! The panel's View: a pure projection of `PanelState`.
//!
//! `PanelView` carries everything a renderer needs. `to_markup` emits the
//! HTML layout of the panel and `Display` gives the plain-text rendition
//! used by terminal hosts. Rows hand out the intents their controls fire.

use std::fmt;

use crate::panel::Intent;
use crate::state::PanelState;
use crate::types::TodoId;

pub const TITLE: &str = "Todo List";
pub const INPUT_PLACEHOLDER: &str = "Enter a new todo...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRow {
    pub id: TodoId,
    pub text: String,
    pub checked: bool,
}

impl TodoRow {
    /// Fired by clicking the row's text.
    pub fn toggle_intent(&self) -> Intent {
        Intent::Toggle {
            id: self.id.clone(),
            checked: self.checked,
        }
    }

    /// Fired by the row's `×` control.
    pub fn delete_intent(&self) -> Intent {
        Intent::Delete(self.id.clone())
    }

    fn to_markup(&self) -> String {
        let class = if self.checked { " class=\"checked\"" } else { "" };
        format!(
            "<li data-id=\"{}\"{class}><span>{}</span><span class=\"close\">&times;</span></li>",
            escape(self.id.as_str()),
            escape(&self.text)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    pub error: Option<String>,
    pub input: String,
    pub rows: Vec<TodoRow>,
}

impl PanelView {
    pub fn from_state(state: &PanelState) -> Self {
        Self {
            error: state.error.clone(),
            input: state.input.clone(),
            rows: state
                .todos
                .iter()
                .map(|todo| TodoRow {
                    id: todo.id.clone(),
                    text: todo.text.clone(),
                    checked: todo.checked,
                })
                .collect(),
        }
    }

    /// Row by 1-based position, as numbered in the text rendition.
    pub fn row(&self, position: usize) -> Option<&TodoRow> {
        position.checked_sub(1).and_then(|index| self.rows.get(index))
    }

    pub fn to_markup(&self) -> String {
        let banner = self
            .error
            .as_deref()
            .map(|error| format!("<div class=\"error-message\">{}</div>", escape(error)))
            .unwrap_or_default();
        let rows: String = self.rows.iter().map(TodoRow::to_markup).collect();

        format!(
            "<div class=\"container\">\
             <h1 class=\"header\">{TITLE}</h1>\
             {banner}\
             <div class=\"btn-div\"><input type=\"text\" placeholder=\"{INPUT_PLACEHOLDER}\" value=\"{input}\"/>\
             <button class=\"addBtn\">Add</button></div>\
             <ul>{rows}</ul>\
             <div class=\"btn-div\">\
             <button class=\"actionBtn clearAll-btn\">Clear Completed</button>\
             <button class=\"actionBtn removeAll-btn\">Remove All</button>\
             </div>\
             </div>",
            input = escape(&self.input),
        )
    }
}

impl fmt::Display for PanelView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{TITLE}")?;
        if let Some(error) = &self.error {
            writeln!(f, "! {error}")?;
        }
        writeln!(f, "> {}", self.input)?;
        if self.rows.is_empty() {
            writeln!(f, "  (no todos)")?;
        }
        for (index, row) in self.rows.iter().enumerate() {
            let mark = if row.checked { 'x' } else { ' ' };
            writeln!(f, "{:>3}. [{mark}] {}", index + 1, row.text)?;
        }
        write!(f, "[Clear Completed] [Remove All]")
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

//! Transport-agnostic assistant output.
//!
//! The session produces these values; the binary decides how to print them.
//! [`AssistantOutput::render`] gives the plain-text form used by the terminal
//! front end.

use crate::db::{Row, Value};

/// Maximum width for any column.
const MAX_COLUMN_WIDTH: usize = 40;

/// Minimum width for any column.
const MIN_COLUMN_WIDTH: usize = 4;

/// Output from handling one line of assistant input.
#[derive(Debug, Clone, PartialEq)]
pub enum AssistantOutput {
    /// Informational message or static view.
    Info(String),

    /// A generated or pending SQL statement.
    Sql(String),

    /// Error message.
    Error(String),

    /// Success message.
    Success(String),

    /// Query result rows.
    Table {
        /// Column headers.
        columns: Vec<String>,
        /// Row data.
        rows: Vec<Row>,
    },

    /// End the session.
    Exit,
}

impl AssistantOutput {
    /// Creates an info message.
    pub fn info(msg: impl Into<String>) -> Self {
        Self::Info(msg.into())
    }

    /// Creates an error message.
    pub fn error(msg: impl Into<String>) -> Self {
        Self::Error(msg.into())
    }

    /// Creates a success message.
    pub fn success(msg: impl Into<String>) -> Self {
        Self::Success(msg.into())
    }

    /// Renders the output as terminal text. `Exit` renders as nothing.
    pub fn render(&self) -> String {
        match self {
            Self::Info(msg) => msg.clone(),
            Self::Sql(sql) => format!("Generated SQL:\n\n    {}\n", sql.replace('\n', "\n    ")),
            Self::Error(msg) => format!("✗ {msg}"),
            Self::Success(msg) => format!("✓ {msg}"),
            Self::Table { columns, rows } => render_table(columns, rows),
            Self::Exit => String::new(),
        }
    }
}

/// Renders a result set as a bordered text table with a row-count footer.
pub fn render_table(columns: &[String], rows: &[Row]) -> String {
    if columns.is_empty() {
        return "(empty result)".to_string();
    }

    let widths = column_widths(columns, rows);
    let mut lines = Vec::with_capacity(rows.len() + 5);

    lines.push(border(&widths, '┌', '┬', '┐'));
    lines.push(line(columns.iter().map(String::as_str), &widths));
    lines.push(border(&widths, '├', '┼', '┤'));
    for row in rows {
        let cells: Vec<String> = row.iter().map(Value::to_display_string).collect();
        lines.push(line(cells.iter().map(String::as_str), &widths));
    }
    lines.push(border(&widths, '└', '┴', '┘'));

    lines.push(format!(
        "{} row{} returned",
        rows.len(),
        if rows.len() == 1 { "" } else { "s" }
    ));

    lines.join("\n")
}

fn column_widths(columns: &[String], rows: &[Row]) -> Vec<usize> {
    let mut widths: Vec<usize> = columns
        .iter()
        .map(|c| c.chars().count().max(MIN_COLUMN_WIDTH))
        .collect();

    for row in rows {
        for (i, value) in row.iter().enumerate().take(widths.len()) {
            widths[i] = widths[i].max(value.to_display_string().chars().count());
        }
    }

    widths.iter().map(|&w| w.min(MAX_COLUMN_WIDTH)).collect()
}

/// Truncates a string to `max_width` characters, adding an ellipsis if cut.
fn truncate(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width <= 3 {
        s.chars().take(max_width).collect()
    } else {
        let kept: String = s.chars().take(max_width - 3).collect();
        format!("{kept}...")
    }
}

fn border(widths: &[usize], left: char, mid: char, right: char) -> String {
    let segments: Vec<String> = widths.iter().map(|&w| "─".repeat(w + 2)).collect();
    format!("{left}{}{right}", segments.join(mid.to_string().as_str()))
}

fn line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let mut out = String::from("│");
    for (cell, &width) in cells.zip(widths) {
        // Single-line cells only
        let flat = cell.replace(['\n', '\r'], " ");
        out.push_str(&format!(" {:width$} │", truncate(&flat, width), width = width));
    }
    out
}

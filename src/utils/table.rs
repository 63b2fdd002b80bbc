//! Table rendering utilities for CLI outputs.

use crate::utils::colors::RESET;
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str) -> Self {
        Self {
            header: header.to_string(),
            width: UnicodeWidthStr::width(header),
        }
    }
}

/// A cell value plus the ANSI color applied after padding.
pub struct Cell {
    pub text: String,
    pub color: Option<&'static str>,
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Self { text, color: None }
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Self {
            text: text.to_string(),
            color: None,
        }
    }
}

impl Cell {
    pub fn colored(text: impl Into<String>, color: &'static str) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Cell>>,
    pub separator: char,
}

impl Table {
    pub fn new(columns: Vec<Column>, separator: char) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            separator,
        }
    }

    /// Adds a row and widens columns to fit it; missing cells render empty.
    pub fn add_row(&mut self, row: Vec<Cell>) {
        for (col, cell) in self.columns.iter_mut().zip(row.iter()) {
            col.width = col.width.max(UnicodeWidthStr::width(cell.text.as_str()));
        }
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&pad(&col.header, col.width));
            out.push(' ');
        }
        out.push('\n');

        let total: usize = self.columns.iter().map(|c| c.width + 1).sum();
        out.push_str(&self.separator.to_string().repeat(total.saturating_sub(1)));
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                match row.get(i) {
                    Some(Cell {
                        text,
                        color: Some(color),
                    }) => out.push_str(&format!("{color}{}{RESET}", pad(text, col.width))),
                    Some(cell) => out.push_str(&pad(&cell.text, col.width)),
                    None => out.push_str(&pad("", col.width)),
                }
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}

fn pad(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{s}{}", " ".repeat(width.saturating_sub(w)))
}

//! Table rendering utilities for CLI outputs.

use super::colors::RESET;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
        }
    }
}

struct Row {
    cells: Vec<String>,
    color: Option<&'static str>,
}

pub struct Table {
    pub columns: Vec<Column>,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, cells: Vec<String>) {
        self.rows.push(Row { cells, color: None });
    }

    /// Row printed in one ANSI color; padding is computed on the plain text.
    pub fn add_colored_row(&mut self, cells: Vec<String>, color: &'static str) {
        self.rows.push(Row {
            cells,
            color: Some(color),
        });
    }

    fn render_line<'a>(&self, cells: impl Iterator<Item = &'a str>) -> String {
        let mut line = String::new();
        for (col, cell) in self.columns.iter().zip(cells) {
            line.push_str(&format!("{:<width$} ", cell, width = col.width));
        }
        line.trim_end().to_string()
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        out.push_str(&self.render_line(self.columns.iter().map(|c| c.header.as_str())));
        out.push('\n');

        // Rows
        for row in &self.rows {
            let line = self.render_line(row.cells.iter().map(String::as_str));
            match row.color {
                Some(color) => out.push_str(&format!("{color}{line}{RESET}")),
                None => out.push_str(&line),
            }
            out.push('\n');
        }

        out
    }
}

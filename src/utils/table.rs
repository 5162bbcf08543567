//! Table rendering utilities for CLI outputs.

use crate::utils::formatting::{pad_left, pad_right, visible_width};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub align: Align,
}

impl Column {
    pub fn left(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Left,
        }
    }

    pub fn right(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Right,
        }
    }
}

/// Column widths follow the widest cell; colour codes do not count.
pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    separator: char,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            separator: '-',
        }
    }

    /// Character used for the rule under the header (config `separator_char`).
    pub fn with_separator(mut self, sep: &str) -> Self {
        self.separator = sep.chars().next().unwrap_or('-');
        self
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| visible_width(c))
                    .fold(visible_width(&col.header), usize::max)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        let cell = |text: &str, i: usize| match self.columns[i].align {
            Align::Left => pad_right(text, widths[i]),
            Align::Right => pad_left(text, widths[i]),
        };

        let header: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, c)| cell(&c.header, i))
            .collect();
        out.push_str(header.join("  ").trim_end());
        out.push('\n');

        let total: usize = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        out.push_str(&self.separator.to_string().repeat(total));
        out.push('\n');

        for row in &self.rows {
            let cells: Vec<String> = (0..self.columns.len())
                .map(|i| cell(row.get(i).map(String::as_str).unwrap_or(""), i))
                .collect();
            out.push_str(cells.join("  ").trim_end());
            out.push('\n');
        }

        out
    }
}

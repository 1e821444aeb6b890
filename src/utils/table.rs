//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<S: Into<String>>(headers: Vec<S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Column width: the widest cell (display width, station names can be
    /// arbitrary UTF-8), never narrower than the header.
    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.width()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if cell.width() > widths[i] {
                    widths[i] = cell.width();
                }
            }
        }
        widths
    }

    fn render_line(cells: &[String], widths: &[usize], out: &mut String) {
        for (i, cell) in cells.iter().enumerate() {
            out.push_str(cell);
            let pad = widths[i].saturating_sub(cell.width());
            for _ in 0..pad {
                out.push(' ');
            }
            out.push_str("  ");
        }
        while out.ends_with(' ') {
            out.pop();
        }
        out.push('\n');
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        Self::render_line(&self.headers, &widths, &mut out);
        for row in &self.rows {
            Self::render_line(row, &widths, &mut out);
        }

        out
    }
}

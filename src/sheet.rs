//! In-memory model of the single template worksheet.
//!
//! The builder, header styler and column sizer all work on a
//! [`TemplateSheet`] owned by the caller; nothing here touches the XLSX
//! format.

use crate::conf::{HeaderStyle, WIDTH_MAX, WIDTH_PADDING};
use crate::loader::Row;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TemplateSheet {
    name: String,
    rows: Vec<Row>,
    header_style: Option<HeaderStyle>,
    column_widths: Vec<f64>,
}

impl TemplateSheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn from_rows(name: impl Into<String>, rows: impl IntoIterator<Item = Row>) -> Self {
        let mut sheet = Self::new(name);
        for row in rows {
            sheet.append_row(row);
        }
        sheet
    }

    pub fn append_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of columns, i.e. the length of the widest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn header_style(&self) -> Option<&HeaderStyle> {
        self.header_style.as_ref()
    }

    /// Style of row `row_idx`; only row 0 can carry one.
    pub fn row_style(&self, row_idx: usize) -> Option<&HeaderStyle> {
        if row_idx == 0 { self.header_style.as_ref() } else { None }
    }

    /// Mark the first row as header. Does nothing on an empty sheet.
    pub fn apply_header_style(&mut self, style: HeaderStyle) {
        if self.rows.is_empty() {
            tracing::debug!("no rows, header style skipped");
            return;
        }
        self.header_style = Some(style);
    }

    /// Recompute the width table from the current contents.
    pub fn size_columns(&mut self) {
        self.column_widths = (0..self.width())
            .map(|col| {
                let max_len = self
                    .rows
                    .iter()
                    .map(|row| cell_text_len(row, col).unwrap_or(0))
                    .max()
                    .unwrap_or(0);
                column_width(max_len)
            })
            .collect();
        tracing::debug!(widths = ?self.column_widths, "sized columns");
    }

    pub fn column_widths(&self) -> &[f64] {
        &self.column_widths
    }
}

/// Character count of the cell at `col`, `None` when the row is too short.
pub fn cell_text_len(row: &Row, col: usize) -> Option<usize> {
    row.get(col).map(|text| text.chars().count())
}

/// `min(max_len + 2, 50)`
pub fn column_width(max_len: usize) -> f64 {
    max_len.saturating_add(WIDTH_PADDING).min(WIDTH_MAX) as f64
}

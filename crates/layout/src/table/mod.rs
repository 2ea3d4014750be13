//! Grid tables of display strings with layered style commands.

mod style;

pub use style::{CellRange, CellStyle, CellStyleKind, StyleCommand, TableStyle};

use crate::LayoutError;

#[derive(Debug, Clone)]
pub struct Table {
    rows: Vec<Vec<String>>,
    col_widths: Vec<f32>,
    style: TableStyle,
}

impl Table {
    /// Builds a table whose first row is the header. Every row must have the
    /// header's cell count and there must be one width per column.
    pub fn new<R, S>(rows: R, col_widths: Vec<f32>) -> Result<Self, LayoutError>
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rows: Vec<Vec<String>> = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();
        let expected = rows.first().map(Vec::len).ok_or(LayoutError::EmptyTable)?;
        if let Some((row, cells)) = rows.iter().enumerate().find(|(_, r)| r.len() != expected) {
            return Err(LayoutError::RaggedTable {
                row,
                expected,
                found: cells.len(),
            });
        }
        if col_widths.len() != expected {
            return Err(LayoutError::ColumnCountMismatch {
                expected,
                found: col_widths.len(),
            });
        }
        Ok(Self {
            rows,
            col_widths,
            style: TableStyle::new(),
        })
    }

    pub fn with_style(mut self, style: TableStyle) -> Self {
        self.style = style;
        self
    }

    /// Appends further commands on top of the current style.
    pub fn style_mut(&mut self) -> &mut TableStyle {
        &mut self.style
    }

    pub fn style(&self) -> &TableStyle {
        &self.style
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn col_widths(&self) -> &[f32] {
        &self.col_widths
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_cols(&self) -> usize {
        self.col_widths.len()
    }

    pub fn total_width(&self) -> f32 {
        self.col_widths.iter().sum()
    }

    /// Resolved style of every cell, indexed `[row][col]`.
    pub fn cell_styles(&self) -> Vec<Vec<CellStyle>> {
        self.style.resolve(self.num_cols(), self.num_rows())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_ragged_rows() {
        let err = Table::new(vec![vec!["a", "b"], vec!["c"]], vec![10.0, 10.0]).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::RaggedTable {
                row: 1,
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn rejects_width_count_mismatch_and_empty() {
        let err = Table::new(vec![vec!["a", "b"]], vec![10.0]).unwrap_err();
        assert!(matches!(err, LayoutError::ColumnCountMismatch { expected: 2, found: 1 }));
        let empty: Vec<Vec<&str>> = Vec::new();
        assert!(matches!(Table::new(empty, vec![]), Err(LayoutError::EmptyTable)));
    }
}

use super::{LayoutNode, SplitOutcome};
use crate::fonts;
use crate::markup::{self, SpanStyle};
use crate::output::{Paint, PaintOp, TextRun};
use crate::table::{CellStyle, Table};
use crate::text::{LineLayout, break_lines};
use geo_style::{TextAlign, VerticalAlign};
use geo_types::{Point, Rect};

#[derive(Debug)]
struct CellLayout {
    lines: Vec<LineLayout>,
    style: CellStyle,
}

#[derive(Debug)]
struct RowLayout {
    height: f32,
    cells: Vec<CellLayout>,
}

/// A table with row heights inferred from wrapped cell text. Splits between
/// rows; the header is not repeated on continuation pages.
#[derive(Debug)]
pub(crate) struct TableNode {
    rows: Vec<RowLayout>,
    col_widths: Vec<f32>,
    x_offset: f32,
}

impl TableNode {
    pub fn build(table: &Table, available_width: f32) -> Self {
        let styles = table.cell_styles();
        let col_widths = table.col_widths().to_vec();
        let rows = table
            .rows()
            .iter()
            .zip(styles)
            .map(|(cells, row_styles)| {
                let cells: Vec<CellLayout> = cells
                    .iter()
                    .zip(row_styles)
                    .zip(&col_widths)
                    .map(|((text, style), width)| layout_cell(text, style, *width))
                    .collect();
                let height = cells.iter().map(cell_height).fold(0.0, f32::max);
                RowLayout { height, cells }
            })
            .collect();
        Self {
            rows,
            x_offset: ((available_width - table.total_width()) / 2.0).max(0.0),
            col_widths,
        }
    }
}

fn layout_cell(text: &str, style: CellStyle, width: f32) -> CellLayout {
    let base = SpanStyle {
        font: style.font,
        color: style.text_color,
    };
    let align = match style.align {
        TextAlign::Justify => TextAlign::Left,
        other => other,
    };
    let text_width = (width - style.padding.left - style.padding.right).max(1.0);
    let lines = break_lines(&markup::plain(text, base), style.font_size, text_width, align);
    CellLayout { lines, style }
}

fn cell_height(cell: &CellLayout) -> f32 {
    let lines = cell.lines.len().max(1) as f32;
    lines * cell.style.leading() + cell.style.padding.top + cell.style.padding.bottom
}

impl LayoutNode for TableNode {
    fn kind(&self) -> &'static str {
        "Table"
    }

    fn height(&self) -> f32 {
        self.rows.iter().map(|r| r.height).sum()
    }

    fn split(mut self: Box<Self>, available: f32) -> SplitOutcome {
        let mut used = 0.0;
        let mut fit = 0;
        for row in &self.rows {
            if used + row.height > available + 0.01 {
                break;
            }
            used += row.height;
            fit += 1;
        }
        if fit == 0 || fit >= self.rows.len() {
            return SplitOutcome::Whole(self);
        }
        let rest = self.rows.split_off(fit);
        let tail = TableNode {
            rows: rest,
            col_widths: self.col_widths.clone(),
            x_offset: self.x_offset,
        };
        SplitOutcome::Split(self, Box::new(tail))
    }

    fn paint(&self, x: f32, top: f32, ops: &mut Vec<PaintOp>) {
        let left = x + self.x_offset;
        let cells = || {
            let mut row_top = top;
            self.rows.iter().flat_map(move |row| {
                let this_top = row_top;
                row_top -= row.height;
                let mut cell_left = left;
                row.cells.iter().zip(&self.col_widths).map(move |(cell, w)| {
                    let rect = Rect::new(cell_left, this_top - row.height, *w, row.height);
                    cell_left += w;
                    (cell, rect)
                })
            })
        };

        for (cell, rect) in cells() {
            if let Some(bg) = cell.style.background {
                ops.push(PaintOp::Rect {
                    rect,
                    paint: Paint::fill(bg),
                });
            }
        }

        for (cell, rect) in cells() {
            if let Some(grid) = cell.style.grid {
                ops.push(PaintOp::Rect {
                    rect,
                    paint: Paint {
                        fill: None,
                        stroke: Some(grid),
                    },
                });
            }
            if let Some(below) = cell.style.line_below {
                ops.push(PaintOp::Line {
                    from: Point::new(rect.x, rect.y),
                    to: Point::new(rect.right(), rect.y),
                    stroke: below,
                });
            }
        }

        for (cell, rect) in cells() {
            paint_cell_text(cell, rect, ops);
        }
    }
}

fn paint_cell_text(cell: &CellLayout, rect: Rect, ops: &mut Vec<PaintOp>) {
    let style = &cell.style;
    let leading = style.leading();
    let block = cell.lines.len() as f32 * leading;
    let inner_top = rect.top() - style.padding.top;
    let inner_height = rect.height - style.padding.top - style.padding.bottom;
    let mut line_top = match style.valign {
        VerticalAlign::Top => inner_top,
        VerticalAlign::Middle => inner_top - (inner_height - block) / 2.0,
        VerticalAlign::Bottom => rect.y + style.padding.bottom + block,
    };
    for line in &cell.lines {
        let baseline = line_top - leading
            + (leading - style.font_size) / 2.0
            + fonts::DESCENT * style.font_size;
        for fragment in &line.fragments {
            ops.push(PaintOp::Text(TextRun {
                origin: Point::new(
                    rect.x + style.padding.left + line.offset + fragment.x,
                    baseline,
                ),
                text: fragment.text.clone(),
                font: fragment.style.font,
                size: style.font_size,
                color: fragment.style.color,
                word_spacing: 0.0,
            }));
        }
        line_top -= leading;
    }
}

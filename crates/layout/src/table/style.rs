use crate::output::Stroke;
use geo_style::{BuiltinFont, Margins, TextAlign, VerticalAlign};
use geo_types::Color;
use std::ops::Range;

/// A rectangular block of cells addressed as `(col, row)` pairs. Negative
/// indices count from the end, so `(-1, -1)` is the bottom-right cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange {
    pub start: (i32, i32),
    pub end: (i32, i32),
}

impl CellRange {
    pub const fn new(start: (i32, i32), end: (i32, i32)) -> Self {
        Self { start, end }
    }

    pub const fn all() -> Self {
        Self::new((0, 0), (-1, -1))
    }

    pub const fn row(row: i32) -> Self {
        Self::new((0, row), (-1, row))
    }

    pub const fn col(col: i32) -> Self {
        Self::new((col, 0), (col, -1))
    }

    pub const fn cell(col: i32, row: i32) -> Self {
        Self::new((col, row), (col, row))
    }

    /// Rows `from..` through the last row, all columns.
    pub const fn body_from(from: i32) -> Self {
        Self::new((0, from), (-1, -1))
    }

    fn resolve_axis(start: i32, end: i32, len: usize) -> Range<usize> {
        let fix = |i: i32| -> i64 {
            if i < 0 {
                len as i64 + i as i64
            } else {
                i as i64
            }
        };
        let lo = fix(start).max(0);
        let hi = (fix(end) + 1).min(len as i64);
        if lo >= hi {
            0..0
        } else {
            lo as usize..hi as usize
        }
    }

    /// Concrete `(cols, rows)` ranges for a table of the given shape.
    pub fn resolve(&self, cols: usize, rows: usize) -> (Range<usize>, Range<usize>) {
        (
            Self::resolve_axis(self.start.0, self.end.0, cols),
            Self::resolve_axis(self.start.1, self.end.1, rows),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CellStyleKind {
    Background(Color),
    /// Cycles through the colours row by row, starting at the range's first row.
    RowBackgrounds(Vec<Color>),
    TextColor(Color),
    Font(BuiltinFont),
    FontSize(f32),
    Align(TextAlign),
    VAlign(VerticalAlign),
    Grid(Stroke),
    LineBelow(Stroke),
    Padding(Margins),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StyleCommand {
    pub range: CellRange,
    pub kind: CellStyleKind,
}

/// Effective style of one cell after every command has been applied.
#[derive(Debug, Clone, PartialEq)]
pub struct CellStyle {
    pub background: Option<Color>,
    pub text_color: Color,
    pub font: BuiltinFont,
    pub font_size: f32,
    pub align: TextAlign,
    pub valign: VerticalAlign,
    pub padding: Margins,
    pub grid: Option<Stroke>,
    pub line_below: Option<Stroke>,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            background: None,
            text_color: Color::BLACK,
            font: BuiltinFont::Helvetica,
            font_size: 10.0,
            align: TextAlign::Left,
            valign: VerticalAlign::Bottom,
            padding: Margins {
                top: 3.0,
                right: 6.0,
                bottom: 3.0,
                left: 6.0,
            },
            grid: None,
            line_below: None,
        }
    }
}

impl CellStyle {
    pub fn leading(&self) -> f32 {
        self.font_size * 1.2
    }
}

/// Ordered style commands. Later commands win for the cells they cover, so
/// per-cell overrides are expressed by appending.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableStyle {
    commands: Vec<StyleCommand>,
}

impl TableStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, range: CellRange, kind: CellStyleKind) -> &mut Self {
        self.commands.push(StyleCommand { range, kind });
        self
    }

    pub fn with(mut self, range: CellRange, kind: CellStyleKind) -> Self {
        self.add(range, kind);
        self
    }

    pub fn commands(&self) -> &[StyleCommand] {
        &self.commands
    }

    pub fn resolve(&self, cols: usize, rows: usize) -> Vec<Vec<CellStyle>> {
        let mut grid = vec![vec![CellStyle::default(); cols]; rows];
        for command in &self.commands {
            let (col_range, row_range) = command.range.resolve(cols, rows);
            let first_row = row_range.start;
            for row in row_range {
                for col in col_range.clone() {
                    let cell = &mut grid[row][col];
                    match &command.kind {
                        CellStyleKind::Background(c) => cell.background = Some(*c),
                        CellStyleKind::RowBackgrounds(cycle) => {
                            if !cycle.is_empty() {
                                cell.background = Some(cycle[(row - first_row) % cycle.len()]);
                            }
                        }
                        CellStyleKind::TextColor(c) => cell.text_color = *c,
                        CellStyleKind::Font(f) => cell.font = *f,
                        CellStyleKind::FontSize(s) => cell.font_size = *s,
                        CellStyleKind::Align(a) => cell.align = *a,
                        CellStyleKind::VAlign(v) => cell.valign = *v,
                        CellStyleKind::Grid(s) => cell.grid = Some(*s),
                        CellStyleKind::LineBelow(s) => cell.line_below = Some(*s),
                        CellStyleKind::Padding(p) => cell.padding = *p,
                    }
                }
            }
        }
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_indices_count_from_the_end() {
        let (cols, rows) = CellRange::new((0, 1), (-1, -1)).resolve(4, 6);
        assert_eq!(cols, 0..4);
        assert_eq!(rows, 1..6);
        let (cols, rows) = CellRange::cell(-2, -1).resolve(4, 6);
        assert_eq!((cols, rows), (2..3, 5..6));
    }

    #[test]
    fn out_of_range_commands_are_empty() {
        let (_, rows) = CellRange::row(9).resolve(2, 3);
        assert!(rows.is_empty());
    }

    #[test]
    fn later_commands_override_earlier_ones() {
        let red = Color::rgb(255, 0, 0);
        let style = TableStyle::new()
            .with(CellRange::all(), CellStyleKind::TextColor(Color::BLACK))
            .with(CellRange::cell(1, 1), CellStyleKind::TextColor(red));
        let grid = style.resolve(2, 2);
        assert_eq!(grid[1][1].text_color, red);
        assert_eq!(grid[1][0].text_color, Color::BLACK);
    }

    #[test]
    fn row_backgrounds_cycle_from_range_start() {
        let a = Color::WHITE;
        let b = Color::gray(240);
        let style = TableStyle::new()
            .with(CellRange::row(0), CellStyleKind::Background(Color::BLACK))
            .with(CellRange::body_from(1), CellStyleKind::RowBackgrounds(vec![a, b]));
        let grid = style.resolve(3, 5);
        assert_eq!(grid[0][0].background, Some(Color::BLACK));
        let bands: Vec<_> = (1..5).map(|r| grid[r][2].background).collect();
        assert_eq!(bands, vec![Some(a), Some(b), Some(a), Some(b)]);
    }
}

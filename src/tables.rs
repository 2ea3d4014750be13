//! House table styles and the per-cell overrides layered on top of them.

use crate::config::Palette;
use crate::error::ReportError;
use crate::scoring::score_color;
use geo_layout::{CellRange, CellStyleKind, Stroke, Table, TableStyle};
use geo_style::{BuiltinFont, Margins, TextAlign, VerticalAlign};
use geo_types::Color;

/// Font size and cell padding of a table family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableTheme {
    pub font_size: f32,
    pub padding: Margins,
}

impl TableTheme {
    /// Comparison report tables.
    pub const COMPACT: TableTheme = TableTheme {
        font_size: 8.0,
        padding: Margins::symmetric(5.0, 6.0),
    };

    /// Suite document tables.
    pub const ROOMY: TableTheme = TableTheme {
        font_size: 9.0,
        padding: Margins::symmetric(6.0, 8.0),
    };
}

/// Coloured header row with white bold text, white/light banding from the
/// first body row and a hairline grid. `header` defaults to the primary colour.
pub fn base_style(header: Option<Color>, theme: TableTheme, palette: &Palette) -> TableStyle {
    TableStyle::new()
        .with(CellRange::row(0), CellStyleKind::Background(header.unwrap_or(palette.primary)))
        .with(CellRange::row(0), CellStyleKind::TextColor(Color::WHITE))
        .with(CellRange::row(0), CellStyleKind::Font(BuiltinFont::HelveticaBold))
        .with(CellRange::all(), CellStyleKind::FontSize(theme.font_size))
        .with(CellRange::body_from(1), CellStyleKind::Font(BuiltinFont::Helvetica))
        .with(CellRange::body_from(1), CellStyleKind::TextColor(palette.text_primary))
        .with(CellRange::all(), CellStyleKind::Align(TextAlign::Left))
        .with(CellRange::all(), CellStyleKind::VAlign(VerticalAlign::Middle))
        .with(CellRange::all(), CellStyleKind::Grid(Stroke::new(palette.rule, 0.5)))
        .with(CellRange::body_from(1), CellStyleKind::Background(Color::WHITE))
        .with(
            CellRange::body_from(1),
            CellStyleKind::RowBackgrounds(vec![Color::WHITE, palette.light_bg]),
        )
        .with(CellRange::all(), CellStyleKind::Padding(theme.padding))
}

/// A header-first table in the house style.
pub fn styled_table<R, S>(
    rows: R,
    widths: Vec<f32>,
    header: Option<Color>,
    theme: TableTheme,
    palette: &Palette,
) -> Result<Table, ReportError>
where
    R: IntoIterator,
    R::Item: IntoIterator<Item = S>,
    S: Into<String>,
{
    Ok(Table::new(rows, widths)?.with_style(base_style(header, theme, palette)))
}

/// Green and bold for gains, red for losses, grey when unchanged.
pub fn color_delta_cell(style: &mut TableStyle, col: i32, row: i32, delta: f64, palette: &Palette) {
    let cell = CellRange::cell(col, row);
    style.add(cell, CellStyleKind::TextColor(palette.change(delta)));
    if delta > 0.0 {
        style.add(cell, CellStyleKind::Font(BuiltinFont::HelveticaBold));
    }
}

pub fn color_score_cell(style: &mut TableStyle, col: i32, row: i32, score: f64, palette: &Palette) {
    style.add(CellRange::cell(col, row), CellStyleKind::TextColor(score_color(score, palette)));
}

pub fn color_cell(style: &mut TableStyle, col: i32, row: i32, color: Color) {
    style.add(CellRange::cell(col, row), CellStyleKind::TextColor(color));
}

pub fn bold_cell(style: &mut TableStyle, col: i32, row: i32) {
    style.add(CellRange::cell(col, row), CellStyleKind::Font(BuiltinFont::HelveticaBold));
}

/// Bold text on a medium background, for totals.
pub fn emphasize_row(style: &mut TableStyle, row: i32, palette: &Palette) {
    style
        .add(CellRange::row(row), CellStyleKind::Font(BuiltinFont::HelveticaBold))
        .add(CellRange::row(row), CellStyleKind::Background(palette.medium_bg));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(palette: &Palette) -> Table {
        styled_table(
            vec![
                vec!["Category", "Wix", "Next.js"],
                vec!["Technical", "18", "90"],
                vec!["Schema", "12", "65"],
                vec!["Platform", "42", "42"],
                vec!["Total", "35", "67"],
            ],
            vec![200.0, 60.0, 60.0],
            None,
            TableTheme::COMPACT,
            palette,
        )
        .unwrap()
    }

    #[test]
    fn banding_covers_body_rows_only() {
        let palette = Palette::default();
        let grid = sample(&palette).cell_styles();
        assert_eq!(grid[0][0].background, Some(palette.primary));
        assert_eq!(grid[0][0].text_color, Color::WHITE);
        assert_eq!(grid[0][2].font, BuiltinFont::HelveticaBold);
        let bands: Vec<_> = (1..5).map(|r| grid[r][1].background).collect();
        assert_eq!(
            bands,
            vec![Some(Color::WHITE), Some(palette.light_bg), Some(Color::WHITE), Some(palette.light_bg)]
        );
        assert_eq!(grid[3][0].font_size, 8.0);
        assert_eq!(grid[3][0].padding, TableTheme::COMPACT.padding);
    }

    #[test]
    fn header_colour_can_be_overridden() {
        let palette = Palette::default();
        let style = base_style(Some(palette.accent), TableTheme::ROOMY, &palette);
        let grid = style.resolve(2, 3);
        assert_eq!(grid[0][1].background, Some(palette.accent));
        assert_eq!(grid[2][1].font_size, 9.0);
    }

    #[test]
    fn overrides_compose_on_top_of_banding() {
        let palette = Palette::default();
        let mut table = sample(&palette);
        let style = table.style_mut();
        color_delta_cell(style, 2, 1, 72.0, &palette);
        color_delta_cell(style, 2, 2, -4.0, &palette);
        color_delta_cell(style, 2, 3, 0.0, &palette);
        color_score_cell(style, 1, 1, 18.0, &palette);
        emphasize_row(style, -1, &palette);
        let grid = table.cell_styles();

        assert_eq!(grid[1][2].text_color, palette.delta);
        assert_eq!(grid[1][2].font, BuiltinFont::HelveticaBold);
        assert_eq!(grid[2][2].text_color, palette.danger);
        assert_eq!(grid[2][2].font, BuiltinFont::Helvetica);
        assert_eq!(grid[3][2].text_color, palette.text_secondary);
        assert_eq!(grid[1][1].text_color, palette.danger);
        assert_eq!(grid[4][0].background, Some(palette.medium_bg));
        assert_eq!(grid[4][0].font, BuiltinFont::HelveticaBold);
        assert_eq!(grid[3][0].background, Some(Color::WHITE));
    }
}

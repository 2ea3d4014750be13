use super::{bar_width, bold, check_len, regular};
use crate::config::Palette;
use crate::error::WidgetError;
use crate::scoring::{score_color, signed};
use geo_layout::{Drawing, Paint, ShapeSink, Stroke, TextAnchor};
use geo_types::Color;
use itertools::izip;

/// One coloured data series of a bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
    pub color: Color,
}

impl Series {
    pub fn new(name: impl Into<String>, values: Vec<f64>, color: Color) -> Self {
        Self {
            name: name.into(),
            values,
            color,
        }
    }
}

const GROUP_SPACING: f32 = 15.0;
const BAR_SPACING: f32 = 2.0;

/// Vertical bars grouped by category on a 0-100 axis with a legend in the
/// top-right corner. Every series needs one value per category.
pub fn grouped_bar_chart(
    categories: &[String],
    series: &[Series],
    width: f32,
    height: f32,
    palette: &Palette,
) -> Result<Drawing, WidgetError> {
    for s in series {
        check_len("series values", categories.len(), s.values.len())?;
    }

    let (x0, y0) = (65.0, 35.0);
    let (plot_w, plot_h) = (width - 100.0, height - 65.0);
    let axis = Stroke::new(palette.text_primary, 0.5);
    let mut d = Drawing::new(width, height);

    for step in (0..=100).step_by(20) {
        let y = y0 + plot_h * step as f32 / 100.0;
        d.line(x0 - 5.0, y, x0, y, axis);
        d.string(x0 - 7.0, y - 2.5, &step.to_string(), regular(7.0, palette.text_primary), TextAnchor::End);
    }

    if !categories.is_empty() && !series.is_empty() {
        let slot = plot_w / categories.len() as f32;
        let k = series.len() as f32;
        let bar_w = (slot - GROUP_SPACING - (k - 1.0) * BAR_SPACING) / k;
        for (i, name) in categories.iter().enumerate() {
            let group_x = x0 + slot * i as f32 + GROUP_SPACING / 2.0;
            for (j, s) in series.iter().enumerate() {
                let x = group_x + j as f32 * (bar_w + BAR_SPACING);
                d.rect(x, y0, bar_w, bar_width(s.values[i], plot_h), Paint::fill(s.color));
            }
            d.string(
                x0 + slot * (i as f32 + 0.5),
                y0 - 12.0,
                name,
                regular(7.0, palette.text_primary),
                TextAnchor::Middle,
            );
        }
    }

    d.line(x0, y0, x0, y0 + plot_h, axis);
    d.line(x0, y0, x0 + plot_w, y0, axis);

    let (legend_x, legend_y) = (width - 180.0, height - 12.0);
    for (j, s) in series.iter().enumerate() {
        let x = legend_x + 90.0 * j as f32;
        d.rect(x, legend_y, 10.0, 10.0, Paint::fill(s.color));
        d.string(x + 14.0, legend_y + 1.0, &s.name, regular(8.0, palette.text_primary), TextAnchor::Start);
    }
    Ok(d)
}

/// One row per item: a grey track with the "after" bar in the lower half and
/// the "before" bar in the upper half, both scores and the signed change at
/// the right.
pub fn comparison_bars(
    items: &[String],
    before: &[i64],
    after: &[i64],
    width: f32,
    palette: &Palette,
) -> Result<Drawing, WidgetError> {
    check_len("before scores", items.len(), before.len())?;
    check_len("after scores", items.len(), after.len())?;

    const BAR_H: f32 = 18.0;
    const GAP: f32 = 28.0;
    const BAR_X: f32 = 120.0;
    let track = width - 180.0;
    let height = items.len() as f32 * (BAR_H + GAP) + 30.0;
    let mut d = Drawing::new(width, height);

    for (i, (item, &b, &a)) in izip!(items, before, after).enumerate() {
        let y = height - 30.0 - i as f32 * (BAR_H + GAP);
        d.string(5.0, y + 4.0, item, bold(8.0, palette.text_primary), TextAnchor::Start);
        d.rect(BAR_X, y, track, BAR_H, Paint::fill_and_stroke(palette.light_bg, palette.rule, 0.5));
        d.rect(BAR_X, y + BAR_H / 2.0, bar_width(b as f64, track), BAR_H / 2.0, Paint::fill(palette.before));
        d.rect(BAR_X, y, bar_width(a as f64, track), BAR_H / 2.0, Paint::fill(palette.after));

        let label_x = BAR_X + track + 8.0;
        d.string(label_x, y + BAR_H / 2.0 + 1.0, &b.to_string(), regular(7.0, palette.before), TextAnchor::Start);
        d.string(label_x, y - 1.0, &a.to_string(), regular(7.0, palette.after), TextAnchor::Start);
        let delta = a - b;
        d.string(
            BAR_X + track + 30.0,
            y + 4.0,
            &signed(delta),
            bold(8.0, palette.change(delta as f64)),
            TextAnchor::Start,
        );
    }
    Ok(d)
}

/// Single-value bars coloured by score tone, labelled `value%`.
pub fn horizontal_bars(items: &[(&str, u32)], width: f32, palette: &Palette) -> Drawing {
    const BAR_H: f32 = 20.0;
    const GAP: f32 = 8.0;
    const BAR_X: f32 = 140.0;
    const TRACK: f32 = 280.0;
    let height = items.len() as f32 * (BAR_H + GAP) + 20.0;
    let mut d = Drawing::new(width, height);

    for (i, (label, value)) in items.iter().enumerate() {
        let y = height - 20.0 - i as f32 * (BAR_H + GAP);
        let value = f64::from(*value);
        d.string(BAR_X - 8.0, y + 5.0, label, regular(9.0, palette.text_primary), TextAnchor::End);
        d.rect(BAR_X, y, TRACK, BAR_H, Paint::fill(palette.light_bg));
        d.rect(BAR_X, y, bar_width(value, TRACK), BAR_H, Paint::fill(score_color(value, palette)));
        d.string(
            BAR_X + TRACK + 8.0,
            y + 5.0,
            &format!("{value}%"),
            bold(9.0, palette.text_primary),
            TextAnchor::Start,
        );
    }
    d
}

/// Large highlighted figures with captions, spread evenly across the width.
pub fn big_stat_row(stats: &[(&str, &str)], width: f32, palette: &Palette) -> Drawing {
    let mut d = Drawing::new(width, 80.0);
    let cell_w = width / stats.len().max(1) as f32;
    for (i, (number, caption)) in stats.iter().enumerate() {
        let cx = cell_w * i as f32 + cell_w / 2.0;
        d.string(cx, 50.0, number, bold(32.0, palette.highlight), TextAnchor::Middle);
        d.string(cx, 30.0, caption, regular(9.0, palette.text_secondary), TextAnchor::Middle);
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_layout::PaintOp;
    use geo_types::Rect;

    fn rects(d: &Drawing) -> Vec<Rect> {
        d.ops()
            .iter()
            .filter_map(|op| match op {
                PaintOp::Rect { rect, .. } => Some(*rect),
                _ => None,
            })
            .collect()
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bar_chart_rejects_short_series() {
        let palette = Palette::default();
        let err = grouped_bar_chart(
            &names(&["A", "B", "C"]),
            &[Series::new("Wix", vec![10.0, 20.0], palette.before)],
            480.0,
            200.0,
            &palette,
        )
        .unwrap_err();
        assert_eq!(
            err,
            WidgetError::LengthMismatch {
                what: "series values",
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn bar_heights_are_proportional_to_the_plot() {
        let palette = Palette::default();
        let d = grouped_bar_chart(
            &names(&["A", "B"]),
            &[
                Series::new("Wix (Before)", vec![50.0, 0.0], palette.before),
                Series::new("Next.js (After)", vec![100.0, 25.0], palette.after),
            ],
            480.0,
            200.0,
            &palette,
        )
        .unwrap();
        let plot_h = 135.0;
        let bars: Vec<f32> = rects(&d).iter().take(4).map(|r| r.height).collect();
        assert_eq!(bars, vec![plot_h / 2.0, plot_h, 0.0, plot_h / 4.0]);
        let strings = d.strings();
        assert!(strings.contains(&"Wix (Before)") && strings.contains(&"100"));
    }

    #[test]
    fn comparison_bars_split_track_and_flag_changes() {
        let palette = Palette::default();
        let d = comparison_bars(&names(&["Schema", "Brand"]), &[12, 42], &[65, 42], 480.0, &palette).unwrap();
        assert_eq!(d.height, 2.0 * 46.0 + 30.0);
        let r = rects(&d);
        assert_eq!(r[0].width, 300.0);
        assert_eq!(r[1].width, 0.12 * 300.0);
        assert_eq!(r[2].width, 0.65 * 300.0);
        let delta = d.ops().iter().filter_map(PaintOp::as_text).find(|t| t.text == "+53").unwrap();
        assert_eq!(delta.color, palette.delta);
        assert!(d.strings().contains(&"0"));
    }

    #[test]
    fn comparison_bars_check_both_series() {
        let palette = Palette::default();
        assert!(comparison_bars(&names(&["A"]), &[1], &[], 480.0, &palette).is_err());
        assert!(comparison_bars(&names(&["A"]), &[], &[1], 480.0, &palette).is_err());
    }

    #[test]
    fn horizontal_bars_label_percentages() {
        let palette = Palette::default();
        let d = horizontal_bars(&[("AI Citability", 100), ("Schema", 40)], 460.0, &palette);
        assert_eq!(d.height, 2.0 * 28.0 + 20.0);
        let strings = d.strings();
        assert!(strings.contains(&"100%") && strings.contains(&"40%"));
        let fills: Vec<_> = rects(&d).iter().map(|r| r.width).collect();
        assert_eq!(fills, vec![280.0, 280.0, 280.0, 112.0]);
    }

    #[test]
    fn big_stats_are_centred_in_equal_cells() {
        let palette = Palette::default();
        let d = big_stat_row(&[("2B+", "users"), ("47%", "brands")], 460.0, &palette);
        let figures: Vec<_> = d.ops().iter().filter_map(PaintOp::as_text).filter(|t| t.size == 32.0).collect();
        assert_eq!(figures.len(), 2);
        assert!(figures[0].origin.x < 115.0 && figures[1].origin.x > 230.0);
    }
}

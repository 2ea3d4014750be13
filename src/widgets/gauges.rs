use super::{SiteLabels, bar_width, bold, regular};
use crate::config::Palette;
use crate::scoring::{percent_improvement, score_color, signed};
use geo_layout::{Drawing, Group, Paint, ShapeSink, TextAnchor};
use geo_types::{Color, Point};

/// A circular gauge: grey rim, coloured ring, white core with the score and
/// "/100", and a caption under the ring. Radii are `r`, `r - 4` and `r - 12`.
pub fn score_ring(
    score: i64,
    label: &str,
    color: Color,
    center: Point,
    radius: f32,
    label_size: f32,
    palette: &Palette,
) -> Group {
    let Point { x, y } = center;
    let mut g = Group::new();
    g.circle(x, y, radius, Paint::fill_and_stroke(palette.light_bg, palette.rule, 1.0));
    g.circle(x, y, radius - 4.0, Paint::fill(color));
    g.circle(x, y, radius - 12.0, Paint::fill(Color::WHITE));
    g.string(x, y + 2.0, &score.to_string(), bold(22.0, palette.text_primary), TextAnchor::Middle);
    g.string(x, y - 14.0, "/100", regular(8.0, palette.text_secondary), TextAnchor::Middle);
    g.string(
        x,
        y - radius - 16.0,
        label,
        bold(label_size, palette.text_primary),
        TextAnchor::Middle,
    );
    g
}

/// Upward (or, for losses, red) arrow with the signed point change above it.
pub fn delta_arrow(delta: i64, center: Point, palette: &Palette) -> Group {
    let Point { x, y } = center;
    let color = if delta > 0 { palette.delta } else { palette.danger };
    let mut g = Group::new();
    g.rect(x - 4.0, y - 15.0, 8.0, 20.0, Paint::fill(color));
    g.polygon(
        &[(x - 12.0, y + 5.0), (x + 12.0, y + 5.0), (x, y + 22.0)],
        Paint::fill(color),
    );
    g.string(x, y + 26.0, &signed(delta), bold(16.0, color), TextAnchor::Middle);
    g.string(x, y + 14.0, "points", regular(7.0, palette.text_secondary), TextAnchor::Middle);
    g
}

/// Cover hero: the two site rings with the delta arrow and the relative
/// improvement between them.
pub fn cover_visual(before: i64, after: i64, labels: SiteLabels<'_>, width: f32, palette: &Palette) -> Drawing {
    let mut d = Drawing::new(width, 160.0);
    d.add_group(score_ring(
        before,
        &format!("{} (Before)", labels.before.to_uppercase()),
        palette.before,
        Point::new(100.0, 90.0),
        42.0,
        9.0,
        palette,
    ));
    d.add_group(delta_arrow(after - before, Point::new(width / 2.0, 75.0), palette));
    d.add_group(score_ring(
        after,
        &format!("{} (After)", labels.after.to_uppercase()),
        palette.after,
        Point::new(width - 100.0, 90.0),
        42.0,
        9.0,
        palette,
    ));
    let pct = percent_improvement(before as f64, after as f64);
    d.string(
        width / 2.0,
        38.0,
        &format!("{}% improvement", signed(pct)),
        bold(11.0, palette.delta),
        TextAnchor::Middle,
    );
    d
}

/// A 230 × 60 before/after gauge for one category.
pub fn mini_gauge(name: &str, before: i64, after: i64, labels: SiteLabels<'_>, palette: &Palette) -> Drawing {
    const TRACK: f32 = 140.0;
    const BAR_X: f32 = 5.0;
    const BAR_H: f32 = 10.0;
    let mut d = Drawing::new(230.0, 60.0);
    let mid = d.height / 2.0;

    d.string(BAR_X, mid + 18.0, name, bold(8.0, palette.text_primary), TextAnchor::Start);
    d.rect(BAR_X, mid + 2.0, TRACK, BAR_H, Paint::fill_and_stroke(palette.light_bg, palette.rule, 0.5));
    d.rect(BAR_X, mid + 2.0, bar_width(before as f64, TRACK), BAR_H / 2.0, Paint::fill(palette.before));
    d.rect(
        BAR_X,
        mid + 2.0 + BAR_H / 2.0,
        bar_width(after as f64, TRACK),
        BAR_H / 2.0,
        Paint::fill(palette.after),
    );

    let score_x = BAR_X + TRACK + 6.0;
    d.string(score_x, mid + 8.0, &before.to_string(), regular(7.0, palette.before), TextAnchor::Start);
    d.string(score_x, mid + 1.0, &after.to_string(), regular(7.0, palette.after), TextAnchor::Start);

    let delta = after - before;
    d.string(
        BAR_X + TRACK + 28.0,
        mid + 4.0,
        &signed(delta),
        bold(9.0, palette.change(delta as f64)),
        TextAnchor::Start,
    );
    d.string(
        BAR_X,
        mid - 8.0,
        &format!("{} {before} \u{2192} {} {after}", labels.before, labels.after),
        regular(7.0, palette.text_secondary),
        TextAnchor::Start,
    );
    d
}

/// Before and after rings joined by a block arrow, for the sales deck.
/// Ring colours follow the score tone.
pub fn case_study_visual(before: i64, after: i64, width: f32, palette: &Palette) -> Drawing {
    let mut d = Drawing::new(width, 130.0);
    d.add_group(score_ring(
        before,
        "BEFORE",
        score_color(before as f64, palette),
        Point::new(100.0, 75.0),
        42.0,
        8.0,
        palette,
    ));

    let ax = width / 2.0;
    d.rect(ax - 30.0, 68.0, 60.0, 12.0, Paint::fill(palette.success));
    d.polygon(
        &[(ax + 30.0, 55.0), (ax + 30.0, 93.0), (ax + 55.0, 74.0)],
        Paint::fill(palette.success),
    );
    let pct = percent_improvement(before as f64, after as f64);
    d.string(
        ax,
        48.0,
        &format!("{}% improvement", signed(pct)),
        bold(10.0, palette.success),
        TextAnchor::Middle,
    );

    d.add_group(score_ring(
        after,
        "AFTER (Phase 1)",
        score_color(after as f64, palette),
        Point::new(width - 100.0, 75.0),
        42.0,
        8.0,
        palette,
    ));
    d
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_layout::output::PaintOp;

    fn radii(ops: &[PaintOp]) -> Vec<f32> {
        ops.iter()
            .filter_map(|op| match op {
                PaintOp::Circle { radius, .. } => Some(*radius),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn ring_radii_are_nested() {
        let palette = Palette::default();
        let ring = score_ring(67, "NEXT.JS (After)", palette.after, Point::new(412.0, 90.0), 42.0, 9.0, &palette);
        assert_eq!(radii(ring.ops()), vec![42.0, 38.0, 30.0]);
    }

    #[test]
    fn cover_visual_shows_scores_delta_and_percentage() {
        let palette = Palette::default();
        let d = cover_visual(35, 67, SiteLabels::new("Wix", "Next.js"), 512.0, &palette);
        let strings = d.strings();
        for expected in ["35", "67", "+32", "WIX (Before)", "NEXT.JS (After)", "+91% improvement"] {
            assert!(strings.contains(&expected), "missing {expected}: {strings:?}");
        }
        assert_eq!(d.height, 160.0);
    }

    #[test]
    fn widgets_are_deterministic() {
        let palette = Palette::default();
        let labels = SiteLabels::new("Wix", "Next.js");
        assert_eq!(
            cover_visual(35, 67, labels, 512.0, &palette),
            cover_visual(35, 67, labels, 512.0, &palette)
        );
        assert_eq!(
            mini_gauge("Technical GEO", 18, 90, labels, &palette),
            mini_gauge("Technical GEO", 18, 90, labels, &palette)
        );
    }

    #[test]
    fn mini_gauge_bars_scale_with_scores() {
        let palette = Palette::default();
        let d = mini_gauge("Technical GEO", 18, 90, SiteLabels::new("Wix", "Next.js"), &palette);
        let widths: Vec<f32> = d
            .ops()
            .iter()
            .filter_map(|op| match op {
                PaintOp::Rect { rect, .. } => Some(rect.width),
                _ => None,
            })
            .collect();
        assert_eq!(widths, vec![140.0, 0.18 * 140.0, 0.9 * 140.0]);
        assert!(d.strings().contains(&"+72"));
        assert!(d.strings().contains(&"Wix 18 -> Next.js 90"));
    }

    #[test]
    fn unchanged_category_shows_zero_delta() {
        let palette = Palette::default();
        let d = mini_gauge("Brand Authority", 42, 42, SiteLabels::new("Wix", "Next.js"), &palette);
        let delta = d.ops().iter().filter_map(PaintOp::as_text).find(|r| r.text == "0").unwrap();
        assert_eq!(delta.color, palette.text_secondary);
    }

    #[test]
    fn case_study_rings_follow_score_tone() {
        let palette = Palette::default();
        let d = case_study_visual(35, 67, 512.0, &palette);
        let fills: Vec<_> = d
            .ops()
            .iter()
            .filter_map(|op| match op {
                PaintOp::Circle { radius, paint, .. } if *radius == 38.0 => paint.fill,
                _ => None,
            })
            .collect();
        assert_eq!(fills, vec![palette.danger, palette.info]);
        assert!(d.strings().contains(&"+91% improvement"));
    }
}

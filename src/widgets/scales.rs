use super::{SiteLabels, bar_width, bold, regular};
use crate::config::{Milestone, Palette};
use crate::scoring::ScoreBand;
use geo_layout::{Drawing, Paint, ShapeSink, TextAnchor};
use geo_types::Color;

const BANDS: [ScoreBand; 5] = [
    ScoreBand::Critical,
    ScoreBand::Poor,
    ScoreBand::Fair,
    ScoreBand::Good,
    ScoreBand::Excellent,
];

/// A five-segment 0-100 scale with a marker above it for each site.
pub fn score_scale(before: i64, after: i64, labels: SiteLabels<'_>, width: f32, palette: &Palette) -> Drawing {
    const BAR_X: f32 = 30.0;
    const BAR_Y: f32 = 25.0;
    const BAR_H: f32 = 12.0;
    let bar_w = width - 60.0;
    let seg_w = bar_w / 5.0;
    let mut d = Drawing::new(width, 50.0);

    for (i, color) in palette.scale.iter().enumerate() {
        d.rect(BAR_X + i as f32 * seg_w, BAR_Y, seg_w, BAR_H, Paint::fill(*color));
    }
    for v in (0..=100).step_by(20) {
        let x = BAR_X + bar_width(v as f64, bar_w);
        d.string(x, BAR_Y - 10.0, &v.to_string(), regular(7.0, palette.text_secondary), TextAnchor::Middle);
    }

    for (name, score, color) in [
        (labels.before, before, palette.before),
        (labels.after, after, palette.after),
    ] {
        let x = BAR_X + bar_width(score as f64, bar_w);
        let base = BAR_Y + BAR_H;
        d.polygon(
            &[(x - 5.0, base + 2.0), (x + 5.0, base + 2.0), (x, base + 10.0)],
            Paint::fill(color),
        );
        d.string(x, base + 13.0, &format!("{name} ({score})"), bold(8.0, color), TextAnchor::Middle);
    }

    for (i, band) in BANDS.iter().enumerate() {
        let x = BAR_X + i as f32 * seg_w + seg_w / 2.0;
        d.string(x, BAR_Y + 2.0, band.label(), regular(6.0, Color::WHITE), TextAnchor::Middle);
    }
    d
}

/// A horizontal track with one dot per milestone. Each dot fills the track
/// up to its position, shows its label above and its projected score below.
/// Single-value scores are also printed inside the dot.
pub fn timeline(milestones: &[Milestone], width: f32, height: f32, palette: &Palette) -> Drawing {
    const BAR_X: f32 = 40.0;
    const Y: f32 = 55.0;
    const TRACK_H: f32 = 6.0;
    let bar_w = width - 80.0;
    let mut d = Drawing::new(width, height);

    d.rect(BAR_X, Y, bar_w, TRACK_H, Paint::fill(palette.medium_bg));
    for m in milestones {
        let x = BAR_X + m.fraction * bar_w;
        if m.fraction > 0.0 {
            d.rect(BAR_X, Y, m.fraction * bar_w, TRACK_H, Paint::fill(m.color));
        }
        d.circle(x, Y + 3.0, 8.0, Paint::fill_and_stroke(m.color, Color::WHITE, 2.0));
        let inside = if m.score.contains('-') { "" } else { m.score.as_str() };
        d.string(x, Y, inside, bold(7.0, Color::WHITE), TextAnchor::Middle);
        d.string(x, Y + 18.0, &m.label, bold(7.0, palette.text_primary), TextAnchor::Middle);
        d.string(x, Y - 18.0, &m.score, bold(8.0, m.color), TextAnchor::Middle);
    }

    let end_x = BAR_X + bar_w + 5.0;
    d.polygon(
        &[(end_x, Y), (end_x, Y + TRACK_H), (end_x + 10.0, Y + 3.0)],
        Paint::fill(palette.medium_bg),
    );
    d
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ComparisonConfig;
    use geo_layout::PaintOp;

    #[test]
    fn scale_markers_sit_at_proportional_positions() {
        let palette = Palette::default();
        let d = score_scale(35, 67, SiteLabels::new("Wix", "Next.js"), 480.0, &palette);
        let tips: Vec<f32> = d
            .ops()
            .iter()
            .filter_map(|op| match op {
                PaintOp::Polygon { points, .. } => Some(points[2].x),
                _ => None,
            })
            .collect();
        assert_eq!(tips, vec![30.0 + 0.35 * 420.0, 30.0 + 0.67 * 420.0]);
        let strings = d.strings();
        for expected in ["Wix (35)", "Next.js (67)", "Critical", "Excellent", "100"] {
            assert!(strings.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn timeline_dots_follow_fractions() {
        let config = ComparisonConfig::default();
        let d = timeline(&config.milestones, 480.0, 110.0, &config.palette);
        let xs: Vec<f32> = d
            .ops()
            .iter()
            .filter_map(|op| match op {
                PaintOp::Circle { center, .. } => Some(center.x),
                _ => None,
            })
            .collect();
        let expected: Vec<f32> = config.milestones.iter().map(|m| 40.0 + m.fraction * 400.0).collect();
        assert_eq!(xs, expected);
    }

    #[test]
    fn ranged_scores_are_not_printed_inside_dots() {
        let config = ComparisonConfig::default();
        let d = timeline(&config.milestones, 480.0, 110.0, &config.palette);
        let inside: Vec<&str> = d
            .ops()
            .iter()
            .filter_map(PaintOp::as_text)
            .filter(|t| t.color == Color::WHITE)
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(inside, vec!["67", "", "", "", ""]);
    }
}

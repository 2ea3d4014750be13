//! Vector widgets drawn into fixed-size [`Drawing`](geo_layout::Drawing)s.
//!
//! Every widget is a pure function of its inputs: calling it twice with the
//! same arguments yields equal drawings. Widgets that take parallel sequences
//! check their lengths up front and draw nothing on a mismatch.

mod charts;
mod gauges;
mod scales;

pub use charts::{Series, big_stat_row, comparison_bars, grouped_bar_chart, horizontal_bars};
pub use gauges::{case_study_visual, cover_visual, delta_arrow, mini_gauge, score_ring};
pub use scales::{score_scale, timeline};

use crate::error::WidgetError;
use geo_layout::TextStyle;
use geo_style::BuiltinFont;
use geo_types::Color;

/// Display names of the "before" and "after" sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteLabels<'a> {
    pub before: &'a str,
    pub after: &'a str,
}

impl<'a> SiteLabels<'a> {
    pub fn new(before: &'a str, after: &'a str) -> Self {
        Self { before, after }
    }
}

fn regular(size: f32, color: Color) -> TextStyle {
    TextStyle::new(BuiltinFont::Helvetica, size, color)
}

fn bold(size: f32, color: Color) -> TextStyle {
    TextStyle::new(BuiltinFont::HelveticaBold, size, color)
}

fn check_len(what: &'static str, expected: usize, found: usize) -> Result<(), WidgetError> {
    if expected == found {
        Ok(())
    } else {
        Err(WidgetError::LengthMismatch { what, expected, found })
    }
}

/// Width of a bar for `value` on a 0-100 track of `track` points.
fn bar_width(value: f64, track: f32) -> f32 {
    (value / 100.0) as f32 * track
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_width_is_proportional() {
        assert_eq!(bar_width(50.0, 280.0), 140.0);
        assert_eq!(bar_width(0.0, 280.0), 0.0);
        assert_eq!(bar_width(100.0, 332.0), 332.0);
    }

    #[test]
    fn length_check_reports_both_sides() {
        assert_eq!(check_len("scores", 6, 6), Ok(()));
        assert_eq!(
            check_len("scores", 6, 5),
            Err(WidgetError::LengthMismatch { what: "scores", expected: 6, found: 5 })
        );
    }
}

//! Score bands, display colours and the weighted composite.
//!
//! The two classifiers use different cut-offs and must stay separate: the
//! five-band label (`score_band`) and the four-tone colour (`score_tone`).
//! A score of 70 is labelled "Fair" but coloured as info, 85 is "Good" and
//! coloured as success.

use crate::config::Palette;
use crate::error::ReportError;
use geo_types::Color;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    Poor,
    Critical,
}

impl ScoreBand {
    pub fn label(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::Good => "Good",
            ScoreBand::Fair => "Fair",
            ScoreBand::Poor => "Poor",
            ScoreBand::Critical => "Critical",
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Total over every `f64`; NaN fails each comparison and lands in `Critical`.
pub fn score_band(score: f64) -> ScoreBand {
    if score >= 90.0 {
        ScoreBand::Excellent
    } else if score >= 75.0 {
        ScoreBand::Good
    } else if score >= 60.0 {
        ScoreBand::Fair
    } else if score >= 40.0 {
        ScoreBand::Poor
    } else {
        ScoreBand::Critical
    }
}

pub fn score_label(score: f64) -> &'static str {
    score_band(score).label()
}

/// Semantic colour family used for scores and status cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Success,
    Info,
    Warning,
    Danger,
}

/// Total over every `f64`; NaN lands in `Danger`.
pub fn score_tone(score: f64) -> Tone {
    if score >= 80.0 {
        Tone::Success
    } else if score >= 60.0 {
        Tone::Info
    } else if score >= 40.0 {
        Tone::Warning
    } else {
        Tone::Danger
    }
}

pub fn score_color(score: f64, palette: &Palette) -> Color {
    palette.tone(score_tone(score))
}

/// Light tint of [`score_color`], for cell and panel backgrounds.
pub fn score_background(score: f64, palette: &Palette) -> Color {
    palette.tone_light(score_tone(score))
}

/// Rounds to one decimal place, ties to even (19.25 becomes 19.2).
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

/// Signed point change with an explicit `+`; zero renders as an em dash.
pub fn format_delta(delta: i64) -> String {
    match delta {
        0 => "\u{2014}".to_string(),
        d if d > 0 => format!("+{d}"),
        d => d.to_string(),
    }
}

/// Like [`format_delta`] but zero renders as `0`.
pub fn signed(delta: i64) -> String {
    if delta > 0 {
        format!("+{delta}")
    } else {
        delta.to_string()
    }
}

/// One-decimal signed value; zero renders as `0.0`.
pub fn signed_decimal(value: f64) -> String {
    let value = round1(value);
    if value > 0.0 {
        format!("+{value:.1}")
    } else if value < 0.0 {
        format!("{value:.1}")
    } else {
        "0.0".to_string()
    }
}

/// Relative change from `before` to `after` in whole percent. Zero when
/// there is no baseline to compare against.
pub fn percent_improvement(before: f64, after: f64) -> i64 {
    if before > 0.0 {
        ((after - before) / before * 100.0).round_ties_even() as i64
    } else {
        0
    }
}

/// One scored category: baseline and improved scores (0-100) and the
/// category's weight in percent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRecord {
    pub category: String,
    pub baseline: u32,
    pub improved: u32,
    pub weight: u32,
}

impl ScoreRecord {
    pub fn new(category: impl Into<String>, baseline: u32, improved: u32, weight: u32) -> Self {
        Self {
            category: category.into(),
            baseline,
            improved,
            weight,
        }
    }

    pub fn delta(&self) -> i64 {
        self.improved as i64 - self.baseline as i64
    }

    pub fn weighted_baseline(&self) -> f64 {
        (self.baseline * self.weight) as f64 / 100.0
    }

    pub fn weighted_improved(&self) -> f64 {
        (self.improved * self.weight) as f64 / 100.0
    }

    /// The point change scaled by the category weight.
    pub fn weighted_delta(&self) -> f64 {
        (self.delta() * self.weight as i64) as f64 / 100.0
    }
}

/// Categories whose weights sum to exactly 100.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreCard {
    records: Vec<ScoreRecord>,
}

impl ScoreCard {
    pub fn new(records: Vec<ScoreRecord>) -> Result<Self, ReportError> {
        if records.is_empty() {
            return Err(ReportError::InvalidScoreCard("no categories".into()));
        }
        if let Some(record) = records
            .iter()
            .find(|r| r.baseline > 100 || r.improved > 100)
        {
            return Err(ReportError::InvalidScoreCard(format!(
                "scores for {} must be within 0-100",
                record.category
            )));
        }
        if let Some(record) = records.iter().find(|r| r.weight > 100) {
            return Err(ReportError::InvalidScoreCard(format!(
                "weight for {} must be within 0-100, got {}",
                record.category, record.weight
            )));
        }
        let total: u64 = records.iter().map(|r| u64::from(r.weight)).sum();
        if total != 100 {
            return Err(ReportError::InvalidScoreCard(format!(
                "weights sum to {total}, expected 100"
            )));
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }

    /// Σ baselineᵢ × weightᵢ / 100.
    pub fn baseline_composite(&self) -> f64 {
        Self::composite(self.records.iter().map(|r| r.baseline * r.weight))
    }

    /// Σ improvedᵢ × weightᵢ / 100.
    pub fn improved_composite(&self) -> f64 {
        Self::composite(self.records.iter().map(|r| r.improved * r.weight))
    }

    fn composite(products: impl Iterator<Item = u32>) -> f64 {
        products.sum::<u32>() as f64 / 100.0
    }

    /// The published, whole-number baseline score.
    pub fn baseline_score(&self) -> i64 {
        self.baseline_composite().round_ties_even() as i64
    }

    /// The published, whole-number improved score.
    pub fn improved_score(&self) -> i64 {
        self.improved_composite().round_ties_even() as i64
    }

    pub fn delta(&self) -> i64 {
        self.improved_score() - self.baseline_score()
    }

    pub fn percent_improvement(&self) -> i64 {
        percent_improvement(self.baseline_score() as f64, self.improved_score() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_card() -> ScoreCard {
        ScoreCard::new(vec![
            ScoreRecord::new("AI Citability", 38, 77, 25),
            ScoreRecord::new("Brand Authority", 42, 42, 20),
            ScoreRecord::new("Content E-E-A-T", 45, 74, 20),
            ScoreRecord::new("Technical GEO", 18, 90, 15),
            ScoreRecord::new("Schema & Structured Data", 12, 65, 10),
            ScoreRecord::new("Platform Optimization", 42, 42, 10),
        ])
        .unwrap()
    }

    #[test]
    fn label_and_tone_thresholds_stay_distinct() {
        assert_eq!(score_label(70.0), "Fair");
        assert_eq!(score_tone(70.0), Tone::Info);
        assert_eq!(score_label(85.0), "Good");
        assert_eq!(score_tone(85.0), Tone::Success);
        assert_eq!(score_label(78.0), "Good");
        assert_eq!(score_tone(78.0), Tone::Info);
    }

    #[test]
    fn band_edges() {
        let cases = [
            (90.0, ScoreBand::Excellent),
            (89.9, ScoreBand::Good),
            (75.0, ScoreBand::Good),
            (60.0, ScoreBand::Fair),
            (59.99, ScoreBand::Poor),
            (40.0, ScoreBand::Poor),
            (39.0, ScoreBand::Critical),
            (0.0, ScoreBand::Critical),
        ];
        for (score, band) in cases {
            assert_eq!(score_band(score), band, "score {score}");
        }
    }

    #[test]
    fn classifiers_are_total() {
        for score in [-5.0, 150.0, f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            let _ = score_band(score);
            let _ = score_tone(score);
        }
        assert_eq!(score_band(f64::NAN), ScoreBand::Critical);
        assert_eq!(score_tone(f64::NAN), Tone::Danger);
        assert_eq!(score_band(150.0), ScoreBand::Excellent);
        assert_eq!(score_tone(-5.0), Tone::Danger);
    }

    #[test]
    fn colours_follow_the_tone() {
        let palette = Palette::default();
        assert_eq!(score_color(85.0, &palette), palette.success);
        assert_eq!(score_color(67.0, &palette), palette.info);
        assert_eq!(score_color(42.0, &palette), palette.warning);
        assert_eq!(score_color(35.0, &palette), palette.danger);
        assert_eq!(score_background(35.0, &palette), palette.danger_light);
    }

    #[test]
    fn reference_composites() {
        let card = reference_card();
        assert!((card.baseline_composite() - 35.0).abs() < 1e-9);
        assert!((card.improved_composite() - 66.65).abs() < 1e-9);
        assert_eq!(card.baseline_score(), 35);
        assert_eq!(card.improved_score(), 67);
        assert_eq!(card.delta(), 32);
        assert_eq!(card.percent_improvement(), 91);
    }

    #[test]
    fn weights_must_sum_to_100() {
        let err = ScoreCard::new(vec![
            ScoreRecord::new("A", 10, 20, 60),
            ScoreRecord::new("B", 10, 20, 30),
        ])
        .unwrap_err();
        assert!(matches!(err, ReportError::InvalidScoreCard(msg) if msg.contains("90")));
        assert!(ScoreCard::new(Vec::new()).is_err());
        assert!(ScoreCard::new(vec![ScoreRecord::new("A", 101, 20, 100)]).is_err());
    }

    #[test]
    fn oversized_weights_are_rejected_without_overflow() {
        let err = ScoreCard::new(vec![
            ScoreRecord::new("A", 10, 20, u32::MAX),
            ScoreRecord::new("B", 10, 20, 101),
        ])
        .unwrap_err();
        assert!(matches!(err, ReportError::InvalidScoreCard(msg) if msg.contains("weight for A")));
    }

    #[test]
    fn whole_scores_round_ties_to_even() {
        let card = ScoreCard::new(vec![
            ScoreRecord::new("A", 25, 27, 50),
            ScoreRecord::new("B", 100, 100, 50),
        ])
        .unwrap();
        assert_eq!(card.baseline_composite(), 62.5);
        assert_eq!(card.baseline_score(), 62);
        assert_eq!(card.improved_composite(), 63.5);
        assert_eq!(card.improved_score(), 64);
    }

    #[test]
    fn delta_formatting_branches() {
        assert_eq!(format_delta(5), "+5");
        assert_eq!(format_delta(0), "\u{2014}");
        assert_eq!(format_delta(-3), "-3");
        assert_eq!(signed(0), "0");
        assert_eq!(signed(72), "+72");
    }

    #[test]
    fn one_decimal_rounding_ties_to_even() {
        assert_eq!(round1(19.25), 19.2);
        assert_eq!(round1(9.75), 9.8);
        assert_eq!(signed_decimal(19.25 - 9.5), "+9.8");
        assert_eq!(signed_decimal(0.0), "0.0");
        assert_eq!(signed_decimal(-1.25), "-1.2");
    }

    #[test]
    fn weighted_record_values() {
        let record = ScoreRecord::new("Technical GEO", 18, 90, 15);
        assert_eq!(record.delta(), 72);
        assert_eq!(record.weighted_baseline(), 2.7);
        assert_eq!(record.weighted_improved(), 13.5);
        assert_eq!(record.weighted_delta(), 10.8);
    }
}

//! Explicit configuration handed to the report builders.
//!
//! Everything a report draws from (scores, colours, page geometry, the
//! generation date) is carried in these values so that several differently
//! configured reports can be built in one process.

use crate::error::ReportError;
use crate::scoring::{ScoreCard, ScoreRecord, Tone};
use chrono::{Local, NaiveDate};
use geo_style::PageSetup;
use geo_types::Color;

/// Brand colours shared by every report.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub highlight: Color,
    pub success: Color,
    pub success_light: Color,
    pub warning: Color,
    pub warning_light: Color,
    pub danger: Color,
    pub danger_light: Color,
    pub info: Color,
    pub info_light: Color,
    pub light_bg: Color,
    pub medium_bg: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_light: Color,
    /// Hairlines: table grids, footer rules, bar outlines.
    pub rule: Color,
    /// Series colour for the "before" site.
    pub before: Color,
    /// Series colour for the "after" site.
    pub after: Color,
    /// Positive change.
    pub delta: Color,
    /// Segment fills of the 0-100 scale, lowest band first.
    pub scale: [Color; 5],
}

impl Default for Palette {
    fn default() -> Self {
        let danger = Color::rgb(0xd6, 0x30, 0x31);
        let warning = Color::rgb(0xfd, 0xcb, 0x6e);
        let success = Color::rgb(0x00, 0xb8, 0x94);
        Self {
            primary: Color::rgb(0x1a, 0x1a, 0x2e),
            secondary: Color::rgb(0x16, 0x21, 0x3e),
            accent: Color::rgb(0x0f, 0x34, 0x60),
            highlight: Color::rgb(0xe9, 0x45, 0x60),
            success,
            success_light: Color::rgb(0xe6, 0xf9, 0xf3),
            warning,
            warning_light: Color::rgb(0xfe, 0xf9, 0xe7),
            danger,
            danger_light: Color::rgb(0xfd, 0xe8, 0xe8),
            info: Color::rgb(0x09, 0x84, 0xe3),
            info_light: Color::rgb(0xe8, 0xf4, 0xfd),
            light_bg: Color::rgb(0xf8, 0xf9, 0xfa),
            medium_bg: Color::rgb(0xe9, 0xec, 0xef),
            text_primary: Color::rgb(0x2d, 0x34, 0x36),
            text_secondary: Color::rgb(0x63, 0x6e, 0x72),
            text_light: Color::rgb(0xb2, 0xbe, 0xc3),
            rule: Color::gray(0xd3),
            before: Color::rgb(0xc0, 0x39, 0x2b),
            after: Color::rgb(0x29, 0x80, 0xb9),
            delta: Color::rgb(0x27, 0xae, 0x60),
            scale: [
                danger,
                Color::rgb(0xe1, 0x70, 0x55),
                warning,
                Color::rgb(0x74, 0xb9, 0xff),
                success,
            ],
        }
    }
}

impl Palette {
    pub fn tone(&self, tone: Tone) -> Color {
        match tone {
            Tone::Success => self.success,
            Tone::Info => self.info,
            Tone::Warning => self.warning,
            Tone::Danger => self.danger,
        }
    }

    pub fn tone_light(&self, tone: Tone) -> Color {
        match tone {
            Tone::Success => self.success_light,
            Tone::Info => self.info_light,
            Tone::Warning => self.warning_light,
            Tone::Danger => self.danger_light,
        }
    }

    /// Green for gains, red for losses, grey for no change.
    pub fn change(&self, delta: f64) -> Color {
        if delta > 0.0 {
            self.delta
        } else if delta < 0.0 {
            self.danger
        } else {
            self.text_secondary
        }
    }
}

/// The date stamped into footers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunContext {
    pub generated_on: NaiveDate,
}

impl RunContext {
    pub fn new(generated_on: NaiveDate) -> Self {
        Self { generated_on }
    }

    pub fn today() -> Self {
        Self::new(Local::now().date_naive())
    }

    /// e.g. "February 26, 2026".
    pub fn long_date(&self) -> String {
        self.generated_on.format("%B %d, %Y").to_string()
    }

    /// e.g. "February 2026".
    pub fn month_year(&self) -> String {
        self.generated_on.format("%B %Y").to_string()
    }
}

/// A point on the roadmap timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Milestone {
    /// Position along the track, `0.0..=1.0`.
    pub fraction: f32,
    pub label: String,
    /// Projected score, a single value or a range such as "73-75".
    pub score: String,
    pub color: Color,
}

impl Milestone {
    pub fn new(fraction: f32, label: &str, score: &str, color: Color) -> Self {
        Self {
            fraction,
            label: label.to_string(),
            score: score.to_string(),
            color,
        }
    }
}

/// Inputs of the before/after comparison report.
#[derive(Debug, Clone)]
pub struct ComparisonConfig {
    pub title: String,
    pub subtitle: String,
    pub client: String,
    /// Short client name for the running header.
    pub client_short: String,
    pub analysis_date: String,
    pub before_label: String,
    pub after_label: String,
    /// Category scores; weights must sum to 100.
    pub categories: Vec<ScoreRecord>,
    /// Axis labels for the category chart, one per category.
    pub short_names: Vec<String>,
    pub milestones: Vec<Milestone>,
    pub palette: Palette,
    pub setup: PageSetup,
}

impl ComparisonConfig {
    /// Validates the category table.
    pub fn scorecard(&self) -> Result<ScoreCard, ReportError> {
        ScoreCard::new(self.categories.clone())
    }
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        let palette = Palette::default();
        let milestones = vec![
            Milestone::new(0.0, "Today", "67", palette.info),
            Milestone::new(0.17, "30 days", "73-75", Color::rgb(0x2e, 0xcc, 0x71)),
            Milestone::new(0.33, "60 days", "76-79", palette.delta),
            Milestone::new(0.50, "90 days", "80-83", palette.success),
            Milestone::new(1.0, "180 days", "85-88", Color::rgb(0x00, 0xa8, 0x78)),
        ];
        Self {
            title: "GEO Scoring Comparison".into(),
            subtitle: "Wix Site vs. New Next.js Site".into(),
            client: "Paragon Pool and Patio, Inc.".into(),
            client_short: "Paragon Pool & Spa".into(),
            analysis_date: "February 2026".into(),
            before_label: "Wix".into(),
            after_label: "Next.js".into(),
            categories: vec![
                ScoreRecord::new("AI Citability", 38, 77, 25),
                ScoreRecord::new("Brand Authority", 42, 42, 20),
                ScoreRecord::new("Content E-E-A-T", 45, 74, 20),
                ScoreRecord::new("Technical GEO", 18, 90, 15),
                ScoreRecord::new("Schema & Structured Data", 12, 65, 10),
                ScoreRecord::new("Platform Optimization", 42, 42, 10),
            ],
            short_names: ["Citability", "Brand Auth.", "E-E-A-T", "Technical", "Schema", "Platform"]
                .map(String::from)
                .to_vec(),
            milestones,
            palette,
            setup: PageSetup::default(),
        }
    }
}

/// Inputs shared by the four suite documents.
#[derive(Debug, Clone)]
pub struct SuiteConfig {
    pub version: String,
    /// Case-study composite before and after the rebuild.
    pub case_study: (u32, u32),
    pub palette: Palette,
    pub setup: PageSetup,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            version: "1.0".into(),
            case_study: (35, 67),
            palette: Palette::default(),
            setup: PageSetup::default(),
        }
    }
}

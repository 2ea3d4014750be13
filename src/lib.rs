//! GEO scoring reports rendered to PDF.
//!
//! A report is assembled as a [`Story`] of flowable blocks, paginated by
//! `geo-layout` and drawn by `geo-render-lopdf`. Two report families live
//! under [`reports`]: the Wix vs. Next.js comparison and the four-document
//! system suite.

pub mod config;
pub mod decorators;
pub mod error;
pub mod generator;
pub mod reports;
pub mod scoring;
pub mod story;
pub mod styles;
pub mod tables;
pub mod widgets;

pub use config::{ComparisonConfig, Milestone, Palette, RunContext, SuiteConfig};
pub use error::{ReportError, WidgetError};
pub use generator::{GenerationSummary, group_thousands, render, write_report};
pub use reports::Report;
pub use scoring::{ScoreBand, ScoreCard, ScoreRecord};
pub use story::Story;

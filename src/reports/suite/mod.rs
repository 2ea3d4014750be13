//! The four-document GEO system suite: overview, sales deck, methodology
//! guide and technical reference. All share one cover layout and running
//! chrome.

mod common;
mod methodology;
mod overview;
mod sales_deck;
mod technical;

pub use methodology::methodology;
pub use overview::overview;
pub use sales_deck::sales_deck;
pub use technical::technical_reference;

use crate::config::{RunContext, SuiteConfig};
use crate::error::ReportError;
use crate::generator::{GenerationSummary, write_report};
use crate::reports::Report;
use log::debug;
use std::path::Path;

pub type Builder = fn(&SuiteConfig, &RunContext) -> Result<Report, ReportError>;

/// File names and builders, in generation order.
pub const DOCUMENTS: [(&str, Builder); 4] = [
    ("GEO-System-Overview.pdf", overview),
    ("GEO-Sales-Deck.pdf", sales_deck),
    ("GEO-Methodology-Guide.pdf", methodology),
    ("GEO-Technical-Reference.pdf", technical_reference),
];

/// Builds and writes every suite document into `dir`, which must exist.
/// Stops at the first failure; files already written are left in place.
pub fn write_all(
    dir: &Path,
    config: &SuiteConfig,
    ctx: &RunContext,
) -> Result<Vec<GenerationSummary>, ReportError> {
    DOCUMENTS
        .iter()
        .map(|(file_name, build)| {
            debug!("Building {}", file_name);
            write_report(build(config, ctx)?, &dir.join(file_name))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use geo_layout::Flowable;

    fn ctx() -> RunContext {
        RunContext::new(NaiveDate::from_ymd_opt(2026, 2, 14).unwrap())
    }

    fn bookmarks(report: &Report) -> Vec<&str> {
        report
            .document
            .elements()
            .iter()
            .filter_map(|el| match el {
                Flowable::Bookmark { title, .. } => Some(title.as_str()),
                _ => None,
            })
            .collect()
    }

    fn paragraphs(report: &Report) -> Vec<&str> {
        report
            .document
            .elements()
            .iter()
            .filter_map(|el| match el {
                Flowable::Paragraph(p) => Some(p.markup.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn every_document_builds() {
        let config = SuiteConfig::default();
        for (name, build) in DOCUMENTS {
            let report = build(&config, &ctx()).unwrap();
            assert!(!report.document.elements().is_empty(), "{name} is empty");
            assert_eq!(report.info.author, None);
        }
    }

    #[test]
    fn overview_has_five_sections() {
        let report = overview(&SuiteConfig::default(), &ctx()).unwrap();
        assert_eq!(
            bookmarks(&report),
            vec![
                "1. The Paradigm Shift",
                "2. The Six GEO Dimensions",
                "3. The AI Search Platform Landscape",
                "4. The Four-Phase GEO Framework",
                "5. Why Now",
            ]
        );
        assert_eq!(report.info.title, "GEO System Overview");
    }

    #[test]
    fn cover_carries_title_lines_and_version() {
        let report = overview(&SuiteConfig::default(), &ctx()).unwrap();
        let text = paragraphs(&report);
        assert_eq!(text[0], "Generative Engine<br/>Optimization");
        assert_eq!(text[1], "A Complete System for AI Search Visibility");
        assert_eq!(text[2], "Version 1.0  |  February 2026");
    }

    #[test]
    fn guides_open_with_contents() {
        let methodology = methodology(&SuiteConfig::default(), &ctx()).unwrap();
        let marks = bookmarks(&methodology);
        assert_eq!(marks[0], "Contents");
        assert_eq!(marks.len(), 12);

        let technical = technical_reference(&SuiteConfig::default(), &ctx()).unwrap();
        let marks = bookmarks(&technical);
        assert_eq!(marks.len(), 13);
        assert_eq!(marks[12], "12. Research Sources");
    }

    #[test]
    fn sales_deck_uses_the_configured_case_study() {
        let config = SuiteConfig {
            case_study: (40, 70),
            ..SuiteConfig::default()
        };
        let report = sales_deck(&config, &ctx()).unwrap();
        let table = report
            .document
            .elements()
            .iter()
            .find_map(|el| match el {
                Flowable::Table(t) if t.rows()[0][0] == "Metric" => Some(t),
                _ => None,
            })
            .expect("case study table");
        assert_eq!(table.rows()[1], vec!["GEO Composite Score", "40/100", "70/100", "+75%"]);
    }

    #[test]
    fn write_all_produces_four_pdfs() {
        let dir = tempfile::tempdir().unwrap();
        let summaries = write_all(dir.path(), &SuiteConfig::default(), &ctx()).unwrap();
        let names: Vec<&str> = summaries.iter().map(|s| s.file_name.as_str()).collect();
        assert_eq!(names, DOCUMENTS.map(|(name, _)| name).to_vec());
        for summary in &summaries {
            assert!(summary.pages > 1);
            let bytes = std::fs::read(&summary.path).unwrap();
            assert!(bytes.starts_with(b"%PDF-"));
            assert_eq!(bytes.len() as u64, summary.bytes);
        }
    }
}

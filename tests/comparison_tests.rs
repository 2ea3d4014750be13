mod common;

use common::{TestResult, context, init_logger, render_report};
use geo_reports::reports::comparison;
use geo_reports::{ComparisonConfig, ReportError, ScoreRecord};

#[test]
fn comparison_renders_cover_and_running_chrome() -> TestResult {
    init_logger();
    let report = comparison::build(&ComparisonConfig::default(), &context())?;
    let pdf = render_report(report)?;

    assert!(pdf.bytes.starts_with(b"%PDF-"));
    let pages = pdf.page_count();
    assert!((10..=40).contains(&pages), "unexpected page count {pages}");

    let cover = pdf.page_text(1);
    assert!(cover.contains("Prepared for Paragon Pool and Patio, Inc."), "cover: {cover:?}");
    assert!(!cover.contains("Page 1"), "the cover has no running footer");

    let second = pdf.page_text(2);
    assert!(second.contains("Page 2"));
    assert!(second.contains("Generated February 14, 2026"), "page 2: {second:?}");
    assert!(second.contains("Confidential"));
    Ok(())
}

#[test]
fn comparison_outline_lists_the_nine_sections() -> TestResult {
    init_logger();
    let report = comparison::build(&ComparisonConfig::default(), &context())?;
    let pdf = render_report(report)?;
    assert_eq!(pdf.outline_count(), 9);
    Ok(())
}

#[test]
fn comparison_metadata_names_the_client() -> TestResult {
    let report = comparison::build(&ComparisonConfig::default(), &context())?;
    let pdf = render_report(report)?;
    assert_eq!(pdf.info(b"Title").as_deref(), Some("GEO Scoring Comparison"));
    assert_eq!(pdf.info(b"Author").as_deref(), Some("Paragon Pool and Patio, Inc."));
    Ok(())
}

#[test]
fn scores_flow_into_the_rendered_text() -> TestResult {
    let report = comparison::build(&ComparisonConfig::default(), &context())?;
    let pdf = render_report(report)?;

    let cover = pdf.page_text(1);
    for needle in ["35", "67", "+32"] {
        assert!(cover.contains(needle), "cover is missing {needle:?}: {cover:?}");
    }
    let text = pdf.text();
    for needle in ["Critical", "Fair"] {
        assert!(text.contains(needle), "missing {needle:?}");
    }
    Ok(())
}

#[test]
fn weights_that_do_not_sum_to_one_hundred_are_rejected() {
    let mut config = ComparisonConfig::default();
    config.categories[0] = ScoreRecord::new("AI Citability", 38, 77, 30);
    match comparison::build(&config, &context()) {
        Err(ReportError::InvalidScoreCard(msg)) => assert!(msg.contains("105"), "message: {msg}"),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("invalid score card was accepted"),
    }
}

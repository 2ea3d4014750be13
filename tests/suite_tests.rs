mod common;

use common::{GeneratedPdf, TestResult, context, init_logger, render_report};
use geo_reports::SuiteConfig;
use geo_reports::reports::suite::{self, DOCUMENTS};

#[test]
fn suite_writes_four_loadable_pdfs() -> TestResult {
    init_logger();
    let dir = tempfile::tempdir()?;
    let summaries = suite::write_all(dir.path(), &SuiteConfig::default(), &context())?;
    assert_eq!(summaries.len(), 4);

    for (summary, (name, _)) in summaries.iter().zip(DOCUMENTS) {
        assert_eq!(summary.file_name, name);
        let path = dir.path().join(name);
        assert_eq!(summary.path, path);
        let pdf = GeneratedPdf::from_bytes(std::fs::read(&path)?)?;
        assert_eq!(pdf.page_count(), summary.pages, "{name}");
        assert!(pdf.page_count() >= 3, "{name} has {} pages", pdf.page_count());
    }
    Ok(())
}

#[test]
fn every_page_carries_the_running_chrome() -> TestResult {
    init_logger();
    let pdf = render_report(suite::overview(&SuiteConfig::default(), &context())?)?;
    for page in 1..=pdf.page_count() as u32 {
        let text = pdf.page_text(page);
        assert!(text.contains("GEO System Overview"), "page {page}: {text:?}");
        assert!(text.contains("February 2026"), "page {page}");
        assert!(text.contains(&format!("Page {page}")), "page {page}");
    }
    Ok(())
}

#[test]
fn outlines_follow_the_section_headings() -> TestResult {
    let config = SuiteConfig::default();
    let expected: [(suite::Builder, i64); 4] = [
        (suite::overview, 5),
        (suite::sales_deck, 6),
        (suite::methodology, 12),
        (suite::technical_reference, 13),
    ];
    for (build, sections) in expected {
        let pdf = render_report(build(&config, &context())?)?;
        assert_eq!(pdf.outline_count(), sections);
    }
    Ok(())
}

#[test]
fn document_subject_is_the_cover_subtitle() -> TestResult {
    let pdf = render_report(suite::sales_deck(&SuiteConfig::default(), &context())?)?;
    assert_eq!(pdf.info(b"Title").as_deref(), Some("GEO Sales Deck"));
    assert_eq!(
        pdf.info(b"Subject").as_deref(),
        Some("How Generative Engine Optimization Drives Revenue in the AI Search Era")
    );
    assert_eq!(pdf.info(b"Author"), None);
    Ok(())
}

#[test]
fn missing_output_directory_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("not-there");
    let result = suite::write_all(&missing, &SuiteConfig::default(), &context());
    assert!(matches!(result, Err(geo_reports::ReportError::Io(_))));
}

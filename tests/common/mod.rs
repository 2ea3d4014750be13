#![allow(dead_code)]

use chrono::NaiveDate;
use geo_reports::{Report, RunContext, render};
use lopdf::Document as LopdfDocument;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Text of one page (1-based).
    pub fn page_text(&self, page: u32) -> String {
        self.doc.extract_text(&[page]).unwrap_or_default()
    }

    /// Text of every page, one page per line block.
    pub fn text(&self) -> String {
        let mut text = String::new();
        for page in 1..=self.page_count() as u32 {
            text.push_str(&self.page_text(page));
            text.push('\n');
        }
        text
    }

    /// Number of top-level outline entries, or zero without an outline.
    pub fn outline_count(&self) -> i64 {
        self.doc
            .catalog()
            .ok()
            .and_then(|c| c.get(b"Outlines").ok())
            .and_then(|o| o.as_reference().ok())
            .and_then(|id| self.doc.get_dictionary(id).ok())
            .and_then(|d| d.get(b"Count").ok())
            .and_then(|c| c.as_i64().ok())
            .unwrap_or(0)
    }

    /// A string entry of the `/Info` dictionary.
    pub fn info(&self, key: &[u8]) -> Option<String> {
        let info_id = self.doc.trailer.get(b"Info").ok()?.as_reference().ok()?;
        let info = self.doc.get_dictionary(info_id).ok()?;
        let value = info.get(key).ok()?.as_str().ok()?;
        Some(String::from_utf8_lossy(value).into_owned())
    }
}

/// A fixed generation date so dated chrome is predictable.
pub fn context() -> RunContext {
    RunContext::new(NaiveDate::from_ymd_opt(2026, 2, 14).unwrap())
}

pub fn render_report(report: Report) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let (bytes, _pages) = render(report)?;
    GeneratedPdf::from_bytes(bytes)
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

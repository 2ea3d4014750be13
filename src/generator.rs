use crate::error::ReportError;
use crate::reports::Report;
use geo_layout::LayoutEngine;
use geo_render_core::DocumentRenderer;
use geo_render_lopdf::LopdfRenderer;
use log::{debug, info};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// What was written for one report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationSummary {
    pub path: PathBuf,
    pub file_name: String,
    pub bytes: u64,
    pub kilobytes: f64,
    pub pages: usize,
}

impl GenerationSummary {
    fn new(path: &Path, bytes: u64, pages: usize) -> Self {
        Self {
            path: path.to_path_buf(),
            file_name: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            bytes,
            kilobytes: bytes as f64 / 1024.0,
            pages,
        }
    }
}

/// Lays the report out and renders it to PDF bytes, returning them with the
/// page count.
pub fn render(report: Report) -> Result<(Vec<u8>, usize), ReportError> {
    let Report {
        document,
        info,
        first_page,
        later_pages,
    } = report;
    let setup = document.setup;
    let blocks = document.elements().len();

    let pages = LayoutEngine::new(setup).paginate(document)?;
    debug!("Laid out {} blocks onto {} pages", blocks, pages.len());

    let mut renderer: Box<dyn DocumentRenderer> = Box::new(LopdfRenderer::new(&setup));
    renderer.begin_document(&info)?;
    for page in &pages {
        let decorator = if page.number == 1 {
            first_page.as_ref()
        } else {
            later_pages.as_ref()
        };
        renderer.render_page(page, decorator)?;
    }

    let mut bytes = Vec::new();
    renderer.finish(&mut bytes)?;
    Ok((bytes, pages.len()))
}

/// Renders the report fully in memory, then writes it to `path` in one call.
/// The parent directory must already exist.
pub fn write_report(report: Report, path: &Path) -> Result<GenerationSummary, ReportError> {
    let title = report.info.title.clone();
    let (bytes, pages) = render(report)?;
    std::fs::write(path, &bytes)?;
    info!("Wrote '{}' to {} ({} pages)", title, path.display(), pages);
    Ok(GenerationSummary::new(path, bytes.len() as u64, pages))
}

/// `1234567` becomes `1,234,567`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

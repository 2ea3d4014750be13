use geo_layout::LayoutError;
use geo_render_core::RenderError;
use thiserror::Error;

/// A widget was handed inputs it cannot draw.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WidgetError {
    #[error("{what} has {found} values, expected {expected}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },
}

/// A comprehensive error type for building and writing a report.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Widget failed: {0}")]
    Widget(#[from] WidgetError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Score card is invalid: {0}")]
    InvalidScoreCard(String),
}

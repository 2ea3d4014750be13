//! Core rendering abstractions for PDF generation.
//!
//! This crate provides the fundamental traits and types used by PDF rendering backends:
//! - `DocumentRenderer` trait for abstracting PDF writing operations
//! - `Canvas` and `PageDecorator` for per-page chrome painted outside the flow
//! - Error types for rendering operations

mod canvas;
mod error;
mod traits;
mod types;

pub use canvas::{Canvas, RecordingCanvas};
pub use error::RenderError;
pub use traits::{DocumentRenderer, PageDecorator};
pub use types::{DocumentInfo, PageInfo};

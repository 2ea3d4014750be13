//! PDF renderer using lopdf.
//!
//! Pages are painted into content streams of an in-memory `lopdf::Document`
//! using the standard-14 fonts, then the whole object graph is written out
//! in one pass.

mod canvas;
mod helpers;
mod renderer;

pub use canvas::PdfCanvas;
pub use helpers::{font_resource_name, text_string};
pub use renderer::LopdfRenderer;

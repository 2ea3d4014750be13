//! Report builders. Each returns a [`Report`]: the block list plus the page
//! chrome and metadata needed to render it.

pub mod comparison;
pub mod suite;

use geo_layout::Document;
use geo_render_core::{DocumentInfo, PageDecorator};

pub struct Report {
    pub document: Document,
    pub info: DocumentInfo,
    /// Chrome for page 1.
    pub first_page: Box<dyn PageDecorator>,
    /// Chrome for every page after the first.
    pub later_pages: Box<dyn PageDecorator>,
}


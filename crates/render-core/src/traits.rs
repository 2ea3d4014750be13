use crate::canvas::Canvas;
use crate::error::RenderError;
use crate::types::{DocumentInfo, PageInfo};
use geo_layout::LaidOutPage;
use std::io::Write;

/// Paints fixed page chrome (headers, footers, bars). Called once per page
/// before the page's flowed content.
pub trait PageDecorator {
    fn decorate(&self, page: &PageInfo, canvas: &mut dyn Canvas);
}

impl<F> PageDecorator for F
where
    F: Fn(&PageInfo, &mut dyn Canvas),
{
    fn decorate(&self, page: &PageInfo, canvas: &mut dyn Canvas) {
        self(page, canvas)
    }
}

/// A trait for document renderers, abstracting the PDF-writing primitives.
pub trait DocumentRenderer {
    fn begin_document(&mut self, info: &DocumentInfo) -> Result<(), RenderError>;

    fn render_page(
        &mut self,
        page: &LaidOutPage,
        decorator: &dyn PageDecorator,
    ) -> Result<(), RenderError>;

    fn finish(self: Box<Self>, writer: &mut dyn Write) -> Result<(), RenderError>;
}

//! The block-level vocabulary a document is assembled from.

use crate::drawing::Drawing;
use crate::table::Table;
use geo_style::StyleDescriptor;
use geo_types::Color;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Paragraph {
    /// Inline markup, see [`crate::markup`].
    pub markup: String,
    pub style: Arc<StyleDescriptor>,
}

impl Paragraph {
    pub fn new(markup: impl Into<String>, style: Arc<StyleDescriptor>) -> Self {
        Self {
            markup: markup.into(),
            style,
        }
    }
}

/// A full-width horizontal rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    pub thickness: f32,
    pub color: Color,
    pub space_before: f32,
    pub space_after: f32,
}

impl Rule {
    pub fn new(thickness: f32, color: Color) -> Self {
        Self {
            thickness,
            color,
            space_before: 1.0,
            space_after: 1.0,
        }
    }

    pub fn with_spacing(mut self, before: f32, after: f32) -> Self {
        self.space_before = before;
        self.space_after = after;
        self
    }
}

/// Blocks laid out next to each other, top-aligned, each in a column of the
/// given width. The group is centred and never split across pages.
#[derive(Debug, Clone)]
pub struct SideBySide {
    pub columns: Vec<(f32, Flowable)>,
}

#[derive(Debug, Clone)]
pub enum Flowable {
    Paragraph(Paragraph),
    Spacer(f32),
    Rule(Rule),
    Table(Table),
    Drawing(Drawing),
    SideBySide(SideBySide),
    /// Start a new page unless the current one is still empty.
    PageBreak,
    /// Start a new page only if less than this many points remain.
    CondPageBreak(f32),
    /// Children move to the next page together when they do not fit the
    /// remaining space but would fit on an empty page.
    KeepTogether(Vec<Flowable>),
    /// Zero-height marker that becomes a PDF outline entry pointing at the
    /// next block placed after it.
    Bookmark { title: String, level: u8 },
}

impl Flowable {
    pub fn kind(&self) -> &'static str {
        match self {
            Flowable::Paragraph(_) => "Paragraph",
            Flowable::Spacer(_) => "Spacer",
            Flowable::Rule(_) => "Rule",
            Flowable::Table(_) => "Table",
            Flowable::Drawing(_) => "Drawing",
            Flowable::SideBySide(_) => "SideBySide",
            Flowable::PageBreak => "PageBreak",
            Flowable::CondPageBreak(_) => "CondPageBreak",
            Flowable::KeepTogether(_) => "KeepTogether",
            Flowable::Bookmark { .. } => "Bookmark",
        }
    }
}

impl From<Paragraph> for Flowable {
    fn from(p: Paragraph) -> Self {
        Flowable::Paragraph(p)
    }
}

impl From<Table> for Flowable {
    fn from(t: Table) -> Self {
        Flowable::Table(t)
    }
}

impl From<Drawing> for Flowable {
    fn from(d: Drawing) -> Self {
        Flowable::Drawing(d)
    }
}

impl From<Rule> for Flowable {
    fn from(r: Rule) -> Self {
        Flowable::Rule(r)
    }
}

//! Append-only assembly of a report's block list.

use geo_layout::{Document, Drawing, Flowable, Paragraph, Rule, SideBySide, Table};
use geo_style::{PageSetup, StyleRegistry, StyleRole};
use geo_types::Color;

/// Builds the ordered list of blocks a report flows onto its pages.
///
/// Every paragraph is styled by role through the registry the story was
/// created with, so a report cannot reference a style that does not exist.
#[derive(Debug, Clone)]
pub struct Story {
    styles: StyleRegistry,
    elements: Vec<Flowable>,
}

impl Story {
    pub fn new(styles: StyleRegistry) -> Self {
        Self {
            styles,
            elements: Vec::new(),
        }
    }

    pub fn styles(&self) -> &StyleRegistry {
        &self.styles
    }

    pub fn elements(&self) -> &[Flowable] {
        &self.elements
    }

    pub fn push(&mut self, element: impl Into<Flowable>) -> &mut Self {
        self.elements.push(element.into());
        self
    }

    pub fn paragraph(&mut self, role: StyleRole, markup: impl Into<String>) -> &mut Self {
        let style = self.styles.get(role).clone();
        self.push(Paragraph::new(markup, style))
    }

    pub fn body(&mut self, markup: impl Into<String>) -> &mut Self {
        self.paragraph(StyleRole::Body, markup)
    }

    pub fn body_large(&mut self, markup: impl Into<String>) -> &mut Self {
        self.paragraph(StyleRole::BodyLarge, markup)
    }

    /// A bullet point; the bullet glyph is prepended.
    pub fn bullet(&mut self, markup: impl AsRef<str>) -> &mut Self {
        self.paragraph(StyleRole::Bullet, format!("&#8226;  {}", markup.as_ref()))
    }

    pub fn callout(&mut self, markup: impl Into<String>) -> &mut Self {
        self.paragraph(StyleRole::Callout, markup)
    }

    pub fn small(&mut self, markup: impl Into<String>) -> &mut Self {
        self.paragraph(StyleRole::Small, markup)
    }

    pub fn spacer(&mut self, height: f32) -> &mut Self {
        self.push(Flowable::Spacer(height))
    }

    pub fn rule(&mut self, thickness: f32, color: Color, space_after: f32) -> &mut Self {
        self.push(Rule::new(thickness, color).with_spacing(1.0, space_after))
    }

    pub fn table(&mut self, table: Table) -> &mut Self {
        self.push(table)
    }

    pub fn drawing(&mut self, drawing: Drawing) -> &mut Self {
        self.push(drawing)
    }

    /// Blocks placed next to each other, each in a column of the given width.
    pub fn side_by_side(&mut self, columns: Vec<(f32, Flowable)>) -> &mut Self {
        self.push(Flowable::SideBySide(SideBySide { columns }))
    }

    pub fn page_break(&mut self) -> &mut Self {
        self.push(Flowable::PageBreak)
    }

    /// Breaks the page only when less than `height` points remain.
    pub fn cond_page_break(&mut self, height: f32) -> &mut Self {
        self.push(Flowable::CondPageBreak(height))
    }

    /// Collects whatever `build` appends into one group that is never split.
    pub fn keep_together(&mut self, build: impl FnOnce(&mut Story)) -> &mut Self {
        let mut inner = Story::new(self.styles.clone());
        build(&mut inner);
        self.push(Flowable::KeepTogether(inner.elements))
    }

    /// Marks the next block as an outline (bookmark) target.
    pub fn bookmark(&mut self, title: impl Into<String>, level: u8) -> &mut Self {
        self.push(Flowable::Bookmark {
            title: title.into(),
            level,
        })
    }

    pub fn into_document(self, title: impl Into<String>, setup: PageSetup) -> Document {
        let mut document = Document::new(title, setup);
        document.extend(self.elements);
        document
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styles::comparison_styles;

    #[test]
    fn paragraphs_take_the_registry_style_for_their_role() {
        let mut story = Story::new(comparison_styles());
        story.body("Hello").bullet("Point");
        match &story.elements()[..] {
            [Flowable::Paragraph(body), Flowable::Paragraph(bullet)] => {
                assert_eq!(body.style.name, "Body");
                assert_eq!(bullet.style.name, "Bullet");
                assert_eq!(bullet.markup, "&#8226;  Point");
            }
            other => panic!("unexpected elements: {other:?}"),
        }
    }

    #[test]
    fn keep_together_wraps_the_inner_blocks() {
        let mut story = Story::new(comparison_styles());
        story
            .spacer(10.0)
            .keep_together(|s| {
                s.paragraph(StyleRole::SubHeader, "Tier 3").spacer(4.0);
            })
            .page_break();
        let kinds: Vec<&str> = story.elements().iter().map(Flowable::kind).collect();
        assert_eq!(kinds, vec!["Spacer", "KeepTogether", "PageBreak"]);
        match &story.elements()[1] {
            Flowable::KeepTogether(inner) => assert_eq!(inner.len(), 2),
            _ => unreachable!(),
        }
    }

    #[test]
    fn document_keeps_block_order() {
        let mut story = Story::new(comparison_styles());
        story.bookmark("Section 1", 1).body("a").cond_page_break(252.0);
        let doc = story.into_document("Report", PageSetup::default());
        let kinds: Vec<&str> = doc.elements().iter().map(Flowable::kind).collect();
        assert_eq!(kinds, vec!["Bookmark", "Paragraph", "CondPageBreak"]);
        assert_eq!(doc.title, "Report");
    }
}

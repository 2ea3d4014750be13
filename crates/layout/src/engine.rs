//! Single-frame pagination.

use crate::algorithms::pagination::check_child_fit;
use crate::document::Document;
use crate::elements::Flowable;
use crate::nodes::{LayoutNode, SplitOutcome, build_node};
use crate::output::{LaidOutPage, OutlineEntry, PaintOp};
use crate::LayoutError;
use geo_style::PageSetup;
use geo_types::Rect;
use log::{debug, info};
use std::collections::VecDeque;

enum Pending {
    Flowable(Flowable),
    Node(Box<dyn LayoutNode>),
}

struct PageCursor {
    frame: Rect,
    used: f32,
    placed: bool,
    ops: Vec<PaintOp>,
    outline: Vec<OutlineEntry>,
    pending_bookmarks: Vec<(String, u8)>,
    pages: Vec<LaidOutPage>,
}

impl PageCursor {
    fn new(frame: Rect) -> Self {
        Self {
            frame,
            used: 0.0,
            placed: false,
            ops: Vec::new(),
            outline: Vec::new(),
            pending_bookmarks: Vec::new(),
            pages: Vec::new(),
        }
    }

    fn remaining(&self) -> f32 {
        check_child_fit(self.used, 0.0, self.frame.height).remaining_height
    }

    fn fits(&self, height: f32) -> bool {
        !check_child_fit(self.used, height, self.frame.height).should_break
    }

    fn top(&self) -> f32 {
        self.frame.top() - self.used
    }

    fn new_page(&mut self) {
        let number = self.pages.len() + 1;
        debug!("Closing page {} with {} paint ops", number, self.ops.len());
        self.pages.push(LaidOutPage {
            number,
            ops: std::mem::take(&mut self.ops),
            outline: std::mem::take(&mut self.outline),
        });
        self.used = 0.0;
        self.placed = false;
    }

    fn place(&mut self, node: &dyn LayoutNode, space_before: f32) {
        self.used += space_before;
        self.flush_bookmarks();
        node.paint(self.frame.x, self.top(), &mut self.ops);
        self.used += node.height() + node.space_after();
        self.placed = true;
    }

    fn flush_bookmarks(&mut self) {
        let y = self.top();
        for (title, level) in self.pending_bookmarks.drain(..) {
            self.outline.push(OutlineEntry { title, level, y });
        }
    }

    fn finish(mut self) -> Vec<LaidOutPage> {
        self.flush_bookmarks();
        if self.placed || !self.ops.is_empty() || !self.outline.is_empty() || self.pages.is_empty() {
            self.new_page();
        }
        self.pages
    }
}

/// Flows a document's blocks into the content frame of consecutive pages.
pub struct LayoutEngine {
    setup: PageSetup,
}

impl LayoutEngine {
    pub fn new(setup: PageSetup) -> Self {
        Self { setup }
    }

    pub fn paginate(&self, document: Document) -> Result<Vec<LaidOutPage>, LayoutError> {
        let frame = self.setup.frame();
        let mut cursor = PageCursor::new(frame);
        let mut queue: VecDeque<Pending> = document
            .into_elements()
            .into_iter()
            .map(Pending::Flowable)
            .collect();

        while let Some(item) = queue.pop_front() {
            match item {
                Pending::Flowable(Flowable::PageBreak) => {
                    if cursor.placed {
                        cursor.new_page();
                    }
                }
                Pending::Flowable(Flowable::CondPageBreak(height)) => {
                    if cursor.placed && cursor.remaining() < height {
                        debug!(
                            "Conditional break: {:.1}pt left, {:.1}pt requested",
                            cursor.remaining(),
                            height
                        );
                        cursor.new_page();
                    }
                }
                Pending::Flowable(Flowable::Bookmark { title, level }) => {
                    cursor.pending_bookmarks.push((title, level));
                }
                Pending::Flowable(Flowable::KeepTogether(children)) => {
                    let (nodes, lead, height) = self.measure_group(children, frame.width)?;
                    let needed = if cursor.placed { lead + height } else { height };
                    if cursor.placed && !cursor.fits(needed) && height <= frame.height {
                        debug!("Keep-together group of {:.1}pt moved to a new page", height);
                        cursor.new_page();
                    }
                    for pending in nodes.into_iter().rev() {
                        queue.push_front(pending);
                    }
                }
                Pending::Flowable(flowable) => {
                    let node = build_node(flowable, frame.width)?;
                    self.place(node, &mut cursor)?;
                }
                Pending::Node(node) => self.place(node, &mut cursor)?,
            }
        }

        let pages = cursor.finish();
        info!("Laid out {} page(s)", pages.len());
        Ok(pages)
    }

    fn measure_group(
        &self,
        children: Vec<Flowable>,
        width: f32,
    ) -> Result<(Vec<Pending>, f32, f32), LayoutError> {
        // `lead` is the first block's space_before, dropped at the top of a page.
        let mut lead = None;
        let mut height = 0.0;
        let mut pending = Vec::with_capacity(children.len());
        for child in children {
            match child {
                control @ (Flowable::PageBreak
                | Flowable::CondPageBreak(_)
                | Flowable::KeepTogether(_)
                | Flowable::Bookmark { .. }) => pending.push(Pending::Flowable(control)),
                content => {
                    let node = build_node(content, width)?;
                    match lead {
                        None => lead = Some(node.space_before()),
                        Some(_) => height += node.space_before(),
                    }
                    height += node.height() + node.space_after();
                    pending.push(Pending::Node(node));
                }
            }
        }
        Ok((pending, lead.unwrap_or(0.0), height))
    }

    fn place(
        &self,
        mut node: Box<dyn LayoutNode>,
        cursor: &mut PageCursor,
    ) -> Result<(), LayoutError> {
        loop {
            let before = if cursor.placed { node.space_before() } else { 0.0 };
            if cursor.fits(before + node.height()) {
                cursor.place(node.as_ref(), before);
                return Ok(());
            }

            let available = cursor.remaining() - before;
            if available > 0.0 {
                match node.split(available) {
                    SplitOutcome::Split(head, tail) => {
                        debug!("Split {} across a page boundary", head.kind());
                        cursor.place(head.as_ref(), before);
                        cursor.new_page();
                        node = tail;
                        continue;
                    }
                    SplitOutcome::Consumed => {
                        if cursor.placed {
                            cursor.new_page();
                        }
                        return Ok(());
                    }
                    SplitOutcome::Whole(whole) => node = whole,
                }
            }

            if !cursor.placed {
                return Err(LayoutError::ElementTooLarge(
                    node.height(),
                    cursor.frame.height,
                ));
            }
            cursor.new_page();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drawing::{Drawing, ShapeSink};
    use crate::elements::Paragraph;
    use crate::output::Paint;
    use crate::table::Table;
    use geo_style::{
        FontFamily, FontStyle, FontWeight, Margins, StyleDescriptor, TextAlign,
    };
    use geo_types::Color;
    use std::sync::Arc;

    fn body() -> Arc<StyleDescriptor> {
        Arc::new(StyleDescriptor {
            name: "Body",
            family: FontFamily::Helvetica,
            weight: FontWeight::Regular,
            style: FontStyle::Normal,
            size: 10.0,
            leading: 14.0,
            color: Color::BLACK,
            space_before: 0.0,
            space_after: 0.0,
            alignment: TextAlign::Left,
            left_indent: 0.0,
            background: None,
            padding: Margins::default(),
        })
    }

    fn block(height: f32) -> Flowable {
        let mut d = Drawing::new(100.0, height);
        d.rect(0.0, 0.0, 100.0, height, Paint::fill(Color::BLACK));
        Flowable::Drawing(d)
    }

    fn run(elements: Vec<Flowable>) -> Result<Vec<LaidOutPage>, LayoutError> {
        let mut doc = Document::new("test", PageSetup::default());
        doc.extend(elements);
        LayoutEngine::new(PageSetup::default()).paginate(doc)
    }

    #[test]
    fn page_breaks_collapse_on_empty_pages() {
        let pages = run(vec![
            block(10.0),
            Flowable::PageBreak,
            Flowable::PageBreak,
            block(10.0),
        ])
        .unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1].number, 2);
    }

    #[test]
    fn empty_document_still_has_one_page() {
        assert_eq!(run(vec![]).unwrap().len(), 1);
    }

    #[test]
    fn conditional_break_only_when_space_is_short() {
        let pages = run(vec![
            block(500.0),
            Flowable::CondPageBreak(100.0),
            block(10.0),
        ])
        .unwrap();
        assert_eq!(pages.len(), 1);

        let pages = run(vec![
            block(600.0),
            Flowable::CondPageBreak(100.0),
            block(10.0),
        ])
        .unwrap();
        assert_eq!(pages.len(), 2);
    }

    #[test]
    fn keep_together_moves_whole_group() {
        let pages = run(vec![
            block(600.0),
            Flowable::KeepTogether(vec![block(40.0), block(60.0)]),
        ])
        .unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].ops.len(), 1);
        assert_eq!(pages[1].ops.len(), 2);
    }

    #[test]
    fn keep_together_counts_the_leading_heading_space() {
        let heading = Arc::new(StyleDescriptor {
            name: "SubHeader",
            space_before: 20.0,
            ..(*body()).clone()
        });
        // 600 + 14 + 50 fits the 682pt frame, but not with the 20pt gap above the heading.
        let pages = run(vec![
            block(600.0),
            Flowable::KeepTogether(vec![
                Flowable::Paragraph(Paragraph::new("Tier 3", heading)),
                block(50.0),
            ]),
        ])
        .unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].ops.len(), 1);
        assert_eq!(pages[0].text_runs().count(), 0);
        let moved: Vec<&str> = pages[1].text_runs().map(|r| r.text.as_str()).collect();
        assert_eq!(moved, ["Tier 3"]);
        assert_eq!(pages[1].ops.len(), 2);
    }

    #[test]
    fn oversized_unsplittable_block_fails() {
        let err = run(vec![block(900.0)]).unwrap_err();
        assert!(matches!(err, LayoutError::ElementTooLarge(h, _) if h == 900.0));
    }

    #[test]
    fn long_paragraph_continues_on_next_page() {
        let text = vec!["lorem ipsum dolor sit amet"; 400].join(" ");
        let pages = run(vec![Flowable::Paragraph(Paragraph::new(text, body()))]).unwrap();
        assert!(pages.len() >= 2);
        let lines_per_page = (682.0f32 / 14.0).floor() as usize;
        assert_eq!(pages[0].text_runs().count(), lines_per_page);
    }

    #[test]
    fn tables_split_between_rows() {
        let rows: Vec<Vec<String>> = (0..120)
            .map(|i| vec![format!("row {i}"), "value".to_string()])
            .collect();
        let table = Table::new(rows, vec![200.0, 100.0]).unwrap();
        let pages = run(vec![Flowable::Table(table)]).unwrap();
        assert!(pages.len() >= 2);
        let first_page_text: Vec<&str> = pages[0].text_runs().map(|r| r.text.as_str()).collect();
        assert_eq!(first_page_text[0], "row 0");
        let second_page_text: Vec<&str> = pages[1].text_runs().map(|r| r.text.as_str()).collect();
        assert!(second_page_text[0].starts_with("row "));
        assert_ne!(second_page_text[0], "row 0");
    }

    #[test]
    fn bookmarks_attach_to_the_next_placed_block() {
        let pages = run(vec![
            block(600.0),
            Flowable::Bookmark {
                title: "Section 2".into(),
                level: 1,
            },
            block(100.0),
        ])
        .unwrap();
        assert_eq!(pages.len(), 2);
        assert!(pages[0].outline.is_empty());
        assert_eq!(
            pages[1].outline,
            vec![OutlineEntry {
                title: "Section 2".into(),
                level: 1,
                y: 737.0
            }]
        );
    }

    #[test]
    fn content_starts_at_frame_top() {
        let pages = run(vec![block(20.0)]).unwrap();
        match &pages[0].ops[0] {
            PaintOp::Rect { rect, .. } => {
                assert_eq!(rect.x, 50.0);
                assert_eq!(rect.top(), 792.0 - 55.0);
            }
            other => panic!("unexpected op {other:?}"),
        }
    }
}

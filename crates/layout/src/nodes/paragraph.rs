use super::{LayoutNode, SplitOutcome};
use crate::elements::Paragraph;
use crate::fonts;
use crate::markup::{self, SpanStyle};
use crate::output::{Paint, PaintOp, TextRun};
use crate::text::{LineLayout, break_lines};
use geo_style::StyleDescriptor;
use geo_types::{Point, Rect};
use std::sync::Arc;

#[derive(Debug)]
pub(crate) struct ParagraphNode {
    lines: Vec<LineLayout>,
    style: Arc<StyleDescriptor>,
    width: f32,
    /// Holds the paragraph's opening edge (top padding, space before).
    first: bool,
    /// Holds the closing edge (bottom padding, space after).
    last: bool,
}

impl ParagraphNode {
    pub fn build(paragraph: &Paragraph, width: f32) -> Self {
        let style = &paragraph.style;
        let base = SpanStyle {
            font: style.font(),
            color: style.color,
        };
        let items = markup::parse_inline(&paragraph.markup, base);
        let text_width =
            (width - style.left_indent - style.padding.left - style.padding.right).max(1.0);
        let lines = break_lines(&items, style.size, text_width, style.alignment);
        Self {
            lines,
            style: Arc::clone(style),
            width,
            first: true,
            last: true,
        }
    }

    fn pad_top(&self) -> f32 {
        if self.first { self.style.padding.top } else { 0.0 }
    }

    fn pad_bottom(&self) -> f32 {
        if self.last { self.style.padding.bottom } else { 0.0 }
    }
}

impl LayoutNode for ParagraphNode {
    fn kind(&self) -> &'static str {
        "Paragraph"
    }

    fn height(&self) -> f32 {
        self.pad_top() + self.lines.len() as f32 * self.style.leading + self.pad_bottom()
    }

    fn space_before(&self) -> f32 {
        if self.first { self.style.space_before } else { 0.0 }
    }

    fn space_after(&self) -> f32 {
        if self.last { self.style.space_after } else { 0.0 }
    }

    fn split(mut self: Box<Self>, available: f32) -> SplitOutcome {
        let room = available - self.pad_top();
        if room < self.style.leading {
            return SplitOutcome::Whole(self);
        }
        let fit = (room / self.style.leading + 0.001).floor() as usize;
        if fit == 0 || fit >= self.lines.len() {
            return SplitOutcome::Whole(self);
        }
        let rest = self.lines.split_off(fit);
        let tail = ParagraphNode {
            lines: rest,
            style: Arc::clone(&self.style),
            width: self.width,
            first: false,
            last: self.last,
        };
        self.last = false;
        SplitOutcome::Split(self, Box::new(tail))
    }

    fn paint(&self, x: f32, top: f32, ops: &mut Vec<PaintOp>) {
        let style = &self.style;
        let height = self.height();
        if let Some(bg) = style.background {
            ops.push(PaintOp::Rect {
                rect: Rect::new(
                    x + style.left_indent,
                    top - height,
                    self.width - style.left_indent,
                    height,
                ),
                paint: Paint::fill(bg),
            });
        }

        let text_left = x + style.left_indent + style.padding.left;
        let mut line_top = top - self.pad_top();
        for line in &self.lines {
            let baseline = line_top - style.leading
                + (style.leading - style.size) / 2.0
                + fonts::DESCENT * style.size;
            for fragment in &line.fragments {
                ops.push(PaintOp::Text(TextRun {
                    origin: Point::new(text_left + line.offset + fragment.x, baseline),
                    text: fragment.text.clone(),
                    font: fragment.style.font,
                    size: style.size,
                    color: fragment.style.color,
                    word_spacing: line.word_spacing,
                }));
            }
            line_top -= style.leading;
        }
    }
}

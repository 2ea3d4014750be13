//! Measured blocks ready to be placed on a page.

mod columns;
mod paragraph;
mod simple;
mod table;

use crate::elements::Flowable;
use crate::output::PaintOp;
use crate::LayoutError;

pub(crate) use columns::ColumnsNode;
pub(crate) use paragraph::ParagraphNode;
pub(crate) use simple::{DrawingNode, RuleNode, SpacerNode};
pub(crate) use table::TableNode;

pub(crate) enum SplitOutcome {
    /// The node cannot be divided at this height.
    Whole(Box<dyn LayoutNode>),
    /// First part fits the offered height; the rest continues on the next page.
    Split(Box<dyn LayoutNode>, Box<dyn LayoutNode>),
    /// The node is satisfied by the end of the page and leaves nothing behind.
    Consumed,
}

pub(crate) trait LayoutNode {
    fn kind(&self) -> &'static str;

    fn height(&self) -> f32;

    fn space_before(&self) -> f32 {
        0.0
    }

    fn space_after(&self) -> f32 {
        0.0
    }

    fn split(self: Box<Self>, available: f32) -> SplitOutcome;

    /// Appends paint operations with the node's top-left corner at
    /// (`x`, `top`) in page coordinates.
    fn paint(&self, x: f32, top: f32, ops: &mut Vec<PaintOp>);
}

/// Measures a content block at the given width.
pub(crate) fn build_node(
    flowable: Flowable,
    width: f32,
) -> Result<Box<dyn LayoutNode>, LayoutError> {
    Ok(match flowable {
        Flowable::Paragraph(p) => Box::new(ParagraphNode::build(&p, width)),
        Flowable::Spacer(h) => Box::new(SpacerNode::new(h)),
        Flowable::Rule(rule) => Box::new(RuleNode::new(rule, width)),
        Flowable::Table(table) => Box::new(TableNode::build(&table, width)),
        Flowable::Drawing(drawing) => Box::new(DrawingNode::new(drawing)),
        Flowable::SideBySide(group) => Box::new(ColumnsNode::build(group, width)?),
        other => return Err(LayoutError::UnsupportedNesting(other.kind())),
    })
}

use super::{LayoutNode, SplitOutcome, build_node};
use crate::elements::SideBySide;
use crate::output::PaintOp;
use crate::LayoutError;

pub(crate) struct ColumnsNode {
    children: Vec<(f32, Box<dyn LayoutNode>)>,
    x_offset: f32,
}

impl ColumnsNode {
    pub fn build(group: SideBySide, available_width: f32) -> Result<Self, LayoutError> {
        let total: f32 = group.columns.iter().map(|(w, _)| *w).sum();
        let mut offset = 0.0;
        let mut children = Vec::with_capacity(group.columns.len());
        for (width, flowable) in group.columns {
            children.push((offset, build_node(flowable, width)?));
            offset += width;
        }
        Ok(Self {
            children,
            x_offset: ((available_width - total) / 2.0).max(0.0),
        })
    }
}

impl LayoutNode for ColumnsNode {
    fn kind(&self) -> &'static str {
        "SideBySide"
    }

    fn height(&self) -> f32 {
        self.children
            .iter()
            .map(|(_, child)| child.height())
            .fold(0.0, f32::max)
    }

    fn split(self: Box<Self>, _available: f32) -> SplitOutcome {
        SplitOutcome::Whole(self)
    }

    fn paint(&self, x: f32, top: f32, ops: &mut Vec<PaintOp>) {
        for (offset, child) in &self.children {
            child.paint(x + self.x_offset + offset, top, ops);
        }
    }
}

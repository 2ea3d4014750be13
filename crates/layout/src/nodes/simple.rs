use super::{LayoutNode, SplitOutcome};
use crate::drawing::Drawing;
use crate::elements::Rule;
use crate::output::{PaintOp, Stroke};
use geo_types::Point;

#[derive(Debug)]
pub(crate) struct SpacerNode {
    height: f32,
}

impl SpacerNode {
    pub fn new(height: f32) -> Self {
        Self {
            height: height.max(0.0),
        }
    }
}

impl LayoutNode for SpacerNode {
    fn kind(&self) -> &'static str {
        "Spacer"
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn split(self: Box<Self>, _available: f32) -> SplitOutcome {
        SplitOutcome::Consumed
    }

    fn paint(&self, _x: f32, _top: f32, _ops: &mut Vec<PaintOp>) {}
}

#[derive(Debug)]
pub(crate) struct RuleNode {
    rule: Rule,
    width: f32,
}

impl RuleNode {
    pub fn new(rule: Rule, width: f32) -> Self {
        Self { rule, width }
    }
}

impl LayoutNode for RuleNode {
    fn kind(&self) -> &'static str {
        "Rule"
    }

    fn height(&self) -> f32 {
        self.rule.thickness
    }

    fn space_before(&self) -> f32 {
        self.rule.space_before
    }

    fn space_after(&self) -> f32 {
        self.rule.space_after
    }

    fn split(self: Box<Self>, _available: f32) -> SplitOutcome {
        SplitOutcome::Whole(self)
    }

    fn paint(&self, x: f32, top: f32, ops: &mut Vec<PaintOp>) {
        let y = top - self.rule.thickness / 2.0;
        ops.push(PaintOp::Line {
            from: Point::new(x, y),
            to: Point::new(x + self.width, y),
            stroke: Stroke::new(self.rule.color, self.rule.thickness),
        });
    }
}

#[derive(Debug)]
pub(crate) struct DrawingNode {
    drawing: Drawing,
}

impl DrawingNode {
    pub fn new(drawing: Drawing) -> Self {
        Self { drawing }
    }
}

impl LayoutNode for DrawingNode {
    fn kind(&self) -> &'static str {
        "Drawing"
    }

    fn height(&self) -> f32 {
        self.drawing.height
    }

    fn split(self: Box<Self>, _available: f32) -> SplitOutcome {
        SplitOutcome::Whole(self)
    }

    fn paint(&self, x: f32, top: f32, ops: &mut Vec<PaintOp>) {
        ops.extend(
            self.drawing
                .placed_at(Point::new(x, top - self.drawing.height)),
        );
    }
}

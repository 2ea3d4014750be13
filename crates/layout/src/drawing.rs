//! Fixed-size vector drawings placed in the flow like any other block.
//!
//! Coordinates are local to the drawing box with the origin at its
//! bottom-left corner and y growing upwards.

use crate::fonts;
use crate::output::{Paint, PaintOp, Stroke, TextRun};
use geo_style::BuiltinFont;
use geo_types::{Color, Point, Rect};

/// Horizontal anchoring of a drawn string relative to its x coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

/// Font, size and colour for a drawn string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font: BuiltinFont,
    pub size: f32,
    pub color: Color,
}

impl TextStyle {
    pub const fn new(font: BuiltinFont, size: f32, color: Color) -> Self {
        Self { font, size, color }
    }
}

/// Anything shapes can be appended to.
pub trait ShapeSink {
    fn push(&mut self, op: PaintOp);

    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32, paint: Paint) {
        self.push(PaintOp::Rect {
            rect: Rect::new(x, y, width, height),
            paint,
        });
    }

    fn circle(&mut self, cx: f32, cy: f32, radius: f32, paint: Paint) {
        self.push(PaintOp::Circle {
            center: Point::new(cx, cy),
            radius,
            paint,
        });
    }

    fn polygon(&mut self, points: &[(f32, f32)], paint: Paint) {
        self.push(PaintOp::Polygon {
            points: points.iter().map(|&(x, y)| Point::new(x, y)).collect(),
            paint,
        });
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, stroke: Stroke) {
        self.push(PaintOp::Line {
            from: Point::new(x1, y1),
            to: Point::new(x2, y2),
            stroke,
        });
    }

    /// Draws `text` with its baseline at `y`, anchored at `x`.
    fn string(&mut self, x: f32, y: f32, text: &str, style: TextStyle, anchor: TextAnchor) {
        let text = fonts::normalize(text);
        let width = fonts::string_width(&text, style.font, style.size);
        let left = match anchor {
            TextAnchor::Start => x,
            TextAnchor::Middle => x - width / 2.0,
            TextAnchor::End => x - width,
        };
        self.push(PaintOp::Text(TextRun {
            origin: Point::new(left, y),
            text,
            font: style.font,
            size: style.size,
            color: style.color,
            word_spacing: 0.0,
        }));
    }
}

/// An ordered bundle of shapes that can be merged into a drawing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Group {
    ops: Vec<PaintOp>,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<PaintOp> {
        self.ops
    }
}

impl ShapeSink for Group {
    fn push(&mut self, op: PaintOp) {
        self.ops.push(op);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Drawing {
    pub width: f32,
    pub height: f32,
    ops: Vec<PaintOp>,
}

impl Drawing {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    pub fn add_group(&mut self, group: Group) {
        self.ops.extend(group.into_ops());
    }

    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }

    /// Text of every string in the drawing, in paint order.
    pub fn strings(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(PaintOp::as_text)
            .map(|run| run.text.as_str())
            .collect()
    }

    /// Paint operations moved so the drawing's origin lands on `origin`.
    pub fn placed_at(&self, origin: Point) -> impl Iterator<Item = PaintOp> + '_ {
        self.ops
            .iter()
            .map(move |op| op.translated(origin.x, origin.y))
    }
}

impl ShapeSink for Drawing {
    fn push(&mut self, op: PaintOp) {
        self.ops.push(op);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_offset_by_measured_width() {
        let style = TextStyle::new(BuiltinFont::Helvetica, 10.0, Color::BLACK);
        let width = fonts::string_width("67", BuiltinFont::Helvetica, 10.0);
        let mut d = Drawing::new(100.0, 50.0);
        d.string(50.0, 10.0, "67", style, TextAnchor::Middle);
        d.string(50.0, 10.0, "67", style, TextAnchor::End);
        let xs: Vec<f32> = d.ops().iter().filter_map(|op| op.as_text()).map(|r| r.origin.x).collect();
        assert_eq!(xs, vec![50.0 - width / 2.0, 50.0 - width]);
    }

    #[test]
    fn placement_translates_every_op() {
        let mut d = Drawing::new(10.0, 10.0);
        d.rect(1.0, 2.0, 3.0, 4.0, Paint::fill(Color::WHITE));
        let placed: Vec<PaintOp> = d.placed_at(Point::new(50.0, 100.0)).collect();
        assert_eq!(
            placed[0],
            PaintOp::Rect {
                rect: Rect::new(51.0, 102.0, 3.0, 4.0),
                paint: Paint::fill(Color::WHITE)
            }
        );
    }
}

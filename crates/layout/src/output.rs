//! Output types from the layout engine.
//!
//! Pages come out as flat lists of paint operations in PDF user space
//! (points, origin at the bottom-left corner of the page).

use geo_style::BuiltinFont;
use geo_types::{Color, Point, Rect};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

impl Stroke {
    pub const fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

/// Fill and/or outline for a closed shape.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Paint {
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
}

impl Paint {
    pub const fn fill(color: Color) -> Self {
        Self {
            fill: Some(color),
            stroke: None,
        }
    }

    pub const fn stroke(color: Color, width: f32) -> Self {
        Self {
            fill: None,
            stroke: Some(Stroke::new(color, width)),
        }
    }

    pub const fn fill_and_stroke(fill: Color, stroke: Color, width: f32) -> Self {
        Self {
            fill: Some(fill),
            stroke: Some(Stroke::new(stroke, width)),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.fill.is_some() || self.stroke.is_some()
    }
}

/// A single-font run of text positioned by its left baseline point.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub origin: Point,
    pub text: String,
    pub font: BuiltinFont,
    pub size: f32,
    pub color: Color,
    /// Extra space added to every ASCII space (justified lines).
    pub word_spacing: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PaintOp {
    Rect { rect: Rect, paint: Paint },
    Circle { center: Point, radius: f32, paint: Paint },
    Polygon { points: Vec<Point>, paint: Paint },
    Line { from: Point, to: Point, stroke: Stroke },
    Text(TextRun),
}

impl PaintOp {
    pub fn translated(&self, dx: f32, dy: f32) -> PaintOp {
        match self {
            PaintOp::Rect { rect, paint } => PaintOp::Rect {
                rect: rect.translate(dx, dy),
                paint: *paint,
            },
            PaintOp::Circle {
                center,
                radius,
                paint,
            } => PaintOp::Circle {
                center: center.offset(dx, dy),
                radius: *radius,
                paint: *paint,
            },
            PaintOp::Polygon { points, paint } => PaintOp::Polygon {
                points: points.iter().map(|p| p.offset(dx, dy)).collect(),
                paint: *paint,
            },
            PaintOp::Line { from, to, stroke } => PaintOp::Line {
                from: from.offset(dx, dy),
                to: to.offset(dx, dy),
                stroke: *stroke,
            },
            PaintOp::Text(run) => PaintOp::Text(TextRun {
                origin: run.origin.offset(dx, dy),
                ..run.clone()
            }),
        }
    }

    pub fn as_text(&self) -> Option<&TextRun> {
        match self {
            PaintOp::Text(run) => Some(run),
            _ => None,
        }
    }
}

/// A navigation target recorded while paginating.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineEntry {
    pub title: String,
    /// 1 for top-level entries, deeper levels nest under the previous
    /// shallower entry.
    pub level: u8,
    /// Page y coordinate of the target's top edge.
    pub y: f32,
}

/// One finished page. `number` is 1-based.
#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutPage {
    pub number: usize,
    pub ops: Vec<PaintOp>,
    pub outline: Vec<OutlineEntry>,
}

impl LaidOutPage {
    /// All text on the page in paint order, one run per entry.
    pub fn text_runs(&self) -> impl Iterator<Item = &TextRun> {
        self.ops.iter().filter_map(PaintOp::as_text)
    }
}

use crate::helpers::{font_resource_name, text_string};
use geo_layout::{Paint, PaintOp, TextRun};
use geo_render_core::Canvas;
use geo_style::BuiltinFont;
use geo_types::{Color, Point, Size};
use lopdf::content::{Content, Operation};
use lopdf::Object;

/// Control-point distance for approximating a quarter circle with a cubic Bézier.
const KAPPA: f32 = 0.552_284_8;

#[derive(Default, Clone, PartialEq)]
struct PageRenderState {
    fill_color: Option<Color>,
    stroke_color: Option<Color>,
    line_width: Option<f32>,
    font: Option<(BuiltinFont, f32)>,
    word_spacing: f32,
}

/// A [`Canvas`] that records PDF content-stream operators for one page.
pub struct PdfCanvas {
    size: Size,
    content: Content,
    state: PageRenderState,
}

impl PdfCanvas {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            content: Content { operations: vec![] },
            state: PageRenderState::default(),
        }
    }

    pub fn finish(self) -> Content {
        self.content
    }

    fn op(&mut self, operator: &str, operands: Vec<Object>) {
        self.content
            .operations
            .push(Operation::new(operator, operands));
    }

    fn rgb(color: &Color) -> Vec<Object> {
        color.components().iter().map(|c| (*c).into()).collect()
    }

    fn set_fill_color(&mut self, color: &Color) {
        if self.state.fill_color != Some(*color) {
            self.op("rg", Self::rgb(color));
            self.state.fill_color = Some(*color);
        }
    }

    fn set_stroke(&mut self, color: &Color, width: f32) {
        if self.state.stroke_color != Some(*color) {
            self.op("RG", Self::rgb(color));
            self.state.stroke_color = Some(*color);
        }
        if self.state.line_width != Some(width) {
            self.op("w", vec![width.into()]);
            self.state.line_width = Some(width);
        }
    }

    /// Sets colours for `paint` and returns the path-painting operator.
    fn prepare_paint(&mut self, paint: &Paint) -> Option<&'static str> {
        if let Some(fill) = &paint.fill {
            self.set_fill_color(fill);
        }
        if let Some(stroke) = &paint.stroke {
            self.set_stroke(&stroke.color, stroke.width);
        }
        match (paint.fill.is_some(), paint.stroke.is_some()) {
            (true, true) => Some("B"),
            (true, false) => Some("f"),
            (false, true) => Some("S"),
            (false, false) => None,
        }
    }

    fn circle_path(&mut self, center: Point, r: f32) {
        let (cx, cy) = (center.x, center.y);
        let k = KAPPA * r;
        self.op("m", vec![(cx + r).into(), cy.into()]);
        let quarters = [
            [cx + r, cy + k, cx + k, cy + r, cx, cy + r],
            [cx - k, cy + r, cx - r, cy + k, cx - r, cy],
            [cx - r, cy - k, cx - k, cy - r, cx, cy - r],
            [cx + k, cy - r, cx + r, cy - k, cx + r, cy],
        ];
        for q in quarters {
            self.op("c", q.iter().map(|v| (*v).into()).collect());
        }
        self.op("h", vec![]);
    }

    fn draw_text(&mut self, run: &TextRun) {
        if run.text.is_empty() {
            return;
        }
        self.op("BT", vec![]);
        if self.state.font != Some((run.font, run.size)) {
            let name = font_resource_name(run.font);
            self.op(
                "Tf",
                vec![Object::Name(name.into_bytes()), run.size.into()],
            );
            self.state.font = Some((run.font, run.size));
        }
        if self.state.word_spacing != run.word_spacing {
            self.op("Tw", vec![run.word_spacing.into()]);
            self.state.word_spacing = run.word_spacing;
        }
        self.set_fill_color(&run.color);
        self.op("Td", vec![run.origin.x.into(), run.origin.y.into()]);
        self.op("Tj", vec![text_string(&run.text)]);
        self.op("ET", vec![]);
    }
}

impl Canvas for PdfCanvas {
    fn page_size(&self) -> Size {
        self.size
    }

    fn draw(&mut self, op: &PaintOp) {
        match op {
            PaintOp::Rect { rect, paint } => {
                if let Some(operator) = self.prepare_paint(paint) {
                    self.op(
                        "re",
                        vec![rect.x.into(), rect.y.into(), rect.width.into(), rect.height.into()],
                    );
                    self.op(operator, vec![]);
                }
            }
            PaintOp::Circle {
                center,
                radius,
                paint,
            } => {
                if let Some(operator) = self.prepare_paint(paint) {
                    self.circle_path(*center, *radius);
                    self.op(operator, vec![]);
                }
            }
            PaintOp::Polygon { points, paint } => {
                let Some((first, rest)) = points.split_first() else {
                    return;
                };
                if let Some(operator) = self.prepare_paint(paint) {
                    self.op("m", vec![first.x.into(), first.y.into()]);
                    for p in rest {
                        self.op("l", vec![p.x.into(), p.y.into()]);
                    }
                    self.op("h", vec![]);
                    self.op(operator, vec![]);
                }
            }
            PaintOp::Line { from, to, stroke } => {
                self.set_stroke(&stroke.color, stroke.width);
                self.op("m", vec![from.x.into(), from.y.into()]);
                self.op("l", vec![to.x.into(), to.y.into()]);
                self.op("S", vec![]);
            }
            PaintOp::Text(run) => self.draw_text(run),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_layout::Stroke;
    use geo_types::Rect;

    fn operators(canvas: PdfCanvas) -> Vec<String> {
        canvas
            .finish()
            .operations
            .into_iter()
            .map(|op| op.operator)
            .collect()
    }

    #[test]
    fn circle_is_four_curves() {
        let mut canvas = PdfCanvas::new(Size::new(612.0, 792.0));
        canvas.draw(&PaintOp::Circle {
            center: Point::new(100.0, 100.0),
            radius: 38.0,
            paint: Paint::fill(Color::WHITE),
        });
        let ops = operators(canvas);
        assert_eq!(ops.iter().filter(|o| *o == "c").count(), 4);
        assert_eq!(ops.last().map(String::as_str), Some("f"));
    }

    #[test]
    fn repeated_colours_are_not_reemitted() {
        let mut canvas = PdfCanvas::new(Size::new(612.0, 792.0));
        for _ in 0..3 {
            canvas.draw(&PaintOp::Rect {
                rect: Rect::new(0.0, 0.0, 10.0, 10.0),
                paint: Paint::fill(Color::BLACK),
            });
        }
        canvas.line(Point::new(0.0, 0.0), Point::new(5.0, 5.0), Stroke::new(Color::BLACK, 0.5));
        let ops = operators(canvas);
        assert_eq!(ops.iter().filter(|o| *o == "rg").count(), 1);
        assert_eq!(ops.iter().filter(|o| *o == "RG").count(), 1);
    }

    #[test]
    fn text_sets_font_once_per_change() {
        let mut canvas = PdfCanvas::new(Size::new(612.0, 792.0));
        canvas.draw_string(10.0, 10.0, "a", BuiltinFont::HelveticaBold, 9.0, Color::BLACK);
        canvas.draw_string(10.0, 20.0, "b", BuiltinFont::HelveticaBold, 9.0, Color::BLACK);
        let ops = operators(canvas);
        assert_eq!(ops.iter().filter(|o| *o == "Tf").count(), 1);
        assert_eq!(ops.iter().filter(|o| *o == "Tj").count(), 2);
    }
}

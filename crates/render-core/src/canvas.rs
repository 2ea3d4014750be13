use geo_layout::{Paint, PaintOp, Stroke, TextRun, fonts};
use geo_style::BuiltinFont;
use geo_types::{Color, Point, Rect, Size};

/// A page surface in PDF user space. Backends implement [`Canvas::draw`];
/// the string helpers measure with the built-in font metrics.
pub trait Canvas {
    fn page_size(&self) -> Size;

    fn draw(&mut self, op: &PaintOp);

    fn line(&mut self, from: Point, to: Point, stroke: Stroke) {
        self.draw(&PaintOp::Line { from, to, stroke });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.draw(&PaintOp::Rect {
            rect,
            paint: Paint::fill(color),
        });
    }

    fn draw_string(&mut self, x: f32, y: f32, text: &str, font: BuiltinFont, size: f32, color: Color) {
        self.draw(&PaintOp::Text(TextRun {
            origin: Point::new(x, y),
            text: fonts::normalize(text),
            font,
            size,
            color,
            word_spacing: 0.0,
        }));
    }

    /// Draws `text` so that it ends at `x`.
    fn draw_right_string(&mut self, x: f32, y: f32, text: &str, font: BuiltinFont, size: f32, color: Color) {
        let width = fonts::string_width(&fonts::normalize(text), font, size);
        self.draw_string(x - width, y, text, font, size, color);
    }

    /// Draws `text` centred on `x`.
    fn draw_centred_string(&mut self, x: f32, y: f32, text: &str, font: BuiltinFont, size: f32, color: Color) {
        let width = fonts::string_width(&fonts::normalize(text), font, size);
        self.draw_string(x - width / 2.0, y, text, font, size, color);
    }
}

/// Collects paint operations in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    size: Size,
    ops: Vec<PaintOp>,
}

impl RecordingCanvas {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<PaintOp> {
        self.ops
    }

    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(PaintOp::as_text)
            .map(|run| run.text.as_str())
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn page_size(&self) -> Size {
        self.size
    }

    fn draw(&mut self, op: &PaintOp) {
        self.ops.push(op.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_and_centred_strings_are_measured() {
        let mut canvas = RecordingCanvas::new(Size::new(612.0, 792.0));
        canvas.draw_right_string(562.0, 28.0, "Page 2", BuiltinFont::Helvetica, 7.0, Color::BLACK);
        canvas.draw_centred_string(306.0, 28.0, "Page 2", BuiltinFont::Helvetica, 7.0, Color::BLACK);
        let width = fonts::string_width("Page 2", BuiltinFont::Helvetica, 7.0);
        let xs: Vec<f32> = canvas.ops().iter().filter_map(PaintOp::as_text).map(|r| r.origin.x).collect();
        assert_eq!(xs, vec![562.0 - width, 306.0 - width / 2.0]);
        assert_eq!(canvas.texts(), vec!["Page 2", "Page 2"]);
    }
}

//! Fixed page chrome painted behind the flowed content.

use crate::config::Palette;
use geo_layout::Stroke;
use geo_render_core::{Canvas, PageDecorator, PageInfo};
use geo_style::BuiltinFont;
use geo_types::{Color, Point, Rect};

/// Running header and footer: an accent rule with the document title above
/// the frame, a hairline below it, and a footer with date, centre text and
/// page number.
#[derive(Debug, Clone)]
pub struct RunningChrome {
    pub header_left: String,
    pub header_right: Option<String>,
    pub footer_left: String,
    pub footer_center: String,
    pub font_size: f32,
    /// Distance of the rules and texts from the left and right page edges.
    pub inset: f32,
    pub accent: Color,
    pub rule: Color,
    pub text: Color,
}

impl RunningChrome {
    pub fn new(header: impl Into<String>, palette: &Palette) -> Self {
        Self {
            header_left: header.into(),
            header_right: None,
            footer_left: String::new(),
            footer_center: String::new(),
            font_size: 8.0,
            inset: 50.0,
            accent: palette.accent,
            rule: palette.rule,
            text: palette.text_secondary,
        }
    }

    pub fn with_header_right(mut self, text: impl Into<String>) -> Self {
        self.header_right = Some(text.into());
        self
    }

    pub fn with_footer(mut self, left: impl Into<String>, center: impl Into<String>) -> Self {
        self.footer_left = left.into();
        self.footer_center = center.into();
        self
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }
}

impl PageDecorator for RunningChrome {
    fn decorate(&self, page: &PageInfo, canvas: &mut dyn Canvas) {
        let (w, h) = (page.size.width, page.size.height);
        let (left, right) = (self.inset, w - self.inset);
        let font = BuiltinFont::Helvetica;

        canvas.line(Point::new(left, h - 40.0), Point::new(right, h - 40.0), Stroke::new(self.accent, 2.0));
        canvas.draw_string(left, h - 35.0, &self.header_left, font, self.font_size, self.text);
        if let Some(text) = &self.header_right {
            canvas.draw_right_string(right, h - 35.0, text, font, self.font_size, self.text);
        }

        canvas.line(Point::new(left, 40.0), Point::new(right, 40.0), Stroke::new(self.rule, 0.5));
        canvas.draw_string(left, 28.0, &self.footer_left, font, self.font_size, self.text);
        canvas.draw_right_string(right, 28.0, &format!("Page {}", page.number), font, self.font_size, self.text);
        canvas.draw_centred_string(w / 2.0, 28.0, &self.footer_center, font, self.font_size, self.text);
    }
}

/// Cover page chrome: accent bars along the top and bottom edges and a small
/// centred watermark. No running header.
#[derive(Debug, Clone)]
pub struct CoverChrome {
    pub watermark: String,
    pub bar: Color,
    pub text: Color,
}

impl CoverChrome {
    pub fn new(watermark: impl Into<String>, palette: &Palette) -> Self {
        Self {
            watermark: watermark.into(),
            bar: palette.accent,
            text: palette.text_light,
        }
    }
}

impl PageDecorator for CoverChrome {
    fn decorate(&self, page: &PageInfo, canvas: &mut dyn Canvas) {
        let (w, h) = (page.size.width, page.size.height);
        canvas.fill_rect(Rect::new(0.0, h - 8.0, w, 8.0), self.bar);
        canvas.fill_rect(Rect::new(0.0, 0.0, w, 8.0), self.bar);
        canvas.draw_centred_string(w / 2.0, 18.0, &self.watermark, BuiltinFont::Helvetica, 7.0, self.text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_layout::PaintOp;
    use geo_render_core::RecordingCanvas;
    use geo_types::Size;

    fn page(number: usize) -> PageInfo {
        PageInfo {
            number,
            size: Size::new(612.0, 792.0),
        }
    }

    #[test]
    fn running_chrome_paints_header_and_numbered_footer() {
        let palette = Palette::default();
        let chrome = RunningChrome::new("GEO System Overview", &palette)
            .with_header_right("Confidential")
            .with_footer("February 2026", "Paragon Pool and Patio, Inc.")
            .with_font_size(7.0);
        let mut canvas = RecordingCanvas::new(Size::new(612.0, 792.0));
        chrome.decorate(&page(3), &mut canvas);

        assert_eq!(
            canvas.texts(),
            vec![
                "GEO System Overview",
                "Confidential",
                "February 2026",
                "Page 3",
                "Paragon Pool and Patio, Inc."
            ]
        );
        let lines: Vec<_> = canvas
            .ops()
            .iter()
            .filter_map(|op| match op {
                PaintOp::Line { from, to, stroke } => Some((from.y, to.x, stroke.width)),
                _ => None,
            })
            .collect();
        assert_eq!(lines, vec![(752.0, 562.0, 2.0), (40.0, 562.0, 0.5)]);
    }

    #[test]
    fn header_right_is_optional() {
        let palette = Palette::default();
        let chrome = RunningChrome::new("GEO Sales Deck", &palette).with_footer("May 2026", "Confidential");
        let mut canvas = RecordingCanvas::new(Size::new(612.0, 792.0));
        chrome.decorate(&page(1), &mut canvas);
        assert_eq!(canvas.texts().len(), 4);
        assert!(canvas.ops().iter().filter_map(PaintOp::as_text).all(|t| t.size == 8.0));
    }

    #[test]
    fn cover_chrome_draws_bars_and_watermark_only() {
        let palette = Palette::default();
        let chrome = CoverChrome::new("Confidential  |  Prepared for Paragon", &palette);
        let mut canvas = RecordingCanvas::new(Size::new(612.0, 792.0));
        chrome.decorate(&page(1), &mut canvas);
        let bars: Vec<Rect> = canvas
            .ops()
            .iter()
            .filter_map(|op| match op {
                PaintOp::Rect { rect, .. } => Some(*rect),
                _ => None,
            })
            .collect();
        assert_eq!(bars, vec![Rect::new(0.0, 784.0, 612.0, 8.0), Rect::new(0.0, 0.0, 612.0, 8.0)]);
        assert_eq!(canvas.texts(), vec!["Confidential  |  Prepared for Paragon"]);
    }
}

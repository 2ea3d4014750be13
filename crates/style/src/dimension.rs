//! Defines primitives for page size and spacing.
use geo_types::Rect;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    pub const fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Same value for top/bottom (`vertical`) and left/right (`horizontal`).
    pub const fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PageSize {
    A4,
    #[default]
    Letter,
    Legal,
    Custom { width: f32, height: f32 },
}

impl PageSize {
    pub fn dimensions_pt(&self) -> (f32, f32) {
        match self {
            PageSize::A4 => (595.28, 841.89),
            PageSize::Letter => (612.0, 792.0),
            PageSize::Legal => (612.0, 1008.0),
            PageSize::Custom { width, height } => (*width, *height),
        }
    }
}

/// Physical page plus the margins that bound the single content frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSetup {
    pub size: PageSize,
    pub margins: Margins,
}

impl Default for PageSetup {
    fn default() -> Self {
        Self {
            size: PageSize::Letter,
            margins: Margins::symmetric(55.0, 50.0),
        }
    }
}

impl PageSetup {
    pub fn width(&self) -> f32 {
        self.size.dimensions_pt().0
    }

    pub fn height(&self) -> f32 {
        self.size.dimensions_pt().1
    }

    /// Width available to flowing content between the side margins.
    pub fn usable_width(&self) -> f32 {
        self.width() - self.margins.horizontal()
    }

    /// The content frame in PDF coordinates (origin bottom-left).
    pub fn frame(&self) -> Rect {
        Rect::new(
            self.margins.left,
            self.margins.bottom,
            self.usable_width(),
            self.height() - self.margins.vertical(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_frame_matches_report_geometry() {
        let setup = PageSetup::default();
        assert_eq!(setup.usable_width(), 512.0);
        assert_eq!(setup.frame(), Rect::new(50.0, 55.0, 512.0, 682.0));
    }
}

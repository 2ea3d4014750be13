//! Font selection limited to the PDF standard-14 faces the renderer can emit
//! without embedding.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontFamily {
    #[default]
    Helvetica,
    Courier,
}

/// A concrete standard-14 face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BuiltinFont {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
    Courier,
    CourierBold,
}

impl BuiltinFont {
    pub const ALL: [BuiltinFont; 6] = [
        BuiltinFont::Helvetica,
        BuiltinFont::HelveticaBold,
        BuiltinFont::HelveticaOblique,
        BuiltinFont::HelveticaBoldOblique,
        BuiltinFont::Courier,
        BuiltinFont::CourierBold,
    ];

    /// Picks the face for a family/weight/style triple. Courier has no
    /// oblique variant here, so italic Courier falls back to upright.
    pub fn resolve(family: FontFamily, weight: FontWeight, style: FontStyle) -> Self {
        match (family, weight, style) {
            (FontFamily::Helvetica, FontWeight::Regular, FontStyle::Normal) => BuiltinFont::Helvetica,
            (FontFamily::Helvetica, FontWeight::Bold, FontStyle::Normal) => BuiltinFont::HelveticaBold,
            (FontFamily::Helvetica, FontWeight::Regular, FontStyle::Italic) => {
                BuiltinFont::HelveticaOblique
            }
            (FontFamily::Helvetica, FontWeight::Bold, FontStyle::Italic) => {
                BuiltinFont::HelveticaBoldOblique
            }
            (FontFamily::Courier, FontWeight::Regular, _) => BuiltinFont::Courier,
            (FontFamily::Courier, FontWeight::Bold, _) => BuiltinFont::CourierBold,
        }
    }

    pub fn family(self) -> FontFamily {
        match self {
            BuiltinFont::Courier | BuiltinFont::CourierBold => FontFamily::Courier,
            _ => FontFamily::Helvetica,
        }
    }

    pub fn weight(self) -> FontWeight {
        match self {
            BuiltinFont::HelveticaBold | BuiltinFont::HelveticaBoldOblique | BuiltinFont::CourierBold => {
                FontWeight::Bold
            }
            _ => FontWeight::Regular,
        }
    }

    pub fn style(self) -> FontStyle {
        match self {
            BuiltinFont::HelveticaOblique | BuiltinFont::HelveticaBoldOblique => FontStyle::Italic,
            _ => FontStyle::Normal,
        }
    }

    pub fn with_weight(self, weight: FontWeight) -> Self {
        Self::resolve(self.family(), weight, self.style())
    }

    pub fn with_style(self, style: FontStyle) -> Self {
        Self::resolve(self.family(), self.weight(), style)
    }

    pub fn with_family(self, family: FontFamily) -> Self {
        Self::resolve(family, self.weight(), self.style())
    }

    /// The PostScript base font name written into the PDF font dictionary.
    pub fn postscript_name(self) -> &'static str {
        match self {
            BuiltinFont::Helvetica => "Helvetica",
            BuiltinFont::HelveticaBold => "Helvetica-Bold",
            BuiltinFont::HelveticaOblique => "Helvetica-Oblique",
            BuiltinFont::HelveticaBoldOblique => "Helvetica-BoldOblique",
            BuiltinFont::Courier => "Courier",
            BuiltinFont::CourierBold => "Courier-Bold",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_round_trips_through_components() {
        for font in BuiltinFont::ALL {
            assert_eq!(
                BuiltinFont::resolve(font.family(), font.weight(), font.style()),
                font
            );
        }
    }

    #[test]
    fn weight_and_style_toggles() {
        let bold = BuiltinFont::Helvetica.with_weight(FontWeight::Bold);
        assert_eq!(bold, BuiltinFont::HelveticaBold);
        assert_eq!(bold.with_style(FontStyle::Italic), BuiltinFont::HelveticaBoldOblique);
        assert_eq!(
            BuiltinFont::HelveticaBold.with_family(FontFamily::Courier),
            BuiltinFont::CourierBold
        );
        assert_eq!(BuiltinFont::HelveticaBoldOblique.postscript_name(), "Helvetica-BoldOblique");
    }
}

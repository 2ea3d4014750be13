//! The closed set of paragraph styles a report may use.

use crate::dimension::Margins;
use crate::font::{BuiltinFont, FontFamily, FontStyle, FontWeight};
use crate::text::TextAlign;
use geo_types::Color;
use std::sync::Arc;

/// Every paragraph role a report can ask for. The registry holds exactly one
/// descriptor per variant, so lookups cannot miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleRole {
    CoverTitle,
    CoverSubtitle,
    CoverDetail,
    SectionNumber,
    SectionHeader,
    SubHeader,
    SubSubHeader,
    Body,
    BodyLarge,
    BodyBold,
    Bullet,
    Small,
    Callout,
    BigNumber,
    NumberCaption,
    Highlight,
}

impl StyleRole {
    pub const ALL: [StyleRole; 16] = [
        StyleRole::CoverTitle,
        StyleRole::CoverSubtitle,
        StyleRole::CoverDetail,
        StyleRole::SectionNumber,
        StyleRole::SectionHeader,
        StyleRole::SubHeader,
        StyleRole::SubSubHeader,
        StyleRole::Body,
        StyleRole::BodyLarge,
        StyleRole::BodyBold,
        StyleRole::Bullet,
        StyleRole::Small,
        StyleRole::Callout,
        StyleRole::BigNumber,
        StyleRole::NumberCaption,
        StyleRole::Highlight,
    ];
}

/// A fully specified paragraph style. There is no `Default`: every field has
/// to be stated when a registry is built.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleDescriptor {
    pub name: &'static str,
    pub family: FontFamily,
    pub weight: FontWeight,
    pub style: FontStyle,
    pub size: f32,
    pub leading: f32,
    pub color: Color,
    pub space_before: f32,
    pub space_after: f32,
    pub alignment: TextAlign,
    pub left_indent: f32,
    /// Fill painted behind the paragraph box (callouts).
    pub background: Option<Color>,
    /// Inset between the background edge and the text.
    pub padding: Margins,
}

impl StyleDescriptor {
    pub fn font(&self) -> BuiltinFont {
        BuiltinFont::resolve(self.family, self.weight, self.style)
    }
}

/// One descriptor per [`StyleRole`].
#[derive(Debug, Clone)]
pub struct StyleRegistry {
    pub cover_title: Arc<StyleDescriptor>,
    pub cover_subtitle: Arc<StyleDescriptor>,
    pub cover_detail: Arc<StyleDescriptor>,
    pub section_number: Arc<StyleDescriptor>,
    pub section_header: Arc<StyleDescriptor>,
    pub sub_header: Arc<StyleDescriptor>,
    pub sub_sub_header: Arc<StyleDescriptor>,
    pub body: Arc<StyleDescriptor>,
    pub body_large: Arc<StyleDescriptor>,
    pub body_bold: Arc<StyleDescriptor>,
    pub bullet: Arc<StyleDescriptor>,
    pub small: Arc<StyleDescriptor>,
    pub callout: Arc<StyleDescriptor>,
    pub big_number: Arc<StyleDescriptor>,
    pub number_caption: Arc<StyleDescriptor>,
    pub highlight: Arc<StyleDescriptor>,
}

impl StyleRegistry {
    pub fn get(&self, role: StyleRole) -> &Arc<StyleDescriptor> {
        match role {
            StyleRole::CoverTitle => &self.cover_title,
            StyleRole::CoverSubtitle => &self.cover_subtitle,
            StyleRole::CoverDetail => &self.cover_detail,
            StyleRole::SectionNumber => &self.section_number,
            StyleRole::SectionHeader => &self.section_header,
            StyleRole::SubHeader => &self.sub_header,
            StyleRole::SubSubHeader => &self.sub_sub_header,
            StyleRole::Body => &self.body,
            StyleRole::BodyLarge => &self.body_large,
            StyleRole::BodyBold => &self.body_bold,
            StyleRole::Bullet => &self.bullet,
            StyleRole::Small => &self.small,
            StyleRole::Callout => &self.callout,
            StyleRole::BigNumber => &self.big_number,
            StyleRole::NumberCaption => &self.number_caption,
            StyleRole::Highlight => &self.highlight,
        }
    }

    /// Looks a descriptor up by its name.
    pub fn by_name(&self, name: &str) -> Option<&Arc<StyleDescriptor>> {
        StyleRole::ALL
            .iter()
            .map(|role| self.get(*role))
            .find(|style| style.name == name)
    }
}

//! The two paragraph style registries: a denser one for the comparison
//! report and a roomier one for the suite documents.

use crate::config::Palette;
use geo_style::{FontFamily, FontStyle, FontWeight, Margins, StyleDescriptor, StyleRegistry, TextAlign};
use geo_types::Color;
use std::sync::Arc;

/// Regular Helvetica, left aligned, no spacing, single-spaced at 1.2 × size.
fn plain(name: &'static str, size: f32, color: Color) -> StyleDescriptor {
    StyleDescriptor {
        name,
        family: FontFamily::Helvetica,
        weight: FontWeight::Regular,
        style: FontStyle::Normal,
        size,
        leading: size * 1.2,
        color,
        space_before: 0.0,
        space_after: 0.0,
        alignment: TextAlign::Left,
        left_indent: 0.0,
        background: None,
        padding: Margins::default(),
    }
}

fn bold(name: &'static str, size: f32, color: Color) -> StyleDescriptor {
    StyleDescriptor {
        weight: FontWeight::Bold,
        ..plain(name, size, color)
    }
}

fn spaced(mut style: StyleDescriptor, before: f32, after: f32) -> StyleDescriptor {
    style.space_before = before;
    style.space_after = after;
    style
}

pub fn comparison_styles() -> StyleRegistry {
    comparison_styles_with(&Palette::default())
}

pub fn comparison_styles_with(p: &Palette) -> StyleRegistry {
    let body = StyleDescriptor {
        leading: 13.5,
        alignment: TextAlign::Justify,
        ..spaced(plain("Body", 9.5, p.text_primary), 3.0, 3.0)
    };
    StyleRegistry {
        cover_title: Arc::new(spaced(bold("CoverTitle", 28.0, p.primary), 0.0, 4.0)),
        cover_subtitle: Arc::new(spaced(plain("CoverSubtitle", 14.0, p.accent), 0.0, 6.0)),
        cover_detail: Arc::new(spaced(plain("CoverDetail", 10.0, p.text_secondary), 0.0, 3.0)),
        section_number: Arc::new(bold("SectionNumber", 11.0, p.accent)),
        section_header: Arc::new(spaced(bold("SectionHeader", 17.0, p.primary), 16.0, 8.0)),
        sub_header: Arc::new(spaced(bold("SubHeader", 12.0, p.accent), 12.0, 5.0)),
        sub_sub_header: Arc::new(spaced(bold("SubSubHeader", 10.0, p.secondary), 8.0, 4.0)),
        body_large: Arc::new(StyleDescriptor {
            name: "BodyLarge",
            size: 10.5,
            leading: 15.0,
            ..body.clone()
        }),
        body_bold: Arc::new(StyleDescriptor {
            name: "BodyBold",
            weight: FontWeight::Bold,
            alignment: TextAlign::Left,
            ..body.clone()
        }),
        bullet: Arc::new(StyleDescriptor {
            leading: 13.0,
            left_indent: 18.0,
            ..spaced(plain("Bullet", 9.5, p.text_primary), 2.0, 2.0)
        }),
        small: Arc::new(spaced(plain("Small", 8.0, p.text_secondary), 2.0, 2.0)),
        callout: Arc::new(StyleDescriptor {
            leading: 13.5,
            background: Some(p.light_bg),
            padding: Margins::symmetric(8.0, 10.0),
            ..spaced(plain("Callout", 9.5, p.text_primary), 6.0, 6.0)
        }),
        big_number: Arc::new(StyleDescriptor {
            alignment: TextAlign::Center,
            ..spaced(bold("BigNumber", 32.0, p.primary), 0.0, 2.0)
        }),
        number_caption: Arc::new(StyleDescriptor {
            alignment: TextAlign::Center,
            ..spaced(plain("NumberCaption", 9.0, p.text_secondary), 0.0, 8.0)
        }),
        highlight: Arc::new(spaced(bold("Highlight", 10.0, p.delta), 4.0, 4.0)),
        body: Arc::new(body),
    }
}

pub fn suite_styles() -> StyleRegistry {
    suite_styles_with(&Palette::default())
}

pub fn suite_styles_with(p: &Palette) -> StyleRegistry {
    let body = StyleDescriptor {
        leading: 14.0,
        alignment: TextAlign::Justify,
        ..spaced(plain("Body", 10.0, p.text_primary), 3.0, 3.0)
    };
    StyleRegistry {
        cover_title: Arc::new(StyleDescriptor {
            leading: 38.0,
            ..spaced(bold("DocTitle", 32.0, p.primary), 0.0, 6.0)
        }),
        cover_subtitle: Arc::new(spaced(plain("DocSubtitle", 14.0, p.text_secondary), 0.0, 20.0)),
        cover_detail: Arc::new(spaced(plain("CoverMeta", 10.0, p.text_secondary), 2.0, 2.0)),
        section_number: Arc::new(bold("SectionNumber", 11.0, p.accent)),
        section_header: Arc::new(StyleDescriptor {
            leading: 24.0,
            ..spaced(bold("SectionHead", 20.0, p.primary), 24.0, 10.0)
        }),
        sub_header: Arc::new(StyleDescriptor {
            leading: 18.0,
            ..spaced(bold("SubHead", 14.0, p.accent), 16.0, 6.0)
        }),
        sub_sub_header: Arc::new(StyleDescriptor {
            leading: 14.0,
            ..spaced(bold("SubHead2", 11.0, p.secondary), 12.0, 4.0)
        }),
        body_large: Arc::new(StyleDescriptor {
            name: "BodyLarge",
            size: 11.0,
            leading: 16.0,
            space_before: 4.0,
            space_after: 4.0,
            ..body.clone()
        }),
        body_bold: Arc::new(StyleDescriptor {
            name: "BodyBold",
            weight: FontWeight::Bold,
            alignment: TextAlign::Left,
            ..body.clone()
        }),
        bullet: Arc::new(StyleDescriptor {
            leading: 14.0,
            left_indent: 20.0,
            ..spaced(plain("Bullet", 10.0, p.text_primary), 2.0, 2.0)
        }),
        small: Arc::new(spaced(plain("SmallText", 8.0, p.text_secondary), 2.0, 2.0)),
        callout: Arc::new(StyleDescriptor {
            leading: 15.0,
            background: Some(p.light_bg),
            padding: Margins::all(12.0),
            ..spaced(plain("Callout", 10.0, p.accent), 10.0, 10.0)
        }),
        big_number: Arc::new(StyleDescriptor {
            alignment: TextAlign::Center,
            ..spaced(bold("BigNumber", 42.0, p.highlight), 6.0, 2.0)
        }),
        number_caption: Arc::new(StyleDescriptor {
            alignment: TextAlign::Center,
            ..spaced(plain("NumberCaption", 10.0, p.text_secondary), 0.0, 12.0)
        }),
        highlight: Arc::new(spaced(bold("Highlight", 10.0, p.delta), 4.0, 4.0)),
        body: Arc::new(body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_style::StyleRole;
    use std::collections::HashSet;

    #[test]
    fn every_role_resolves_to_a_uniquely_named_style() {
        for registry in [comparison_styles(), suite_styles()] {
            let names: HashSet<&str> = StyleRole::ALL.iter().map(|r| registry.get(*r).name).collect();
            assert_eq!(names.len(), StyleRole::ALL.len());
            for role in StyleRole::ALL {
                let style = registry.get(role);
                assert!(style.size > 0.0 && style.leading >= style.size, "{}", style.name);
                assert_eq!(registry.by_name(style.name).map(|s| s.name), Some(style.name));
            }
        }
    }

    #[test]
    fn comparison_body_metrics() {
        let styles = comparison_styles();
        assert_eq!(styles.body.size, 9.5);
        assert_eq!(styles.body.leading, 13.5);
        assert_eq!(styles.body.alignment, TextAlign::Justify);
        assert_eq!(styles.bullet.left_indent, 18.0);
        assert_eq!(styles.callout.padding, Margins::symmetric(8.0, 10.0));
    }

    #[test]
    fn suite_headings_use_explicit_leading() {
        let styles = suite_styles();
        assert_eq!(styles.cover_title.leading, 38.0);
        assert_eq!(styles.section_header.space_before, 24.0);
        assert_eq!(styles.big_number.color, Palette::default().highlight);
        assert!((styles.cover_detail.leading - 12.0).abs() < 1e-4);
    }
}

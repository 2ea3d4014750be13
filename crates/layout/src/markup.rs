//! Inline paragraph markup.
//!
//! Supports `<b>`, `<i>`, `<code>`, `<font color="#rrggbb">`, `<br/>` and the
//! entities `&amp;`, `&lt;`, `&gt;`, `&quot;`, `&nbsp;`, `&mdash;`, `&ndash;`,
//! `&bull;` and numeric `&#NNNN;`. Anything that does not parse as markup is
//! kept as literal text.

use geo_style::{BuiltinFont, FontFamily, FontStyle, FontWeight};
use geo_types::Color;
use nom::branch::alt;
use nom::bytes::complete::{tag, take_till1, take_while1};
use nom::character::complete::char;
use nom::combinator::{map, map_opt, value};
use nom::sequence::delimited;
use nom::{IResult, Parser};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Bold,
    Italic,
    Code,
    Font,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MarkupToken {
    Text(String),
    Open(TagKind, Option<Color>),
    Close(TagKind),
    LineBreak,
}

/// Font and colour of a run of inline text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpanStyle {
    pub font: BuiltinFont,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InlineItem {
    Span { text: String, style: SpanStyle },
    LineBreak,
}

// --- Token parsers ---

fn text_run(input: &str) -> IResult<&str, MarkupToken> {
    map(take_till1(|c| c == '<' || c == '&'), |s: &str| {
        MarkupToken::Text(s.to_string())
    })
    .parse(input)
}

fn decode_entity(name: &str) -> Option<MarkupToken> {
    let ch = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        "mdash" => '\u{2014}',
        "ndash" => '\u{2013}',
        "bull" => '\u{2022}',
        _ => {
            let digits = name.strip_prefix('#')?;
            let code = match digits.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => digits.parse::<u32>().ok()?,
            };
            std::char::from_u32(code)?
        }
    };
    Some(MarkupToken::Text(ch.to_string()))
}

fn entity(input: &str) -> IResult<&str, MarkupToken> {
    map_opt(
        delimited(
            char('&'),
            take_while1(|c: char| c.is_ascii_alphanumeric() || c == '#'),
            char(';'),
        ),
        decode_entity,
    )
    .parse(input)
}

fn line_break(input: &str) -> IResult<&str, MarkupToken> {
    value(
        MarkupToken::LineBreak,
        alt((tag("<br/>"), tag("<br />"), tag("<br>"))),
    )
    .parse(input)
}

fn font_open(input: &str) -> IResult<&str, MarkupToken> {
    map_opt(
        delimited(tag("<font color=\""), take_till1(|c| c == '"'), tag("\">")),
        |raw: &str| {
            Color::from_hex(raw)
                .ok()
                .map(|c| MarkupToken::Open(TagKind::Font, Some(c)))
        },
    )
    .parse(input)
}

fn simple_tag(input: &str) -> IResult<&str, MarkupToken> {
    alt((
        value(MarkupToken::Open(TagKind::Bold, None), tag("<b>")),
        value(MarkupToken::Open(TagKind::Italic, None), tag("<i>")),
        value(MarkupToken::Open(TagKind::Code, None), tag("<code>")),
        value(MarkupToken::Close(TagKind::Bold), tag("</b>")),
        value(MarkupToken::Close(TagKind::Italic), tag("</i>")),
        value(MarkupToken::Close(TagKind::Code), tag("</code>")),
        value(MarkupToken::Close(TagKind::Font), tag("</font>")),
    ))
    .parse(input)
}

fn token(input: &str) -> IResult<&str, MarkupToken> {
    alt((text_run, entity, line_break, font_open, simple_tag)).parse(input)
}

/// Splits markup into tokens. Never fails: an unrecognised `<` or `&` is
/// emitted as literal text.
pub fn tokenize(input: &str) -> Vec<MarkupToken> {
    let mut tokens = Vec::new();
    let mut rest = input;
    while let Some(first) = rest.chars().next() {
        match token(rest) {
            Ok((remaining, tok)) => {
                tokens.push(tok);
                rest = remaining;
            }
            Err(_) => {
                tokens.push(MarkupToken::Text(first.to_string()));
                rest = &rest[first.len_utf8()..];
            }
        }
    }
    tokens
}

fn apply(style: SpanStyle, kind: TagKind, color: Option<Color>) -> SpanStyle {
    match kind {
        TagKind::Bold => SpanStyle {
            font: style.font.with_weight(FontWeight::Bold),
            ..style
        },
        TagKind::Italic => SpanStyle {
            font: style.font.with_style(FontStyle::Italic),
            ..style
        },
        TagKind::Code => SpanStyle {
            font: style.font.with_family(FontFamily::Courier),
            ..style
        },
        TagKind::Font => SpanStyle {
            color: color.unwrap_or(style.color),
            ..style
        },
    }
}

/// Resolves markup into styled spans. Whitespace runs collapse to a single
/// space; unbalanced closing tags are ignored.
pub fn parse_inline(markup: &str, base: SpanStyle) -> Vec<InlineItem> {
    let mut items: Vec<InlineItem> = Vec::new();
    let mut stack: Vec<(TagKind, SpanStyle)> = Vec::new();
    let mut current = base;

    for tok in tokenize(markup) {
        match tok {
            MarkupToken::Text(text) => push_span(&mut items, &text, current),
            MarkupToken::LineBreak => items.push(InlineItem::LineBreak),
            MarkupToken::Open(kind, color) => {
                stack.push((kind, current));
                current = apply(current, kind, color);
            }
            MarkupToken::Close(kind) => {
                if let Some(pos) = stack.iter().rposition(|(k, _)| *k == kind) {
                    current = stack[pos].1;
                    stack.truncate(pos);
                }
            }
        }
    }
    items
}

/// A single span of literal text with no markup interpretation.
pub fn plain(text: &str, style: SpanStyle) -> Vec<InlineItem> {
    let mut items = Vec::new();
    push_span(&mut items, text, style);
    items
}

fn push_span(items: &mut Vec<InlineItem>, text: &str, style: SpanStyle) {
    let collapsed = collapse_whitespace(&crate::fonts::normalize(text));
    if collapsed.is_empty() {
        return;
    }
    if let Some(InlineItem::Span { text: prev, style: prev_style }) = items.last_mut() {
        if *prev_style == style {
            if prev.ends_with(' ') && collapsed.starts_with(' ') {
                prev.push_str(&collapsed[1..]);
            } else {
                prev.push_str(&collapsed);
            }
            return;
        }
    }
    items.push(InlineItem::Span {
        text: collapsed,
        style,
    });
}

fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_space = false;
    for ch in text.chars() {
        if ch == ' ' {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(ch);
            in_space = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> SpanStyle {
        SpanStyle {
            font: BuiltinFont::Helvetica,
            color: Color::BLACK,
        }
    }

    fn spans(items: &[InlineItem]) -> Vec<(&str, BuiltinFont)> {
        items
            .iter()
            .filter_map(|item| match item {
                InlineItem::Span { text, style } => Some((text.as_str(), style.font)),
                InlineItem::LineBreak => None,
            })
            .collect()
    }

    #[test]
    fn bold_and_italic_nest() {
        let items = parse_inline("a <b>bold <i>both</i></b> end", base());
        assert_eq!(
            spans(&items),
            vec![
                ("a ", BuiltinFont::Helvetica),
                ("bold ", BuiltinFont::HelveticaBold),
                ("both", BuiltinFont::HelveticaBoldOblique),
                (" end", BuiltinFont::Helvetica),
            ]
        );
    }

    #[test]
    fn entities_decode_and_unknown_markup_stays_literal() {
        let items = parse_inline("A &amp; B &mdash; &#8226; <x> &bogus", base());
        assert_eq!(
            spans(&items),
            vec![("A & B \u{2014} \u{2022} <x> &bogus", BuiltinFont::Helvetica)]
        );
    }

    #[test]
    fn font_color_applies_until_closed() {
        let items = parse_inline("<font color=\"#27ae60\">+32</font> pts", base());
        match &items[0] {
            InlineItem::Span { text, style } => {
                assert_eq!(text, "+32");
                assert_eq!(style.color, Color::rgb(0x27, 0xae, 0x60));
            }
            other => panic!("unexpected {other:?}"),
        }
        match &items[1] {
            InlineItem::Span { style, .. } => assert_eq!(style.color, Color::BLACK),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn line_breaks_and_whitespace() {
        let items = parse_inline("one\n   two<br/>three", base());
        assert_eq!(items.len(), 3);
        assert_eq!(items[1], InlineItem::LineBreak);
        assert_eq!(spans(&items)[0].0, "one two");
    }

    #[test]
    fn code_switches_to_courier_and_stray_close_is_ignored() {
        let items = parse_inline("</b><code>&lt;head&gt;</code>", base());
        assert_eq!(spans(&items), vec![("<head>", BuiltinFont::Courier)]);
    }
}

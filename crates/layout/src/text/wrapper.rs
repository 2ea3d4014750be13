use crate::fonts;
use crate::markup::{InlineItem, SpanStyle};
use geo_style::TextAlign;

const EPSILON: f32 = 0.01;

/// A same-style run within a line, `x` relative to the line start.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFragment {
    pub text: String,
    pub style: SpanStyle,
    pub x: f32,
    pub width: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineLayout {
    pub fragments: Vec<TextFragment>,
    /// Natural width before justification.
    pub width: f32,
    /// Shift from the left edge applied by right/centre alignment.
    pub offset: f32,
    pub word_spacing: f32,
}

impl LineLayout {
    pub fn text(&self) -> String {
        self.fragments.iter().map(|f| f.text.as_str()).collect()
    }
}

#[derive(Debug, Default)]
struct Word {
    pieces: Vec<(String, SpanStyle)>,
    width: f32,
}

impl Word {
    fn push(&mut self, ch: char, style: SpanStyle, size: f32) {
        match self.pieces.last_mut() {
            Some((text, s)) if *s == style => text.push(ch),
            _ => self.pieces.push((ch.to_string(), style)),
        }
        self.width += fonts::char_width(style.font, ch) as f32 * size / 1000.0;
    }

    fn trailing_style(&self) -> Option<SpanStyle> {
        self.pieces.last().map(|(_, s)| *s)
    }
}

enum Atom {
    Word(Word),
    Break,
}

fn atoms(items: &[InlineItem], size: f32) -> Vec<Atom> {
    let mut out = Vec::new();
    let mut word = Word::default();
    for item in items {
        match item {
            InlineItem::Span { text, style } => {
                for ch in text.chars() {
                    if ch == ' ' {
                        if !word.pieces.is_empty() {
                            out.push(Atom::Word(std::mem::take(&mut word)));
                        }
                    } else {
                        word.push(ch, *style, size);
                    }
                }
            }
            InlineItem::LineBreak => {
                if !word.pieces.is_empty() {
                    out.push(Atom::Word(std::mem::take(&mut word)));
                }
                out.push(Atom::Break);
            }
        }
    }
    if !word.pieces.is_empty() {
        out.push(Atom::Word(word));
    }
    out
}

fn space_after(word: &Word, size: f32) -> f32 {
    word.trailing_style()
        .map(|s| fonts::char_width(s.font, ' ') as f32 * size / 1000.0)
        .unwrap_or(0.0)
}

/// Greedy line filling. A word wider than `max_width` gets a line of its own
/// and overflows rather than being split.
pub fn break_lines(
    items: &[InlineItem],
    size: f32,
    max_width: f32,
    align: TextAlign,
) -> Vec<LineLayout> {
    let mut lines = Vec::new();
    let mut current: Vec<Word> = Vec::new();
    let mut width = 0.0;

    for atom in atoms(items, size) {
        match atom {
            Atom::Word(word) => {
                let space = current.last().map(|w| space_after(w, size)).unwrap_or(0.0);
                if !current.is_empty() && width + space + word.width > max_width + EPSILON {
                    let words = std::mem::take(&mut current);
                    lines.push(finalize_line(words, width, max_width, size, align, false));
                    width = word.width;
                } else {
                    width += space + word.width;
                }
                current.push(word);
            }
            Atom::Break => {
                let words = std::mem::take(&mut current);
                lines.push(finalize_line(words, width, max_width, size, align, true));
                width = 0.0;
            }
        }
    }
    if !current.is_empty() {
        lines.push(finalize_line(current, width, max_width, size, align, true));
    }
    lines
}

fn finalize_line(
    words: Vec<Word>,
    natural_width: f32,
    max_width: f32,
    size: f32,
    align: TextAlign,
    is_last: bool,
) -> LineLayout {
    let gaps = words.len().saturating_sub(1);
    let mut segments: Vec<(String, SpanStyle)> = Vec::new();
    let mut push = |text: &str, style: SpanStyle| match segments.last_mut() {
        Some((t, s)) if *s == style => t.push_str(text),
        _ => segments.push((text.to_string(), style)),
    };
    for (i, word) in words.iter().enumerate() {
        for (text, style) in &word.pieces {
            push(text, *style);
        }
        if i < gaps {
            if let Some(style) = word.trailing_style() {
                push(" ", style);
            }
        }
    }

    let slack = (max_width - natural_width).max(0.0);
    let word_spacing = match align {
        TextAlign::Justify if !is_last && gaps > 0 => slack / gaps as f32,
        _ => 0.0,
    };
    let offset = match align {
        TextAlign::Right => slack,
        TextAlign::Center => slack / 2.0,
        TextAlign::Left | TextAlign::Justify => 0.0,
    };

    let mut x = 0.0;
    let fragments = segments
        .into_iter()
        .map(|(text, style)| {
            let spaces = text.chars().filter(|c| *c == ' ').count() as f32;
            let width = fonts::string_width(&text, style.font, size) + spaces * word_spacing;
            let fragment = TextFragment {
                text,
                style,
                x,
                width,
            };
            x += width;
            fragment
        })
        .collect();

    LineLayout {
        fragments,
        width: natural_width,
        offset,
        word_spacing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::{parse_inline, plain};
    use geo_style::BuiltinFont;
    use geo_types::Color;

    fn style() -> SpanStyle {
        SpanStyle {
            font: BuiltinFont::Helvetica,
            color: Color::BLACK,
        }
    }

    #[test]
    fn wraps_greedily_within_width() {
        let items = plain("alpha beta gamma delta epsilon", style());
        let lines = break_lines(&items, 10.0, 60.0, TextAlign::Left);
        let texts: Vec<String> = lines.iter().map(LineLayout::text).collect();
        assert_eq!(texts, vec!["alpha beta", "gamma delta", "epsilon"]);
        assert!(lines.iter().all(|l| l.width <= 60.0));
    }

    #[test]
    fn justify_spreads_all_but_last_line() {
        let items = plain("one two three four five six seven", style());
        let lines = break_lines(&items, 10.0, 80.0, TextAlign::Justify);
        assert!(lines.len() > 1);
        let (last, rest) = lines.split_last().unwrap();
        assert_eq!(last.word_spacing, 0.0);
        for line in rest {
            let gaps = line.text().matches(' ').count() as f32;
            assert!((line.width + gaps * line.word_spacing - 80.0).abs() < 0.01);
        }
    }

    #[test]
    fn centre_and_right_offsets() {
        let items = plain("Page 3", style());
        let w = fonts::string_width("Page 3", BuiltinFont::Helvetica, 10.0);
        let right = break_lines(&items, 10.0, 100.0, TextAlign::Right);
        let centre = break_lines(&items, 10.0, 100.0, TextAlign::Center);
        assert!((right[0].offset - (100.0 - w)).abs() < 1e-4);
        assert!((centre[0].offset - (100.0 - w) / 2.0).abs() < 1e-4);
    }

    #[test]
    fn hard_breaks_and_style_runs() {
        let items = parse_inline("<b>Bold</b> text<br/>next", style());
        let lines = break_lines(&items, 10.0, 500.0, TextAlign::Left);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].fragments.len(), 2);
        assert_eq!(lines[0].fragments[0].text, "Bold ");
        assert_eq!(lines[0].fragments[1].text, "text");
        assert_eq!(lines[1].text(), "next");
    }

    #[test]
    fn oversized_word_overflows_on_its_own_line() {
        let items = plain("a supercalifragilistic b", style());
        let lines = break_lines(&items, 10.0, 20.0, TextAlign::Left);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].text(), "supercalifragilistic");
    }
}

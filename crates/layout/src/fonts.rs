//! Metrics and encoding for the standard-14 faces.
//!
//! Widths are the Adobe AFM advance widths in 1/1000 em. Oblique faces share
//! the widths of their upright counterparts; Courier is monospaced.

use geo_style::BuiltinFont;

const FIRST_ASCII: u32 = 32;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

const COURIER_WIDTH: u16 = 600;
const FALLBACK_WIDTH: u16 = 556;

/// Fraction of the font size that sits below the baseline.
pub const DESCENT: f32 = 0.207;

/// Advance width of `ch` in 1/1000 em.
pub fn char_width(font: BuiltinFont, ch: char) -> u16 {
    let bold = match font {
        BuiltinFont::Courier | BuiltinFont::CourierBold => return COURIER_WIDTH,
        BuiltinFont::Helvetica | BuiltinFont::HelveticaOblique => false,
        BuiltinFont::HelveticaBold | BuiltinFont::HelveticaBoldOblique => true,
    };
    let code = ch as u32;
    if (FIRST_ASCII..FIRST_ASCII + 95).contains(&code) {
        let idx = (code - FIRST_ASCII) as usize;
        return if bold { HELVETICA_BOLD[idx] } else { HELVETICA[idx] };
    }
    match ch {
        '\u{a0}' | '\u{b7}' => 278,
        '\u{2026}' | '\u{2014}' | '\u{2122}' => 1000,
        '\u{2013}' | '\u{20ac}' | '\u{a7}' | '\u{a2}' | '\u{a3}' | '\u{e9}' => 556,
        '\u{2022}' => 350,
        '\u{2018}' | '\u{2019}' => {
            if bold {
                278
            } else {
                222
            }
        }
        '\u{201c}' | '\u{201d}' => {
            if bold {
                500
            } else {
                333
            }
        }
        '\u{d7}' | '\u{b1}' | '\u{f7}' => 584,
        '\u{b0}' => 400,
        '\u{a9}' | '\u{ae}' => 737,
        '\u{bd}' => 834,
        _ => FALLBACK_WIDTH,
    }
}

/// Width of `text` set in `font` at `size` points.
pub fn string_width(text: &str, font: BuiltinFont, size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| char_width(font, c) as u32).sum();
    units as f32 * size / 1000.0
}

/// Maps a character to its WinAnsiEncoding byte, if it has one.
pub fn win_ansi_byte(ch: char) -> Option<u8> {
    let code = ch as u32;
    match code {
        0x20..=0x7e | 0xa0..=0xff => Some(code as u8),
        _ => match ch {
            '\u{20ac}' => Some(0x80),
            '\u{201a}' => Some(0x82),
            '\u{201e}' => Some(0x84),
            '\u{2026}' => Some(0x85),
            '\u{2020}' => Some(0x86),
            '\u{2021}' => Some(0x87),
            '\u{2030}' => Some(0x89),
            '\u{2018}' => Some(0x91),
            '\u{2019}' => Some(0x92),
            '\u{201c}' => Some(0x93),
            '\u{201d}' => Some(0x94),
            '\u{2022}' => Some(0x95),
            '\u{2013}' => Some(0x96),
            '\u{2014}' => Some(0x97),
            '\u{2122}' => Some(0x99),
            _ => None,
        },
    }
}

/// Rewrites text so every character is encodable: arrows and comparison
/// signs become ASCII digraphs, anything else unknown becomes `?`.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\u{2192}' => out.push_str("->"),
            '\u{2190}' => out.push_str("<-"),
            '\u{2265}' => out.push_str(">="),
            '\u{2264}' => out.push_str("<="),
            '\u{2248}' => out.push('~'),
            '\t' | '\n' | '\r' => out.push(' '),
            c if win_ansi_byte(c).is_some() => out.push(c),
            _ => out.push('?'),
        }
    }
    out
}

/// Encodes already-normalized text as WinAnsi bytes.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| win_ansi_byte(c).unwrap_or(b'?'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_match_afm_samples() {
        assert_eq!(char_width(BuiltinFont::Helvetica, 'W'), 944);
        assert_eq!(char_width(BuiltinFont::HelveticaBold, 'i'), 278);
        assert_eq!(char_width(BuiltinFont::HelveticaOblique, 'i'), 222);
        assert_eq!(char_width(BuiltinFont::Courier, 'W'), 600);
        assert_eq!(char_width(BuiltinFont::Helvetica, '\u{2014}'), 1000);
    }

    #[test]
    fn string_width_scales_with_size() {
        let w10 = string_width("Next.js", BuiltinFont::Helvetica, 10.0);
        let w20 = string_width("Next.js", BuiltinFont::Helvetica, 20.0);
        assert!((w20 - 2.0 * w10).abs() < 1e-4);
        assert_eq!(string_width("", BuiltinFont::Helvetica, 12.0), 0.0);
    }

    #[test]
    fn normalize_replaces_unencodable_glyphs() {
        assert_eq!(normalize("Wix 35 \u{2192} Next.js 67"), "Wix 35 -> Next.js 67");
        assert_eq!(normalize("score \u{2265} 80"), "score >= 80");
        assert_eq!(normalize("\u{2500}"), "?");
        assert_eq!(normalize("caf\u{e9} \u{2014} ok"), "caf\u{e9} \u{2014} ok");
    }

    #[test]
    fn encodes_typographic_punctuation() {
        assert_eq!(encode_win_ansi("a\u{2014}b\u{2022}"), vec![b'a', 0x97, b'b', 0x95]);
        assert_eq!(encode_win_ansi("\u{e9}"), vec![0xe9]);
    }
}

use geo_layout::fonts;
use geo_style::BuiltinFont;
use lopdf::{Object, StringFormat};

/// Resource name (`/F1`...) under which a face is registered on every page.
pub fn font_resource_name(font: BuiltinFont) -> String {
    let index = BuiltinFont::ALL
        .iter()
        .position(|f| *f == font)
        .unwrap_or(0);
    format!("F{}", index + 1)
}

/// A literal PDF string in WinAnsiEncoding.
pub fn text_string(text: &str) -> Object {
    Object::String(fonts::encode_win_ansi(text), StringFormat::Literal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_face_has_a_distinct_resource_name() {
        let names: Vec<String> = BuiltinFont::ALL.iter().map(|f| font_resource_name(*f)).collect();
        assert_eq!(names, vec!["F1", "F2", "F3", "F4", "F5", "F6"]);
    }

    #[test]
    fn text_strings_use_win_ansi_bytes() {
        assert_eq!(
            text_string("A\u{2014}B"),
            Object::String(vec![b'A', 0x97, b'B'], StringFormat::Literal)
        );
    }
}

//! Custom element name grammar.

use memchr::memchr;

/// Names that parse as custom element names but collide with legacy
/// SVG/MathML element names, and are therefore rejected.
const RESERVED_NAMES: [&str; 8] = [
    "annotation-xml",
    "color-profile",
    "font-face",
    "font-face-src",
    "font-face-uri",
    "font-face-format",
    "font-face-name",
    "missing-glyph",
];

/// Whether `name` is a valid custom element name.
///
/// The WHATWG grammar: an ASCII lowercase letter, then any number of
/// `PCENChar`s, with at least one `-` among them, and the whole name not on
/// the reserved list. ASCII uppercase anywhere makes a name invalid;
/// non-ASCII capitals (e.g. `Ö`) are ordinary `PCENChar`s and stay legal.
pub fn is_valid_custom_element_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_ascii_lowercase() {
        return false;
    }
    if !chars.all(is_pcen_char) {
        return false;
    }
    if memchr(b'-', name.as_bytes()).is_none() {
        return false;
    }
    !RESERVED_NAMES.contains(&name)
}

/// `PCENChar` per the WHATWG grammar.
///
/// Surrogates cannot occur in a `&str`; U+00D7 and U+00F7 fall in the gaps
/// between the ranges and are rejected.
fn is_pcen_char(ch: char) -> bool {
    matches!(ch,
        '-' | '.' | '_'
        | '0'..='9'
        | 'a'..='z'
        | '\u{B7}'
        | '\u{C0}'..='\u{D6}'
        | '\u{D8}'..='\u{F6}'
        | '\u{F8}'..='\u{37D}'
        | '\u{37F}'..='\u{1FFF}'
        | '\u{200C}'..='\u{200D}'
        | '\u{203F}'..='\u{2040}'
        | '\u{2070}'..='\u{218F}'
        | '\u{2C00}'..='\u{2FEF}'
        | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}'
        | '\u{FDF0}'..='\u{FFFD}'
        | '\u{10000}'..='\u{EFFFF}')
}

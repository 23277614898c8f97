//! Escaping free text for XML 1.0 attributes and element bodies
//!
//! Text goes through a fixed pipeline:
//!
//! 1. missing or empty input becomes the caller's default
//! 2. code points XML cannot carry (or discourages) are removed
//! 3. `& < > " '` become entity references, `&` first
//! 4. `\n` and `\r` become a single space
//! 5. runs of spaces collapse to one
//! 6. leading and trailing whitespace is trimmed
//!
//! Rust strings never contain unpaired surrogates. Callers holding raw
//! UTF-16 code units use [`escape_utf16`], which filters out every unit
//! [`is_lone_surrogate`] flags before the same pipeline runs.

/// True for C0 controls other than tab, LF and CR, and for DEL plus the C1
/// block except NEL (U+0085)
///
/// LF and CR are kept here; the newline step turns them into spaces.
pub fn is_control_char(c: char) -> bool {
    matches!(
        c,
        '\u{0}'..='\u{8}'
            | '\u{B}'
            | '\u{C}'
            | '\u{E}'..='\u{1F}'
            | '\u{7F}'..='\u{84}'
            | '\u{86}'..='\u{9F}'
    )
}

/// True for Unicode non-characters: U+FDD0..U+FDEF and the last two code
/// points of every plane (U+FFFE, U+FFFF, U+1FFFE, ... U+10FFFF)
pub fn is_noncharacter(c: char) -> bool {
    let cp = c as u32;
    (0xFDD0..=0xFDEF).contains(&cp) || cp & 0xFFFE == 0xFFFE
}

/// True for U+FFFD, which only ever marks an earlier decoding failure
pub fn is_replacement_char(c: char) -> bool {
    c == char::REPLACEMENT_CHARACTER
}

pub fn is_high_surrogate(unit: u16) -> bool {
    (0xD800..=0xDBFF).contains(&unit)
}

pub fn is_low_surrogate(unit: u16) -> bool {
    (0xDC00..=0xDFFF).contains(&unit)
}

/// True when the code unit at `index` is a surrogate without its partner
pub fn is_lone_surrogate(units: &[u16], index: usize) -> bool {
    let Some(&unit) = units.get(index) else {
        return false;
    };
    if is_high_surrogate(unit) {
        !units.get(index + 1).is_some_and(|next| is_low_surrogate(*next))
    } else if is_low_surrogate(unit) {
        index == 0 || !is_high_surrogate(units[index - 1])
    } else {
        false
    }
}

/// True for any code point removed before escaping
pub fn is_stripped_char(c: char) -> bool {
    is_control_char(c) || is_noncharacter(c) || is_replacement_char(c)
}

/// Decode UTF-16, dropping unpaired surrogates instead of substituting U+FFFD
pub fn decode_utf16_strict(units: &[u16]) -> String {
    let paired: Vec<u16> = (0..units.len())
        .filter(|&index| !is_lone_surrogate(units, index))
        .map(|index| units[index])
        .collect();
    // every remaining surrogate has its partner, so nothing is substituted
    String::from_utf16_lossy(&paired)
}

/// Turn newlines into spaces and collapse runs of spaces
fn normalize_spaces(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_space = false;
    for c in input.chars() {
        let c = if c == '\n' || c == '\r' { ' ' } else { c };
        if c == ' ' {
            if !prev_space {
                out.push(' ');
            }
            prev_space = true;
        } else {
            out.push(c);
            prev_space = false;
        }
    }
    out
}

/// Whitespace removed at the ends: Unicode spaces, line terminators and the BOM, but not NEL
fn is_trimmed(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// Escape non-empty text for embedding in XML
pub fn escape_text(input: &str) -> String {
    let stripped: String = input.chars().filter(|c| !is_stripped_char(*c)).collect();
    let escaped = quick_xml::escape::escape(stripped.as_str());
    normalize_spaces(&escaped).trim_matches(is_trimmed).to_string()
}

/// Escape optional text, substituting `default_value` when it is missing or empty
///
/// The default is returned as given, without escaping.
pub fn escape_string(input: Option<&str>, default_value: &str) -> String {
    match input {
        Some(text) if !text.is_empty() => escape_text(text),
        _ => default_value.to_string(),
    }
}

/// Escape raw UTF-16 text, dropping lone surrogates first
pub fn escape_utf16(units: &[u16], default_value: &str) -> String {
    if units.is_empty() {
        return default_value.to_string();
    }
    escape_text(&decode_utf16_strict(units))
}

//! JavaScript string-literal serialization.
//!
//! Country names come straight from upstream data, so every string that
//! lands in a generated module goes through [`quote`]. The output is a
//! single-quoted literal that is valid in any ES5+ parser.

use std::fmt::Write;

/// Render `value` as a single-quoted JavaScript string literal.
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            // Line terminators inside string literals before ES2019
            '\u{2028}' | '\u{2029}' => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// True when `key` can be written as a bare object property name.
///
/// Only ASCII identifiers qualify. Reserved words are allowed as property
/// names since ES5.
pub fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Render an object property name: bare when possible, quoted otherwise.
pub fn property_key(key: &str) -> String {
    if is_identifier(key) {
        key.to_string()
    } else {
        quote(key)
    }
}

#[cfg(test)]
#[path = "tests/js_literal_tests.rs"]
mod tests;

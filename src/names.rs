//! Identifier checks, string quoting and whitespace normalisation.

use std::borrow::{Cow};

/// Returns `true` if `name` can be written bare, i.e. it matches
/// `[A-Za-z_$][A-Za-z0-9_$]*`.
pub fn is_identifier(name: &str) -> bool {
    let mut cs = name.chars();
    if let Some(c) = cs.next() {
        if !matches!(c, '_' | '$' | 'A'..='Z' | 'a'..='z') { return false; }
        cs.all(|c| matches!(c, '_' | '$' | '0'..='9' | 'A'..='Z' | 'a'..='z'))
    } else { false }
}

/// Encode `source` as a double-quoted string literal, using JSON escapes.
pub fn quote(source: &str) -> String {
    let mut ret = String::with_capacity(source.len() + 2);
    ret.push('"');
    for c in source.chars() {
        match c {
            '"' => ret.push_str("\\\""),
            '\\' => ret.push_str("\\\\"),
            '\u{8}' => ret.push_str("\\b"),
            '\u{c}' => ret.push_str("\\f"),
            '\n' => ret.push_str("\\n"),
            '\r' => ret.push_str("\\r"),
            '\t' => ret.push_str("\\t"),
            c @ '\u{0}'..='\u{1f}' => ret.push_str(&format!("\\u{:04x}", c as u32)),
            c => ret.push(c),
        }
    }
    ret.push('"');
    ret
}

/// Write `name` bare if possible, otherwise quoted.
pub fn key(name: &str) -> Cow<str> {
    if is_identifier(name) { Cow::Borrowed(name) } else { Cow::Owned(quote(name)) }
}

/// Replace every run of whitespace in `text`, however short, with a single
/// space. The result never contains a line break.
pub fn normalize_space(text: &str) -> String {
    let mut ret = String::with_capacity(text.len());
    let mut in_space = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_space { ret.push(' '); }
            in_space = true;
        } else {
            ret.push(c);
            in_space = false;
        }
    }
    ret
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers() {
        for name in ["a", "_", "$", "$ok", "camelCase", "snake_case2", "A1$"] {
            assert!(is_identifier(name), "{}", name);
        }
        for name in ["", "2x", "foo-bar", "a b", "é", "a.b", "[x]"] {
            assert!(!is_identifier(name), "{}", name);
        }
    }

    #[test]
    fn quoting() {
        assert_eq!(quote("plain"), r#""plain""#);
        assert_eq!(quote("a\"b"), r#""a\"b""#);
        assert_eq!(quote("back\\slash"), r#""back\\slash""#);
        assert_eq!(quote("tab\tline\ncr\r"), r#""tab\tline\ncr\r""#);
        assert_eq!(quote("\u{8}\u{c}"), r#""\b\f""#);
        assert_eq!(quote("\u{1}\u{1f}"), r#""\u0001\u001f""#);
        assert_eq!(quote("caf\u{e9} \u{7f}"), "\"caf\u{e9} \u{7f}\"");
    }

    #[test]
    fn keys() {
        assert_eq!(key("name"), "name");
        assert_eq!(key("foo-bar"), r#""foo-bar""#);
        assert_eq!(key(""), r#""""#);
    }

    #[test]
    fn whitespace() {
        assert_eq!(normalize_space("function  f(a,\n\t b)"), "function f(a, b)");
        assert_eq!(normalize_space("  x  "), " x ");
        assert_eq!(normalize_space(""), "");
    }

    #[test]
    fn single_whitespace_characters() {
        assert_eq!(normalize_space("x\ny"), "x y");
        assert_eq!(normalize_space("x\ty"), "x y");
        assert_eq!(normalize_space("(a,\rb)"), "(a, b)");
        assert_eq!(normalize_space("x y"), "x y");
    }
}

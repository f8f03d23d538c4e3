//! Node-reading helpers for the Python grammar.
//!
//! Everything here is purely syntactic: no evaluation, no constant
//! folding, no resolution of names defined elsewhere in the file.

use tree_sitter::Node;

/// Decodes a node's source text, falling back to empty on invalid UTF-8.
pub(crate) fn node_text<'a>(node: Node<'_>, src: &'a [u8]) -> &'a str {
    node.utf8_text(src).unwrap_or("")
}

/// A base-type reference in a class definition's superclass list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaseRef {
    /// Bare identifier, e.g. `StrEnum`.
    Bare(String),
    /// Module-qualified reference, e.g. `enum.StrEnum` as (prefix, name).
    Qualified(String, String),
}

/// Extracts base references from a `superclasses` argument list.
///
/// Only plain identifiers and single-level `module.Name` attributes are
/// recognized; keyword arguments, subscripts, calls, and deeper attribute
/// chains are ignored as unrecognized shapes.
#[must_use]
pub fn base_refs(superclasses: Node<'_>, src: &[u8]) -> Vec<BaseRef> {
    let mut refs = Vec::new();
    let mut cursor = superclasses.walk();

    for child in superclasses.named_children(&mut cursor) {
        match child.kind() {
            "identifier" => refs.push(BaseRef::Bare(node_text(child, src).to_owned())),
            "attribute" => {
                let object = child.child_by_field_name("object");
                let attribute = child.child_by_field_name("attribute");
                if let (Some(object), Some(attribute)) = (object, attribute) {
                    if object.kind() == "identifier" {
                        refs.push(BaseRef::Qualified(
                            node_text(object, src).to_owned(),
                            node_text(attribute, src).to_owned(),
                        ));
                    }
                }
            }
            _ => {}
        }
    }

    refs
}

/// Decodes a `string` node into its literal content.
///
/// Returns `None` for anything that is not a plain single string token:
/// f-strings (with or without interpolations), byte strings, and nodes of
/// any other kind. Raw strings are returned with their backslashes intact;
/// ordinary strings have escape sequences resolved.
#[must_use]
pub fn decode_string(node: Node<'_>, src: &[u8]) -> Option<String> {
    if node.kind() != "string" {
        return None;
    }

    let mut start = None;
    let mut end = None;
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        match child.kind() {
            "string_start" => start = Some(child),
            "string_end" => end = Some(child),
            "interpolation" => return None,
            _ => {}
        }
    }
    let (start, end) = (start?, end?);

    let prefix = node_text(start, src);
    let mut raw = false;
    for c in prefix.chars() {
        match c {
            'f' | 'F' | 'b' | 'B' => return None,
            'r' | 'R' => raw = true,
            _ => {}
        }
    }

    let content = std::str::from_utf8(&src[start.end_byte()..end.start_byte()]).ok()?;
    if raw {
        Some(content.to_owned())
    } else {
        Some(unescape(content))
    }
}

/// Resolves Python escape sequences in a non-raw string body.
///
/// Unrecognized escapes keep the backslash, matching CPython's behavior
/// for invalid sequences.
fn unescape(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            None => out.push('\\'),
            Some('\n') => {} // line continuation
            Some('\\') => out.push('\\'),
            Some('\'') => out.push('\''),
            Some('"') => out.push('"'),
            Some('a') => out.push('\u{07}'),
            Some('b') => out.push('\u{08}'),
            Some('f') => out.push('\u{0c}'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('v') => out.push('\u{0b}'),
            Some('x') => push_hex_escape(&mut out, &mut chars, 2, 'x'),
            Some('u') => push_hex_escape(&mut out, &mut chars, 4, 'u'),
            Some('U') => push_hex_escape(&mut out, &mut chars, 8, 'U'),
            Some(d @ '0'..='7') => {
                let mut value = d as u32 - '0' as u32;
                for _ in 0..2 {
                    match chars.peek() {
                        Some(&n @ '0'..='7') => {
                            value = value * 8 + (n as u32 - '0' as u32);
                            chars.next();
                        }
                        _ => break,
                    }
                }
                out.push(char::from_u32(value).unwrap_or('\u{fffd}'));
            }
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
        }
    }

    out
}

fn push_hex_escape(
    out: &mut String,
    chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
    digits: usize,
    marker: char,
) {
    let mut value: u32 = 0;
    let mut taken = String::new();
    for _ in 0..digits {
        match chars.peek().and_then(|c| c.to_digit(16).map(|d| (*c, d))) {
            Some((c, d)) => {
                value = value * 16 + d;
                taken.push(c);
                chars.next();
            }
            None => {
                // Incomplete escape: keep it verbatim.
                out.push('\\');
                out.push(marker);
                out.push_str(&taken);
                return;
            }
        }
    }
    out.push(char::from_u32(value).unwrap_or('\u{fffd}'));
}

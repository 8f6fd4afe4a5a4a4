//! Splits the text between `<` and `>` into a tag name and attributes.

use crate::types::Attributes;

#[derive(Debug, PartialEq, Eq)]
pub(super) struct Directive {
    pub(super) name: String,
    pub(super) attributes: Attributes,
}

/// Returns `None` for an empty or whitespace-only directive (`<>`).
///
/// Tokens are whitespace separated, so a quoted value containing spaces is
/// split across several attributes.
pub(super) fn parse_directive(raw: &str, strip_quotes: bool) -> Option<Directive> {
    let mut parts = raw.split_whitespace();
    let name = parts.next()?.to_lowercase();
    let mut attributes = Attributes::new();
    for pair in parts {
        match pair.split_once('=') {
            Some((key, value)) => {
                let value = if strip_quotes {
                    unquote(value)
                } else {
                    value
                };
                attributes.insert(key.to_lowercase(), value.to_string());
            }
            None => attributes.insert(pair.to_lowercase(), String::new()),
        }
    }
    Some(Directive { name, attributes })
}

fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    let quoted = value.chars().count() > 2
        && matches!(bytes[0], b'"' | b'\'')
        && bytes[bytes.len() - 1] == bytes[0];
    if quoted {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

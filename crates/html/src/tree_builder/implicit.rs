//! Structural tags the markup may omit.

/// Shape of the open-element stack, as far as implicit insertion cares.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum OpenPath {
    Empty,
    /// Exactly `[html]`.
    Html,
    /// Exactly `[html, head]`.
    HtmlHead,
    Other,
}

pub(super) fn is_head_tag(name: &str) -> bool {
    matches!(
        name,
        "base" | "basefont" | "bgsound" | "noscript" | "link" | "meta" | "script" | "style" | "title"
    )
}

/// The structural tag to synthesize before inserting `incoming`, if any.
///
/// `incoming` is `None` for text. Callers re-query after each insertion until
/// this returns `None`.
pub(super) fn implied_tag(path: OpenPath, incoming: Option<&str>) -> Option<&'static str> {
    match path {
        OpenPath::Empty if incoming != Some("html") => Some("html"),
        OpenPath::Html if !matches!(incoming, Some("head" | "body" | "/html")) => {
            if incoming.is_some_and(is_head_tag) {
                Some("head")
            } else {
                Some("body")
            }
        }
        OpenPath::HtmlHead if !matches!(incoming, Some(tag) if tag == "/head" || is_head_tag(tag)) => {
            Some("/head")
        }
        _ => None,
    }
}

//! Tag-soup tree builder.
//!
//! Scans the source once, left to right, splitting it at `<` and `>` into text
//! runs and tag directives. Structural tags that the markup leaves out (`html`,
//! `head`, `body`, the closing `/head`) are synthesized so every finished tree
//! has an `html` root. Malformed markup is never an error: unmatched close
//! tags close whatever is open, unclosed elements are closed at end of input.
//!
//! Known simplifications (intentional):
//! - No entity decoding, comments are recognised only as `!`-prefixed tags.
//! - Close tags are not matched by name.
//! - Attribute values are split on whitespace, quoted or not.
//! - Whitespace is Unicode `White_Space`, so the ASCII separators U+001C to
//!   U+001F count as text: a run of them alone still makes a text node.

mod directive;
mod implicit;


use std::fmt;

use memchr::memchr2;

use crate::types::{Attributes, Dom, Id, Node, NodeKind};

use directive::{Directive, parse_directive};
use implicit::{OpenPath, implied_tag};

const LOG_TARGET: &str = "html.tree_builder";

#[derive(Clone, Copy, Debug)]
pub struct TreeBuilderConfig {
    /// Strip surrounding `"` / `'` from attribute values.
    ///
    /// Off by default: values are stored exactly as written, quotes included.
    pub strip_attribute_quotes: bool,
    /// Upper bound on structural tags synthesized before a single insertion.
    pub max_implicit_steps: u8,
}

impl Default for TreeBuilderConfig {
    fn default() -> Self {
        Self {
            strip_attribute_quotes: false,
            max_implicit_steps: 8,
        }
    }
}

/// Engine invariant violation (bug), not a recoverable markup error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TreeBuilderError {
    /// Implicit-tag insertion did not settle within the configured step budget.
    ImplicitTagLoop { tag: Option<String>, steps: u8 },
    /// A node had to be attached while no element was open.
    OpenStackUnderflow,
}

impl fmt::Display for TreeBuilderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeBuilderError::ImplicitTagLoop { tag, steps } => write!(
                f,
                "implicit tag insertion for {} did not settle after {steps} steps",
                tag.as_deref().unwrap_or("#text")
            ),
            TreeBuilderError::OpenStackUnderflow => {
                write!(f, "open element stack is empty")
            }
        }
    }
}

impl std::error::Error for TreeBuilderError {}

pub type TreeBuilderResult<T> = Result<T, TreeBuilderError>;

fn is_self_closing(name: &str) -> bool {
    matches!(
        name,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

/// Incremental tree builder. Scanner state survives across [`TreeBuilder::feed`]
/// calls, so a document may be fed whole or in chunks.
#[derive(Debug)]
pub struct TreeBuilder {
    config: TreeBuilderConfig,
    nodes: Vec<Node>,
    unfinished: Vec<Id>,
    buffer: String,
    in_tag: bool,
}

impl TreeBuilder {
    pub fn new(config: TreeBuilderConfig) -> Self {
        Self {
            config,
            nodes: Vec::new(),
            unfinished: Vec::new(),
            buffer: String::new(),
            in_tag: false,
        }
    }

    pub fn feed(&mut self, input: &str) -> TreeBuilderResult<()> {
        let bytes = input.as_bytes();
        let mut i = 0;
        // `<` and `>` are ASCII, so every cut lands on a char boundary.
        while i < bytes.len() {
            let Some(rel) = memchr2(b'<', b'>', &bytes[i..]) else {
                self.buffer.push_str(&input[i..]);
                break;
            };
            let pos = i + rel;
            self.buffer.push_str(&input[i..pos]);
            if bytes[pos] == b'<' {
                self.open_angle()?;
            } else {
                self.close_angle()?;
            }
            i = pos + 1;
        }
        Ok(())
    }

    pub fn finish(mut self) -> TreeBuilderResult<Dom> {
        // An unterminated tag at end of input is dropped.
        if !self.in_tag && !self.buffer.is_empty() {
            let text = std::mem::take(&mut self.buffer);
            self.add_text(text)?;
        }
        if self.unfinished.is_empty() {
            self.implicit_tags(None)?;
        }
        while self.unfinished.len() > 1 {
            self.close_current()?;
        }
        let root = self
            .unfinished
            .pop()
            .ok_or(TreeBuilderError::OpenStackUnderflow)?;
        log::debug!(target: LOG_TARGET, "finished tree with {} nodes", self.nodes.len());
        Ok(Dom::from_parts(self.nodes, root))
    }

    fn open_angle(&mut self) -> TreeBuilderResult<()> {
        if self.in_tag {
            // A nested `<` abandons the tag in progress.
            self.buffer.clear();
        } else {
            self.in_tag = true;
        }
        if !self.buffer.is_empty() {
            let text = std::mem::take(&mut self.buffer);
            self.add_text(text)?;
        }
        Ok(())
    }

    fn close_angle(&mut self) -> TreeBuilderResult<()> {
        self.in_tag = false;
        let raw = std::mem::take(&mut self.buffer);
        self.add_tag(&raw)
    }

    fn add_text(&mut self, text: String) -> TreeBuilderResult<()> {
        if text.chars().all(char::is_whitespace) {
            return Ok(());
        }
        self.implicit_tags(None)?;
        let parent = self.current().ok_or(TreeBuilderError::OpenStackUnderflow)?;
        log::trace!(target: LOG_TARGET, "text ({} bytes) under {parent:?}", text.len());
        let id = self.alloc(Some(parent), NodeKind::Text { text });
        self.append_child(parent, id);
        Ok(())
    }

    fn add_tag(&mut self, raw: &str) -> TreeBuilderResult<()> {
        let Some(Directive { name, attributes }) =
            parse_directive(raw, self.config.strip_attribute_quotes)
        else {
            return Ok(());
        };
        if name.starts_with('!') {
            return Ok(());
        }
        self.implicit_tags(Some(name.as_str()))?;
        self.insert_tag(name, attributes)
    }

    fn implicit_tags(&mut self, incoming: Option<&str>) -> TreeBuilderResult<()> {
        let steps = self.config.max_implicit_steps;
        for _ in 0..steps {
            let Some(tag) = implied_tag(self.open_path(), incoming) else {
                return Ok(());
            };
            log::trace!(target: LOG_TARGET, "implied <{tag}> before {incoming:?}");
            self.insert_tag(tag.to_string(), Attributes::new())?;
        }
        if implied_tag(self.open_path(), incoming).is_none() {
            return Ok(());
        }
        Err(TreeBuilderError::ImplicitTagLoop {
            tag: incoming.map(str::to_string),
            steps,
        })
    }

    fn insert_tag(&mut self, name: String, attributes: Attributes) -> TreeBuilderResult<()> {
        if name.starts_with('/') {
            if self.unfinished.len() > 1 {
                self.close_current()?;
            }
            return Ok(());
        }
        if is_self_closing(&name) {
            let parent = self.current().ok_or(TreeBuilderError::OpenStackUnderflow)?;
            let id = self.alloc(Some(parent), NodeKind::Element { name, attributes });
            self.append_child(parent, id);
            return Ok(());
        }
        let parent = self.current();
        let id = self.alloc(parent, NodeKind::Element { name, attributes });
        self.unfinished.push(id);
        Ok(())
    }

    /// Pops the innermost open element and attaches it to the one below.
    fn close_current(&mut self) -> TreeBuilderResult<()> {
        let node = self
            .unfinished
            .pop()
            .ok_or(TreeBuilderError::OpenStackUnderflow)?;
        let parent = self.current().ok_or(TreeBuilderError::OpenStackUnderflow)?;
        self.append_child(parent, node);
        Ok(())
    }

    fn current(&self) -> Option<Id> {
        self.unfinished.last().copied()
    }

    fn open_path(&self) -> OpenPath {
        let name_at = |i: usize| self.nodes[self.unfinished[i].index()].tag_name();
        match self.unfinished.len() {
            0 => OpenPath::Empty,
            1 if name_at(0) == Some("html") => OpenPath::Html,
            2 if name_at(0) == Some("html") && name_at(1) == Some("head") => OpenPath::HtmlHead,
            _ => OpenPath::Other,
        }
    }

    fn alloc(&mut self, parent: Option<Id>, kind: NodeKind) -> Id {
        let id = Id(self.nodes.len() as u32);
        self.nodes.push(Node {
            id,
            parent,
            children: Vec::new(),
            kind,
        });
        id
    }

    fn append_child(&mut self, parent: Id, child: Id) {
        debug_assert!(matches!(
            self.nodes[parent.index()].kind,
            NodeKind::Element { .. }
        ));
        self.nodes[parent.index()].children.push(child);
    }
}

/// Parses a complete document with the default configuration.
pub fn parse(source: &str) -> TreeBuilderResult<Dom> {
    parse_with_config(source, TreeBuilderConfig::default())
}

pub fn parse_with_config(source: &str, config: TreeBuilderConfig) -> TreeBuilderResult<Dom> {
    let mut builder = TreeBuilder::new(config);
    builder.feed(source)?;
    builder.finish()
}

/// Decodes `bytes` as UTF-8 (invalid sequences become U+FFFD) and parses them.
pub fn parse_bytes(bytes: &[u8]) -> TreeBuilderResult<Dom> {
    parse(&String::from_utf8_lossy(bytes))
}

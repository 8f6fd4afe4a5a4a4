use std::fmt;
use std::sync::Arc;

use html::{Dom, Id, NodeKind};

use crate::display_list::{DisplayItem, DisplayList};
use crate::font_cache::{Font, FontCache};
use crate::options::{LayoutOptions, MIN_FONT_SIZE};
use crate::text::{FontError, FontKey, Style, TextMeasurer, Weight};

const LOG_TARGET: &str = "layout.engine";

#[derive(Clone, Debug, PartialEq)]
pub enum LayoutError {
    Font(FontError),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::Font(err) => write!(f, "font capability failed: {err}"),
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LayoutError::Font(err) => Some(err),
        }
    }
}

impl From<FontError> for LayoutError {
    fn from(err: FontError) -> Self {
        LayoutError::Font(err)
    }
}

/// Lays out `dom` with the browser defaults.
pub fn layout(
    dom: &Dom,
    measurer: &dyn TextMeasurer,
    cache: &mut FontCache,
) -> Result<DisplayList, LayoutError> {
    layout_with_options(dom, measurer, cache, LayoutOptions::browser_defaults())
}

pub fn layout_with_options(
    dom: &Dom,
    measurer: &dyn TextMeasurer,
    cache: &mut FontCache,
    options: LayoutOptions,
) -> Result<DisplayList, LayoutError> {
    let mut state = DocumentLayout::new(measurer, cache, options);
    state.walk(dom)?;
    state.flush();
    log::debug!(
        target: LOG_TARGET,
        "laid out {} items, {} fonts cached",
        state.display_list.len(),
        state.cache.len()
    );
    Ok(DisplayList::from_items(state.display_list))
}

/// Typographic state. Plain counters, not a stack: a close tag undoes its
/// open effect unconditionally, so `<b><b>x</b>y</b>` sets `y` in normal weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct FontState {
    size: i32,
    weight: Weight,
    style: Style,
}

impl FontState {
    fn key(self) -> FontKey {
        FontKey {
            size: self.size.max(MIN_FONT_SIZE),
            weight: self.weight,
            style: self.style,
        }
    }
}

/// A word waiting on the current line for its baseline.
#[derive(Debug)]
struct LineItem {
    x: f32,
    text: String,
    font: Arc<Font>,
}

enum Visit {
    Enter(Id),
    Leave(Id),
}

struct DocumentLayout<'a> {
    measurer: &'a dyn TextMeasurer,
    cache: &'a mut FontCache,
    options: LayoutOptions,
    display_list: Vec<DisplayItem>,
    line: Vec<LineItem>,
    cursor_x: f32,
    cursor_y: f32,
    font: FontState,
}

impl<'a> DocumentLayout<'a> {
    fn new(measurer: &'a dyn TextMeasurer, cache: &'a mut FontCache, options: LayoutOptions) -> Self {
        Self {
            measurer,
            cache,
            options,
            display_list: Vec::new(),
            line: Vec::new(),
            cursor_x: options.hstep,
            cursor_y: options.vstep,
            font: FontState {
                size: options.default_font_size,
                weight: Weight::Normal,
                style: Style::Roman,
            },
        }
    }

    /// Depth-first walk with an explicit stack so deep trees cannot overflow.
    fn walk(&mut self, dom: &Dom) -> Result<(), LayoutError> {
        let mut stack = vec![Visit::Enter(dom.root())];
        while let Some(visit) = stack.pop() {
            match visit {
                Visit::Enter(id) => {
                    let node = dom.node(id);
                    match &node.kind {
                        NodeKind::Text { text } => {
                            for word in text.split_whitespace() {
                                self.word(word)?;
                            }
                        }
                        NodeKind::Element { name, .. } => {
                            self.open_tag(name);
                            stack.push(Visit::Leave(id));
                            stack.extend(node.children.iter().rev().map(|&c| Visit::Enter(c)));
                        }
                    }
                }
                Visit::Leave(id) => {
                    if let Some(name) = dom.node(id).tag_name() {
                        self.close_tag(name);
                    }
                }
            }
        }
        Ok(())
    }

    fn open_tag(&mut self, tag: &str) {
        match tag {
            "i" => self.font.style = Style::Italic,
            "b" => self.font.weight = Weight::Bold,
            "small" => self.font.size -= 2,
            "big" => self.font.size += 4,
            "br" | "p" => self.flush(),
            _ => {}
        }
    }

    fn close_tag(&mut self, tag: &str) {
        match tag {
            "i" => self.font.style = Style::Roman,
            "b" => self.font.weight = Weight::Normal,
            "small" => self.font.size += 2,
            "big" => self.font.size -= 4,
            "br" => self.flush(),
            "p" => {
                self.flush();
                if self.options.paragraph_gap {
                    self.cursor_y += self.options.vstep;
                }
            }
            _ => {}
        }
    }

    fn word(&mut self, word: &str) -> Result<(), LayoutError> {
        let font = self.cache.get_or_load(self.measurer, self.font.key())?;
        let w = self.measurer.measure(word, font.key())?;
        if self.cursor_x + w >= self.options.width - self.options.hstep {
            self.flush();
        }
        let advance = w + font.space_width();
        self.line.push(LineItem {
            x: self.cursor_x,
            text: word.to_string(),
            font,
        });
        self.cursor_x += advance;
        Ok(())
    }

    /// Commits the pending line at a shared baseline.
    fn flush(&mut self) {
        if self.line.is_empty() {
            return;
        }
        let spacing = self.options.line_spacing;
        let max_ascent = self
            .line
            .iter()
            .map(|item| item.font.ascent())
            .fold(f32::NEG_INFINITY, f32::max);
        let max_descent = self
            .line
            .iter()
            .map(|item| item.font.descent())
            .fold(f32::NEG_INFINITY, f32::max);
        let baseline = self.cursor_y + spacing * max_ascent;
        log::trace!(
            target: LOG_TARGET,
            "flush {} words at baseline {baseline}",
            self.line.len()
        );
        for LineItem { x, text, font } in self.line.drain(..) {
            self.display_list.push(DisplayItem {
                x,
                y: baseline - font.ascent(),
                text,
                font,
            });
        }
        self.cursor_y = baseline + spacing * max_descent;
        self.cursor_x = self.options.hstep;
    }
}

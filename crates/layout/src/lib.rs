//! Text layout: walks an [`html::Dom`] and produces a display list of
//! absolutely positioned words.
//!
//! Layout tracks a flat typographic state (size, weight, style) toggled by a
//! handful of inline tags, breaks lines greedily against a fixed width, and
//! aligns every word on a line to a shared baseline. Font shaping is an
//! injected capability ([`TextMeasurer`]) whose results are memoized in a
//! caller-owned [`FontCache`].

mod display_list;
mod engine;
mod font_cache;
mod options;
mod text;
mod viewport;


pub use display_list::{DisplayItem, DisplayList};
pub use engine::{LayoutError, layout, layout_with_options};
pub use font_cache::{Font, FontCache};
pub use options::{
    DEFAULT_FONT_SIZE, HSTEP, LINE_SPACING, LayoutOptions, MIN_FONT_SIZE, VSTEP, WIDTH,
};
pub use text::{ApproxTextMeasurer, FontError, FontKey, FontMetrics, Style, TextMeasurer, Weight};
pub use viewport::{SCROLL_STEP, VIEWPORT_HEIGHT, Viewport};

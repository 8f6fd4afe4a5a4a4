/// Horizontal step: left margin, right margin, and line start.
pub const HSTEP: f32 = 13.0;
/// Vertical step: top margin and paragraph gap.
pub const VSTEP: f32 = 18.0;
/// Viewport width the line breaker wraps against.
pub const WIDTH: f32 = 800.0;
pub const DEFAULT_FONT_SIZE: i32 = 12;
/// Smallest size ever requested from the font capability.
pub const MIN_FONT_SIZE: i32 = 1;
/// Multiplier applied to the tallest ascent/descent on a line.
pub const LINE_SPACING: f32 = 1.25;

/// Per-call configuration for the layout engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutOptions {
    pub hstep: f32,
    pub vstep: f32,
    pub width: f32,
    pub default_font_size: i32,
    pub line_spacing: f32,
    /// Advance by `vstep` after every closing `</p>`.
    pub paragraph_gap: bool,
}

impl LayoutOptions {
    pub fn browser_defaults() -> Self {
        Self {
            hstep: HSTEP,
            vstep: VSTEP,
            width: WIDTH,
            default_font_size: DEFAULT_FONT_SIZE,
            line_spacing: LINE_SPACING,
            paragraph_gap: true,
        }
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self::browser_defaults()
    }
}

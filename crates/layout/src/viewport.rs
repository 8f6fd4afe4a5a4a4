/// Height of the visible window.
pub const VIEWPORT_HEIGHT: f32 = 600.0;
/// Distance moved by one scroll step.
pub const SCROLL_STEP: f32 = 100.0;

/// Scroll state of the window a display list is painted into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub scroll: f32,
    pub height: f32,
    pub scroll_step: f32,
}

impl Viewport {
    pub fn browser_defaults() -> Self {
        Self {
            scroll: 0.0,
            height: VIEWPORT_HEIGHT,
            scroll_step: SCROLL_STEP,
        }
    }

    pub fn scroll_down(&mut self) {
        self.scroll += self.scroll_step;
    }

    /// Never scrolls above the top of the document.
    pub fn scroll_up(&mut self) {
        self.scroll = (self.scroll - self.scroll_step).max(0.0);
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::browser_defaults()
    }
}

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Weight {
    Normal,
    Bold,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Style {
    Roman,
    Italic,
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Weight::Normal => "normal",
            Weight::Bold => "bold",
        })
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Style::Roman => "roman",
            Style::Italic => "italic",
        })
    }
}

/// The (size, weight, style) triple that selects a concrete font.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FontKey {
    pub size: i32,
    pub weight: Weight,
    pub style: Style,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontMetrics {
    /// Distance from the top of the glyph box to the baseline.
    pub ascent: f32,
    /// Distance from the baseline to the bottom of the glyph box.
    pub descent: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FontError {
    InvalidSize { size: i32 },
    Unavailable { key: FontKey, reason: String },
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontError::InvalidSize { size } => write!(f, "invalid font size: {size}"),
            FontError::Unavailable { key, reason } => write!(
                f,
                "font {} {} {} unavailable: {reason}",
                key.size, key.weight, key.style
            ),
        }
    }
}

impl std::error::Error for FontError {}

/// Font shaping capability the layout engine measures text with.
///
/// Implementations should be pure: the same inputs always give the same
/// answer, which is what makes [`crate::FontCache`] sound.
pub trait TextMeasurer {
    /// Width of `text` in layout units when rendered with `font`.
    fn measure(&self, text: &str, font: &FontKey) -> Result<f32, FontError>;

    fn metrics(&self, font: &FontKey) -> Result<FontMetrics, FontError>;
}

/// Deterministic stand-in for a real font stack.
///
/// Every glyph advances by a fixed fraction of the font size. Ascent and
/// descent use a typical 80/20 split of the em box.
#[derive(Clone, Copy, Debug, Default)]
pub struct ApproxTextMeasurer;

impl ApproxTextMeasurer {
    const ADVANCE_PER_EM: f32 = 0.6;
    const BOLD_FACTOR: f32 = 1.1;
    const ASCENT_PER_EM: f32 = 0.8;

    fn em(font: &FontKey) -> Result<f32, FontError> {
        if font.size <= 0 {
            return Err(FontError::InvalidSize { size: font.size });
        }
        Ok(font.size as f32)
    }
}

impl TextMeasurer for ApproxTextMeasurer {
    fn measure(&self, text: &str, font: &FontKey) -> Result<f32, FontError> {
        let mut advance = Self::em(font)? * Self::ADVANCE_PER_EM;
        if font.weight == Weight::Bold {
            advance *= Self::BOLD_FACTOR;
        }
        Ok(text.chars().count() as f32 * advance)
    }

    fn metrics(&self, font: &FontKey) -> Result<FontMetrics, FontError> {
        let em = Self::em(font)?;
        let ascent = em * Self::ASCENT_PER_EM;
        Ok(FontMetrics {
            ascent,
            descent: em - ascent,
        })
    }
}

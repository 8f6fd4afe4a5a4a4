use std::collections::HashMap;
use std::sync::Arc;

use crate::text::{FontError, FontKey, FontMetrics, TextMeasurer};

/// A loaded font: its key plus the measurements every line flush needs.
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    key: FontKey,
    metrics: FontMetrics,
    space_width: f32,
}

impl Font {
    pub fn key(&self) -> &FontKey {
        &self.key
    }

    pub fn ascent(&self) -> f32 {
        self.metrics.ascent
    }

    pub fn descent(&self) -> f32 {
        self.metrics.descent
    }

    /// Width of a single space, used as the gap between words.
    pub fn space_width(&self) -> f32 {
        self.space_width
    }
}

/// Font descriptors keyed by (size, weight, style).
///
/// Entries are written once and never evicted. Owned by whoever drives
/// layout and lent to each layout pass, so repeated passes share loads.
#[derive(Debug, Default)]
pub struct FontCache {
    fonts: HashMap<FontKey, Arc<Font>>,
}

impl FontCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached font for `key`, loading it through `measurer` on a miss.
    pub fn get_or_load(
        &mut self,
        measurer: &dyn TextMeasurer,
        key: FontKey,
    ) -> Result<Arc<Font>, FontError> {
        if let Some(font) = self.fonts.get(&key) {
            return Ok(Arc::clone(font));
        }
        let metrics = measurer.metrics(&key)?;
        let space_width = measurer.measure(" ", &key)?;
        log::debug!(
            target: "layout.fonts",
            "loaded font {} {} {}: ascent={} descent={} space={space_width}",
            key.size, key.weight, key.style, metrics.ascent, metrics.descent
        );
        let font = Arc::new(Font {
            key,
            metrics,
            space_width,
        });
        self.fonts.insert(key, Arc::clone(&font));
        Ok(font)
    }

    pub fn get(&self, key: &FontKey) -> Option<&Arc<Font>> {
        self.fonts.get(key)
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}

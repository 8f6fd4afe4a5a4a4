use std::sync::Arc;

use crate::font_cache::Font;
use crate::viewport::Viewport;

/// One positioned word, ready to paint.
///
/// `y` is the top of the glyph box in document coordinates; painters
/// subtract their scroll offset.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayItem {
    pub x: f32,
    pub y: f32,
    pub text: String,
    pub font: Arc<Font>,
}

impl DisplayItem {
    pub fn baseline(&self) -> f32 {
        self.y + self.font.ascent()
    }

    pub fn bottom(&self) -> f32 {
        self.baseline() + self.font.descent()
    }
}

/// Display items in emission order, line by line from the top.
///
/// Within a line items share a baseline, so `y` can step up for a taller
/// font; across lines it only grows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisplayList {
    items: Vec<DisplayItem>,
}

impl DisplayList {
    pub(crate) fn from_items(items: Vec<DisplayItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[DisplayItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DisplayItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Lowest glyph-box bottom in the document, or 0 for an empty list.
    pub fn height(&self) -> f32 {
        self.items
            .iter()
            .map(DisplayItem::bottom)
            .fold(0.0, f32::max)
    }

    /// Items overlapping `viewport`, paired with their viewport-relative `y`.
    ///
    /// An item counts as visible unless it starts below the bottom edge or
    /// ends (`y + line_height`) above the top edge.
    pub fn visible<'a>(
        &'a self,
        viewport: &Viewport,
        line_height: f32,
    ) -> impl Iterator<Item = (f32, &'a DisplayItem)> + 'a {
        let top = viewport.scroll;
        let bottom = viewport.scroll + viewport.height;
        self.items
            .iter()
            .filter(move |item| !(item.y > bottom || item.y + line_height < top))
            .map(move |item| (item.y - top, item))
    }
}

impl<'a> IntoIterator for &'a DisplayList {
    type Item = &'a DisplayItem;
    type IntoIter = std::slice::Iter<'a, DisplayItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

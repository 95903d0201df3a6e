//! Discretization of the continuous scroll offset into page-change events.
//!
//! Offsets arrive continuously and noisily while the content decelerates.
//! [`PageIndexResolver`] turns a settled offset into a page index and only
//! reports a change when that index differs from the last one it reported.

/// Notification that the settled page differs from the previously reported
/// one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageChangeEvent {
    /// The newly settled page.
    pub index: usize,
}

/// Resolves settled offsets to page indices and filters repeated indices.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageIndexResolver {
    last_emitted: usize,
}

impl PageIndexResolver {
    /// Creates a resolver whose last reported page is 0, the page the
    /// indicator starts on.
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps a scroll offset to a page index.
    ///
    /// The offset is rounded to whole points and wrapped modulo the total
    /// content width before the integer division, so transient overscroll
    /// past the last page wraps instead of producing an index beyond the
    /// range. Negative overscroll keeps its sign through the modulo and is
    /// clamped to the first page. Degenerate inputs (no pages, or a viewport
    /// narrower than one point) resolve to page 0.
    pub fn resolve(scroll_offset: f32, page_count: usize, viewport_width: f32) -> usize {
        let width = viewport_width as i64;
        if page_count == 0 || width <= 0 {
            return 0;
        }
        let span = (page_count as i64).saturating_mul(width);
        let rounded = scroll_offset.round() as i64;
        let index = (rounded % span) / width;
        index.clamp(0, page_count as i64 - 1) as usize
    }

    /// Records a settled index, returning an event only if it changed.
    pub fn on_settle(&mut self, new_index: usize) -> Option<PageChangeEvent> {
        if new_index == self.last_emitted {
            return None;
        }
        self.last_emitted = new_index;
        Some(PageChangeEvent { index: new_index })
    }

    /// Returns the last index reported by [`Self::on_settle`].
    pub fn last_emitted(&self) -> usize {
        self.last_emitted
    }

    /// Overrides the last reported index without emitting anything.
    pub fn reset_to(&mut self, index: usize) {
        self.last_emitted = index;
    }
}

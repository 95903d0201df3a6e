//! Mapping between the content scroll offset and header item positions.
//!
//! Header items sit centered in the navigation bar and are spread apart by a
//! spacing distance controlled by [`LayoutStyle`]. As the content scrolls,
//! every item shifts left by a parallax term proportional to the offset, so
//! that the item of the visible page is always the centered one.
use crate::{
    error::{PagingError, Result},
    units::{Rect, Size},
};

/// Base distance between two adjacent header items, before the style offset.
pub const BASE_SPACING: i32 = 100;

/// Spacing mode between header items.
///
/// The numeric value of a style is added to [`BASE_SPACING`] to obtain the
/// effective distance between adjacent items.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutStyle {
    /// Side items sit on the bar bounds.
    OnBounds,
    /// Side items sit close to the center item.
    Close,
    /// Side items are moderately spread.
    Normal,
    /// Side items are far from the center item.
    Far,
    /// Plain base spacing.
    #[default]
    Default,
    /// Items overlap the base spacing and squeeze together.
    CloseToEachOther,
    /// Arbitrary offset added to the base spacing.
    Custom(i32),
}

impl LayoutStyle {
    /// Returns the offset this style adds to [`BASE_SPACING`].
    pub fn offset_value(self) -> i32 {
        match self {
            Self::OnBounds => 40,
            Self::Close => 30,
            Self::Normal => 20,
            Self::Far => 10,
            Self::Default => 0,
            Self::CloseToEachOther => -40,
            Self::Custom(offset) => offset,
        }
    }

    /// Returns the effective distance between adjacent items.
    ///
    /// Fails with [`PagingError::Configuration`] when the distance would be
    /// zero, since the parallax term divides by it.
    pub fn distance(self) -> Result<f32> {
        let offset = self.offset_value();
        let distance = BASE_SPACING.saturating_add(offset);
        if distance == 0 {
            return Err(PagingError::Configuration { offset });
        }
        Ok(distance as f32)
    }
}

/// Horizontal position of a header item for the given scroll offset.
///
/// `viewport_width / 2 - item_width / 2 + index * distance
///  - scroll_offset / (viewport_width / distance)`
///
/// The result is not clamped; items scrolled away from the center leave the
/// bar the same way pages leave the viewport.
pub fn position_for(
    item_size: Size,
    item_index: usize,
    style: LayoutStyle,
    scroll_offset: f32,
    viewport_width: f32,
) -> Result<f32> {
    let distance = style.distance()?;
    let mut x = centered_x(item_size, viewport_width);
    x += item_index as f32 * distance;
    x -= scroll_offset / (viewport_width / distance);
    Ok(x)
}

/// Position of a header item before any scroll tick has been received.
///
/// Always uses the base spacing, whatever style is configured.
pub fn static_position_for(item_size: Size, item_index: usize, viewport_width: f32) -> f32 {
    centered_x(item_size, viewport_width) + item_index as f32 * BASE_SPACING as f32
}

/// Scroll offset that brings the page at `target_index` fully into view.
pub fn scroll_offset_for(target_index: usize, viewport_width: f32) -> f32 {
    target_index as f32 * viewport_width
}

/// Frame a page occupies inside the scroll content.
pub fn page_frame(index: usize, viewport: Size) -> Rect {
    Rect::from_xywh(
        scroll_offset_for(index, viewport.width),
        0.0,
        viewport.width,
        viewport.height,
    )
}

/// Total scrollable content size for `page_count` pages laid side by side.
pub fn content_size(page_count: usize, viewport: Size) -> Size {
    Size::new(viewport.width * page_count as f32, viewport.height)
}

fn centered_x(item_size: Size, viewport_width: f32) -> f32 {
    viewport_width / 2.0 - item_size.width / 2.0
}

//! Collaborator interfaces implemented by the embedding UI layer.
//!
//! The paging engine never creates native widgets. It talks to:
//!
//! - a [`ScrollHost`], the horizontally scrolling container holding the
//!   pages. The host reports offset changes back through
//!   [`PagingController::on_scroll`](crate::PagingController::on_scroll) and
//!   the two settle handlers.
//! - a [`LayoutHost`], the navigation bar that renders header items at the
//!   frames the engine assigns.
//! - a tap-gesture source, which delivers [`TapEvent`]s to
//!   [`PagingController::on_header_tap`](crate::PagingController::on_header_tap).
//!
//! Native views are referred to through opaque [`ViewId`] handles that only
//! the host knows how to resolve.
use crate::{
    navigation_strip::PageIndicator,
    units::{Color, EdgeInsets, Rect, Size},
};

/// Opaque handle to a view owned by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ViewId(pub u64);

/// What a header item displays.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeaderContent {
    /// A text label the host renders with its default title style.
    Title(String),
    /// An arbitrary host view.
    View(ViewId),
}

/// A tap on the header item at `index`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TapEvent {
    pub index: usize,
}

/// Scroll physics requested from the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollBehavior {
    /// Snap to whole pages when the user lifts their finger.
    pub paging_enabled: bool,
    /// Allow rubber-banding past the content edges.
    pub bounces: bool,
    /// Show the host's own scroll indicators.
    pub shows_scroll_indicators: bool,
}

impl Default for ScrollBehavior {
    fn default() -> Self {
        Self {
            paging_enabled: true,
            bounces: false,
            shows_scroll_indicators: false,
        }
    }
}

/// The scrollable container holding the pages.
pub trait ScrollHost {
    /// Visible size of the container. Its width is the page width.
    fn viewport(&self) -> Size;

    /// Current horizontal content offset.
    fn content_offset(&self) -> f32;

    /// Moves the content to `x`, animating if requested. Calling this again
    /// during an animation redirects it.
    fn set_content_offset(&mut self, x: f32, animated: bool);

    /// Scrolls the minimum distance needed to make `rect` visible.
    fn scroll_rect_to_visible(&mut self, rect: Rect, animated: bool);

    /// Sets the total scrollable size.
    fn set_content_size(&mut self, size: Size);

    /// Sets the inset around the scrollable content.
    fn set_content_inset(&mut self, insets: EdgeInsets);

    /// Configures paging and bounce physics.
    fn set_behavior(&mut self, behavior: ScrollBehavior);

    /// Adds the page view to the content if needed and moves it to `frame`.
    fn place_page(&mut self, index: usize, view: ViewId, frame: Rect);
}

/// The navigation bar rendering header items.
pub trait LayoutHost {
    /// Sets the frame of the bar itself.
    fn set_frame(&mut self, frame: Rect);

    /// Sets the bar background.
    fn set_background(&mut self, color: Color);

    /// Adds the item if needed and moves it to `frame`.
    fn place_item(&mut self, index: usize, content: &HeaderContent, frame: Rect);

    /// Shows or refreshes the page indicator.
    fn update_indicator(&mut self, indicator: &PageIndicator);

    /// Intrinsic size of a title label rendered with the bar's font.
    fn measure_text(&self, text: &str) -> Size;
}

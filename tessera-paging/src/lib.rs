//! Scroll-synchronized paging navigation for tessera hosts.
//!
//! This crate implements the engine behind a "swipeable tab bar": a strip of
//! header items above a horizontally paged container, where the header items
//! slide in lockstep with the content scroll offset and an optional page
//! indicator tracks the settled page.
//!
//! The crate never creates native widgets. The embedding layer implements
//! [`ScrollHost`] and [`LayoutHost`] and forwards scroll and tap callbacks to a
//! [`PagingController`].
//!
//! # Components
//!
//! - [`geometry`] maps scroll offsets to header positions and page indices to
//!   scroll offsets.
//! - [`page_index`] turns settled offsets into page-change events.
//! - [`navigation_strip`] owns the header items and the page indicator.
//! - [`controller`] wires everything together and exposes the public API.
//!
//! # Example
//!
//! ```
//! use tessera_paging::{
//!     HeaderContent, LayoutHost, PageContent, PageIndicator, PagingArgs, PagingController,
//!     ScrollBehavior, ScrollHost, ViewId,
//!     units::{Color, EdgeInsets, Rect, Size},
//! };
//!
//! #[derive(Default)]
//! struct Scroll {
//!     offset: f32,
//! }
//!
//! impl ScrollHost for Scroll {
//!     fn viewport(&self) -> Size {
//!         Size::new(320.0, 480.0)
//!     }
//!     fn content_offset(&self) -> f32 {
//!         self.offset
//!     }
//!     fn set_content_offset(&mut self, x: f32, _animated: bool) {
//!         self.offset = x;
//!     }
//!     fn scroll_rect_to_visible(&mut self, rect: Rect, _animated: bool) {
//!         self.offset = rect.min_x();
//!     }
//!     fn set_content_size(&mut self, _size: Size) {}
//!     fn set_content_inset(&mut self, _insets: EdgeInsets) {}
//!     fn set_behavior(&mut self, _behavior: ScrollBehavior) {}
//!     fn place_page(&mut self, _index: usize, _view: ViewId, _frame: Rect) {}
//! }
//!
//! struct Bar;
//!
//! impl LayoutHost for Bar {
//!     fn set_frame(&mut self, _frame: Rect) {}
//!     fn set_background(&mut self, _color: Color) {}
//!     fn place_item(&mut self, _index: usize, _content: &HeaderContent, _frame: Rect) {}
//!     fn update_indicator(&mut self, _indicator: &PageIndicator) {}
//!     fn measure_text(&self, text: &str) -> Size {
//!         Size::new(text.len() as f32 * 9.0, 20.0)
//!     }
//! }
//!
//! let pages = vec![
//!     PageContent::titled(ViewId(1), "News"),
//!     PageContent::titled(ViewId(2), "Sports"),
//! ];
//! let mut paging =
//!     PagingController::with_pages(Scroll::default(), Bar, PagingArgs::default(), pages, None)?;
//!
//! paging.set_current_index(1, true)?;
//! let offset = paging.scroll_host().content_offset();
//! paging.on_scroll(offset)?;
//! paging.on_scroll_animation_ended(offset);
//! assert_eq!(paging.current_page(), 1);
//! # Ok::<(), tessera_paging::PagingError>(())
//! ```
pub mod args;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod host;
pub mod listener;
pub mod navigation_strip;
pub mod page;
pub mod page_index;
pub mod units;

pub use crate::{
    args::PagingArgs,
    controller::{HeaderSpec, PagingController, PagingState, Phase},
    error::{PagingError, Result},
    geometry::{BASE_SPACING, LayoutStyle},
    host::{HeaderContent, LayoutHost, ScrollBehavior, ScrollHost, TapEvent, ViewId},
    listener::HeaderMoving,
    navigation_strip::{HeaderItem, NavigationRequest, NavigationStrip, PageIndicator},
    page::{Page, PageContent},
    page_index::{PageChangeEvent, PageIndexResolver},
};

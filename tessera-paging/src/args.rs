//! Configuration for [`PagingController`](crate::PagingController).
use derive_setters::Setters;

use crate::{
    geometry::LayoutStyle,
    units::{Color, EdgeInsets},
};

const DEFAULT_NAV_BAR_HEIGHT: f32 = 44.0;
const DEFAULT_ITEM_TOP: f32 = 8.0;
const DEFAULT_INDICATOR_TOP: f32 = 35.0;
const DEFAULT_CONTENT_INSET_BOTTOM: f32 = -80.0;

/// Configuration arguments for the paging widget.
///
/// ```
/// use tessera_paging::{LayoutStyle, PagingArgs, units::Color};
///
/// let args = PagingArgs::default()
///     .show_indicator(true)
///     .layout_style(LayoutStyle::Normal)
///     .current_indicator_color(Color::BLACK);
/// assert!(args.interaction_enabled);
/// assert_eq!(args.current_indicator_color, Some(Color::BLACK));
/// ```
#[derive(Clone, Debug, PartialEq, Setters)]
pub struct PagingArgs {
    /// Whether to draw the page indicator inside the navigation bar.
    pub show_indicator: bool,
    /// Background of the navigation bar.
    pub nav_bar_background: Color,
    /// Spacing mode between header items.
    pub layout_style: LayoutStyle,
    /// Whether taps on header items navigate.
    pub interaction_enabled: bool,
    /// Tint of the current page dot.
    #[setters(strip_option)]
    pub current_indicator_color: Option<Color>,
    /// Tint of the other page dots.
    #[setters(strip_option)]
    pub indicator_color: Option<Color>,
    /// Height of the navigation bar.
    pub nav_bar_height: f32,
    /// Vertical position of header items inside the bar.
    pub item_top: f32,
    /// Vertical position of the page indicator inside the bar.
    pub indicator_top: f32,
    /// Inset applied to the scroll content.
    pub content_inset: EdgeInsets,
    /// Page shown once the first pages are registered.
    pub initial_index: usize,
}

impl Default for PagingArgs {
    fn default() -> Self {
        Self {
            show_indicator: false,
            nav_bar_background: Color::WHITE,
            layout_style: LayoutStyle::Default,
            interaction_enabled: true,
            current_indicator_color: None,
            indicator_color: None,
            nav_bar_height: DEFAULT_NAV_BAR_HEIGHT,
            item_top: DEFAULT_ITEM_TOP,
            indicator_top: DEFAULT_INDICATOR_TOP,
            content_inset: EdgeInsets::new(0.0, 0.0, DEFAULT_CONTENT_INSET_BOTTOM, 0.0),
            initial_index: 0,
        }
    }
}

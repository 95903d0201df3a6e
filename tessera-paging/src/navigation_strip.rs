//! The header strip above the pages.
//!
//! [`NavigationStrip`] owns the ordered header items and the optional page
//! indicator. It repositions every item on every scroll tick and turns taps
//! into [`NavigationRequest`]s.
use tracing::trace;

use crate::{
    error::Result,
    geometry::{LayoutStyle, position_for, static_position_for},
    host::{HeaderContent, LayoutHost},
    units::{Color, Rect, Size},
};

/// One header element, tied to the page with the same index.
#[derive(Clone, Debug, PartialEq)]
pub struct HeaderItem {
    index: usize,
    content: HeaderContent,
    size: Size,
    frame: Rect,
}

impl HeaderItem {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn content(&self) -> &HeaderContent {
        &self.content
    }

    /// Intrinsic size given at registration.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Frame applied by the most recent layout pass.
    pub fn frame(&self) -> Rect {
        self.frame
    }
}

/// State of the dotted page indicator drawn in the navigation bar.
#[derive(Clone, Debug, PartialEq)]
pub struct PageIndicator {
    pub number_of_pages: usize,
    pub current_page: usize,
    /// Tint of the dot for the current page, host default if `None`.
    pub current_page_color: Option<Color>,
    /// Tint of the other dots, host default if `None`.
    pub page_color: Option<Color>,
    /// Vertical position inside the bar.
    pub top: f32,
}

/// Request to navigate to the page behind a tapped header item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationRequest {
    pub index: usize,
}

/// Ordered header items plus the optional page indicator.
#[derive(Clone, Debug)]
pub struct NavigationStrip {
    items: Vec<HeaderItem>,
    indicator: Option<PageIndicator>,
    interaction_enabled: bool,
    item_top: f32,
}

impl NavigationStrip {
    /// Creates an empty strip whose items sit `item_top` points below the
    /// top of the bar.
    pub fn new(item_top: f32) -> Self {
        Self {
            items: Vec::new(),
            indicator: None,
            interaction_enabled: true,
            item_top,
        }
    }

    /// Appends header items in the given order.
    ///
    /// Indices continue after the items already registered. Each item is
    /// placed at its resting position right away so the bar looks correct
    /// before the first scroll tick.
    pub fn register<L>(
        &mut self,
        items: impl IntoIterator<Item = (HeaderContent, Size)>,
        viewport_width: f32,
        host: &mut L,
    ) where
        L: LayoutHost + ?Sized,
    {
        for (content, size) in items {
            let index = self.items.len();
            let x = static_position_for(size, index, viewport_width);
            let frame = Rect::from_xywh(x, self.item_top, size.width, size.height);
            host.place_item(index, &content, frame);
            self.items.push(HeaderItem {
                index,
                content,
                size,
                frame,
            });
        }
    }

    /// Moves every item to its position for `scroll_offset`.
    ///
    /// Fails before touching any item if `style` has a zero spacing distance.
    pub fn reposition<L>(
        &mut self,
        scroll_offset: f32,
        viewport_width: f32,
        style: LayoutStyle,
        host: &mut L,
    ) -> Result<()>
    where
        L: LayoutHost + ?Sized,
    {
        style.distance()?;
        for item in &mut self.items {
            let x = position_for(item.size, item.index, style, scroll_offset, viewport_width)?;
            item.frame = Rect::from_xywh(x, self.item_top, item.size.width, item.size.height);
            host.place_item(item.index, &item.content, item.frame);
        }
        trace!(scroll_offset, items = self.items.len(), "header strip repositioned");
        Ok(())
    }

    /// Converts a tap into a navigation request.
    ///
    /// Swallowed when interaction is disabled or no item has that index.
    pub fn on_tap(&self, index: usize) -> Option<NavigationRequest> {
        if !self.interaction_enabled || index >= self.items.len() {
            return None;
        }
        Some(NavigationRequest { index })
    }

    pub fn set_interaction_enabled(&mut self, enabled: bool) {
        self.interaction_enabled = enabled;
    }

    pub fn is_interaction_enabled(&self) -> bool {
        self.interaction_enabled
    }

    /// Creates the page indicator, or resizes it if it already exists.
    pub fn show_indicator<L>(&mut self, number_of_pages: usize, top: f32, host: &mut L)
    where
        L: LayoutHost + ?Sized,
    {
        let indicator = self.indicator.get_or_insert_with(|| PageIndicator {
            number_of_pages,
            current_page: 0,
            current_page_color: None,
            page_color: None,
            top,
        });
        indicator.number_of_pages = number_of_pages;
        indicator.current_page = clamp_page(indicator.current_page, number_of_pages);
        host.update_indicator(indicator);
    }

    /// Highlights `index` on the indicator. No-op without an indicator.
    pub fn set_indicator_page<L>(&mut self, index: usize, host: &mut L)
    where
        L: LayoutHost + ?Sized,
    {
        let Some(indicator) = self.indicator.as_mut() else {
            return;
        };
        let page = clamp_page(index, indicator.number_of_pages);
        if indicator.current_page != page {
            indicator.current_page = page;
            host.update_indicator(indicator);
        }
    }

    /// Sets the indicator tints. No-op without an indicator.
    pub fn set_indicator_colors<L>(
        &mut self,
        current_page_color: Option<Color>,
        page_color: Option<Color>,
        host: &mut L,
    ) where
        L: LayoutHost + ?Sized,
    {
        if let Some(indicator) = self.indicator.as_mut() {
            indicator.current_page_color = current_page_color;
            indicator.page_color = page_color;
            host.update_indicator(indicator);
        }
    }

    pub fn indicator(&self) -> Option<&PageIndicator> {
        self.indicator.as_ref()
    }

    /// Items in registration order.
    pub fn items(&self) -> &[HeaderItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn clamp_page(page: usize, number_of_pages: usize) -> usize {
    page.min(number_of_pages.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::{error::PagingError, host::ViewId};

    #[derive(Default)]
    struct Bar {
        placed: BTreeMap<usize, (HeaderContent, Rect)>,
        place_calls: usize,
        indicator: Option<PageIndicator>,
        indicator_updates: usize,
    }

    impl LayoutHost for Bar {
        fn set_frame(&mut self, _frame: Rect) {}

        fn set_background(&mut self, _color: Color) {}

        fn place_item(&mut self, index: usize, content: &HeaderContent, frame: Rect) {
            self.place_calls += 1;
            self.placed.insert(index, (content.clone(), frame));
        }

        fn update_indicator(&mut self, indicator: &PageIndicator) {
            self.indicator_updates += 1;
            self.indicator = Some(indicator.clone());
        }

        fn measure_text(&self, text: &str) -> Size {
            Size::new(text.len() as f32 * 10.0, 20.0)
        }
    }

    fn titles(names: &[&str]) -> Vec<(HeaderContent, Size)> {
        names
            .iter()
            .map(|name| {
                (
                    HeaderContent::Title(name.to_string()),
                    Size::new(50.0, 20.0),
                )
            })
            .collect()
    }

    #[test]
    fn test_register_keeps_caller_order() {
        let mut bar = Bar::default();
        let mut strip = NavigationStrip::new(8.0);
        strip.register(titles(&["a", "b", "c"]), 320.0, &mut bar);

        let names: Vec<_> = strip
            .items()
            .iter()
            .map(|item| (item.index(), item.content().clone()))
            .collect();
        assert_eq!(
            names,
            vec![
                (0, HeaderContent::Title("a".into())),
                (1, HeaderContent::Title("b".into())),
                (2, HeaderContent::Title("c".into())),
            ]
        );
        assert_eq!(bar.placed[&0].1, Rect::from_xywh(135.0, 8.0, 50.0, 20.0));
        assert_eq!(bar.placed[&1].1, Rect::from_xywh(235.0, 8.0, 50.0, 20.0));
    }

    #[test]
    fn test_register_continues_indices() {
        let mut bar = Bar::default();
        let mut strip = NavigationStrip::new(8.0);
        strip.register(titles(&["a", "b"]), 320.0, &mut bar);
        strip.register(
            vec![(HeaderContent::View(ViewId(3)), Size::new(30.0, 30.0))],
            320.0,
            &mut bar,
        );
        assert_eq!(strip.len(), 3);
        assert_eq!(strip.items()[2].index(), 2);
        assert_eq!(strip.items()[2].frame().min_x(), 145.0 + 200.0);
    }

    #[test]
    fn test_register_empty_is_valid() {
        let mut bar = Bar::default();
        let mut strip = NavigationStrip::new(8.0);
        strip.register(Vec::new(), 320.0, &mut bar);
        assert!(strip.is_empty());
        assert_eq!(strip.on_tap(0), None);
        assert!(strip.reposition(100.0, 320.0, LayoutStyle::Default, &mut bar).is_ok());
    }

    #[test]
    fn test_reposition_applies_every_item() {
        let mut bar = Bar::default();
        let mut strip = NavigationStrip::new(8.0);
        strip.register(titles(&["a", "b", "c"]), 320.0, &mut bar);
        bar.place_calls = 0;

        strip
            .reposition(320.0, 320.0, LayoutStyle::Default, &mut bar)
            .unwrap();
        assert_eq!(bar.place_calls, 3);
        assert_eq!(strip.items()[0].frame().min_x(), 35.0);
        assert_eq!(strip.items()[1].frame().min_x(), 135.0);
        assert_eq!(strip.items()[2].frame().min_x(), 235.0);
        assert_eq!(bar.placed[&1].1.min_x(), 135.0);
    }

    #[test]
    fn test_reposition_rejects_zero_distance_without_moving() {
        let mut bar = Bar::default();
        let mut strip = NavigationStrip::new(8.0);
        strip.register(titles(&["a", "b"]), 320.0, &mut bar);
        let before: Vec<_> = strip.items().iter().map(HeaderItem::frame).collect();
        bar.place_calls = 0;

        let result = strip.reposition(50.0, 320.0, LayoutStyle::Custom(-100), &mut bar);
        assert_eq!(result, Err(PagingError::Configuration { offset: -100 }));
        assert_eq!(bar.place_calls, 0);
        let after: Vec<_> = strip.items().iter().map(HeaderItem::frame).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_tap_respects_interaction() {
        let mut bar = Bar::default();
        let mut strip = NavigationStrip::new(8.0);
        strip.register(titles(&["a", "b"]), 320.0, &mut bar);

        assert_eq!(strip.on_tap(1), Some(NavigationRequest { index: 1 }));
        assert_eq!(strip.on_tap(2), None);

        strip.set_interaction_enabled(false);
        assert!(!strip.is_interaction_enabled());
        assert_eq!(strip.on_tap(1), None);
    }

    #[test]
    fn test_indicator_is_optional() {
        let mut bar = Bar::default();
        let mut strip = NavigationStrip::new(8.0);
        strip.set_indicator_page(1, &mut bar);
        strip.set_indicator_colors(Some(Color::BLACK), None, &mut bar);
        assert!(strip.indicator().is_none());
        assert_eq!(bar.indicator_updates, 0);
    }

    #[test]
    fn test_indicator_tracks_page() {
        let mut bar = Bar::default();
        let mut strip = NavigationStrip::new(8.0);
        strip.show_indicator(3, 35.0, &mut bar);
        assert_eq!(bar.indicator.as_ref().map(|i| i.number_of_pages), Some(3));

        strip.set_indicator_page(2, &mut bar);
        assert_eq!(strip.indicator().map(|i| i.current_page), Some(2));
        let updates = bar.indicator_updates;
        strip.set_indicator_page(2, &mut bar);
        assert_eq!(bar.indicator_updates, updates);

        strip.set_indicator_page(10, &mut bar);
        assert_eq!(strip.indicator().map(|i| i.current_page), Some(2));

        strip.show_indicator(5, 35.0, &mut bar);
        let indicator = strip.indicator().unwrap();
        assert_eq!(indicator.number_of_pages, 5);
        assert_eq!(indicator.current_page, 2);
    }

    #[test]
    fn test_indicator_colors() {
        let mut bar = Bar::default();
        let mut strip = NavigationStrip::new(8.0);
        strip.show_indicator(2, 35.0, &mut bar);
        strip.set_indicator_colors(Some(Color::BLACK), Some(Color::LIGHT_GRAY), &mut bar);
        let indicator = bar.indicator.unwrap();
        assert_eq!(indicator.current_page_color, Some(Color::BLACK));
        assert_eq!(indicator.page_color, Some(Color::LIGHT_GRAY));
    }
}

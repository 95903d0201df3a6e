//! Orchestration of the pages, the header strip and the scroll host.
//!
//! ## Usage
//!
//! Embed the controller in the host's view layer and forward the scroll
//! container's callbacks to it:
//!
//! - every offset change to [`PagingController::on_scroll`],
//! - deceleration end to [`PagingController::on_decelerating_ended`],
//! - programmatic animation end to
//!   [`PagingController::on_scroll_animation_ended`],
//! - header taps to [`PagingController::on_header_tap`].
use tracing::{debug, instrument, trace, warn};

use crate::{
    args::PagingArgs,
    error::{PagingError, Result},
    geometry::{self, LayoutStyle},
    host::{HeaderContent, LayoutHost, ScrollBehavior, ScrollHost, TapEvent},
    listener::{HeaderMoving, MovingListeners, PageChangedListeners},
    navigation_strip::{HeaderItem, NavigationStrip},
    page::{Page, PageContent},
    page_index::PageIndexResolver,
    units::{Color, Rect, Size},
};

/// Lifecycle phase of a widget instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// No page registered yet.
    #[default]
    Uninitialized,
    /// At least one page registered.
    Ready,
}

/// Snapshot of the transient paging state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PagingState {
    /// Last offset reported by the scroll host.
    pub scroll_offset: f32,
    /// Page resolved at the last settle or non-animated jump.
    pub current_page: usize,
    pub page_count: usize,
    pub interaction_enabled: bool,
    /// Last index explicitly navigated to.
    pub selected_index: usize,
    pub phase: Phase,
}

/// A header item description: what to draw and its intrinsic size.
pub type HeaderSpec = (HeaderContent, Size);

/// Controller for the paging widget.
///
/// Owns the page collection, the [`NavigationStrip`] and both hosts. All
/// methods run on the UI thread, driven by the host's event dispatch.
pub struct PagingController<S, L> {
    scroll_host: S,
    layout_host: L,
    args: PagingArgs,
    pages: Vec<Page>,
    strip: NavigationStrip,
    resolver: PageIndexResolver,
    scroll_offset: f32,
    selected_index: usize,
    phase: Phase,
    moving_listeners: MovingListeners,
    page_changed_listeners: PageChangedListeners,
}

impl<S, L> PagingController<S, L>
where
    S: ScrollHost,
    L: LayoutHost,
{
    /// Creates an empty controller.
    ///
    /// Fails with [`PagingError::Configuration`] if `args.layout_style` has a
    /// zero spacing distance.
    pub fn new(scroll_host: S, mut layout_host: L, args: PagingArgs) -> Result<Self> {
        args.layout_style.distance()?;
        layout_host.set_background(args.nav_bar_background);

        let mut strip = NavigationStrip::new(args.item_top);
        strip.set_interaction_enabled(args.interaction_enabled);
        let selected_index = args.initial_index;

        Ok(Self {
            scroll_host,
            layout_host,
            args,
            pages: Vec::new(),
            strip,
            resolver: PageIndexResolver::new(),
            scroll_offset: 0.0,
            selected_index,
            phase: Phase::Uninitialized,
            moving_listeners: MovingListeners::default(),
            page_changed_listeners: PageChangedListeners::default(),
        })
    }

    /// Creates a controller and registers `pages` in one step.
    ///
    /// See [`Self::initialize`] for how `items` is used.
    pub fn with_pages(
        scroll_host: S,
        layout_host: L,
        args: PagingArgs,
        pages: Vec<PageContent>,
        items: Option<Vec<HeaderSpec>>,
    ) -> Result<Self> {
        let mut controller = Self::new(scroll_host, layout_host, args)?;
        controller.initialize(pages, items)?;
        Ok(controller)
    }

    /// Registers the initial pages and header items.
    ///
    /// Without `items`, each page gets a title label built from its title
    /// (an empty label for untitled pages). Pages are laid out side by side,
    /// the indicator is created when configured, and once at least one page
    /// exists the content jumps to the selected index.
    ///
    /// Fails with [`PagingError::OutOfRange`] when the configured initial
    /// index does not name a registered page.
    #[instrument(level = "debug", skip_all, fields(pages = pages.len()))]
    pub fn initialize(
        &mut self,
        pages: Vec<PageContent>,
        items: Option<Vec<HeaderSpec>>,
    ) -> Result<()> {
        self.register(pages, items);
        if self.phase == Phase::Ready {
            self.set_current_index(self.selected_index as isize, false)?;
        }
        Ok(())
    }

    /// Appends pages after the existing ones, with default title labels.
    ///
    /// The current scroll position and the selected index are kept, and the
    /// whole strip is laid out again for the current offset so the new
    /// headers line up with the existing ones.
    #[instrument(level = "debug", skip_all, fields(pages = pages.len()))]
    pub fn add_pages(&mut self, pages: Vec<PageContent>) -> Result<()> {
        let was_ready = self.phase == Phase::Ready;
        self.register(pages, None);
        if was_ready {
            self.reposition_strip(self.scroll_offset)?;
        } else if self.phase == Phase::Ready {
            // First pages arrived through this call: behave like initialize.
            let selected = self.clamp_to_pages(self.selected_index);
            self.jump_to(selected, false);
        }
        Ok(())
    }

    /// Navigates to the page at `index`.
    ///
    /// The selected index changes immediately, before any animation ends.
    /// Calling this during an animation redirects it. A jump without
    /// animation produces no settle event, so the current page and the
    /// indicator follow it right away.
    pub fn set_current_index(&mut self, index: isize, animated: bool) -> Result<()> {
        let page_count = self.pages.len();
        if index < 0 || index as usize >= page_count {
            return Err(PagingError::OutOfRange { index, page_count });
        }
        self.jump_to(index as usize, animated);
        Ok(())
    }

    /// Enables or disables navigation through header taps.
    pub fn set_interaction_enabled(&mut self, enabled: bool) {
        self.strip.set_interaction_enabled(enabled);
    }

    /// Changes the spacing between header items.
    ///
    /// Rejected styles leave the current style in place. Accepted styles are
    /// applied to the strip right away.
    pub fn set_layout_style(&mut self, style: LayoutStyle) -> Result<()> {
        style.distance()?;
        self.args.layout_style = style;
        if self.phase == Phase::Ready {
            self.reposition_strip(self.scroll_offset)?;
        }
        Ok(())
    }

    /// Sets the tints of the page indicator dots.
    pub fn set_indicator_colors(&mut self, current: Option<Color>, others: Option<Color>) {
        self.args.current_indicator_color = current;
        self.args.indicator_color = others;
        self.strip
            .set_indicator_colors(current, others, &mut self.layout_host);
    }

    /// Registers a page-changed listener.
    pub fn on_page_changed<F>(&mut self, listener: F)
    where
        F: FnMut(usize) + 'static,
    {
        self.page_changed_listeners.push(listener);
    }

    /// Registers a header-moving listener that receives the item list.
    pub fn on_header_moving<F>(&mut self, listener: F)
    where
        F: FnMut(&[HeaderItem]) + 'static,
    {
        self.moving_listeners.push_items_only(listener);
    }

    /// Registers a header-moving listener that also receives the scroll host.
    pub fn on_header_moving_with_host<F>(&mut self, listener: F)
    where
        F: FnMut(&HeaderMoving<'_>) + 'static,
    {
        self.moving_listeners.push_with_host(listener);
    }

    /// Scroll tick: repositions the header strip and notifies moving
    /// listeners.
    pub fn on_scroll(&mut self, scroll_offset: f32) -> Result<()> {
        self.scroll_offset = scroll_offset;
        self.reposition_strip(scroll_offset)?;

        let moving = HeaderMoving {
            items: self.strip.items(),
            host: &self.scroll_host,
            scroll_offset,
        };
        self.moving_listeners.notify(&moving);
        Ok(())
    }

    /// The user's fling came to rest.
    pub fn on_decelerating_ended(&mut self, scroll_offset: f32) {
        self.settle(scroll_offset);
    }

    /// A programmatic scroll animation finished.
    pub fn on_scroll_animation_ended(&mut self, scroll_offset: f32) {
        self.settle(scroll_offset);
    }

    /// Routes a header tap to the matching page.
    ///
    /// Ignored while interaction is disabled. Taps on items without a page
    /// are logged and dropped.
    pub fn on_header_tap(&mut self, event: TapEvent) {
        let Some(request) = self.strip.on_tap(event.index) else {
            trace!(index = event.index, "header tap ignored");
            return;
        };
        let Some(page) = self.pages.get(request.index) else {
            warn!(
                index = request.index,
                pages = self.pages.len(),
                "header tapped without a matching page"
            );
            return;
        };
        debug!(index = request.index, view = ?page.content().view(), "navigating to tapped page");
        self.scroll_host.scroll_rect_to_visible(page.frame(), true);
    }

    /// Snapshot of the paging state, assembled from the parts that own it.
    pub fn state(&self) -> PagingState {
        PagingState {
            scroll_offset: self.scroll_offset,
            current_page: self.resolver.last_emitted(),
            page_count: self.pages.len(),
            interaction_enabled: self.strip.is_interaction_enabled(),
            selected_index: self.selected_index,
            phase: self.phase,
        }
    }

    /// Configuration the controller was created with. Layout style and
    /// indicator colors track later changes; the interaction flag is only
    /// the initial value.
    pub fn args(&self) -> &PagingArgs {
        &self.args
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn strip(&self) -> &NavigationStrip {
        &self.strip
    }

    pub fn scroll_host(&self) -> &S {
        &self.scroll_host
    }

    pub fn scroll_host_mut(&mut self) -> &mut S {
        &mut self.scroll_host
    }

    pub fn layout_host(&self) -> &L {
        &self.layout_host
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Page resolved at the last settle or non-animated jump.
    pub fn current_page(&self) -> usize {
        self.resolver.last_emitted()
    }

    fn register(&mut self, pages: Vec<PageContent>, items: Option<Vec<HeaderSpec>>) {
        let viewport = self.scroll_host.viewport();
        let items = match items {
            Some(items) => items,
            None => self.title_items(&pages),
        };
        let expected_items = self.pages.len() + pages.len();
        if self.strip.len() + items.len() != expected_items {
            warn!(
                items = self.strip.len() + items.len(),
                pages = expected_items,
                "header item count does not match page count"
            );
        }

        self.strip.register(items, viewport.width, &mut self.layout_host);
        for content in pages {
            let index = self.pages.len();
            self.pages.push(Page::new(index, content));
        }

        self.layout_pages(viewport);
        if !self.pages.is_empty() {
            self.phase = Phase::Ready;
        }
        debug!(
            pages = self.pages.len(),
            items = self.strip.len(),
            page_changed_listeners = self.page_changed_listeners.len(),
            moving_listeners = self.moving_listeners.len(),
            "paging layout updated"
        );
    }

    fn title_items(&self, pages: &[PageContent]) -> Vec<HeaderSpec> {
        pages
            .iter()
            .map(|page| {
                let title = page.title().unwrap_or_default().to_owned();
                let size = self.layout_host.measure_text(&title);
                (HeaderContent::Title(title), size)
            })
            .collect()
    }

    fn layout_pages(&mut self, viewport: Size) {
        self.scroll_host.set_behavior(ScrollBehavior::default());
        self.scroll_host.set_content_inset(self.args.content_inset);
        self.scroll_host
            .set_content_size(geometry::content_size(self.pages.len(), viewport));
        for page in &mut self.pages {
            let frame = geometry::page_frame(page.index(), viewport);
            page.set_frame(frame);
            self.scroll_host
                .place_page(page.index(), page.content().view(), frame);
        }

        self.layout_host.set_frame(Rect::from_xywh(
            0.0,
            0.0,
            viewport.width,
            self.args.nav_bar_height,
        ));

        if self.args.show_indicator && !self.pages.is_empty() {
            let created = self.strip.indicator().is_none();
            self.strip.show_indicator(
                self.pages.len(),
                self.args.indicator_top,
                &mut self.layout_host,
            );
            if created
                && (self.args.current_indicator_color.is_some()
                    || self.args.indicator_color.is_some())
            {
                self.strip.set_indicator_colors(
                    self.args.current_indicator_color,
                    self.args.indicator_color,
                    &mut self.layout_host,
                );
            }
        }
    }

    fn reposition_strip(&mut self, scroll_offset: f32) -> Result<()> {
        let width = self.scroll_host.viewport().width;
        self.strip.reposition(
            scroll_offset,
            width,
            self.args.layout_style,
            &mut self.layout_host,
        )
    }

    fn settle(&mut self, scroll_offset: f32) {
        self.scroll_offset = scroll_offset;
        if self.pages.is_empty() {
            return;
        }
        let width = self.scroll_host.viewport().width;
        let index = PageIndexResolver::resolve(scroll_offset, self.pages.len(), width);
        if let Some(event) = self.resolver.on_settle(index) {
            debug!(index = event.index, "page changed");
            self.strip
                .set_indicator_page(event.index, &mut self.layout_host);
            self.page_changed_listeners.notify(event.index);
        }
    }

    fn jump_to(&mut self, index: usize, animated: bool) {
        self.selected_index = index;
        let width = self.scroll_host.viewport().width;
        let offset = geometry::scroll_offset_for(index, width);
        trace!(index, offset, animated, "scrolling to page");
        self.scroll_host.set_content_offset(offset, animated);
        if !animated {
            // No settle follows a jump, so it is final right away.
            self.scroll_offset = offset;
            self.resolver.reset_to(index);
            self.strip.set_indicator_page(index, &mut self.layout_host);
        }
    }

    fn clamp_to_pages(&self, index: usize) -> usize {
        index.min(self.pages.len().saturating_sub(1))
    }
}

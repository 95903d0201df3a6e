//! Headless walkthrough of the paging engine.
//!
//! Drives a [`PagingController`] with a spring-animated scroll container and
//! prints the navigation bar after every settled motion. Set `RUST_LOG` to
//! `tessera_paging=trace` to follow every scroll tick.
mod bar;
mod scroll;

use tessera_paging::{
    LayoutStyle, PageContent, PagingArgs, PagingController, TapEvent, ViewId,
    units::{Color, Size},
};
use tracing::{error, info, trace};

use crate::{
    bar::TextBar,
    scroll::{Settle, SimulatedScroll},
};

const FRAME_TIME: f32 = 1.0 / 60.0;
const MAX_FRAMES: usize = 600;
const BAR_COLUMNS: usize = 48;

type Paging = PagingController<SimulatedScroll, TextBar>;

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            match tracing_subscriber::EnvFilter::try_new("error,tessera_paging=debug,paging_demo=info")
            {
                Ok(filter) => filter,
                Err(_) => tracing_subscriber::EnvFilter::new("error"),
            }
        }
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .try_init();
}

/// Feeds scroll frames to the controller until the motion settles.
fn pump(paging: &mut Paging) -> Result<(), Box<dyn std::error::Error>> {
    for _ in 0..MAX_FRAMES {
        let Some(tick) = paging.scroll_host_mut().step(FRAME_TIME) else {
            return Ok(());
        };
        paging.on_scroll(tick.offset)?;
        match tick.settled {
            Some(Settle::Decelerated) => {
                paging.on_decelerating_ended(tick.offset);
                return Ok(());
            }
            Some(Settle::AnimationEnded) => {
                paging.on_scroll_animation_ended(tick.offset);
                return Ok(());
            }
            None => {}
        }
    }
    Err("scroll motion did not settle".into())
}

fn show(step: &str, paging: &Paging) {
    info!(
        step,
        page = paging.current_page(),
        selected = paging.selected_index(),
        offset = paging.state().scroll_offset,
        "|{}|",
        paging.layout_host().render(BAR_COLUMNS)
    );
}

fn swipe(paging: &mut Paging, distance: f32) -> Result<(), Box<dyn std::error::Error>> {
    let steps = 6;
    for _ in 0..steps {
        let offset = paging.scroll_host_mut().drag_by(distance / steps as f32);
        paging.on_scroll(offset)?;
    }
    paging.scroll_host_mut().release();
    pump(paging)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let pages = ["Home", "Trending", "Music", "Library"]
        .into_iter()
        .enumerate()
        .map(|(i, title)| PageContent::titled(ViewId(i as u64 + 1), title))
        .collect();
    let args = PagingArgs::default()
        .show_indicator(true)
        .layout_style(LayoutStyle::Normal)
        .nav_bar_background(Color::from_rgb_u8(245, 245, 245))
        .current_indicator_color(Color::BLACK)
        .indicator_color(Color::LIGHT_GRAY);

    let mut paging = PagingController::with_pages(
        SimulatedScroll::new(Size::new(375.0, 667.0)),
        TextBar::new(),
        args,
        pages,
        None,
    )?;
    paging.on_page_changed(|index| info!(index, "page changed"));
    paging.on_header_moving(|items| trace!(items = items.len(), "headers moving"));
    paging.on_header_moving_with_host(|moving| {
        trace!(
            offset = moving.scroll_offset,
            host_offset = moving.host.content_offset(),
            "headers moving with host"
        );
    });

    let host = paging.scroll_host();
    info!(
        pages = host.page_count(),
        content_width = host.content_size().width,
        inset_bottom = host.inset().bottom,
        background = ?paging.layout_host().background(),
        "paging widget ready"
    );
    pump(&mut paging)?;
    show("initial", &paging);

    swipe(&mut paging, 240.0)?;
    show("swipe left", &paging);

    swipe(&mut paging, 100.0)?;
    show("short swipe snaps back", &paging);

    paging.on_header_tap(TapEvent { index: 3 });
    pump(&mut paging)?;
    show("tap on Library", &paging);

    paging.set_current_index(0, true)?;
    pump(&mut paging)?;
    show("set_current_index(0)", &paging);

    paging.set_interaction_enabled(false);
    paging.on_header_tap(TapEvent { index: 2 });
    pump(&mut paging)?;
    show("tap while disabled", &paging);
    paging.set_interaction_enabled(true);

    paging.add_pages(vec![PageContent::titled(ViewId(5), "Podcasts")])?;
    paging.set_current_index(4, true)?;
    pump(&mut paging)?;
    show("added Podcasts and scrolled", &paging);

    paging.set_layout_style(LayoutStyle::CloseToEachOther)?;
    show("close-to-each-other spacing", &paging);

    if let Err(err) = paging.set_current_index(9, true) {
        error!(%err, "navigation rejected");
    }
    if let Err(err) = paging.set_layout_style(LayoutStyle::Custom(-100)) {
        error!(%err, "layout style rejected");
    }

    Ok(())
}

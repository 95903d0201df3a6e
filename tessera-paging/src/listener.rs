//! Callback registries for header movement and page changes.
use smallvec::SmallVec;

use crate::{host::ScrollHost, navigation_strip::HeaderItem};

/// Payload handed to header-moving listeners on every scroll tick.
pub struct HeaderMoving<'a> {
    /// Header items after repositioning, in strip order.
    pub items: &'a [HeaderItem],
    /// The scroll container that produced the tick.
    pub host: &'a dyn ScrollHost,
    /// Offset that triggered the tick.
    pub scroll_offset: f32,
}

type MovingFn = Box<dyn FnMut(&HeaderMoving<'_>)>;
type PageChangedFn = Box<dyn FnMut(usize)>;

/// Ordered list of header-moving listeners.
///
/// Listeners taking only the item list and listeners also taking the host
/// share one shape and fire in registration order.
#[derive(Default)]
pub(crate) struct MovingListeners {
    listeners: SmallVec<[MovingFn; 2]>,
}

impl MovingListeners {
    pub(crate) fn push_items_only<F>(&mut self, mut listener: F)
    where
        F: FnMut(&[HeaderItem]) + 'static,
    {
        self.listeners
            .push(Box::new(move |moving: &HeaderMoving<'_>| listener(moving.items)));
    }

    pub(crate) fn push_with_host<F>(&mut self, listener: F)
    where
        F: FnMut(&HeaderMoving<'_>) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub(crate) fn notify(&mut self, moving: &HeaderMoving<'_>) {
        for listener in &mut self.listeners {
            listener(moving);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.listeners.len()
    }
}

/// Ordered list of page-changed listeners.
#[derive(Default)]
pub(crate) struct PageChangedListeners {
    listeners: SmallVec<[PageChangedFn; 1]>,
}

impl PageChangedListeners {
    pub(crate) fn push<F>(&mut self, listener: F)
    where
        F: FnMut(usize) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub(crate) fn notify(&mut self, index: usize) {
        for listener in &mut self.listeners {
            listener(index);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.listeners.len()
    }
}

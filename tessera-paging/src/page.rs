//! Page collection entries.
use crate::{host::ViewId, units::Rect};

/// Content of a single page.
///
/// A page is either a bare view or a controller-like unit that owns a root
/// view and may carry a title used for its default header label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageContent {
    /// A bare host view.
    View(ViewId),
    /// A controller owning `view`, optionally titled.
    Controller { view: ViewId, title: Option<String> },
}

impl PageContent {
    /// Creates a titled controller page.
    pub fn titled(view: ViewId, title: impl Into<String>) -> Self {
        Self::Controller {
            view,
            title: Some(title.into()),
        }
    }

    /// The view to display, whatever the variant.
    pub fn view(&self) -> ViewId {
        match self {
            Self::View(view) => *view,
            Self::Controller { view, .. } => *view,
        }
    }

    /// The title for the default header label, if any.
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::View(_) => None,
            Self::Controller { title, .. } => title.as_deref(),
        }
    }
}

impl From<ViewId> for PageContent {
    fn from(view: ViewId) -> Self {
        Self::View(view)
    }
}

/// A registered page.
#[derive(Clone, Debug, PartialEq)]
pub struct Page {
    index: usize,
    content: PageContent,
    frame: Rect,
}

impl Page {
    pub(crate) fn new(index: usize, content: PageContent) -> Self {
        Self {
            index,
            content,
            frame: Rect::ZERO,
        }
    }

    /// Zero-based position in the page collection.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn content(&self) -> &PageContent {
        &self.content
    }

    /// Frame inside the scroll content, assigned by the last layout pass.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub(crate) fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }
}

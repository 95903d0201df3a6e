//! Headless scroll container driven by a spring, standing in for a native
//! paged scroll view.
use tessera_paging::{
    ScrollBehavior, ScrollHost, ViewId,
    units::{EdgeInsets, Rect, Size},
};

const SPATIAL_DAMPING_RATIO: f32 = 0.9;
const SPATIAL_STIFFNESS: f32 = 700.0;

#[derive(Clone, PartialEq, Copy, Debug)]
struct Spring1D {
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring1D {
    fn new(value: f32) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
        }
    }

    fn snap_to(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    fn update(&mut self, dt: f32, stiffness: f32, damping_ratio: f32) {
        let dt = dt.clamp(0.0, 0.05);
        let damping = 2.0 * damping_ratio * stiffness.sqrt();
        let displacement = self.value - self.target;
        let acceleration = -stiffness * displacement - damping * self.velocity;

        self.velocity += acceleration * dt;
        self.value += self.velocity * dt;

        if !self.is_animating() {
            self.snap_to(self.target);
        }
    }

    fn is_animating(self) -> bool {
        (self.value - self.target).abs() >= 0.5 || self.velocity.abs() >= 0.5
    }
}

/// How a scroll motion came to rest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settle {
    /// The user's fling decelerated onto a page.
    Decelerated,
    /// A programmatic animation reached its target.
    AnimationEnded,
}

/// One frame of scroll output.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTick {
    pub offset: f32,
    pub settled: Option<Settle>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Motion {
    Idle,
    Dragging,
    Decelerating,
    Animating,
}

/// Spring-animated stand-in for a paged scroll view.
#[derive(Debug)]
pub struct SimulatedScroll {
    viewport: Size,
    content_size: Size,
    inset: EdgeInsets,
    behavior: ScrollBehavior,
    spring: Spring1D,
    motion: Motion,
    pending_tick: bool,
    pages: Vec<(usize, ViewId, Rect)>,
}

impl SimulatedScroll {
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            content_size: Size::ZERO,
            inset: EdgeInsets::ZERO,
            behavior: ScrollBehavior::default(),
            spring: Spring1D::new(0.0),
            motion: Motion::Idle,
            pending_tick: false,
            pages: Vec::new(),
        }
    }

    /// Moves the content under the user's finger. Positive values reveal
    /// pages to the right.
    pub fn drag_by(&mut self, delta: f32) -> f32 {
        self.motion = Motion::Dragging;
        let offset = self.clamp(self.spring.value + delta);
        self.spring.snap_to(offset);
        offset
    }

    /// Lifts the finger, letting the content decelerate onto a page.
    pub fn release(&mut self) {
        let target = if self.behavior.paging_enabled && self.viewport.width > 0.0 {
            (self.spring.value / self.viewport.width).round() * self.viewport.width
        } else {
            self.spring.value
        };
        self.spring.set_target(self.clamp(target));
        self.motion = Motion::Decelerating;
    }

    /// Advances the simulation by `dt` seconds.
    ///
    /// Returns `None` when nothing moved.
    pub fn step(&mut self, dt: f32) -> Option<ScrollTick> {
        match self.motion {
            Motion::Idle | Motion::Dragging => {
                if !std::mem::take(&mut self.pending_tick) {
                    return None;
                }
                Some(ScrollTick {
                    offset: self.spring.value,
                    settled: None,
                })
            }
            Motion::Decelerating | Motion::Animating => {
                self.spring
                    .update(dt, SPATIAL_STIFFNESS, SPATIAL_DAMPING_RATIO);
                let settled = if self.spring.is_animating() {
                    None
                } else {
                    let settle = match self.motion {
                        Motion::Decelerating => Settle::Decelerated,
                        _ => Settle::AnimationEnded,
                    };
                    self.motion = Motion::Idle;
                    Some(settle)
                };
                Some(ScrollTick {
                    offset: self.spring.value,
                    settled,
                })
            }
        }
    }

    pub fn content_size(&self) -> Size {
        self.content_size
    }

    pub fn inset(&self) -> EdgeInsets {
        self.inset
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn max_offset(&self) -> f32 {
        (self.content_size.width - self.viewport.width).max(0.0)
    }

    fn clamp(&self, offset: f32) -> f32 {
        if self.behavior.bounces {
            offset
        } else {
            offset.clamp(0.0, self.max_offset())
        }
    }

    fn move_to(&mut self, x: f32, animated: bool) {
        let x = self.clamp(x);
        if animated {
            self.spring.set_target(x);
            self.motion = Motion::Animating;
        } else {
            self.spring.snap_to(x);
            self.motion = Motion::Idle;
            self.pending_tick = true;
        }
    }
}

impl ScrollHost for SimulatedScroll {
    fn viewport(&self) -> Size {
        self.viewport
    }

    fn content_offset(&self) -> f32 {
        self.spring.value
    }

    fn set_content_offset(&mut self, x: f32, animated: bool) {
        self.move_to(x, animated);
    }

    fn scroll_rect_to_visible(&mut self, rect: Rect, animated: bool) {
        let offset = self.spring.target;
        let target = if rect.min_x() < offset {
            rect.min_x()
        } else if rect.max_x() > offset + self.viewport.width {
            rect.max_x() - self.viewport.width
        } else {
            return;
        };
        self.move_to(target, animated);
    }

    fn set_content_size(&mut self, size: Size) {
        self.content_size = size;
    }

    fn set_content_inset(&mut self, insets: EdgeInsets) {
        self.inset = insets;
    }

    fn set_behavior(&mut self, behavior: ScrollBehavior) {
        self.behavior = behavior;
    }

    fn place_page(&mut self, index: usize, view: ViewId, frame: Rect) {
        match self.pages.iter_mut().find(|(i, _, _)| *i == index) {
            Some(page) => *page = (index, view, frame),
            None => self.pages.push((index, view, frame)),
        }
    }
}

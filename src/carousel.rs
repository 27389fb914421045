//! A paged, horizontally scrolling carousel, independent of any renderer.
//!
//! [`CarouselController`] owns all of the state; see its docs for how a
//! renderer is expected to drive it.

mod auto_scroll;
mod binding;
mod boundary;
mod controller;
mod error;
mod event;
mod geometry;
mod options;
mod timing;

pub use auto_scroll::{AutoScroll, DEFAULT_AUTO_SCROLL_INTERVAL};
pub use binding::IndexBinding;
pub use boundary::BoundaryCorrection;
pub use controller::{CarouselController, Identifiable};
pub use error::{CarouselError, Result};
pub use event::{AppLifecycle, CarouselEvent, EventResult};
pub use geometry::{Layout, Size};
pub use options::{CarouselOptions, DEFAULT_CORRECTION_DELAY, DEFAULT_TICK_PERIOD};
pub use timing::AutoScrollTimer;

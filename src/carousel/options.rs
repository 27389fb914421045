use std::time::Duration;

use super::{AutoScroll, IndexBinding};

/// How often the host's timer ticks, unless told otherwise.
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_secs(1);

/// How long a boundary correction waits for the crossing animation.
pub const DEFAULT_CORRECTION_DELAY: Duration = Duration::from_millis(100);

/// The construction parameters of a [`CarouselController`](super::CarouselController).
#[derive(Debug, Clone)]
pub struct CarouselOptions {
    pub(crate) index: IndexBinding,
    pub(crate) spacing: f32,
    pub(crate) headspace: f32,
    pub(crate) sides_scaling: f32,
    pub(crate) wrap: bool,
    pub(crate) auto_scroll: AutoScroll,
    pub(crate) can_move: bool,
    pub(crate) animated: bool,
    pub(crate) tick_period: Duration,
    pub(crate) correction_delay: Duration,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            index: IndexBinding::new(0),
            spacing: 10.0,
            headspace: 10.0,
            sides_scaling: 0.8,
            wrap: false,
            auto_scroll: AutoScroll::Inactive,
            can_move: true,
            animated: true,
            tick_period: DEFAULT_TICK_PERIOD,
            correction_delay: DEFAULT_CORRECTION_DELAY,
        }
    }
}

impl CarouselOptions {
    /// Binds the carousel's current index to `index`. The value it holds when
    /// the carousel is created is the initial index.
    pub fn index(mut self, index: IndexBinding) -> Self {
        self.index = index;
        self
    }

    /// Sets the gap between items.
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Sets how far the neighbouring items peek in.
    pub fn headspace(mut self, headspace: f32) -> Self {
        self.headspace = headspace;
        self
    }

    /// Sets the scale of inactive items. Clamped to `[0, 1]`.
    pub fn sides_scaling(mut self, sides_scaling: f32) -> Self {
        self.sides_scaling = sides_scaling;
        self
    }

    /// Whether navigation loops around. Ignored with fewer than two items.
    pub fn wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn auto_scroll(mut self, auto_scroll: AutoScroll) -> Self {
        self.auto_scroll = auto_scroll;
        self
    }

    /// Whether drag gestures are accepted.
    pub fn can_move(mut self, can_move: bool) -> Self {
        self.can_move = can_move;
        self
    }

    /// Whether offset changes should ever be animated.
    pub fn animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    /// The period of the host's timer, added to the auto-scroll timing on each tick.
    pub fn tick_period(mut self, tick_period: Duration) -> Self {
        self.tick_period = tick_period;
        self
    }

    /// The delay before a boundary correction fires.
    pub fn correction_delay(mut self, correction_delay: Duration) -> Self {
        self.correction_delay = correction_delay;
        self
    }
}

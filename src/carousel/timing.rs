use std::time::Duration;

/// Tracks time towards the next auto-scroll advance.
///
/// The timer runs only while nobody is dragging _and_ the application is in
/// the foreground. Both reasons are tracked separately so that, say, a drag
/// ending while the app is in the background doesn't restart the timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoScrollTimer {
    timing: Duration,
    dragging: bool,
    foreground: bool,
}

impl Default for AutoScrollTimer {
    fn default() -> Self {
        Self {
            timing: Duration::ZERO,
            dragging: false,
            foreground: true,
        }
    }
}

impl AutoScrollTimer {
    /// Whether ticks currently count.
    pub fn is_active(&self) -> bool {
        !self.dragging && self.foreground
    }

    /// Time accumulated since the last advance.
    pub fn timing(&self) -> Duration {
        self.timing
    }

    pub fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    pub fn set_foreground(&mut self, foreground: bool) {
        self.foreground = foreground;
    }

    pub fn reset(&mut self) {
        self.timing = Duration::ZERO;
    }

    /// Adds a tick's worth of time. Returns whether the timer is now due,
    /// given the auto-scroll `interval`. Does nothing while suspended.
    pub fn tick(&mut self, period: Duration, interval: Duration) -> bool {
        if !self.is_active() {
            return false;
        }

        self.timing = self.timing.saturating_add(period);
        self.timing >= interval
    }
}

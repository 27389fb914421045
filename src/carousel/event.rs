/// The result of feeding an event into a carousel, telling the caller whether
/// anything it renders has changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Trigger a redraw.
    Redraw,
    /// Don't trigger a redraw.
    NoRedraw,
}

impl EventResult {
    pub fn needs_redraw(self) -> bool {
        matches!(self, EventResult::Redraw)
    }

    /// Combines two results; a redraw wins.
    pub fn or(self, other: EventResult) -> EventResult {
        if self.needs_redraw() || other.needs_redraw() {
            EventResult::Redraw
        } else {
            EventResult::NoRedraw
        }
    }
}

/// Whether the host application is in the foreground.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppLifecycle {
    Foreground,
    Background,
}

/// Changes a carousel reports to its observers once a mutation completes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselEvent {
    /// The active item changed.
    IndexChanged {
        active: usize,
        external: usize,
        animated: bool,
    },
    /// A drag in progress moved the strip.
    DragMoved { offset: f32 },
    /// The strip silently jumped from a sentinel slot onto the real item.
    Teleported { from: usize, to: usize },
    /// Auto-scrolling stopped counting.
    TimerSuspended,
    /// Auto-scrolling started counting again.
    TimerResumed,
}

pub(crate) type Observer = Box<dyn FnMut(&CarouselEvent)>;

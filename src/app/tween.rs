use std::time::Duration;

use crate::utils::general::lerp;

/// Eases the offset that is actually drawn towards the controller's offset.
///
/// Jumps that shouldn't be seen (like a boundary correction) shift both ends
/// of the tween, so an animation in flight carries on from the new position.
#[derive(Debug, Clone)]
pub(crate) struct OffsetTween {
    from: f32,
    to: f32,
    elapsed: Duration,
    duration: Duration,
}

impl OffsetTween {
    pub(crate) fn new(duration: Duration) -> Self {
        Self {
            from: 0.0,
            to: 0.0,
            elapsed: duration,
            duration,
        }
    }

    /// The offset to draw right now.
    pub(crate) fn value(&self) -> f32 {
        if self.is_settled() {
            return self.to;
        }

        let t = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let eased = 1.0 - (1.0 - t) * (1.0 - t);

        lerp(self.from, self.to, eased)
    }

    pub(crate) fn is_settled(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Points the tween at `target`. Without `animated`, the whole tween is
    /// moved by the change instead.
    pub(crate) fn retarget(&mut self, target: f32, animated: bool) {
        if animated {
            if target != self.to {
                self.from = self.value();
                self.to = target;
                self.elapsed = Duration::ZERO;
            }
        } else {
            let shift = target - self.to;
            self.from += shift;
            self.to = target;
        }
    }

    /// Jumps straight to `target`, dropping any animation.
    pub(crate) fn snap(&mut self, target: f32) {
        self.from = target;
        self.to = target;
        self.elapsed = self.duration;
    }

    /// Moves the animation along. Returns whether the drawn value changed.
    pub(crate) fn step(&mut self, elapsed: Duration) -> bool {
        if self.is_settled() {
            return false;
        }

        self.elapsed = (self.elapsed + elapsed).min(self.duration);
        true
    }
}

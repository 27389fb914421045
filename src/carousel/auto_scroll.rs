use std::time::Duration;

/// The interval used when auto-scrolling is requested with a non-positive interval.
pub const DEFAULT_AUTO_SCROLL_INTERVAL: Duration = Duration::from_secs(5);

/// Whether a carousel advances on its own, and how often.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoScroll {
    #[default]
    Inactive,
    Active(Duration),
}

impl AutoScroll {
    /// Auto-scrolling with the default interval.
    pub const fn default_active() -> Self {
        AutoScroll::Active(DEFAULT_AUTO_SCROLL_INTERVAL)
    }

    /// Auto-scrolling every `secs` seconds. Non-positive values and NaN are
    /// treated as zero, which [`AutoScroll::normalized`] later coerces. Values
    /// too large for a [`Duration`] saturate.
    pub fn from_secs_f64(secs: f64) -> Self {
        if secs.is_nan() || secs <= 0.0 {
            AutoScroll::Active(Duration::ZERO)
        } else {
            AutoScroll::Active(Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX))
        }
    }

    pub fn is_active(&self) -> bool {
        match self {
            AutoScroll::Active(interval) => !interval.is_zero(),
            AutoScroll::Inactive => false,
        }
    }

    /// The time between two advances. Zero when inactive.
    pub fn interval(&self) -> Duration {
        match self {
            AutoScroll::Active(interval) => *interval,
            AutoScroll::Inactive => Duration::ZERO,
        }
    }

    /// Returns the effective setting for a carousel holding `count` items.
    ///
    /// A single item (or none) can't scroll anywhere, so it is always
    /// [`AutoScroll::Inactive`]. A zero interval falls back to the default.
    pub fn normalized(self, count: usize) -> Self {
        if count <= 1 {
            return AutoScroll::Inactive;
        }

        match self {
            AutoScroll::Active(interval) if interval.is_zero() => AutoScroll::default_active(),
            other => other,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn zero_interval_is_coerced() {
        assert_eq!(
            AutoScroll::Active(Duration::ZERO).normalized(3),
            AutoScroll::Active(Duration::from_secs(5))
        );
        assert_eq!(
            AutoScroll::from_secs_f64(-2.0).normalized(3),
            AutoScroll::default_active()
        );
    }

    #[test]
    fn too_few_items_disables() {
        let active = AutoScroll::Active(Duration::from_secs(2));

        assert_eq!(active.normalized(0), AutoScroll::Inactive);
        assert_eq!(active.normalized(1), AutoScroll::Inactive);
        assert_eq!(active.normalized(2), active);
    }

    #[test]
    fn interval_and_activity() {
        assert!(!AutoScroll::Inactive.is_active());
        assert_eq!(AutoScroll::Inactive.interval(), Duration::ZERO);

        let active = AutoScroll::from_secs_f64(1.5);
        assert!(active.is_active());
        assert_eq!(active.interval(), Duration::from_millis(1500));
    }
}

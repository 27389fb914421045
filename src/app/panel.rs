use std::time::Duration;

use crate::{
    carousel::{AutoScroll, CarouselOptions},
    options::DemoSettings,
};

/// A value the control panel can adjust.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelField {
    Spacing,
    Headspace,
    SidesScaling,
    AutoScrollInterval,
}

impl PanelField {
    const ALL: [PanelField; 4] = [
        PanelField::Spacing,
        PanelField::Headspace,
        PanelField::SidesScaling,
        PanelField::AutoScrollInterval,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PanelField::Spacing => "Spacing",
            PanelField::Headspace => "Headspace",
            PanelField::SidesScaling => "Sides scaling",
            PanelField::AutoScrollInterval => "Auto-scroll interval",
        }
    }

    /// The lowest value, the highest value, and the step between them.
    fn range(self) -> (f32, f32, f32) {
        match self {
            PanelField::Spacing | PanelField::Headspace => (0.0, 30.0, 1.0),
            PanelField::SidesScaling => (0.0, 1.0, 0.05),
            PanelField::AutoScrollInterval => (1.0, 10.0, 1.0),
        }
    }

    fn position(self) -> usize {
        Self::ALL
            .iter()
            .position(|field| *field == self)
            .unwrap_or_default()
    }
}

/// The playground's settings, adjusted live from the keyboard.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPanel {
    selected: PanelField,
    spacing: f32,
    headspace: f32,
    sides_scaling: f32,
    wrap: bool,
    auto_scroll_enabled: bool,
    interval_secs: f32,
}

impl ControlPanel {
    pub(crate) fn new(settings: &DemoSettings) -> Self {
        let (auto_scroll_enabled, interval_secs) = match settings.auto_scroll {
            AutoScroll::Active(interval) => (true, interval.as_secs_f32()),
            AutoScroll::Inactive => (false, 5.0),
        };

        Self {
            selected: PanelField::Spacing,
            spacing: settings.spacing,
            headspace: settings.headspace,
            sides_scaling: settings.sides_scaling,
            wrap: settings.wrap,
            auto_scroll_enabled,
            interval_secs,
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = (PanelField, f32)> + '_ {
        PanelField::ALL
            .iter()
            .map(move |field| (*field, self.value(*field)))
    }

    pub fn selected(&self) -> PanelField {
        self.selected
    }

    pub fn value(&self, field: PanelField) -> f32 {
        match field {
            PanelField::Spacing => self.spacing,
            PanelField::Headspace => self.headspace,
            PanelField::SidesScaling => self.sides_scaling,
            PanelField::AutoScrollInterval => self.interval_secs,
        }
    }

    pub fn is_wrap(&self) -> bool {
        self.wrap
    }

    pub fn is_auto_scroll_enabled(&self) -> bool {
        self.auto_scroll_enabled
    }

    pub(crate) fn select_next(&mut self) {
        let next = (self.selected.position() + 1) % PanelField::ALL.len();
        self.selected = PanelField::ALL[next];
    }

    pub(crate) fn select_previous(&mut self) {
        let len = PanelField::ALL.len();
        let previous = (self.selected.position() + len - 1) % len;
        self.selected = PanelField::ALL[previous];
    }

    /// Steps the selected field up. Returns whether anything changed.
    pub(crate) fn increment(&mut self) -> bool {
        self.adjust(1.0)
    }

    /// Steps the selected field down. Returns whether anything changed.
    pub(crate) fn decrement(&mut self) -> bool {
        self.adjust(-1.0)
    }

    fn adjust(&mut self, direction: f32) -> bool {
        let field = self.selected;
        let (min, max, step) = field.range();
        let current = self.value(field);

        // Values from the config file may start out of range; only ever move
        // them towards it.
        if (direction > 0.0 && current >= max) || (direction < 0.0 && current <= min) {
            return false;
        }

        // Round to the step so repeated float additions don't drift.
        let next = ((current + direction * step) / step).round() * step;
        let next = next.clamp(min, max);

        match field {
            PanelField::Spacing => self.spacing = next,
            PanelField::Headspace => self.headspace = next,
            PanelField::SidesScaling => self.sides_scaling = next,
            PanelField::AutoScrollInterval => self.interval_secs = next,
        }

        next != current
    }

    pub(crate) fn toggle_wrap(&mut self) {
        self.wrap = !self.wrap;
    }

    pub(crate) fn toggle_auto_scroll(&mut self) {
        self.auto_scroll_enabled = !self.auto_scroll_enabled;
    }

    pub fn auto_scroll(&self) -> AutoScroll {
        if self.auto_scroll_enabled {
            AutoScroll::from_secs_f64(f64::from(self.interval_secs))
        } else {
            AutoScroll::Inactive
        }
    }

    /// The carousel options the panel currently describes.
    pub(crate) fn options(&self) -> CarouselOptions {
        CarouselOptions::default()
            .spacing(self.spacing)
            .headspace(self.headspace)
            .sides_scaling(self.sides_scaling)
            .wrap(self.wrap)
            .auto_scroll(self.auto_scroll())
    }

    pub fn interval(&self) -> Duration {
        self.auto_scroll().interval()
    }
}

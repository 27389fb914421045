mod panel;
mod tween;

use std::{cell::Cell, rc::Rc, time::Duration};

use log::{debug, warn};
pub use panel::{ControlPanel, PanelField};
use tui::{
    layout::{Position, Rect},
    style::Color,
};
pub(crate) use tween::OffsetTween;

use crate::{
    carousel::{
        self, AppLifecycle, CarouselController, CarouselEvent, CarouselOptions, EventResult,
        Identifiable, IndexBinding, Size,
    },
    constants::TICK_RATE_IN_MILLISECONDS,
    options::DemoSettings,
};

/// How long the strip takes to slide between two offsets.
const OFFSET_ANIMATION_DURATION: Duration = Duration::from_millis(250);

/// One card in the demo carousel.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoItem {
    id: usize,
    label: String,
    colour: Color,
}

impl DemoItem {
    pub(crate) fn new(id: usize, label: &str, colour: Color) -> Self {
        Self {
            id,
            label: label.to_string(),
            colour,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn colour(&self) -> Color {
        self.colour
    }
}

impl Identifiable for DemoItem {
    type Id = usize;

    fn id(&self) -> usize {
        self.id
    }
}

pub type DemoCarousel = CarouselController<DemoItem, usize>;

/// The state of a running demo.
pub struct App {
    controller: DemoCarousel,
    binding: IndexBinding,
    panel: ControlPanel,
    can_move: bool,
    animated: bool,
    item_height: u16,
    show_panel: bool,
    tween: OffsetTween,
    mouse_drag_start: Option<u16>,
    foreground: bool,
    carousel_area: Rect,
    last_event: Rc<Cell<Option<CarouselEvent>>>,
}

impl App {
    pub fn new(settings: DemoSettings) -> carousel::Result<Self> {
        let binding = IndexBinding::new(settings.index);
        let panel = ControlPanel::new(&settings);
        let last_event = Rc::new(Cell::new(None));

        let options = carousel_options(
            &panel,
            &binding,
            settings.can_move,
            settings.animated,
        );
        let controller = build_controller(settings.items, options, &last_event)?;

        let mut tween = OffsetTween::new(if settings.animated {
            OFFSET_ANIMATION_DURATION
        } else {
            Duration::ZERO
        });
        tween.snap(controller.offset());

        Ok(Self {
            controller,
            binding,
            panel,
            can_move: settings.can_move,
            animated: settings.animated,
            item_height: settings.item_height,
            show_panel: settings.show_panel,
            tween,
            mouse_drag_start: None,
            foreground: true,
            carousel_area: Rect::default(),
            last_event,
        })
    }

    pub fn controller(&self) -> &DemoCarousel {
        &self.controller
    }

    pub fn panel(&self) -> &ControlPanel {
        &self.panel
    }

    pub fn item_height(&self) -> u16 {
        self.item_height
    }

    pub fn show_panel(&self) -> bool {
        self.show_panel
    }

    pub fn is_foreground(&self) -> bool {
        self.foreground
    }

    /// The most recent change the carousel reported.
    pub fn last_event(&self) -> Option<CarouselEvent> {
        self.last_event.get()
    }

    /// The offset to draw the strip at, which trails the controller's
    /// offset while animating.
    pub fn displayed_offset(&self) -> f32 {
        self.tween.value()
    }

    pub fn carousel_area(&self) -> Rect {
        self.carousel_area
    }

    /// Records where the strip was laid out, which is also the carousel's
    /// viewport.
    pub fn set_carousel_area(&mut self, area: Rect) {
        if self.carousel_area == area {
            return;
        }

        self.carousel_area = area;
        let viewport = Size::new(f32::from(area.width), f32::from(area.height));
        if self.controller.set_viewport(viewport).needs_redraw() {
            self.tween.snap(self.controller.offset());
        }
    }

    /// Runs once per frame: lets deferred carousel work happen and moves the
    /// animation along.
    pub fn on_frame(&mut self, elapsed: Duration) -> EventResult {
        let result = self.controller.advance(elapsed);
        self.follow(result);

        if self.tween.step(elapsed) {
            EventResult::Redraw
        } else {
            result
        }
    }

    pub fn on_tick(&mut self) -> EventResult {
        let result = self.controller.on_timer_tick();
        self.follow(result)
    }

    /// Drags right by half an item, revealing the previous one.
    pub fn on_left_key(&mut self) -> EventResult {
        self.drag_by_half_item(1.0)
    }

    /// Drags left by half an item, revealing the next one.
    pub fn on_right_key(&mut self) -> EventResult {
        self.drag_by_half_item(-1.0)
    }

    fn drag_by_half_item(&mut self, direction: f32) -> EventResult {
        let delta = direction * self.controller.item_width() / 2.0;

        let result = self
            .controller
            .on_drag_changed(delta)
            .or(self.controller.on_drag_ended(delta));
        self.follow(result)
    }

    /// Moves to the item at `index` by writing it into the shared binding.
    pub fn push_index(&mut self, index: usize) -> EventResult {
        self.binding.set(index);
        let result = self.controller.sync_binding();
        self.follow(result)
    }

    pub fn on_up_key(&mut self) -> EventResult {
        if !self.show_panel {
            return EventResult::NoRedraw;
        }

        self.panel.select_previous();
        EventResult::Redraw
    }

    pub fn on_down_key(&mut self) -> EventResult {
        if !self.show_panel {
            return EventResult::NoRedraw;
        }

        self.panel.select_next();
        EventResult::Redraw
    }

    pub fn increment_selected(&mut self) -> EventResult {
        if self.show_panel && self.panel.increment() {
            self.rebuild()
        } else {
            EventResult::NoRedraw
        }
    }

    pub fn decrement_selected(&mut self) -> EventResult {
        if self.show_panel && self.panel.decrement() {
            self.rebuild()
        } else {
            EventResult::NoRedraw
        }
    }

    pub fn toggle_wrap(&mut self) -> EventResult {
        if !self.show_panel {
            return EventResult::NoRedraw;
        }

        self.panel.toggle_wrap();
        self.rebuild()
    }

    pub fn toggle_auto_scroll(&mut self) -> EventResult {
        if !self.show_panel {
            return EventResult::NoRedraw;
        }

        self.panel.toggle_auto_scroll();
        self.rebuild()
    }

    /// Flips between the foreground and background, as if the terminal had
    /// lost or gained focus.
    pub fn toggle_foreground(&mut self) -> EventResult {
        let lifecycle = if self.foreground {
            AppLifecycle::Background
        } else {
            AppLifecycle::Foreground
        };

        self.on_lifecycle(lifecycle)
    }

    pub fn on_lifecycle(&mut self, lifecycle: AppLifecycle) -> EventResult {
        let foreground = lifecycle == AppLifecycle::Foreground;
        if self.foreground == foreground {
            return EventResult::NoRedraw;
        }

        debug!("lifecycle changed: {lifecycle:?}");
        self.foreground = foreground;
        self.controller.on_lifecycle(lifecycle);

        // The status line shows the timer's state.
        EventResult::Redraw
    }

    /// Starts a drag if the pointer went down over the strip.
    pub fn on_left_mouse_down(&mut self, x: u16, y: u16) -> EventResult {
        if self.can_move && self.carousel_area.contains(Position { x, y }) {
            self.mouse_drag_start = Some(x);
        }

        EventResult::NoRedraw
    }

    pub fn on_left_mouse_drag(&mut self, x: u16) -> EventResult {
        let Some(start) = self.mouse_drag_start else {
            return EventResult::NoRedraw;
        };

        let result = self
            .controller
            .on_drag_changed(f32::from(x) - f32::from(start));
        self.follow(result)
    }

    pub fn on_left_mouse_up(&mut self, x: u16) -> EventResult {
        let Some(start) = self.mouse_drag_start.take() else {
            return EventResult::NoRedraw;
        };

        let result = self
            .controller
            .on_drag_ended(f32::from(x) - f32::from(start));
        self.follow(result)
    }

    /// Points the tween at the controller's offset after a change.
    fn follow(&mut self, result: EventResult) -> EventResult {
        if result.needs_redraw() {
            self.tween
                .retarget(self.controller.offset(), self.controller.is_animated());
        }

        result
    }

    /// Swaps in a controller built from the panel's current values. The
    /// shared binding carries the current item over.
    fn rebuild(&mut self) -> EventResult {
        let items = self.controller.items().to_vec();
        let options = carousel_options(&self.panel, &self.binding, self.can_move, self.animated);

        match build_controller(items, options, &self.last_event) {
            Ok(mut controller) => {
                controller.set_viewport(self.controller.viewport());
                if !self.foreground {
                    controller.on_lifecycle(AppLifecycle::Background);
                }

                self.controller = controller;
                self.mouse_drag_start = None;
                self.tween.snap(self.controller.offset());
            }
            Err(err) => warn!("unable to rebuild the carousel: {err}"),
        }

        EventResult::Redraw
    }
}

fn carousel_options(
    panel: &ControlPanel, binding: &IndexBinding, can_move: bool, animated: bool,
) -> CarouselOptions {
    panel
        .options()
        .index(binding.clone())
        .can_move(can_move)
        .animated(animated)
        .tick_period(Duration::from_millis(TICK_RATE_IN_MILLISECONDS))
}

fn build_controller(
    items: Vec<DemoItem>, options: CarouselOptions, last_event: &Rc<Cell<Option<CarouselEvent>>>,
) -> carousel::Result<DemoCarousel> {
    let mut controller = CarouselController::new(items, options)?;

    let last_event = Rc::clone(last_event);
    controller.subscribe(move |event| last_event.set(Some(*event)));

    Ok(controller)
}

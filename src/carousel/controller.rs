use std::{fmt, hash::Hash, time::Duration};

use log::{debug, warn};

use super::{
    AppLifecycle, AutoScroll, AutoScrollTimer, BoundaryCorrection, CarouselError, CarouselEvent,
    CarouselOptions, EventResult, IndexBinding, Layout, Result, Size, event::Observer,
};
use crate::utils::general::clamp_magnitude;

/// Items that carry their own identity.
pub trait Identifiable {
    type Id: Eq + Hash;

    fn id(&self) -> Self::Id;
}

/// The state behind a carousel: which item is centered, how far the strip is
/// shifted, and when it should move on its own.
///
/// The controller never renders anything. A renderer measures its surface,
/// hands the size over with [`CarouselController::set_viewport`], lays out
/// [`CarouselController::wrapped_data`] in slots of
/// [`CarouselController::item_width`] shifted by
/// [`CarouselController::offset`], and scales each slot by
/// [`CarouselController::slot_scale`]. Gestures, timer ticks and lifecycle
/// changes flow back in through the `on_*` methods, and the host calls
/// [`CarouselController::advance`] every frame so deferred work can run.
///
/// When wrapping, the controller works on a sequence with a clone of the last
/// item in front and a clone of the first at the back. Indices into that
/// sequence are called _slots_; indices into the caller's data are _external_
/// indices.
pub struct CarouselController<T, ID> {
    items: Vec<T>,
    ids: Vec<ID>,
    layout: Layout,
    wrap: bool,
    auto_scroll: AutoScroll,
    can_move: bool,
    animations_enabled: bool,
    tick_period: Duration,
    correction_delay: Duration,

    binding: IndexBinding,
    active_index: usize,
    external_index: usize,
    drag_offset: f32,
    is_animated: bool,
    timer: AutoScrollTimer,
    viewport: Size,
    pending_correction: Option<BoundaryCorrection>,
    observers: Vec<Observer>,
}

impl<T: Identifiable> CarouselController<T, T::Id> {
    /// Creates a new [`CarouselController`] over items that know their own identity.
    pub fn new(items: Vec<T>, options: CarouselOptions) -> Result<Self> {
        Self::with_key(items, T::id, options)
    }
}

impl<T, ID: Eq + Hash> CarouselController<T, ID> {
    /// Creates a new [`CarouselController`], identifying items with `key`.
    ///
    /// Fails if the binding's initial index doesn't point at an item. An empty
    /// carousel only accepts index `0`.
    pub fn with_key<F>(items: Vec<T>, key: F, options: CarouselOptions) -> Result<Self>
    where
        F: Fn(&T) -> ID,
    {
        let len = items.len();
        let external_index = options.index.get();
        if external_index >= len && !(len == 0 && external_index == 0) {
            return Err(CarouselError::IndexOutOfBounds {
                index: external_index,
                len,
            });
        }

        let ids = items.iter().map(key).collect();
        let wrap = options.wrap && len > 1;
        let auto_scroll = options.auto_scroll.normalized(len);
        let active_index = if wrap {
            external_index + 1
        } else {
            external_index
        };

        debug!(
            "creating carousel: {len} item(s), wrap: {wrap}, auto scroll: {auto_scroll:?}, index: {external_index}"
        );

        Ok(Self {
            items,
            ids,
            layout: Layout::new(options.spacing, options.headspace, options.sides_scaling),
            wrap,
            auto_scroll,
            can_move: options.can_move,
            animations_enabled: options.animated,
            tick_period: options.tick_period,
            correction_delay: options.correction_delay,
            binding: options.index,
            active_index,
            external_index,
            drag_offset: 0.0,
            is_animated: false,
            timer: AutoScrollTimer::default(),
            viewport: Size::ZERO,
            pending_correction: None,
            observers: Vec::new(),
        })
    }

    /// The caller's items, in their original order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Whether navigation loops. Always false with fewer than two items.
    pub fn is_wrap(&self) -> bool {
        self.wrap
    }

    /// The effective auto-scroll setting.
    pub fn auto_scroll(&self) -> AutoScroll {
        self.auto_scroll
    }

    pub fn can_move(&self) -> bool {
        self.can_move
    }

    /// The centered slot.
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// The centered item's index in the caller's data.
    pub fn external_index(&self) -> usize {
        self.external_index
    }

    /// A handle to the binding the external index is mirrored into.
    pub fn binding(&self) -> &IndexBinding {
        &self.binding
    }

    /// The offset of an in-progress drag. Zero when idle.
    pub fn drag_offset(&self) -> f32 {
        self.drag_offset
    }

    /// Whether the renderer should animate towards the current offset.
    pub fn is_animated(&self) -> bool {
        self.is_animated
    }

    /// Whether timer ticks currently count towards an advance.
    pub fn is_timer_active(&self) -> bool {
        self.timer.is_active()
    }

    /// Time accumulated towards the next auto-scroll advance.
    pub fn timing(&self) -> Duration {
        self.timer.timing()
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// The boundary correction waiting to fire, if any.
    pub fn pending_correction(&self) -> Option<&BoundaryCorrection> {
        self.pending_correction.as_ref()
    }

    /// Registers an observer that is told about every change after it has
    /// been applied.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&CarouselEvent) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    fn emit(&mut self, event: CarouselEvent) {
        for observer in &mut self.observers {
            observer(&event);
        }
    }
}

// Wrap extension and coordinate mapping.
impl<T, ID: Eq + Hash> CarouselController<T, ID> {
    /// The number of slots, including sentinels.
    pub fn wrapped_len(&self) -> usize {
        if self.wrap {
            self.items.len() + 2
        } else {
            self.items.len()
        }
    }

    /// Maps a slot to the index of the item it shows. `None` past the end.
    pub fn raw_index_of(&self, slot: usize) -> Option<usize> {
        let len = self.items.len();

        if !self.wrap {
            return (slot < len).then_some(slot);
        }

        if slot == 0 {
            Some(len - 1)
        } else if slot <= len {
            Some(slot - 1)
        } else if slot == len + 1 {
            Some(0)
        } else {
            None
        }
    }

    /// Whether a slot holds a clone used only for wrapping.
    pub fn is_sentinel(&self, slot: usize) -> bool {
        self.wrap && (slot == 0 || slot == self.items.len() + 1)
    }

    /// The items laid out on the strip, sentinels included.
    pub fn wrapped_data(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.wrapped_len())
            .filter_map(move |slot| self.raw_index_of(slot))
            .map(move |index| &self.items[index])
    }

    /// The identities of [`CarouselController::wrapped_data`], in the same order.
    pub fn wrapped_ids(&self) -> impl Iterator<Item = &ID> + '_ {
        (0..self.wrapped_len())
            .filter_map(move |slot| self.raw_index_of(slot))
            .map(move |index| &self.ids[index])
    }

    fn active_id(&self) -> Option<&ID> {
        self.raw_index_of(self.active_index)
            .map(|index| &self.ids[index])
    }

    fn external_of(&self, slot: usize) -> usize {
        self.raw_index_of(slot).unwrap_or(0)
    }

    fn slot_of(&self, external_index: usize) -> usize {
        if self.wrap {
            external_index + 1
        } else {
            external_index
        }
    }

    fn clamp_slot(&self, slot: i64) -> usize {
        let last = self.wrapped_len().saturating_sub(1) as i64;
        slot.clamp(0, last) as usize
    }
}

// Derived geometry; recomputed on every call.
impl<T, ID: Eq + Hash> CarouselController<T, ID> {
    pub fn default_padding(&self) -> f32 {
        self.layout.default_padding()
    }

    pub fn item_width(&self) -> f32 {
        self.layout.item_width(self.viewport)
    }

    pub fn item_stride(&self) -> f32 {
        self.layout.item_stride(self.viewport)
    }

    /// The horizontal translation of the strip.
    pub fn offset(&self) -> f32 {
        self.layout
            .offset(self.viewport, self.active_index, self.drag_offset)
    }

    /// The offset with the first slot centered.
    pub fn min_offset(&self) -> f32 {
        self.layout.offset(self.viewport, 0, 0.0)
    }

    /// The offset with the last slot centered.
    pub fn max_offset(&self) -> f32 {
        self.layout
            .offset(self.viewport, self.wrapped_len().saturating_sub(1), 0.0)
    }

    /// The x position of a slot relative to the viewport at the current offset.
    pub fn slot_position(&self, slot: usize) -> f32 {
        self.layout.slot_position(self.viewport, self.offset(), slot)
    }

    /// The scale of the item identified by `id`: `1` for the active item and
    /// the sides scaling for everything else. Everything is scaled to `0` if
    /// there is no active item.
    pub fn item_scale(&self, id: &ID) -> f32 {
        match self.active_id() {
            Some(active) if active == id => 1.0,
            Some(_) => self.layout.sides_scaling(),
            None => 0.0,
        }
    }

    /// [`CarouselController::item_scale`] for the item in a given slot.
    pub fn slot_scale(&self, slot: usize) -> f32 {
        match self.raw_index_of(slot) {
            Some(index) => self.item_scale(&self.ids[index]),
            None => 0.0,
        }
    }
}

// Mutations. Each one leaves the active and external indices in sync.
impl<T, ID: Eq + Hash> CarouselController<T, ID> {
    /// Records the size of the surface the carousel is rendered into.
    pub fn set_viewport(&mut self, viewport: Size) -> EventResult {
        if self.viewport == viewport {
            return EventResult::NoRedraw;
        }

        self.viewport = viewport;
        EventResult::Redraw
    }

    /// Handles a drag in progress, where `delta` is the total horizontal
    /// translation since the drag started.
    ///
    /// The strip follows the pointer for at most one item in either direction.
    pub fn on_drag_changed(&mut self, delta: f32) -> EventResult {
        if !self.can_move {
            return EventResult::NoRedraw;
        }

        let offset = clamp_magnitude(delta, self.item_stride());
        let was_active = self.timer.is_active();

        self.drag_offset = offset;
        self.is_animated = self.animations_enabled;
        self.timer.set_dragging(true);

        if was_active {
            self.emit(CarouselEvent::TimerSuspended);
        }
        self.emit(CarouselEvent::DragMoved { offset });

        EventResult::Redraw
    }

    /// Handles the end of a drag, where `delta` is the final translation.
    ///
    /// Dragging right past a third of an item reveals the previous item, and
    /// dragging left past it reveals the next one.
    pub fn on_drag_ended(&mut self, delta: f32) -> EventResult {
        if !self.can_move {
            return EventResult::NoRedraw;
        }

        self.drag_offset = 0.0;
        self.timer.reset();
        self.resume_from_drag();

        let threshold = self.layout.drag_threshold(self.viewport);
        let mut target = self.active_index as i64;
        if delta > threshold {
            target -= 1;
        } else if delta < -threshold {
            target += 1;
        }

        let target = self.clamp_slot(target);
        self.set_active_index(target, true);

        EventResult::Redraw
    }

    /// Handles a tick of the host's periodic timer.
    pub fn on_timer_tick(&mut self) -> EventResult {
        if !self.auto_scroll.is_active() {
            return EventResult::NoRedraw;
        }

        if !self
            .timer
            .tick(self.tick_period, self.auto_scroll.interval())
        {
            return EventResult::NoRedraw;
        }

        // Let the strip settle onto the real item first; the advance happens
        // on the next tick instead.
        if self.pending_correction.is_some() {
            debug!("deferring auto scroll until the boundary correction fires");
            return EventResult::NoRedraw;
        }

        // The trailing sentinel shows the first item, so with wrap on the
        // next one is the second item's real slot.
        let last = self.wrapped_len().saturating_sub(1);
        let next = if self.active_index < last {
            self.active_index + 1
        } else if self.wrap {
            2
        } else {
            0
        };

        self.timer.reset();
        self.set_active_index(next, true);

        EventResult::Redraw
    }

    /// Handles the host application moving between the foreground and background.
    pub fn on_lifecycle(&mut self, lifecycle: AppLifecycle) -> EventResult {
        let was_active = self.timer.is_active();
        self.timer
            .set_foreground(lifecycle == AppLifecycle::Foreground);
        self.emit_timer_transition(was_active);

        EventResult::NoRedraw
    }

    /// Lets time pass for deferred work. Hosts should call this every frame
    /// with the time since the previous call.
    pub fn advance(&mut self, elapsed: Duration) -> EventResult {
        let Some(correction) = self.pending_correction.as_mut() else {
            return EventResult::NoRedraw;
        };

        if !correction.advance(elapsed) {
            return EventResult::NoRedraw;
        }

        let correction = *correction;
        self.pending_correction = None;

        if self.active_index != correction.from {
            return EventResult::NoRedraw;
        }

        debug!(
            "boundary correction: slot {} -> slot {}",
            correction.from, correction.to
        );

        self.active_index = correction.to;
        self.is_animated = false;
        self.sync_external();
        self.emit(CarouselEvent::Teleported {
            from: correction.from,
            to: correction.to,
        });

        EventResult::Redraw
    }

    /// Drops a pending boundary correction. Returns whether there was one.
    pub fn cancel_pending_correction(&mut self) -> bool {
        self.pending_correction.take().is_some()
    }

    /// Moves the carousel to the item at `index` in the caller's data, as if
    /// a drag had just ended there. Out of range indices are clamped.
    pub fn set_external_index(&mut self, index: usize) -> EventResult {
        let len = self.items.len();
        if len == 0 {
            self.binding.set(0);
            return EventResult::NoRedraw;
        }

        let clamped = index.min(len - 1);
        if clamped != index {
            warn!("external index {index} is out of bounds, clamping to {clamped}");
        }

        self.drag_offset = 0.0;
        self.timer.reset();
        self.resume_from_drag();
        self.pending_correction = None;

        let slot = self.slot_of(clamped);
        self.set_active_index(slot, true);

        EventResult::Redraw
    }

    /// Picks up an index the caller wrote directly into the binding.
    pub fn sync_binding(&mut self) -> EventResult {
        let index = self.binding.get();
        if index == self.external_index {
            return EventResult::NoRedraw;
        }

        debug!("external index pushed: {} -> {index}", self.external_index);
        self.set_external_index(index)
    }

    fn resume_from_drag(&mut self) {
        let was_active = self.timer.is_active();
        self.timer.set_dragging(false);
        self.emit_timer_transition(was_active);
    }

    fn emit_timer_transition(&mut self, was_active: bool) {
        match (was_active, self.timer.is_active()) {
            (true, false) => self.emit(CarouselEvent::TimerSuspended),
            (false, true) => self.emit(CarouselEvent::TimerResumed),
            _ => {}
        }
    }

    fn sync_external(&mut self) {
        self.external_index = self.external_of(self.active_index);
        self.binding.set(self.external_index);
    }

    fn set_active_index(&mut self, index: usize, animated: bool) {
        let previous = self.active_index;

        self.active_index = index;
        self.is_animated = animated && self.animations_enabled;
        self.sync_external();

        if let Some(correction) = &self.pending_correction {
            if correction.from != index {
                debug!("cancelling stale boundary correction from slot {}", correction.from);
                self.pending_correction = None;
            }
        }

        if index == previous {
            return;
        }

        self.emit(CarouselEvent::IndexChanged {
            active: self.active_index,
            external: self.external_index,
            animated: self.is_animated,
        });

        if self.wrap && self.pending_correction.is_none() {
            self.pending_correction =
                BoundaryCorrection::for_slot(index, self.wrapped_len(), self.correction_delay);
        }
    }
}

impl<T: fmt::Debug, ID: fmt::Debug> fmt::Debug for CarouselController<T, ID> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CarouselController")
            .field("items", &self.items)
            .field("ids", &self.ids)
            .field("layout", &self.layout)
            .field("wrap", &self.wrap)
            .field("auto_scroll", &self.auto_scroll)
            .field("can_move", &self.can_move)
            .field("active_index", &self.active_index)
            .field("external_index", &self.external_index)
            .field("drag_offset", &self.drag_offset)
            .field("is_animated", &self.is_animated)
            .field("timer", &self.timer)
            .field("viewport", &self.viewport)
            .field("pending_correction", &self.pending_correction)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod test {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    const SECOND: Duration = Duration::from_secs(1);
    const CORRECTION: Duration = Duration::from_millis(100);

    #[derive(Debug, Clone, PartialEq)]
    struct Card {
        id: u32,
    }

    impl Identifiable for Card {
        type Id = u32;

        fn id(&self) -> u32 {
            self.id
        }
    }

    fn cards(count: u32) -> Vec<Card> {
        (0..count).map(|id| Card { id }).collect()
    }

    /// A 300 wide viewport: items are 260 wide, 270 apart, with a drag
    /// threshold of ~86.7.
    fn viewport() -> Size {
        Size::new(300.0, 200.0)
    }

    fn controller(count: u32, options: CarouselOptions) -> CarouselController<Card, u32> {
        let mut controller = CarouselController::new(cards(count), options).unwrap();
        controller.set_viewport(viewport());
        controller
    }

    fn assert_synced(controller: &CarouselController<Card, u32>) {
        let expected = if controller.is_wrap() {
            controller.active_index() - 1
        } else {
            controller.active_index()
        };

        assert_eq!(controller.external_index(), expected);
        assert_eq!(controller.binding().get(), expected);
    }

    #[test]
    fn indices_match_without_wrap() {
        let mut controller = controller(
            4,
            CarouselOptions::default().auto_scroll(AutoScroll::Active(SECOND)),
        );
        assert_synced(&controller);

        controller.on_drag_ended(-100.0);
        assert_synced(&controller);
        assert_eq!(controller.active_index(), 1);

        controller.on_timer_tick();
        assert_synced(&controller);
        assert_eq!(controller.active_index(), 2);

        controller.on_drag_ended(100.0);
        assert_synced(&controller);
        assert_eq!(controller.active_index(), 1);

        controller.set_external_index(3);
        assert_synced(&controller);
        assert_eq!(controller.active_index(), 3);
    }

    #[test]
    fn indices_are_offset_by_one_with_wrap() {
        let mut controller = controller(3, CarouselOptions::default().wrap(true));
        assert_eq!(controller.wrapped_len(), 5);
        assert_eq!(controller.active_index(), 1);
        assert_synced(&controller);

        for delta in [-100.0, -100.0, -100.0, 100.0, 100.0, 100.0, 100.0] {
            controller.on_drag_ended(delta);
            controller.advance(CORRECTION);
            assert_synced(&controller);
        }
    }

    #[test]
    fn wrapped_data_has_sentinels() {
        let controller = controller(3, CarouselOptions::default().wrap(true));

        let ids: Vec<u32> = controller.wrapped_ids().copied().collect();
        assert_eq!(ids, vec![2, 0, 1, 2, 0]);
        assert_eq!(controller.wrapped_data().count(), 5);

        assert!(controller.is_sentinel(0));
        assert!(controller.is_sentinel(4));
        assert!(!controller.is_sentinel(2));
        assert_eq!(controller.raw_index_of(5), None);
    }

    #[test]
    fn sentinel_slots_report_the_item_they_clone() {
        let mut controller = controller(3, CarouselOptions::default().wrap(true));

        controller.on_drag_ended(100.0);
        assert_eq!(controller.active_index(), 0);
        assert_eq!(controller.external_index(), 2);
    }

    #[test]
    fn unwrapped_data_is_unchanged() {
        let controller = controller(3, CarouselOptions::default());

        let ids: Vec<u32> = controller.wrapped_ids().copied().collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert!(!controller.is_sentinel(0));
    }

    #[test]
    fn item_scale() {
        let controller = controller(
            3,
            CarouselOptions::default().index(IndexBinding::new(1)),
        );

        assert_eq!(controller.item_scale(&1), 1.0);
        assert_eq!(controller.item_scale(&0), 0.8);
        assert_eq!(controller.item_scale(&2), 0.8);
        assert_eq!(controller.slot_scale(1), 1.0);
        assert_eq!(controller.slot_scale(7), 0.0);

        let clamped = self::controller(3, CarouselOptions::default().sides_scaling(1.7));
        assert_eq!(clamped.item_scale(&2), 1.0);

        let empty = self::controller(0, CarouselOptions::default());
        assert_eq!(empty.item_scale(&0), 0.0);
        assert_eq!(empty.slot_scale(0), 0.0);
    }

    #[test]
    fn sentinels_share_scale_with_their_item() {
        let controller = controller(3, CarouselOptions::default().wrap(true));

        // Slot 1 is the first item, and so is the trailing sentinel.
        assert_eq!(controller.slot_scale(1), 1.0);
        assert_eq!(controller.slot_scale(4), 1.0);
        assert_eq!(controller.slot_scale(0), 0.8);
    }

    #[test]
    fn drag_is_clamped_to_one_stride() {
        let mut controller = controller(3, CarouselOptions::default());
        let stride = controller.item_stride();
        assert_eq!(stride, 270.0);

        for (delta, expected) in [
            (1000.0, stride),
            (-1000.0, -stride),
            (50.0, 50.0),
            (-50.0, -50.0),
            (0.0, 0.0),
        ] {
            controller.on_drag_changed(delta);
            assert_eq!(controller.drag_offset(), expected);
        }

        assert!(controller.is_animated());
        assert!(!controller.is_timer_active());

        controller.on_drag_ended(0.0);
        assert_eq!(controller.drag_offset(), 0.0);
        assert!(controller.is_timer_active());
    }

    #[test]
    fn drag_offset_moves_the_strip() {
        let mut controller = controller(3, CarouselOptions::default());

        let idle = controller.offset();
        controller.on_drag_changed(40.0);
        assert_eq!(controller.offset(), idle + 40.0);
    }

    #[test]
    fn drag_end_threshold() {
        let mut controller = controller(
            3,
            CarouselOptions::default().index(IndexBinding::new(1)),
        );

        // Within a third of an item, nothing changes.
        controller.on_drag_ended(80.0);
        assert_eq!(controller.active_index(), 1);
        controller.on_drag_ended(-80.0);
        assert_eq!(controller.active_index(), 1);

        controller.on_drag_ended(-100.0);
        assert_eq!(controller.active_index(), 2);

        // Clamped at the end.
        controller.on_drag_ended(-100.0);
        assert_eq!(controller.active_index(), 2);

        controller.on_drag_ended(100.0);
        controller.on_drag_ended(100.0);
        assert_eq!(controller.active_index(), 0);

        // Clamped at the start.
        controller.on_drag_ended(100.0);
        assert_eq!(controller.active_index(), 0);
    }

    #[test]
    fn view_only_ignores_drags() {
        let mut controller = controller(3, CarouselOptions::default().can_move(false));

        assert_eq!(controller.on_drag_changed(100.0), EventResult::NoRedraw);
        assert_eq!(controller.drag_offset(), 0.0);
        assert!(controller.is_timer_active());

        assert_eq!(controller.on_drag_ended(-200.0), EventResult::NoRedraw);
        assert_eq!(controller.active_index(), 0);
    }

    #[test]
    fn auto_scroll_advances_every_interval() {
        let mut controller = controller(
            4,
            CarouselOptions::default().auto_scroll(AutoScroll::Active(Duration::from_secs(3))),
        );

        for tick in 1..=9 {
            controller.on_timer_tick();
            assert_eq!(controller.active_index(), tick / 3);
        }

        // The last item goes back to the first.
        for _ in 0..3 {
            controller.on_timer_tick();
        }
        assert_eq!(controller.active_index(), 0);
        assert_synced(&controller);
    }

    #[test]
    fn auto_scroll_pauses_while_suspended() {
        let mut controller = controller(
            4,
            CarouselOptions::default().auto_scroll(AutoScroll::Active(SECOND)),
        );

        controller.on_drag_changed(20.0);
        for _ in 0..5 {
            assert_eq!(controller.on_timer_tick(), EventResult::NoRedraw);
        }
        assert_eq!(controller.active_index(), 0);

        controller.on_drag_ended(20.0);
        controller.on_lifecycle(AppLifecycle::Background);
        for _ in 0..5 {
            controller.on_timer_tick();
        }
        assert_eq!(controller.active_index(), 0);
        assert_eq!(controller.timing(), Duration::ZERO);

        controller.on_lifecycle(AppLifecycle::Foreground);
        controller.on_timer_tick();
        assert_eq!(controller.active_index(), 1);
    }

    #[test]
    fn drag_end_in_background_keeps_timer_suspended() {
        let mut controller = controller(
            4,
            CarouselOptions::default().auto_scroll(AutoScroll::Active(SECOND)),
        );

        controller.on_drag_changed(20.0);
        controller.on_lifecycle(AppLifecycle::Background);
        controller.on_drag_ended(20.0);
        assert!(!controller.is_timer_active());

        controller.on_lifecycle(AppLifecycle::Foreground);
        assert!(controller.is_timer_active());
    }

    #[test]
    fn drag_end_resets_timing() {
        let mut controller = controller(
            4,
            CarouselOptions::default().auto_scroll(AutoScroll::Active(Duration::from_secs(3))),
        );

        controller.on_timer_tick();
        controller.on_timer_tick();
        assert_eq!(controller.timing(), Duration::from_secs(2));

        controller.on_drag_changed(10.0);
        controller.on_drag_ended(10.0);
        assert_eq!(controller.timing(), Duration::ZERO);
    }

    #[test]
    fn trailing_sentinel_teleports_to_first_item() {
        let mut controller = controller(
            3,
            CarouselOptions::default()
                .wrap(true)
                .index(IndexBinding::new(2)),
        );
        assert_eq!(controller.active_index(), 3);

        controller.on_drag_ended(-100.0);
        assert_eq!(controller.active_index(), 4);
        assert_eq!(controller.external_index(), 0);
        assert!(controller.is_animated());

        let centered_id = controller.wrapped_ids().nth(4).copied();
        let centered_position = controller.slot_position(4);
        assert_eq!(controller.offset(), controller.max_offset());

        controller.advance(Duration::from_millis(50));
        assert_eq!(controller.active_index(), 4);

        assert_eq!(
            controller.advance(Duration::from_millis(50)),
            EventResult::Redraw
        );
        assert_eq!(controller.active_index(), 1);
        assert_eq!(controller.external_index(), 0);
        assert!(!controller.is_animated());
        assert!(controller.pending_correction().is_none());

        // Same item, same place on screen.
        assert_eq!(controller.wrapped_ids().nth(1).copied(), centered_id);
        assert_eq!(controller.slot_position(1), centered_position);
    }

    #[test]
    fn leading_sentinel_teleports_to_last_item() {
        let mut controller = controller(3, CarouselOptions::default().wrap(true));

        controller.on_drag_ended(100.0);
        assert_eq!(controller.active_index(), 0);
        assert_eq!(controller.offset(), controller.min_offset());

        controller.advance(CORRECTION);
        assert_eq!(controller.active_index(), 3);
        assert_eq!(controller.external_index(), 2);
        assert_synced(&controller);
    }

    #[test]
    fn auto_scroll_wraps_through_the_sentinel() {
        let mut controller = controller(
            3,
            CarouselOptions::default()
                .wrap(true)
                .auto_scroll(AutoScroll::Active(SECOND))
                .index(IndexBinding::new(2)),
        );

        controller.on_timer_tick();
        assert_eq!(controller.active_index(), 4);

        // Due again, but the correction hasn't fired yet.
        controller.on_timer_tick();
        assert_eq!(controller.active_index(), 4);

        controller.advance(CORRECTION);
        assert_eq!(controller.active_index(), 1);

        controller.on_timer_tick();
        assert_eq!(controller.active_index(), 2);
    }

    #[test]
    fn auto_scroll_from_the_trailing_sentinel_moves_forward() {
        let mut controller = controller(
            3,
            CarouselOptions::default()
                .wrap(true)
                .auto_scroll(AutoScroll::Active(SECOND))
                .index(IndexBinding::new(2)),
        );

        controller.on_timer_tick();
        assert_eq!(controller.active_index(), 4);
        assert_eq!(controller.external_index(), 0);

        // Without the correction, the next advance still goes to the second item.
        assert!(controller.cancel_pending_correction());
        controller.on_timer_tick();
        assert_eq!(controller.active_index(), 2);
        assert_eq!(controller.external_index(), 1);
        assert_synced(&controller);
    }

    #[test]
    fn boundary_correction_fires_once() {
        let mut controller = controller(
            3,
            CarouselOptions::default()
                .wrap(true)
                .index(IndexBinding::new(2)),
        );

        controller.on_drag_ended(-100.0);
        controller.advance(Duration::from_millis(40));

        // Another drag against the end inside the window doesn't reschedule.
        controller.on_drag_ended(-100.0);
        assert_eq!(controller.active_index(), 4);
        assert_eq!(
            controller.pending_correction().map(|c| c.remaining()),
            Some(Duration::from_millis(60))
        );

        controller.advance(Duration::from_millis(60));
        assert_eq!(controller.active_index(), 1);

        controller.advance(CORRECTION);
        assert_eq!(controller.active_index(), 1);
    }

    #[test]
    fn leaving_the_sentinel_cancels_the_correction() {
        let mut controller = controller(
            3,
            CarouselOptions::default()
                .wrap(true)
                .index(IndexBinding::new(2)),
        );

        controller.on_drag_ended(-100.0);
        controller.on_drag_ended(100.0);
        assert_eq!(controller.active_index(), 3);
        assert!(controller.pending_correction().is_none());

        controller.advance(CORRECTION);
        assert_eq!(controller.active_index(), 3);
    }

    #[test]
    fn cancelled_correction_never_fires() {
        let teleports = Rc::new(RefCell::new(0));
        let mut controller = controller(3, CarouselOptions::default().wrap(true));
        {
            let teleports = teleports.clone();
            controller.subscribe(move |event| {
                if let CarouselEvent::Teleported { .. } = event {
                    *teleports.borrow_mut() += 1;
                }
            });
        }

        controller.on_drag_ended(100.0);
        assert!(controller.cancel_pending_correction());
        controller.advance(CORRECTION);
        assert_eq!(*teleports.borrow(), 0);
        assert_eq!(controller.active_index(), 0);
    }

    #[test]
    fn scenario_three_items_without_wrap() {
        let binding = IndexBinding::new(0);
        let mut controller = controller(3, CarouselOptions::default().index(binding.clone()));
        let half = controller.item_width() / 2.0;

        controller.on_drag_ended(half);
        assert_eq!(controller.active_index(), 0);
        assert_eq!(binding.get(), 0);

        controller.on_drag_ended(-half);
        assert_eq!(controller.active_index(), 1);
        assert_eq!(controller.external_index(), 1);
        assert_eq!(binding.get(), 1);
    }

    #[test]
    fn single_item_disables_wrap_and_auto_scroll() {
        let controller = controller(
            1,
            CarouselOptions::default()
                .wrap(true)
                .auto_scroll(AutoScroll::Active(SECOND)),
        );

        assert!(!controller.is_wrap());
        assert_eq!(controller.auto_scroll(), AutoScroll::Inactive);
        assert_eq!(controller.wrapped_len(), 1);
        assert_eq!(controller.active_index(), 0);
    }

    #[test]
    fn zero_interval_uses_default() {
        let controller = controller(
            3,
            CarouselOptions::default().auto_scroll(AutoScroll::Active(Duration::ZERO)),
        );

        assert_eq!(controller.auto_scroll().interval(), Duration::from_secs(5));
    }

    #[test]
    fn out_of_bounds_index_is_rejected() {
        let result =
            CarouselController::new(cards(3), CarouselOptions::default().index(IndexBinding::new(3)));

        assert_eq!(
            result.err(),
            Some(CarouselError::IndexOutOfBounds { index: 3, len: 3 })
        );
    }

    #[test]
    fn empty_carousel_is_neutral() {
        let mut controller = controller(0, CarouselOptions::default().wrap(true));

        assert!(!controller.is_wrap());
        assert_eq!(controller.wrapped_len(), 0);
        assert_eq!(controller.wrapped_data().count(), 0);
        assert_eq!(controller.offset(), controller.default_padding());

        controller.on_drag_ended(-200.0);
        controller.on_timer_tick();
        assert_eq!(controller.active_index(), 0);
        assert_eq!(controller.set_external_index(4), EventResult::NoRedraw);
        assert_eq!(controller.binding().get(), 0);

        assert!(
            CarouselController::new(Vec::<Card>::new(), CarouselOptions::default().index(IndexBinding::new(1)))
                .is_err()
        );
    }

    #[test]
    fn external_push_behaves_like_a_drag_end() {
        let mut controller = controller(
            4,
            CarouselOptions::default().auto_scroll(AutoScroll::Active(Duration::from_secs(3))),
        );

        controller.on_timer_tick();
        controller.on_drag_changed(-30.0);

        controller.set_external_index(2);
        assert_eq!(controller.active_index(), 2);
        assert_eq!(controller.drag_offset(), 0.0);
        assert_eq!(controller.timing(), Duration::ZERO);
        assert!(controller.is_timer_active());
        assert!(controller.is_animated());

        controller.set_external_index(10);
        assert_eq!(controller.external_index(), 3);
        assert_eq!(controller.binding().get(), 3);
    }

    #[test]
    fn binding_writes_are_picked_up() {
        let binding = IndexBinding::new(0);
        let mut controller = controller(
            3,
            CarouselOptions::default()
                .wrap(true)
                .index(binding.clone()),
        );

        assert_eq!(controller.sync_binding(), EventResult::NoRedraw);

        binding.set(2);
        assert_eq!(controller.sync_binding(), EventResult::Redraw);
        assert_eq!(controller.active_index(), 3);
        assert_eq!(controller.external_index(), 2);
    }

    #[test]
    fn disabled_animations_are_never_animated() {
        let mut controller = controller(3, CarouselOptions::default().animated(false));

        controller.on_drag_changed(-100.0);
        assert!(!controller.is_animated());
        controller.on_drag_ended(-100.0);
        assert!(!controller.is_animated());
    }

    #[test]
    fn observers_see_changes() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut controller = controller(3, CarouselOptions::default().wrap(true));
        {
            let events = events.clone();
            controller.subscribe(move |event| events.borrow_mut().push(*event));
        }

        controller.on_drag_changed(-100.0);
        controller.on_drag_ended(100.0);
        controller.advance(CORRECTION);

        assert_eq!(
            *events.borrow(),
            vec![
                CarouselEvent::TimerSuspended,
                CarouselEvent::DragMoved { offset: -100.0 },
                CarouselEvent::TimerResumed,
                CarouselEvent::IndexChanged {
                    active: 0,
                    external: 2,
                    animated: true,
                },
                CarouselEvent::Teleported { from: 0, to: 3 },
            ]
        );
    }

    #[test]
    fn keyed_by_closure() {
        let controller = CarouselController::with_key(
            vec!["one", "three", "eleven"],
            |item: &&str| item.len(),
            CarouselOptions::default().index(IndexBinding::new(1)),
        )
        .unwrap();

        assert_eq!(controller.item_scale(&5), 1.0);
        assert_eq!(controller.item_scale(&3), 0.8);
        assert_eq!(controller.item_scale(&6), 0.8);
        assert_eq!(controller.items()[controller.external_index()], "three");
    }
}

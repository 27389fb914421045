//! Some code around handling events.

use std::ops::ControlFlow;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::{
    app::App,
    carousel::{AppLifecycle, EventResult},
};

/// Events sent to the main thread.
#[derive(Debug)]
pub enum CarouselDemoEvent {
    Resize,
    KeyInput(KeyEvent),
    MouseInput(MouseEvent),
    FocusChange(AppLifecycle),
    /// A tick of the auto-scroll timer.
    Tick,
    Terminate,
}

/// Handle a [`KeyEvent`]. Breaks if the demo should quit.
pub fn handle_key_event_or_break(event: KeyEvent, app: &mut App) -> ControlFlow<(), EventResult> {
    if event.modifiers.contains(KeyModifiers::CONTROL) {
        return if event.code == KeyCode::Char('c') {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(EventResult::NoRedraw)
        };
    }

    // Shift is let through, as some terminals need it for '+'.
    let result = match event.code {
        KeyCode::Char('q') => return ControlFlow::Break(()),
        KeyCode::Left | KeyCode::Char('h') => app.on_left_key(),
        KeyCode::Right | KeyCode::Char('l') => app.on_right_key(),
        KeyCode::Up | KeyCode::Char('k') => app.on_up_key(),
        KeyCode::Down | KeyCode::Char('j') => app.on_down_key(),
        KeyCode::Char('+') | KeyCode::Char('=') => app.increment_selected(),
        KeyCode::Char('-') => app.decrement_selected(),
        KeyCode::Char('w') => app.toggle_wrap(),
        KeyCode::Char('a') => app.toggle_auto_scroll(),
        KeyCode::Char('f') => app.toggle_foreground(),
        KeyCode::Char(digit @ '1'..='9') => {
            let index = digit as usize - '1' as usize;
            app.push_index(index)
        }
        _ => EventResult::NoRedraw,
    };

    ControlFlow::Continue(result)
}

/// Handle a [`MouseEvent`]. Left-dragging drags the carousel.
pub fn handle_mouse_event(event: MouseEvent, app: &mut App) -> EventResult {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => app.on_left_mouse_down(event.column, event.row),
        MouseEventKind::Drag(MouseButton::Left) => app.on_left_mouse_drag(event.column),
        MouseEventKind::Up(MouseButton::Left) => app.on_left_mouse_up(event.column),
        _ => EventResult::NoRedraw,
    }
}

//! A paged, horizontally scrolling carousel that scales its side items, can
//! wrap around, and can advance on a timer.
//!
//! The carousel itself lives in [`carousel`] and knows nothing about how it
//! is drawn. The rest of the crate is a pair of terminal demos built on top of
//! it with [`tui`] and [`crossterm`]; [`start`] runs one of them.

pub mod app;
pub mod canvas;
pub mod carousel;
pub mod constants;
pub mod event;
pub mod options;

pub(crate) mod utils {
    pub(crate) mod cancellation_token;
    pub(crate) mod general;
    pub(crate) mod logging;
}

use std::{
    io::{stdout, Stdout},
    ops::ControlFlow,
    panic::{self, PanicHookInfo},
    path::Path,
    sync::{
        mpsc::{self, Receiver, RecvTimeoutError, Sender},
        Arc,
    },
    thread::{self, JoinHandle},
    time::{Duration, Instant},
};

use anyhow::Context;
use crossterm::{
    event::{
        poll, read, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        Event, KeyEventKind, MouseEventKind,
    },
    execute,
    style::Print,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use tui::{backend::CrosstermBackend, Terminal};

pub use self::carousel::{
    AppLifecycle, AutoScroll, CarouselController, CarouselError, CarouselEvent, CarouselOptions,
    EventResult, Identifiable, IndexBinding,
};
use self::{
    app::App,
    canvas::Painter,
    carousel::AppLifecycle::{Background, Foreground},
    constants::*,
    event::{handle_key_event_or_break, handle_mouse_event, CarouselDemoEvent},
    options::{get_args, get_config_path, get_or_create_config, init_settings, Preset},
    utils::cancellation_token::CancellationToken,
};

/// Runs a demo until the user quits.
///
/// Everything that can go wrong with the arguments, the config file or the
/// carousel is reported before the terminal is touched.
pub fn start(preset: Preset) -> anyhow::Result<()> {
    let args = get_args(preset.bin_name());

    #[cfg(feature = "logging")]
    {
        if let Some(log_file) = args.log_file() {
            utils::logging::init_logger(log::LevelFilter::Debug, Path::new(log_file))
                .context("Unable to start the debug logger.")?;
        }
    }
    #[cfg(not(feature = "logging"))]
    {
        if args.log_file().is_some() {
            eprintln!("Logging is not available in this build; '--log-file' is ignored.");
        }
    }

    let config_path = get_config_path(args.config_location().map(Path::new));
    let config = get_or_create_config(config_path.as_deref())
        .context("Unable to properly parse or create the config file.")?;
    let settings = init_settings(&args, &config, preset)?;

    let mut app = App::new(settings).context("Unable to create the carousel.")?;
    let painter = Painter::init();

    let (sender, receiver) = mpsc::channel();
    let cancellation_token = Arc::new(CancellationToken::default());

    // Set termination hook
    {
        let sender = sender.clone();
        ctrlc::set_handler(move || {
            let _ = sender.send(CarouselDemoEvent::Terminate);
        })?;
    }

    // Set up tui and crossterm
    let mut stdout_val = stdout();
    execute!(
        stdout_val,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange
    )?;
    enable_raw_mode()?;

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout_val))?;
    terminal.clear()?;
    terminal.hide_cursor()?;

    // Set panic hook
    panic::set_hook(Box::new(panic_hook));

    let input_thread = create_input_thread(sender.clone(), cancellation_token.clone());
    let tick_thread = create_tick_thread(
        sender,
        cancellation_token.clone(),
        Duration::from_millis(TICK_RATE_IN_MILLISECONDS),
    );

    let result = run_event_loop(&mut terminal, &mut app, &painter, &receiver);

    cancellation_token.cancel();
    cleanup_terminal(&mut terminal)?;

    let _ = input_thread.join();
    let _ = tick_thread.join();

    result
}

/// The main loop. Input and ticks arrive over `receiver`; in between, the
/// carousel is advanced once per frame and redrawn if anything changed.
fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App, painter: &Painter,
    receiver: &Receiver<CarouselDemoEvent>,
) -> anyhow::Result<()> {
    let frame_rate = Duration::from_millis(FRAME_RATE_IN_MILLISECONDS);
    let mut last_frame = Instant::now();
    let mut needs_redraw = true;

    loop {
        match receiver.recv_timeout(frame_rate) {
            Ok(event) => {
                let result = match event {
                    CarouselDemoEvent::Terminate => break,
                    CarouselDemoEvent::Resize => EventResult::Redraw,
                    CarouselDemoEvent::KeyInput(event) => {
                        match handle_key_event_or_break(event, app) {
                            ControlFlow::Break(()) => break,
                            ControlFlow::Continue(result) => result,
                        }
                    }
                    CarouselDemoEvent::MouseInput(event) => handle_mouse_event(event, app),
                    CarouselDemoEvent::FocusChange(lifecycle) => app.on_lifecycle(lifecycle),
                    CarouselDemoEvent::Tick => app.on_tick(),
                };

                needs_redraw |= result.needs_redraw();
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }

        let now = Instant::now();
        let elapsed = now.duration_since(last_frame);
        if elapsed >= frame_rate {
            last_frame = now;
            needs_redraw |= app.on_frame(elapsed).needs_redraw();
        }

        if needs_redraw {
            painter.draw_data(terminal, app)?;
            needs_redraw = false;
        }
    }

    Ok(())
}

/// Reads terminal input until cancelled, forwarding it to the main loop.
fn create_input_thread(
    sender: Sender<CarouselDemoEvent>, cancellation_token: Arc<CancellationToken>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut drag_timer = Instant::now();

        loop {
            if cancellation_token.is_cancelled() {
                break;
            }

            let Ok(true) = poll(Duration::from_millis(20)) else {
                continue;
            };
            let Ok(event) = read() else {
                continue;
            };

            let event = match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    CarouselDemoEvent::KeyInput(key)
                }
                Event::Mouse(mouse) => {
                    // Only drags are throttled; a dropped press or release
                    // would lose the gesture.
                    if let MouseEventKind::Drag(_) = mouse.kind {
                        if drag_timer.elapsed().as_millis() < INPUT_DEBOUNCE_IN_MILLISECONDS {
                            continue;
                        }
                        drag_timer = Instant::now();
                    }

                    CarouselDemoEvent::MouseInput(mouse)
                }
                Event::Resize(_, _) => CarouselDemoEvent::Resize,
                Event::FocusGained => CarouselDemoEvent::FocusChange(Foreground),
                Event::FocusLost => CarouselDemoEvent::FocusChange(Background),
                _ => continue,
            };

            if sender.send(event).is_err() {
                break;
            }
        }
    })
}

/// Sends a [`CarouselDemoEvent::Tick`] every `period` until cancelled.
fn create_tick_thread(
    sender: Sender<CarouselDemoEvent>, cancellation_token: Arc<CancellationToken>,
    period: Duration,
) -> JoinHandle<()> {
    thread::spawn(move || loop {
        if cancellation_token.sleep_with_cancellation(period) {
            break;
        }

        if sender.send(CarouselDemoEvent::Tick).is_err() {
            break;
        }
    })
}

pub fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        DisableFocusChange,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    Ok(())
}

/// Restores the terminal before printing the panic, otherwise it would be
/// lost in the alternate screen.
///
/// Based on [spotify-tui's implementation](https://github.com/Rigellute/spotify-tui/blob/master/src/main.rs).
pub fn panic_hook(panic_info: &PanicHookInfo<'_>) {
    let mut stdout = stdout();

    let msg = match panic_info.payload().downcast_ref::<&'static str>() {
        Some(s) => *s,
        None => match panic_info.payload().downcast_ref::<String>() {
            Some(s) => &s[..],
            None => "Box<Any>",
        },
    };

    let backtrace = format!("{:?}", backtrace::Backtrace::new());
    let location = match panic_info.location() {
        Some(location) => location.to_string(),
        None => "an unknown location".to_string(),
    };

    let _ = disable_raw_mode();
    let _ = execute!(
        stdout,
        DisableMouseCapture,
        DisableFocusChange,
        LeaveAlternateScreen
    );

    // Print the stack trace; this has to happen after leaving the alternate screen.
    let _ = execute!(
        stdout,
        Print(format!(
            "thread '<unnamed>' panicked at '{msg}', {location}\n\r{backtrace}"
        )),
    );
}

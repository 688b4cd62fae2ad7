// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Looping Slider TUI.
//!
//! A terminal front end for an infinitely looping slide carousel.
//!
//! The carousel itself lives in [`slider`] and works on an in-memory page
//! ([`model`]) built from the configuration ([`stage`]). This binary hosts it
//! in a `ratatui` terminal UI.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** owns the page and the slider, applies every event to
//!   them and renders the UI.
//! * An **Input Thread** forwards keyboard and mouse events.
//! * A **Tick Thread** drives the slider's timers and the animation frame
//!   rate.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the threads is handled via a `std::sync::mpsc` channel, so all
//! slider state is only ever touched by the main thread, in event order.

mod config;
mod events;
mod model;
mod render;
mod slider;
mod stage;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use env_logger::{Builder, Target};
use log::{LevelFilter, debug, info};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    env,
    fs::File,
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::{Duration, Instant},
};

use crate::{
    config::AppConfig,
    events::{AppEvent, process_events},
    model::Page,
    render::{HitMap, Tween},
    slider::{
        Slider,
        events::{SlideChange, SliderEvent},
        swipe::Viewport,
    },
    stage::{SLIDER_ID, build_stage},
    theme::Theme,
};

const LOG_FILE: &str = "loopslide.log";

// Minimum frame rate of the UI, also the resolution of the slider's timers.
const FRAME_PERIOD: Duration = Duration::from_millis(33);

/// Application state.
struct App {
    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub page: Page,
    pub slider: Slider,

    pub tween: Tween,
    pub hits: HitMap,
    pub status: Option<String>,

    started: Instant,
}

impl App {
    /// Create a new instance of application state for a terminal of `columns`
    /// by `rows` cells.
    pub fn new(config: &AppConfig, columns: u16, rows: u16) -> Result<Self> {
        let (event_tx, event_rx) = mpsc::channel();
        let started = Instant::now();

        let width = f64::from(columns);
        let mut page = build_stage(config, width);
        let viewport = Viewport {
            width,
            height: f64::from(rows),
        };
        let mut slider = Slider::init(
            &mut page,
            SLIDER_ID,
            config.autoplay,
            config.slider.clone(),
            viewport,
            started.elapsed(),
        )
        .context("Failed to initialise slider")?;
        slider.subscribe(SliderEvent::Translate, |change: &SlideChange, _: &mut Page| {
            debug!(
                "Moved to slide {} of {}, animated: {}",
                change.index, change.padded_count, change.animated
            );
            Ok(())
        });

        let tween = Tween::new(slider.current_offset(&page));

        Ok(Self {
            theme: Theme::default(),
            event_tx,
            event_rx,
            page,
            slider,
            tween,
            hits: HitMap::default(),
            status: None,
            started,
        })
    }

    /// Time since the application started, the clock the slider runs on.
    pub fn now(&self) -> Duration {
        self.started.elapsed()
    }
}

/// The entry point of the application.
///
/// Sets up logging and the application state, manages the terminal lifecycle,
/// and returns an error if any part of the execution fails.
fn main() -> Result<()> {
    init_logger()?;

    let config = config::load_config();
    let (columns, rows) = terminal::size().context("Failed to read terminal size")?;

    let mut app = App::new(&config, columns, rows).context("Failed to initalise application")?;
    info!(
        "Started slider #{} with {} slides",
        app.slider.id(),
        app.slider.real_count()
    );

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Sends log output to a file in the temp directory, the terminal itself being
/// taken over by the UI.
///
/// `RUST_LOG` selects the levels when set, otherwise only warnings are kept.
fn init_logger() -> Result<()> {
    let path = env::temp_dir().join(LOG_FILE);
    let file = File::create(&path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    let mut builder = Builder::new();
    builder.target(Target::Pipe(Box::new(file)));
    if env::var("RUST_LOG").is_ok() {
        builder.parse_default_env();
    } else {
        builder.filter_level(LevelFilter::Warn);
    }
    builder.try_init().context("Failed to initialise logger")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer and captures the
///   mouse.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    util::term::set_background(app.theme.backdrop);

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`]. It is "best-effort"
/// and does not return a result, as it is typically called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen).ok();
    util::term::reset_background();
    terminal.show_cursor().ok();
}

/// Starts the input and tick threads and enters the main event loop.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Spawn a thread to translate raw terminal events to application events.
    let tx_input = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let event = match event::read() {
                Ok(Event::Key(key)) => AppEvent::Key(key),
                Ok(Event::Mouse(mouse)) => AppEvent::Mouse(mouse),
                Ok(_) => continue,
                Err(e) => {
                    tx_input.send(AppEvent::Error(format!("Failed to read input: {e}"))).ok();
                    break;
                }
            };
            if tx_input.send(event).is_err() {
                break;
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(FRAME_PERIOD);
        }
    });

    terminal.draw(|f| render::draw(f, app))?;

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}

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

//! Handlers mapping terminal input onto slider operations.
//!
//! Keys press the on-screen buttons and markers, mouse presses click whatever
//! was drawn under the pointer, and presses inside the viewport start a drag
//! that is fed to the slider as a touch gesture. Slider errors only abort the
//! interaction that caused them and are shown on the status line.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use log::{error, warn};

use crate::{
    App,
    events::AppEvent,
    slider::{error::SliderError, swipe::TouchPoint},
};

pub(super) fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }
    let now = app.now();

    let outcome = match key.code {
        KeyCode::Char('q') => {
            app.event_tx.send(AppEvent::ExitApplication)?;
            return Ok(());
        }

        KeyCode::Left | KeyCode::Char('h') => match app.slider.previous_button() {
            Some(button) => app.slider.handle_click(&mut app.page, button, now).map(drop),
            None => app.slider.previous(&mut app.page, now),
        },
        KeyCode::Right | KeyCode::Char('l') => match app.slider.next_button() {
            Some(button) => app.slider.handle_click(&mut app.page, button, now).map(drop),
            None => app.slider.next(&mut app.page, now),
        },

        KeyCode::Char(c @ '1'..='9') => {
            let ordinal = c as usize - '1' as usize;
            let marker = app
                .slider
                .indicators()
                .and_then(|i| i.markers().get(ordinal).copied());
            match marker {
                Some(marker) => app.slider.handle_click(&mut app.page, marker, now).map(drop),
                None => app.slider.go_to(&mut app.page, ordinal, now),
            }
        }

        KeyCode::Esc => app.slider.touch_cancel(&mut app.page, now),

        _ => return Ok(()),
    };

    report(app, outcome);
    Ok(())
}

pub(super) fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let now = app.now();
    let point = TouchPoint::new(f64::from(mouse.column), f64::from(mouse.row));

    let outcome = match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            match app.hits.target_at(mouse.column, mouse.row) {
                Some(target) => app.slider.handle_click(&mut app.page, target, now).map(drop),
                None if app.hits.in_viewport(mouse.column, mouse.row) => {
                    app.slider.touch_start(&mut app.page, point, now)
                }
                None => return,
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            app.slider.touch_move(&mut app.page, point, now).map(drop)
        }
        MouseEventKind::Up(MouseButton::Left) => app.slider.touch_end(&mut app.page, point, now),
        _ => return,
    };

    report(app, outcome);
}

pub(super) fn handle_tick(app: &mut App) {
    let now = app.now();
    if let Err(e) = app.slider.tick(&mut app.page, now) {
        fail(app, e);
    }
}

pub(super) fn handle_error(app: &mut App, message: String) {
    error!("{message}");
    app.status = Some(message);
}

// A successful interaction clears the previous error.
fn report(app: &mut App, outcome: Result<(), SliderError>) {
    match outcome {
        Ok(()) => app.status = None,
        Err(e) => fail(app, e),
    }
}

fn fail(app: &mut App, e: SliderError) {
    warn!("Slider interaction failed: {e}");
    app.status = Some(e.to_string());
}

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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. The slider itself only declares
//! styles on the page; rendering reads them back, eases the container offset
//! with a [`Tween`] and records where each clickable element was drawn so
//! mouse input can be mapped back onto the page.

mod controls;
mod icons;
mod slides;
pub(crate) mod transition;

pub(crate) use transition::Tween;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
};

use crate::{App, model::NodeId, util::format::parse_transition};

/// Screen areas of the clickable page elements drawn in the last frame.
#[derive(Debug, Default)]
pub(crate) struct HitMap {
    viewport: Option<Rect>,
    targets: Vec<(Rect, NodeId)>,
}

impl HitMap {
    pub(crate) fn clear(&mut self) {
        self.viewport = None;
        self.targets.clear();
    }

    /// Sets the area in which presses start a drag.
    pub(crate) fn set_viewport(&mut self, area: Rect) {
        self.viewport = Some(area);
    }

    pub(crate) fn add(&mut self, area: Rect, target: NodeId) {
        self.targets.push((area, target));
    }

    /// The element drawn at a cell. Later additions are on top.
    pub(crate) fn target_at(&self, column: u16, row: u16) -> Option<NodeId> {
        let position = Position::new(column, row);
        self.targets
            .iter()
            .rev()
            .find(|(area, _)| area.contains(position))
            .map(|&(_, target)| target)
    }

    pub(crate) fn in_viewport(&self, column: u16, row: u16) -> bool {
        self.viewport
            .is_some_and(|area| area.contains(Position::new(column, row)))
    }
}

/// Renders the user interface to the terminal frame.
///
/// The screen is split into the slide viewport, the position markers, the
/// optional logo row and a status line.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();
    let logo_rows = if app.slider.logos().is_some() { 1 } else { 0 };

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(logo_rows),
            Constraint::Length(1),
        ])
        .split(area);

    let now = app.now();
    let target = app.slider.current_offset(&app.page);
    let transition = app
        .page
        .style(app.slider.wrapper(), "transition")
        .and_then(parse_transition);
    app.tween.retarget(target, transition, now);
    let offset = app.tween.sample(now);

    app.hits.clear();
    slides::draw_slides(f, outer[0], app, offset);
    controls::draw_indicators(f, outer[1], app);
    if logo_rows > 0 {
        controls::draw_logos(f, outer[2], app);
    }
    controls::draw_status(f, outer[3], app);
}

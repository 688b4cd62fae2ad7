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

//! Colours of the slider UI.
//!
//! A dark slate backdrop keeps the slide text readable, with a single teal
//! highlight for whatever is current: the position, the active marker and the
//! active logo. [`Theme::to_hex`] renders a colour for the terminal
//! background escape sequences.

use ratatui::style::Color;

#[derive(Clone, Copy, Debug)]
pub(crate) struct Theme {
    pub(crate) backdrop: Color,
    pub(crate) highlight: Color,
    pub(crate) frame_colour: Color,
    pub(crate) status_bg: Color,

    pub(crate) title_fg: Color,
    pub(crate) body_fg: Color,
    pub(crate) button_fg: Color,
    pub(crate) marker_fg: Color,
    pub(crate) logo_fg: Color,
    pub(crate) error_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::slate()
    }
}

impl Theme {
    pub(crate) const fn slate() -> Self {
        Self {
            backdrop: Color::Rgb(18, 28, 38),
            highlight: Color::Rgb(94, 234, 212),
            frame_colour: Color::Rgb(71, 85, 105),
            status_bg: Color::Rgb(30, 41, 59),

            title_fg: Color::Rgb(248, 250, 252),
            body_fg: Color::Rgb(203, 213, 225),
            button_fg: Color::Rgb(251, 146, 60),
            marker_fg: Color::Rgb(100, 116, 139),
            logo_fg: Color::Rgb(148, 163, 184),
            error_fg: Color::Rgb(248, 113, 113),
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string.
    ///
    /// This is primarily used to set the terminal emulator's background color
    /// via escape sequences. Returns `None` for anything but an `Rgb` colour.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}

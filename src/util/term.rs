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

//! Terminal emulator styling.
//!
//! Most modern terminals (XTerm, iTerm2, Alacritty, Kitty) accept OSC
//! (Operating System Command) sequences to change their background colour.
//! Terminals that do not simply ignore them.

use std::io::{self, Write};

use ratatui::style::Color;

use crate::theme::Theme;

/// Paints the whole terminal window, margins included, with `colour`.
/// Non-RGB colours are left to the terminal.
pub(crate) fn set_background(colour: Color) {
    if let Some(hex) = Theme::to_hex(colour) {
        osc(&format!("11;{hex}"));
    }
}

/// Restores the user's own background colour.
pub(crate) fn reset_background() {
    osc("111");
}

// Failures are ignored, the colour is cosmetic.
fn osc(command: &str) {
    let mut stdout = io::stdout();
    write!(stdout, "\x1b]{command}\x07").ok();
    stdout.flush().ok();
}

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

//! Unicode symbols for the TUI.
//!
//! Selected for compatibility with most modern terminal emulators and fonts.

// Text-style variants (using Variation Selector-15 [\u{FE0E}]), this forces
// terminals to render the icons as monochrome text rather than colorful
// emojis, ensuring they respect the TUI's color styling.
pub(crate) const ICON_PREV: &str = "\u{25C0}\u{FE0E}";
pub(crate) const ICON_NEXT: &str = "\u{25B6}\u{FE0E}";

// Position markers
pub(crate) const MARKER: &str = "\u{25CB}";
pub(crate) const MARKER_ACTIVE: &str = "\u{25CF}";

// Status line
pub(crate) const ICON_AUTOPLAY: &str = "\u{21BB}";
pub(crate) const ICON_WARNING: &str = "\u{26A0}\u{FE0E}";

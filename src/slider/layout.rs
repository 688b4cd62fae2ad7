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

//! Slide container sizing.

use crate::{
    model::{NodeId, Page},
    util::format::format_percent,
};

/// Sizes the container to `padded_count` viewports and every child to one
/// viewport, laid out side by side.
pub(crate) fn apply(page: &mut Page, wrapper: NodeId, padded_count: usize) {
    if padded_count == 0 {
        return;
    }

    page.set_style(wrapper, "width", &format_percent(padded_count as f64 * 100.0));

    let slide_width = format_percent(100.0 / padded_count as f64);
    for child in page.element_children(wrapper) {
        page.set_style(child, "width", &slide_width);
        page.set_style(child, "display", "inline-block");
    }
}

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

//! Media logo strip.
//!
//! Slides of a media section are paired with a row of logos. Slide and logo
//! ids share a numeric suffix (`s3` and `m3`), which is how the active slide
//! is mapped to its logo and how a clicked logo is mapped back to a slide.
//! Clones carry the id of the slide they copy, so a clone resolves to the
//! same logo as its real counterpart.

use log::warn;

use crate::{
    model::{NodeId, Page},
    slider::{error::SliderError, indicator::ACTIVE_CLASS},
    util::format::format_percent,
};

// With at least this many logos only a window around the active one is shown.
const WINDOW: usize = 5;

#[derive(Debug, Clone)]
pub(crate) struct LogoStrip {
    selector: String,
    active_width: f64,
}

impl LogoStrip {
    pub(crate) fn new(selector: &str, active_width: f64) -> Self {
        Self {
            selector: selector.to_string(),
            active_width,
        }
    }

    pub(crate) fn logos(&self, page: &Page) -> Result<Vec<NodeId>, SliderError> {
        Ok(page.query_selector_all(None, &self.selector)?)
    }

    /// Resolves a clicked element to the logo containing it.
    pub(crate) fn logo_at(
        &self,
        page: &Page,
        target: NodeId,
    ) -> Result<Option<NodeId>, SliderError> {
        Ok(self
            .logos(page)?
            .into_iter()
            .find(|&logo| page.is_within(target, logo)))
    }

    /// Marks the logo matching the slide at `slide` active and lays out the
    /// strip around it. A slide without a logo leaves the strip as it is.
    pub(crate) fn follow_slide(&self, page: &mut Page, slide: NodeId) -> Result<(), SliderError> {
        let logos = self.logos(page)?;
        if logos.is_empty() {
            return Ok(());
        }
        let active = id_suffix(page, slide)
            .ok()
            .and_then(|position| position.checked_sub(1))
            .filter(|&i| i < logos.len());

        match active {
            Some(active) => self.show_active(page, &logos, active),
            None => warn!(
                "No logo matches slide {}",
                page.attribute(slide, "id").unwrap_or_default()
            ),
        }
        Ok(())
    }

    fn show_active(&self, page: &mut Page, logos: &[NodeId], active: usize) {
        if self.active_width == 0.0 {
            warn!("The width of the active logo is 0");
        }

        for &logo in logos {
            page.remove_class(logo, ACTIVE_CLASS);
        }
        page.add_class(logos[active], ACTIVE_CLASS);

        let len = logos.len();
        if len < WINDOW {
            let width = format_percent(100.0 / len as f64);
            for &logo in logos {
                page.set_style(logo, "width", &width);
            }
            return;
        }

        for &logo in logos {
            page.set_style(logo, "display", "none");
            page.set_style(logo, "order", "");
        }

        let side = format_percent((100.0 - self.active_width) / (WINDOW - 1) as f64);
        let half = WINDOW / 2;
        for (order, offset) in (0..WINDOW).enumerate() {
            let logo = logos[(active + len + offset - half) % len];
            page.set_style(logo, "display", "flex");
            page.set_style(logo, "width", &side);
            page.set_style(logo, "order", &order.to_string());
        }
        page.set_style(logos[active], "width", &format_percent(self.active_width));
    }
}

/// Reads the numeric part of an element's id, e.g. `3` for `s3`.
pub(crate) fn id_suffix(page: &Page, element: NodeId) -> Result<usize, SliderError> {
    page.attribute(element, "id")
        .and_then(|id| id.get(1..))
        .and_then(|digits| digits.parse().ok())
        .ok_or_else(|| unresolved(page, element))
}

fn unresolved(page: &Page, element: NodeId) -> SliderError {
    let name = page
        .attribute(element, "id")
        .or_else(|| page.tag(element))
        .unwrap_or_default();
    SliderError::UnresolvedTarget(name.to_string())
}

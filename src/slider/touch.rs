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

//! Touch input.
//!
//! These operations are no-ops unless swiping is enabled on the slider.

use std::time::Duration;

use log::trace;

use crate::{
    model::Page,
    slider::{
        Slider,
        error::SliderError,
        navigation::Direction,
        swipe::{SwipeDecision, SwipeMove, TouchPoint},
    },
};

impl Slider {
    pub(crate) fn touch_start(
        &mut self,
        page: &mut Page,
        point: TouchPoint,
        now: Duration,
    ) -> Result<(), SliderError> {
        if !self.is_functional() || self.swipe.is_none() {
            return Ok(());
        }
        if let Err(err) = self.begin_interaction(page) {
            self.schedule_restart(now);
            return Err(err);
        }

        let start_offset = self.current_offset(page);
        if let Some(swipe) = self.swipe.as_mut() {
            swipe.start(point, now, start_offset);
        }
        Ok(())
    }

    /// Follows the finger. Returns true while the gesture is a horizontal
    /// drag, in which case the host should suppress its own scrolling.
    pub(crate) fn touch_move(
        &mut self,
        page: &mut Page,
        point: TouchPoint,
        now: Duration,
    ) -> Result<bool, SliderError> {
        let Some(swipe) = self.swipe.as_mut() else {
            return Ok(false);
        };

        match swipe.track(point) {
            SwipeMove::Ignored => Ok(false),
            SwipeMove::Aborted { start_offset } => {
                trace!("Slider #{} swipe turned into a scroll", self.id);
                self.show_offset(page, start_offset);
                self.schedule_restart(now);
                Ok(false)
            }
            SwipeMove::Drag { offset } => {
                self.show_offset(page, offset);
                Ok(true)
            }
        }
    }

    pub(crate) fn touch_end(
        &mut self,
        page: &mut Page,
        point: TouchPoint,
        now: Duration,
    ) -> Result<(), SliderError> {
        let Some(release) = self.swipe.as_mut().and_then(|s| s.release(point, now)) else {
            return Ok(());
        };
        trace!("Slider #{} swipe released: {:?}", self.id, release.decision);

        let moved = self
            .begin_interaction(page)
            .and_then(|()| match release.decision {
                SwipeDecision::Revert => {
                    self.show_offset(page, release.start_offset);
                    Ok(())
                }
                SwipeDecision::CommitNext => self.advance(page, Direction::Next, true, now),
                SwipeDecision::CommitPrevious => self.advance(page, Direction::Previous, true, now),
            });
        self.schedule_restart(now);
        moved
    }

    /// Abandons the gesture and restores the offset it started from.
    pub(crate) fn touch_cancel(
        &mut self,
        page: &mut Page,
        now: Duration,
    ) -> Result<(), SliderError> {
        let Some(start_offset) = self.swipe.as_mut().and_then(|s| s.cancel()) else {
            return Ok(());
        };

        let settled = self.begin_interaction(page);
        self.show_offset(page, start_offset);
        self.schedule_restart(now);
        settled
    }
}

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

//! Time-based tween between declared container offsets.
//!
//! The slider only declares where the container should be and how long the
//! move should take. The renderer eases from whatever offset is on screen
//! towards the latest declaration.

use std::time::Duration;

#[derive(Debug, Clone)]
pub(crate) struct Tween {
    from: f64,
    to: f64,
    started_at: Duration,
    duration: Duration,
}

impl Tween {
    pub(crate) fn new(offset: f64) -> Self {
        Self {
            from: offset,
            to: offset,
            started_at: Duration::ZERO,
            duration: Duration::ZERO,
        }
    }

    /// Starts easing towards `target` from the offset shown at `now`. Without
    /// a duration the move is immediate. Re-declaring the current target has
    /// no effect.
    pub(crate) fn retarget(&mut self, target: f64, duration: Option<Duration>, now: Duration) {
        if target == self.to {
            return;
        }
        self.from = self.sample(now);
        self.to = target;
        self.started_at = now;
        self.duration = duration.unwrap_or(Duration::ZERO);
    }

    /// Offset to display at `now`.
    pub(crate) fn sample(&self, now: Duration) -> f64 {
        let elapsed = now.saturating_sub(self.started_at);
        if elapsed >= self.duration {
            return self.to;
        }
        let t = (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * ease_out(t)
    }

    #[cfg(test)]
    pub(crate) fn is_settled(&self, now: Duration) -> bool {
        now.saturating_sub(self.started_at) >= self.duration
    }
}

// Quadratic.
fn ease_out(t: f64) -> f64 {
    1.0 - (1.0 - t) * (1.0 - t)
}

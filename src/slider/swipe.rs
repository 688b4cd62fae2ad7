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

//! Touch gesture recognition.
//!
//! The [`SwipeRecognizer`] follows one finger at a time. While tracking it only
//! reports a provisional drag offset for the host to display; the decision to
//! navigate is taken on release by [`classify`], which is a pure function of
//! the gesture's deltas, its duration and the configured thresholds.
//!
//! A release commits unless the finger drifted too far vertically (the user
//! was scrolling) or the gesture was both short and slow. Short but fast
//! flicks do commit.

use std::time::Duration;

/// Gestures lasting longer than this need to cover the commit distance.
pub(crate) const SLOW_GESTURE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct TouchPoint {
    pub(crate) x: f64,
    pub(crate) y: f64,
}

impl TouchPoint {
    pub(crate) fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Size of the host's visible area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Viewport {
    pub(crate) width: f64,
    pub(crate) height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SwipeThresholds {
    /// Least horizontal distance of a slow gesture that still commits.
    pub(crate) commit_distance: f64,
    /// Largest vertical drift before the gesture counts as a scroll.
    pub(crate) vertical_limit: f64,
}

impl SwipeThresholds {
    pub(crate) fn new(x_sensitivity: f64, y_sensitivity: f64, viewport: Viewport) -> Self {
        Self {
            commit_distance: x_sensitivity * viewport.width,
            vertical_limit: y_sensitivity * viewport.height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SwipeDecision {
    CommitNext,
    CommitPrevious,
    Revert,
}

/// Decides the outcome of a released gesture.
pub(crate) fn classify(
    dx: f64,
    dy: f64,
    elapsed: Duration,
    thresholds: &SwipeThresholds,
) -> SwipeDecision {
    if dy.abs() > thresholds.vertical_limit {
        SwipeDecision::Revert
    } else if dx.abs() < thresholds.commit_distance && elapsed > SLOW_GESTURE {
        SwipeDecision::Revert
    } else if dx > 0.0 {
        SwipeDecision::CommitPrevious
    } else {
        SwipeDecision::CommitNext
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct SwipeSession {
    start: TouchPoint,
    started_at: Duration,
    start_offset: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum SwipeState {
    Idle,
    Tracking(SwipeSession),
}

/// What the host should do in response to a finger move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum SwipeMove {
    /// No gesture is being tracked.
    Ignored,
    /// The gesture turned into a vertical scroll and was dropped; restore the
    /// offset captured at its start.
    Aborted { start_offset: f64 },
    /// Show the slides at this provisional offset.
    Drag { offset: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SwipeRelease {
    pub(crate) decision: SwipeDecision,
    pub(crate) start_offset: f64,
}

#[derive(Debug, Clone)]
pub(crate) struct SwipeRecognizer {
    thresholds: SwipeThresholds,
    slide_extent: f64,
    state: SwipeState,
}

impl SwipeRecognizer {
    pub(crate) fn new(thresholds: SwipeThresholds, slide_extent: f64) -> Self {
        Self {
            thresholds,
            slide_extent,
            state: SwipeState::Idle,
        }
    }

    #[cfg(test)]
    pub(crate) fn is_swiping(&self) -> bool {
        matches!(self.state, SwipeState::Tracking(_))
    }

    /// Begins tracking a gesture. A gesture already in progress is replaced.
    pub(crate) fn start(&mut self, point: TouchPoint, now: Duration, start_offset: f64) {
        self.state = SwipeState::Tracking(SwipeSession {
            start: point,
            started_at: now,
            start_offset,
        });
    }

    pub(crate) fn track(&mut self, point: TouchPoint) -> SwipeMove {
        let SwipeState::Tracking(session) = self.state else {
            return SwipeMove::Ignored;
        };

        let dx = point.x - session.start.x;
        let dy = point.y - session.start.y;
        if dy.abs() > self.thresholds.vertical_limit {
            self.state = SwipeState::Idle;
            return SwipeMove::Aborted {
                start_offset: session.start_offset,
            };
        }

        // Dragging past a whole slide has no further visual effect.
        let offset = if dx.abs() > self.slide_extent {
            session.start_offset
        } else {
            session.start_offset + dx
        };
        SwipeMove::Drag { offset }
    }

    /// Ends the gesture and classifies it. Returns `None` if no gesture was
    /// being tracked.
    pub(crate) fn release(&mut self, point: TouchPoint, now: Duration) -> Option<SwipeRelease> {
        let SwipeState::Tracking(session) = self.state else {
            return None;
        };
        self.state = SwipeState::Idle;

        let elapsed = now.saturating_sub(session.started_at);
        let decision = classify(
            point.x - session.start.x,
            point.y - session.start.y,
            elapsed,
            &self.thresholds,
        );
        Some(SwipeRelease {
            decision,
            start_offset: session.start_offset,
        })
    }

    /// Drops the gesture, returning the offset to restore.
    pub(crate) fn cancel(&mut self) -> Option<f64> {
        let SwipeState::Tracking(session) = self.state else {
            return None;
        };
        self.state = SwipeState::Idle;
        Some(session.start_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn thresholds() -> SwipeThresholds {
        SwipeThresholds::new(
            0.5,
            0.1,
            Viewport {
                width: 400.0,
                height: 800.0,
            },
        )
    }

    #[test]
    fn thresholds_scale_with_viewport() {
        let t = thresholds();
        assert_eq!(t.commit_distance, 200.0);
        assert_eq!(t.vertical_limit, 80.0);
    }

    #[test]
    fn short_fast_swipe_commits() {
        // |dx| < 200 but 250ms is not slower than the 300ms limit.
        assert_eq!(classify(-150.0, 0.0, ms(250), &thresholds()), SwipeDecision::CommitNext);
        assert_eq!(classify(150.0, 0.0, ms(250), &thresholds()), SwipeDecision::CommitPrevious);
    }

    #[test]
    fn slow_threshold_is_exclusive() {
        assert_eq!(classify(-150.0, 0.0, ms(300), &thresholds()), SwipeDecision::CommitNext);
        assert_eq!(classify(-150.0, 0.0, ms(301), &thresholds()), SwipeDecision::Revert);
    }

    #[test]
    fn long_slow_swipe_commits() {
        assert_eq!(classify(-200.0, 0.0, ms(900), &thresholds()), SwipeDecision::CommitNext);
        assert_eq!(classify(250.0, 10.0, ms(900), &thresholds()), SwipeDecision::CommitPrevious);
    }

    #[test]
    fn vertical_drift_reverts() {
        assert_eq!(classify(-300.0, 81.0, ms(100), &thresholds()), SwipeDecision::Revert);
        assert_eq!(classify(-300.0, -80.0, ms(100), &thresholds()), SwipeDecision::CommitNext);
    }

    #[test]
    fn motionless_tap_commits_next() {
        assert_eq!(classify(0.0, 0.0, ms(50), &thresholds()), SwipeDecision::CommitNext);
    }

    #[test]
    fn classification_is_deterministic() {
        let t = thresholds();
        let first = classify(-120.0, 12.0, ms(320), &t);
        for _ in 0..10 {
            assert_eq!(classify(-120.0, 12.0, ms(320), &t), first);
        }
    }

    #[test]
    fn drag_follows_finger_until_one_slide() {
        let mut swipe = SwipeRecognizer::new(thresholds(), 400.0);
        swipe.start(TouchPoint::new(300.0, 100.0), ms(0), -400.0);

        assert!(swipe.is_swiping());
        assert_eq!(
            swipe.track(TouchPoint::new(200.0, 110.0)),
            SwipeMove::Drag { offset: -500.0 }
        );
        assert_eq!(
            swipe.track(TouchPoint::new(-150.0, 110.0)),
            SwipeMove::Drag { offset: -400.0 }
        );
    }

    #[test]
    fn vertical_move_aborts_tracking() {
        let mut swipe = SwipeRecognizer::new(thresholds(), 400.0);
        swipe.start(TouchPoint::new(300.0, 100.0), ms(0), -400.0);

        assert_eq!(
            swipe.track(TouchPoint::new(290.0, 300.0)),
            SwipeMove::Aborted { start_offset: -400.0 }
        );
        assert!(!swipe.is_swiping());
        assert_eq!(swipe.track(TouchPoint::new(0.0, 0.0)), SwipeMove::Ignored);
        assert_eq!(swipe.release(TouchPoint::new(0.0, 0.0), ms(100)), None);
    }

    #[test]
    fn release_and_cancel_end_the_session() {
        let mut swipe = SwipeRecognizer::new(thresholds(), 400.0);
        swipe.start(TouchPoint::new(300.0, 100.0), ms(1000), -400.0);

        let release = swipe.release(TouchPoint::new(50.0, 100.0), ms(1200));
        assert_eq!(
            release,
            Some(SwipeRelease {
                decision: SwipeDecision::CommitNext,
                start_offset: -400.0,
            })
        );
        assert_eq!(swipe.cancel(), None);

        swipe.start(TouchPoint::new(300.0, 100.0), ms(2000), -800.0);
        assert_eq!(swipe.cancel(), Some(-800.0));
        assert!(!swipe.is_swiping());
    }
}

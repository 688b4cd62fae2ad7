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

//! Scheduled work owned by a slider.
//!
//! The [`TimerManager`] is a small registry of pending tasks measured against
//! a caller-supplied clock. It holds at most one recurring timer (the autoplay
//! tick) and any number of one-shot timers. Nothing fires on its own: the
//! owner polls [`TimerManager::pop_due`] whenever its clock advances and runs
//! the returned tasks one at a time, so a task may freely cancel whatever is
//! still pending.

use std::time::Duration;

// Recurring timers never fire more often than this.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// The kinds of work a slider schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TimerTask {
    /// Advance to the next slide.
    AutoplayTick,
    /// Resume autoplay after a manual interaction.
    RestartAutoplay,
    /// Jump without animation from a clone to its real slide.
    SnapCorrection,
}

// Scheduling order, used to break ties between timers due at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Seq(u64);

#[derive(Debug, Clone)]
struct Recurring {
    seq: Seq,
    task: TimerTask,
    interval: Duration,
    next_due: Duration,
}

#[derive(Debug, Clone)]
struct OneShot {
    seq: Seq,
    task: TimerTask,
    due: Duration,
}

#[derive(Debug, Default)]
pub(crate) struct TimerManager {
    next_seq: u64,
    recurring: Option<Recurring>,
    pending: Vec<OneShot>,
}

impl TimerManager {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn allocate(&mut self) -> Seq {
        self.next_seq += 1;
        Seq(self.next_seq)
    }

    /// Schedules `task` every `interval`, replacing any existing recurring
    /// timer.
    pub(crate) fn schedule_recurring(
        &mut self,
        task: TimerTask,
        interval: Duration,
        now: Duration,
    ) {
        let seq = self.allocate();
        let interval = interval.max(MIN_INTERVAL);
        self.recurring = Some(Recurring {
            seq,
            task,
            interval,
            next_due: now + interval,
        });
    }

    /// Schedules `task` once, `delay` from `now`.
    pub(crate) fn schedule_once(
        &mut self,
        task: TimerTask,
        delay: Duration,
        now: Duration,
    ) {
        let seq = self.allocate();
        self.pending.push(OneShot {
            seq,
            task,
            due: now + delay,
        });
    }

    /// Cancels the recurring timer and every pending one-shot timer.
    pub(crate) fn clear_all(&mut self) {
        self.recurring = None;
        self.clear_one_shots();
    }

    /// Cancels pending one-shot timers, leaving the recurring timer running.
    pub(crate) fn clear_one_shots(&mut self) {
        self.pending.clear();
    }

    #[cfg(test)]
    pub(crate) fn pending_count(&self) -> usize {
        self.pending.len() + usize::from(self.recurring.is_some())
    }

    #[cfg(test)]
    pub(crate) fn has_recurring(&self) -> bool {
        self.recurring.is_some()
    }

    #[cfg(test)]
    pub(crate) fn is_scheduled(&self, task: TimerTask) -> bool {
        self.recurring.as_ref().is_some_and(|r| r.task == task)
            || self.pending.iter().any(|t| t.task == task)
    }

    /// The instant at which the earliest timer is due, if any.
    #[cfg(test)]
    pub(crate) fn next_due(&self) -> Option<Duration> {
        let once = self.pending.iter().map(|t| t.due);
        once.chain(self.recurring.as_ref().map(|r| r.next_due)).min()
    }

    /// Removes and returns the earliest task due at or before `now`.
    ///
    /// Timers due at the same instant are returned in the order they were
    /// scheduled. A recurring timer is re-armed rather than removed.
    pub(crate) fn pop_due(&mut self, now: Duration) -> Option<TimerTask> {
        let once = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= now)
            .min_by_key(|(_, t)| (t.due, t.seq))
            .map(|(i, t)| (i, t.due, t.seq));

        let recurring = self
            .recurring
            .as_ref()
            .filter(|r| r.next_due <= now)
            .map(|r| (r.next_due, r.seq));

        match (once, recurring) {
            (Some((i, due, seq)), Some(r)) if (due, seq) < r => {
                Some(self.pending.remove(i).task)
            }
            (_, Some(_)) => self.rearm(now),
            (Some((i, _, _)), None) => Some(self.pending.remove(i).task),
            (None, None) => None,
        }
    }

    fn rearm(&mut self, now: Duration) -> Option<TimerTask> {
        let recurring = self.recurring.as_mut()?;
        recurring.next_due += recurring.interval;
        // Skip missed periods instead of firing a burst.
        if recurring.next_due <= now {
            recurring.next_due = now + recurring.interval;
        }
        Some(recurring.task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn clear_all_is_idempotent() {
        let mut timers = TimerManager::new();
        timers.schedule_recurring(TimerTask::AutoplayTick, ms(2000), ms(0));
        timers.schedule_once(TimerTask::SnapCorrection, ms(800), ms(0));
        timers.schedule_once(TimerTask::RestartAutoplay, ms(800), ms(0));
        assert_eq!(timers.pending_count(), 3);

        timers.clear_all();
        assert_eq!(timers.pending_count(), 0);
        timers.clear_all();
        assert_eq!(timers.pending_count(), 0);
        assert_eq!(timers.next_due(), None);
        assert_eq!(timers.pop_due(ms(10_000)), None);
    }

    #[test]
    fn recurring_timer_is_replaced() {
        let mut timers = TimerManager::new();
        timers.schedule_recurring(TimerTask::AutoplayTick, ms(2000), ms(0));
        timers.schedule_recurring(TimerTask::AutoplayTick, ms(500), ms(0));

        assert_eq!(timers.pending_count(), 1);
        assert_eq!(timers.next_due(), Some(ms(500)));
        assert_eq!(timers.pop_due(ms(500)), Some(TimerTask::AutoplayTick));
        assert_eq!(timers.next_due(), Some(ms(1000)));
    }

    #[test]
    fn due_timers_fire_in_time_then_schedule_order() {
        let mut timers = TimerManager::new();
        timers.schedule_once(TimerTask::RestartAutoplay, ms(900), ms(0));
        timers.schedule_once(TimerTask::SnapCorrection, ms(800), ms(0));
        timers.schedule_once(TimerTask::RestartAutoplay, ms(800), ms(0));

        assert_eq!(timers.pop_due(ms(799)), None);
        assert_eq!(timers.pop_due(ms(1000)), Some(TimerTask::SnapCorrection));
        assert_eq!(timers.pop_due(ms(1000)), Some(TimerTask::RestartAutoplay));
        assert_eq!(timers.pop_due(ms(1000)), Some(TimerTask::RestartAutoplay));
        assert_eq!(timers.pop_due(ms(1000)), None);
    }

    #[test]
    fn recurring_timer_rearms_without_bursting() {
        let mut timers = TimerManager::new();
        timers.schedule_recurring(TimerTask::AutoplayTick, ms(2000), ms(0));

        assert_eq!(timers.pop_due(ms(2000)), Some(TimerTask::AutoplayTick));
        assert_eq!(timers.next_due(), Some(ms(4000)));

        // The host stalled for several periods.
        assert_eq!(timers.pop_due(ms(11_000)), Some(TimerTask::AutoplayTick));
        assert_eq!(timers.pop_due(ms(11_000)), None);
        assert_eq!(timers.next_due(), Some(ms(13_000)));
    }

    #[test]
    fn clear_one_shots_keeps_recurring() {
        let mut timers = TimerManager::new();
        timers.schedule_recurring(TimerTask::AutoplayTick, ms(2000), ms(0));
        timers.schedule_once(TimerTask::SnapCorrection, ms(800), ms(0));

        timers.clear_one_shots();
        assert!(timers.has_recurring());
        assert!(!timers.is_scheduled(TimerTask::SnapCorrection));
        assert!(timers.is_scheduled(TimerTask::AutoplayTick));
    }
}

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

//! Position state machine.
//!
//! Every entry point follows the same order: cancel scheduled work, settle a
//! pending snap, move, translate the container, notify subscribers, then
//! schedule whatever follows (the snap back from a clone, the autoplay
//! restart).

use std::time::Duration;

use log::{debug, trace};

use crate::{
    model::{NodeId, Page},
    slider::{
        NavPhase, Slider,
        error::SliderError,
        events::{SlideChange, SliderEvent},
        indicator::ACTIVE_CLASS,
        logos::id_suffix,
        timers::TimerTask,
    },
    util::format::{format_transition, format_translate_x, parse_translate_x},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Next,
    Previous,
}

impl Slider {
    /// Moves one slide forward, as the next button does.
    pub(crate) fn next(&mut self, page: &mut Page, now: Duration) -> Result<(), SliderError> {
        self.navigate(page, Direction::Next, now)
    }

    /// Moves one slide back, as the previous button does.
    pub(crate) fn previous(&mut self, page: &mut Page, now: Duration) -> Result<(), SliderError> {
        self.navigate(page, Direction::Previous, now)
    }

    fn navigate(
        &mut self,
        page: &mut Page,
        direction: Direction,
        now: Duration,
    ) -> Result<(), SliderError> {
        if !self.is_functional() {
            return Ok(());
        }
        let moved = self
            .begin_interaction(page)
            .and_then(|()| self.advance(page, direction, true, now));
        self.schedule_restart(now);
        moved
    }

    /// Jumps to the real slide `ordinal`, counting from 0.
    pub(crate) fn go_to(
        &mut self,
        page: &mut Page,
        ordinal: usize,
        now: Duration,
    ) -> Result<(), SliderError> {
        if !self.is_functional() {
            return Ok(());
        }
        let count = self.real_count();
        if ordinal >= count {
            return Err(SliderError::SlideOutOfRange { ordinal, count });
        }
        self.jump(page, ordinal + 1, now)
    }

    fn jump(&mut self, page: &mut Page, index: usize, now: Duration) -> Result<(), SliderError> {
        let moved = self.begin_interaction(page).and_then(|()| {
            self.index = index;
            self.apply_translate(page, true)
        });
        self.schedule_restart(now);
        moved
    }

    /// Dispatches a click on `target`.
    ///
    /// The target and its ancestors are matched against the navigation
    /// buttons, the position markers and the media logos. Returns whether the
    /// click was consumed.
    ///
    /// # Errors
    ///
    /// A logo whose id does not name a real slide fails with
    /// [`SliderError::UnresolvedTarget`] and leaves the slider untouched.
    pub(crate) fn handle_click(
        &mut self,
        page: &mut Page,
        target: NodeId,
        now: Duration,
    ) -> Result<bool, SliderError> {
        if !self.is_functional() {
            return Ok(false);
        }

        if let Some(buttons) = self.buttons {
            if page.is_within(target, buttons.previous) {
                self.previous(page, now)?;
                return Ok(true);
            }
            if page.is_within(target, buttons.next) {
                self.next(page, now)?;
                return Ok(true);
            }
        }

        if let Some(ordinal) = self.indicators.as_ref().and_then(|i| i.marker_at(page, target)) {
            self.go_to(page, ordinal, now)?;
            return Ok(true);
        }

        let logo = match &self.logos {
            Some(strip) => strip.logo_at(page, target)?,
            None => None,
        };
        if let Some(logo) = logo {
            let index = id_suffix(page, logo)?;
            if index == 0 || index > self.real_count() {
                let id = page.attribute(logo, "id").unwrap_or_default();
                return Err(SliderError::UnresolvedTarget(id.to_string()));
            }
            self.jump(page, index, now)?;
            return Ok(true);
        }

        Ok(false)
    }

    /// Runs every timer due at or before `now`, earliest first.
    pub(crate) fn tick(&mut self, page: &mut Page, now: Duration) -> Result<(), SliderError> {
        while let Some(task) = self.timers.pop_due(now) {
            trace!("Slider #{} running {:?}", self.id, task);
            match task {
                TimerTask::AutoplayTick => self.autoplay_tick(page, now)?,
                TimerTask::RestartAutoplay => self.start_autoplay(page, now)?,
                TimerTask::SnapCorrection => self.snap(page)?,
            }
        }
        Ok(())
    }

    /// Cancels everything scheduled and starts the recurring autoplay tick.
    pub(crate) fn start_autoplay(
        &mut self,
        page: &mut Page,
        now: Duration,
    ) -> Result<(), SliderError> {
        self.timers.clear_all();
        self.timers
            .schedule_recurring(TimerTask::AutoplayTick, self.options.interval(), now);
        debug!("Slider #{} autoplay every {:?}", self.id, self.options.interval());
        self.settle(page)
    }

    fn autoplay_tick(&mut self, page: &mut Page, now: Duration) -> Result<(), SliderError> {
        self.timers.clear_one_shots();
        self.settle(page)?;
        self.advance(page, Direction::Next, true, now)
    }

    /// Cancels all scheduled work. A snap still pending is carried out at
    /// once so the position never rests on a clone.
    pub(crate) fn begin_interaction(&mut self, page: &mut Page) -> Result<(), SliderError> {
        self.timers.clear_all();
        self.settle(page)
    }

    fn settle(&mut self, page: &mut Page) -> Result<(), SliderError> {
        match self.phase {
            NavPhase::SnapPending => self.snap(page),
            NavPhase::Idle => Ok(()),
        }
    }

    /// Steps one slide in `direction`. Landing on a clone schedules the snap
    /// to its real counterpart once the transition has finished.
    pub(crate) fn advance(
        &mut self,
        page: &mut Page,
        direction: Direction,
        animate: bool,
        now: Duration,
    ) -> Result<(), SliderError> {
        let last = self.padded_count.saturating_sub(1);
        self.index = match direction {
            Direction::Next => (self.index + 1).min(last),
            Direction::Previous => self.index.saturating_sub(1),
        };

        if self.real_ordinal().is_none() {
            self.phase = NavPhase::SnapPending;
            self.timers
                .schedule_once(TimerTask::SnapCorrection, self.options.transition(), now);
        }
        self.apply_translate(page, animate)
    }

    fn snap(&mut self, page: &mut Page) -> Result<(), SliderError> {
        self.phase = NavPhase::Idle;
        let target = match self.index {
            0 => self.padded_count.saturating_sub(2),
            i if i + 1 >= self.padded_count => 1,
            _ => return Ok(()),
        };
        trace!("Slider #{} snapping from {} to {}", self.id, self.index, target);
        self.index = target;
        self.apply_translate(page, false)
    }

    pub(crate) fn schedule_restart(&mut self, now: Duration) {
        if self.autoplay {
            self.timers
                .schedule_once(TimerTask::RestartAutoplay, self.options.restart_interval(), now);
        }
    }

    /// Offset currently declared on the container.
    pub(crate) fn current_offset(&self, page: &Page) -> f64 {
        page.style(self.wrapper, "transform")
            .and_then(parse_translate_x)
            .unwrap_or(-(self.index as f64) * self.slide_extent)
    }

    /// Translates the container to `offset` without changing the position.
    pub(crate) fn show_offset(&self, page: &mut Page, offset: f64) {
        let transition = format_transition(Some(self.options.transition()));
        page.set_style(self.wrapper, "transition", &transition);
        page.set_style(self.wrapper, "transform", &format_translate_x(offset));
    }

    fn apply_translate(&mut self, page: &mut Page, animate: bool) -> Result<(), SliderError> {
        let transition = format_transition(animate.then(|| self.options.transition()));
        let offset = -(self.index as f64) * self.slide_extent;
        page.set_style(self.wrapper, "transition", &transition);
        page.set_style(self.wrapper, "transform", &format_translate_x(offset));

        for (i, slide) in page.element_children(self.wrapper).into_iter().enumerate() {
            if i == self.index {
                page.add_class(slide, ACTIVE_CLASS);
            } else {
                page.remove_class(slide, ACTIVE_CLASS);
            }
        }

        let change = SlideChange {
            index: self.index,
            padded_count: self.padded_count,
            real_ordinal: self.real_ordinal(),
            animated: animate,
        };
        self.events.emit(&SliderEvent::Translate, &change, page)
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::{
        config::SliderOptions,
        model::{Element, InsertPosition},
        slider::tests::{active_slide, animated, ms, offset, slider, stage},
    };

    fn with_indicators() -> SliderOptions {
        SliderOptions {
            indicator: true,
            ..SliderOptions::default()
        }
    }

    fn record(slider: &mut Slider) -> Rc<RefCell<Vec<SlideChange>>> {
        let changes = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&changes);
        slider.subscribe(SliderEvent::Translate, move |change: &SlideChange, _: &mut Page| {
            sink.borrow_mut().push(*change);
            Ok(())
        });
        changes
    }

    #[test]
    fn next_moves_one_slide_animated() {
        let mut page = stage(3, true);
        let mut slider = slider(&mut page, false, SliderOptions::default());

        slider.next(&mut page, ms(100)).unwrap();

        assert_eq!(slider.index(), 2);
        assert_eq!(offset(&page, &slider), Some(-2000.0));
        assert!(animated(&page, &slider));
        assert_eq!(page.style(slider.wrapper(), "transition"), Some("all 0.8s"));
        assert_eq!(active_slide(&page, &slider), vec![2]);
        assert_eq!(slider.phase(), NavPhase::Idle);
    }

    #[test]
    fn full_loop_snaps_exactly_once() {
        let mut page = stage(3, true);
        let mut slider = slider(&mut page, false, with_indicators());
        let changes = record(&mut slider);
        let start = offset(&page, &slider);

        for step in 0..3 {
            slider.next(&mut page, ms(step * 1000)).unwrap();
            slider.tick(&mut page, ms(step * 1000 + 500)).unwrap();
        }
        assert_eq!(slider.index(), 4);
        assert_eq!(slider.phase(), NavPhase::SnapPending);
        assert_eq!(offset(&page, &slider), Some(-4000.0));

        slider.tick(&mut page, ms(2799)).unwrap();
        assert_eq!(slider.index(), 4);
        slider.tick(&mut page, ms(2800)).unwrap();

        assert_eq!(slider.index(), 1);
        assert_eq!(slider.phase(), NavPhase::Idle);
        assert_eq!(offset(&page, &slider), start);
        assert!(!animated(&page, &slider));
        assert_eq!(active_slide(&page, &slider), vec![1]);
        assert_eq!(slider.indicators().unwrap().active(&page), Some(0));

        let snaps = changes.borrow().iter().filter(|c| !c.animated).count();
        assert_eq!(snaps, 1);
    }

    #[test]
    fn previous_from_first_slide_snaps_to_last() {
        let mut page = stage(3, true);
        let mut slider = slider(&mut page, false, with_indicators());

        slider.previous(&mut page, ms(0)).unwrap();
        assert_eq!(slider.index(), 0);
        assert_eq!(offset(&page, &slider), Some(0.0));
        assert_eq!(slider.indicators().unwrap().active(&page), None);

        slider.tick(&mut page, ms(800)).unwrap();
        assert_eq!(slider.index(), 3);
        assert_eq!(offset(&page, &slider), Some(-3000.0));
        assert!(!animated(&page, &slider));
        assert_eq!(slider.indicators().unwrap().active(&page), Some(2));
    }

    #[test]
    fn input_during_pending_snap_settles_first() {
        let mut page = stage(3, true);
        let mut slider = slider(&mut page, false, SliderOptions::default());

        slider.next(&mut page, ms(0)).unwrap();
        slider.next(&mut page, ms(10)).unwrap();
        slider.next(&mut page, ms(20)).unwrap();
        assert_eq!(slider.index(), 4);

        // The snap to 1 happens synchronously, then the click moves on to 2.
        slider.next(&mut page, ms(30)).unwrap();
        assert_eq!(slider.index(), 2);
        assert_eq!(slider.phase(), NavPhase::Idle);
        assert!(!slider.timers().is_scheduled(TimerTask::SnapCorrection));

        slider.tick(&mut page, ms(5000)).unwrap();
        assert_eq!(slider.index(), 2);
    }

    #[test]
    fn index_stays_in_bounds_under_rapid_input() {
        let mut page = stage(2, true);
        let mut slider = slider(&mut page, false, SliderOptions::default());

        for n in 0..20 {
            if n % 3 == 0 {
                slider.previous(&mut page, ms(n)).unwrap();
            } else {
                slider.next(&mut page, ms(n)).unwrap();
            }
            assert!(slider.index() < slider.padded_count());
        }
    }

    #[test]
    fn click_pauses_autoplay_until_restart() {
        let mut page = stage(3, true);
        let mut slider = slider(&mut page, true, SliderOptions::default());
        let next = slider.next_button().unwrap();

        assert!(slider.handle_click(&mut page, next, ms(500)).unwrap());
        assert_eq!(slider.index(), 2);
        assert!(!slider.timers().has_recurring());
        assert!(slider.timers().is_scheduled(TimerTask::RestartAutoplay));

        slider.tick(&mut page, ms(1299)).unwrap();
        assert!(!slider.timers().has_recurring());
        slider.tick(&mut page, ms(1300)).unwrap();
        assert!(slider.timers().has_recurring());
        assert_eq!(slider.timers().next_due(), Some(ms(3300)));

        // The first 2000ms tick never fires.
        slider.tick(&mut page, ms(2000)).unwrap();
        assert_eq!(slider.index(), 2);

        slider.tick(&mut page, ms(3300)).unwrap();
        assert_eq!(slider.index(), 3);
    }

    #[test]
    fn autoplay_loops_through_the_clone() {
        let mut page = stage(2, true);
        let mut slider = slider(&mut page, true, SliderOptions::default());

        slider.tick(&mut page, ms(2000)).unwrap();
        assert_eq!(slider.index(), 2);
        slider.tick(&mut page, ms(4000)).unwrap();
        assert_eq!(slider.index(), 3);
        assert!(slider.timers().is_scheduled(TimerTask::SnapCorrection));
        assert!(slider.timers().has_recurring());

        slider.tick(&mut page, ms(4800)).unwrap();
        assert_eq!(slider.index(), 1);
        slider.tick(&mut page, ms(6000)).unwrap();
        assert_eq!(slider.index(), 2);
    }

    #[test]
    fn without_autoplay_no_restart_is_scheduled() {
        let mut page = stage(3, true);
        let mut slider = slider(&mut page, false, SliderOptions::default());

        slider.next(&mut page, ms(0)).unwrap();
        assert_eq!(slider.timers().pending_count(), 0);
    }

    #[test]
    fn marker_click_jumps_to_its_slide() {
        let mut page = stage(4, true);
        let mut slider = slider(&mut page, true, with_indicators());
        let third = slider.indicators().unwrap().markers()[2];

        assert!(slider.handle_click(&mut page, third, ms(700)).unwrap());

        assert_eq!(slider.index(), 3);
        assert_eq!(offset(&page, &slider), Some(-3000.0));
        assert!(animated(&page, &slider));
        assert_eq!(slider.indicators().unwrap().active(&page), Some(2));
        assert!(!slider.timers().has_recurring());
        assert!(slider.timers().is_scheduled(TimerTask::RestartAutoplay));
    }

    #[test]
    fn go_to_rejects_unknown_ordinals() {
        let mut page = stage(3, true);
        let mut slider = slider(&mut page, false, SliderOptions::default());

        let result = slider.go_to(&mut page, 3, ms(0));
        assert!(matches!(
            result,
            Err(SliderError::SlideOutOfRange { ordinal: 3, count: 3 })
        ));
        assert_eq!(slider.index(), 1);
    }

    #[test]
    fn click_inside_a_button_bubbles_up() {
        let mut page = stage(3, true);
        let mut slider = slider(&mut page, false, SliderOptions::default());
        let prev = slider.previous_button().unwrap();
        let icon = page.insert(prev, &Element::new("span"), InsertPosition::BeforeEnd);

        assert!(slider.handle_click(&mut page, icon, ms(0)).unwrap());
        assert_eq!(slider.index(), 0);
    }

    #[test]
    fn unrelated_click_is_not_consumed() {
        let mut page = stage(3, true);
        let mut slider = slider(&mut page, true, SliderOptions::default());
        let title = page.query_selector(None, "#s2 h2").unwrap().unwrap();

        assert!(!slider.handle_click(&mut page, title, ms(100)).unwrap());
        assert_eq!(slider.index(), 1);
        assert!(slider.timers().has_recurring());
    }

    fn media_stage(slides: usize, logos: &[&str]) -> Page {
        let mut page = stage(slides, false);
        let mut strip = Element::new("div").with_attr("class", "media-logos");
        for id in logos {
            let logo = Element::new("div")
                .with_attr("id", id)
                .with_attr("class", "m-item");
            strip = strip.with_child(logo);
        }
        page.insert(
            page.root(),
            &Element::new("section")
                .with_attr("class", "product-media")
                .with_child(strip),
            InsertPosition::BeforeEnd,
        );
        page
    }

    fn media_options() -> SliderOptions {
        let mut options = SliderOptions {
            init_swiper: true,
            ..SliderOptions::default()
        };
        options.swiper_settings.is_for_media_section = true;
        options
    }

    #[test]
    fn logo_strip_follows_navigation() {
        let mut page = media_stage(3, &["m1", "m2", "m3"]);
        let mut slider = slider(&mut page, false, media_options());
        let strip = slider.logos().unwrap().clone();
        let logos = strip.logos(&page).unwrap();

        assert!(page.has_class(logos[0], ACTIVE_CLASS));
        slider.next(&mut page, ms(0)).unwrap();
        assert!(page.has_class(logos[1], ACTIVE_CLASS));
        assert!(!page.has_class(logos[0], ACTIVE_CLASS));

        // The clone after the last slide carries the id of the first.
        slider.next(&mut page, ms(10)).unwrap();
        slider.next(&mut page, ms(20)).unwrap();
        assert_eq!(slider.index(), 4);
        assert!(page.has_class(logos[0], ACTIVE_CLASS));
    }

    #[test]
    fn logo_click_jumps_to_matching_slide() {
        let mut page = media_stage(3, &["m1", "m2", "m3"]);
        let mut slider = slider(&mut page, false, media_options());
        let logos = slider.logos().unwrap().logos(&page).unwrap();

        assert!(slider.handle_click(&mut page, logos[2], ms(0)).unwrap());
        assert_eq!(slider.index(), 3);
        assert!(page.has_class(logos[2], ACTIVE_CLASS));
    }

    #[test]
    fn unresolvable_logo_leaves_state_unchanged() {
        let mut page = media_stage(2, &["m1", "m2", "m7", "logo"]);
        let mut slider = slider(&mut page, true, media_options());
        let logos = slider.logos().unwrap().logos(&page).unwrap();

        let beyond = slider.handle_click(&mut page, logos[2], ms(100));
        assert!(matches!(beyond, Err(SliderError::UnresolvedTarget(id)) if id == "m7"));
        let unnamed = slider.handle_click(&mut page, logos[3], ms(100));
        assert!(matches!(unnamed, Err(SliderError::UnresolvedTarget(_))));

        assert_eq!(slider.index(), 1);
        assert!(slider.timers().has_recurring());
    }

    #[test]
    fn short_logo_row_keeps_autoplay_alive() {
        let mut page = media_stage(3, &["m1", "m2"]);
        let mut slider = slider(&mut page, true, media_options());
        let logos = slider.logos().unwrap().logos(&page).unwrap();

        slider.next(&mut page, ms(0)).unwrap();
        slider.next(&mut page, ms(10)).unwrap();
        assert_eq!(slider.index(), 3);
        assert!(page.has_class(logos[1], ACTIVE_CLASS));
        assert!(slider.timers().is_scheduled(TimerTask::RestartAutoplay));

        slider.tick(&mut page, ms(810)).unwrap();
        assert!(slider.timers().has_recurring());
        slider.tick(&mut page, ms(2810)).unwrap();
        assert_eq!(slider.index(), 4);
        assert!(page.has_class(logos[0], ACTIVE_CLASS));
    }

    #[test]
    fn failing_listener_still_schedules_restart() {
        let mut page = stage(3, true);
        let mut slider = slider(&mut page, true, SliderOptions::default());
        slider.subscribe(SliderEvent::Translate, |_: &SlideChange, _: &mut Page| {
            Err(SliderError::UnresolvedTarget("listener".to_string()))
        });

        assert!(slider.next(&mut page, ms(500)).is_err());
        assert_eq!(slider.index(), 2);
        assert!(slider.timers().is_scheduled(TimerTask::RestartAutoplay));

        slider.tick(&mut page, ms(1300)).unwrap();
        assert!(slider.timers().has_recurring());
    }
}

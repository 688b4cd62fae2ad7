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

//! Infinitely looping slide carousel.
//!
//! A [`Slider`] turns a list of slides on a [`Page`] into a carousel that
//! wraps around endlessly. It does so with a finite set of elements: a copy of
//! the last slide is placed before the first and a copy of the first slide
//! after the last. Moving onto one of those clones is followed, once the
//! animation has settled, by an unanimated jump to the real slide it copies.
//! As both look identical the jump cannot be seen.
//!
//! # Input
//!
//! Three independent channels move the slider: clicks (previous and next
//! buttons, position markers, media logos), touch gestures and the autoplay
//! timer. Every input first cancels all scheduled work, so at most one intent
//! is pending at any time, then mutates the position, updates the page and
//! notifies subscribers. Manual input pauses autoplay, which resumes after
//! the configured restart interval.
//!
//! # Time
//!
//! The slider never reads a clock. Operations that schedule or fire timers
//! take the current time as a [`Duration`] since an arbitrary epoch, and the
//! host calls [`Slider::tick`] as its clock advances.
//!
//! # Organization
//!
//! * [`clone`] and [`layout`]: build and size the padded slide sequence.
//! * [`navigation`]: the position state machine and click handling.
//! * [`touch`] and [`swipe`]: gesture tracking and classification.
//! * [`timers`]: scheduled work.
//! * [`events`], [`indicator`] and [`logos`]: change notification and the
//!   features that follow it.

pub(crate) mod clone;
pub(crate) mod error;
pub(crate) mod events;
pub(crate) mod indicator;
pub(crate) mod layout;
pub(crate) mod logos;
pub(crate) mod navigation;
pub(crate) mod swipe;
pub(crate) mod timers;
pub(crate) mod touch;

use std::time::Duration;

use log::{debug, warn};

use crate::{
    config::SliderOptions,
    model::{NodeId, Page},
    slider::{
        error::SliderError,
        events::{EventBus, SlideChange, SliderEvent},
        indicator::Indicators,
        logos::LogoStrip,
        swipe::{SwipeRecognizer, SwipeThresholds, Viewport},
        timers::TimerManager,
    },
};

/// Navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NavPhase {
    /// Resting on a real slide, or animating towards one.
    Idle,
    /// Landed on a clone; the corrective jump is scheduled.
    SnapPending,
}

#[derive(Debug, Clone, Copy)]
struct NavButtons {
    previous: NodeId,
    next: NodeId,
}

#[derive(Debug)]
pub(crate) struct Slider {
    id: String,
    autoplay: bool,
    options: SliderOptions,
    wrapper: NodeId,
    padded_count: usize,
    index: usize,
    slide_extent: f64,
    phase: NavPhase,
    timers: TimerManager,
    events: EventBus<SliderEvent, SlideChange, Page>,
    swipe: Option<SwipeRecognizer>,
    indicators: Option<Indicators>,
    logos: Option<LogoStrip>,
    buttons: Option<NavButtons>,
}

impl Slider {
    /// Sets up the slider hosted by the element with id `id`.
    ///
    /// The slides are padded with clones, sized, decorated with the optional
    /// markers and logo strip, and the slider is moved without animation onto
    /// the first real slide. With `autoplay` the recurring tick starts at
    /// `now`.
    ///
    /// # Errors
    ///
    /// Fails if the host element or the slide container cannot be found or a
    /// configured selector is invalid. Finding no slides is not an error: a
    /// warning is logged and the returned slider ignores all input.
    pub(crate) fn init(
        page: &mut Page,
        id: &str,
        autoplay: bool,
        options: SliderOptions,
        viewport: Viewport,
        now: Duration,
    ) -> Result<Self, SliderError> {
        let host = page
            .get_element_by_id(id)
            .ok_or_else(|| SliderError::HostNotFound(id.to_string()))?;

        let wrapper = match &options.slide_wrapper {
            Some(selector) => page.query_selector(None, selector)?,
            None => page.query_selector(Some(host), &format!("#{id} > ul"))?,
        }
        .ok_or_else(|| SliderError::WrapperNotFound(id.to_string()))?;

        let slides = match (&options.slide_selector, &options.slide_wrapper) {
            (Some(selector), _) => page.query_selector_all(None, selector)?,
            (None, Some(wrapper_selector)) => {
                page.query_selector_all(None, &format!("{wrapper_selector} > *"))?
            }
            (None, None) => page.element_children(wrapper),
        };

        let slide_extent = options.offset_width.unwrap_or_else(|| page.client_width(host));

        let mut slider = Self {
            id: id.to_string(),
            autoplay,
            options,
            wrapper,
            padded_count: 0,
            index: 0,
            slide_extent,
            phase: NavPhase::Idle,
            timers: TimerManager::new(),
            events: EventBus::new(),
            swipe: None,
            indicators: None,
            logos: None,
            buttons: None,
        };

        let Some(padded_count) = clone::pad_with_clones(page, wrapper, &slides) else {
            return Ok(slider);
        };
        slider.padded_count = padded_count;
        layout::apply(page, wrapper, padded_count);

        if slider.options.indicator {
            slider.create_indicators(page);
        }
        slider.bind_inputs(page, host, viewport)?;

        debug!(
            "Slider #{} ready with {} slides of {}px",
            slider.id,
            slider.real_count(),
            slider.slide_extent
        );

        slider.advance(page, navigation::Direction::Next, false, now)?;
        if slider.autoplay {
            slider.start_autoplay(page, now)?;
        }
        Ok(slider)
    }

    fn create_indicators(&mut self, page: &mut Page) {
        let class = self.options.indicator_settings.wrapper_class.clone();
        let indicators = Indicators::build(page, self.wrapper, self.real_count(), &class);

        let synced = indicators.clone();
        self.events
            .subscribe(SliderEvent::Translate, move |change: &SlideChange, page: &mut Page| {
                synced.sync(page, change.real_ordinal);
                Ok(())
            });
        self.indicators = Some(indicators);
    }

    fn bind_inputs(
        &mut self,
        page: &mut Page,
        host: NodeId,
        viewport: Viewport,
    ) -> Result<(), SliderError> {
        let previous = page.query_selector(Some(host), self.options.previous_button())?;
        let next = page.query_selector(Some(host), self.options.next_button())?;

        let mut swipe = self.options.init_swiper;
        match (previous, next) {
            (Some(previous), Some(next)) => self.buttons = Some(NavButtons { previous, next }),
            _ => {
                warn!("Slider #{} has no navigation buttons, falling back to swipe", self.id);
                swipe = true;
            }
        }

        if swipe {
            self.enable_swipe(viewport);
        }
        Ok(())
    }

    fn enable_swipe(&mut self, viewport: Viewport) {
        let settings = &self.options.swiper_settings;
        let thresholds =
            SwipeThresholds::new(settings.x_sensitivity, settings.y_sensitivity, viewport);
        self.swipe = Some(SwipeRecognizer::new(thresholds, self.slide_extent));

        if settings.is_for_media_section {
            let strip = LogoStrip::new(settings.logo_selector(), settings.active_logo_width);
            let follower = strip.clone();
            let wrapper = self.wrapper;
            self.events
                .subscribe(SliderEvent::Translate, move |change: &SlideChange, page: &mut Page| {
                    match page.element_children(wrapper).get(change.index) {
                        Some(&slide) => follower.follow_slide(page, slide),
                        None => Ok(()),
                    }
                });
            self.logos = Some(strip);
        }
    }

    /// Whether the slider found slides to work with.
    pub(crate) fn is_functional(&self) -> bool {
        self.padded_count > 0
    }

    pub(crate) fn id(&self) -> &str {
        &self.id
    }

    pub(crate) fn wrapper(&self) -> NodeId {
        self.wrapper
    }

    #[cfg(test)]
    pub(crate) fn index(&self) -> usize {
        self.index
    }

    #[cfg(test)]
    pub(crate) fn padded_count(&self) -> usize {
        self.padded_count
    }

    /// Number of real, non-clone slides.
    pub(crate) fn real_count(&self) -> usize {
        self.padded_count.saturating_sub(2)
    }

    /// Ordinal of the real slide currently shown, `None` on a clone.
    pub(crate) fn real_ordinal(&self) -> Option<usize> {
        let is_clone = self.index == 0 || self.index + 1 >= self.padded_count;
        (!is_clone).then(|| self.index - 1)
    }

    pub(crate) fn slide_extent(&self) -> f64 {
        self.slide_extent
    }

    #[cfg(test)]
    pub(crate) fn phase(&self) -> NavPhase {
        self.phase
    }

    pub(crate) fn is_autoplay(&self) -> bool {
        self.autoplay
    }

    #[cfg(test)]
    pub(crate) fn is_swiping(&self) -> bool {
        self.swipe.as_ref().is_some_and(SwipeRecognizer::is_swiping)
    }

    #[cfg(test)]
    pub(crate) fn swipe_enabled(&self) -> bool {
        self.swipe.is_some()
    }

    #[cfg(test)]
    pub(crate) fn timers(&self) -> &TimerManager {
        &self.timers
    }

    pub(crate) fn indicators(&self) -> Option<&Indicators> {
        self.indicators.as_ref()
    }

    pub(crate) fn logos(&self) -> Option<&LogoStrip> {
        self.logos.as_ref()
    }

    pub(crate) fn previous_button(&self) -> Option<NodeId> {
        self.buttons.map(|b| b.previous)
    }

    pub(crate) fn next_button(&self) -> Option<NodeId> {
        self.buttons.map(|b| b.next)
    }

    /// Subscribes an additional listener to slider events.
    pub(crate) fn subscribe<F>(&mut self, event: SliderEvent, listener: F)
    where
        F: FnMut(&SlideChange, &mut Page) -> Result<(), SliderError> + 'static,
    {
        self.events.subscribe(event, listener);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::{
        model::{Element, InsertPosition},
        util::format::{parse_transition, parse_translate_x},
    };

    pub(crate) fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    pub(crate) const VIEWPORT: Viewport = Viewport {
        width: 400.0,
        height: 800.0,
    };

    /// Builds `#slider` with `count` slides `s1..`, optional buttons and a
    /// client width of 1000px.
    pub(crate) fn stage(count: usize, buttons: bool) -> Page {
        let mut page = Page::new();
        let mut list = Element::new("ul");
        for n in 1..=count {
            list = list.with_child(
                Element::new("li")
                    .with_attr("id", &format!("s{n}"))
                    .with_child(Element::new("h2").with_text(&format!("Slide {n}"))),
            );
        }
        let mut section = Element::new("section").with_attr("id", "slider").with_child(list);
        if buttons {
            section = section
                .with_child(Element::new("button").with_attr("class", "prev_btn"))
                .with_child(Element::new("button").with_attr("class", "next_btn"));
        }
        let host = page.insert(page.root(), &section, InsertPosition::BeforeEnd);
        page.set_client_width(host, 1000.0);
        page
    }

    pub(crate) fn slider(page: &mut Page, autoplay: bool, options: SliderOptions) -> Slider {
        Slider::init(page, "slider", autoplay, options, VIEWPORT, ms(0)).unwrap()
    }

    pub(crate) fn offset(page: &Page, slider: &Slider) -> Option<f64> {
        parse_translate_x(page.style(slider.wrapper(), "transform")?)
    }

    pub(crate) fn animated(page: &Page, slider: &Slider) -> bool {
        page.style(slider.wrapper(), "transition")
            .and_then(parse_transition)
            .is_some()
    }

    pub(crate) fn active_slide(page: &Page, slider: &Slider) -> Vec<usize> {
        page.element_children(slider.wrapper())
            .into_iter()
            .enumerate()
            .filter(|&(_, s)| page.has_class(s, indicator::ACTIVE_CLASS))
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn init_lands_on_first_real_slide_without_animation() {
        let mut page = stage(3, true);
        let slider = slider(&mut page, false, SliderOptions::default());

        assert!(slider.is_functional());
        assert_eq!(slider.padded_count(), 5);
        assert_eq!(slider.index(), 1);
        assert_eq!(slider.real_ordinal(), Some(0));
        assert_eq!(slider.slide_extent(), 1000.0);
        assert_eq!(offset(&page, &slider), Some(-1000.0));
        assert!(!animated(&page, &slider));
        assert_eq!(active_slide(&page, &slider), vec![1]);
        assert_eq!(slider.phase(), NavPhase::Idle);
        assert_eq!(slider.timers().pending_count(), 0);
    }

    #[test]
    fn init_sizes_the_padded_sequence() {
        let mut page = stage(3, true);
        let slider = slider(&mut page, false, SliderOptions::default());

        assert_eq!(page.style(slider.wrapper(), "width"), Some("500%"));
        let slides = page.element_children(slider.wrapper());
        assert_eq!(slides.len(), 5);
        assert_eq!(page.attribute(slides[0], "id"), Some("s3"));
        assert_eq!(page.attribute(slides[4], "id"), Some("s1"));
        assert!(slides.iter().all(|&s| page.style(s, "width") == Some("20%")));
    }

    #[test]
    fn configured_offset_width_overrides_client_width() {
        let mut page = stage(2, true);
        let options = SliderOptions {
            offset_width: Some(320.0),
            ..SliderOptions::default()
        };
        let slider = slider(&mut page, false, options);

        assert_eq!(slider.slide_extent(), 320.0);
        assert_eq!(offset(&page, &slider), Some(-320.0));
    }

    #[test]
    fn custom_wrapper_and_slide_selectors() {
        let mut page = Page::new();
        let host = page.insert(
            page.root(),
            &Element::new("div")
                .with_attr("id", "promo")
                .with_child(
                    Element::new("div")
                        .with_attr("class", "track")
                        .with_child(Element::new("article").with_attr("class", "card"))
                        .with_child(Element::new("article").with_attr("class", "card")),
                ),
            InsertPosition::BeforeEnd,
        );
        page.set_client_width(host, 600.0);
        let options = SliderOptions {
            slide_wrapper: Some(".track".to_string()),
            slide_selector: Some(".card".to_string()),
            ..SliderOptions::default()
        };

        let slider = Slider::init(&mut page, "promo", false, options, VIEWPORT, ms(0)).unwrap();

        assert_eq!(slider.padded_count(), 4);
        assert_eq!(offset(&page, &slider), Some(-600.0));
    }

    #[test]
    fn missing_host_or_container_is_an_error() {
        let mut page = stage(3, true);
        assert!(matches!(
            Slider::init(&mut page, "other", false, SliderOptions::default(), VIEWPORT, ms(0)),
            Err(SliderError::HostNotFound(_))
        ));

        let options = SliderOptions {
            slide_wrapper: Some(".nowhere".to_string()),
            ..SliderOptions::default()
        };
        assert!(matches!(
            Slider::init(&mut page, "slider", false, options, VIEWPORT, ms(0)),
            Err(SliderError::WrapperNotFound(_))
        ));

        let options = SliderOptions {
            slide_selector: Some("li..x".to_string()),
            ..SliderOptions::default()
        };
        assert!(matches!(
            Slider::init(&mut page, "slider", false, options, VIEWPORT, ms(0)),
            Err(SliderError::Selector(_))
        ));
    }

    #[test]
    fn no_slides_gives_an_inert_slider() {
        let mut page = stage(0, true);
        let mut slider = slider(&mut page, true, SliderOptions::default());

        assert!(!slider.is_functional());
        assert_eq!(slider.timers().pending_count(), 0);
        slider.next(&mut page, ms(10)).unwrap();
        slider.tick(&mut page, ms(10_000)).unwrap();
        assert_eq!(slider.index(), 0);
        assert!(page.element_children(slider.wrapper()).is_empty());
    }

    #[test]
    fn missing_buttons_fall_back_to_swipe() {
        let mut page = stage(3, false);
        let slider = slider(&mut page, false, SliderOptions::default());

        assert!(slider.swipe_enabled());
        assert_eq!(slider.previous_button(), None);
        assert_eq!(slider.next_button(), None);
    }

    #[test]
    fn indicators_follow_initial_position() {
        let mut page = stage(3, true);
        let options = SliderOptions {
            indicator: true,
            ..SliderOptions::default()
        };
        let slider = slider(&mut page, false, options);

        let indicators = slider.indicators().unwrap();
        assert_eq!(indicators.markers().len(), 3);
        assert_eq!(indicators.active(&page), Some(0));
    }

    #[test]
    fn autoplay_starts_recurring_tick() {
        let mut page = stage(3, true);
        let slider = slider(&mut page, true, SliderOptions::default());

        assert!(slider.is_autoplay());
        assert!(slider.timers().has_recurring());
        assert_eq!(slider.timers().next_due(), Some(ms(2000)));
    }
}

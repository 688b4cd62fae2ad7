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

//! Application configuration.
//!
//! This module manages the application configuration file, which holds the
//! slide content shown by the application and the options of the slider
//! itself. Every option has a default so a partial file is enough.

use std::time::Duration;

use log::warn;
use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "loopslide";

pub(crate) const DEFAULT_LOGO_SELECTOR: &str = ".product-media .media-logos .m-item";

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    pub autoplay: bool,
    pub slider: SliderOptions,
    pub slides: Vec<SlideContent>,
    pub logos: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            autoplay: true,
            slider: SliderOptions {
                indicator: true,
                init_swiper: true,
                ..SliderOptions::default()
            },
            slides: vec![
                SlideContent::new("Loop", "Keep pressing next: the last slide wraps to the first."),
                SlideContent::new("Swipe", "Drag with the mouse to swipe between slides."),
                SlideContent::new("Autoplay", "Slides advance on their own until you interact."),
            ],
            logos: vec![],
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct SlideContent {
    pub title: String,
    pub body: String,
}

impl SlideContent {
    pub(crate) fn new(title: &str, body: &str) -> Self {
        Self {
            title: title.to_string(),
            body: body.to_string(),
        }
    }
}

/// Construction-time options of a slider.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SliderOptions {
    /// Slide extent in pixels, defaults to the host element's client width.
    pub offset_width: Option<f64>,
    /// Selector of the slide container, defaults to `#<id> > ul`.
    pub slide_wrapper: Option<String>,
    /// Selector of the slides, defaults to the container's children.
    pub slide_selector: Option<String>,
    pub interval_ms: u64,
    pub restart_interval_ms: u64,
    pub transition_ms: u64,
    pub indicator: bool,
    pub indicator_settings: IndicatorSettings,
    pub previous_button: Option<String>,
    pub next_button: Option<String>,
    pub init_swiper: bool,
    pub swiper_settings: SwiperSettings,
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self {
            offset_width: None,
            slide_wrapper: None,
            slide_selector: None,
            interval_ms: 2000,
            restart_interval_ms: 800,
            transition_ms: 800,
            indicator: false,
            indicator_settings: IndicatorSettings::default(),
            previous_button: None,
            next_button: None,
            init_swiper: false,
            swiper_settings: SwiperSettings::default(),
        }
    }
}

impl SliderOptions {
    pub(crate) fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub(crate) fn restart_interval(&self) -> Duration {
        Duration::from_millis(self.restart_interval_ms)
    }

    pub(crate) fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    pub(crate) fn previous_button(&self) -> &str {
        self.previous_button.as_deref().unwrap_or(".prev_btn")
    }

    pub(crate) fn next_button(&self) -> &str {
        self.next_button.as_deref().unwrap_or(".next_btn")
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct IndicatorSettings {
    pub wrapper_class: String,
}

impl Default for IndicatorSettings {
    fn default() -> Self {
        Self {
            wrapper_class: "circle_btn".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SwiperSettings {
    /// Least horizontal swipe distance, as a fraction of the viewport width.
    pub x_sensitivity: f64,
    /// Largest vertical drift, as a fraction of the viewport height.
    pub y_sensitivity: f64,
    pub is_for_media_section: bool,
    pub logo_selector: Option<String>,
    /// Width of the active logo, in percent.
    pub active_logo_width: f64,
}

impl Default for SwiperSettings {
    fn default() -> Self {
        Self {
            x_sensitivity: 0.5,
            y_sensitivity: 0.1,
            is_for_media_section: false,
            logo_selector: None,
            active_logo_width: 28.0,
        }
    }
}

impl SwiperSettings {
    pub(crate) fn logo_selector(&self) -> &str {
        self.logo_selector.as_deref().unwrap_or(DEFAULT_LOGO_SELECTOR)
    }
}

/// Loads the configuration, writing the defaults on first run. An unreadable
/// file falls back to the defaults.
pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_else(|e| {
        warn!("Failed to load configuration, using defaults: {e}");
        AppConfig::default()
    })
}

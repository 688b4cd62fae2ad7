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

//! The page shown by the terminal front end.
//!
//! The stage is built from the application configuration: one list item per
//! configured slide inside the slider host, the navigation buttons, and in
//! media mode a row of logos paired with the slides by id.

use crate::{
    config::AppConfig,
    model::{Element, InsertPosition, Page},
};

pub(crate) const SLIDER_ID: &str = "slider";

/// Builds the stage for a slider host `width` columns wide.
pub(crate) fn build_stage(config: &AppConfig, width: f64) -> Page {
    let mut list = Element::new("ul");
    for (n, slide) in config.slides.iter().enumerate() {
        list = list.with_child(
            Element::new("li")
                .with_attr("id", &format!("s{}", n + 1))
                .with_child(Element::new("h2").with_text(&slide.title))
                .with_child(Element::new("p").with_text(&slide.body)),
        );
    }

    let slider = Element::new("section")
        .with_attr("id", SLIDER_ID)
        .with_child(list)
        .with_child(Element::new("button").with_attr("class", "prev_btn"))
        .with_child(Element::new("button").with_attr("class", "next_btn"));

    let mut page = Page::new();
    let host = page.insert(page.root(), &slider, InsertPosition::BeforeEnd);
    page.set_client_width(host, width);
    if config.slider.swiper_settings.is_for_media_section {
        page.insert(page.root(), &media_logos(config), InsertPosition::BeforeEnd);
    }
    page
}

// Logo labels default to the slide titles.
fn media_logos(config: &AppConfig) -> Element {
    let labels: Vec<&str> = if config.logos.is_empty() {
        config.slides.iter().map(|s| s.title.as_str()).collect()
    } else {
        config.logos.iter().map(String::as_str).collect()
    };

    let mut logos = Element::new("div").with_attr("class", "media-logos");
    for (n, label) in labels.into_iter().enumerate() {
        logos = logos.with_child(
            Element::new("div")
                .with_attr("id", &format!("m{}", n + 1))
                .with_attr("class", "m-item")
                .with_text(label),
        );
    }
    Element::new("section")
        .with_attr("class", "product-media")
        .with_child(logos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_LOGO_SELECTOR;

    #[test]
    fn stage_holds_slides_and_buttons() {
        let config = AppConfig::default();
        let page = build_stage(&config, 120.0);

        let host = page.get_element_by_id(SLIDER_ID).unwrap();
        assert_eq!(page.client_width(host), 120.0);

        let slides = page.query_selector_all(None, "#slider > ul > li").unwrap();
        assert_eq!(slides.len(), config.slides.len());
        assert_eq!(page.attribute(slides[1], "id"), Some("s2"));

        let title = page.query_selector(Some(slides[0]), "h2").unwrap().unwrap();
        assert_eq!(page.text_content(title), config.slides[0].title);

        assert!(page.query_selector(Some(host), ".prev_btn").unwrap().is_some());
        assert!(page.query_selector(Some(host), ".next_btn").unwrap().is_some());
        assert!(page.query_selector(None, DEFAULT_LOGO_SELECTOR).unwrap().is_none());
    }

    #[test]
    fn media_mode_adds_logos() {
        let mut config = AppConfig::default();
        config.slider.swiper_settings.is_for_media_section = true;
        config.logos = vec!["ACME".to_string(), "Globex".to_string()];

        let page = build_stage(&config, 80.0);
        let logos = page.query_selector_all(None, DEFAULT_LOGO_SELECTOR).unwrap();

        assert_eq!(logos.len(), 2);
        assert_eq!(page.attribute(logos[1], "id"), Some("m2"));
        assert_eq!(page.text_content(logos[0]), "ACME");
    }

    #[test]
    fn logo_labels_fall_back_to_titles() {
        let mut config = AppConfig::default();
        config.slider.swiper_settings.is_for_media_section = true;

        let page = build_stage(&config, 80.0);
        let logos = page.query_selector_all(None, DEFAULT_LOGO_SELECTOR).unwrap();

        assert_eq!(logos.len(), config.slides.len());
        assert_eq!(page.text_content(logos[2]), config.slides[2].title);
    }
}

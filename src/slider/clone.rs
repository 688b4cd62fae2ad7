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

//! Clone padding for seamless wraparound.

use log::warn;

use crate::model::{InsertPosition, NodeId, Page, deep_copy};

/// Pads the slide container with a copy of the last slide at its start and a
/// copy of the first slide at its end.
///
/// Returns the number of element children of `wrapper` afterwards, or `None`
/// if there were no slides to copy, in which case the page is left untouched.
pub(crate) fn pad_with_clones(
    page: &mut Page,
    wrapper: NodeId,
    slides: &[NodeId],
) -> Option<usize> {
    let (Some(&first), Some(&last)) = (slides.first(), slides.last()) else {
        warn!("There is no slide under the slider");
        return None;
    };

    let first_copy = deep_copy(&page.snapshot(first)?);
    let last_copy = deep_copy(&page.snapshot(last)?);

    page.insert(wrapper, &last_copy, InsertPosition::AfterBegin);
    page.insert(wrapper, &first_copy, InsertPosition::BeforeEnd);

    Some(page.element_children(wrapper).len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Element;

    fn page_with_slides(count: usize) -> (Page, NodeId, Vec<NodeId>) {
        let mut page = Page::new();
        let ul = page.insert(page.root(), &Element::new("ul"), InsertPosition::BeforeEnd);
        let slides = (1..=count)
            .map(|n| {
                let slide = Element::new("li")
                    .with_attr("id", &format!("s{n}"))
                    .with_text("\n  ")
                    .with_child(Element::new("h2").with_text(&format!("Slide {n}")));
                page.insert(ul, &slide, InsertPosition::BeforeEnd)
            })
            .collect();
        (page, ul, slides)
    }

    #[test]
    fn clones_surround_real_slides() {
        let (mut page, ul, slides) = page_with_slides(3);

        assert_eq!(pad_with_clones(&mut page, ul, &slides), Some(5));

        let children = page.element_children(ul);
        assert_eq!(&children[1..4], &slides[..]);
        assert_eq!(page.attribute(children[0], "id"), Some("s3"));
        assert_eq!(page.attribute(children[4], "id"), Some("s1"));
        assert_eq!(page.text_content(children[0]), "Slide 3");
        assert_eq!(page.text_content(children[4]), "Slide 1");
    }

    #[test]
    fn single_slide_is_copied_to_both_ends() {
        let (mut page, ul, slides) = page_with_slides(1);

        assert_eq!(pad_with_clones(&mut page, ul, &slides), Some(3));
        let children = page.element_children(ul);
        assert_eq!(page.attribute(children[0], "id"), Some("s1"));
        assert_eq!(page.attribute(children[2], "id"), Some("s1"));
    }

    #[test]
    fn no_slides_leaves_page_untouched() {
        let (mut page, ul, _) = page_with_slides(0);

        assert_eq!(pad_with_clones(&mut page, ul, &[]), None);
        assert!(page.element_children(ul).is_empty());
    }
}

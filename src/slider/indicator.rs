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

//! Position markers, one per real slide.

use crate::model::{Element, InsertPosition, NodeId, Page};

pub(crate) const ACTIVE_CLASS: &str = "active";

#[derive(Debug, Clone)]
pub(crate) struct Indicators {
    markers: Vec<NodeId>,
}

impl Indicators {
    /// Appends a marker wrapper holding `count` buttons next to the slide
    /// container.
    pub(crate) fn build(
        page: &mut Page,
        slide_wrapper: NodeId,
        count: usize,
        wrapper_class: &str,
    ) -> Self {
        let host = page.parent(slide_wrapper).unwrap_or(page.root());
        let wrapper = page.insert(
            host,
            &Element::new("div").with_attr("class", wrapper_class),
            InsertPosition::BeforeEnd,
        );
        let markers = (0..count)
            .map(|_| page.insert(wrapper, &Element::new("button"), InsertPosition::BeforeEnd))
            .collect();

        Self { markers }
    }

    pub(crate) fn markers(&self) -> &[NodeId] {
        &self.markers
    }

    /// Resolves a clicked element to the ordinal of the marker containing it.
    pub(crate) fn marker_at(&self, page: &Page, target: NodeId) -> Option<usize> {
        self.markers
            .iter()
            .position(|&marker| page.is_within(target, marker))
    }

    /// Flags the marker of `real_ordinal` active and clears the others.
    pub(crate) fn sync(&self, page: &mut Page, real_ordinal: Option<usize>) {
        for (n, &marker) in self.markers.iter().enumerate() {
            page.remove_class(marker, ACTIVE_CLASS);
            if real_ordinal == Some(n) {
                page.add_class(marker, ACTIVE_CLASS);
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn active(&self, page: &Page) -> Option<usize> {
        self.markers
            .iter()
            .position(|&marker| page.has_class(marker, ACTIVE_CLASS))
    }
}

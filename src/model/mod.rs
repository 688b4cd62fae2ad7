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

//! Host document model.
//!
//! This module defines the abstract element tree the slider operates on. A
//! detached tree of [`Node`]s is a plain value that can be copied and inspected
//! freely, while a [`Page`] holds the live, attached elements that the slider
//! reads from and writes visual state to.
//!
//! # Organization
//!
//! * [`page`]: The arena-backed live document with stable [`NodeId`] handles.
//! * [`selector`]: A small CSS-like selector engine used to locate elements.

pub(crate) mod page;
pub(crate) mod selector;

pub(crate) use page::{InsertPosition, NodeId, Page};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Node {
    Element(Element),
    Text(String),
}

/// A detached element with its attributes and child nodes.
#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct Element {
    pub(crate) tag: String,
    pub(crate) attributes: Vec<(String, String)>,
    pub(crate) children: Vec<Node>,
}

impl Element {
    pub(crate) fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attributes: vec![],
            children: vec![],
        }
    }

    pub(crate) fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub(crate) fn with_child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub(crate) fn with_text(mut self, text: &str) -> Self {
        self.children.push(Node::Text(text.to_string()));
        self
    }

    #[cfg(test)]
    pub(crate) fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub(crate) fn set_attribute(&mut self, name: &str, value: &str) {
        match self.attributes.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.attributes.push((name.to_string(), value.to_string())),
        }
    }
}

/// Produces a deep structural copy of an element.
///
/// All attributes are carried over, child elements are copied recursively and
/// text nodes are kept unless they contain only whitespace. The copy is built
/// bottom-up: children first, then the element that owns them.
pub(crate) fn deep_copy(element: &Element) -> Element {
    let children = element
        .children
        .iter()
        .filter_map(|child| match child {
            Node::Text(text) if text.trim().is_empty() => None,
            Node::Text(text) => Some(Node::Text(text.clone())),
            Node::Element(el) => Some(Node::Element(deep_copy(el))),
        })
        .collect();

    Element {
        tag: element.tag.to_ascii_lowercase(),
        attributes: element.attributes.clone(),
        children,
    }
}

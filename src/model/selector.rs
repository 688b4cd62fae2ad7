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

//! CSS-like element selectors.
//!
//! Supports compound selectors built from an optional tag name (or `*`), an
//! optional `#id` and any number of `.class` parts, joined by descendant
//! (whitespace) or child (`>`) combinators, e.g. `#slider > ul > *` or
//! `.product-media .media-logos .m-item`.

use thiserror::Error;

use crate::model::{NodeId, Page};

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum SelectorError {
    #[error("empty selector")]
    Empty,
    #[error("invalid selector `{0}`")]
    Invalid(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Combinator {
    Descendant,
    Child,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Selector {
    // Each part carries its relation to the part before it; the first
    // combinator is unused.
    parts: Vec<(Combinator, Compound)>,
}

impl Selector {
    pub(crate) fn parse(input: &str) -> Result<Self, SelectorError> {
        let spaced = input.replace('>', " > ");
        let mut parts = Vec::new();
        let mut combinator = None;

        for token in spaced.split_whitespace() {
            if token == ">" {
                if parts.is_empty() || combinator.is_some() {
                    return Err(SelectorError::Invalid(input.to_string()));
                }
                combinator = Some(Combinator::Child);
                continue;
            }
            let compound = Compound::parse(token)
                .ok_or_else(|| SelectorError::Invalid(input.to_string()))?;
            parts.push((combinator.take().unwrap_or(Combinator::Descendant), compound));
        }

        if combinator.is_some() {
            return Err(SelectorError::Invalid(input.to_string()));
        }
        if parts.is_empty() {
            return Err(SelectorError::Empty);
        }
        Ok(Self { parts })
    }

    /// Returns true if the element matches this selector, taking its
    /// ancestors in the page into account.
    pub(crate) fn matches(&self, page: &Page, node: NodeId) -> bool {
        self.matches_from(page, node, self.parts.len() - 1)
    }

    fn matches_from(&self, page: &Page, node: NodeId, i: usize) -> bool {
        let (combinator, compound) = &self.parts[i];
        if !compound.matches(page, node) {
            return false;
        }
        if i == 0 {
            return true;
        }

        match combinator {
            Combinator::Child => page
                .parent(node)
                .is_some_and(|parent| self.matches_from(page, parent, i - 1)),
            Combinator::Descendant => {
                let mut current = page.parent(node);
                while let Some(ancestor) = current {
                    if self.matches_from(page, ancestor, i - 1) {
                        return true;
                    }
                    current = page.parent(ancestor);
                }
                false
            }
        }
    }
}

impl Compound {
    fn parse(token: &str) -> Option<Self> {
        let is_marker = |c: char| c == '#' || c == '.';
        let mut compound = Compound::default();

        let tag_end = token.find(is_marker).unwrap_or(token.len());
        let tag = &token[..tag_end];
        if !tag.is_empty() && tag != "*" {
            if !is_ident(tag) {
                return None;
            }
            compound.tag = Some(tag.to_ascii_lowercase());
        }

        let mut rest = &token[tag_end..];
        while let Some(marker) = rest.chars().next() {
            let body = &rest[marker.len_utf8()..];
            let end = body.find(is_marker).unwrap_or(body.len());
            let name = &body[..end];
            if !is_ident(name) {
                return None;
            }
            match marker {
                '#' if compound.id.is_none() => compound.id = Some(name.to_string()),
                '.' => compound.classes.push(name.to_string()),
                _ => return None,
            }
            rest = &body[end..];
        }

        Some(compound)
    }

    fn matches(&self, page: &Page, node: NodeId) -> bool {
        let Some(tag) = page.tag(node) else {
            return false;
        };
        if self.tag.as_deref().is_some_and(|t| t != tag) {
            return false;
        }
        if let Some(id) = &self.id {
            if page.attribute(node, "id") != Some(id.as_str()) {
                return false;
            }
        }
        self.classes.iter().all(|class| page.has_class(node, class))
    }
}

fn is_ident(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

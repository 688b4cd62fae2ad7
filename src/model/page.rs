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

//! The live host document.
//!
//! A [`Page`] stores every attached node in an arena and hands out [`NodeId`]
//! handles that stay valid as siblings are inserted around them. Besides
//! attributes, elements carry inline style properties and an optional client
//! width reported by the host, which is all the visual state the slider
//! needs.

use std::collections::{BTreeMap, HashMap};

use crate::model::{
    Element, Node,
    selector::{Selector, SelectorError},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct NodeId(usize);

/// Where a node is inserted relative to its new parent's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InsertPosition {
    AfterBegin,
    BeforeEnd,
}

#[derive(Debug, Clone)]
enum NodeKind {
    Element {
        tag: String,
        attributes: Vec<(String, String)>,
        style: BTreeMap<String, String>,
    },
    Text(String),
}

#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Debug, Clone)]
pub(crate) struct Page {
    nodes: Vec<NodeData>,
    root: NodeId,
    client_widths: HashMap<NodeId, f64>,
}

impl Page {
    pub(crate) fn new() -> Self {
        let body = NodeData {
            kind: NodeKind::Element {
                tag: "body".to_string(),
                attributes: vec![],
                style: BTreeMap::new(),
            },
            parent: None,
            children: vec![],
        };
        Self {
            nodes: vec![body],
            root: NodeId(0),
            client_widths: HashMap::new(),
        }
    }

    pub(crate) fn root(&self) -> NodeId {
        self.root
    }

    /// Materialises a detached element tree under `parent` and returns the
    /// handle of the new top-level element.
    pub(crate) fn insert(
        &mut self,
        parent: NodeId,
        element: &Element,
        position: InsertPosition,
    ) -> NodeId {
        let id = self.materialise(&Node::Element(element.clone()), parent);
        let children = &mut self.nodes[parent.0].children;
        match position {
            InsertPosition::AfterBegin => children.insert(0, id),
            InsertPosition::BeforeEnd => children.push(id),
        }
        id
    }

    fn materialise(&mut self, node: &Node, parent: NodeId) -> NodeId {
        let id = NodeId(self.nodes.len());
        let (kind, children): (NodeKind, &[Node]) = match node {
            Node::Text(text) => (NodeKind::Text(text.clone()), &[]),
            Node::Element(el) => (
                NodeKind::Element {
                    tag: el.tag.to_ascii_lowercase(),
                    attributes: el.attributes.clone(),
                    style: BTreeMap::new(),
                },
                &el.children[..],
            ),
        };
        self.nodes.push(NodeData {
            kind,
            parent: Some(parent),
            children: vec![],
        });

        for child in children {
            let child_id = self.materialise(child, id);
            self.nodes[id.0].children.push(child_id);
        }
        id
    }

    /// Reads an attached element back into a detached tree. Inline styles are
    /// not part of the snapshot.
    pub(crate) fn snapshot(&self, id: NodeId) -> Option<Element> {
        let NodeKind::Element {
            tag, attributes, ..
        } = &self.nodes.get(id.0)?.kind
        else {
            return None;
        };

        let children = self.nodes[id.0]
            .children
            .iter()
            .filter_map(|&child| match &self.nodes[child.0].kind {
                NodeKind::Text(text) => Some(Node::Text(text.clone())),
                NodeKind::Element { .. } => self.snapshot(child).map(Node::Element),
            })
            .collect();

        Some(Element {
            tag: tag.clone(),
            attributes: attributes.clone(),
            children,
        })
    }

    pub(crate) fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0)?.parent
    }

    pub(crate) fn tag(&self, id: NodeId) -> Option<&str> {
        match &self.nodes.get(id.0)?.kind {
            NodeKind::Element { tag, .. } => Some(tag),
            NodeKind::Text(_) => None,
        }
    }

    pub(crate) fn element_children(&self, id: NodeId) -> Vec<NodeId> {
        self.nodes
            .get(id.0)
            .map(|n| {
                n.children
                    .iter()
                    .copied()
                    .filter(|&c| self.tag(c).is_some())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns true if `id` is `ancestor` or lies somewhere beneath it.
    pub(crate) fn is_within(&self, id: NodeId, ancestor: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.parent(node);
        }
        false
    }

    /// Concatenated text of every text node below `id`, in document order.
    pub(crate) fn text_content(&self, id: NodeId) -> String {
        let mut text = String::new();
        self.collect_text(id, &mut text);
        text
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        let Some(node) = self.nodes.get(id.0) else {
            return;
        };
        match &node.kind {
            NodeKind::Text(t) => out.push_str(t),
            NodeKind::Element { .. } => {
                for &child in &node.children {
                    self.collect_text(child, out);
                }
            }
        }
    }

    pub(crate) fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        match &self.nodes.get(id.0)?.kind {
            NodeKind::Element { attributes, .. } => attributes
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.as_str()),
            NodeKind::Text(_) => None,
        }
    }

    pub(crate) fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        if let Some(NodeKind::Element { attributes, .. }) =
            self.nodes.get_mut(id.0).map(|n| &mut n.kind)
        {
            match attributes.iter_mut().find(|(n, _)| n == name) {
                Some((_, v)) => *v = value.to_string(),
                None => attributes.push((name.to_string(), value.to_string())),
            }
        }
    }

    pub(crate) fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.attribute(id, "class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    pub(crate) fn add_class(&mut self, id: NodeId, class: &str) {
        if self.tag(id).is_none() || self.has_class(id, class) {
            return;
        }
        let classes = match self.attribute(id, "class") {
            Some(existing) if !existing.trim().is_empty() => {
                format!("{} {}", existing.trim(), class)
            }
            _ => class.to_string(),
        };
        self.set_attribute(id, "class", &classes);
    }

    pub(crate) fn remove_class(&mut self, id: NodeId, class: &str) {
        if !self.has_class(id, class) {
            return;
        }
        let classes = self
            .attribute(id, "class")
            .unwrap_or_default()
            .split_whitespace()
            .filter(|c| *c != class)
            .collect::<Vec<_>>()
            .join(" ");
        self.set_attribute(id, "class", &classes);
    }

    pub(crate) fn style(&self, id: NodeId, property: &str) -> Option<&str> {
        match &self.nodes.get(id.0)?.kind {
            NodeKind::Element { style, .. } => style.get(property).map(String::as_str),
            NodeKind::Text(_) => None,
        }
    }

    /// Sets an inline style property; an empty value removes it.
    pub(crate) fn set_style(&mut self, id: NodeId, property: &str, value: &str) {
        if let Some(NodeKind::Element { style, .. }) =
            self.nodes.get_mut(id.0).map(|n| &mut n.kind)
        {
            if value.is_empty() {
                style.remove(property);
            } else {
                style.insert(property.to_string(), value.to_string());
            }
        }
    }

    pub(crate) fn client_width(&self, id: NodeId) -> f64 {
        self.client_widths.get(&id).copied().unwrap_or(0.0)
    }

    pub(crate) fn set_client_width(&mut self, id: NodeId, width: f64) {
        self.client_widths.insert(id, width);
    }

    pub(crate) fn get_element_by_id(&self, element_id: &str) -> Option<NodeId> {
        self.descendants(self.root)
            .into_iter()
            .find(|&n| self.attribute(n, "id") == Some(element_id))
    }

    /// Returns the first element below `scope` (or anywhere in the page) that
    /// matches `selector`, in document order.
    pub(crate) fn query_selector(
        &self,
        scope: Option<NodeId>,
        selector: &str,
    ) -> Result<Option<NodeId>, SelectorError> {
        Ok(self.query_selector_all(scope, selector)?.into_iter().next())
    }

    pub(crate) fn query_selector_all(
        &self,
        scope: Option<NodeId>,
        selector: &str,
    ) -> Result<Vec<NodeId>, SelectorError> {
        let selector = Selector::parse(selector)?;
        let scope = scope.unwrap_or(self.root);
        Ok(self
            .descendants(scope)
            .into_iter()
            .filter(|&n| selector.matches(self, n))
            .collect())
    }

    // Element descendants of `id` in document order, excluding `id` itself.
    fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut found = Vec::new();
        let mut stack: Vec<NodeId> = self.element_children(id).into_iter().rev().collect();
        while let Some(node) = stack.pop() {
            found.push(node);
            stack.extend(self.element_children(node).into_iter().rev());
        }
        found
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

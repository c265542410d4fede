//! Arena of element nodes forming the page tree.

use std::collections::HashMap;

use crate::dom::selector::Selector;
use crate::dom::{Element, NodeId};
use crate::error::Result;

/// Owns every element of a page and the tree structure between them.
///
/// Elements are addressed by [`NodeId`] handles so that behaviors can hold
/// on to nodes across callbacks without borrowing the tree.
#[derive(Debug, Default)]
pub struct Document {
    nodes: HashMap<NodeId, Element>,
    next_id: u64,
    root: Option<NodeId>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detached element.
    pub fn create_element(&mut self, tag: impl Into<String>) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, Element::new(tag));
        if self.root.is_none() {
            self.root = Some(id);
        }
        id
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn get(&self, id: NodeId) -> Option<&Element> {
        self.nodes.get(&id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        self.nodes.get_mut(&id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Append `child` as the last child of `parent`, detaching it from its
    /// previous parent first. Appending a node under itself or one of its
    /// own descendants would form a cycle, so that is a no-op.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if !self.nodes.contains_key(&parent) || !self.nodes.contains_key(&child) {
            return;
        }
        if self.would_create_cycle(parent, child) {
            tracing::warn!("refusing to append {child} under its own descendant {parent}");
            return;
        }
        self.detach(child);
        if let Some(el) = self.nodes.get_mut(&child) {
            el.parent = Some(parent);
        }
        if let Some(el) = self.nodes.get_mut(&parent) {
            el.children.push(child);
        }
    }

    /// A cycle exists if `child` is `parent` itself or already an ancestor
    /// of it.
    fn would_create_cycle(&self, parent: NodeId, child: NodeId) -> bool {
        let mut cursor = Some(parent);
        while let Some(id) = cursor {
            if id == child {
                return true;
            }
            cursor = self.nodes.get(&id).and_then(|el| el.parent);
        }
        false
    }

    fn detach(&mut self, id: NodeId) {
        let Some(parent) = self.nodes.get(&id).and_then(|el| el.parent) else {
            return;
        };
        if let Some(el) = self.nodes.get_mut(&parent) {
            el.children.retain(|&c| c != id);
        }
        if let Some(el) = self.nodes.get_mut(&id) {
            el.parent = None;
        }
    }

    /// First element with the given tag, in document order.
    pub fn find_first(&self, tag: &str) -> Option<NodeId> {
        self.walk().into_iter().find(|&id| {
            self.get(id)
                .is_some_and(|el| el.tag.eq_ignore_ascii_case(tag))
        })
    }

    /// The `<body>` element, if the tree has one.
    pub fn body(&self) -> Option<NodeId> {
        self.find_first("body")
    }

    /// First element whose `id` attribute equals `id`, in document order.
    pub fn get_by_id(&self, id: &str) -> Option<NodeId> {
        self.walk()
            .into_iter()
            .find(|&node| self.get(node).and_then(Element::dom_id) == Some(id))
    }

    /// All nodes reachable from the root, preorder.
    pub fn walk(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let Some(root) = self.root else {
            return out;
        };
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            out.push(id);
            if let Some(el) = self.nodes.get(&id) {
                for &child in el.children.iter().rev() {
                    stack.push(child);
                }
            }
        }
        out
    }

    /// Nodes matching a pre-parsed selector, in document order.
    pub fn select(&self, selector: &Selector) -> Vec<NodeId> {
        self.walk()
            .into_iter()
            .filter(|&id| selector.matches(self, id))
            .collect()
    }

    pub fn select_first(&self, selector: &Selector) -> Option<NodeId> {
        self.walk()
            .into_iter()
            .find(|&id| selector.matches(self, id))
    }

    pub fn query_selector(&self, source: &str) -> Result<Option<NodeId>> {
        Ok(self.select_first(&Selector::parse(source)?))
    }

    pub fn query_selector_all(&self, source: &str) -> Result<Vec<NodeId>> {
        Ok(self.select(&Selector::parse(source)?))
    }

    /// Deepest element whose rect contains the viewport point, children
    /// taking precedence over their parent and later siblings over earlier
    /// ones.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<NodeId> {
        self.root.and_then(|root| self.hit_test_from(root, x, y))
    }

    fn hit_test_from(&self, id: NodeId, x: f32, y: f32) -> Option<NodeId> {
        let el = self.get(id)?;
        let from_child = el
            .children
            .iter()
            .rev()
            .find_map(|&child| self.hit_test_from(child, x, y));
        if from_child.is_some() {
            return from_child;
        }
        match el.rect {
            Some(rect) if rect.contains(x, y) => Some(id),
            _ => None,
        }
    }
}

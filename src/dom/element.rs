//! Element nodes.

use std::collections::BTreeMap;
use std::fmt;

use crate::dom::Rect;

/// Handle to a node in a [`Document`](crate::dom::Document) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u64);

impl NodeId {
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single element node: tag, attributes, class list, inline style and
/// authored geometry.
///
/// Classes keep set semantics (adding a class twice stores it once) while
/// inline style declarations keep insertion order, matching the class-list
/// and style objects the page scripts manipulate.
#[derive(Debug, Clone)]
pub struct Element {
    pub tag: String,
    classes: Vec<String>,
    attrs: BTreeMap<String, String>,
    styles: Vec<(String, String)>,
    /// Text directly inside this element, child elements excluded.
    pub text: String,
    pub rect: Option<Rect>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            classes: Vec::new(),
            attrs: BTreeMap::new(),
            styles: Vec::new(),
            text: String::new(),
            rect: None,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// The `id` attribute, if any.
    pub fn dom_id(&self) -> Option<&str> {
        self.attr("id")
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class. Adding one the element already carries is a no-op.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_owned());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match name.as_str() {
            "class" => {
                self.classes = value.split_ascii_whitespace().map(str::to_owned).collect();
            }
            "data-rect" => {
                self.rect = Rect::from_attr(&value);
                self.attrs.insert(name, value);
            }
            _ => {
                self.attrs.insert(name, value);
            }
        }
    }

    /// Remove an attribute, mirroring the [`set_attr`](Self::set_attr)
    /// special cases: removing `class` clears the class list, removing
    /// `data-rect` drops the parsed geometry with it.
    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        match name {
            "class" => {
                if self.classes.is_empty() {
                    return None;
                }
                let previous = self.class_attr();
                self.classes.clear();
                Some(previous)
            }
            "data-rect" => {
                self.rect = None;
                self.attrs.remove(name)
            }
            _ => self.attrs.remove(name),
        }
    }

    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Set an inline style declaration. A property keeps its original
    /// position when reassigned, new properties append.
    pub fn set_style(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        if let Some(slot) = self.styles.iter_mut().find(|(p, _)| *p == property) {
            slot.1 = value;
        } else {
            self.styles.push((property, value));
        }
    }

    pub fn styles(&self) -> &[(String, String)] {
        &self.styles
    }

    /// Serialized form of the class list, for dumps.
    pub fn class_attr(&self) -> String {
        self.classes.join(" ")
    }
}

//! CSS selector subset used by the page scripts.
//!
//! Supports compound selectors of tag, `#id` and `.class` parts joined by
//! descendant (whitespace) and child (`>`) combinators. That covers every
//! selector the behaviors issue; anything outside the subset is rejected
//! rather than silently matching nothing.

use crate::dom::{Document, Element, NodeId};
use crate::error::{Error, Result};

/// A parsed selector, reusable across queries.
#[derive(Debug, Clone)]
pub struct Selector {
    parts: Vec<Part>,
    source: String,
}

#[derive(Debug, Clone)]
struct Part {
    /// Relation to the part on its left. Unused for the first part.
    combinator: Combinator,
    simple: Simple,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Combinator {
    Descendant,
    Child,
}

#[derive(Debug, Clone, Default)]
struct Simple {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl Selector {
    pub fn parse(source: &str) -> Result<Self> {
        let mut parts = Vec::new();
        let mut combinator = Combinator::Descendant;
        let mut pending_child = false;
        for token in tokenize(source) {
            if token == ">" {
                if pending_child || parts.is_empty() {
                    return Err(Error::Selector(source.to_owned()));
                }
                pending_child = true;
                combinator = Combinator::Child;
                continue;
            }
            parts.push(Part {
                combinator,
                simple: Simple::parse(token).ok_or_else(|| Error::Selector(source.to_owned()))?,
            });
            combinator = Combinator::Descendant;
            pending_child = false;
        }
        if parts.is_empty() || pending_child {
            return Err(Error::Selector(source.to_owned()));
        }
        Ok(Self {
            parts,
            source: source.to_owned(),
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether `node` matches the full selector, checked right to left.
    pub fn matches(&self, doc: &Document, node: NodeId) -> bool {
        self.matches_part(doc, node, self.parts.len() - 1)
    }

    fn matches_part(&self, doc: &Document, node: NodeId, idx: usize) -> bool {
        let Some(el) = doc.get(node) else {
            return false;
        };
        if !self.parts[idx].simple.matches(el) {
            return false;
        }
        if idx == 0 {
            return true;
        }
        match self.parts[idx].combinator {
            Combinator::Child => match el.parent() {
                Some(parent) => self.matches_part(doc, parent, idx - 1),
                None => false,
            },
            Combinator::Descendant => {
                let mut cursor = el.parent();
                while let Some(ancestor) = cursor {
                    if self.matches_part(doc, ancestor, idx - 1) {
                        return true;
                    }
                    cursor = doc.get(ancestor).and_then(Element::parent);
                }
                false
            }
        }
    }
}

impl Simple {
    /// Parse one compound like `a`, `.actions`, `li.item` or `a#home.cta`.
    fn parse(token: &str) -> Option<Self> {
        let mut simple = Self::default();
        let mut rest = token;
        if let Some(end) = rest.find(['.', '#']) {
            if end > 0 {
                simple.tag = Some(rest[..end].to_ascii_lowercase());
            }
            rest = &rest[end..];
        } else {
            simple.tag = Some(rest.to_ascii_lowercase());
            rest = "";
        }
        while !rest.is_empty() {
            let marker = rest.as_bytes()[0];
            let body = &rest[1..];
            let end = body.find(['.', '#']).unwrap_or(body.len());
            let name = &body[..end];
            if name.is_empty() {
                return None;
            }
            match marker {
                b'.' => simple.classes.push(name.to_owned()),
                b'#' => {
                    if simple.id.is_some() {
                        return None;
                    }
                    simple.id = Some(name.to_owned());
                }
                _ => return None,
            }
            rest = &body[end..];
        }
        let valid = |name: &str| {
            !name.is_empty()
                && name
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        };
        if simple.tag.as_deref().is_some_and(|t| !valid(t))
            || simple.id.as_deref().is_some_and(|i| !valid(i))
            || simple.classes.iter().any(|c| !valid(c))
        {
            return None;
        }
        Some(simple)
    }

    fn matches(&self, el: &Element) -> bool {
        if let Some(tag) = &self.tag
            && el.tag != *tag
        {
            return false;
        }
        if let Some(id) = &self.id
            && el.dom_id() != Some(id.as_str())
        {
            return false;
        }
        self.classes.iter().all(|class| el.has_class(class))
    }
}

/// Split a selector into compound tokens and `>` combinators.
fn tokenize(source: &str) -> impl Iterator<Item = &str> {
    source
        .split_whitespace()
        .flat_map(|chunk| {
            let mut pieces = Vec::new();
            let mut rest = chunk;
            while let Some(pos) = rest.find('>') {
                if pos > 0 {
                    pieces.push(&rest[..pos]);
                }
                pieces.push(">");
                rest = &rest[pos + 1..];
            }
            if !rest.is_empty() {
                pieces.push(rest);
            }
            pieces
        })
}

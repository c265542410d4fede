//! Markup loading.
//!
//! Pages are authored as XHTML-flavored markup and parsed into a
//! [`Document`] with `quick-xml`. Two conventions matter beyond plain
//! structure: a `data-rect="x,y,w,h"` attribute declares the element's
//! viewport geometry, and whitespace inside text runs collapses the way
//! rendered HTML collapses it.

pub mod entities;

use std::fs;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event as XmlEvent};

use crate::dom::{Document, NodeId};
use crate::error::{Error, Result};

/// Parse a full document from markup source.
pub fn parse_document(source: &str) -> Result<Document> {
    let mut reader = Reader::from_str(source);
    let mut doc = Document::new();
    let mut stack: Vec<NodeId> = Vec::new();
    loop {
        match reader.read_event()? {
            XmlEvent::Start(e) => {
                let id = open_element(&mut doc, &stack, &e)?;
                stack.push(id);
            }
            XmlEvent::Empty(e) => {
                open_element(&mut doc, &stack, &e)?;
            }
            XmlEvent::End(_) => {
                stack.pop();
            }
            XmlEvent::Text(e) => {
                let raw = String::from_utf8_lossy(e.as_ref()).into_owned();
                append_text(&mut doc, &stack, &entities::decode_text(&raw));
            }
            XmlEvent::CData(e) => {
                let raw = String::from_utf8_lossy(e.as_ref()).into_owned();
                append_text(&mut doc, &stack, &raw);
            }
            XmlEvent::Comment(_)
            | XmlEvent::Decl(_)
            | XmlEvent::PI(_)
            | XmlEvent::DocType(_) => {}
            XmlEvent::Eof => break,
        }
    }
    if doc.root().is_none() {
        return Err(Error::Other("markup contains no elements".to_owned()));
    }
    normalize_text(&mut doc);
    Ok(doc)
}

/// Read and parse a markup file.
pub fn load_document(path: &Path) -> Result<Document> {
    let source = fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), bytes = source.len(), "loading markup");
    parse_document(&source)
}

fn open_element(doc: &mut Document, stack: &[NodeId], e: &BytesStart) -> Result<NodeId> {
    let tag = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
    let id = doc.create_element(tag);
    if let Some(&parent) = stack.last() {
        doc.append_child(parent, id);
    }
    for attr in e.attributes() {
        let attr = attr?;
        let name = String::from_utf8_lossy(attr.key.local_name().as_ref()).to_ascii_lowercase();
        let raw = String::from_utf8_lossy(&attr.value).into_owned();
        let value = entities::decode_text(&raw);
        if let Some(el) = doc.get_mut(id) {
            el.set_attr(name, value);
        }
    }
    Ok(id)
}

fn append_text(doc: &mut Document, stack: &[NodeId], piece: &str) {
    if piece.is_empty() {
        return;
    }
    if let Some(&current) = stack.last()
        && let Some(el) = doc.get_mut(current)
    {
        el.text.push_str(piece);
    }
}

/// Collapse whitespace runs in every element's text, HTML-style.
fn normalize_text(doc: &mut Document) {
    for id in doc.walk() {
        if let Some(el) = doc.get_mut(id) {
            let collapsed = el.text.split_whitespace().collect::<Vec<_>>().join(" ");
            el.text = collapsed;
        }
    }
}

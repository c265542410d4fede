//! Minimal retained element tree.
//!
//! Just enough of a document model for the page behaviors: elements with
//! tags, attributes, class lists, inline styles and authored geometry, plus
//! the selector queries the scripts run against them. No layout engine
//! hides behind this; geometry is whatever the markup declares.

mod document;
mod element;
mod geometry;
pub mod selector;

pub use document::Document;
pub use element::{Element, NodeId};
pub use geometry::Rect;
pub use selector::Selector;

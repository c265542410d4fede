//! Page tree dump and diagnostic helpers.

use crate::dom::{Document, Element, NodeId};
use crate::page::Page;

/// Render the page tree as an indented listing, one element per line.
///
/// Lines carry the element in selector notation (`tag#id.class`), its
/// authored rect, remaining attributes, inline style and text. Inline style
/// declarations appear in assignment order.
pub fn dump_tree(page: &Page) -> String {
    dump_tree_with(page, None, false)
}

/// [`dump_tree`] with display options. `filter` keeps only lines whose
/// selector notation contains the substring, case-insensitive, while still
/// descending into children. `visible_only` prunes every element carrying
/// the `hidden` class, subtree included.
pub fn dump_tree_with(page: &Page, filter: Option<&str>, visible_only: bool) -> String {
    page.with_state(|state| {
        let mut out = String::new();
        if let Some(root) = state.dom.root() {
            write_node(&mut out, &state.dom, root, 0, filter, visible_only);
        }
        out
    })
}

/// Captured console output with styling stripped, one line per entry.
pub fn dump_console(page: &Page) -> String {
    page.console_entries()
        .iter()
        .map(|entry| entry.plain_text())
        .collect::<Vec<_>>()
        .join("\n")
}

fn write_node(
    out: &mut String,
    doc: &Document,
    id: NodeId,
    depth: usize,
    filter: Option<&str>,
    visible_only: bool,
) {
    let Some(el) = doc.get(id) else { return };
    if visible_only && el.has_class("hidden") {
        return;
    }
    let matches_filter = filter
        .map(|f| selector_notation(el).to_lowercase().contains(&f.to_lowercase()))
        .unwrap_or(true);
    if matches_filter {
        out.push_str(&"  ".repeat(depth));
        out.push_str(&format_element(el));
        out.push('\n');
    }
    for &child in el.children() {
        write_node(out, doc, child, depth + 1, filter, visible_only);
    }
}

fn selector_notation(el: &Element) -> String {
    let mut s = String::new();
    s.push_str(&el.tag);
    if let Some(dom_id) = el.dom_id() {
        s.push('#');
        s.push_str(dom_id);
    }
    for class in el.classes() {
        s.push('.');
        s.push_str(class);
    }
    s
}

fn format_element(el: &Element) -> String {
    let mut line = selector_notation(el);
    if let Some(rect) = el.rect {
        line.push_str(&format!(
            " ({},{} {}x{})",
            rect.x, rect.y, rect.width, rect.height
        ));
    }
    for (name, value) in el.attrs() {
        // class, id and data-rect already show in structured form
        if matches!(name, "class" | "id" | "data-rect") {
            continue;
        }
        line.push_str(&format!(" {name}={value:?}"));
    }
    if !el.styles().is_empty() {
        let style = el
            .styles()
            .iter()
            .map(|(p, v)| format!("{p}: {v}"))
            .collect::<Vec<_>>()
            .join("; ");
        line.push_str(&format!(" style={style:?}"));
    }
    if !el.text.is_empty() {
        line.push_str(&format!(" text={:?}", el.text));
    }
    line
}

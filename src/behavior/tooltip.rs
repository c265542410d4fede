//! Hover tooltip for the hero action links.
//!
//! One shared tooltip element serves every link. It is created lazily,
//! well after page load, and the hover handlers simply no-op until it
//! exists. On touch devices the whole behavior stays off since hover
//! carries no meaning there.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crate::dom::NodeId;
use crate::event::{EventKind, Target};
use crate::page::Page;

/// Delay before the tooltip element is created. Tuned to land after the
/// hero entrance animation finishes so the element never flashes through
/// the transition.
pub const CREATE_DELAY: Duration = Duration::from_millis(3500);

pub const HERO_SELECTOR: &str = ".section-hero";
pub const ACTION_LINK_SELECTOR: &str = ".section-hero .actions > li > a";

/// Attribute carrying the hover text once it is migrated off `title`.
pub const TOOLTIP_ATTR: &str = "data-tooltip";

const TOOLTIP_CLASS: &str = "tooltip";
const HIDDEN_CLASS: &str = "hidden";

pub fn setup(page: &Page) {
    if page.device().supports_touch() {
        tracing::debug!("touch device, tooltip stays off");
        return;
    }

    // Both hover handlers watch this slot; the deferred creation step
    // fills it exactly once.
    let slot: Rc<Cell<Option<NodeId>>> = Rc::new(Cell::new(None));

    let created = Rc::clone(&slot);
    page.set_timeout(CREATE_DELAY, move |page| {
        let tooltip = page.create_element("div");
        page.add_class(tooltip, TOOLTIP_CLASS);
        page.add_class(tooltip, HIDDEN_CLASS);
        if let Ok(Some(hero)) = page.query_selector(HERO_SELECTOR) {
            page.append_child(hero, tooltip);
        }
        created.set(Some(tooltip));
        tracing::debug!("tooltip element created");
    });

    let links = page.query_selector_all(ACTION_LINK_SELECTOR).unwrap_or_default();
    for link in links {
        migrate_title(page, link);

        let on_enter = Rc::clone(&slot);
        page.add_listener(
            Target::Node(link),
            EventKind::MouseEnter,
            Rc::new(move |page, _| {
                let Some(tooltip) = on_enter.get() else {
                    return;
                };
                show(page, tooltip, link);
            }),
        );

        let on_leave = Rc::clone(&slot);
        page.add_listener(
            Target::Node(link),
            EventKind::MouseLeave,
            Rc::new(move |page, _| {
                let Some(tooltip) = on_leave.get() else {
                    return;
                };
                page.add_class(tooltip, HIDDEN_CLASS);
            }),
        );
    }
}

/// Copy a link's advisory `title` into [`TOOLTIP_ATTR`] and drop the
/// original so the browser-native tooltip never competes with ours. Links
/// already carrying hover text keep it. Safe to run repeatedly.
fn migrate_title(page: &Page, link: NodeId) {
    let title = page.attr(link, "title").filter(|t| !t.is_empty());
    let existing = page.attr(link, TOOLTIP_ATTR).filter(|t| !t.is_empty());
    if let Some(title) = title
        && existing.is_none()
    {
        page.set_attr(link, TOOLTIP_ATTR, &title);
        page.remove_attr(link, "title");
    }
}

/// Fill and place the tooltip under `link`, then reveal it. Position is in
/// page coordinates, so the current scroll offset folds into the link's
/// viewport rect.
fn show(page: &Page, tooltip: NodeId, link: NodeId) {
    let rect = page.rect(link).unwrap_or_default();
    let text = page.attr(link, TOOLTIP_ATTR).unwrap_or_default();
    page.set_text(tooltip, &text);
    page.set_style(tooltip, "top", &format!("{}px", rect.bottom() + page.scroll_y()));
    page.set_style(tooltip, "left", &format!("{}px", rect.left() + page.scroll_x()));
    page.remove_class(tooltip, HIDDEN_CLASS);
}

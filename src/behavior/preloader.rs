//! Preload transition flag.

use std::rc::Rc;

use crate::event::{EventKind, Target};
use crate::page::Page;

/// Class the stylesheet keys the entrance transition off.
pub const PRELOAD_COMPLETE_CLASS: &str = "preload-complete";

/// Flag the body once every page resource has arrived. The class is added
/// exactly once and never removed for the rest of the session.
pub fn setup(page: &Page) {
    page.add_listener_once(
        Target::Window,
        EventKind::Load,
        Rc::new(|page, _| {
            if let Some(body) = page.body() {
                page.add_class(body, PRELOAD_COMPLETE_CLASS);
                tracing::debug!("preload complete");
            }
        }),
    );
}

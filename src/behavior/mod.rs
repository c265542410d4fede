//! The page's behavior layer.
//!
//! Three independent behaviors, wired up exactly once when the document
//! becomes ready: the preloader flag, the hover tooltip and the console
//! credits. None of them talks to the others.

pub mod credits;
pub mod preloader;
pub mod tooltip;

use std::rc::Rc;

use crate::event::{EventKind, Target};
use crate::page::Page;

/// Register the startup hook. The individual setups run when the page
/// signals document-ready, mirroring how the behaviors attach on a real
/// page load.
pub fn install(page: &Page) {
    tracing::debug!("installing page behaviors");
    page.add_listener_once(
        Target::Document,
        EventKind::DomContentLoaded,
        Rc::new(|page, _| {
            preloader::setup(page);
            tooltip::setup(page);
            credits::setup(page);
        }),
    );
}

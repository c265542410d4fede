//! Shared test helpers.

use identity_page_sim::behavior::tooltip::ACTION_LINK_SELECTOR;
use identity_page_sim::{DeviceProfile, NodeId, Page};

/// Hero page with three action links: one with an advisory title, one with
/// a longer title, one already carrying hover text and no title at all.
#[allow(dead_code)]
pub const HERO_MARKUP: &str = r#"<html>
  <body>
    <section class="section-hero" data-rect="0,0,1280,700">
      <h1>Fr&auml;nz Friederes</h1>
      <ul class="actions">
        <li><a href="mailto:x" title="Email me" data-rect="488,520,96,28">Email</a></li>
        <li><a href="/cv" title="Curriculum vitae" data-rect="592,520,96,28">Resume</a></li>
        <li><a href="/gh" data-tooltip="Projects" data-rect="696,520,96,28">GitHub</a></li>
      </ul>
    </section>
  </body>
</html>"#;

/// Same page without the hero section, for the inert-tooltip path.
#[allow(dead_code)]
pub const HEROLESS_MARKUP: &str = r#"<html>
  <body>
    <section class="section-about">
      <p>Nothing to hover here.</p>
    </section>
  </body>
</html>"#;

#[allow(dead_code)]
pub fn desktop_page() -> Page {
    Page::from_markup(HERO_MARKUP, DeviceProfile::desktop()).expect("hero markup parses")
}

#[allow(dead_code)]
pub fn touch_page() -> Page {
    Page::from_markup(HERO_MARKUP, DeviceProfile::touch()).expect("hero markup parses")
}

/// Install the behaviors and play the load sequence, leaving timers alone.
#[allow(dead_code)]
pub fn boot(page: &Page) {
    identity_page_sim::behavior::install(page);
    page.fire_ready();
    page.fire_load();
}

#[allow(dead_code)]
pub fn action_links(page: &Page) -> Vec<NodeId> {
    page.query_selector_all(ACTION_LINK_SELECTOR)
        .expect("link selector parses")
}

#[allow(dead_code)]
pub fn tooltip_node(page: &Page) -> Option<NodeId> {
    page.query_selector("div.tooltip").expect("selector parses")
}

//! Tree dump tests.

mod common;

use common::boot;
use identity_page_sim::{dump, DeviceProfile, Page};
use insta::assert_snapshot;

const MARKUP: &str = r##"<html>
  <body>
    <section class="section-hero" data-rect="0,0,640,480">
      <ul class="actions">
        <li><a href="#" title="Say hello" data-rect="24,400,60,20">Email</a></li>
      </ul>
    </section>
  </body>
</html>"##;

fn page() -> Page {
    Page::from_markup(MARKUP, DeviceProfile::desktop()).unwrap()
}

#[test]
fn test_dump_of_freshly_parsed_tree() {
    let page = page();
    assert_snapshot!(dump::dump_tree(&page).trim_end(), @r##"
    html
      body
        section.section-hero (0,0 640x480)
          ul.actions
            li
              a (24,400 60x20) href="#" title="Say hello" text="Email"
    "##);
}

#[test]
fn test_dump_after_boot_and_hover() {
    let page = page();
    boot(&page);
    page.run_until_idle();
    let link = page.query_selector("a").unwrap().unwrap();
    page.hover(link);

    assert_snapshot!(dump::dump_tree(&page).trim_end(), @r##"
    html
      body.preload-complete
        section.section-hero (0,0 640x480)
          ul.actions
            li
              a (24,400 60x20) data-tooltip="Say hello" href="#" text="Email"
          div.tooltip style="top: 420px; left: 24px" text="Say hello"
    "##);
}

#[test]
fn test_dump_shows_hidden_tooltip_after_hover_out() {
    let page = page();
    boot(&page);
    page.run_until_idle();
    let link = page.query_selector("a").unwrap().unwrap();
    page.hover(link);
    page.clear_hover();

    let out = dump::dump_tree(&page);
    assert!(out.contains("div.tooltip.hidden"));
}

#[test]
fn test_visible_only_prunes_hidden_subtrees() {
    let page = page();
    boot(&page);
    page.run_until_idle();

    // tooltip exists but was never shown
    assert!(dump::dump_tree(&page).contains("div.tooltip.hidden"));
    let visible = dump::dump_tree_with(&page, None, true);
    assert!(!visible.contains("div.tooltip"));
    assert!(visible.contains("section.section-hero"));
}

#[test]
fn test_filter_keeps_matching_lines_at_their_depth() {
    let page = page();
    let out = dump::dump_tree_with(&page, Some("ACTIONS"), false);
    assert_eq!(out.lines().count(), 1);
    assert_eq!(out.trim(), "ul.actions");
    assert!(out.starts_with("      "), "depth in the full tree is kept");
}

#[test]
fn test_console_dump_lists_credits() {
    let page = page();
    boot(&page);

    assert_snapshot!(dump::dump_console(&page), @r"
    Designed & developed by Fränz Friederes: https://fraenz.frieder.es
    Animations seasoned by Daniel Zat: http://danielzat.com
    Source code under the MIT license: https://github.com/ffraenz/IdentityPage
    ");
}

//! Markup loading tests against the bundled demo page.

mod common;

use common::HERO_MARKUP;
use identity_page_sim::{markup, DeviceProfile, Error, Page};

const DEMO_PAGE: &str = include_str!("../src/demo_page.xhtml");

#[test]
fn test_demo_page_parses_with_entities_and_rects() {
    let doc = markup::parse_document(DEMO_PAGE).unwrap();

    let h1 = doc.query_selector("h1").unwrap().unwrap();
    assert_eq!(doc.get(h1).unwrap().text, "Fränz Friederes");

    let links = doc
        .query_selector_all(".section-hero .actions > li > a")
        .unwrap();
    assert_eq!(links.len(), 3);
    for link in &links {
        let el = doc.get(*link).unwrap();
        assert!(el.rect.is_some(), "every action link declares geometry");
        assert!(el.attr("title").is_some(), "demo links start with titles");
    }

    let footer = doc.query_selector("footer").unwrap().unwrap();
    assert_eq!(
        doc.get(footer).unwrap().children().len(),
        1,
        "footer wraps its text in a paragraph"
    );
    let p = doc.get(footer).unwrap().children()[0];
    assert!(doc.get(p).unwrap().text.starts_with("© 2017"));
}

#[test]
fn test_demo_page_has_exactly_one_hero() {
    let doc = markup::parse_document(DEMO_PAGE).unwrap();
    assert_eq!(doc.query_selector_all(".section-hero").unwrap().len(), 1);
    // the work section must not leak links into the hero selector
    assert!(doc
        .query_selector_all(".section-work .actions > li > a")
        .unwrap()
        .is_empty());
}

#[test]
fn test_load_document_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("page.xhtml");
    std::fs::write(&path, HERO_MARKUP).unwrap();

    let doc = markup::load_document(&path).unwrap();
    assert_eq!(doc.query_selector_all("li > a").unwrap().len(), 3);
}

#[test]
fn test_missing_file_is_an_io_error() {
    let err = markup::load_document(std::path::Path::new("/nonexistent/page.xhtml")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_invalid_selector_is_reported() {
    let page = Page::from_markup(HERO_MARKUP, DeviceProfile::desktop()).unwrap();
    let err = page.query_selector("a[href]").unwrap_err();
    assert!(matches!(err, Error::Selector(_)));
}

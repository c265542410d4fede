//! Console attribution banner.

use crate::page::Page;

/// Style applied to each credit line through a `%c` directive.
pub const CREDIT_STYLE: &str =
    "background: #ff00aa; padding: 3px; font-size: 13px; color: #ffffff";

pub const CREDIT_LINES: [&str; 3] = [
    "Designed & developed by Fränz Friederes: https://fraenz.frieder.es",
    "Animations seasoned by Daniel Zat: http://danielzat.com",
    "Source code under the MIT license: https://github.com/ffraenz/IdentityPage",
];

/// Print the three attribution lines to the page console.
pub fn setup(page: &Page) {
    for line in CREDIT_LINES {
        page.console_log(&format!("%c{line}"), &[CREDIT_STYLE]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::DeviceProfile;
    use crate::dom::Document;

    #[test]
    fn test_three_styled_lines() {
        let page = Page::new(Document::new(), DeviceProfile::desktop());
        setup(&page);
        let entries = page.console_entries();
        assert_eq!(entries.len(), 3);
        for (entry, line) in entries.iter().zip(CREDIT_LINES) {
            assert_eq!(entry.plain_text(), line);
            assert_eq!(entry.segments[0].style.as_deref(), Some(CREDIT_STYLE));
        }
    }
}

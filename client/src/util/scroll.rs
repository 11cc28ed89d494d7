//! Smooth in-page scrolling to section anchors.
//!
//! The navbar is fixed, so targets are offset by its height to keep section
//! headings visible. Requires a browser environment; SSR paths no-op.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Height of the fixed navbar in CSS pixels.
pub const NAVBAR_OFFSET_PX: f64 = 80.0;

/// Element id for an anchor href (`"#services"` -> `Some("services")`).
/// The bare `"#"` anchor means the page top and yields `None`.
#[must_use]
pub fn section_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Absolute scroll position that puts an element just below the navbar.
#[must_use]
pub fn scroll_target(element_top: f64, page_offset: f64) -> f64 {
    (element_top + page_offset - NAVBAR_OFFSET_PX).max(0.0)
}

/// Scroll smoothly to the section named by `href`, or to the top.
pub fn scroll_to_anchor(href: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let top = match section_id(href) {
            None => 0.0,
            Some(id) => {
                let Some(el) = window.document().and_then(|doc| doc.get_element_by_id(id)) else {
                    return;
                };
                let page_offset = window.page_y_offset().unwrap_or(0.0);
                scroll_target(el.get_bounding_client_rect().top(), page_offset)
            }
        };
        let options = web_sys::ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = href;
    }
}

//! Scroll-position helpers for the scroll-spy nav and scroll-to-top button.
//!
//! The decision functions are pure so highlight and visibility rules can be
//! tested without a browser; the DOM readers below them are `csr`-only.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, JsValue};

/// A page section and the document offset of its top edge.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionOffset {
    pub id: String,
    pub top: f64,
}

impl SectionOffset {
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self { id: id.into(), top }
    }
}

/// The section the reader is currently in.
///
/// Returns the last section, in document order, whose top minus `lead_px`
/// is at or above `scroll_y`. Above every threshold there is no current
/// section.
#[must_use]
pub fn current_section(scroll_y: f64, lead_px: f64, sections: &[SectionOffset]) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| scroll_y >= s.top - lead_px)
        .map(|s| s.id.as_str())
}

/// `true` if a nav `href` points at `section_id` (`#about` ↔ `about`).
#[must_use]
pub fn href_targets(href: &str, section_id: &str) -> bool {
    href.strip_prefix('#').is_some_and(|fragment| fragment == section_id)
}

/// Scroll-to-top visibility: shown strictly past the threshold.
#[must_use]
pub fn scroll_top_visible(scroll_y: f64, threshold_px: f64) -> bool {
    scroll_y > threshold_px
}

/// Vertical scroll offset of the window, `0.0` if unavailable.
#[cfg(feature = "csr")]
pub fn scroll_y() -> f64 {
    web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Offsets of every `section[id]` in document order.
///
/// # Errors
///
/// Returns the DOM exception if the selector query fails.
#[cfg(feature = "csr")]
pub fn section_offsets() -> Result<Vec<SectionOffset>, JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let nodes = document.query_selector_all("section[id]")?;
    let mut sections = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<web_sys::HtmlElement>().ok()) else {
            continue;
        };
        sections.push(SectionOffset::new(el.id(), f64::from(el.offset_top())));
    }
    Ok(sections)
}

/// Smooth-scroll the viewport back to the top.
#[cfg(feature = "csr")]
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

//! Scroll-triggered fade-in for content blocks.

use leptos::prelude::*;

/// Content blocks that fade in the first time they scroll into view.
pub const REVEAL_SELECTOR: &str = ".work-item, .service-card, .about-description, .contact-form-container";

#[cfg(feature = "csr")]
const ANIMATE_CLASS: &str = "animate-on-scroll";
#[cfg(feature = "csr")]
const VISIBLE_CLASS: &str = "is-visible";
#[cfg(feature = "csr")]
const REVEAL_ID_ATTR: &str = "data-reveal-id";

/// Installs the reveal observer once the page has rendered. Renders nothing.
///
/// Matching elements are tagged `animate-on-scroll` and handed to an
/// `IntersectionObserver`. On the first intersection an element gains
/// `is-visible` and is unobserved, so each one animates once per page load.
#[component]
pub fn ScrollReveal() -> impl IntoView {
    let config = expect_context::<crate::config::SiteConfig>();
    let threshold = config.reveal_threshold;

    // No reactive reads, so this runs exactly once after mount.
    Effect::new(move || {
        #[cfg(feature = "csr")]
        {
            if let Err(e) = install_reveal(threshold) {
                log::error!("scroll reveal: setup failed: {e:?}");
            }
        }
        #[cfg(not(feature = "csr"))]
        let _ = threshold;
    });
}

#[cfg(feature = "csr")]
fn install_reveal(threshold: f64) -> Result<(), wasm_bindgen::JsValue> {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use crate::state::reveal::{RevealAction, RevealId, RevealTracker};
    use crate::util::style::{REVEAL_CSS, REVEAL_STYLE_ID, ensure_style};

    ensure_style(REVEAL_STYLE_ID, REVEAL_CSS)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let nodes = document.query_selector_all(REVEAL_SELECTOR)?;

    let tracker = Rc::new(RefCell::new(RevealTracker::new()));
    let tracker_for_cb = Rc::clone(&tracker);
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(id) = target
                    .get_attribute(REVEAL_ID_ATTR)
                    .and_then(|v| v.parse::<usize>().ok())
                    .map(RevealId::from_index)
                else {
                    continue;
                };
                let action = tracker_for_cb
                    .borrow_mut()
                    .on_intersection(id, entry.is_intersecting());
                if action == RevealAction::Reveal {
                    let _ = target.class_list().add_1(VISIBLE_CLASS);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from(threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    // The observer lives for the whole page.
    callback.forget();

    let mut tracker = tracker.borrow_mut();
    for i in 0..nodes.length() {
        let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let id = tracker.register();
        el.class_list().add_1(ANIMATE_CLASS)?;
        el.set_attribute(REVEAL_ID_ATTR, &id.index().to_string())?;
        observer.observe(&el);
        tracker.observe(id);
    }
    log::debug!("scroll reveal: observing {} elements", tracker.len());
    Ok(())
}

//! Runtime-injected presentation rules.
//!
//! Reveal animations and toasts ship their CSS with the behaviour so the page
//! stylesheet does not need to know about them. Each rule block is injected
//! into `<head>` at most once, keyed by element id.

/// Initial hidden state and visible state for one-shot reveals.
pub const REVEAL_CSS: &str = "
.animate-on-scroll {
    opacity: 0;
    transform: translateY(30px);
    transition: opacity 0.6s ease-out, transform 0.6s ease-out;
}
.animate-on-scroll.is-visible {
    opacity: 1;
    transform: translateY(0);
}
";

/// Toast placement, per-kind colours, and entrance/exit transition.
pub const TOAST_CSS: &str = "
.notification-toast {
    position: fixed; bottom: 20px; right: 20px; padding: 15px 20px; border-radius: 8px; color: #fff;
    font-weight: 500; z-index: 10000; box-shadow: 0 5px 20px rgba(0, 0, 0, 0.15);
    opacity: 0; transform: translateY(20px); transition: all 0.3s ease;
}
.notification-toast.is-info { background: #0d6efd; }
.notification-toast.is-success { background: #198754; }
.notification-toast.is-error { background: #dc3545; }
.notification-toast.is-visible { opacity: 1; transform: translateY(0); }
";

pub const REVEAL_STYLE_ID: &str = "reveal-styles";
pub const TOAST_STYLE_ID: &str = "notification-toast-styles";

/// Append a `<style id=...>` to `<head>` unless one with that id exists.
///
/// # Errors
///
/// Returns the DOM exception if the element cannot be created or appended.
#[cfg(feature = "csr")]
pub fn ensure_style(id: &str, css: &str) -> Result<(), wasm_bindgen::JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| wasm_bindgen::JsValue::from_str("no document"))?;
    if document.get_element_by_id(id).is_some() {
        return Ok(());
    }
    let Some(head) = document.head() else {
        return Err(wasm_bindgen::JsValue::from_str("no <head>"));
    };
    let style = document.create_element("style")?;
    style.set_id(id);
    style.set_text_content(Some(css));
    head.append_child(&style)?;
    Ok(())
}

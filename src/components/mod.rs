//! Reusable page components.
//!
//! DESIGN
//! ======
//! Components read shared state from context and keep browser wiring
//! (listeners, observers, timers) behind the `csr` feature.

pub mod contact_form;
pub mod nav_bar;
pub mod reveal;
pub mod scroll_to_top;
pub mod theme_toggle;
pub mod toast;

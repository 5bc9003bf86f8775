//! Floating "back to top" button.

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::state::ui::UiState;

/// Scroll-to-top button, shown once the page is scrolled past the threshold.
#[component]
pub fn ScrollToTop() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let config = expect_context::<SiteConfig>();

    #[cfg(feature = "csr")]
    install_visibility_watch(ui, config.scroll_top);
    #[cfg(not(feature = "csr"))]
    let _ = config;

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        #[cfg(feature = "csr")]
        crate::util::scroll::scroll_to_top();
    };

    view! {
        <a
            href="#home"
            id="scrollToTopBtn"
            class="scroll-to-top"
            class:visible=move || ui.with(|s| s.scroll_top_visible)
            aria-label="Back to top"
            on:click=on_click
        >
            <i class="fa-solid fa-arrow-up" aria-hidden="true"></i>
        </a>
    }
}

#[cfg(feature = "csr")]
fn install_visibility_watch(ui: RwSignal<UiState>, scroll_top: crate::config::ScrollTopConfig) {
    use std::cell::Cell;

    use crate::util::scroll::{scroll_top_visible, scroll_y};
    use crate::util::throttle::{Throttle, now_ms};

    let throttle = Cell::new(Throttle::new(scroll_top.throttle_ms));
    // Page-lifetime listener; never removed.
    let _ = window_event_listener(leptos::ev::scroll, move |_| {
        if Throttle::admit_cell(&throttle, now_ms()) {
            let visible = scroll_top_visible(scroll_y(), scroll_top.threshold_px);
            ui.maybe_update(|s| s.set_scroll_top_visible(visible));
        }
    });
}

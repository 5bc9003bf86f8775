//! Site header with scroll-spy navigation links and the theme toggle.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::config::SiteConfig;
use crate::state::ui::UiState;

/// Nav targets in document order: `(href, label)`.
pub const NAV_LINKS: [(&str, &str); 5] = [
    ("#home", "Home"),
    ("#about", "About"),
    ("#services", "Services"),
    ("#work", "Work"),
    ("#contact", "Contact"),
];

/// Fixed header navigation.
///
/// The link whose target section the reader is in carries `active`; the
/// selection is recomputed on throttled scroll events.
#[component]
pub fn NavBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let config = expect_context::<SiteConfig>();

    #[cfg(feature = "csr")]
    install_scroll_spy(ui, config.nav);
    #[cfg(not(feature = "csr"))]
    let _ = config;

    view! {
        <header class="site-header">
            <nav class="navbar">
                <a href="#home" class="nav-logo">"Aditya Anand"</a>
                <ul class="nav-menu">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(href, label)| {
                            view! {
                                <li class="nav-item">
                                    <a
                                        href=href
                                        class="nav-link"
                                        class:active=move || ui.with(|s| s.is_active_link(href))
                                    >
                                        {label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <ThemeToggle/>
            </nav>
        </header>
    }
}

/// Listen for scroll and update the active section at most once per window.
#[cfg(feature = "csr")]
fn install_scroll_spy(ui: RwSignal<UiState>, nav: crate::config::NavConfig) {
    use std::cell::Cell;

    use crate::util::scroll::{current_section, scroll_y, section_offsets};
    use crate::util::throttle::{Throttle, now_ms};

    let throttle = Cell::new(Throttle::new(nav.throttle_ms));
    // Page-lifetime listener; never removed.
    let _ = window_event_listener(leptos::ev::scroll, move |_| {
        if !Throttle::admit_cell(&throttle, now_ms()) {
            return;
        }

        let sections = match section_offsets() {
            Ok(sections) => sections,
            Err(e) => {
                log::error!("scroll spy: failed to read sections: {e:?}");
                return;
            }
        };
        let current = current_section(scroll_y(), nav.lead_px, &sections);
        ui.maybe_update(|s| s.set_active_section(current));
    });
}

//! Header button switching between the dark and light themes.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::theme;

/// Theme toggle button.
///
/// Applies the resolved preference to `<body>` on mount. Each click flips
/// the theme, persists it, and swaps the icon to invite the opposite mode.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    theme::apply(ui.get_untracked().theme);

    let on_click = move |_| {
        ui.update(|s| s.theme = theme::toggle(s.theme));
    };
    let icon_class = move || ui.get().theme.icon_class();

    view! {
        <button
            id="themeToggle"
            class="theme-toggle"
            type="button"
            title="Toggle theme"
            aria-label="Toggle theme"
            on:click=on_click
        >
            <i id="themeIcon" class=icon_class aria-hidden="true"></i>
        </button>
    }
}

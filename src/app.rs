//! Root application component with context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::{
    nav_bar::NavBar, reveal::ScrollReveal, scroll_to_top::ScrollToTop, toast::ToastHost,
};
use crate::config::SiteConfig;
use crate::pages::home::HomePage;
use crate::state::{toast::ToastState, ui::UiState};
use crate::util::theme;

/// Root application component.
///
/// Resolves the stored theme, provides shared state contexts, and renders
/// the page with its floating controls.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = SiteConfig::from_build_env();
    let ui = RwSignal::new(UiState::with_theme(theme::read_preference()));
    let toast = RwSignal::new(ToastState::default());

    provide_context(config);
    provide_context(ui);
    provide_context(toast);

    Effect::new(move || log::info!("Portfolio initialized successfully!"));

    view! {
        <Title text="Aditya Anand | Portfolio"/>
        <NavBar/>
        <HomePage/>
        <ScrollToTop/>
        <ToastHost/>
        <ScrollReveal/>
    }
}

//! The single portfolio page: hero, about, services, work, and contact.

use leptos::prelude::*;

use crate::components::contact_form::ContactForm;

/// `(icon, title, blurb)` for each service card.
const SERVICES: [(&str, &str, &str); 3] = [
    (
        "fa-solid fa-code",
        "Web Development",
        "Fast, accessible sites and web apps built to last.",
    ),
    (
        "fa-solid fa-server",
        "Backend Systems",
        "APIs, data pipelines, and services that stay up under load.",
    ),
    (
        "fa-solid fa-compass-drafting",
        "Technical Consulting",
        "Architecture reviews and roadmaps for growing teams.",
    ),
];

/// `(title, category, summary)` for each work item.
const WORK: [(&str, &str, &str); 3] = [
    (
        "Realtime Whiteboard",
        "Web App",
        "Collaborative canvas with live presence and history replay.",
    ),
    (
        "Metrics Pipeline",
        "Backend",
        "Streaming ingestion and rollups for product analytics.",
    ),
    (
        "Studio Landing Page",
        "Website",
        "Marketing site with a custom CMS and edge rendering.",
    ),
];

/// Portfolio page body. Section ids are the scroll-spy targets.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main>
            <section id="home" class="hero">
                <div class="container">
                    <h1 class="hero__title">"Aditya Anand"</h1>
                    <p class="hero__subtitle">"Software engineer building reliable products for the web."</p>
                    <a href="#contact" class="btn btn--primary">"Start a project"</a>
                </div>
            </section>

            <section id="about" class="about">
                <div class="container">
                    <h2 class="section-title">"About"</h2>
                    <div class="about-description">
                        <p>
                            "I design and build software end to end, from interfaces people enjoy "
                            "to the services behind them."
                        </p>
                    </div>
                </div>
            </section>

            <section id="services" class="services">
                <div class="container">
                    <h2 class="section-title">"Services"</h2>
                    <div class="services__grid">
                        {SERVICES
                            .into_iter()
                            .map(|(icon, title, blurb)| {
                                view! {
                                    <article class="service-card">
                                        <i class=icon aria-hidden="true"></i>
                                        <h3>{title}</h3>
                                        <p>{blurb}</p>
                                    </article>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section id="work" class="work">
                <div class="container">
                    <h2 class="section-title">"Selected Work"</h2>
                    <div class="work__grid">
                        {WORK
                            .into_iter()
                            .map(|(title, category, summary)| {
                                view! {
                                    <article class="work-item">
                                        <span class="work-item__category">{category}</span>
                                        <h3>{title}</h3>
                                        <p>{summary}</p>
                                    </article>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section id="contact" class="contact">
                <div class="container">
                    <h2 class="section-title">"Let's Work Together"</h2>
                    <ContactForm/>
                </div>
            </section>
        </main>
        <footer class="site-footer">
            <p>"Built with Rust and Leptos."</p>
        </footer>
    }
}

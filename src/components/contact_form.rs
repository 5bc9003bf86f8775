//! Project-brief contact form.

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::state::contact::{ContactFields, ContactState};
use crate::state::toast::ToastState;

/// `(value, label)` choices for the service select.
const SERVICE_OPTIONS: [(&str, &str); 4] = [
    ("web-development", "Web Development"),
    ("backend-systems", "Backend Systems"),
    ("consulting", "Technical Consulting"),
    ("other", "Something Else"),
];

/// `(value, label)` choices for the budget select.
const BUDGET_OPTIONS: [(&str, &str); 4] = [
    ("under-5k", "Under $5k"),
    ("5k-10k", "$5k - $10k"),
    ("10k-25k", "$10k - $25k"),
    ("25k-plus", "$25k+"),
];

/// Contact form with native constraint validation and async delivery.
///
/// An invalid submit marks the form `was-validated` and sends nothing. A
/// valid submit disables the button while the message is delivered, then
/// shows a toast. Success clears the fields, failure keeps them.
#[component]
pub fn ContactForm() -> impl IntoView {
    let toast = expect_context::<RwSignal<ToastState>>();
    let config = expect_context::<SiteConfig>();
    let state = RwSignal::new(ContactState::default());
    let fields = RwSignal::new(ContactFields::default());
    let form_ref = NodeRef::<leptos::html::Form>::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "csr")]
        {
            use crate::state::contact::SubmitOutcome;
            use crate::state::toast::ToastKind;

            let Some(form) = form_ref.get_untracked() else {
                return;
            };
            let valid = form.check_validity();
            match state.try_update(|s| s.submit(valid)) {
                Some(SubmitOutcome::Send) => {}
                Some(SubmitOutcome::Invalid) => {
                    ev.stop_propagation();
                    return;
                }
                _ => return,
            }

            let payload = fields.with_untracked(ContactFields::payload);
            let contact = config.contact.clone();
            let timings = config.toast;
            leptos::task::spawn_local(async move {
                let result = crate::net::contact::send_contact(&contact, &payload).await;
                if let Err(e) = &result {
                    log::warn!("contact form: {e}");
                }
                let result = result.as_ref().map(|_| ());
                let notice = fields
                    .try_update(|f| state.try_update(|s| s.complete(f, result)))
                    .flatten()
                    .flatten();
                if let Some(notice) = notice {
                    if notice.kind == ToastKind::Success {
                        form.reset();
                    }
                    crate::components::toast::show_toast(toast, timings, notice.message, notice.kind);
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (toast, &config, form_ref);
    };

    view! {
        <div class="contact-form-container">
            <form
                id="contactForm"
                class="contact-form"
                class:was-validated=move || state.with(|s| s.was_validated)
                novalidate=true
                node_ref=form_ref
                on:submit=on_submit
            >
                <div class="form-group">
                    <label for="fullName">"Full Name"</label>
                    <input
                        type="text"
                        id="fullName"
                        name="fullName"
                        required=true
                        prop:value=move || fields.with(|f| f.full_name.clone())
                        on:input=move |ev| fields.update(|f| f.full_name = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="email">"Email"</label>
                    <input
                        type="email"
                        id="email"
                        name="email"
                        required=true
                        prop:value=move || fields.with(|f| f.email.clone())
                        on:input=move |ev| fields.update(|f| f.email = event_target_value(&ev))
                    />
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label for="serviceType">"Service"</label>
                        <select
                            id="serviceType"
                            name="serviceType"
                            required=true
                            prop:value=move || fields.with(|f| f.service_type.clone())
                            on:change=move |ev| fields.update(|f| f.service_type = event_target_value(&ev))
                        >
                            <option value="">"Select a service"</option>
                            {SERVICE_OPTIONS
                                .into_iter()
                                .map(|(value, label)| view! { <option value=value>{label}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="budget">"Budget"</label>
                        <select
                            id="budget"
                            name="budget"
                            required=true
                            prop:value=move || fields.with(|f| f.budget.clone())
                            on:change=move |ev| fields.update(|f| f.budget = event_target_value(&ev))
                        >
                            <option value="">"Select a budget"</option>
                            {BUDGET_OPTIONS
                                .into_iter()
                                .map(|(value, label)| view! { <option value=value>{label}</option> })
                                .collect_view()}
                        </select>
                    </div>
                </div>
                <div class="form-group">
                    <label for="message">"Project Details"</label>
                    <textarea
                        id="message"
                        name="message"
                        rows="5"
                        required=true
                        prop:value=move || fields.with(|f| f.message.clone())
                        on:input=move |ev| fields.update(|f| f.message = event_target_value(&ev))
                    ></textarea>
                </div>
                <button
                    type="submit"
                    class="btn btn--primary"
                    disabled=move || state.with(ContactState::submit_disabled)
                >
                    {move || state.with(ContactState::submit_label)}
                </button>
            </form>
        </div>
    }
}

//! Toast notification host and the `show_toast` entry point.

use leptos::prelude::*;

use crate::config::ToastConfig;
use crate::state::toast::{Toast, ToastKind, ToastState};

/// Replace any visible toast with a new one and run its lifecycle.
///
/// The toast mounts in its initial state, becomes visible after
/// `enter_delay_ms`, starts leaving after `display_ms`, and is dropped
/// `exit_ms` later. Timers of a replaced toast are ignored by the state.
pub fn show_toast(toast: RwSignal<ToastState>, timings: ToastConfig, message: impl Into<String>, kind: ToastKind) {
    #[cfg(feature = "csr")]
    {
        use crate::util::style::{TOAST_CSS, TOAST_STYLE_ID, ensure_style};
        if let Err(e) = ensure_style(TOAST_STYLE_ID, TOAST_CSS) {
            log::error!("toast: failed to inject styles: {e:?}");
        }
    }

    let message = message.into();
    let Some(id) = toast.try_update(|t| t.show(message, kind)) else {
        return;
    };

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        use gloo_timers::future::sleep;
        use std::time::Duration;

        sleep(Duration::from_millis(u64::from(timings.enter_delay_ms))).await;
        toast.maybe_update(|t| t.enter(id));
        sleep(Duration::from_millis(u64::from(timings.display_ms))).await;
        toast.maybe_update(|t| t.leave(id));
        sleep(Duration::from_millis(u64::from(timings.exit_ms))).await;
        toast.maybe_update(|t| t.remove(id));
    });
    #[cfg(not(feature = "csr"))]
    let _ = (id, timings);
}

/// Renders the current toast, if any.
///
/// The element is keyed by toast id so phase changes only touch its class
/// and the CSS transition can run.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toast = expect_context::<RwSignal<ToastState>>();
    let current_id = Memo::new(move |_| toast.with(|t| t.current().map(|c| c.id)));

    move || {
        current_id.get().map(|id| {
            let class = move || {
                toast.with(|t| {
                    t.current()
                        .filter(|c| c.id == id)
                        .map(Toast::class)
                        .unwrap_or_default()
                })
            };
            let message = toast.with_untracked(|t| t.current().map(|c| c.message.clone()).unwrap_or_default());
            view! {
                <div class=class role="status" aria-live="polite">
                    {message}
                </div>
            }
        })
    }
}

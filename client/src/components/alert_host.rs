//! Floating notification surface rendering the current alert.
//!
//! DESIGN
//! ======
//! Alerts with a timeout dismiss themselves; the timer carries the alert's
//! seq so a toast that was already replaced never dismisses its successor.
//! Persistent alerts (no timeout) stay until the close button.

use leptos::prelude::*;

use crate::state::alerts::AlertsState;

/// Renders the single active alert, if any, in a fixed overlay corner.
#[component]
pub fn AlertHost() -> impl IntoView {
    let alerts = expect_context::<RwSignal<AlertsState>>();

    #[cfg(feature = "hydrate")]
    {
        let scheduled_seq = RwSignal::new(None::<u64>);
        Effect::new(move || {
            let Some(alert) = alerts.get().current else {
                return;
            };
            let Some(timeout_ms) = alert.timeout_ms else {
                return;
            };
            if scheduled_seq.get_untracked() == Some(alert.seq) {
                return;
            }
            scheduled_seq.set(Some(alert.seq));
            let seq = alert.seq;
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                    timeout_ms,
                )))
                .await;
                alerts.update(|a| a.dismiss(seq));
            });
        });
    }

    view! {
        <div class="alert-host">
            {move || {
                alerts
                    .get()
                    .current
                    .map(|alert| {
                        view! {
                            <div
                                class=format!("alert alert--{}", alert.kind.class_suffix())
                                role="alert"
                            >
                                <div class="alert__content">
                                    <span class="alert__title">{alert.title.clone()}</span>
                                    <span class="alert__body">{alert.body.clone()}</span>
                                </div>
                                <button
                                    class="alert__close"
                                    on:click=move |_| alerts.update(|a| a.dismiss_current())
                                    aria-label="Cerrar aviso"
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
            }}
        </div>
    }
}

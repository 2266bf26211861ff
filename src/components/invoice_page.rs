//! Invoice Page
//!
//! Fetches one rental by route id and renders the printable invoice.
//! The page is a three-state view model rendered by exhaustive match, so the
//! loading, loaded and not-found branches can never be conflated.

use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::api;
use crate::components::InvoiceDocument;
use crate::models::Rental;

#[derive(Debug, Clone, PartialEq)]
enum InvoiceState {
    Loading,
    Loaded(Rental),
    /// Shown as "Rental not found"; the reason is diagnostic only.
    NotFound(String),
}

#[component]
pub fn InvoicePage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    let (state, set_state) = signal(InvoiceState::Loading);

    // The fetch is scoped to this page's lifetime: tearing the page down
    // aborts the request, so no state is written after unmount.
    let controller = web_sys::AbortController::new().ok();
    let abort_signal = controller.as_ref().map(|c| c.signal());
    {
        let controller = controller.clone();
        on_cleanup(move || {
            if let Some(controller) = &controller {
                controller.abort();
            }
        });
    }

    Effect::new(move |_| {
        let Some(id) = params.get().get("id") else {
            set_state.set(InvoiceState::NotFound("missing rental id".to_string()));
            return;
        };
        set_state.set(InvoiceState::Loading);

        let abort_signal = abort_signal.clone();
        spawn_local(async move {
            let result = api::fetch_rental(&id, abort_signal.as_ref()).await;
            if abort_signal.as_ref().is_some_and(|s| s.aborted()) {
                // Page already torn down, drop the late result.
                return;
            }
            match result {
                Ok(rental) => set_state.set(InvoiceState::Loaded(rental)),
                Err(e) => {
                    log!("failed to fetch rental {id}: {e}");
                    set_state.set(InvoiceState::NotFound(e.to_string()));
                }
            }
        });
    });

    let print_invoice = move |_| {
        if let Some(window) = web_sys::window() {
            let _ = window.print();
        }
    };

    view! {
        {move || match state.get() {
            InvoiceState::Loading => {
                view! { <div class="page-status">"Loading invoice..."</div> }.into_any()
            }
            InvoiceState::NotFound(_) => {
                view! { <div class="page-status">"Rental not found"</div> }.into_any()
            }
            InvoiceState::Loaded(rental) => {
                let navigate = navigate.clone();
                view! {
                    <div>
                        <div class="action-bar print-hidden">
                            <button
                                class="btn btn-ghost"
                                on:click=move |_| navigate("/dashboard/rentals", Default::default())
                            >
                                "Back to Rentals"
                            </button>
                            <button class="btn btn-primary" on:click=print_invoice>
                                "Print Invoice"
                            </button>
                        </div>
                        <InvoiceDocument rental=rental/>
                    </div>
                }
                .into_any()
            }
        }}
    }
}

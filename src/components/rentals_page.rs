//! Rentals Listing Page
//!
//! The navigation target of the invoice's back action. Shows every rental
//! with a link to its invoice.

use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api;
use crate::format::format_currency;
use crate::models::RentalSummary;
use crate::summary;

#[component]
pub fn RentalsPage() -> impl IntoView {
    let (rentals, set_rentals) = signal(Vec::<RentalSummary>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::list_rentals().await {
                Ok(list) => set_rentals.set(list),
                Err(e) => log!("failed to fetch rentals: {e}"),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="rentals-page">
            <h1>"Rentals"</h1>
            {move || if loading.get() {
                view! { <div class="page-status">"Loading rentals..."</div> }.into_any()
            } else if rentals.get().is_empty() {
                view! { <div class="page-status">"No rentals yet"</div> }.into_any()
            } else {
                view! {
                    <table class="rentals-table">
                        <thead>
                            <tr>
                                <th>"Rental #"</th>
                                <th>"Customer"</th>
                                <th>"Status"</th>
                                <th class="right">"Total"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || rentals.get()
                                key=|rental| rental.id.clone()
                                children=move |rental| {
                                    let href = format!("/dashboard/rentals/{}/invoice", rental.id);
                                    let color = summary::status_color(&rental.status);
                                    view! {
                                        <tr>
                                            <td>{rental.rental_number.clone()}</td>
                                            <td>{rental.customer.name.clone()}</td>
                                            <td>
                                                <span class="status-label" style:color=color>
                                                    {rental.status.clone()}
                                                </span>
                                            </td>
                                            <td class="right">{format_currency(rental.total_amount)}</td>
                                            <td><A href=href>"Invoice"</A></td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                }.into_any()
            }}
        </div>
    }
}

//! Rental Dashboard App
//!
//! Root component wiring the router to the dashboard pages.

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::components::{InvoicePage, RentalsPage};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <div class="page-status">"Page not found"</div> }>
                <Route path=path!("/") view=|| view! { <Redirect path="/dashboard/rentals"/> }/>
                <Route path=path!("/dashboard/rentals") view=RentalsPage/>
                <Route path=path!("/dashboard/rentals/:id/invoice") view=InvoicePage/>
            </Routes>
        </Router>
    }
}

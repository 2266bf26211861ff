//! Totals Panel
//!
//! Subtotal, optional deposit and amount-paid rows, and the final summary
//! row. A settled invoice shows "PAID IN FULL" with the full total; an open
//! one shows "BALANCE DUE" with the outstanding amount.

use leptos::prelude::*;

use crate::format::format_currency;
use crate::models::Rental;
use crate::summary::{self, Settlement};

#[component]
pub fn TotalsPanel(rental: Rental) -> impl IntoView {
    let paid = summary::total_paid(&rental.payments);
    let settlement = Settlement::of(&rental);

    view! {
        <div class="totals-row">
            <div class="totals-panel">
                <div class="totals-line">
                    <span class="totals-label">"Subtotal"</span>
                    <span class="totals-value">{format_currency(rental.total_amount)}</span>
                </div>
                {summary::show_deposit_row(&rental).then(|| view! {
                    <div class="totals-line">
                        <span class="totals-label">"Deposit"</span>
                        <span class="totals-value">{format_currency(rental.deposit)}</span>
                    </div>
                })}
                {summary::show_paid_row(&rental).then(|| view! {
                    <div class="totals-line credit">
                        <span>"Amount Paid"</span>
                        <span class="credit-value">{format!("- {}", format_currency(paid))}</span>
                    </div>
                })}
                <div class="totals-summary">
                    <span>{settlement.label()}</span>
                    <span>{format_currency(settlement.amount())}</span>
                </div>
            </div>
        </div>
    }
}

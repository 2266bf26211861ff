//! Payment History Table

use leptos::prelude::*;

use crate::format::{format_currency, format_date};
use crate::models::Payment;

/// Payments received so far, in the order the backend recorded them.
#[component]
pub fn PaymentHistory(payments: Vec<Payment>) -> impl IntoView {
    view! {
        <div class="payment-history">
            <h3>"Payment History"</h3>
            <table>
                <thead>
                    <tr>
                        <th>"Date"</th>
                        <th>"Method"</th>
                        <th class="right">"Amount"</th>
                    </tr>
                </thead>
                <tbody>
                    {payments.into_iter().map(|payment| view! {
                        <tr>
                            <td>{format_date(payment.created_at)}</td>
                            <td>{payment.payment_method.clone()}</td>
                            <td class="right payment-amount">{format_currency(payment.amount)}</td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}

//! Invoice Document
//!
//! The printable invoice sheet: letterhead, bill-to and rental period cards,
//! line items, totals, payment history, notes, footer and the "PAID"
//! watermark once the balance is settled.

use leptos::prelude::*;

use crate::components::{ItemsTable, PaymentHistory, TotalsPanel};
use crate::format::format_date;
use crate::models::Rental;
use crate::summary;

#[component]
pub fn InvoiceDocument(rental: Rental) -> impl IntoView {
    let days = summary::duration_days(rental.start_date, rental.end_date);
    let settled = summary::show_watermark(&rental);
    let status_color = summary::status_color(&rental.status);

    view! {
        <div id="invoice" class="invoice-sheet">
            // Letterhead
            <div class="letterhead">
                <div>
                    <div class="brand">
                        <div class="brand-mark">"M"</div>
                        <div>
                            <h1 class="brand-name">"Maco Rentals"</h1>
                            <p class="brand-tagline">"Premium Event Rentals"</p>
                        </div>
                    </div>
                    <div class="brand-contact">
                        <p>"Yaoundé, Cameroun"</p>
                        <p>"+237 6XX XXX XXX"</p>
                        <p>"contact@macorentals.com"</p>
                    </div>
                </div>
                <div class="invoice-badge-block">
                    <div class="invoice-badge">"INVOICE"</div>
                    <div class="invoice-meta">
                        <p>
                            <span class="meta-label">"Invoice #: "</span>
                            {rental.rental_number.clone()}
                        </p>
                        <p>
                            <span class="meta-label">"Date: "</span>
                            {format_date(rental.created_at)}
                        </p>
                        <p>
                            <span class="meta-label">"Status: "</span>
                            <span class="status-label" style:color=status_color>
                                {rental.status.clone()}
                            </span>
                        </p>
                    </div>
                </div>
            </div>

            // Bill-to and rental period cards
            <div class="info-row">
                <div class="info-card bill-to">
                    <h3>"Bill To"</h3>
                    <p class="customer-name">{rental.customer.name.clone()}</p>
                    <p class="customer-line">{rental.customer.phone.clone()}</p>
                    {rental.customer.address.clone().map(|address| view! {
                        <p class="customer-line">{address}</p>
                    })}
                </div>
                <div class="info-card rental-period">
                    <h3>"Rental Period"</h3>
                    <div class="period-lines">
                        <p>
                            <span class="meta-label">"Start Date: "</span>
                            {format_date(rental.start_date)}
                        </p>
                        <p>
                            <span class="meta-label">"End Date: "</span>
                            {format_date(rental.end_date)}
                        </p>
                        <p>
                            <span class="meta-label">"Duration: "</span>
                            {summary::duration_label(days)}
                        </p>
                        <p>
                            <span class="meta-label">"Prepared by: "</span>
                            {rental.created_by.name.clone()}
                        </p>
                    </div>
                </div>
            </div>

            <ItemsTable items=rental.rental_items.clone()/>
            <TotalsPanel rental=rental.clone()/>

            {summary::show_payment_history(&rental).then(|| view! {
                <PaymentHistory payments=rental.payments.clone()/>
            })}

            {rental.notes.clone().filter(|notes| !notes.is_empty()).map(|notes| view! {
                <div class="notes-block">
                    <h3>"Notes"</h3>
                    <p>{notes}</p>
                </div>
            })}

            // Footer
            <div class="invoice-footer">
                <div>
                    <p class="thanks">
                        "Thank you for choosing " <strong>"Maco Rentals"</strong> "!"
                    </p>
                    <p class="return-note">
                        {format!(
                            "Please return all items in good condition by {}.",
                            format_date(rental.end_date)
                        )}
                    </p>
                </div>
                <div class="signature">
                    <div class="signature-line">
                        <p>"Authorized Signature"</p>
                        <p class="signature-name">{rental.created_by.name.clone()}</p>
                    </div>
                </div>
            </div>

            {settled.then(|| view! { <div class="paid-watermark">"PAID"</div> })}
        </div>
    }
}

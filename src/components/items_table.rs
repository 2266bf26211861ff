//! Line Items Table

use leptos::prelude::*;

use crate::format::format_currency;
use crate::models::RentalItem;

/// Rental line items, numbered from 1, in backend order.
#[component]
pub fn ItemsTable(items: Vec<RentalItem>) -> impl IntoView {
    view! {
        <table class="items-table">
            <thead>
                <tr>
                    <th>"#"</th>
                    <th>"Item Description"</th>
                    <th class="center">"Category"</th>
                    <th class="center">"Qty"</th>
                    <th class="right">"Unit Price"</th>
                    <th class="right">"Subtotal"</th>
                </tr>
            </thead>
            <tbody>
                {items.into_iter().enumerate().map(|(index, line)| view! {
                    <tr>
                        <td class="row-number">{index + 1}</td>
                        <td>
                            <p class="item-name">{line.item.name.clone()}</p>
                            {line.item.description.clone().map(|description| view! {
                                <p class="item-description">{description}</p>
                            })}
                        </td>
                        <td class="center">
                            <span class="category-badge">{line.item.category.clone()}</span>
                        </td>
                        <td class="center item-qty">{line.quantity}</td>
                        <td class="right item-unit-price">{format_currency(line.price_per_unit)}</td>
                        <td class="right item-subtotal">{format_currency(line.subtotal)}</td>
                    </tr>
                }).collect_view()}
            </tbody>
        </table>
    }
}

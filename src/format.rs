//! Display Formatting
//!
//! Currency and date helpers shared by the invoice and the rentals listing.

use chrono::{DateTime, Utc};

/// Format an amount in CFA francs with thousands separators.
/// The franc has no minor unit, so values are rounded to whole francs.
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let negative = rounded < 0;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 6);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative {
        format!("-{grouped} FCFA")
    } else {
        format!("{grouped} FCFA")
    }
}

/// Short human-readable date, e.g. "Jun 1, 2024".
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

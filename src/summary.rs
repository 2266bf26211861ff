//! Invoice Derivations
//!
//! Pure functions computing everything the invoice displays conditionally:
//! totals, balance, rental duration, status color and row visibility. Keeping
//! these out of the components makes every rendering rule testable without a
//! browser.

use chrono::{DateTime, Utc};

use crate::models::{Payment, Rental};

const SECONDS_PER_DAY: i64 = 86_400;

/// Sum of all recorded payment amounts. Empty list sums to zero.
pub fn total_paid(payments: &[Payment]) -> f64 {
    payments.iter().map(|p| p.amount).sum()
}

/// Outstanding amount. Negative when the customer overpaid; not clamped.
pub fn balance(rental: &Rental) -> f64 {
    rental.total_amount - total_paid(&rental.payments)
}

/// Rental duration in whole days, rounding any started day up.
/// Same-day and inverted ranges both display as one day.
pub fn duration_days(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    let seconds = (end - start).num_seconds();
    let days = (seconds + SECONDS_PER_DAY - 1).div_euclid(SECONDS_PER_DAY);
    if days <= 0 {
        1
    } else {
        days
    }
}

pub fn duration_label(days: i64) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{days} days")
    }
}

/// Final summary row of the totals panel.
///
/// A settled invoice shows the full total, not the (possibly negative)
/// balance; overpayment is treated the same as exactly paid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Settlement {
    PaidInFull { total: f64 },
    BalanceDue { amount: f64 },
}

impl Settlement {
    pub fn of(rental: &Rental) -> Self {
        let due = balance(rental);
        if due <= 0.0 {
            Settlement::PaidInFull {
                total: rental.total_amount,
            }
        } else {
            Settlement::BalanceDue { amount: due }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Settlement::PaidInFull { .. } => "PAID IN FULL",
            Settlement::BalanceDue { .. } => "BALANCE DUE",
        }
    }

    /// Amount printed next to the label.
    pub fn amount(&self) -> f64 {
        match self {
            Settlement::PaidInFull { total } => *total,
            Settlement::BalanceDue { amount } => *amount,
        }
    }
}

/// Fixed status-to-color mapping; unknown statuses render red.
pub fn status_color(status: &str) -> &'static str {
    match status {
        "COMPLETED" => "#16a34a",
        "ACTIVE" => "#2563eb",
        "PENDING" => "#d97706",
        _ => "#dc2626",
    }
}

pub fn show_deposit_row(rental: &Rental) -> bool {
    rental.deposit > 0.0
}

pub fn show_paid_row(rental: &Rental) -> bool {
    total_paid(&rental.payments) > 0.0
}

pub fn show_payment_history(rental: &Rental) -> bool {
    !rental.payments.is_empty()
}

pub fn show_watermark(rental: &Rental) -> bool {
    balance(rental) <= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Customer, Payment, Rental, Staff};
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn payment(amount: f64) -> Payment {
        Payment {
            amount,
            payment_method: "CASH".to_string(),
            created_at: date(2024, 6, 1),
        }
    }

    fn make_rental(total_amount: f64, deposit: f64, payments: Vec<Payment>) -> Rental {
        Rental {
            id: "r1".to_string(),
            rental_number: "RNT-0001".to_string(),
            start_date: date(2024, 6, 1),
            end_date: date(2024, 6, 5),
            total_amount,
            deposit,
            status: "ACTIVE".to_string(),
            notes: None,
            created_at: date(2024, 5, 30),
            customer: Customer {
                name: "Client".to_string(),
                phone: "+237 600 000 000".to_string(),
                address: None,
            },
            rental_items: vec![],
            payments,
            created_by: Staff {
                name: "Staff".to_string(),
            },
        }
    }

    #[test]
    fn total_paid_sums_payments() {
        assert_eq!(total_paid(&[]), 0.0);
        assert_eq!(total_paid(&[payment(30000.0)]), 30000.0);
        assert_eq!(
            total_paid(&[payment(10000.0), payment(2500.0), payment(500.0)]),
            13000.0
        );
    }

    #[test]
    fn balance_is_total_minus_paid() {
        let rental = make_rental(100000.0, 0.0, vec![payment(30000.0)]);
        assert_eq!(balance(&rental), 70000.0);
    }

    #[test]
    fn balance_goes_negative_when_overpaid() {
        let rental = make_rental(50000.0, 0.0, vec![payment(60000.0)]);
        assert_eq!(balance(&rental), -10000.0);
    }

    #[test]
    fn duration_counts_whole_days() {
        assert_eq!(duration_days(date(2024, 1, 1), date(2024, 1, 4)), 3);
    }

    #[test]
    fn duration_rounds_partial_days_up() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 1, 3, 18, 0, 0).unwrap();
        assert_eq!(duration_days(start, end), 3);
    }

    #[test]
    fn same_day_rental_is_one_day() {
        assert_eq!(duration_days(date(2024, 1, 1), date(2024, 1, 1)), 1);
    }

    #[test]
    fn inverted_dates_fall_back_to_one_day() {
        assert_eq!(duration_days(date(2024, 1, 4), date(2024, 1, 1)), 1);
    }

    #[test]
    fn duration_label_pluralizes() {
        assert_eq!(duration_label(1), "1 day");
        assert_eq!(duration_label(4), "4 days");
    }

    #[test]
    fn settled_invoice_shows_full_total() {
        let rental = make_rental(50000.0, 0.0, vec![payment(50000.0)]);
        let settlement = Settlement::of(&rental);
        assert_eq!(settlement.label(), "PAID IN FULL");
        assert_eq!(settlement.amount(), 50000.0);
    }

    #[test]
    fn overpaid_invoice_still_shows_full_total() {
        let rental = make_rental(50000.0, 0.0, vec![payment(80000.0)]);
        let settlement = Settlement::of(&rental);
        assert_eq!(settlement.label(), "PAID IN FULL");
        assert_eq!(settlement.amount(), 50000.0);
    }

    #[test]
    fn open_invoice_shows_outstanding_balance() {
        let rental = make_rental(100000.0, 0.0, vec![payment(30000.0)]);
        let settlement = Settlement::of(&rental);
        assert_eq!(settlement.label(), "BALANCE DUE");
        assert_eq!(settlement.amount(), 70000.0);
    }

    #[test]
    fn status_colors_follow_fixed_mapping() {
        assert_eq!(status_color("COMPLETED"), "#16a34a");
        assert_eq!(status_color("ACTIVE"), "#2563eb");
        assert_eq!(status_color("PENDING"), "#d97706");
        assert_eq!(status_color("CANCELLED"), "#dc2626");
        assert_eq!(status_color("anything"), "#dc2626");
    }

    #[test]
    fn deposit_row_only_when_positive() {
        assert!(show_deposit_row(&make_rental(1000.0, 200.0, vec![])));
        assert!(!show_deposit_row(&make_rental(1000.0, 0.0, vec![])));
    }

    #[test]
    fn paid_row_only_when_payments_received() {
        assert!(show_paid_row(&make_rental(1000.0, 0.0, vec![payment(1.0)])));
        assert!(!show_paid_row(&make_rental(1000.0, 0.0, vec![])));
    }

    #[test]
    fn payment_history_only_when_nonempty() {
        assert!(show_payment_history(&make_rental(
            1000.0,
            0.0,
            vec![payment(1.0)]
        )));
        assert!(!show_payment_history(&make_rental(1000.0, 0.0, vec![])));
    }

    #[test]
    fn watermark_iff_settled() {
        assert!(show_watermark(&make_rental(1000.0, 0.0, vec![payment(1000.0)])));
        assert!(show_watermark(&make_rental(1000.0, 0.0, vec![payment(1500.0)])));
        assert!(!show_watermark(&make_rental(1000.0, 0.0, vec![payment(999.0)])));
    }

    // Full worked example: partially paid four-day rental with a deposit.
    #[test]
    fn partially_paid_rental_scenario() {
        let mut rental = make_rental(100000.0, 20000.0, vec![payment(30000.0)]);
        rental.start_date = date(2024, 6, 1);
        rental.end_date = date(2024, 6, 5);

        assert_eq!(total_paid(&rental.payments), 30000.0);
        assert_eq!(balance(&rental), 70000.0);
        assert_eq!(duration_days(rental.start_date, rental.end_date), 4);

        let settlement = Settlement::of(&rental);
        assert_eq!(settlement.label(), "BALANCE DUE");
        assert_eq!(settlement.amount(), 70000.0);

        assert!(show_deposit_row(&rental));
        assert!(show_paid_row(&rental));
        assert!(!show_watermark(&rental));
    }
}

//! Frontend Models
//!
//! Data structures matching the rental API responses. The backend serializes
//! field names in camelCase.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Full rental record as returned by `GET /api/rentals/:id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rental {
    pub id: String,
    pub rental_number: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub total_amount: f64,
    pub deposit: f64,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub customer: Customer,
    pub rental_items: Vec<RentalItem>,
    pub payments: Vec<Payment>,
    pub created_by: Staff,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub name: String,
    pub phone: String,
    pub address: Option<String>,
}

/// One line of a rental: an item type, a quantity and a price.
/// The subtotal comes precomputed from the backend and is trusted as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalItem {
    pub quantity: u32,
    pub price_per_unit: f64,
    pub subtotal: f64,
    pub item: ItemInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemInfo {
    pub name: String,
    pub category: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub amount: f64,
    pub payment_method: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    pub name: String,
}

/// Listing row as returned by `GET /api/rentals`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalSummary {
    pub id: String,
    pub rental_number: String,
    pub status: String,
    pub total_amount: f64,
    pub customer: Customer,
}

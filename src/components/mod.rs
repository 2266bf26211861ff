//! Dashboard Components
//!
//! One component per file, pages and invoice building blocks.

mod invoice_document;
mod invoice_page;
mod items_table;
mod payment_history;
mod rentals_page;
mod totals_panel;

pub use invoice_document::InvoiceDocument;
pub use invoice_page::InvoicePage;
pub use items_table::ItemsTable;
pub use payment_history::PaymentHistory;
pub use rentals_page::RentalsPage;
pub use totals_panel::TotalsPanel;

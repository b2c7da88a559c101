//! Record kinds for the practice: customers, suppliers, inventory, invoices,
//! and expenses, plus the process-wide application settings document.
//!
//! Every kind is a plain tenant-scoped document built from a `Draft` of raw
//! form input. Business rules here are deterministic validation only — no IO,
//! no HTTP, no storage.

pub mod customer;
pub mod expense;
pub mod form;
pub mod inventory;
pub mod invoice;
pub mod settings;
pub mod supplier;

pub use customer::{Customer, CustomerDraft};
pub use expense::{Expense, ExpenseDraft};
pub use inventory::{InventoryItem, InventoryItemDraft};
pub use invoice::{Invoice, InvoiceDraft, InvoiceLine, InvoiceLineDraft};
pub use settings::{AppSettings, PaymentGatewaySettings, SettingsForm};
pub use supplier::{Supplier, SupplierDraft};

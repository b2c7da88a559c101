//! `vettrack-export` — read-only snapshot exports.
//!
//! Two shapes: a full-tenant JSON backup of all six collections, and CSV
//! projections of invoices/expenses for a selected date range. Neither is a
//! sync or import path — restoring a backup is delegated to the store's own
//! tooling.

pub mod backup;
pub mod csv;

pub use backup::{ExportError, TenantBackup, tenant_backup};
pub use csv::{expenses_csv, invoices_csv};

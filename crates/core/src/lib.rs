//! `vettrack-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! strongly-typed identifiers, the money representation, the record contract
//! shared by all collection types, and the domain error model.

pub mod error;
pub mod id;
pub mod money;
pub mod record;

pub use error::{DomainError, DomainResult, FieldError, FieldErrors};
pub use id::{RecordId, TenantId, UserId};
pub use money::Money;
pub use record::Record;

//! `vettrack-triage`
//!
//! **Responsibility:** the AI-assisted triage boundary.
//!
//! This crate is intentionally **not** part of the domain model:
//! - It must not depend on the record types or the store.
//! - It must not mutate domain state.
//! - It forwards free-text medical history to an external structured-output
//!   model and returns the fixed-shape result, or a typed failure.
//!
//! One request, one response: no retries, no streaming, no partial results,
//! no fallback reasoning of its own.

pub mod gateway;
pub mod http;
pub mod report;
pub mod request;

pub use gateway::{ModelClient, TriageGateway, output_schema};
pub use http::{HttpModelClient, ModelEndpoint};
pub use report::{TriageError, TriageOutcome, TriageReport};
pub use request::{MIN_HISTORY_CHARS, TriageId, TriageRequest};

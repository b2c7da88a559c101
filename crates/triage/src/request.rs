//! Triage request: validated input plus an identity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::report::TriageError;

/// Minimum medical-history length accepted for triage.
pub const MIN_HISTORY_CHARS: usize = 20;

/// Identity of one triage submission.
///
/// Concurrent submissions are allowed; callers use this id to discard
/// responses that no longer match the latest submission.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TriageId(Uuid);

impl TriageId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for TriageId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for TriageId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A validated triage submission.
///
/// Construction is the validation boundary: a request that exists has
/// already passed the length check, so nothing short of the minimum can
/// reach the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriageRequest {
    id: TriageId,
    medical_history: String,
}

impl TriageRequest {
    pub fn new(medical_history: impl Into<String>) -> Result<Self, TriageError> {
        let medical_history = medical_history.into();
        let length = medical_history.chars().count();
        if length < MIN_HISTORY_CHARS {
            return Err(TriageError::InputTooShort {
                length,
                minimum: MIN_HISTORY_CHARS,
            });
        }
        Ok(Self {
            id: TriageId::new(),
            medical_history,
        })
    }

    pub fn id(&self) -> TriageId {
        self.id
    }

    pub fn medical_history(&self) -> &str {
        &self.medical_history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nineteen_characters_are_rejected() {
        let input = "a".repeat(19);
        let err = TriageRequest::new(input).unwrap_err();
        assert_eq!(
            err,
            TriageError::InputTooShort {
                length: 19,
                minimum: MIN_HISTORY_CHARS
            }
        );
    }

    #[test]
    fn twenty_characters_are_accepted() {
        let request = TriageRequest::new("a".repeat(20)).unwrap();
        assert_eq!(request.medical_history().len(), 20);
    }

    #[test]
    fn length_is_counted_in_characters_not_bytes() {
        // 20 multi-byte characters.
        let request = TriageRequest::new("é".repeat(20));
        assert!(request.is_ok());
    }

    #[test]
    fn each_request_gets_its_own_identity() {
        let a = TriageRequest::new("persistent cough for two weeks").unwrap();
        let b = TriageRequest::new("persistent cough for two weeks").unwrap();
        assert_ne!(a.id(), b.id());
    }
}

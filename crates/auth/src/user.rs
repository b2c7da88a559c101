//! Staff account record.

use serde::{Deserialize, Serialize};

use vettrack_core::{DomainResult, FieldErrors, UserId};

use crate::Role;

/// A staff account in the `users` collection.
///
/// Unlike the business records, users are not tenant-scoped documents — the
/// user *is* the tenant. Accounts are created on first sign-in with the
/// default role and updated only through role changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppUser {
    pub id: UserId,
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

impl AppUser {
    /// Build the account created on a user's first sign-in.
    pub fn first_sign_in(id: UserId, email: impl Into<String>) -> DomainResult<Self> {
        let email = email.into();
        let mut errors = FieldErrors::new();
        errors.require("email", &email);
        errors.into_result()?;

        Ok(Self {
            id,
            email: email.trim().to_string(),
            role: Role::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sign_in_defaults_to_worker() {
        let user = AppUser::first_sign_in(UserId::new(), "vet@example.com").unwrap();
        assert_eq!(user.role, Role::Worker);
    }

    #[test]
    fn missing_role_in_stored_document_deserializes_as_worker() {
        let id = UserId::new();
        let json = format!(r#"{{"id":"{id}","email":"vet@example.com"}}"#);
        let user: AppUser = serde_json::from_str(&json).unwrap();
        assert_eq!(user.role, Role::Worker);
    }

    #[test]
    fn blank_email_is_rejected() {
        assert!(AppUser::first_sign_in(UserId::new(), "  ").is_err());
    }
}

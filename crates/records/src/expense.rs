//! Expense records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use vettrack_core::{DomainResult, FieldErrors, Money, Record, RecordId, TenantId};

use crate::form;

/// A logged practice expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: RecordId,
    pub category: String,
    pub amount: Money,
    pub date: NaiveDate,
    #[serde(rename = "userId")]
    pub tenant_id: TenantId,
}

/// Raw expense form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub category: String,
    pub amount: String,
    pub date: String,
}

impl Record for Expense {
    type Draft = ExpenseDraft;

    const COLLECTION: &'static str = "expenses";

    fn id(&self) -> RecordId {
        self.id
    }

    fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    fn from_draft(id: RecordId, tenant_id: TenantId, draft: ExpenseDraft) -> DomainResult<Self> {
        let mut errors = FieldErrors::new();
        errors.require("category", &draft.category);
        let amount = form::parse_money(&mut errors, "amount", &draft.amount);
        let date = form::parse_date(&mut errors, "date", &draft.date);
        errors.into_result()?;

        Ok(Self {
            id,
            category: draft.category.trim().to_string(),
            amount: amount.unwrap_or_default(),
            date: date.unwrap_or_default(),
            tenant_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vettrack_core::DomainError;

    #[test]
    fn valid_expense_parses() {
        let draft = ExpenseDraft {
            category: "Utilities".into(),
            amount: "120.50".into(),
            date: "2025-07-01".into(),
        };
        let expense = Expense::from_draft(RecordId::new(), TenantId::new(), draft).unwrap();
        assert_eq!(expense.amount, Money::from_minor_units(12050));
    }

    #[test]
    fn negative_amount_is_rejected() {
        let draft = ExpenseDraft {
            category: "Utilities".into(),
            amount: "-5".into(),
            date: "2025-07-01".into(),
        };
        let err = Expense::from_draft(RecordId::new(), TenantId::new(), draft).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}

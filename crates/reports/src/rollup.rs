//! Date-range rollups for the reports page.

use chrono::NaiveDate;

use vettrack_core::Money;
use vettrack_records::{Expense, Invoice};

/// A record with a calendar date and a monetary amount. Lets invoices and
/// expenses share one rollup implementation.
pub trait DatedAmount {
    fn date(&self) -> NaiveDate;
    fn amount(&self) -> Money;
}

impl DatedAmount for Invoice {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn amount(&self) -> Money {
        self.total_amount
    }
}

impl DatedAmount for Expense {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn amount(&self) -> Money {
        self.amount
    }
}

/// Records within a range plus their total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rollup<T> {
    pub total: Money,
    pub items: Vec<T>,
}

impl<T> Default for Rollup<T> {
    fn default() -> Self {
        Self {
            total: Money::ZERO,
            items: Vec::new(),
        }
    }
}

/// Filter `records` to dates within `[from, to]` (inclusive on both bounds)
/// and total their amounts.
pub fn date_range_rollup<T>(records: &[T], from: NaiveDate, to: NaiveDate) -> Rollup<T>
where
    T: DatedAmount + Clone,
{
    let items: Vec<T> = records
        .iter()
        .filter(|r| r.date() >= from && r.date() <= to)
        .cloned()
        .collect();
    let total = items.iter().map(|r| r.amount()).sum();
    Rollup { total, items }
}

/// Net profit in signed minor units: sales minus expenses, negative on loss.
pub fn net_profit(sales_total: Money, expenses_total: Money) -> i64 {
    sales_total.signed_diff(expenses_total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vettrack_core::{RecordId, TenantId};

    fn expense(date: &str, amount_minor: u64) -> Expense {
        Expense {
            id: RecordId::new(),
            category: "Utilities".into(),
            amount: Money::from_minor_units(amount_minor),
            date: date.parse().unwrap(),
            tenant_id: TenantId::new(),
        }
    }

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn rollup_includes_both_boundary_dates() {
        let expenses = vec![
            expense("2025-06-30", 100), // day before: out
            expense("2025-07-01", 200), // from: in
            expense("2025-07-15", 300),
            expense("2025-07-31", 400), // to: in
            expense("2025-08-01", 500), // day after: out
        ];
        let rollup = date_range_rollup(&expenses, day("2025-07-01"), day("2025-07-31"));
        assert_eq!(rollup.items.len(), 3);
        assert_eq!(rollup.total, Money::from_minor_units(900));
    }

    #[test]
    fn empty_input_yields_zero_totals() {
        let rollup = date_range_rollup::<Expense>(&[], day("2025-07-01"), day("2025-07-31"));
        assert!(rollup.items.is_empty());
        assert_eq!(rollup.total, Money::ZERO);
    }

    #[test]
    fn single_day_range_works() {
        let expenses = vec![expense("2025-07-15", 300), expense("2025-07-16", 1)];
        let rollup = date_range_rollup(&expenses, day("2025-07-15"), day("2025-07-15"));
        assert_eq!(rollup.items.len(), 1);
        assert_eq!(rollup.total, Money::from_minor_units(300));
    }

    #[test]
    fn net_profit_goes_negative_on_loss() {
        assert_eq!(
            net_profit(Money::from_minor_units(500), Money::from_minor_units(700)),
            -200
        );
        assert_eq!(net_profit(Money::ZERO, Money::ZERO), 0);
    }
}

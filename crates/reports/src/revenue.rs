//! Revenue aggregation for the dashboard.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use vettrack_core::Money;
use vettrack_records::Invoice;

/// One calendar-month bucket of the sales chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyRevenue {
    /// Abbreviated month name ("Jan").
    pub label: &'static str,
    pub year: i32,
    pub month: u32,
    pub total: Money,
}

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// `(year, month)` shifted back by `back` calendar months.
fn month_back(year: i32, month: u32, back: u32) -> (i32, u32) {
    let index = year as i64 * 12 + (month as i64 - 1) - back as i64;
    (index.div_euclid(12) as i32, (index.rem_euclid(12) + 1) as u32)
}

fn first_of_month(year: i32, month: u32) -> NaiveDate {
    // Day 1 of a valid (year, month) always exists.
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MIN)
}

/// Bucket invoice totals by calendar month, most recent last.
///
/// Produces exactly `months_back` buckets ending at `now`'s month, zero-filled
/// for months without invoices. Invoices outside the window are ignored.
pub fn monthly_revenue(
    invoices: &[Invoice],
    now: NaiveDate,
    months_back: u32,
) -> Vec<MonthlyRevenue> {
    let mut buckets: Vec<MonthlyRevenue> = (0..months_back)
        .rev()
        .map(|back| {
            let (year, month) = month_back(now.year(), now.month(), back);
            MonthlyRevenue {
                label: MONTH_LABELS[(month - 1) as usize],
                year,
                month,
                total: Money::ZERO,
            }
        })
        .collect();

    for invoice in invoices {
        let (year, month) = (invoice.date.year(), invoice.date.month());
        if let Some(bucket) = buckets
            .iter_mut()
            .find(|b| b.year == year && b.month == month)
        {
            bucket.total = bucket
                .total
                .checked_add(invoice.total_amount)
                .unwrap_or(bucket.total);
        }
    }

    buckets
}

/// Sum of all invoice totals, regardless of date.
pub fn total_revenue(invoices: &[Invoice]) -> Money {
    invoices.iter().map(|i| i.total_amount).sum()
}

/// Month-over-month revenue change, in percent.
///
/// Compares the current month to date (invoices dated on or after the first
/// of `now`'s month) against the full previous calendar month. A prior month
/// of zero with current revenue reports +100%; two zero months report 0%.
pub fn revenue_delta(invoices: &[Invoice], now: NaiveDate) -> f64 {
    let this_month_start = first_of_month(now.year(), now.month());
    let (prior_year, prior_month) = month_back(now.year(), now.month(), 1);
    let prior_start = first_of_month(prior_year, prior_month);

    let mut current = Money::ZERO;
    let mut prior = Money::ZERO;
    for invoice in invoices {
        if invoice.date >= this_month_start {
            current = current.checked_add(invoice.total_amount).unwrap_or(current);
        } else if invoice.date >= prior_start {
            prior = prior.checked_add(invoice.total_amount).unwrap_or(prior);
        }
    }

    if !prior.is_zero() {
        let current = current.minor_units() as f64;
        let prior = prior.minor_units() as f64;
        (current - prior) / prior * 100.0
    } else if !current.is_zero() {
        100.0
    } else {
        0.0
    }
}

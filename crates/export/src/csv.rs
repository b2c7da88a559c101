//! CSV projections of the reports-page rollups.

use std::collections::HashMap;

use chrono::NaiveDate;

use vettrack_core::RecordId;
use vettrack_records::{Customer, Expense, Invoice};
use vettrack_reports::date_range_rollup;

/// Quote a field per RFC 4180: only when it contains a comma, a quote or a
/// line break, doubling embedded quotes.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn csv_row(fields: &[&str]) -> String {
    let mut row = fields
        .iter()
        .map(|f| csv_field(f))
        .collect::<Vec<_>>()
        .join(",");
    row.push_str("\r\n");
    row
}

/// Invoices within `[from, to]` as `Customer,Date,Amount` rows.
///
/// The customer column shows the owner's name, looked up in `customers`;
/// invoices whose customer is no longer present fall back to `N/A` rather
/// than being dropped from the report.
pub fn invoices_csv(
    invoices: &[Invoice],
    customers: &[Customer],
    from: NaiveDate,
    to: NaiveDate,
) -> String {
    let names: HashMap<RecordId, &str> = customers
        .iter()
        .map(|c| (c.id, c.owner_name.as_str()))
        .collect();

    let rollup = date_range_rollup(invoices, from, to);
    let mut out = csv_row(&["Customer", "Date", "Amount"]);
    for invoice in &rollup.items {
        let customer = names.get(&invoice.customer_id).copied().unwrap_or("N/A");
        out.push_str(&csv_row(&[
            customer,
            &invoice.date.format("%Y-%m-%d").to_string(),
            &invoice.total_amount.to_string(),
        ]));
    }
    out
}

/// Expenses within `[from, to]` as `Category,Date,Amount` rows.
pub fn expenses_csv(expenses: &[Expense], from: NaiveDate, to: NaiveDate) -> String {
    let rollup = date_range_rollup(expenses, from, to);
    let mut out = csv_row(&["Category", "Date", "Amount"]);
    for expense in &rollup.items {
        out.push_str(&csv_row(&[
            &expense.category,
            &expense.date.format("%Y-%m-%d").to_string(),
            &expense.amount.to_string(),
        ]));
    }
    out
}

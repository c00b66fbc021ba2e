//! Null-value check for [`crate::types::Table`].

use serde::Serialize;

use crate::types::Table;

use super::percent_of;

/// Null statistics for one column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnNulls {
    /// Column name.
    pub column: String,
    /// Number of rows whose cell for this column is null.
    pub count: usize,
    /// `count / total_rows * 100`; `0.0` for an empty table.
    pub percentage: f64,
}

/// Result of the null-value check: one entry per column, in schema order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NullSummary {
    /// Per-column null counts and percentages.
    pub columns: Vec<ColumnNulls>,
}

/// Count null cells per column.
///
/// Read-only, deterministic, and idempotent: re-running on an unchanged table produces an
/// identical summary.
pub fn check_nulls(table: &Table) -> NullSummary {
    let total_rows = table.row_count();
    let columns = table
        .schema
        .fields
        .iter()
        .enumerate()
        .map(|(idx, field)| {
            let count = table
                .rows
                .iter()
                .filter(|row| row.get(idx).is_none_or(|v| v.is_null()))
                .count();
            ColumnNulls {
                column: field.name.clone(),
                count,
                percentage: percent_of(count, total_rows),
            }
        })
        .collect();

    NullSummary { columns }
}

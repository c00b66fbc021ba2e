//! Column-type check for [`crate::types::Table`].

use serde::Serialize;

use crate::types::Table;

/// One column's inferred type label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnType {
    /// Column name.
    pub column: String,
    /// Logical type label (`int64`, `float64`, `bool`, `utf8`, `datetime`, `mixed`).
    pub data_type: String,
}

/// Result of the column-type check: one entry per column, in schema order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnTypeSummary {
    /// Per-column type labels.
    pub columns: Vec<ColumnType>,
}

/// Surface each column's load-time type metadata.
///
/// No inference happens here: the labels are whatever the loader attached to the schema,
/// including `mixed` for heterogeneous columns.
pub fn check_column_types(table: &Table) -> ColumnTypeSummary {
    let columns = table
        .schema
        .fields
        .iter()
        .map(|field| ColumnType {
            column: field.name.clone(),
            data_type: field.data_type.label().to_string(),
        })
        .collect();

    ColumnTypeSummary { columns }
}

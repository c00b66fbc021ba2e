//! Duplicate-row check for [`crate::types::Table`].

use std::collections::HashSet;

use serde::Serialize;

use crate::types::{Table, Value};

use super::percent_of;

/// Result of the duplicate-row check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DuplicateSummary {
    /// Number of rows flagged as duplicates.
    pub total_count: usize,
    /// `total_count / total_rows * 100`; `0.0` for an empty table.
    pub percentage: f64,
    /// Zero-based indices of flagged rows, ascending. Always `total_count` entries.
    pub duplicate_rows: Vec<usize>,
}

/// Hashable stand-in for one cell, so whole rows can be keyed in a set.
///
/// Floats compare bitwise: equality is exact and total, NaN equals NaN with the same bit
/// pattern, and `-0.0` differs from `0.0`. Nulls equal nulls.
#[derive(PartialEq, Eq, Hash)]
enum CellKey<'a> {
    Null,
    Int64(i64),
    Float64(u64),
    Bool(bool),
    Utf8(&'a str),
    DateTime(&'a str),
}

impl<'a> From<&'a Value> for CellKey<'a> {
    fn from(v: &'a Value) -> Self {
        match v {
            Value::Null => Self::Null,
            Value::Int64(i) => Self::Int64(*i),
            Value::Float64(f) => Self::Float64(f.to_bits()),
            Value::Bool(b) => Self::Bool(*b),
            Value::Utf8(s) => Self::Utf8(s),
            Value::DateTime(s) => Self::DateTime(s),
        }
    }
}

/// Find rows that are exact duplicates of an earlier row.
///
/// A row at index `i` is a duplicate iff some row at index `j < i` is equal to it across every
/// column. The first occurrence of a value-tuple is never flagged; every later occurrence is.
/// Read-only, deterministic, and idempotent.
pub fn check_duplicates(table: &Table) -> DuplicateSummary {
    let mut seen: HashSet<Vec<CellKey<'_>>> = HashSet::with_capacity(table.row_count());
    let mut duplicate_rows: Vec<usize> = Vec::new();

    for (idx, row) in table.rows.iter().enumerate() {
        let key: Vec<CellKey<'_>> = row.iter().map(CellKey::from).collect();
        if !seen.insert(key) {
            duplicate_rows.push(idx);
        }
    }

    DuplicateSummary {
        total_count: duplicate_rows.len(),
        percentage: percent_of(duplicate_rows.len(), table.row_count()),
        duplicate_rows,
    }
}

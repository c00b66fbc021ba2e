//! Quality checks and the aggregated report.
//!
//! Three independent, read-only checks run over a loaded [`Table`]:
//!
//! - [`check_nulls`]: per-column null counts and percentages
//! - [`check_duplicates`]: rows that exactly repeat an earlier row (all but the first
//!   occurrence)
//! - [`check_column_types`]: the loader-inferred type label of each column
//!
//! [`QualityChecker`] drives them and accumulates their results into one [`Report`]. Each check
//! method can be called on its own and re-run at will; re-running recomputes and overwrites that
//! check's slot. [`QualityChecker::run_all_checks`] runs all three in a fixed order so the
//! textual output is deterministic.
//!
//! # Example
//!
//! ```
//! use tabular_quality::quality::QualityChecker;
//! use tabular_quality::types::{DataType, Field, Schema, Table, Value};
//!
//! let schema = Schema::new(vec![
//!     Field::new("id", DataType::Int64),
//!     Field::new("name", DataType::Utf8),
//! ]);
//! let table = Table::new(
//!     schema,
//!     vec![
//!         vec![Value::Int64(1), Value::Utf8("Ada".to_string())],
//!         vec![Value::Int64(1), Value::Utf8("Ada".to_string())],
//!         vec![Value::Int64(2), Value::Null],
//!     ],
//! );
//!
//! let mut checker = QualityChecker::new(table);
//! let report = checker.run_all_checks();
//! assert_eq!(report.duplicates.as_ref().unwrap().duplicate_rows, vec![1]);
//! assert_eq!(report.null_values.as_ref().unwrap().columns[1].count, 1);
//! ```

pub mod column_types;
pub mod duplicates;
pub mod nulls;

use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::error::LoadResult;
use crate::loader::{load_from_path, LoadOptions};
use crate::types::Table;

pub use column_types::{check_column_types, ColumnType, ColumnTypeSummary};
pub use duplicates::{check_duplicates, DuplicateSummary};
pub use nulls::{check_nulls, ColumnNulls, NullSummary};

/// `count / total * 100`, with the empty-table policy applied.
///
/// Percentages over zero rows are defined as `0.0`, never NaN. Every percentage in this crate
/// goes through here so the policy cannot drift between checks.
pub(crate) fn percent_of(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

/// Aggregate result of all quality checks, keyed by check name.
///
/// Created empty, populated by check invocations, and returned to the caller; after
/// [`QualityChecker::run_all_checks`] every slot is `Some`. Serializes to a mapping with the
/// three keys `null_values`, `duplicates`, and `column_types`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Report {
    /// Null-value check result, if that check has run.
    pub null_values: Option<NullSummary>,
    /// Duplicate-row check result, if that check has run.
    pub duplicates: Option<DuplicateSummary>,
    /// Column-type check result, if that check has run.
    pub column_types: Option<ColumnTypeSummary>,
}

impl Report {
    /// True once all three checks have populated their slots.
    pub fn is_complete(&self) -> bool {
        self.null_values.is_some() && self.duplicates.is_some() && self.column_types.is_some()
    }
}

impl fmt::Display for Report {
    /// Human-readable summary in the fixed order nulls, duplicates, column types, with
    /// percentages to two decimal places. Sections for checks that have not run are omitted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(nulls) = &self.null_values {
            writeln!(f, "Null Values Summary:")?;
            for col in &nulls.columns {
                writeln!(
                    f,
                    "{}: {} nulls ({:.2}%)",
                    col.column, col.count, col.percentage
                )?;
            }
        }

        if let Some(dups) = &self.duplicates {
            if self.null_values.is_some() {
                writeln!(f)?;
            }
            writeln!(f, "Duplicates Summary:")?;
            writeln!(f, "Total duplicate rows: {}", dups.total_count)?;
            writeln!(f, "Percentage of duplicates: {:.2}%", dups.percentage)?;
        }

        if let Some(types) = &self.column_types {
            if self.null_values.is_some() || self.duplicates.is_some() {
                writeln!(f)?;
            }
            writeln!(f, "Column Types:")?;
            for col in &types.columns {
                writeln!(f, "{}: {}", col.column, col.data_type)?;
            }
        }

        Ok(())
    }
}

/// Runs quality checks over one [`Table`] and accumulates their results into a [`Report`].
///
/// The checker owns the table for the duration of analysis and never mutates it. Checks are
/// independent; each method recomputes its result from the table on every call, so there is no
/// stale state however they are interleaved.
#[derive(Debug, Clone)]
pub struct QualityChecker {
    table: Table,
    report: Report,
}

impl QualityChecker {
    /// Create a checker over an already-materialized table, with an empty report.
    pub fn new(table: Table) -> Self {
        Self {
            table,
            report: Report::default(),
        }
    }

    /// Load a table from `path` (see [`load_from_path`]) and create a checker over it.
    pub fn from_path(path: impl AsRef<Path>, options: &LoadOptions) -> LoadResult<Self> {
        Ok(Self::new(load_from_path(path, options)?))
    }

    /// The table under analysis.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Run the null-value check, store its result in the report, and return it.
    pub fn check_nulls(&mut self) -> &NullSummary {
        self.report.null_values.insert(check_nulls(&self.table))
    }

    /// Run the duplicate-row check, store its result in the report, and return it.
    pub fn check_duplicates(&mut self) -> &DuplicateSummary {
        self.report.duplicates.insert(check_duplicates(&self.table))
    }

    /// Run the column-type check, store its result in the report, and return it.
    pub fn check_column_types(&mut self) -> &ColumnTypeSummary {
        self.report
            .column_types
            .insert(check_column_types(&self.table))
    }

    /// Run all checks in the fixed order nulls, duplicates, column types, and return the
    /// complete report.
    pub fn run_all_checks(&mut self) -> &Report {
        self.check_nulls();
        self.check_duplicates();
        self.check_column_types();
        &self.report
    }

    /// The report in its current state (slots for checks that have not run are `None`).
    pub fn report(&self) -> &Report {
        &self.report
    }

    /// Consume the checker and return the report.
    pub fn into_report(self) -> Report {
        self.report
    }
}

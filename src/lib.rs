//! `tabular-quality` is a small library for producing data-quality reports over spreadsheet-like
//! tabular files (CSV, and Excel/workbook formats behind the `excel` feature).
//!
//! A loader materializes the file into an in-memory [`types::Table`] with inferred column types;
//! a [`quality::QualityChecker`] then runs three independent, read-only checks over it:
//!
//! - **Null values**: per-column null counts and percentages
//! - **Duplicate rows**: rows exactly equal to an earlier row (the first occurrence is never
//!   flagged)
//! - **Column types**: the inferred logical type label of each column, including `mixed` for
//!   heterogeneous columns
//!
//! The results accumulate into one [`quality::Report`], keyed by check name.
//!
//! ## Quick example: check a file
//!
//! ```no_run
//! use tabular_quality::loader::LoadOptions;
//! use tabular_quality::quality::QualityChecker;
//!
//! # fn main() -> Result<(), tabular_quality::LoadError> {
//! // Format is auto-detected by extension (.csv/.xlsx/...).
//! let mut checker = QualityChecker::from_path("data.xlsx", &LoadOptions::default())?;
//! let report = checker.run_all_checks();
//! println!("{report}");
//! # Ok(())
//! # }
//! ```
//!
//! ## In-memory tables
//!
//! Checks run over any [`types::Table`], however it was built:
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
//!         vec![Value::Int64(2), Value::Null],
//!         vec![Value::Int64(1), Value::Utf8("Ada".to_string())],
//!     ],
//! );
//!
//! let mut checker = QualityChecker::new(table);
//! let report = checker.run_all_checks();
//! assert_eq!(report.duplicates.as_ref().unwrap().total_count, 1);
//! ```
//!
//! ## Modules
//!
//! - [`loader`]: unified load entrypoint, format-specific loaders, type inference, observers
//! - [`types`]: schema + in-memory table types
//! - [`quality`]: the three checks, the report, and the [`quality::QualityChecker`] driver
//! - [`error`]: error types used across loading
//!
//! ## Empty tables
//!
//! Percentage computations over a zero-row table are defined as `0.0` (never NaN); counts and
//! index lists are empty. See [`quality`] for details.

pub mod error;
pub mod loader;
pub mod quality;
pub mod types;

pub use error::{LoadError, LoadResult};
pub use quality::{QualityChecker, Report};
pub use types::{DataType, Table, Value};

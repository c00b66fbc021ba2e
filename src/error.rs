use thiserror::Error;

/// Convenience result type for load operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Error type returned by table loaders.
///
/// This is a single error enum shared across CSV and (optional) Excel loading. Quality checks
/// themselves are total functions over a loaded [`crate::types::Table`] and cannot fail; every
/// failure in this crate is a failure to produce a table in the first place.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "excel")]
    /// Workbook error (feature-gated behind `excel`).
    #[error("excel error: {0}")]
    Excel(#[from] calamine::Error),

    /// CSV error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The input is not a loadable table (unknown format, no sheets, no header row, ...).
    #[error("load error: {message}")]
    Load { message: String },
}

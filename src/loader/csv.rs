//! CSV loading implementation.

use std::path::Path;

use crate::error::LoadResult;
use crate::types::{Table, Value};

use super::infer::build_table;

/// Load a CSV file into an in-memory [`Table`].
///
/// Rules:
///
/// - CSV must have a header row; header cells become the column names.
/// - Empty/whitespace-only cells become [`Value::Null`].
/// - Every other cell is parsed untyped: integer, then float, then bool
///   (`true/false/t/f/yes/no/y/n`, case-insensitive), else text.
/// - Column types are inferred from the parsed cells afterwards.
pub fn load_csv_from_path(path: impl AsRef<Path>) -> LoadResult<Table> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    load_csv_from_reader(&mut rdr)
}

/// Load CSV data from an existing CSV reader.
pub fn load_csv_from_reader<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> LoadResult<Table> {
    let names: Vec<String> = rdr.headers()?.iter().map(|h| h.trim().to_string()).collect();

    let mut rows: Vec<Vec<Value>> = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let row: Vec<Value> = (0..names.len())
            .map(|idx| parse_cell(record.get(idx).unwrap_or("")))
            .collect();
        rows.push(row);
    }

    Ok(build_table(&names, rows))
}

fn parse_cell(raw: &str) -> Value {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }
    if let Ok(i) = trimmed.parse::<i64>() {
        return Value::Int64(i);
    }
    if let Ok(f) = trimmed.parse::<f64>() {
        return Value::Float64(f);
    }
    match parse_bool(trimmed) {
        Some(b) => Value::Bool(b),
        None => Value::Utf8(trimmed.to_owned()),
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "t" | "yes" | "y" => Some(true),
        "false" | "f" | "no" | "n" => Some(false),
        _ => None,
    }
}

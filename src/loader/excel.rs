#![cfg(feature = "excel")]

//! Workbook loading implementation (`.xlsx`, `.xls`, `.xlsm`, `.xlsb`, `.ods`).

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use crate::error::{LoadError, LoadResult};
use crate::types::{Table, Value};

use super::infer::build_table;

/// Load an Excel document into an in-memory [`Table`].
///
/// Behavior:
/// - Picks `sheet_name` if provided; otherwise uses the first sheet in the workbook
/// - Detects the first non-empty row as the header row; header cells become column names
/// - Reads remaining rows and converts cells into typed [`Value`]s
/// - Infers column types from the converted cells
pub fn load_excel_from_path(
    path: impl AsRef<Path>,
    sheet_name: Option<&str>,
) -> LoadResult<Table> {
    let sheets: Option<Vec<&str>> = sheet_name.map(|s| vec![s]);
    load_excel_workbook_from_path(path, sheets.as_deref())
}

/// Load multiple sheets from an Excel workbook and concatenate all rows into one [`Table`].
///
/// - If `sheet_names` is `None`, loads **all sheets** in workbook order.
/// - If `sheet_names` is `Some(&[...])`, loads only those sheets (in the provided order).
///
/// All selected tabs must share the same header layout; column names are taken from the first
/// selected sheet and each sheet's rows are appended in order.
pub fn load_excel_workbook_from_path(
    path: impl AsRef<Path>,
    sheet_names: Option<&[&str]>,
) -> LoadResult<Table> {
    let mut workbook = open_workbook_auto(path)?;

    let sheets: Vec<String> = match sheet_names {
        Some(names) => names.iter().map(|s| s.to_string()).collect(),
        None => workbook.sheet_names().to_vec(),
    };
    if sheets.is_empty() {
        return Err(LoadError::Load {
            message: "workbook has no sheets".to_string(),
        });
    }

    let mut names: Option<Vec<String>> = None;
    let mut all_rows: Vec<Vec<Value>> = Vec::new();
    for sheet in sheets {
        let range = workbook.worksheet_range(&sheet)?;
        let (header_names, mut sheet_rows) =
            load_sheet_range(&range).map_err(|e| wrap_load_err_with_sheet(&sheet, e))?;

        match &names {
            None => names = Some(header_names),
            Some(first) => {
                if *first != header_names {
                    return Err(LoadError::Load {
                        message: format!(
                            "sheet '{sheet}' headers {header_names:?} differ from first sheet \
                             headers {first:?}"
                        ),
                    });
                }
            }
        }
        all_rows.append(&mut sheet_rows);
    }

    // names is Some: the sheet list was non-empty and every sheet produced headers.
    let names = names.unwrap_or_default();
    Ok(build_table(&names, all_rows))
}

fn load_sheet_range(range: &calamine::Range<Data>) -> LoadResult<(Vec<String>, Vec<Vec<Value>>)> {
    let (header_row_idx, names) = find_header_row(range)?;

    let mut rows: Vec<Vec<Value>> = Vec::new();
    for (idx0, row) in range.rows().enumerate() {
        if idx0 <= header_row_idx {
            continue;
        }
        let out_row: Vec<Value> = (0..names.len())
            .map(|col_idx| convert_cell(row.get(col_idx).unwrap_or(&Data::Empty)))
            .collect();
        rows.push(out_row);
    }

    Ok((names, rows))
}

fn wrap_load_err_with_sheet(sheet: &str, err: LoadError) -> LoadError {
    match err {
        LoadError::Load { message } => LoadError::Load {
            message: format!("sheet '{sheet}': {message}"),
        },
        other => other,
    }
}

fn find_header_row(range: &calamine::Range<Data>) -> LoadResult<(usize, Vec<String>)> {
    for (idx0, row) in range.rows().enumerate() {
        let non_empty = row.iter().any(|c| !matches!(c, Data::Empty));
        if non_empty {
            let names = row.iter().map(cell_to_header_string).collect();
            return Ok((idx0, names));
        }
    }
    Err(LoadError::Load {
        message: "sheet has no non-empty rows (no header row found)".to_string(),
    })
}

fn cell_to_header_string(c: &Data) -> String {
    match c {
        Data::String(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
        Data::Error(e) => format!("{e:?}"),
        Data::Empty => String::new(),
    }
}

/// Convert one workbook cell into a typed [`Value`].
///
/// Empty cells, whitespace-only strings, and error cells (`#DIV/0!`, `#N/A`, ...) all map to
/// [`Value::Null`]. Floats with no fractional part become [`Value::Int64`] so that columns of
/// spreadsheet integers (stored as floats in the file format) infer as `int64`.
fn convert_cell(c: &Data) -> Value {
    match c {
        Data::Empty | Data::Error(_) => Value::Null,
        Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Value::Null
            } else {
                Value::Utf8(trimmed.to_string())
            }
        }
        Data::Int(i) => Value::Int64(*i),
        Data::Float(f) => {
            if f.fract() == 0.0 && f.abs() < (i64::MAX as f64) {
                Value::Int64(*f as i64)
            } else {
                Value::Float64(*f)
            }
        }
        Data::Bool(b) => Value::Bool(*b),
        Data::DateTime(dt) => Value::DateTime(dt.to_string()),
        Data::DateTimeIso(s) => Value::DateTime(s.clone()),
        Data::DurationIso(s) => Value::DateTime(s.clone()),
    }
}

//! Per-column logical type inference over loaded cell values.
//!
//! Loaders produce column names plus untyped-per-cell [`Value`]s; this module derives one
//! [`DataType`] per column and builds the final [`Table`]. Nulls carry no type evidence, so a
//! column whose cells are all null is labeled [`DataType::Mixed`].

use crate::types::{DataType, Field, Schema, Table, Value};

/// Build a [`Table`] from column names and loaded rows, inferring each column's type.
///
/// After inference, `Int64` cells sitting in a `Float64` column are widened to `Float64` so that
/// a column holding `1` and `1.5` compares numerically, the same way it would have parsed had
/// every cell carried a decimal point.
pub fn build_table(names: &[String], mut rows: Vec<Vec<Value>>) -> Table {
    let fields: Vec<Field> = names
        .iter()
        .enumerate()
        .map(|(idx, name)| Field::new(name.clone(), infer_column_type(&rows, idx)))
        .collect();
    let schema = Schema::new(fields);

    widen_int_columns(&schema, &mut rows);
    Table::new(schema, rows)
}

/// Infer the logical type of column `idx` from its non-null cells.
pub fn infer_column_type(rows: &[Vec<Value>], idx: usize) -> DataType {
    let mut inferred: Option<DataType> = None;
    for row in rows {
        let Some(cell_type) = row.get(idx).and_then(Value::data_type) else {
            continue;
        };
        inferred = Some(match inferred {
            None => cell_type,
            Some(current) => unify(current, cell_type),
        });
        if inferred == Some(DataType::Mixed) {
            break;
        }
    }
    inferred.unwrap_or(DataType::Mixed)
}

/// Unify two observed cell types into one column type.
///
/// Identical types unify to themselves, `Int64`/`Float64` unify to `Float64`, and any other
/// disagreement yields [`DataType::Mixed`].
fn unify(a: DataType, b: DataType) -> DataType {
    match (a, b) {
        _ if a == b => a,
        (DataType::Int64, DataType::Float64) | (DataType::Float64, DataType::Int64) => {
            DataType::Float64
        }
        _ => DataType::Mixed,
    }
}

fn widen_int_columns(schema: &Schema, rows: &mut [Vec<Value>]) {
    let float_cols: Vec<usize> = schema
        .fields
        .iter()
        .enumerate()
        .filter(|(_, f)| f.data_type == DataType::Float64)
        .map(|(idx, _)| idx)
        .collect();

    for row in rows {
        for &idx in &float_cols {
            if let Some(&Value::Int64(v)) = row.get(idx) {
                row[idx] = Value::Float64(v as f64);
            }
        }
    }
}

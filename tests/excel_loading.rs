#![cfg(feature = "excel_test_writer")]

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use tabular_quality::loader::excel::{load_excel_from_path, load_excel_workbook_from_path};
use tabular_quality::types::{DataType, Value};

fn tmp_file(name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("tabular-quality-{name}-{nanos}.xlsx"))
}

fn write_people_xlsx(path: &PathBuf) {
    use rust_xlsxwriter::Workbook;

    let mut wb = Workbook::new();
    let ws = wb.add_worksheet();
    ws.set_name("Sheet1").unwrap();

    // header
    ws.write_string(0, 0, "id").unwrap();
    ws.write_string(0, 1, "name").unwrap();
    ws.write_string(0, 2, "score").unwrap();
    ws.write_string(0, 3, "active").unwrap();

    // row 1 (id written as a float with no fraction; loads as int64)
    ws.write_number(1, 0, 1).unwrap();
    ws.write_string(1, 1, "Ada").unwrap();
    ws.write_number(1, 2, 98.5).unwrap();
    ws.write_boolean(1, 3, true).unwrap();

    // row 2 with a blank name cell
    ws.write_number(2, 0, 2).unwrap();
    ws.write_number(2, 2, 87.25).unwrap();
    ws.write_boolean(2, 3, false).unwrap();

    wb.save(path).unwrap();
}

fn write_multi_sheet_xlsx(path: &PathBuf) {
    use rust_xlsxwriter::Workbook;

    let mut wb = Workbook::new();

    let ws1 = wb.add_worksheet();
    ws1.set_name("Sheet1").unwrap();
    ws1.write_string(0, 0, "id").unwrap();
    ws1.write_string(0, 1, "name").unwrap();
    ws1.write_number(1, 0, 1).unwrap();
    ws1.write_string(1, 1, "Ada").unwrap();
    ws1.write_number(2, 0, 2).unwrap();
    ws1.write_string(2, 1, "Grace").unwrap();

    let ws2 = wb.add_worksheet();
    ws2.set_name("Second").unwrap();
    ws2.write_string(0, 0, "id").unwrap();
    ws2.write_string(0, 1, "name").unwrap();
    ws2.write_number(1, 0, 3).unwrap();
    ws2.write_string(1, 1, "Linus").unwrap();

    wb.save(path).unwrap();
}

fn write_mixed_column_xlsx(path: &PathBuf) {
    use rust_xlsxwriter::Workbook;

    let mut wb = Workbook::new();
    let ws = wb.add_worksheet();
    ws.write_string(0, 0, "v").unwrap();
    ws.write_number(1, 0, 42).unwrap();
    ws.write_string(2, 0, "forty-two").unwrap();

    wb.save(path).unwrap();
}

#[test]
fn load_excel_happy_path_with_inference() {
    let path = tmp_file("people");
    write_people_xlsx(&path);

    let table = load_excel_from_path(&path, None).unwrap();
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.rows[0][0], Value::Int64(1));
    assert_eq!(table.rows[0][1], Value::Utf8("Ada".to_string()));
    assert_eq!(table.rows[1][1], Value::Null);
    assert_eq!(table.rows[1][3], Value::Bool(false));

    let types: Vec<DataType> = table.schema.fields.iter().map(|f| f.data_type).collect();
    assert_eq!(
        types,
        vec![
            DataType::Int64,
            DataType::Utf8,
            DataType::Float64,
            DataType::Bool
        ]
    );

    let _ = std::fs::remove_file(&path);
}

#[test]
fn load_excel_all_sheets_concatenates_rows() {
    let path = tmp_file("multi");
    write_multi_sheet_xlsx(&path);

    let table = load_excel_workbook_from_path(&path, None).unwrap();
    assert_eq!(table.row_count(), 3);
    assert_eq!(table.rows[2][0], Value::Int64(3));
    assert_eq!(table.rows[2][1], Value::Utf8("Linus".to_string()));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn load_excel_selected_sheet_only() {
    let path = tmp_file("multi-selected");
    write_multi_sheet_xlsx(&path);

    let sheets = vec!["Second"];
    let table = load_excel_workbook_from_path(&path, Some(&sheets)).unwrap();
    assert_eq!(table.row_count(), 1);
    assert_eq!(table.rows[0][0], Value::Int64(3));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn load_excel_mixed_column_gets_mixed_label() {
    let path = tmp_file("mixed");
    write_mixed_column_xlsx(&path);

    let table = load_excel_from_path(&path, None).unwrap();
    assert_eq!(table.schema.fields[0].data_type, DataType::Mixed);
    assert_eq!(table.rows[0][0], Value::Int64(42));
    assert_eq!(table.rows[1][0], Value::Utf8("forty-two".to_string()));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn load_excel_errors_on_missing_sheet() {
    let path = tmp_file("missing-sheet");
    write_people_xlsx(&path);

    let err = load_excel_from_path(&path, Some("NoSuchSheet")).unwrap_err();
    assert!(!err.to_string().is_empty());

    let _ = std::fs::remove_file(&path);
}

use tabular_quality::loader::LoadOptions;
use tabular_quality::quality::QualityChecker;
use tabular_quality::types::{DataType, Field, Schema, Table, Value};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// 3 rows, 2 columns [a, b]: one null, row 2 repeats row 0.
fn sample_table() -> Table {
    let schema = Schema::new(vec![
        Field::new("a", DataType::Int64),
        Field::new("b", DataType::Utf8),
    ]);
    let rows = vec![
        vec![Value::Int64(1), Value::Utf8("x".to_string())],
        vec![Value::Null, Value::Utf8("y".to_string())],
        vec![Value::Int64(1), Value::Utf8("x".to_string())],
    ];
    Table::new(schema, rows)
}

#[test]
fn nulls_and_duplicates_on_three_row_table() {
    let mut checker = QualityChecker::new(sample_table());
    let report = checker.run_all_checks();

    let nulls = report.null_values.as_ref().unwrap();
    assert_eq!(nulls.columns[0].count, 0);
    assert!(approx(nulls.columns[0].percentage, 0.0));
    assert_eq!(nulls.columns[1].count, 1);
    assert!(approx(nulls.columns[1].percentage, 100.0 / 3.0));

    let dups = report.duplicates.as_ref().unwrap();
    assert_eq!(dups.total_count, 1);
    assert!(approx(dups.percentage, 100.0 / 3.0));
    assert_eq!(dups.duplicate_rows, vec![2]);
}

#[test]
fn empty_table_reports_zero_percentages() {
    let schema = Schema::new(vec![
        Field::new("a", DataType::Int64),
        Field::new("b", DataType::Utf8),
    ]);
    let mut checker = QualityChecker::new(Table::new(schema, vec![]));
    let report = checker.run_all_checks();

    let nulls = report.null_values.as_ref().unwrap();
    for col in &nulls.columns {
        assert_eq!(col.count, 0);
        assert_eq!(col.percentage, 0.0);
        assert!(!col.percentage.is_nan());
    }

    let dups = report.duplicates.as_ref().unwrap();
    assert_eq!(dups.total_count, 0);
    assert_eq!(dups.percentage, 0.0);
    assert!(dups.duplicate_rows.is_empty());

    // Column-type entries survive even with zero rows.
    assert_eq!(report.column_types.as_ref().unwrap().columns.len(), 2);
}

#[test]
fn table_without_duplicates_reports_empty_index_list() {
    let schema = Schema::new(vec![Field::new("a", DataType::Int64)]);
    let rows = vec![
        vec![Value::Int64(1)],
        vec![Value::Int64(2)],
        vec![Value::Int64(3)],
    ];
    let mut checker = QualityChecker::new(Table::new(schema, rows));
    let dups = checker.check_duplicates().clone();
    assert_eq!(dups.total_count, 0);
    assert_eq!(dups.duplicate_rows, Vec::<usize>::new());
}

#[test]
fn mixed_column_is_labeled_mixed_not_coerced() {
    let schema = Schema::new(vec![Field::new("v", DataType::Mixed)]);
    let rows = vec![
        vec![Value::Int64(1)],
        vec![Value::Utf8("one".to_string())],
    ];
    let mut checker = QualityChecker::new(Table::new(schema, rows));
    let types = checker.check_column_types().clone();
    assert_eq!(types.columns[0].data_type, "mixed");
}

#[test]
fn report_is_bit_identical_across_runs() {
    let mut checker = QualityChecker::new(sample_table());
    let first = checker.run_all_checks().clone();
    let second = checker.run_all_checks().clone();

    assert_eq!(first, second);
    // Serialized form is identical too (no map-ordering drift).
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn null_counts_bounded_by_cell_count() {
    let table = sample_table();
    let mut checker = QualityChecker::new(table.clone());
    let nulls = checker.check_nulls().clone();
    let total: usize = nulls.columns.iter().map(|c| c.count).sum();
    assert!(total <= table.cell_count());
}

#[test]
fn duplicate_count_matches_index_list_length() {
    let mut checker = QualityChecker::new(sample_table());
    let dups = checker.check_duplicates().clone();
    assert_eq!(dups.total_count, dups.duplicate_rows.len());
}

#[test]
fn column_type_summary_preserves_column_order() {
    let mut checker = QualityChecker::new(sample_table());
    let types = checker.check_column_types().clone();
    let names: Vec<&str> = types.columns.iter().map(|c| c.column.as_str()).collect();
    assert_eq!(names, vec!["a", "b"]);
}

#[test]
fn end_to_end_report_from_csv_fixture() {
    let mut checker =
        QualityChecker::from_path("tests/fixtures/messy.csv", &LoadOptions::default()).unwrap();
    let report = checker.run_all_checks();
    assert!(report.is_complete());

    let nulls = report.null_values.as_ref().unwrap();
    let by_name = |name: &str| nulls.columns.iter().find(|c| c.column == name).unwrap();
    assert_eq!(by_name("id").count, 0);
    assert_eq!(by_name("name").count, 1);
    assert_eq!(by_name("score").count, 1);
    assert_eq!(by_name("notes").count, 1);
    assert!(approx(by_name("name").percentage, 25.0));

    let dups = report.duplicates.as_ref().unwrap();
    assert_eq!(dups.total_count, 1);
    assert_eq!(dups.duplicate_rows, vec![2]);
    assert!(approx(dups.percentage, 25.0));

    let types = report.column_types.as_ref().unwrap();
    let label = |name: &str| {
        types
            .columns
            .iter()
            .find(|c| c.column == name)
            .unwrap()
            .data_type
            .as_str()
    };
    assert_eq!(label("id"), "int64");
    assert_eq!(label("name"), "utf8");
    assert_eq!(label("score"), "float64");
    assert_eq!(label("notes"), "mixed");
}

#[test]
fn json_report_exposes_the_three_check_keys() {
    let mut checker = QualityChecker::new(sample_table());
    checker.run_all_checks();
    let json = serde_json::to_value(checker.report()).unwrap();

    assert_eq!(json["duplicates"]["total_count"], 1);
    assert_eq!(json["duplicates"]["duplicate_rows"][0], 2);
    assert_eq!(json["null_values"]["columns"][1]["count"], 1);
    assert_eq!(json["column_types"]["columns"][0]["data_type"], "int64");
}

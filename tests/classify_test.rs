mod common;

use std::collections::HashSet;

use churn_eda::{classify_columns, summarize_categories, Column, ColumnType, Table, TableSummarizer};

#[test]
fn test_classification_partitions_columns() {
    let table = common::churn_table();
    let classification = TableSummarizer::new().classify_columns(&table);

    assert_eq!(
        classification.numeric,
        vec!["SeniorCitizen", "tenure", "MonthlyCharges", "TotalCharges"]
    );
    assert_eq!(classification.categorical, vec!["gender", "Contract", "Churn"]);

    // union covers every column, intersection is empty
    let numeric: HashSet<&String> = classification.numeric.iter().collect();
    let categorical: HashSet<&String> = classification.categorical.iter().collect();
    assert!(numeric.is_disjoint(&categorical));

    let all: HashSet<&String> = table.column_names().iter().collect();
    let union: HashSet<&String> = numeric.union(&categorical).copied().collect();
    assert_eq!(union, all);
}

#[test]
fn test_classification_follows_schema_not_contents() {
    // digits stored as text stay categorical
    let table = Table::new()
        .with_column("zip", Column::categorical(vec!["10001", "94105"]))
        .unwrap()
        .with_column("empty_numeric", Column::numeric_opt::<f64>(vec![None, None]))
        .unwrap();

    let classification = classify_columns(&table);
    assert_eq!(classification.kind_of("zip"), Some(ColumnType::Categorical));
    assert_eq!(classification.kind_of("empty_numeric"), Some(ColumnType::Numeric));
}

#[test]
fn test_empty_table_classification() {
    let classification = classify_columns(&Table::new());
    assert!(classification.numeric.is_empty());
    assert!(classification.categorical.is_empty());
}

#[test]
fn test_category_cardinality() {
    let table = common::churn_table();
    let summary = summarize_categories(&table);

    let names: Vec<&str> = summary.iter().map(|c| c.column.as_str()).collect();
    assert_eq!(names, vec!["gender", "Contract", "Churn"]);

    let contract = summary.get("Contract").unwrap();
    assert_eq!(contract.n_unique, 3);
    assert_eq!(contract.categories, vec!["Month-to-month", "One year", "Two year"]);
    assert_eq!(contract.missing, 0);

    let churn = summary.get("Churn").unwrap();
    assert_eq!(churn.categories, vec!["No", "Yes"]);
}

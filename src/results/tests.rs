use std::path::Path;

use tempfile::tempdir;

use super::{Metric, ResultTable, group_results, load_results, parse_results};
use crate::error::{AppError, AppResult, ResultsError};

const HARNESS_OUTPUT: &str = "\
Size,Container,CreateDestroyMean,CreateDestroyCI95,IterateMean,IterateCI95,AccessMean,AccessCI95
10,static_vector,1.200000,0.100000,0.500000,0.050000,0.300000,0.020000
10,vector<unique_ptr>,2.400000,0.200000,0.900000,0.080000,0.700000,0.040000
100,static_vector,3.100000,0.150000,1.100000,0.060000,0.800000,0.030000
100,vector<unique_ptr>,6.800000,0.300000,2.500000,0.090000,1.900000,0.050000
";

fn parse(content: &str) -> AppResult<ResultTable> {
    parse_results(content.as_bytes(), Path::new("results.txt"), b',')
}

#[test]
fn parse_harness_csv_output() -> AppResult<()> {
    let table = parse(HARNESS_OUTPUT)?;
    if table.len() != 4 {
        return Err(AppError::results(format!("Unexpected row count: {}", table.len())));
    }
    let Some(first) = table.rows().first() else {
        return Err(AppError::results("Missing first row"));
    };
    if first.container != "static_vector" {
        return Err(AppError::results(format!(
            "Unexpected container: {}",
            first.container
        )));
    }
    if first.size.total_cmp(&10.0).is_ne() {
        return Err(AppError::results("Unexpected size"));
    }
    let create = first.stats(Metric::CreateDestroy);
    let access = first.stats(Metric::Access);
    if create.mean.total_cmp(&1.2).is_ne() || create.ci95.total_cmp(&0.1).is_ne() {
        return Err(AppError::results("Unexpected create/destroy stats"));
    }
    if access.mean.total_cmp(&0.3).is_ne() || access.ci95.total_cmp(&0.02).is_ne() {
        return Err(AppError::results("Unexpected access stats"));
    }
    Ok(())
}

#[test]
fn parse_accepts_any_column_order_and_extra_columns() -> AppResult<()> {
    let content = "\
Notes, AccessCI95, AccessMean, IterateCI95, IterateMean, CreateDestroyCI95, CreateDestroyMean, Size, Container
warm, 0.02, 0.3, 0.05, 0.5, 0.1, 1.2, 1e3, static_vector
";
    let table = parse(content)?;
    let Some(row) = table.rows().first() else {
        return Err(AppError::results("Missing row"));
    };
    if row.size.total_cmp(&1000.0).is_ne() {
        return Err(AppError::results(format!("Unexpected size: {}", row.size)));
    }
    if row.stats(Metric::Iterate).mean.total_cmp(&0.5).is_ne() {
        return Err(AppError::results("Unexpected iterate mean"));
    }
    Ok(())
}

#[test]
fn parse_reports_every_missing_column() -> AppResult<()> {
    let content = "Container,Size,CreateDestroyMean,IterateMean\nstatic_vector,10,1.0,2.0\n";
    match parse(content) {
        Err(AppError::Results(ResultsError::MissingColumns { columns, .. })) => {
            let expected = ["CreateDestroyCI95", "IterateCI95", "AccessMean", "AccessCI95"];
            if columns != expected {
                return Err(AppError::results(format!("Unexpected columns: {:?}", columns)));
            }
            Ok(())
        }
        Err(err) => Err(AppError::results(format!("Unexpected error: {}", err))),
        Ok(_) => Err(AppError::results("Expected missing column error")),
    }
}

#[test]
fn parse_rejects_non_numeric_cells() -> AppResult<()> {
    let content = "\
Size,Container,CreateDestroyMean,CreateDestroyCI95,IterateMean,IterateCI95,AccessMean,AccessCI95
10,static_vector,1.2,0.1,fast,0.05,0.3,0.02
";
    match parse(content) {
        Err(AppError::Results(ResultsError::InvalidNumber {
            line,
            column,
            value,
            ..
        })) => {
            if line != 2 || column != "IterateMean" || value != "fast" {
                return Err(AppError::results(format!(
                    "Unexpected error fields: {} {} {}",
                    line, column, value
                )));
            }
            Ok(())
        }
        Err(err) => Err(AppError::results(format!("Unexpected error: {}", err))),
        Ok(_) => Err(AppError::results("Expected invalid number error")),
    }
}

#[test]
fn parse_rejects_short_records() -> AppResult<()> {
    let content = "\
Size,Container,CreateDestroyMean,CreateDestroyCI95,IterateMean,IterateCI95,AccessMean,AccessCI95
10,static_vector,1.2
";
    match parse(content) {
        Err(AppError::Results(ResultsError::Csv { .. })) => Ok(()),
        Err(err) => Err(AppError::results(format!("Unexpected error: {}", err))),
        Ok(_) => Err(AppError::results("Expected malformed record error")),
    }
}

#[test]
fn header_only_file_is_an_empty_table() -> AppResult<()> {
    let content = "Size,Container,CreateDestroyMean,CreateDestroyCI95,IterateMean,IterateCI95,AccessMean,AccessCI95\n";
    let table = parse(content)?;
    if !table.is_empty() {
        return Err(AppError::results("Expected empty table"));
    }
    Ok(())
}

#[test]
fn empty_file_has_no_columns() -> AppResult<()> {
    match parse("") {
        Err(AppError::Results(ResultsError::MissingColumns { columns, .. })) => {
            if columns.len() != super::REQUIRED_COLUMNS.len() {
                return Err(AppError::results("Expected every column to be missing"));
            }
            Ok(())
        }
        Err(err) => Err(AppError::results(format!("Unexpected error: {}", err))),
        Ok(_) => Err(AppError::results("Expected missing column error")),
    }
}

#[test]
fn load_missing_file_is_file_access_error() -> AppResult<()> {
    let dir = tempdir()?;
    let path = dir.path().join("absent.txt");
    match load_results(&path, b',') {
        Err(AppError::Results(ResultsError::FileAccess { path: reported, .. })) => {
            if reported != path {
                return Err(AppError::results("Unexpected path in error"));
            }
            Ok(())
        }
        Err(err) => Err(AppError::results(format!("Unexpected error: {}", err))),
        Ok(_) => Err(AppError::results("Expected file access error")),
    }
}

#[test]
fn load_tab_delimited_file() -> AppResult<()> {
    let dir = tempdir()?;
    let path = dir.path().join("results.tsv");
    std::fs::write(&path, HARNESS_OUTPUT.replace(',', "\t"))?;
    let table = load_results(&path, b'\t')?;
    if table.len() != 4 {
        return Err(AppError::results("Unexpected row count"));
    }
    Ok(())
}

#[test]
fn grouping_keeps_first_seen_container_order() -> AppResult<()> {
    let content = "\
Size,Container,CreateDestroyMean,CreateDestroyCI95,IterateMean,IterateCI95,AccessMean,AccessCI95
100,vector<unique_ptr>,6.8,0.3,2.5,0.09,1.9,0.05
10,static_vector,1.2,0.1,0.5,0.05,0.3,0.02
10,vector<unique_ptr>,2.4,0.2,0.9,0.08,0.7,0.04
100,static_vector,3.1,0.15,1.1,0.06,0.8,0.03
";
    let table = parse(content)?;
    let grouping = group_results(&table);
    if grouping.containers != ["vector<unique_ptr>", "static_vector"] {
        return Err(AppError::results(format!(
            "Unexpected containers: {:?}",
            grouping.containers
        )));
    }
    if grouping.sizes != [10.0, 100.0] {
        return Err(AppError::results(format!(
            "Unexpected sizes: {:?}",
            grouping.sizes
        )));
    }

    let sizes: Vec<f64> = table
        .rows_for("vector<unique_ptr>")
        .map(|row| row.size)
        .collect();
    if sizes != [100.0, 10.0] {
        return Err(AppError::results("rows_for must keep file order"));
    }
    Ok(())
}

#[test]
fn grouping_empty_table_is_empty() {
    let grouping = group_results(&ResultTable::default());
    assert!(grouping.containers.is_empty());
    assert!(grouping.sizes.is_empty());
}

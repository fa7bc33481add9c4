use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, warn};

use crate::error::{AppError, AppResult, ResultsError};

use super::{MetricStats, ResultRow, ResultSchema, ResultTable};

/// Loads a results table from a delimited text file.
///
/// # Errors
///
/// Returns [`ResultsError::FileAccess`] when the file cannot be opened and a parse
/// error when its header or cells do not match the results schema.
pub fn load_results(path: &Path, delimiter: u8) -> AppResult<ResultTable> {
    let file = File::open(path).map_err(|err| {
        AppError::results(ResultsError::FileAccess {
            path: path.to_path_buf(),
            source: err,
        })
    })?;
    parse_results(file, path, delimiter)
}

/// Parses a results table from any reader. `path` is only used in error messages.
///
/// # Errors
///
/// Returns a parse error when the header misses required columns, a record is
/// malformed, or a numeric cell does not parse.
pub fn parse_results<R: Read>(reader: R, path: &Path, delimiter: u8) -> AppResult<ResultTable> {
    let csv_error = |err: csv::Error| {
        AppError::results(ResultsError::Csv {
            path: path.to_path_buf(),
            source: err,
        })
    };

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(Trim::All)
        .has_headers(true)
        .from_reader(reader);

    let headers = reader.headers().map_err(csv_error)?.clone();
    let schema = ResultSchema::resolve(&headers, path)?;

    let mut rows = Vec::new();
    let mut last_size: HashMap<String, f64> = HashMap::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        let row = parse_row(&record, &schema, path)?;

        if let Some(previous) = last_size.insert(row.container.clone(), row.size)
            && row.size <= previous
        {
            warn!(
                "Sizes for container '{}' are not ascending ({} after {}); lines are drawn in file order.",
                row.container, row.size, previous
            );
        }
        rows.push(row);
    }

    debug!("Loaded {} result rows from {}", rows.len(), path.display());
    Ok(ResultTable::new(rows))
}

fn parse_row(record: &StringRecord, schema: &ResultSchema, path: &Path) -> AppResult<ResultRow> {
    let line = record.position().map_or(0, csv::Position::line);
    let cell = |index: usize, column: &'static str| {
        record.get(index).ok_or_else(|| {
            AppError::results(ResultsError::MissingValue {
                path: path.to_path_buf(),
                line,
                column,
            })
        })
    };
    let number = |index: usize, column: &'static str| -> AppResult<f64> {
        let raw = cell(index, column)?;
        raw.parse::<f64>().map_err(|_parse_err| {
            AppError::results(ResultsError::InvalidNumber {
                path: path.to_path_buf(),
                line,
                column,
                value: raw.to_owned(),
            })
        })
    };

    let container = cell(schema.container, super::CONTAINER_COLUMN)?.to_owned();
    let size = number(schema.size, super::SIZE_COLUMN)?;

    let mut stats = [MetricStats::default(); 3];
    for ((slot, metric), (mean_index, ci_index)) in stats
        .iter_mut()
        .zip(super::Metric::ALL)
        .zip(schema.means.iter().zip(schema.cis.iter()))
    {
        *slot = MetricStats::new(
            number(*mean_index, metric.mean_column())?,
            number(*ci_index, metric.ci_column())?,
        );
    }
    let [create_destroy, iterate, access] = stats;

    Ok(ResultRow::new(container, size, create_destroy, iterate, access))
}

// Dweve BenchDiff - Cross-Environment Benchmark Analysis
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Reader for pre-existing comparison CSV files.
//!
//! Columns are located through the header row. The first column holds the
//! benchmark name; each environment column is headed either by the bare
//! label or by `<label> (<unit>)`. An optional `Metric` column restricts
//! the rows to the primary unit. Rows are kept only when every environment
//! value is positive.

use crate::error::{CsvError, Result};
use benchdiff_core::parser::parse_number;
use benchdiff_core::{BenchmarkRecord, Metrics};
use csv::StringRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

const METRIC_HEADERS: &[&str] = &["Metric", "Metric Unit", "Unit"];

struct Columns {
    metric: Option<usize>,
    environments: Vec<(String, usize)>,
}

impl Columns {
    fn locate(header: &StringRecord, environments: &[String], metric_unit: &str) -> Result<Self> {
        let metric = header
            .iter()
            .position(|h| METRIC_HEADERS.iter().any(|m| h.trim().eq_ignore_ascii_case(m)));

        let environments = environments
            .iter()
            .map(|env| {
                let with_unit = format!("{} ({})", env, metric_unit);
                header
                    .iter()
                    .position(|h| {
                        let h = h.trim();
                        h == env || h == with_unit
                    })
                    .map(|idx| (env.clone(), idx))
                    .ok_or_else(|| CsvError::MissingColumn(env.clone()))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            metric,
            environments,
        })
    }
}

/// Reads records from a comparison CSV.
///
/// # Errors
///
/// Fails when the header is missing, an environment has no column, or the
/// CSV itself is malformed. Individual rows that do not qualify are skipped.
///
/// Comparison CSVs store primary values with two decimals, so a benchmark
/// faster than 0.005 of the unit is written as `0.00` and its whole row is
/// dropped on re-read.
pub fn read_comparison<R: Read>(
    reader: R,
    environments: &[String],
    metric_unit: &str,
) -> Result<Vec<BenchmarkRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let header = csv_reader.headers()?.clone();
    if header.is_empty() {
        return Err(CsvError::MissingHeader);
    }
    let columns = Columns::locate(&header, environments, metric_unit)?;

    let mut records = Vec::new();
    for result in csv_reader.records() {
        let row = result?;
        if let Some(record) = parse_row(&row, &columns, metric_unit) {
            records.push(record);
        }
    }

    Ok(records)
}

fn parse_row(row: &StringRecord, columns: &Columns, metric_unit: &str) -> Option<BenchmarkRecord> {
    let name = row.get(0).filter(|n| !n.is_empty())?;

    if let Some(idx) = columns.metric {
        if row.get(idx) != Some(metric_unit) {
            return None;
        }
    }

    let per_environment = columns
        .environments
        .iter()
        .map(|(env, idx)| {
            row.get(*idx)
                .and_then(parse_number)
                .filter(|v| *v > 0.0)
                .map(|v| (env.clone(), Metrics::new(v)))
        })
        .collect::<Option<Vec<_>>>();

    if per_environment.is_none() {
        debug!(name, "skipping CSV row without positive values for every environment");
    }

    per_environment.map(|per_env| BenchmarkRecord::new(name, metric_unit, per_env))
}

/// Reads records from the comparison CSV at `path`.
///
/// Every failure is reported as [`CsvError::Read`] carrying `path`.
pub fn read_comparison_file(
    path: &Path,
    environments: &[String],
    metric_unit: &str,
) -> Result<Vec<BenchmarkRecord>> {
    let file = File::open(path).map_err(|e| read_error(path, e))?;
    read_comparison(file, environments, metric_unit).map_err(|e| read_error(path, e))
}

fn read_error(path: &Path, err: impl ToString) -> CsvError {
    CsvError::Read {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envs() -> Vec<String> {
        vec!["Debian".to_string(), "IYA".to_string(), "RHEL".to_string()]
    }

    #[test]
    fn test_read_metric_column_csv() {
        let data = "\
Benchmark,Metric,Debian,IYA,RHEL,Best Performance
System Info,,,,,
BenchmarkFibonacci20,ns/op,\"22,897\",4000,23000,IYA
BenchmarkFibonacci20,B/op,0,0,0,--
BenchmarkSHA256Small,ns/op,300,0,310,Debian
BenchmarkMapOperations1K,ns/op,900,850,870,IYA
";
        let records = read_comparison(data.as_bytes(), &envs(), "ns/op").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "BenchmarkFibonacci20");
        assert_eq!(records[0].primary("Debian"), Some(22897.0));
        assert_eq!(records[0].best_environment, "IYA");
        assert_eq!(records[1].name, "BenchmarkMapOperations1K");
    }

    #[test]
    fn test_read_unit_headers_without_metric_column() {
        let data = "\
Benchmark Name,Debian (ns/op),IYA (ns/op),RHEL (ns/op),Best Performance (ns/op)
BenchmarkJSONMarshal,10.00,5.00,7.50,IYA
";
        let records = read_comparison(data.as_bytes(), &envs(), "ns/op").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].primary("RHEL"), Some(7.5));
    }

    #[test]
    fn test_missing_environment_column() {
        let data = "Benchmark,Debian,IYA\nBenchmarkX,1,2\n";
        let err = read_comparison(data.as_bytes(), &envs(), "ns/op").unwrap_err();
        assert!(matches!(err, CsvError::MissingColumn(ref env) if env == "RHEL"));
    }

    #[test]
    fn test_missing_file() {
        let err = read_comparison_file(Path::new("/nonexistent/cmp.csv"), &envs(), "ns/op")
            .unwrap_err();
        assert!(matches!(err, CsvError::Read { .. }));
    }

    #[test]
    fn test_file_errors_carry_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cmp.csv");
        std::fs::write(&path, "Benchmark,Debian,IYA\nBenchmarkX,1,2\n").unwrap();

        let err = read_comparison_file(&path, &envs(), "ns/op").unwrap_err();
        match err {
            CsvError::Read { path: p, message } => {
                assert_eq!(p, path);
                assert_eq!(message, "Missing required column: RHEL");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_sub_cent_values_are_dropped() {
        let data = "\
Benchmark Name,Debian (ns/op),IYA (ns/op),RHEL (ns/op)
BenchmarkTiny,0.00,0.00,0.01
BenchmarkJSONMarshal,10.00,5.00,7.50
";
        let records = read_comparison(data.as_bytes(), &envs(), "ns/op").unwrap();
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["BenchmarkJSONMarshal"]);
    }
}

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

//! Round-trip tests: comparison CSVs written by the exporter are readable
//! by the comparison reader.

use benchdiff_core::config::{AnalysisConfig, Environment, TestConfiguration};
use benchdiff_core::{AnalysisRun, BenchmarkRecord, ConfigurationRun, Metrics};
use benchdiff_csv::{export_comparison, export_summary, read_comparison_file, CsvError};
use std::collections::BTreeSet;
use std::fs;
use tempfile::TempDir;

fn config() -> AnalysisConfig {
    AnalysisConfig::default()
        .with_environments(vec![
            Environment::new("Debian", "debian"),
            Environment::new("IYA", "iya"),
            Environment::new("RHEL", "rhel"),
        ])
        .with_subject("IYA")
        .with_baselines(vec!["Debian".to_string(), "RHEL".to_string()])
}

fn record(name: &str, values: [f64; 3]) -> BenchmarkRecord {
    BenchmarkRecord::new(
        name,
        "ns/op",
        vec![
            ("Debian".to_string(), Metrics::new(values[0]).with_bytes(48.0)),
            ("IYA".to_string(), Metrics::new(values[1]).with_bytes(32.0)),
            ("RHEL".to_string(), Metrics::new(values[2])),
        ],
    )
}

fn analysis_run(records: Vec<BenchmarkRecord>) -> AnalysisRun {
    let config = config();
    let mut run = AnalysisRun::new(&config);
    run.runs.push(ConfigurationRun::from_records(
        &config,
        TestConfiguration::new("Quick", "quick.txt"),
        records,
    ));
    run
}

fn tuples(records: &[BenchmarkRecord]) -> BTreeSet<(String, Vec<String>)> {
    records
        .iter()
        .map(|r| {
            let values = r
                .per_environment
                .iter()
                .map(|(env, m)| format!("{}={:.2}", env, m.primary))
                .collect();
            (r.name.clone(), values)
        })
        .collect()
}

#[test]
fn test_comparison_round_trip() {
    let records = vec![
        record("BenchmarkFibonacci20", [22897.0, 4012.337, 23001.5]),
        record("BenchmarkJSONMarshal", [1043.0, 998.125, 1100.0]),
        record("BenchmarkSHA256Large", [0.5, 0.25, 0.75]),
    ];
    let run = analysis_run(records.clone());

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("go_benchmark_QUICK_comparison.csv");
    export_comparison(&run, &run.runs[0], &path).unwrap();

    let read_back = read_comparison_file(&path, &run.environments, &run.metric_unit).unwrap();
    assert_eq!(tuples(&read_back), tuples(&records));

    let best: Vec<&str> = read_back.iter().map(|r| r.best_environment.as_str()).collect();
    assert_eq!(best, vec!["IYA", "IYA", "IYA"]);
}

#[test]
fn test_summary_written_to_disk() {
    let run = analysis_run(vec![record("BenchmarkMutexContention", [10.0, 5.0, 20.0])]);
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("benchmark_analysis_summary.csv");

    export_summary(&run, &path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("Test Style,Total Benchmarks,IYA Wins,Win Rate %"));
    assert!(content.contains("Quick,1,1,100.00,2.00,4.00,2.00,2.00,2.00"));
}

#[test]
fn test_unwritable_destination_reports_write_error() {
    let run = analysis_run(Vec::new());
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing-dir").join("summary.csv");

    let err = export_summary(&run, &path).unwrap_err();
    assert!(matches!(err, CsvError::Write { .. }));
}

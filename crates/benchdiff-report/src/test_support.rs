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

//! Shared fixtures for reporter tests.

use benchdiff_core::config::{AnalysisConfig, Environment, TestConfiguration};
use benchdiff_core::{AnalysisRun, BenchmarkRecord, ConfigurationRun, Metrics, SkippedEnvironment};
use std::path::PathBuf;

fn record(name: &str, a: f64, b: f64, c: f64) -> BenchmarkRecord {
    BenchmarkRecord::new(
        name,
        "ns/op",
        vec![
            ("A".to_string(), Metrics::new(a)),
            ("B".to_string(), Metrics::new(b)),
            ("C".to_string(), Metrics::new(c)),
        ],
    )
}

/// Quick has three records (B wins two); Standard lost environment C.
pub(crate) fn sample_run() -> AnalysisRun {
    let config = AnalysisConfig::default()
        .with_environments(vec![
            Environment::new("A", "a"),
            Environment::new("B", "b"),
            Environment::new("C", "c"),
        ])
        .with_subject("B")
        .with_baselines(vec!["A".to_string(), "C".to_string()]);

    let quick = ConfigurationRun::from_records(
        &config,
        TestConfiguration::new("Quick", "quick.txt")
            .with_duration("2 seconds")
            .with_description("Fast overview benchmark"),
        vec![
            record("BenchmarkFibonacci20", 100.0, 80.0, 120.0),
            record("BenchmarkMapOperations1K", 187.5, 50.0, 100.0),
            record("BenchmarkSHA256Large", 50.0, 100.0, 40.0),
        ],
    );

    let mut standard = ConfigurationRun::from_records(
        &config,
        TestConfiguration::new("Standard", "standard.txt"),
        Vec::new(),
    );
    standard.skipped.push(SkippedEnvironment {
        environment: "C".to_string(),
        path: PathBuf::from("c/standard.txt"),
        reason: "No such file or directory".to_string(),
    });

    let mut run = AnalysisRun::new(&config);
    run.runs.push(quick);
    run.runs.push(standard);
    run
}

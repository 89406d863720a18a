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

//! JSON export for analysis runs.

use benchdiff_core::{AnalysisRun, RankedSpeedup};
use serde::Serialize;
use std::fs;
use std::io;
use std::path::Path;

/// Serialized shape of `benchmark_analysis.json`.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    /// Producing tool and version.
    pub generator: &'a str,
    /// Subject wins against the primary baseline across configurations.
    pub total_subject_wins: usize,
    /// Joined records across configurations.
    pub total_records: usize,
    /// Overall win rate, in percent.
    pub overall_win_rate: f64,
    /// The full analysis.
    pub analysis: &'a AnalysisRun,
    /// Ranked speedups against the primary baseline.
    pub top_speedups: &'a [RankedSpeedup],
}

impl<'a> JsonReport<'a> {
    /// Builds the export for `run`, computing its overall totals.
    pub fn new(run: &'a AnalysisRun, ranked: &'a [RankedSpeedup], generator: &'a str) -> Self {
        Self {
            generator,
            total_subject_wins: run.total_subject_wins(),
            total_records: run.total_records(),
            overall_win_rate: run.overall_win_rate(),
            analysis: run,
            top_speedups: ranked,
        }
    }
}

/// Exports the analysis as pretty-printed JSON.
pub fn export_json(
    run: &AnalysisRun,
    ranked: &[RankedSpeedup],
    generator: &str,
    path: &Path,
) -> io::Result<()> {
    let report = JsonReport::new(run, ranked, generator);
    let json = serde_json::to_string_pretty(&report)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    fs::write(path, json)
}

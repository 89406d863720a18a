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

//! Inspect-csv command - summarize an existing comparison CSV

use super::load_config;
use crate::error::Result;
use benchdiff_core::{AnalysisRun, BenchDiffError, ConfigurationRun, TestConfiguration};
use benchdiff_csv::read_comparison_file;
use benchdiff_report::console::{print_configuration, print_report};
use std::path::Path;
use tracing::debug;

/// Reads `file` with the comparison CSV reader and prints the console
/// summary for it, as if it were a single test configuration.
pub fn inspect_csv(file: &Path, config: Option<&Path>) -> Result<()> {
    let config = load_config(config)?;
    let environments = config.environment_labels();

    let records = read_comparison_file(file, &environments, &config.metric_unit)
        .map_err(BenchDiffError::from)?;
    debug!(path = %file.display(), records = records.len(), "read comparison CSV");

    let name = file
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.display().to_string());
    let filename = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut run = AnalysisRun::new(&config);
    let config_run =
        ConfigurationRun::from_records(&config, TestConfiguration::new(name, filename), records);

    print_configuration(&run, &config_run);
    run.runs.push(config_run);
    print_report(&run);
    Ok(())
}

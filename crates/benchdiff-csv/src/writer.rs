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

//! Summary and comparison CSV writers.

use crate::error::{CsvError, Result};
use benchdiff_core::{AnalysisRun, BenchmarkRecord, ConfigurationRun};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Header of the per-configuration summary CSV.
pub fn summary_header(run: &AnalysisRun) -> Vec<String> {
    let mut header = vec![
        "Test Style".to_string(),
        "Total Benchmarks".to_string(),
        format!("{} Wins", run.subject),
        "Win Rate %".to_string(),
    ];
    header.extend(run.baselines.iter().map(|b| format!("Avg Speedup vs {}", b)));
    header.extend(
        ["Min Speedup", "Max Speedup", "Median Speedup"]
            .iter()
            .map(|s| s.to_string()),
    );
    header
}

/// Writes one summary row per configuration, in declared order.
pub fn write_summary<W: Write>(writer: W, run: &AnalysisRun) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);
    wtr.write_record(summary_header(run))?;

    for config_run in &run.runs {
        let analysis = &config_run.analysis;
        let stats = analysis.primary_stats();

        let mut row = vec![
            config_run.configuration.name.clone(),
            analysis.total.to_string(),
            analysis.subject_wins().to_string(),
            format!("{:.2}", analysis.win_rate_percent()),
        ];
        row.extend(
            run.baselines
                .iter()
                .map(|b| format!("{:.2}", analysis.avg_speedup_vs(b))),
        );
        row.push(format!("{:.2}", stats.min));
        row.push(format!("{:.2}", stats.max));
        row.push(format!("{:.2}", stats.median));

        wtr.write_record(&row)?;
    }

    wtr.flush()
        .map_err(|e| CsvError::Other(format!("Failed to flush summary CSV: {}", e)))?;
    Ok(())
}

/// Writes the summary CSV to `path`.
pub fn export_summary(run: &AnalysisRun, path: &Path) -> Result<()> {
    let file = create(path)?;
    write_summary(file, run).map_err(|e| write_error(path, e))?;
    debug!(path = %path.display(), rows = run.runs.len(), "wrote summary CSV");
    Ok(())
}

/// Header of a comparison CSV.
pub fn comparison_header(run: &AnalysisRun) -> Vec<String> {
    let unit = &run.metric_unit;
    let mut header = vec!["Benchmark Name".to_string()];
    header.extend(run.environments.iter().map(|e| format!("{} ({})", e, unit)));
    header.push(format!("Best Performance ({})", unit));
    header.extend(
        run.baselines
            .iter()
            .map(|b| format!("{} vs {} Speedup", run.subject, b)),
    );
    header.extend(run.environments.iter().map(|e| format!("{} (B/op)", e)));
    header.push("Best Performance (B/op)".to_string());
    header.extend(run.environments.iter().map(|e| format!("{} (allocs/op)", e)));
    header.push("Best Performance (allocs/op)".to_string());
    header
}

/// Formats one comparison CSV row.
pub fn comparison_row(run: &AnalysisRun, record: &BenchmarkRecord) -> Vec<String> {
    let metric = |env: &str, f: fn(&benchdiff_core::Metrics) -> f64| {
        record.metrics(env).map_or(0.0, f)
    };

    let mut row = vec![record.name.clone()];
    row.extend(
        run.environments
            .iter()
            .map(|e| format!("{:.2}", metric(e.as_str(), |m| m.primary))),
    );
    row.push(record.best_environment.clone());
    row.extend(run.baselines.iter().map(|b| {
        record
            .ratio(&run.subject, b)
            .map_or_else(|| "N/A".to_string(), |s| format!("{:.2}x", s))
    }));
    row.extend(
        run.environments
            .iter()
            .map(|e| format!("{:.0}", metric(e.as_str(), |m| m.bytes_or_zero()))),
    );
    row.push(record.best_bytes().unwrap_or("--").to_string());
    row.extend(
        run.environments
            .iter()
            .map(|e| format!("{:.0}", metric(e.as_str(), |m| m.allocs_or_zero()))),
    );
    row.push(record.best_allocs().unwrap_or("--").to_string());
    row
}

/// Writes one row per record of `config_run`.
pub fn write_comparison<W: Write>(
    writer: W,
    run: &AnalysisRun,
    config_run: &ConfigurationRun,
) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);
    wtr.write_record(comparison_header(run))?;

    for record in &config_run.records {
        wtr.write_record(comparison_row(run, record))?;
    }

    wtr.flush()
        .map_err(|e| CsvError::Other(format!("Failed to flush comparison CSV: {}", e)))?;
    Ok(())
}

/// Writes the comparison CSV of `config_run` to `path`.
pub fn export_comparison(
    run: &AnalysisRun,
    config_run: &ConfigurationRun,
    path: &Path,
) -> Result<()> {
    let file = create(path)?;
    write_comparison(file, run, config_run).map_err(|e| write_error(path, e))?;
    debug!(
        path = %path.display(),
        rows = config_run.records.len(),
        "wrote comparison CSV"
    );
    Ok(())
}

fn create(path: &Path) -> Result<File> {
    File::create(path).map_err(|e| CsvError::Write {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn write_error(path: &Path, err: CsvError) -> CsvError {
    CsvError::Write {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

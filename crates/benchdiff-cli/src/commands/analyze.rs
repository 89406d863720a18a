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

//! Analyze command - run the full pipeline and write every artifact

use super::load_config;
use crate::error::{CliError, Result};
use benchdiff_core::config::{DETAILED_REPORT_FILE, JSON_REPORT_FILE, SUMMARY_CSV_FILE};
use benchdiff_core::{AnalysisRun, Pipeline};
use benchdiff_csv::{export_comparison, export_summary};
use benchdiff_report::console::{print_configuration, print_report};
use benchdiff_report::{export_json, export_markdown, generator_name};
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Options of the `analyze` command.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeOptions {
    /// YAML configuration file; the built-in configuration when `None`.
    pub config: Option<PathBuf>,
    /// Directory holding the environment directories.
    pub input_dir: PathBuf,
    /// Directory the artifacts are written to.
    pub output_dir: PathBuf,
    /// Overrides the configured length of the ranked speedup list.
    pub top: Option<usize>,
    /// Also write the JSON export.
    pub json: bool,
}

/// Tracks which artifacts were written and which failed.
#[derive(Debug, Default)]
struct Artifacts {
    written: Vec<PathBuf>,
    failed: usize,
}

impl Artifacts {
    fn record<E: Display>(&mut self, path: PathBuf, result: std::result::Result<(), E>) -> bool {
        match result {
            Ok(()) => {
                self.written.push(path);
                true
            }
            Err(err) => {
                println!("   ❌ Error creating {}: {}", path.display(), err);
                error!(path = %path.display(), error = %err, "failed to write artifact");
                self.failed += 1;
                false
            }
        }
    }

    fn total(&self) -> usize {
        self.written.len() + self.failed
    }
}

/// Runs every configuration and writes the artifacts to the output directory.
///
/// A failed artifact does not stop the remaining ones; the command reports
/// [`CliError::ArtifactsFailed`] once everything else has been written.
pub fn analyze(options: &AnalyzeOptions) -> Result<()> {
    let mut config = load_config(options.config.as_deref())?;
    if let Some(top) = options.top {
        config = config.with_top_n(top);
    }
    let pipeline = Pipeline::new(config, &options.input_dir)?;

    fs::create_dir_all(&options.output_dir)
        .map_err(|e| CliError::io_error(&options.output_dir, e))?;

    println!("=== Benchmark Analysis Tool ===");
    println!();

    // Progress lines only need the labels; the full run exists once every
    // configuration is done.
    let labels = AnalysisRun::new(pipeline.config());
    let run = pipeline.run_with(|config_run| print_configuration(&labels, config_run));
    info!(
        configurations = run.runs.len(),
        total = run.total_records(),
        "analysis finished"
    );

    print_report(&run);

    let ranked = run.top_speedups();
    let generator = generator_name();
    let out = options.output_dir.as_path();
    let mut artifacts = Artifacts::default();

    let summary = out.join(SUMMARY_CSV_FILE);
    let result = export_summary(&run, &summary);
    artifacts.record(summary, result);

    let report = out.join(DETAILED_REPORT_FILE);
    let result = export_markdown(&run, &ranked, &generator, &report);
    artifacts.record(report, result);

    if options.json {
        let json = out.join(JSON_REPORT_FILE);
        let result = export_json(&run, &ranked, &generator, &json);
        artifacts.record(json, result);
    }

    println!("\n📊 Generating detailed CSV files...");
    for config_run in &run.runs {
        let path = out.join(config_run.configuration.comparison_file_name());
        let result = export_comparison(&run, config_run, &path);
        if artifacts.record(path.clone(), result) {
            println!(
                "   ✅ Created {} ({} benchmarks)",
                display_name(&path),
                config_run.records.len()
            );
        }
    }

    if artifacts.failed > 0 {
        return Err(CliError::ArtifactsFailed {
            failed: artifacts.failed,
            total: artifacts.total(),
        });
    }

    println!("\n✅ Analysis complete!");
    println!("📁 Generated files:");
    for path in &artifacts.written {
        println!("   - {}", display_name(path));
    }
    Ok(())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

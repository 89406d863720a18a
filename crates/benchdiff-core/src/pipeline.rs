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

//! Batch analysis pipeline.
//!
//! Runs every test configuration in declared order: parse each
//! environment's raw file, join, analyze and categorize. Configurations are
//! independent; inside one configuration the per-environment parses run on
//! the rayon pool and the join waits for all of them.

use crate::analysis::{analyze, percentage, AnalysisResult};
use crate::category::{summarize, CategorySummary};
use crate::config::{AnalysisConfig, TestConfiguration};
use crate::error::Result;
use crate::join::join;
use crate::model::BenchmarkRecord;
use crate::parser::{MetricsMap, RecordParser};
use crate::ranking::{top_speedups, RankedSpeedup};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// An environment that contributed no data to a configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedEnvironment {
    /// Environment label.
    pub environment: String,
    /// Raw file that could not be read.
    pub path: PathBuf,
    /// Why it was skipped.
    pub reason: String,
}

/// Everything computed for one test configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationRun {
    /// The test configuration.
    pub configuration: TestConfiguration,
    /// Joined records, sorted by name.
    pub records: Vec<BenchmarkRecord>,
    /// Win counts and speedup statistics.
    pub analysis: AnalysisResult,
    /// Non-empty category summaries, in category order.
    pub categories: Vec<CategorySummary>,
    /// Environments whose raw file could not be read.
    pub skipped: Vec<SkippedEnvironment>,
}

impl ConfigurationRun {
    /// Analyzes already joined records for `configuration`.
    pub fn from_records(
        config: &AnalysisConfig,
        configuration: TestConfiguration,
        records: Vec<BenchmarkRecord>,
    ) -> Self {
        let analysis = analyze(
            &configuration.name,
            &records,
            &config.environment_labels(),
            &config.subject,
            &config.baselines,
        );
        let categories = summarize(
            &configuration.name,
            &records,
            &config.categories,
            &config.subject,
            &config.baselines,
        );

        Self {
            configuration,
            records,
            analysis,
            categories,
            skipped: Vec::new(),
        }
    }

    /// Category summary for `category`, if it had any records.
    pub fn category(&self, category: &str) -> Option<&CategorySummary> {
        self.categories.iter().find(|c| c.category == category)
    }
}

/// Result of a complete analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRun {
    /// Environment labels in iteration order.
    pub environments: Vec<String>,
    /// Subject environment label.
    pub subject: String,
    /// Baseline labels; the first is the primary baseline.
    pub baselines: Vec<String>,
    /// Unit of the primary metric.
    pub metric_unit: String,
    /// Category names in report order.
    pub categories: Vec<String>,
    /// Length of the ranked speedup list.
    pub top_n: usize,
    /// One run per configuration, in declared order.
    pub runs: Vec<ConfigurationRun>,
}

impl AnalysisRun {
    /// Creates an empty run for `config`.
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            environments: config.environment_labels(),
            subject: config.subject.clone(),
            baselines: config.baselines.clone(),
            metric_unit: config.metric_unit.clone(),
            categories: config.categories.iter().map(|c| c.name.clone()).collect(),
            top_n: config.top_n,
            runs: Vec::new(),
        }
    }

    /// The primary baseline label.
    pub fn primary_baseline(&self) -> &str {
        self.baselines.first().map(String::as_str).unwrap_or_default()
    }

    /// Run for the configuration named `name`.
    pub fn run(&self, name: &str) -> Option<&ConfigurationRun> {
        self.runs.iter().find(|r| r.configuration.name == name)
    }

    /// Joined records across all configurations.
    pub fn total_records(&self) -> usize {
        self.runs.iter().map(|r| r.analysis.total).sum()
    }

    /// Subject wins against the primary baseline across all configurations.
    pub fn total_subject_wins(&self) -> usize {
        self.runs.iter().map(|r| r.analysis.subject_wins()).sum()
    }

    /// Overall subject win rate, in percent.
    pub fn overall_win_rate(&self) -> f64 {
        percentage(self.total_subject_wins(), self.total_records())
    }

    /// Mean subject speedup over `baseline`, pooled across configurations.
    pub fn overall_avg_speedup(&self, baseline: &str) -> f64 {
        let (sum, samples) = self
            .runs
            .iter()
            .filter_map(|r| r.analysis.comparison(baseline))
            .fold((0.0, 0usize), |(sum, n), c| {
                (sum + c.stats.mean * c.stats.samples as f64, n + c.stats.samples)
            });
        if samples == 0 {
            0.0
        } else {
            sum / samples as f64
        }
    }

    /// The largest subject speedups over the primary baseline.
    pub fn top_speedups(&self) -> Vec<RankedSpeedup> {
        top_speedups(
            self.runs
                .iter()
                .map(|r| (r.configuration.name.as_str(), r.records.as_slice())),
            &self.subject,
            self.primary_baseline(),
            self.top_n,
        )
    }
}

/// Drives the analysis over raw files below an input root.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: AnalysisConfig,
    input_root: PathBuf,
    parser: RecordParser,
}

impl Pipeline {
    /// Creates a pipeline after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BenchDiffError::InvalidConfig`] for unusable configurations.
    pub fn new(config: AnalysisConfig, input_root: impl Into<PathBuf>) -> Result<Self> {
        config.validate()?;
        let parser = RecordParser::new(config.line_prefix.clone());
        Ok(Self {
            config,
            input_root: input_root.into(),
            parser,
        })
    }

    /// The validated configuration.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Directory the environment directories are resolved against.
    pub fn input_root(&self) -> &Path {
        &self.input_root
    }

    /// Parses, joins and analyzes one configuration.
    ///
    /// Unreadable environment files are logged and recorded in
    /// [`ConfigurationRun::skipped`]; they never abort the configuration.
    pub fn run_configuration(&self, configuration: &TestConfiguration) -> ConfigurationRun {
        let parsed: Vec<(String, PathBuf, Result<MetricsMap>)> = self
            .config
            .environments
            .par_iter()
            .map(|env| {
                let path = self
                    .config
                    .raw_file_path(&self.input_root, env, configuration);
                let result = self.parser.parse_file(&path);
                (env.label.clone(), path, result)
            })
            .collect();

        let mut skipped = Vec::new();
        let maps: Vec<(String, MetricsMap)> = parsed
            .into_iter()
            .map(|(label, path, result)| match result {
                Ok(map) => (label, map),
                Err(err) => {
                    warn!(
                        configuration = %configuration.name,
                        environment = %label,
                        error = %err,
                        "skipping environment"
                    );
                    skipped.push(SkippedEnvironment {
                        environment: label.clone(),
                        path,
                        reason: err.to_string(),
                    });
                    (label, MetricsMap::new())
                }
            })
            .collect();

        let records = join(&maps, &self.config.metric_unit);
        let mut run = ConfigurationRun::from_records(&self.config, configuration.clone(), records);
        run.skipped = skipped;

        info!(
            configuration = %configuration.name,
            total = run.analysis.total,
            subject_wins = run.analysis.subject_wins(),
            "analyzed configuration"
        );
        run
    }

    /// Runs every configuration in order, calling `on_run` after each one.
    pub fn run_with<F>(&self, mut on_run: F) -> AnalysisRun
    where
        F: FnMut(&ConfigurationRun),
    {
        let mut analysis = AnalysisRun::new(&self.config);
        for configuration in &self.config.configurations {
            let run = self.run_configuration(configuration);
            on_run(&run);
            analysis.runs.push(run);
        }
        analysis
    }

    /// Runs every configuration in order.
    pub fn run(&self) -> AnalysisRun {
        self.run_with(|_| {})
    }
}

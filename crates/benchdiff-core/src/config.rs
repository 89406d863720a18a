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

//! Analysis configuration.
//!
//! Describes which environments are compared, which of them is the subject
//! and which are baselines, the ordered list of test configurations, and the
//! category keyword table. Every list here is an ordered sequence: report
//! output follows declaration order, never hashing order.
//!
//! # Example
//!
//! ```
//! use benchdiff_core::config::{AnalysisConfig, Environment};
//!
//! let config = AnalysisConfig::default()
//!     .with_environments(vec![
//!         Environment::new("A", "results_a"),
//!         Environment::new("B", "results_b"),
//!     ])
//!     .with_subject("B")
//!     .with_baselines(vec!["A".to_string()]);
//!
//! assert!(config.validate().is_ok());
//! assert_eq!(config.primary_baseline(), Some("A"));
//! ```

use crate::category::Category;
use crate::error::{BenchDiffError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Prefix that marks a data line in raw benchmark output.
pub const DEFAULT_LINE_PREFIX: &str = "Benchmark";

/// Unit of the primary (time per operation) metric.
pub const DEFAULT_METRIC_UNIT: &str = "ns/op";

/// Number of entries in the ranked speedup list.
pub const DEFAULT_TOP_N: usize = 10;

/// Per-configuration summary artifact.
pub const SUMMARY_CSV_FILE: &str = "benchmark_analysis_summary.csv";

/// Narrative Markdown artifact.
pub const DETAILED_REPORT_FILE: &str = "benchmark_detailed_report.md";

/// Optional machine-readable dump of the whole analysis.
pub const JSON_REPORT_FILE: &str = "benchmark_analysis.json";

/// One operating-system environment under comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    /// Label used in reports and as the environment key.
    pub label: String,
    /// Directory (relative to the input root) holding this environment's raw files.
    pub directory: PathBuf,
}

impl Environment {
    /// Creates a new environment.
    pub fn new(label: impl Into<String>, directory: impl Into<PathBuf>) -> Self {
        Self {
            label: label.into(),
            directory: directory.into(),
        }
    }
}

/// A named benchmark run style, bound to one raw filename per environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestConfiguration {
    /// Configuration name ("Quick", "Standard", ...).
    pub name: String,
    /// Raw result filename looked up inside every environment directory.
    pub filename: String,
    /// Human readable run duration.
    #[serde(default)]
    pub duration: String,
    /// Short description.
    #[serde(default)]
    pub description: String,
    /// Name of the comparison CSV artifact; defaults to `<name>_comparison.csv`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparison_file: Option<String>,
}

impl TestConfiguration {
    /// Creates a configuration with empty duration and description.
    pub fn new(name: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            filename: filename.into(),
            duration: String::new(),
            description: String::new(),
            comparison_file: None,
        }
    }

    /// Sets the human readable duration.
    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = duration.into();
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets an explicit comparison CSV filename.
    pub fn with_comparison_file(mut self, file: impl Into<String>) -> Self {
        self.comparison_file = Some(file.into());
        self
    }

    /// Returns the filename of this configuration's comparison CSV.
    pub fn comparison_file_name(&self) -> String {
        self.comparison_file
            .clone()
            .unwrap_or_else(|| format!("{}_comparison.csv", self.name))
    }
}

/// Complete description of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Environments in their fixed iteration order.
    pub environments: Vec<Environment>,
    /// Environment whose speedups are reported.
    pub subject: String,
    /// Baseline environments; the first one is the primary baseline.
    pub baselines: Vec<String>,
    /// Test configurations in report order.
    pub configurations: Vec<TestConfiguration>,
    /// Category keyword table in report order.
    #[serde(default = "Category::defaults")]
    pub categories: Vec<Category>,
    /// Prefix of data lines in raw files.
    #[serde(default = "default_line_prefix")]
    pub line_prefix: String,
    /// Unit of the primary metric.
    #[serde(default = "default_metric_unit")]
    pub metric_unit: String,
    /// Length of the ranked speedup list.
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

fn default_line_prefix() -> String {
    DEFAULT_LINE_PREFIX.to_string()
}

fn default_metric_unit() -> String {
    DEFAULT_METRIC_UNIT.to_string()
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

impl AnalysisConfig {
    /// Parses a configuration from YAML text. The result is not validated.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Loads and validates a YAML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| BenchDiffError::io_error(path, e))?;
        let config = Self::from_yaml_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| BenchDiffError::Serialization(e.to_string()))
    }

    /// Sets the environments.
    pub fn with_environments(mut self, environments: Vec<Environment>) -> Self {
        self.environments = environments;
        self
    }

    /// Sets the subject environment.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Sets the baseline environments.
    pub fn with_baselines(mut self, baselines: Vec<String>) -> Self {
        self.baselines = baselines;
        self
    }

    /// Sets the test configurations.
    pub fn with_configurations(mut self, configurations: Vec<TestConfiguration>) -> Self {
        self.configurations = configurations;
        self
    }

    /// Sets the category table.
    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    /// Sets the data line prefix.
    pub fn with_line_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.line_prefix = prefix.into();
        self
    }

    /// Sets the ranked list length.
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Environment labels in iteration order.
    pub fn environment_labels(&self) -> Vec<String> {
        self.environments.iter().map(|e| e.label.clone()).collect()
    }

    /// The first baseline, used for the headline win count and speedup range.
    pub fn primary_baseline(&self) -> Option<&str> {
        self.baselines.first().map(String::as_str)
    }

    /// Path of the raw file for `environment` under `configuration`.
    pub fn raw_file_path(
        &self,
        input_root: &Path,
        environment: &Environment,
        configuration: &TestConfiguration,
    ) -> PathBuf {
        input_root
            .join(&environment.directory)
            .join(&configuration.filename)
    }

    /// Checks the configuration for usage errors.
    ///
    /// # Errors
    ///
    /// Returns [`BenchDiffError::InvalidConfig`] when there are no environments
    /// or configurations, labels repeat, the subject or a baseline is not a
    /// configured environment, there is no baseline, the subject is listed
    /// as its own baseline, or two configurations share a comparison file.
    pub fn validate(&self) -> Result<()> {
        if self.environments.is_empty() {
            return Err(BenchDiffError::invalid_config(
                "environments",
                "at least one environment is required",
            ));
        }
        if self.configurations.is_empty() {
            return Err(BenchDiffError::invalid_config(
                "configurations",
                "at least one test configuration is required",
            ));
        }
        if self.line_prefix.is_empty() {
            return Err(BenchDiffError::invalid_config(
                "line_prefix",
                "must not be empty",
            ));
        }

        let mut labels = HashSet::new();
        for env in &self.environments {
            if !labels.insert(env.label.as_str()) {
                return Err(BenchDiffError::invalid_config(
                    "environments",
                    format!("duplicate environment label '{}'", env.label),
                ));
            }
        }

        let mut names = HashSet::new();
        let mut comparison_files = HashSet::new();
        for cfg in &self.configurations {
            if !names.insert(cfg.name.as_str()) {
                return Err(BenchDiffError::invalid_config(
                    "configurations",
                    format!("duplicate configuration name '{}'", cfg.name),
                ));
            }
            let file = cfg.comparison_file_name();
            if !comparison_files.insert(file.clone()) {
                return Err(BenchDiffError::invalid_config(
                    "configurations",
                    format!("comparison file '{}' is used by more than one configuration", file),
                ));
            }
        }

        if !labels.contains(self.subject.as_str()) {
            return Err(BenchDiffError::invalid_config(
                "subject",
                format!("unknown environment '{}'", self.subject),
            ));
        }
        if self.baselines.is_empty() {
            return Err(BenchDiffError::invalid_config(
                "baselines",
                "at least one baseline environment is required",
            ));
        }

        let mut seen = HashSet::new();
        for baseline in &self.baselines {
            if !labels.contains(baseline.as_str()) {
                return Err(BenchDiffError::invalid_config(
                    "baselines",
                    format!("unknown environment '{}'", baseline),
                ));
            }
            if *baseline == self.subject {
                return Err(BenchDiffError::invalid_config(
                    "baselines",
                    format!("subject '{}' cannot be its own baseline", baseline),
                ));
            }
            if !seen.insert(baseline.as_str()) {
                return Err(BenchDiffError::invalid_config(
                    "baselines",
                    format!("duplicate baseline '{}'", baseline),
                ));
            }
        }

        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            environments: vec![
                Environment::new("Debian", "go_benchmark_go_system_debian11"),
                Environment::new("IYA", "go_benchmark_go_system_IYA"),
                Environment::new("RHEL", "go_benchmark_go_system_rhel"),
            ],
            subject: "IYA".to_string(),
            baselines: vec!["Debian".to_string(), "RHEL".to_string()],
            configurations: vec![
                TestConfiguration::new("Quick", "go_benchmark_quick.txt")
                    .with_duration("2 seconds")
                    .with_description("Fast overview benchmark")
                    .with_comparison_file("go_benchmark_QUICK_comparison.csv"),
                TestConfiguration::new("Standard", "go_benchmark_standard.txt")
                    .with_duration("5 seconds")
                    .with_description("Standard benchmark (recommended)")
                    .with_comparison_file("go_benchmark_STANDARD_comparison.csv"),
                TestConfiguration::new("Extended", "go_benchmark_extended.txt")
                    .with_duration("10 seconds x 3 runs")
                    .with_description("Most accurate with multiple runs")
                    .with_comparison_file("go_benchmark_EXTENDED_comparison.csv"),
                TestConfiguration::new("Profiled", "go_benchmark_profiled.txt")
                    .with_duration("5 seconds + profiling")
                    .with_description("With CPU/memory profiling data")
                    .with_comparison_file("go_benchmark_PROFILED_comparison.csv"),
            ],
            categories: Category::defaults(),
            line_prefix: default_line_prefix(),
            metric_unit: default_metric_unit(),
            top_n: DEFAULT_TOP_N,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AnalysisConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.environment_labels(), vec!["Debian", "IYA", "RHEL"]);
        assert_eq!(config.primary_baseline(), Some("Debian"));
        assert_eq!(config.configurations.len(), 4);
        assert_eq!(config.top_n, DEFAULT_TOP_N);
    }

    #[test]
    fn test_comparison_file_name_default() {
        let cfg = TestConfiguration::new("Nightly", "nightly.txt");
        assert_eq!(cfg.comparison_file_name(), "Nightly_comparison.csv");

        let cfg = cfg.with_comparison_file("custom.csv");
        assert_eq!(cfg.comparison_file_name(), "custom.csv");
    }

    #[test]
    fn test_validate_rejects_empty_environments() {
        let config = AnalysisConfig::default().with_environments(Vec::new());
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            BenchDiffError::InvalidConfig { ref parameter, .. } if parameter == "environments"
        ));
    }

    #[test]
    fn test_validate_rejects_empty_configurations() {
        let config = AnalysisConfig::default().with_configurations(Vec::new());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_subject() {
        let config = AnalysisConfig::default().with_subject("BSD");
        let msg = config.validate().unwrap_err().to_string();
        assert!(msg.contains("subject"));
        assert!(msg.contains("BSD"));
    }

    #[test]
    fn test_validate_rejects_subject_as_baseline() {
        let config = AnalysisConfig::default().with_baselines(vec!["IYA".to_string()]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_missing_baselines() {
        let config = AnalysisConfig::default().with_baselines(Vec::new());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_duplicate_labels() {
        let config = AnalysisConfig::default().with_environments(vec![
            Environment::new("Debian", "a"),
            Environment::new("Debian", "b"),
            Environment::new("IYA", "c"),
            Environment::new("RHEL", "d"),
        ]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_shared_comparison_file() {
        let config = AnalysisConfig::default().with_configurations(vec![
            TestConfiguration::new("Quick", "quick.txt").with_comparison_file("cmp.csv"),
            TestConfiguration::new("Standard", "standard.txt").with_comparison_file("cmp.csv"),
        ]);
        let msg = config.validate().unwrap_err().to_string();
        assert!(msg.contains("cmp.csv"));

        // An explicit name can also collide with another configuration's default.
        let config = AnalysisConfig::default().with_configurations(vec![
            TestConfiguration::new("Quick", "quick.txt"),
            TestConfiguration::new("Nightly", "nightly.txt")
                .with_comparison_file("Quick_comparison.csv"),
        ]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = AnalysisConfig::default();
        let yaml = config.to_yaml().unwrap();
        let parsed = AnalysisConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_yaml_defaults_for_optional_fields() {
        let yaml = r#"
environments:
  - label: A
    directory: a
  - label: B
    directory: b
subject: B
baselines: [A]
configurations:
  - name: Quick
    filename: quick.txt
"#;
        let config = AnalysisConfig::from_yaml_str(yaml).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.line_prefix, DEFAULT_LINE_PREFIX);
        assert_eq!(config.metric_unit, DEFAULT_METRIC_UNIT);
        assert_eq!(config.categories, Category::defaults());
        assert_eq!(config.configurations[0].duration, "");
    }

    #[test]
    fn test_load_missing_file() {
        let err = AnalysisConfig::load(Path::new("/nonexistent/benchdiff.yaml")).unwrap_err();
        assert!(matches!(err, BenchDiffError::Io { .. }));
    }

    #[test]
    fn test_raw_file_path() {
        let config = AnalysisConfig::default();
        let path = config.raw_file_path(
            Path::new("results"),
            &config.environments[0],
            &config.configurations[0],
        );
        assert_eq!(
            path,
            PathBuf::from("results/go_benchmark_go_system_debian11/go_benchmark_quick.txt")
        );
    }
}

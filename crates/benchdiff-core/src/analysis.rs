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

//! Comparative analysis of one test configuration.
//!
//! Win counts are kept per baseline pair: every baseline gets its own count
//! of records where the subject is strictly faster, together with the
//! speedup statistics of exactly those records. The headline figures use the
//! primary (first) baseline.

use crate::model::BenchmarkRecord;
use crate::stats::SpeedupStats;
use serde::{Deserialize, Serialize};

/// Subject-versus-baseline comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineComparison {
    /// Baseline environment label.
    pub baseline: String,
    /// Records where the subject's primary value is strictly lower.
    pub wins: usize,
    /// Speedups over the winning records.
    pub stats: SpeedupStats,
}

/// Aggregate result for one test configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Test configuration name.
    pub configuration: String,
    /// Subject environment label.
    pub subject: String,
    /// Number of joined records.
    pub total: usize,
    /// Records won outright by each environment, in environment order.
    pub wins_by_environment: Vec<(String, usize)>,
    /// One comparison per baseline, in baseline order.
    pub baselines: Vec<BaselineComparison>,
}

impl AnalysisResult {
    /// Comparison against the primary baseline.
    pub fn primary(&self) -> Option<&BaselineComparison> {
        self.baselines.first()
    }

    /// Comparison against `baseline`.
    pub fn comparison(&self, baseline: &str) -> Option<&BaselineComparison> {
        self.baselines.iter().find(|c| c.baseline == baseline)
    }

    /// Subject wins against the primary baseline.
    pub fn subject_wins(&self) -> usize {
        self.primary().map_or(0, |c| c.wins)
    }

    /// Subject win rate against the primary baseline, in percent.
    pub fn win_rate_percent(&self) -> f64 {
        percentage(self.subject_wins(), self.total)
    }

    /// Speedup statistics against the primary baseline.
    pub fn primary_stats(&self) -> SpeedupStats {
        self.primary().map(|c| c.stats).unwrap_or_default()
    }

    /// Average speedup against `baseline`, zero when unknown.
    pub fn avg_speedup_vs(&self, baseline: &str) -> f64 {
        self.comparison(baseline).map_or(0.0, |c| c.stats.mean)
    }

    /// Outright wins for `environment`.
    pub fn wins_for(&self, environment: &str) -> usize {
        self.wins_by_environment
            .iter()
            .find(|(label, _)| label == environment)
            .map_or(0, |(_, wins)| *wins)
    }
}

/// `part / whole * 100`, zero when `whole` is zero.
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Speedups of `subject` over `baseline` for records the subject wins.
pub fn speedup_samples<'a, I>(records: I, subject: &str, baseline: &str) -> Vec<f64>
where
    I: IntoIterator<Item = &'a BenchmarkRecord>,
{
    records
        .into_iter()
        .filter_map(|r| r.speedup(subject, baseline))
        .collect()
}

/// Analyzes one configuration's joined records.
///
/// An empty record set yields zero counts and zero statistics.
pub fn analyze(
    configuration: &str,
    records: &[BenchmarkRecord],
    environments: &[String],
    subject: &str,
    baselines: &[String],
) -> AnalysisResult {
    let wins_by_environment = environments
        .iter()
        .map(|env| {
            let wins = records.iter().filter(|r| &r.best_environment == env).count();
            (env.clone(), wins)
        })
        .collect();

    let baselines = baselines
        .iter()
        .map(|baseline| {
            let samples = speedup_samples(records, subject, baseline);
            BaselineComparison {
                baseline: baseline.clone(),
                wins: samples.len(),
                stats: SpeedupStats::from_samples(&samples),
            }
        })
        .collect();

    AnalysisResult {
        configuration: configuration.to_string(),
        subject: subject.to_string(),
        total: records.len(),
        wins_by_environment,
        baselines,
    }
}

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

//! Benchmark record data model.

use serde::{Deserialize, Serialize};

/// Metrics reported for one benchmark in one environment.
///
/// `bytes_per_op` and `allocs_per_op` are `None` when the raw line did not
/// carry them; such values print as zero but never win a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Metrics {
    /// Primary metric (time per operation).
    pub primary: f64,
    /// Bytes allocated per operation.
    pub bytes_per_op: Option<f64>,
    /// Allocations per operation.
    pub allocs_per_op: Option<f64>,
}

impl Metrics {
    /// Creates metrics with only the primary value set.
    pub fn new(primary: f64) -> Self {
        Self {
            primary,
            bytes_per_op: None,
            allocs_per_op: None,
        }
    }

    /// Sets bytes per operation.
    pub fn with_bytes(mut self, bytes: f64) -> Self {
        self.bytes_per_op = Some(bytes);
        self
    }

    /// Sets allocations per operation.
    pub fn with_allocs(mut self, allocs: f64) -> Self {
        self.allocs_per_op = Some(allocs);
        self
    }

    /// Bytes per operation, zero when absent.
    pub fn bytes_or_zero(&self) -> f64 {
        self.bytes_per_op.unwrap_or(0.0)
    }

    /// Allocations per operation, zero when absent.
    pub fn allocs_or_zero(&self) -> f64 {
        self.allocs_per_op.unwrap_or(0.0)
    }
}

/// Returns the label with the strictly lowest value.
///
/// The first entry initializes the minimum and later entries replace it
/// only when strictly lower, so ties go to the earliest label.
pub fn lowest<'a, I>(values: I) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let mut best: Option<(&'a str, f64)> = None;
    for (label, value) in values {
        match best {
            Some((_, min)) if value >= min => {}
            _ => best = Some((label, value)),
        }
    }
    best.map(|(label, _)| label)
}

/// One benchmark's results within one test configuration, across environments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    /// Normalized benchmark name, shared across environments.
    pub name: String,
    /// Unit of the primary metric.
    pub metric_unit: String,
    /// Metrics per environment, in configured environment order.
    pub per_environment: Vec<(String, Metrics)>,
    /// Environment with the lowest primary value.
    pub best_environment: String,
}

impl BenchmarkRecord {
    /// Creates a record and derives its best environment.
    pub fn new(
        name: impl Into<String>,
        metric_unit: impl Into<String>,
        per_environment: Vec<(String, Metrics)>,
    ) -> Self {
        let best_environment = lowest(
            per_environment
                .iter()
                .map(|(label, m)| (label.as_str(), m.primary)),
        )
        .unwrap_or_default()
        .to_string();

        Self {
            name: name.into(),
            metric_unit: metric_unit.into(),
            per_environment,
            best_environment,
        }
    }

    /// Metrics for `environment`, if present.
    pub fn metrics(&self, environment: &str) -> Option<&Metrics> {
        self.per_environment
            .iter()
            .find(|(label, _)| label == environment)
            .map(|(_, m)| m)
    }

    /// Primary value for `environment`, if present.
    pub fn primary(&self, environment: &str) -> Option<f64> {
        self.metrics(environment).map(|m| m.primary)
    }

    /// `baseline / subject` whenever both primary values are positive.
    pub fn ratio(&self, subject: &str, baseline: &str) -> Option<f64> {
        match (self.primary(subject), self.primary(baseline)) {
            (Some(s), Some(b)) if s > 0.0 && b > 0.0 => Some(b / s),
            _ => None,
        }
    }

    /// Speedup of `subject` over `baseline`, defined only when the subject
    /// strictly wins.
    pub fn speedup(&self, subject: &str, baseline: &str) -> Option<f64> {
        match (self.primary(subject), self.primary(baseline)) {
            (Some(s), Some(b)) if s > 0.0 && b > 0.0 && s < b => Some(b / s),
            _ => None,
        }
    }

    /// Environment with the lowest reported bytes per operation.
    pub fn best_bytes(&self) -> Option<&str> {
        lowest(
            self.per_environment
                .iter()
                .filter_map(|(label, m)| m.bytes_per_op.map(|v| (label.as_str(), v))),
        )
    }

    /// Environment with the lowest reported allocations per operation.
    pub fn best_allocs(&self) -> Option<&str> {
        lowest(
            self.per_environment
                .iter()
                .filter_map(|(label, m)| m.allocs_per_op.map(|v| (label.as_str(), v))),
        )
    }
}

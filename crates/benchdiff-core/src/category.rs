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

//! Keyword-based benchmark categories.
//!
//! Membership is case-sensitive substring containment and is not
//! exclusive: a record whose name matches several keyword sets belongs to
//! each of those categories.

use crate::analysis::speedup_samples;
use crate::model::BenchmarkRecord;
use crate::stats::mean;
use serde::{Deserialize, Serialize};

/// Named group of benchmarks defined by name keywords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category name.
    pub name: String,
    /// Substrings matched against benchmark names.
    pub keywords: Vec<String>,
}

impl Category {
    /// Creates a category.
    pub fn new(name: impl Into<String>, keywords: &[&str]) -> Self {
        Self {
            name: name.into(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    /// Returns whether `benchmark` contains any keyword.
    pub fn matches(&self, benchmark: &str) -> bool {
        self.keywords.iter().any(|k| benchmark.contains(k.as_str()))
    }

    /// Built-in category table.
    pub fn defaults() -> Vec<Category> {
        vec![
            Category::new("CPU-Intensive", &["Fibonacci", "Prime", "Matrix"]),
            Category::new("Memory", &["Sorting", "MemoryAllocation", "Map"]),
            Category::new("String", &["String", "StringBuilder"]),
            Category::new("JSON", &["JSON"]),
            Category::new("Crypto", &["SHA256"]),
            Category::new("Concurrency", &["Goroutines", "Channel", "Mutex"]),
        ]
    }
}

/// Records of one category.
#[derive(Debug, Clone)]
pub struct CategoryView<'a> {
    /// The category.
    pub category: &'a Category,
    /// Matching records, in input order.
    pub records: Vec<&'a BenchmarkRecord>,
}

/// Splits `records` into the categories of `categories`, in table order.
///
/// Every category is returned, including those with no matching record.
pub fn classify<'a>(
    records: &'a [BenchmarkRecord],
    categories: &'a [Category],
) -> Vec<CategoryView<'a>> {
    categories
        .iter()
        .map(|category| CategoryView {
            category,
            records: records.iter().filter(|r| category.matches(&r.name)).collect(),
        })
        .collect()
}

/// Average subject speedup of one category within one configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    /// Category name.
    pub category: String,
    /// Test configuration name.
    pub configuration: String,
    /// Number of records in the category.
    pub records: usize,
    /// Average speedup per baseline, in baseline order.
    pub avg_speedup: Vec<(String, f64)>,
}

impl CategorySummary {
    /// Average speedup against the primary baseline.
    pub fn primary_avg(&self) -> f64 {
        self.avg_speedup.first().map_or(0.0, |(_, v)| *v)
    }

    /// Average speedup against `baseline`.
    pub fn avg_speedup_vs(&self, baseline: &str) -> f64 {
        self.avg_speedup
            .iter()
            .find(|(b, _)| b == baseline)
            .map_or(0.0, |(_, v)| *v)
    }
}

/// Summarizes every non-empty category of one configuration.
pub fn summarize(
    configuration: &str,
    records: &[BenchmarkRecord],
    categories: &[Category],
    subject: &str,
    baselines: &[String],
) -> Vec<CategorySummary> {
    classify(records, categories)
        .into_iter()
        .filter(|view| !view.records.is_empty())
        .map(|view| {
            let avg_speedup = baselines
                .iter()
                .map(|b| {
                    let samples = speedup_samples(view.records.iter().copied(), subject, b);
                    (b.clone(), mean(&samples))
                })
                .collect();
            CategorySummary {
                category: view.category.name.clone(),
                configuration: configuration.to_string(),
                records: view.records.len(),
                avg_speedup,
            }
        })
        .collect()
}

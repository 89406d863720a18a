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

//! Cross-environment benchmark analysis engine.
//!
//! Reads raw benchmark output collected on several operating-system
//! environments, keeps the benchmarks every environment reported, and
//! computes how a subject environment compares with its baselines.
//!
//! ## Pipeline
//!
//! ```text
//! raw files ──► parser ──► join ──► analysis ──► reports
//!                                 └► category ──┘
//! ```
//!
//! ## Usage
//!
//! ```no_run
//! use benchdiff_core::{AnalysisConfig, Pipeline};
//!
//! let pipeline = Pipeline::new(AnalysisConfig::default(), "results").unwrap();
//! let run = pipeline.run();
//! for config_run in &run.runs {
//!     println!(
//!         "{}: {} benchmarks, {} wins",
//!         config_run.configuration.name,
//!         config_run.analysis.total,
//!         config_run.analysis.subject_wins()
//!     );
//! }
//! ```

pub mod analysis;
pub mod category;
pub mod config;
pub mod error;
pub mod join;
pub mod model;
pub mod parser;
pub mod pipeline;
pub mod ranking;
pub mod stats;

pub use analysis::{analyze, AnalysisResult, BaselineComparison};
pub use category::{classify, summarize, Category, CategorySummary, CategoryView};
pub use config::{AnalysisConfig, Environment, TestConfiguration};
pub use error::{BenchDiffError, Result};
pub use join::join;
pub use model::{BenchmarkRecord, Metrics};
pub use parser::{normalize_name, MetricsMap, RecordParser};
pub use pipeline::{AnalysisRun, ConfigurationRun, Pipeline, SkippedEnvironment};
pub use ranking::{top_speedups, RankedSpeedup};
pub use stats::SpeedupStats;

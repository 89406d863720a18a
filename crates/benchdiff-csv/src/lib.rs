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

//! CSV artifacts for BenchDiff analyses.
//!
//! - [`export_summary`]: one row per test configuration
//!   (`benchmark_analysis_summary.csv`)
//! - [`export_comparison`]: one row per benchmark of a configuration, with
//!   primary, bytes and allocation columns per environment
//! - [`read_comparison`]: the reverse path, loading records from an existing
//!   comparison CSV
//!
//! # Round trip
//!
//! ```no_run
//! use benchdiff_core::{AnalysisConfig, Pipeline};
//! use benchdiff_csv::{export_comparison, read_comparison_file};
//! use std::path::Path;
//!
//! let config = AnalysisConfig::default();
//! let run = Pipeline::new(config.clone(), "results").unwrap().run();
//! let quick = &run.runs[0];
//! let path = Path::new("quick.csv");
//!
//! export_comparison(&run, quick, path).unwrap();
//! let records = read_comparison_file(path, &run.environments, &run.metric_unit).unwrap();
//! assert_eq!(records.len(), quick.records.len());
//! ```

mod error;
mod reader;
mod writer;

pub use error::{CsvError, Result};
pub use reader::{read_comparison, read_comparison_file};
pub use writer::{
    comparison_header, comparison_row, export_comparison, export_summary, summary_header,
    write_comparison, write_summary,
};

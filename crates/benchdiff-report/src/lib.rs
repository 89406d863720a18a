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

//! Reporters for BenchDiff analyses.
//!
//! - [`console`]: progress lines, comparison table, category analysis and
//!   top speedups, rendered as text for stdout
//! - [`markdown`]: the detailed Markdown report
//! - [`json`]: machine-readable export of a whole run

pub mod console;
pub mod json;
pub mod markdown;

#[cfg(test)]
mod test_support;

pub use console::{print_configuration, print_report};
pub use json::{export_json, JsonReport};
pub use markdown::{export_markdown, render_markdown};

/// Identifies this tool in generated reports.
pub fn generator_name() -> String {
    format!("benchdiff {}", env!("CARGO_PKG_VERSION"))
}

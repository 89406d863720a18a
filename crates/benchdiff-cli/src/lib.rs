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

//! BenchDiff CLI library.
//!
//! ## Commands
//!
//! - **analyze**: parse raw benchmark output from every environment, print
//!   the console report and write the CSV, Markdown and optional JSON
//!   artifacts
//! - **inspect-csv**: print the console summary of an existing comparison
//!   CSV
//! - **default-config**: print the built-in configuration as YAML

pub mod cli;
pub mod commands;
pub mod error;

pub use error::{CliError, Result};

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

//! Default-config command - print the built-in configuration

use crate::error::Result;
use benchdiff_core::AnalysisConfig;

/// Prints the built-in configuration as YAML, ready to be edited and passed
/// back with `--config`.
pub fn default_config() -> Result<()> {
    print!("{}", AnalysisConfig::default().to_yaml()?);
    Ok(())
}

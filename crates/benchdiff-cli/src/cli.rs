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

//! CLI command definitions and argument parsing.

use crate::commands;
use crate::error::Result;
use clap::Subcommand;
use std::path::PathBuf;

/// BenchDiff commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze raw benchmark output from every environment
    ///
    /// Reads `<input-dir>/<environment directory>/<configuration file>` for
    /// every environment and test configuration, prints the console report
    /// and writes the summary CSV, the Markdown report and one comparison CSV
    /// per configuration.
    Analyze {
        /// YAML configuration file (defaults to the built-in setup)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Directory holding the environment directories
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        input_dir: PathBuf,

        /// Directory the artifacts are written to
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        output_dir: PathBuf,

        /// Length of the ranked speedup list
        #[arg(long, value_name = "N")]
        top: Option<usize>,

        /// Also write benchmark_analysis.json
        #[arg(long)]
        json: bool,
    },

    /// Print the console summary for an existing comparison CSV
    InspectCsv {
        /// Comparison CSV file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// YAML configuration file (defaults to the built-in setup)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Print the built-in configuration as YAML
    DefaultConfig,
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` for invalid configurations, unreadable CSV input, or
    /// when any artifact failed to be written.
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Analyze {
                config,
                input_dir,
                output_dir,
                top,
                json,
            } => commands::analyze(&commands::AnalyzeOptions {
                config,
                input_dir,
                output_dir,
                top,
                json,
            }),
            Commands::InspectCsv { file, config } => {
                commands::inspect_csv(&file, config.as_deref())
            }
            Commands::DefaultConfig => commands::default_config(),
        }
    }
}

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

//! BenchDiff Command Line Interface

use benchdiff_cli::cli::Commands;
use clap::{ArgAction, Parser};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// BenchDiff - cross-environment benchmark analysis
///
/// # Examples
///
/// ```bash
/// # Analyze results below ./results with the built-in setup
/// benchdiff analyze --input-dir results --output-dir reports
///
/// # Start a custom configuration from the built-in one
/// benchdiff default-config > benchdiff.yaml
/// benchdiff analyze --config benchdiff.yaml --json
/// ```
#[derive(Parser)]
#[command(name = "benchdiff")]
#[command(author, version, long_about = None)]
#[command(about = "BenchDiff - cross-environment benchmark analysis")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

fn log_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "benchdiff=warn",
        1 => "benchdiff=info",
        _ => "benchdiff=debug",
    }
}

/// Logs go to stderr; `RUST_LOG` overrides the verbosity flag.
fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

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

//! Structured error types for the BenchDiff CLI.

use benchdiff_core::BenchDiffError;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for BenchDiff CLI operations.
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// Configuration or analysis error from the core library.
    #[error(transparent)]
    Core(#[from] BenchDiffError),

    /// Output directory could not be prepared.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// One or more artifacts could not be written.
    #[error("{failed} of {total} output files could not be written")]
    ArtifactsFailed {
        /// Number of failed artifacts
        failed: usize,
        /// Number of attempted artifacts
        total: usize,
    },
}

impl CliError {
    /// Creates an I/O error for `path`.
    pub fn io_error(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

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

//! Error types for CSV artifact operations.

use benchdiff_core::BenchDiffError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for CSV operations.
pub type Result<T> = std::result::Result<T, CsvError>;

/// CSV reading and writing errors.
///
/// # Examples
///
/// ```
/// use benchdiff_csv::CsvError;
///
/// let err = CsvError::MissingColumn("RHEL".to_string());
/// assert_eq!(err.to_string(), "Missing required column: RHEL");
/// ```
#[derive(Debug, Error)]
pub enum CsvError {
    /// CSV parsing error at a specific record.
    #[error("CSV parse error at line {line}: {message}")]
    ParseError {
        /// Line number where the error occurred (1-based).
        line: u64,
        /// Detailed error message.
        message: String,
    },

    /// No header column for a required environment.
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// The input has no header row.
    #[error("CSV input has no header row")]
    MissingHeader,

    /// Output file could not be written.
    #[error("Failed to write '{path}': {message}")]
    Write {
        /// Destination path.
        path: PathBuf,
        /// Detailed error message.
        message: String,
    },

    /// Input file could not be read.
    #[error("Failed to read '{path}': {message}")]
    Read {
        /// Source path.
        path: PathBuf,
        /// Detailed error message.
        message: String,
    },

    /// Other CSV errors.
    #[error("CSV error: {0}")]
    Other(String),
}

impl From<csv::Error> for CsvError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line());
        match line {
            Some(line) => CsvError::ParseError {
                line,
                message: err.to_string(),
            },
            None => CsvError::Other(err.to_string()),
        }
    }
}

impl From<CsvError> for BenchDiffError {
    fn from(err: CsvError) -> Self {
        match err {
            CsvError::Write { path, message } | CsvError::Read { path, message } => {
                BenchDiffError::csv_error(path, message)
            }
            other => BenchDiffError::csv_error(PathBuf::new(), other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = CsvError::ParseError {
            line: 7,
            message: "found record with 3 fields".to_string(),
        };
        assert!(err.to_string().contains("line 7"));
    }

    #[test]
    fn test_write_error_converts_with_path() {
        let err = CsvError::Write {
            path: PathBuf::from("out/summary.csv"),
            message: "permission denied".to_string(),
        };
        match BenchDiffError::from(err) {
            BenchDiffError::Csv { path, message } => {
                assert_eq!(path, PathBuf::from("out/summary.csv"));
                assert_eq!(message, "permission denied");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

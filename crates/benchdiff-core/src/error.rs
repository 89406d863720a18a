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

//! Error types for BenchDiff analysis operations.
//!
//! Every fallible library operation returns [`Result<T>`], carrying a
//! [`BenchDiffError`] with enough context (file paths, parameter names)
//! to be reported directly to the user.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for BenchDiff operations.
pub type Result<T> = std::result::Result<T, BenchDiffError>;

/// Errors that can occur while loading configuration, reading benchmark
/// output or writing analysis artifacts.
///
/// # Examples
///
/// ```
/// use benchdiff_core::BenchDiffError;
///
/// let err = BenchDiffError::InvalidConfig {
///     parameter: "subject".to_string(),
///     reason: "unknown environment 'BSD'".to_string(),
/// };
/// assert_eq!(
///     err.to_string(),
///     "Invalid configuration parameter 'subject': unknown environment 'BSD'"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BenchDiffError {
    /// File could not be opened, read or written.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// The analysis configuration is unusable.
    #[error("Invalid configuration parameter '{parameter}': {reason}")]
    InvalidConfig {
        /// Parameter name
        parameter: String,
        /// Reason for invalidity
        reason: String,
    },

    /// A configuration file could not be deserialized.
    #[error("Configuration parse error: {0}")]
    ConfigParse(String),

    /// CSV input or output failed.
    #[error("CSV error for '{path}': {message}")]
    Csv {
        /// The file path being read or written
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// Serializing an analysis artifact failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl BenchDiffError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a configuration error for `parameter`.
    pub fn invalid_config(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Create a CSV error with file path context.
    pub fn csv_error(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Csv {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for BenchDiffError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::ConfigParse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_keeps_path() {
        let err = BenchDiffError::io_error(
            "debian/quick.txt",
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        );
        let msg = err.to_string();
        assert!(msg.contains("debian/quick.txt"));
        assert!(msg.contains("No such file"));
    }

    #[test]
    fn test_csv_error_display() {
        let err = BenchDiffError::csv_error("summary.csv", "unequal lengths");
        assert_eq!(err.to_string(), "CSV error for 'summary.csv': unequal lengths");
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_err = serde_yaml::from_str::<Vec<u32>>("{not: [a list").unwrap_err();
        let err: BenchDiffError = yaml_err.into();
        assert!(matches!(err, BenchDiffError::ConfigParse(_)));
    }
}

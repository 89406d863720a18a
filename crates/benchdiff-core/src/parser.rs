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

//! Raw benchmark output parser.
//!
//! Data lines start with a fixed prefix and carry whitespace-delimited
//! fields:
//!
//! ```text
//! BenchmarkFibonacci20-4   52345   22897 ns/op   0 B/op   0 allocs/op
//! ```
//!
//! Field 3 is the primary metric; fields 5 and 7 are bytes and allocations
//! per operation when present. Any other line is ignored.

use crate::error::{BenchDiffError, Result};
use crate::model::Metrics;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::{debug, trace};

/// Parsed metrics of one raw file, keyed by normalized benchmark name.
pub type MetricsMap = BTreeMap<String, Metrics>;

const PRIMARY_FIELD: usize = 2;
const BYTES_FIELD: usize = 4;
const ALLOCS_FIELD: usize = 6;
const MIN_FIELDS: usize = 3;

/// Line-oriented parser for raw benchmark output.
#[derive(Debug, Clone)]
pub struct RecordParser {
    prefix: String,
}

impl RecordParser {
    /// Creates a parser that accepts lines starting with `prefix`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Parses the file at `path`.
    ///
    /// The file handle lives only for the duration of this call.
    ///
    /// # Errors
    ///
    /// Returns [`BenchDiffError::Io`] when the file cannot be opened or read.
    pub fn parse_file(&self, path: &Path) -> Result<MetricsMap> {
        let file = File::open(path).map_err(|e| BenchDiffError::io_error(path, e))?;
        let map = self
            .parse_reader(BufReader::new(file))
            .map_err(|e| BenchDiffError::io_error(path, e))?;
        debug!(path = %path.display(), benchmarks = map.len(), "parsed raw benchmark file");
        Ok(map)
    }

    /// Parses every line of `reader`. A name seen twice keeps its last value.
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> io::Result<MetricsMap> {
        let mut map = MetricsMap::new();
        for line in reader.lines() {
            let line = line?;
            if let Some((name, metrics)) = self.parse_line(&line) {
                map.insert(name, metrics);
            }
        }
        Ok(map)
    }

    /// Parses a single line, returning `None` for non-data lines.
    pub fn parse_line(&self, line: &str) -> Option<(String, Metrics)> {
        if !line.starts_with(&self.prefix) {
            return None;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < MIN_FIELDS {
            trace!(line, "skipping short benchmark line");
            return None;
        }

        let name = normalize_name(fields[0]).to_string();
        let primary = parse_number(fields[PRIMARY_FIELD]).unwrap_or_else(|| {
            debug!(name = %name, value = fields[PRIMARY_FIELD], "unparsable primary value");
            0.0
        });

        let metrics = Metrics {
            primary,
            bytes_per_op: fields.get(BYTES_FIELD).and_then(|f| parse_number(f)),
            allocs_per_op: fields.get(ALLOCS_FIELD).and_then(|f| parse_number(f)),
        };

        Some((name, metrics))
    }
}

impl Default for RecordParser {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_LINE_PREFIX)
    }
}

/// Strips a trailing `-<integer>` parallelism suffix from a benchmark name.
///
/// ```
/// use benchdiff_core::parser::normalize_name;
///
/// assert_eq!(normalize_name("BenchmarkSHA256Large-8"), "BenchmarkSHA256Large");
/// assert_eq!(normalize_name("BenchmarkSHA256Large"), "BenchmarkSHA256Large");
/// assert_eq!(normalize_name("BenchmarkSort-fast"), "BenchmarkSort-fast");
/// ```
pub fn normalize_name(raw: &str) -> &str {
    match raw.rsplit_once('-') {
        Some((stem, suffix))
            if !stem.is_empty()
                && !suffix.is_empty()
                && suffix.bytes().all(|b| b.is_ascii_digit()) =>
        {
            stem
        }
        _ => raw,
    }
}

/// Parses a finite number, ignoring thousands separators.
pub fn parse_number(field: &str) -> Option<f64> {
    let cleaned = field.trim().replace(',', "");
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

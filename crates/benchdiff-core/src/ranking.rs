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

//! Ranked speedup list across test configurations.

use crate::model::BenchmarkRecord;
use serde::{Deserialize, Serialize};

/// One entry of the ranked speedup list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedSpeedup {
    /// Benchmark name.
    pub name: String,
    /// Test configuration the record came from.
    pub configuration: String,
    /// Speedup of the subject over the baseline.
    pub speedup: f64,
}

/// Returns the `n` largest subject speedups over `baseline`.
///
/// `runs` yields `(configuration, records)` pairs in report order. Entries
/// are sorted strictly descending; equal speedups keep the order in which
/// they were encountered.
pub fn top_speedups<'a, I>(runs: I, subject: &str, baseline: &str, n: usize) -> Vec<RankedSpeedup>
where
    I: IntoIterator<Item = (&'a str, &'a [BenchmarkRecord])>,
{
    let mut ranked: Vec<RankedSpeedup> = runs
        .into_iter()
        .flat_map(|(configuration, records)| {
            records.iter().filter_map(move |r| {
                r.speedup(subject, baseline).map(|speedup| RankedSpeedup {
                    name: r.name.clone(),
                    configuration: configuration.to_string(),
                    speedup,
                })
            })
        })
        .collect();

    // sort_by is stable
    ranked.sort_by(|a, b| b.speedup.total_cmp(&a.speedup));
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Metrics;

    fn record(name: &str, base: f64, subject: f64) -> BenchmarkRecord {
        BenchmarkRecord::new(
            name,
            "ns/op",
            vec![
                ("Base".to_string(), Metrics::new(base)),
                ("Subj".to_string(), Metrics::new(subject)),
            ],
        )
    }

    #[test]
    fn test_descending_with_stable_ties() {
        let quick = vec![record("a", 20.0, 10.0), record("b", 40.0, 10.0)];
        let standard = vec![
            record("c", 20.0, 10.0),
            record("d", 5.0, 10.0),
            record("e", 30.0, 10.0),
        ];
        let ranked = top_speedups(
            vec![("Quick", quick.as_slice()), ("Standard", standard.as_slice())],
            "Subj",
            "Base",
            10,
        );

        let order: Vec<(&str, &str)> = ranked
            .iter()
            .map(|r| (r.name.as_str(), r.configuration.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("b", "Quick"),
                ("e", "Standard"),
                ("a", "Quick"),
                ("c", "Standard"),
            ]
        );
        assert_eq!(ranked[0].speedup, 4.0);
    }

    #[test]
    fn test_truncates_to_n() {
        let records: Vec<BenchmarkRecord> = (1..=15)
            .map(|i| record(&format!("bench{}", i), 10.0 + i as f64, 10.0))
            .collect();
        let ranked = top_speedups(vec![("Quick", records.as_slice())], "Subj", "Base", 10);
        assert_eq!(ranked.len(), 10);
        assert_eq!(ranked[0].name, "bench15");
        assert!(ranked.windows(2).all(|w| w[0].speedup >= w[1].speedup));
    }

    #[test]
    fn test_no_wins_yields_empty_list() {
        let records = vec![record("slow", 1.0, 2.0)];
        assert!(top_speedups(vec![("Quick", records.as_slice())], "Subj", "Base", 10).is_empty());
    }
}

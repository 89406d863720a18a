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

//! Cross-environment joiner.
//!
//! Keeps only benchmarks that every environment reported with a positive
//! primary value. A missing environment contributes an empty map, which
//! empties the join.

use crate::model::{BenchmarkRecord, Metrics};
use crate::parser::MetricsMap;
use tracing::debug;

/// Joins per-environment maps, given in configured environment order.
///
/// Records come back sorted by name; each record lists its environments in
/// the order of `environments`.
pub fn join(environments: &[(String, MetricsMap)], metric_unit: &str) -> Vec<BenchmarkRecord> {
    let Some(((_, first), rest)) = environments.split_first() else {
        return Vec::new();
    };

    let mut records = Vec::new();
    let mut dropped = 0usize;

    for name in first.keys() {
        let per_environment: Option<Vec<(String, Metrics)>> = environments
            .iter()
            .map(|(label, map)| {
                map.get(name)
                    .filter(|m| m.primary > 0.0)
                    .map(|m| (label.clone(), *m))
            })
            .collect();

        match per_environment {
            Some(per_environment) => {
                records.push(BenchmarkRecord::new(name.clone(), metric_unit, per_environment))
            }
            None => dropped += 1,
        }
    }

    if !rest.is_empty() {
        debug!(
            joined = records.len(),
            dropped, "joined benchmarks across environments"
        );
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn map(entries: &[(&str, f64)]) -> MetricsMap {
        entries
            .iter()
            .map(|(name, v)| (name.to_string(), Metrics::new(*v)))
            .collect()
    }

    #[test]
    fn test_join_three_environments() {
        let envs = vec![
            ("A".to_string(), map(&[("fib", 100.0), ("sha", 10.0)])),
            ("B".to_string(), map(&[("fib", 80.0), ("sha", 12.0)])),
            ("C".to_string(), map(&[("fib", 120.0)])),
        ];
        let records = join(&envs, "ns/op");
        assert_eq!(records.len(), 1);

        let fib = &records[0];
        assert_eq!(fib.name, "fib");
        assert_eq!(fib.best_environment, "B");
        assert_eq!(fib.speedup("B", "A"), Some(1.25));
        assert_eq!(fib.speedup("B", "C"), Some(1.5));
        let labels: Vec<&str> = fib.per_environment.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(labels, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_non_positive_primary_excluded() {
        let envs = vec![
            ("A".to_string(), map(&[("x", 0.0), ("y", 1.0)])),
            ("B".to_string(), map(&[("x", 5.0), ("y", -1.0)])),
        ];
        assert!(join(&envs, "ns/op").is_empty());
    }

    #[test]
    fn test_missing_environment_empties_join() {
        let envs = vec![
            ("A".to_string(), map(&[("x", 1.0)])),
            ("B".to_string(), MetricsMap::new()),
        ];
        assert!(join(&envs, "ns/op").is_empty());
        assert!(join(&[], "ns/op").is_empty());
    }

    #[test]
    fn test_output_sorted_by_name() {
        let envs = vec![
            ("A".to_string(), map(&[("b", 1.0), ("a", 1.0), ("C", 1.0)])),
            ("B".to_string(), map(&[("a", 2.0), ("b", 2.0), ("C", 2.0)])),
        ];
        let names: Vec<String> = join(&envs, "ns/op").into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["C", "a", "b"]);
    }

    fn arb_map() -> impl Strategy<Value = MetricsMap> {
        prop::collection::btree_map("[a-e]{1,2}", -5.0f64..50.0, 0..12)
            .prop_map(|m| m.into_iter().map(|(k, v)| (k, Metrics::new(v))).collect())
    }

    proptest! {
        #[test]
        fn prop_join_membership(maps in prop::collection::vec(arb_map(), 1..4)) {
            let envs: Vec<(String, MetricsMap)> = maps
                .into_iter()
                .enumerate()
                .map(|(i, m)| (format!("env{}", i), m))
                .collect();
            let records = join(&envs, "ns/op");

            let smallest = envs.iter().map(|(_, m)| m.len()).min().unwrap_or(0);
            prop_assert!(records.len() <= smallest);

            for (_, m) in &envs {
                for name in m.keys() {
                    let expected = envs
                        .iter()
                        .all(|(_, other)| other.get(name).map_or(false, |x| x.primary > 0.0));
                    let present = records.iter().any(|r| &r.name == name);
                    prop_assert_eq!(expected, present);
                }
            }

            for r in &records {
                let best = r.primary(&r.best_environment).unwrap();
                let first_min = r
                    .per_environment
                    .iter()
                    .position(|(_, m)| m.primary == best)
                    .unwrap();
                prop_assert_eq!(&r.per_environment[first_min].0, &r.best_environment);
                for (_, m) in &r.per_environment {
                    prop_assert!(best <= m.primary);
                }
            }
        }
    }
}

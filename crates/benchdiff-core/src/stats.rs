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

//! Descriptive statistics over speedup samples.

use serde::{Deserialize, Serialize};

/// Mean, range and median of a set of speedup samples.
///
/// An empty sample set yields all-zero statistics.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SpeedupStats {
    /// Arithmetic mean.
    pub mean: f64,
    /// Smallest sample.
    pub min: f64,
    /// Largest sample.
    pub max: f64,
    /// Median sample.
    pub median: f64,
    /// Number of samples.
    pub samples: usize,
}

impl SpeedupStats {
    /// Computes statistics over `samples`.
    pub fn from_samples(samples: &[f64]) -> Self {
        if samples.is_empty() {
            return Self::default();
        }

        let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
        let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Self {
            mean: mean(samples),
            min,
            max,
            median: median(samples),
            samples: samples.len(),
        }
    }
}

/// Arithmetic mean, zero for an empty slice.
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Median, zero for an empty slice.
///
/// Even-sized inputs average the two middle values.
///
/// ```
/// use benchdiff_core::stats::median;
///
/// assert_eq!(median(&[]), 0.0);
/// assert_eq!(median(&[30.0, 10.0, 20.0]), 20.0);
/// assert_eq!(median(&[10.0, 40.0, 20.0, 30.0]), 25.0);
/// ```
pub fn median(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_stats_are_zero() {
        let stats = SpeedupStats::from_samples(&[]);
        assert_eq!(stats, SpeedupStats::default());
        assert_eq!(stats.mean, 0.0);
        assert_eq!(stats.median, 0.0);
    }

    #[test]
    fn test_stats_values() {
        let stats = SpeedupStats::from_samples(&[1.5, 3.0, 1.25, 2.25]);
        assert_eq!(stats.samples, 4);
        assert_eq!(stats.min, 1.25);
        assert_eq!(stats.max, 3.0);
        assert_eq!(stats.mean, 2.0);
        assert_eq!(stats.median, 1.875);
    }

    #[test]
    fn test_median_examples() {
        assert_eq!(median(&[10.0, 20.0, 30.0]), 20.0);
        assert_eq!(median(&[10.0, 20.0, 30.0, 40.0]), 25.0);
        assert_eq!(median(&[7.0]), 7.0);
    }

    proptest! {
        #[test]
        fn prop_stats_bounded(samples in prop::collection::vec(1.0f64..100.0, 1..50)) {
            let stats = SpeedupStats::from_samples(&samples);
            prop_assert!(stats.min <= stats.median && stats.median <= stats.max);
            prop_assert!(stats.min <= stats.mean + 1e-9 && stats.mean <= stats.max + 1e-9);
            prop_assert_eq!(stats.samples, samples.len());
        }
    }
}

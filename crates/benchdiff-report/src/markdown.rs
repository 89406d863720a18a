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

//! Markdown export for analysis runs.

use benchdiff_core::{AnalysisRun, RankedSpeedup};
use std::fs;
use std::io;
use std::path::Path;

/// Renders the narrative Markdown report.
///
/// `generator` identifies the producing tool in the report header.
pub fn render_markdown(run: &AnalysisRun, ranked: &[RankedSpeedup], generator: &str) -> String {
    let mut md = String::new();
    let primary = run.primary_baseline();

    md.push_str("# Comprehensive Benchmark Analysis Report\n\n");
    md.push_str(&format!("Generated: {}\n\n", generator));

    md.push_str("## Executive Summary\n\n");
    md.push_str(&format!(
        "- **Total Benchmarks Analyzed**: {} across {} test styles\n",
        run.total_records(),
        run.runs.len()
    ));
    md.push_str(&format!(
        "- **{} Overall Win Rate**: {}/{} ({:.1}%) against {}\n",
        run.subject,
        run.total_subject_wins(),
        run.total_records(),
        run.overall_win_rate(),
        primary
    ));
    for baseline in &run.baselines {
        md.push_str(&format!(
            "- **Average Speedup vs {}**: {:.2}x\n",
            baseline,
            run.overall_avg_speedup(baseline)
        ));
    }
    md.push('\n');

    md.push_str("## Cross-Style Comparison\n\n");
    md.push_str(&format!("| Test Style | Total | {} Wins | Win Rate |", run.subject));
    for baseline in &run.baselines {
        md.push_str(&format!(" Avg vs {} |", baseline));
    }
    md.push('\n');
    md.push_str("|------------|-------|------|----------|");
    for _ in &run.baselines {
        md.push_str("----------|");
    }
    md.push('\n');
    for config_run in &run.runs {
        let a = &config_run.analysis;
        md.push_str(&format!(
            "| {} | {} | {} | {:.1}% |",
            config_run.configuration.name,
            a.total,
            a.subject_wins(),
            a.win_rate_percent()
        ));
        for baseline in &run.baselines {
            md.push_str(&format!(" {:.2}x |", a.avg_speedup_vs(baseline)));
        }
        md.push('\n');
    }
    md.push('\n');

    md.push_str("## Results by Test Style\n\n");
    for config_run in &run.runs {
        let configuration = &config_run.configuration;
        let a = &config_run.analysis;
        let stats = a.primary_stats();

        md.push_str(&format!("### {} Benchmark\n\n", configuration.name));
        if !configuration.description.is_empty() {
            md.push_str(&format!("_{}", configuration.description));
            if !configuration.duration.is_empty() {
                md.push_str(&format!(" ({})", configuration.duration));
            }
            md.push_str("_\n\n");
        }
        md.push_str(&format!("- Total Tests: {}\n", a.total));
        md.push_str(&format!(
            "- {} Wins: {} ({:.1}%)\n",
            run.subject,
            a.subject_wins(),
            a.win_rate_percent()
        ));
        for baseline in &run.baselines {
            md.push_str(&format!(
                "- Average Speedup vs {}: {:.2}x\n",
                baseline,
                a.avg_speedup_vs(baseline)
            ));
        }
        md.push_str(&format!(
            "- Speedup Range: {:.2}x - {:.2}x\n",
            stats.min, stats.max
        ));
        md.push_str(&format!("- Median Speedup: {:.2}x\n", stats.median));
        for skipped in &config_run.skipped {
            md.push_str(&format!(
                "- Missing data for {}: {}\n",
                skipped.environment, skipped.reason
            ));
        }
        md.push('\n');
    }

    md.push_str("## Category Analysis\n\n");
    md.push_str(&format!(
        "Average speedup of {} over {} per category.\n\n",
        run.subject, primary
    ));
    md.push_str("| Category |");
    for config_run in &run.runs {
        md.push_str(&format!(" {} |", config_run.configuration.name));
    }
    md.push('\n');
    md.push_str("|----------|");
    for _ in &run.runs {
        md.push_str("------|");
    }
    md.push('\n');
    for category in &run.categories {
        md.push_str(&format!("| {} |", category));
        for config_run in &run.runs {
            match config_run.category(category) {
                Some(summary) => md.push_str(&format!(" {:.2}x |", summary.primary_avg())),
                None => md.push_str(" - |"),
            }
        }
        md.push('\n');
    }

    md.push_str(&format!("\n## Top {} Performance Gains\n\n", run.top_n));
    md.push_str("| Rank | Benchmark | Test Style | Speedup |\n");
    md.push_str("|------|-----------|------------|---------|\n");
    for (i, entry) in ranked.iter().enumerate() {
        md.push_str(&format!(
            "| {} | {} | {} | {:.2}x |\n",
            i + 1,
            entry.name,
            entry.configuration,
            entry.speedup
        ));
    }

    md.push_str("\n## Conclusion\n\n");
    if run.total_records() == 0 {
        md.push_str(
            "No benchmark was reported by every environment, so no comparison could be made.\n",
        );
    } else {
        md.push_str(&format!(
            "{} is faster than {} in {} of {} benchmarks ({:.1}%) across {} test styles, \
             with an average speedup of {:.2}x where it wins.\n",
            run.subject,
            primary,
            run.total_subject_wins(),
            run.total_records(),
            run.overall_win_rate(),
            run.runs.len(),
            run.overall_avg_speedup(primary)
        ));
    }

    md
}

/// Exports the Markdown report to `path`.
pub fn export_markdown(
    run: &AnalysisRun,
    ranked: &[RankedSpeedup],
    generator: &str,
    path: &Path,
) -> io::Result<()> {
    fs::write(path, render_markdown(run, ranked, generator))
}

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

//! Console reporter for analysis runs.
//!
//! Every section is rendered to a `String` first; the `print_*` helpers
//! write the rendered text to stdout.

use benchdiff_core::{AnalysisRun, ConfigurationRun, RankedSpeedup};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Table};
use std::fmt::Write;

/// Renders the progress line and summary of one configuration.
pub fn render_configuration(run: &AnalysisRun, config_run: &ConfigurationRun) -> String {
    let mut out = String::new();
    let configuration = &config_run.configuration;
    let analysis = &config_run.analysis;

    if configuration.duration.is_empty() {
        let _ = writeln!(out, "📊 Analyzing {} benchmark...", configuration.name);
    } else {
        let _ = writeln!(
            out,
            "📊 Analyzing {} benchmark ({})...",
            configuration.name, configuration.duration
        );
    }

    for skipped in &config_run.skipped {
        let _ = writeln!(
            out,
            "   ⚠️  Cannot read {}: {}",
            skipped.path.display(),
            skipped.reason
        );
    }

    if analysis.total == 0 {
        let _ = writeln!(out, "   ⚠️  No benchmarks found");
        return out;
    }

    let stats = analysis.primary_stats();
    let _ = writeln!(out, "   Total Benchmarks: {}", analysis.total);
    let _ = writeln!(
        out,
        "   {} Wins: {} ({:.1}%)",
        run.subject,
        analysis.subject_wins(),
        analysis.win_rate_percent()
    );
    for (env, wins) in &analysis.wins_by_environment {
        if *env != run.subject && *wins > 0 {
            let _ = writeln!(out, "   {} Wins: {}", env, wins);
        }
    }
    for baseline in &run.baselines {
        let _ = writeln!(
            out,
            "   Avg Speedup vs {}: {:.2}x",
            baseline,
            analysis.avg_speedup_vs(baseline)
        );
    }
    let _ = writeln!(out, "   Min/Max Speedup: {:.2}x / {:.2}x", stats.min, stats.max);
    let _ = writeln!(out, "   Median Speedup: {:.2}x", stats.median);
    out
}

/// Renders the cross-configuration comparison table.
pub fn render_comparison_table(run: &AnalysisRun) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS);

    let mut header = vec![
        "Test Style".to_string(),
        "Total".to_string(),
        format!("{} Wins", run.subject),
    ];
    header.extend(run.baselines.iter().map(|b| format!("Avg vs {}", b)));
    table.set_header(header);

    for r in &run.runs {
        let a = &r.analysis;
        let mut row = vec![
            Cell::new(&r.configuration.name),
            right(a.total.to_string()),
            right(format!("{} ({:.1}%)", a.subject_wins(), a.win_rate_percent())),
        ];
        row.extend(
            run.baselines
                .iter()
                .map(|b| right(format!("{:.2}x", a.avg_speedup_vs(b)))),
        );
        table.add_row(row);
    }

    format!("\n📈 Cross-Style Comparison:\n{}\n", table)
}

fn right(content: String) -> Cell {
    Cell::new(content).set_alignment(CellAlignment::Right)
}

/// Renders average speedups per category and configuration.
pub fn render_category_analysis(run: &AnalysisRun) -> String {
    let mut out = String::from("\n📊 Category Analysis:\n");
    for category in &run.categories {
        let _ = writeln!(out, "\n{}:", category);
        for config_run in &run.runs {
            if let Some(summary) = config_run.category(category) {
                let _ = writeln!(
                    out,
                    "  {:<12}: {:.2}x faster ({})",
                    config_run.configuration.name,
                    summary.primary_avg(),
                    run.subject
                );
            }
        }
    }
    out
}

/// Renders the overall win line.
pub fn render_winner_consistency(run: &AnalysisRun) -> String {
    format!(
        "\n🏆 Winner Consistency Matrix:\n   Overall: {} wins {} out of {} ({:.1}%)\n",
        run.subject,
        run.total_subject_wins(),
        run.total_records(),
        run.overall_win_rate()
    )
}

/// Renders the ranked speedup list.
pub fn render_top_speedups(run: &AnalysisRun, ranked: &[RankedSpeedup]) -> String {
    let mut out = format!(
        "\n🚀 Top {} Speedups ({} vs {}):\n",
        run.top_n,
        run.subject,
        run.primary_baseline()
    );
    if ranked.is_empty() {
        out.push_str("   (none)\n");
    }
    for (i, entry) in ranked.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {:>2}. {:<40} {:<10} {:>8.2}x",
            i + 1,
            entry.name,
            entry.configuration,
            entry.speedup
        );
    }
    out
}

/// Prints the summary of one configuration.
pub fn print_configuration(run: &AnalysisRun, config_run: &ConfigurationRun) {
    println!("{}", render_configuration(run, config_run));
}

/// Prints every cross-configuration section, in report order.
pub fn print_report(run: &AnalysisRun) {
    println!("\n=== Generating Comprehensive Analysis Report ===");
    print!("{}", render_comparison_table(run));
    print!("{}", render_category_analysis(run));
    print!("{}", render_winner_consistency(run));
    print!("{}", render_top_speedups(run, &run.top_speedups()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_run;

    #[test]
    fn test_render_configuration() {
        let run = sample_run();
        let text = render_configuration(&run, &run.runs[0]);
        assert!(text.starts_with("📊 Analyzing Quick benchmark (2 seconds)..."));
        assert!(text.contains("   Total Benchmarks: 3"));
        assert!(text.contains("   B Wins: 2 (66.7%)"));
        assert!(text.contains("   C Wins: 1"));
        assert!(!text.contains("   A Wins"));
        assert!(text.contains("   Avg Speedup vs A: 2.50x"));
        assert!(text.contains("   Min/Max Speedup: 1.25x / 3.75x"));
    }

    #[test]
    fn test_render_empty_configuration() {
        let run = sample_run();
        let text = render_configuration(&run, &run.runs[1]);
        assert!(text.contains("Cannot read"));
        assert!(text.contains("No benchmarks found"));
        assert!(!text.contains("Total Benchmarks"));
    }

    #[test]
    fn test_comparison_table_declared_order() {
        let run = sample_run();
        let table = render_comparison_table(&run);
        let quick = table.find("│ Quick").unwrap();
        let standard = table.find("│ Standard").unwrap();
        assert!(quick < standard);
        assert!(table.contains("Avg vs C"));
        assert!(table.contains("2 (66.7%)"));
        assert!(table.contains("╭"));
    }

    #[test]
    fn test_comparison_table_right_aligns_numbers() {
        let run = sample_run();
        let table = render_comparison_table(&run);
        let quick = table.lines().find(|l| l.contains("Quick")).unwrap();
        let cells: Vec<&str> = quick.split(|c| c == '│' || c == '┆').collect();
        assert!(cells[2].ends_with("3 "));
        assert!(cells[4].ends_with("2.50x "));
    }

    #[test]
    fn test_category_and_winner_sections() {
        let run = sample_run();
        let categories = render_category_analysis(&run);
        assert!(categories.contains("\nCPU-Intensive:\n  Quick       : 1.25x faster (B)"));

        let winner = render_winner_consistency(&run);
        assert!(winner.contains("Overall: B wins 2 out of 3 (66.7%)"));
    }

    #[test]
    fn test_top_speedups_section() {
        let run = sample_run();
        let text = render_top_speedups(&run, &run.top_speedups());
        let first = text.lines().nth(2).unwrap();
        assert!(first.contains("BenchmarkMapOperations1K"));
        assert!(first.ends_with("3.75x"));
    }
}

// Dweve Benchtab - Benchmark Log Tabulation
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

//! Command implementations: scan a directory and print its table.

use crate::error::CliError;
use benchtab_core::render::{benchmark_grid, write_fixed};
use benchtab_core::{
    ScanConfig, ScanOutcome, ScanPlan, ScanReport, Scanner, DEFAULT_MAX_LOG_SIZE,
};
use clap::ValueEnum;
use colored::Colorize;
use std::io::{self, Write};
use std::path::Path;

/// Environment variable overriding the maximum log size in bytes.
pub const MAX_LOG_SIZE_ENV: &str = "BENCHTAB_MAX_LOG_SIZE";

/// Table layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Layout {
    /// Fixed-width grid without header, one line per benchmark
    Fixed,
    /// Header line and columns sized to their content
    Aligned,
}

/// Get the maximum log size from environment or use default.
///
/// Falls back to [`DEFAULT_MAX_LOG_SIZE`] if the variable is not set or is
/// not a valid number.
pub fn max_log_size() -> u64 {
    std::env::var(MAX_LOG_SIZE_ENV)
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_LOG_SIZE)
}

/// Validate `config` and scan `dir`.
///
/// Returns the scanner alongside the outcome so callers can reuse the
/// validated plan for rendering.
///
/// # Errors
///
/// Returns `Err` for malformed configuration, an unusable file pattern, or
/// a directory that cannot be listed. Per-artifact problems are reported in
/// the outcome instead.
pub fn scan(dir: &Path, config: &ScanConfig) -> Result<(Scanner, ScanOutcome), CliError> {
    let scanner = Scanner::new(config.plan()?)?;
    let outcome = scanner.scan(dir)?;
    Ok((scanner, outcome))
}

/// Write the scanned table to `out` in the requested layout.
pub fn write_table<W: Write>(
    outcome: &ScanOutcome,
    plan: &ScanPlan,
    layout: Layout,
    out: &mut W,
) -> Result<(), CliError> {
    let written = match layout {
        Layout::Fixed => write_fixed(&outcome.table, out),
        Layout::Aligned => benchmark_grid(&outcome.table, &plan.columns, &plan.locals).write_to(out),
    };
    written.map_err(CliError::output)?;
    out.flush().map_err(CliError::output)
}

/// Scan `dir` and print the table to stdout.
///
/// # Examples
///
/// ```no_run
/// use benchtab_cli::commands::{tabulate, Layout};
/// use benchtab_core::ScanConfig;
/// use std::path::Path;
///
/// # fn main() -> Result<(), benchtab_cli::error::CliError> {
/// tabulate(Path::new("results"), &ScanConfig::default(), Layout::Fixed, true)?;
/// # Ok(())
/// # }
/// ```
pub fn tabulate(
    dir: &Path,
    config: &ScanConfig,
    layout: Layout,
    summary: bool,
) -> Result<(), CliError> {
    let (scanner, outcome) = scan(dir, config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_table(&outcome, scanner.plan(), layout, &mut out)?;

    if summary {
        print_summary(dir, &outcome.report, outcome.table.len());
    }
    Ok(())
}

/// Print the scan summary to stderr.
pub fn print_summary(dir: &Path, report: &ScanReport, benchmarks: usize) {
    let skipped = report.issue_count().to_string();
    let skipped = if report.has_issues() {
        skipped.red().bold()
    } else {
        skipped.bright_white()
    };

    eprintln!();
    eprintln!("{}", "═".repeat(60).bright_blue());
    eprintln!(
        "{} {}",
        "Benchtab Scan:".bright_blue().bold(),
        dir.display().to_string().bright_white()
    );
    eprintln!("{}", "═".repeat(60).bright_blue());
    eprintln!(
        "  {} {}",
        "Entries:".bright_cyan(),
        report.visited.to_string().bright_white()
    );
    eprintln!(
        "  {} {}",
        "Artifacts:".bright_cyan(),
        report.matched.to_string().bright_white()
    );
    eprintln!(
        "  {} {}",
        "Aggregated:".green().bold(),
        report.aggregated.to_string().bright_white()
    );
    eprintln!("  {} {}", "Skipped:".red().bold(), skipped);
    eprintln!(
        "  {} {}",
        "Benchmarks:".bright_cyan(),
        benchmarks.to_string().bright_white()
    );

    for issue in &report.issues {
        eprintln!(
            "  {} {} - {}",
            "✗".red().bold(),
            issue.path.display(),
            issue.error
        );
    }
    eprintln!("{}", "═".repeat(60).bright_blue());
}

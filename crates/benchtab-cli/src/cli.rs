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

//! Command-line argument definitions.

use crate::commands::{self, Layout};
use crate::error::CliError;
use benchtab_core::{ScanConfig, DEFAULT_GLOBALS, DEFAULT_LOCALS, DEFAULT_PATTERN};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Benchtab - aggregate benchmark logs into a text table
///
/// Scans a directory for artifact files whose names match `--pattern`,
/// reads the sibling `.log` file of each one and prints one table row per
/// benchmark.
///
/// # Examples
///
/// ```bash
/// # Default layout: `<name>.real` artifacts, `Lines` as global property
/// benchtab --path results
///
/// # Two columns keyed by the second capture group
/// benchtab --path results --pattern '([^_]*)_(\d+)\.real' --columns '00=orig,01=opt'
///
/// # Header line and content-sized columns
/// benchtab --path results --layout aligned --summary
/// ```
#[derive(Debug, Parser)]
#[command(name = "benchtab")]
#[command(author, version, about = "Benchtab - aggregate benchmark logs into a text table", long_about = None)]
pub struct Cli {
    /// Directory containing the benchmark artifacts
    #[arg(short, long, value_name = "DIR")]
    pub path: PathBuf,

    /// File name pattern; group 1 is the benchmark name, optional group 2 the column
    #[arg(long, default_value = DEFAULT_PATTERN)]
    pub pattern: String,

    /// Columns as comma-separated `id=label` pairs
    #[arg(short, long, default_value = "")]
    pub columns: String,

    /// Global properties as comma-separated `name:type` pairs (type `u` or `f`)
    #[arg(short, long, default_value = DEFAULT_GLOBALS)]
    pub global: String,

    /// Local properties, one unsigned and one float entry
    #[arg(short, long, default_value = DEFAULT_LOCALS)]
    pub local: String,

    /// Table layout
    #[arg(long, value_enum, default_value_t = Layout::Fixed)]
    pub layout: Layout,

    /// Print a scan summary to stderr after the table
    #[arg(long)]
    pub summary: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Scan configuration described by the arguments.
    pub fn scan_config(&self) -> ScanConfig {
        ScanConfig {
            pattern: self.pattern.clone(),
            columns: self.columns.clone(),
            globals: self.global.clone(),
            locals: self.local.clone(),
            max_log_size: commands::max_log_size(),
        }
    }

    /// Run the scan and print the table.
    pub fn execute(&self) -> Result<(), CliError> {
        commands::tabulate(&self.path, &self.scan_config(), self.layout, self.summary)
    }
}

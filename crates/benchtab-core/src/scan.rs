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

//! Directory scanning and log aggregation.
//!
//! The [`Scanner`] walks one directory, picks the entries whose file name
//! matches the artifact pattern, reads each artifact's sibling `.log` file
//! and folds its `key: value` lines into the benchmark [`Table`].
//!
//! # Failure policy
//!
//! - Configuration and pattern problems are rejected when the plan is
//!   built, before scanning starts.
//! - An undeclared column or an unreadable log skips that artifact.
//! - A value that does not parse stops reading that log. Fields already
//!   stored in the row are kept, the column metrics are not written.
//!
//! Every skipped or partially read artifact is listed in the [`ScanReport`].
//!
//! # Examples
//!
//! ```no_run
//! use benchtab_core::{ScanConfig, Scanner};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), benchtab_core::ReportError> {
//! let scanner = Scanner::new(ScanConfig::default().plan()?)?;
//! let outcome = scanner.scan(Path::new("results"))?;
//! println!("{} benchmarks", outcome.table.len());
//! # Ok(())
//! # }
//! ```

use crate::config::ScanPlan;
use crate::error::{ReportError, ReportResult};
use crate::pattern::FileMatch;
use crate::rules::{Rule, RuleSet};
use crate::spec::{find_column, find_property, PropertySpec, GATES_KEY, RUNTIME_KEY};
use crate::table::Table;
use crate::value::{parse_float, parse_uint, LocalEntry, TypedValue};
use regex::{Captures, Regex};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Pattern of a `key: value` log line.
pub const KEY_VALUE_PATTERN: &str = r"^([^:]*): *(.*)$";

/// Extension of the companion log next to each artifact.
pub const LOG_EXTENSION: &str = "log";

/// An artifact that was skipped or only partially read.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanIssue {
    /// The artifact file.
    pub path: PathBuf,
    pub error: ReportError,
}

/// Counters and issues collected during a scan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanReport {
    /// Directory entries looked at.
    pub visited: usize,
    /// Entries whose name matched the artifact pattern.
    pub matched: usize,
    /// Artifacts whose log was read completely.
    pub aggregated: usize,
    pub issues: Vec<ScanIssue>,
}

impl ScanReport {
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }
}

/// The table built by a scan, with its report.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub table: Table,
    pub report: ScanReport,
}

/// State a log's rules write into.
struct LogTarget<'a> {
    specs: &'a [PropertySpec],
    globals: &'a mut [TypedValue],
    local: LocalEntry,
}

fn record_key_value(caps: &Captures<'_>, target: &mut LogTarget<'_>) -> ReportResult<()> {
    let key = &caps[1];
    let value = &caps[2];

    if let Some(index) = find_property(target.specs, key) {
        target.globals[index] = TypedValue::coerce(target.specs[index].ty, value)
            .map_err(|e| ReportError::new(e.kind, format!("{}: {}", key, e.message)))?;
    }

    if key == RUNTIME_KEY {
        target.local.duration = parse_float(value)
            .map_err(|e| ReportError::new(e.kind, format!("{}: {}", key, e.message)))?;
    } else if key == GATES_KEY {
        target.local.count = parse_uint(value)
            .map_err(|e| ReportError::new(e.kind, format!("{}: {}", key, e.message)))?;
    }

    Ok(())
}

/// Builds benchmark tables from a directory of artifacts.
#[derive(Debug, Clone)]
pub struct Scanner {
    plan: ScanPlan,
    key_value: Regex,
}

impl Scanner {
    /// Create a scanner for a validated plan.
    ///
    /// # Errors
    ///
    /// Returns a pattern error if the log line pattern fails to compile.
    pub fn new(plan: ScanPlan) -> ReportResult<Self> {
        let key_value = Regex::new(KEY_VALUE_PATTERN).map_err(|e| {
            ReportError::pattern(format!("invalid log pattern '{}': {}", KEY_VALUE_PATTERN, e))
        })?;
        Ok(Self { plan, key_value })
    }

    pub fn plan(&self) -> &ScanPlan {
        &self.plan
    }

    /// Scan `dir` and build the benchmark table.
    ///
    /// Entries are visited in file-name order so that row order and the
    /// winner of colliding `(name, column)` artifacts are reproducible.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if `dir` cannot be listed. Problems with single
    /// artifacts never fail the scan; they are recorded in the report.
    pub fn scan(&self, dir: &Path) -> ReportResult<ScanOutcome> {
        let entries = fs::read_dir(dir).map_err(|e| ReportError::io(dir, &e))?;

        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry.path()),
                Err(e) => {
                    warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                    None
                }
            })
            .collect();
        paths.sort();

        let mut table = Table::new(self.plan.globals.clone(), self.plan.columns.len());
        let mut report = ScanReport::default();

        for path in paths {
            report.visited += 1;

            if path.is_dir() {
                continue;
            }
            let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
                continue;
            };
            let Some(file_match) = self.plan.pattern.match_name(file_name) else {
                continue;
            };
            report.matched += 1;

            match self.aggregate(&path, file_match, &mut table) {
                Ok(()) => report.aggregated += 1,
                Err(error) => {
                    warn!("Skipping {}: {}", path.display(), error);
                    report.issues.push(ScanIssue { path, error });
                }
            }
        }

        info!(
            "Scanned {}: {} entries, {} artifacts, {} aggregated, {} issues, {} benchmarks",
            dir.display(),
            report.visited,
            report.matched,
            report.aggregated,
            report.issue_count(),
            table.len()
        );

        Ok(ScanOutcome { table, report })
    }

    /// Fold one artifact's log into the table.
    fn aggregate(&self, path: &Path, file_match: FileMatch<'_>, table: &mut Table) -> ReportResult<()> {
        let column = match file_match.column {
            Some(label) => find_column(&self.plan.columns, label).ok_or_else(|| {
                ReportError::lookup(format!(
                    "column '{}' matches no declared column id or label",
                    label
                ))
            })?,
            None => 0,
        };
        debug!(
            "Matched {} as benchmark '{}' column {}",
            path.display(),
            file_match.name,
            column
        );

        let log_path = path.with_extension(LOG_EXTENSION);
        let content = read_log(&log_path, self.plan.max_log_size)?;

        let row = table.row_mut(file_match.name);
        let mut target = LogTarget {
            specs: &self.plan.globals,
            globals: &mut row.globals,
            local: LocalEntry::default(),
        };

        let matched = self
            .rules()
            .apply(content.lines(), &mut target)
            .map_err(|e| {
                ReportError::new(e.kind, format!("{}: {}", log_path.display(), e.message))
            })?;
        let local = target.local;
        row.locals[column] = local;

        debug!("Read {} key/value lines from {}", matched, log_path.display());
        Ok(())
    }

    fn rules<'a>(&self) -> RuleSet<LogTarget<'a>> {
        RuleSet::new().with_rule(Rule::from_regex(self.key_value.clone(), record_key_value))
    }
}

/// Read a companion log, refusing files above `max_size` bytes.
fn read_log(path: &Path, max_size: u64) -> ReportResult<String> {
    let metadata = fs::metadata(path).map_err(|e| {
        ReportError::lookup(format!("cannot access log '{}': {}", path.display(), e))
    })?;

    if metadata.len() > max_size {
        return Err(ReportError::lookup(format!(
            "log '{}' is too large ({} bytes, maximum {} bytes)",
            path.display(),
            metadata.len(),
            max_size
        )));
    }

    fs::read_to_string(path).map_err(|e| {
        ReportError::lookup(format!("cannot read log '{}': {}", path.display(), e))
    })
}

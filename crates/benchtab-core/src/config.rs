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

//! Scan configuration.
//!
//! A [`ScanConfig`] holds the raw configuration strings as a front end
//! receives them. [`ScanConfig::plan`] validates all of them up front and
//! produces a [`ScanPlan`], so malformed configuration is reported before
//! any file is touched.

use crate::error::ReportResult;
use crate::pattern::FilePattern;
use crate::spec::{
    parse_column_specs, parse_local_spec, parse_property_specs, ColumnSpec, LocalSpec,
    PropertySpec,
};

/// Default artifact pattern: `<name>.real`.
pub const DEFAULT_PATTERN: &str = r"([^\.]*)\.real";
/// Default global properties.
pub const DEFAULT_GLOBALS: &str = "Lines:u";
/// Default local properties.
pub const DEFAULT_LOCALS: &str = "Gates:u,Runtime:f";
/// Default maximum size of a companion log (100 MB).
pub const DEFAULT_MAX_LOG_SIZE: u64 = 100 * 1024 * 1024;

/// Raw scan configuration.
///
/// # Examples
///
/// ```
/// use benchtab_core::ScanConfig;
///
/// let config = ScanConfig {
///     columns: "00=orig,01=opt".to_string(),
///     pattern: r"([^_]*)_(\d+)\.real".to_string(),
///     ..Default::default()
/// };
/// let plan = config.plan().unwrap();
/// assert_eq!(plan.columns.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Artifact file-name pattern with one or two capture groups.
    pub pattern: String,
    /// Column spec, `id=label` pairs.
    pub columns: String,
    /// Global property spec, `name:type` pairs.
    pub globals: String,
    /// Local property spec: one unsigned and one float entry.
    pub locals: String,
    /// Companion logs larger than this are skipped.
    pub max_log_size: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.to_string(),
            columns: String::new(),
            globals: DEFAULT_GLOBALS.to_string(),
            locals: DEFAULT_LOCALS.to_string(),
            max_log_size: DEFAULT_MAX_LOG_SIZE,
        }
    }
}

impl ScanConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns a format error for a malformed spec string and a pattern
    /// error for an unusable file pattern.
    pub fn plan(&self) -> ReportResult<ScanPlan> {
        Ok(ScanPlan {
            columns: parse_column_specs(&self.columns)?,
            globals: parse_property_specs(&self.globals)?,
            locals: parse_local_spec(&self.locals)?,
            pattern: FilePattern::new(&self.pattern)?,
            max_log_size: self.max_log_size,
        })
    }
}

/// Validated scan configuration.
#[derive(Debug, Clone)]
pub struct ScanPlan {
    pub pattern: FilePattern,
    pub columns: Vec<ColumnSpec>,
    pub globals: Vec<PropertySpec>,
    pub locals: LocalSpec,
    pub max_log_size: u64,
}

impl ScanPlan {
    /// Number of local entries per row.
    pub fn column_count(&self) -> usize {
        self.columns.len().max(1)
    }
}

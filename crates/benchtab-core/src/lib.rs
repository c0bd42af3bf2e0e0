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

//! Benchmark log aggregation and tabular reporting.
//!
//! This crate turns a directory of benchmark artifacts into a table. Each
//! artifact's file name carries a benchmark name and optionally a column
//! label; its sibling `.log` file carries `key: value` lines with the
//! metrics.
//!
//! # Pipeline
//!
//! 1. [`ScanConfig::plan`] validates the configuration strings: the file
//!    pattern, the column spec and the global and local property specs.
//! 2. [`Scanner::scan`] walks the directory and fills a [`Table`] through
//!    the first-match [`rules`] engine.
//! 3. [`render::write_fixed`] or [`render::benchmark_grid`] print it.
//!
//! # Examples
//!
//! ```no_run
//! use benchtab_core::{render, ScanConfig, Scanner};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ScanConfig {
//!     pattern: r"([^_]*)_(\d+)\.real".to_string(),
//!     columns: "00=orig,01=opt".to_string(),
//!     globals: "Lines:u".to_string(),
//!     ..Default::default()
//! };
//!
//! let scanner = Scanner::new(config.plan()?)?;
//! let outcome = scanner.scan(Path::new("results"))?;
//! render::write_fixed(&outcome.table, &mut std::io::stdout())?;
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod pattern;
pub mod render;
pub mod rules;
mod scan;
mod spec;
mod table;
mod value;

pub use config::{
    ScanConfig, ScanPlan, DEFAULT_GLOBALS, DEFAULT_LOCALS, DEFAULT_MAX_LOG_SIZE, DEFAULT_PATTERN,
};
pub use error::{ReportError, ReportErrorKind, ReportResult};
pub use pattern::{FileMatch, FilePattern};
pub use render::{AlignedTable, TableRow};
pub use scan::{ScanIssue, ScanOutcome, ScanReport, Scanner, KEY_VALUE_PATTERN, LOG_EXTENSION};
pub use spec::{
    find_column, find_property, parse_column_specs, parse_local_spec, parse_property_specs,
    ColumnSpec, LocalSpec, PropertySpec, GATES_KEY, RUNTIME_KEY,
};
pub use table::{BenchmarkRow, Table};
pub use value::{LocalEntry, PropertyType, TypedValue};

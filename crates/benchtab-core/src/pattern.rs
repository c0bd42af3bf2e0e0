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

//! File-name patterns that identify benchmark artifacts.

use crate::error::{ReportError, ReportResult};
use regex::Regex;

/// The parts of a file name captured by a [`FilePattern`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileMatch<'a> {
    /// Benchmark name (first capture group).
    pub name: &'a str,
    /// Column label (second capture group), when the pattern has one and it
    /// took part in the match.
    pub column: Option<&'a str>,
}

/// A compiled artifact pattern with one or two capture groups.
///
/// The pattern must match the whole file name. Group 1 is the benchmark
/// name, the optional group 2 the column label.
///
/// # Examples
///
/// ```
/// use benchtab_core::FilePattern;
///
/// let pattern = FilePattern::new(r"([^.]*)\.real").unwrap();
/// let m = pattern.match_name("adder.real").unwrap();
/// assert_eq!(m.name, "adder");
/// assert_eq!(m.column, None);
/// assert!(pattern.match_name("adder.real.bak").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct FilePattern {
    source: String,
    regex: Regex,
    has_column: bool,
}

impl FilePattern {
    /// Compile an artifact pattern.
    ///
    /// # Errors
    ///
    /// Returns a pattern error if the syntax is invalid or the pattern does
    /// not have exactly one or two capture groups.
    pub fn new(pattern: &str) -> ReportResult<Self> {
        let regex = Regex::new(&format!("^(?:{})$", pattern)).map_err(|e| {
            ReportError::pattern(format!("invalid file pattern '{}': {}", pattern, e))
        })?;

        let has_column = match regex.captures_len() - 1 {
            1 => false,
            2 => true,
            groups => {
                return Err(ReportError::pattern(format!(
                    "file pattern '{}' has {} capture groups, expected 1 (name) or 2 (name, column)",
                    pattern, groups
                )))
            }
        };

        Ok(Self {
            source: pattern.to_string(),
            regex,
            has_column,
        })
    }

    /// Match a file name, returning the captured name and column label.
    pub fn match_name<'a>(&self, file_name: &'a str) -> Option<FileMatch<'a>> {
        let caps = self.regex.captures(file_name)?;
        let name = caps.get(1)?.as_str();
        let column = if self.has_column {
            caps.get(2).map(|m| m.as_str())
        } else {
            None
        };
        Some(FileMatch { name, column })
    }

    /// Whether the pattern declares a column capture group.
    pub fn has_column(&self) -> bool {
        self.has_column
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

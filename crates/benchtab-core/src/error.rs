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

//! Error types for benchmark table construction.

use std::fmt;
use std::path::Path;
use thiserror::Error;

/// The kind of error that occurred while building a benchmark table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportErrorKind {
    /// Malformed configuration string (property or column spec).
    Format,
    /// Filename pattern with invalid syntax or wrong capture-group count.
    Pattern,
    /// Unknown column label, or a companion log that cannot be read.
    Lookup,
    /// Log value not parseable as the declared numeric type.
    Conversion,
    /// Scan root missing or not a directory.
    Io,
}

impl fmt::Display for ReportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format => write!(f, "FormatError"),
            Self::Pattern => write!(f, "PatternError"),
            Self::Lookup => write!(f, "LookupError"),
            Self::Conversion => write!(f, "ConversionError"),
            Self::Io => write!(f, "IOError"),
        }
    }
}

/// An error raised while parsing configuration, scanning or reading logs.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{kind}: {message}")]
pub struct ReportError {
    /// The kind of error.
    pub kind: ReportErrorKind,
    /// Human-readable error message.
    pub message: String,
}

impl ReportError {
    /// Create a new error.
    pub fn new(kind: ReportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn format(message: impl Into<String>) -> Self {
        Self::new(ReportErrorKind::Format, message)
    }

    pub fn pattern(message: impl Into<String>) -> Self {
        Self::new(ReportErrorKind::Pattern, message)
    }

    pub fn lookup(message: impl Into<String>) -> Self {
        Self::new(ReportErrorKind::Lookup, message)
    }

    pub fn conversion(message: impl Into<String>) -> Self {
        Self::new(ReportErrorKind::Conversion, message)
    }

    pub fn io(path: &Path, source: &std::io::Error) -> Self {
        Self::new(
            ReportErrorKind::Io,
            format!("'{}': {}", path.display(), source),
        )
    }

    /// Whether this error aborts a whole run.
    ///
    /// Lookup and conversion failures only affect the file being read; the
    /// scanner records them and moves on to the next entry.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self.kind,
            ReportErrorKind::Format | ReportErrorKind::Pattern | ReportErrorKind::Io
        )
    }
}

/// Result type for benchmark table operations.
pub type ReportResult<T> = Result<T, ReportError>;

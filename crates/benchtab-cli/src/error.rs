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

//! Structured error types for the Benchtab CLI.

use benchtab_core::ReportError;
use std::io;
use thiserror::Error;

/// The main error type for Benchtab CLI operations.
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// Configuration, pattern or scan failure from the core engine.
    #[error(transparent)]
    Report(#[from] ReportError),

    /// Writing the table to stdout failed.
    #[error("Failed to write output: {message}")]
    Output {
        /// The error message
        message: String,
    },
}

impl CliError {
    /// Create an output error from an I/O failure.
    pub fn output(source: io::Error) -> Self {
        Self::Output {
            message: source.to_string(),
        }
    }
}

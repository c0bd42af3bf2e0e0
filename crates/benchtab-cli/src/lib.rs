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

//! Benchtab command-line front end.
//!
//! Parses options into a [`benchtab_core::ScanConfig`], scans the artifact
//! directory and prints the benchmark table to stdout. Logs and the
//! optional scan summary go to stderr.
//!
//! # Modules
//!
//! - [`cli`]: argument definitions
//! - [`commands`]: scan, render and summary
//! - [`error`]: the CLI error type
//! - [`logging`]: `tracing` subscriber setup

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;

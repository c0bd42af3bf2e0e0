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

//! End-to-end scans over temporary artifact directories.

use benchtab_core::{
    render, LocalEntry, ReportErrorKind, ScanConfig, ScanOutcome, Scanner, TypedValue,
};
use std::fs;
use tempfile::TempDir;

// ===== Test Helpers =====

/// Create an artifact and, when `log` is given, its companion log.
fn artifact(dir: &TempDir, file_name: &str, log: Option<&str>) {
    let path = dir.path().join(file_name);
    fs::write(&path, "").expect("Failed to write artifact");
    if let Some(content) = log {
        fs::write(path.with_extension("log"), content).expect("Failed to write log");
    }
}

fn scan(dir: &TempDir, config: ScanConfig) -> ScanOutcome {
    let plan = config.plan().expect("valid configuration");
    Scanner::new(plan)
        .expect("scanner")
        .scan(dir.path())
        .expect("scan")
}

fn column_config() -> ScanConfig {
    ScanConfig {
        pattern: r"([^_]*)_(\d+)\.real".to_string(),
        columns: "00=orig,01=opt".to_string(),
        ..Default::default()
    }
}

// ===== Scenarios =====

#[test]
fn test_gates_runtime_and_global_in_one_log() {
    let dir = TempDir::new().unwrap();
    artifact(&dir, "adder.real", Some("Gates: 42\nRuntime: 3.5\nLines: 100\n"));

    let outcome = scan(&dir, ScanConfig::default());

    assert_eq!(outcome.table.len(), 1);
    let row = &outcome.table.rows()[0];
    assert_eq!(row.name, "adder");
    assert_eq!(row.globals, vec![TypedValue::UInt(100)]);
    assert_eq!(row.locals, vec![LocalEntry::new(42, 3.5)]);
}

#[test]
fn test_columns_are_populated_independently() {
    let dir = TempDir::new().unwrap();
    artifact(&dir, "adder_00.real", Some("Gates: 10\nRuntime: 1.0\nLines: 4\n"));
    artifact(&dir, "adder_01.real", Some("Gates: 8\nRuntime: 2.5\nLines: 4\n"));

    let outcome = scan(&dir, column_config());

    assert_eq!(outcome.table.len(), 1);
    let row = outcome.table.get("adder").unwrap();
    assert_eq!(
        row.locals,
        vec![LocalEntry::new(10, 1.0), LocalEntry::new(8, 2.5)]
    );
    assert_eq!(outcome.report.aggregated, 2);
}

#[test]
fn test_unset_column_stays_zero() {
    let dir = TempDir::new().unwrap();
    artifact(&dir, "adder_01.real", Some("Gates: 8\nRuntime: 2.5\n"));

    let outcome = scan(&dir, column_config());

    let row = outcome.table.get("adder").unwrap();
    assert_eq!(row.locals, vec![LocalEntry::default(), LocalEntry::new(8, 2.5)]);
}

#[test]
fn test_unrelated_keys_are_ignored() {
    let dir = TempDir::new().unwrap();
    artifact(
        &dir,
        "adder.real",
        Some("Unrelated: foo\nno separator here\nLines: 7\n"),
    );

    let outcome = scan(&dir, ScanConfig::default());

    let row = outcome.table.get("adder").unwrap();
    assert_eq!(row.globals, vec![TypedValue::UInt(7)]);
    assert_eq!(row.locals, vec![LocalEntry::default()]);
    assert!(!outcome.report.has_issues());
}

#[test]
fn test_runtime_feeds_global_and_local() {
    let dir = TempDir::new().unwrap();
    artifact(&dir, "adder.real", Some("Runtime: 0.75\nLines: 3\n"));

    let config = ScanConfig {
        globals: "Lines:u,Runtime:f".to_string(),
        ..Default::default()
    };
    let outcome = scan(&dir, config);

    let row = outcome.table.get("adder").unwrap();
    assert_eq!(row.globals, vec![TypedValue::UInt(3), TypedValue::Float(0.75)]);
    assert_eq!(row.locals[0].duration, 0.75);
}

#[test]
fn test_crlf_logs() {
    let dir = TempDir::new().unwrap();
    artifact(&dir, "adder.real", Some("Gates: 5\r\nRuntime: 1.5\r\nLines: 2\r\n"));

    let outcome = scan(&dir, ScanConfig::default());

    let row = outcome.table.get("adder").unwrap();
    assert_eq!(row.globals, vec![TypedValue::UInt(2)]);
    assert_eq!(row.locals, vec![LocalEntry::new(5, 1.5)]);
}

// ===== Failure Policy =====

#[test]
fn test_undeclared_column_is_skipped() {
    let dir = TempDir::new().unwrap();
    artifact(&dir, "adder_02.real", Some("Gates: 1\n"));
    artifact(&dir, "mult_00.real", Some("Gates: 2\n"));

    let outcome = scan(&dir, column_config());

    assert!(outcome.table.get("adder").is_none());
    assert_eq!(outcome.table.get("mult").unwrap().locals[0].count, 2);
    assert_eq!(outcome.report.issue_count(), 1);
    let issue = &outcome.report.issues[0];
    assert!(issue.path.ends_with("adder_02.real"));
    assert_eq!(issue.error.kind, ReportErrorKind::Lookup);
}

#[test]
fn test_column_ids_win_over_labels() {
    let dir = TempDir::new().unwrap();
    artifact(&dir, "adder_b.real", Some("Gates: 5\n"));
    artifact(&dir, "adder_c.real", Some("Gates: 9\n"));

    let config = ScanConfig {
        pattern: r"([^_]*)_([a-z])\.real".to_string(),
        columns: "a=b,b=c".to_string(),
        ..Default::default()
    };
    let outcome = scan(&dir, config);

    // `b` is the id of column 1 and the label of column 0; `c` is only a label.
    let row = outcome.table.get("adder").unwrap();
    assert_eq!(row.locals[0].count, 0);
    assert_eq!(row.locals[1].count, 9);
    assert_eq!(outcome.report.aggregated, 2);
}

#[test]
fn test_missing_log_skips_only_that_artifact() {
    let dir = TempDir::new().unwrap();
    artifact(&dir, "adder.real", None);
    artifact(&dir, "mult.real", Some("Gates: 3\n"));

    let outcome = scan(&dir, ScanConfig::default());

    assert_eq!(outcome.table.len(), 1);
    assert!(outcome.table.get("mult").is_some());
    assert_eq!(outcome.report.matched, 2);
    assert_eq!(outcome.report.aggregated, 1);
    assert_eq!(outcome.report.issues[0].error.kind, ReportErrorKind::Lookup);
}

#[test]
fn test_conversion_error_keeps_partial_row() {
    let dir = TempDir::new().unwrap();
    artifact(
        &dir,
        "adder.real",
        Some("Lines: 100\nGates: many\nRuntime: 2.0\n"),
    );
    artifact(&dir, "mult.real", Some("Lines: 5\nGates: 9\n"));

    let outcome = scan(&dir, ScanConfig::default());

    let adder = outcome.table.get("adder").unwrap();
    assert_eq!(adder.globals, vec![TypedValue::UInt(100)]);
    assert_eq!(adder.locals, vec![LocalEntry::default()]);

    let mult = outcome.table.get("mult").unwrap();
    assert_eq!(mult.locals[0].count, 9);

    assert_eq!(outcome.report.issue_count(), 1);
    let error = &outcome.report.issues[0].error;
    assert_eq!(error.kind, ReportErrorKind::Conversion);
    assert!(error.message.contains("line 2"));
    assert!(error.message.contains("Gates"));
}

#[test]
fn test_bad_pattern_fails_before_scanning() {
    let config = ScanConfig {
        pattern: "([^.]*\\.real".to_string(),
        ..Default::default()
    };
    let err = config.plan().unwrap_err();
    assert_eq!(err.kind, ReportErrorKind::Pattern);
    assert!(err.is_fatal());
}

// ===== Traversal =====

#[test]
fn test_non_matching_entries_and_directories_are_ignored() {
    let dir = TempDir::new().unwrap();
    artifact(&dir, "adder.real", Some("Gates: 1\n"));
    fs::write(dir.path().join("notes.txt"), "Gates: 99\n").unwrap();
    fs::create_dir(dir.path().join("nested.real")).unwrap();

    let outcome = scan(&dir, ScanConfig::default());

    assert_eq!(outcome.table.len(), 1);
    assert_eq!(outcome.report.matched, 1);
    assert!(!outcome.report.has_issues());
}

#[test]
fn test_rows_follow_file_name_order() {
    let dir = TempDir::new().unwrap();
    for name in ["mult", "adder", "hwb4"] {
        artifact(&dir, &format!("{}.real", name), Some("Gates: 1\n"));
    }

    let outcome = scan(&dir, ScanConfig::default());

    let names: Vec<&str> = outcome.table.iter().map(|row| row.name.as_str()).collect();
    assert_eq!(names, vec!["adder", "hwb4", "mult"]);
}

#[test]
fn test_colliding_artifacts_last_write_wins() {
    let dir = TempDir::new().unwrap();
    artifact(&dir, "adder.real", Some("Gates: 1\nRuntime: 1.0\n"));
    artifact(&dir, "adder_rerun.real", Some("Gates: 2\nRuntime: 2.0\n"));

    let config = ScanConfig {
        pattern: r"([^_.]*)(?:_[a-z]+)?\.real".to_string(),
        ..Default::default()
    };
    let outcome = scan(&dir, config);

    assert_eq!(outcome.table.len(), 1);
    assert_eq!(
        outcome.table.get("adder").unwrap().locals,
        vec![LocalEntry::new(2, 2.0)]
    );
}

#[test]
fn test_rescan_is_identical() {
    let dir = TempDir::new().unwrap();
    artifact(&dir, "adder_00.real", Some("Gates: 10\nRuntime: 1.0\nLines: 4\n"));
    artifact(&dir, "adder_01.real", Some("Gates: 8\nRuntime: 2.5\nLines: 4\n"));
    artifact(&dir, "mult_00.real", Some("Gates: 3\nRuntime: 0.5\nLines: 6\n"));

    let first = scan(&dir, column_config());
    let second = scan(&dir, column_config());

    assert_eq!(first.table, second.table);
    assert_eq!(
        render::render_fixed(&first.table),
        render::render_fixed(&second.table)
    );
}

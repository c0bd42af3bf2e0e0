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

//! Benchmark rows and the insertion-ordered table that accumulates them.

use crate::spec::PropertySpec;
use crate::value::{LocalEntry, TypedValue};
use std::collections::HashMap;

/// Results collected for one benchmark.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BenchmarkRow {
    /// Benchmark name, unique within a table.
    pub name: String,
    /// One value per declared global property, in declaration order.
    pub globals: Vec<TypedValue>,
    /// One entry per column; a single entry when no columns are declared.
    pub locals: Vec<LocalEntry>,
}

impl BenchmarkRow {
    /// Create a zeroed row sized for the given globals and column count.
    pub fn new(name: impl Into<String>, globals: &[PropertySpec], columns: usize) -> Self {
        Self {
            name: name.into(),
            globals: globals.iter().map(|spec| TypedValue::zero(spec.ty)).collect(),
            locals: vec![LocalEntry::default(); columns.max(1)],
        }
    }
}

/// Benchmark rows in first-seen order.
///
/// Rows are looked up by name through an index map, so find-or-create stays
/// constant time for large suites.
#[derive(Debug, Clone, Default)]
pub struct Table {
    rows: Vec<BenchmarkRow>,
    index: HashMap<String, usize>,
    globals: Vec<PropertySpec>,
    columns: usize,
}

impl Table {
    /// Create an empty table whose rows carry `globals` and `columns` columns.
    pub fn new(globals: Vec<PropertySpec>, columns: usize) -> Self {
        Self {
            rows: Vec::new(),
            index: HashMap::new(),
            globals,
            columns,
        }
    }

    /// Return the row for `name`, creating a zeroed one on first use.
    pub fn row_mut(&mut self, name: &str) -> &mut BenchmarkRow {
        let position = match self.index.get(name) {
            Some(&position) => position,
            None => {
                let position = self.rows.len();
                self.rows
                    .push(BenchmarkRow::new(name, &self.globals, self.columns));
                self.index.insert(name.to_string(), position);
                position
            }
        };
        &mut self.rows[position]
    }

    pub fn get(&self, name: &str) -> Option<&BenchmarkRow> {
        self.index.get(name).map(|&position| &self.rows[position])
    }

    pub fn rows(&self) -> &[BenchmarkRow] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BenchmarkRow> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Declared global properties.
    pub fn globals(&self) -> &[PropertySpec] {
        &self.globals
    }

    /// Number of local entries in every row (at least one).
    pub fn column_count(&self) -> usize {
        self.columns.max(1)
    }

    pub fn into_rows(self) -> Vec<BenchmarkRow> {
        self.rows
    }
}

impl PartialEq for Table {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.globals == other.globals && self.columns == other.columns
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a BenchmarkRow;
    type IntoIter = std::slice::Iter<'a, BenchmarkRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::PropertyType;

    fn globals() -> Vec<PropertySpec> {
        vec![
            PropertySpec::new("Lines", PropertyType::UInt),
            PropertySpec::new("Runtime", PropertyType::Float),
        ]
    }

    #[test]
    fn test_new_row_is_zeroed_and_sized() {
        let row = BenchmarkRow::new("adder", &globals(), 3);
        assert_eq!(row.name, "adder");
        assert_eq!(row.globals, vec![TypedValue::UInt(0), TypedValue::Float(0.0)]);
        assert_eq!(row.locals, vec![LocalEntry::default(); 3]);
    }

    #[test]
    fn test_row_without_columns_has_one_local() {
        let row = BenchmarkRow::new("adder", &[], 0);
        assert!(row.globals.is_empty());
        assert_eq!(row.locals.len(), 1);
    }

    #[test]
    fn test_find_or_create_keeps_names_unique() {
        let mut table = Table::new(globals(), 2);
        table.row_mut("adder").globals[0] = TypedValue::UInt(5);
        table.row_mut("mult");
        table.row_mut("adder").locals[1].count = 9;

        assert_eq!(table.len(), 2);
        let adder = table.get("adder").unwrap();
        assert_eq!(adder.globals[0], TypedValue::UInt(5));
        assert_eq!(adder.locals[1].count, 9);
        assert!(table.get("missing").is_none());
    }

    #[test]
    fn test_rows_keep_first_seen_order() {
        let mut table = Table::new(Vec::new(), 0);
        for name in ["c", "a", "b", "a", "c"] {
            table.row_mut(name);
        }
        let names: Vec<&str> = table.iter().map(|row| row.name.as_str()).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
        assert_eq!(table.column_count(), 1);
    }
}

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

//! Generic aligned table printer.
//!
//! [`AlignedTable`] prints rows of a fixed arity under a header line. Every
//! column is as wide as its longest cell seen so far, header included, and
//! cells are right-justified between `|` separators:
//!
//! ```text
//! |  name | lines |
//! | adder |   100 |
//! ```
//!
//! Widths only ever grow as rows are added.

use crate::error::{ReportError, ReportResult};
use std::fmt;
use std::io::{self, Write};
use std::marker::PhantomData;
use unicode_width::UnicodeWidthStr;

/// A row that can be split into display cells.
pub trait TableRow {
    /// Number of cells in this row.
    fn arity(&self) -> usize;

    /// The display text of every cell, in column order.
    fn cells(&self) -> Vec<String>;
}

macro_rules! impl_table_row {
    ($len:expr; $($name:ident : $idx:tt),+) => {
        impl<$($name: fmt::Display),+> TableRow for ($($name,)+) {
            fn arity(&self) -> usize {
                $len
            }

            fn cells(&self) -> Vec<String> {
                vec![$(self.$idx.to_string()),+]
            }
        }
    };
}

impl_table_row!(1; A: 0);
impl_table_row!(2; A: 0, B: 1);
impl_table_row!(3; A: 0, B: 1, C: 2);
impl_table_row!(4; A: 0, B: 1, C: 2, D: 3);
impl_table_row!(5; A: 0, B: 1, C: 2, D: 3, E: 4);
impl_table_row!(6; A: 0, B: 1, C: 2, D: 3, E: 4, F: 5);
impl_table_row!(7; A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6);
impl_table_row!(8; A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7);
impl_table_row!(9; A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7, I: 8);
impl_table_row!(10; A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7, I: 8, J: 9);
impl_table_row!(11; A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7, I: 8, J: 9, K: 10);
impl_table_row!(12; A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7, I: 8, J: 9, K: 10, L: 11);

/// Pre-stringified cells; the arity is checked when the row is added.
impl TableRow for Vec<String> {
    fn arity(&self) -> usize {
        self.len()
    }

    fn cells(&self) -> Vec<String> {
        self.clone()
    }
}

/// Aligned, pipe-delimited table over rows of type `R`.
///
/// # Examples
///
/// ```
/// use benchtab_core::AlignedTable;
///
/// let mut table = AlignedTable::<(&str, u64)>::new(["name", "lines"]);
/// table.add(("adder", 100)).unwrap();
/// assert_eq!(table.render(), "|  name | lines |\n| adder |   100 |\n");
/// ```
#[derive(Debug, Clone)]
pub struct AlignedTable<R> {
    labels: Vec<String>,
    widths: Vec<usize>,
    rows: Vec<Vec<String>>,
    _row: PhantomData<fn(R)>,
}

impl<R: TableRow> AlignedTable<R> {
    /// Create an empty table with the given column labels.
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let widths = labels.iter().map(|label| display_width(label)).collect();
        Self {
            labels,
            widths,
            rows: Vec::new(),
            _row: PhantomData,
        }
    }

    /// Append a row and widen columns that are too narrow for it.
    ///
    /// # Errors
    ///
    /// Returns a format error if the row does not have one cell per column.
    pub fn add(&mut self, row: R) -> ReportResult<()> {
        if row.arity() != self.labels.len() {
            return Err(ReportError::format(format!(
                "row has {} cells but the table has {} columns",
                row.arity(),
                self.labels.len()
            )));
        }

        let cells = row.cells();
        for (width, cell) in self.widths.iter_mut().zip(&cells) {
            *width = (*width).max(display_width(cell));
        }
        self.rows.push(cells);
        Ok(())
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Current width of every column.
    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Write the header line and every row.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self)
    }

    pub fn render(&self) -> String {
        self.to_string()
    }

    fn fmt_line(&self, f: &mut fmt::Formatter<'_>, cells: &[String]) -> fmt::Result {
        for (cell, width) in cells.iter().zip(&self.widths) {
            let padding = width.saturating_sub(display_width(cell));
            write!(f, "| {}{} ", " ".repeat(padding), cell)?;
        }
        writeln!(f, "|")
    }
}

impl<R: TableRow> fmt::Display for AlignedTable<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_line(f, &self.labels)?;
        for row in &self.rows {
            self.fmt_line(f, row)?;
        }
        Ok(())
    }
}

/// Terminal columns taken by `text`; wide characters count twice.
fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

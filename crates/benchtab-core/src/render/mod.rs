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

//! Text renderers for benchmark tables.
//!
//! - [`write_fixed`] prints the classic header-less grid with fixed column
//!   widths: 20 for names, 10 for unsigned values, 7 with two decimals for
//!   floats.
//! - [`AlignedTable`] is a general aligned printer with a header line and
//!   columns sized to their content; [`benchmark_grid`] feeds a benchmark
//!   table into it.

mod aligned;

pub use aligned::{AlignedTable, TableRow};

use crate::spec::{ColumnSpec, LocalSpec};
use crate::table::{BenchmarkRow, Table};
use crate::value::{TypedValue, FLOAT_PRECISION, FLOAT_WIDTH, UINT_WIDTH};
use std::io::{self, Write};

/// Width of the benchmark name cell in the fixed-format grid.
pub const NAME_WIDTH: usize = 20;

/// Label of the benchmark name column in the aligned grid.
pub const NAME_LABEL: &str = "Benchmark";

/// Format one benchmark row as a fixed-format line, without newline.
pub fn fixed_line(row: &BenchmarkRow, columns: usize) -> String {
    let mut line = format!("| {:>width$} |", row.name, width = NAME_WIDTH);

    for value in &row.globals {
        line.push_str(&value.to_fixed());
        line.push_str(" |");
    }

    for local in row.locals.iter().take(columns) {
        line.push_str(&format!(
            " {:>uw$} | {:>fw$.prec$} |",
            local.count,
            local.duration,
            uw = UINT_WIDTH,
            fw = FLOAT_WIDTH,
            prec = FLOAT_PRECISION
        ));
    }

    line
}

/// Write the table as a fixed-format grid, one line per benchmark.
pub fn write_fixed<W: Write>(table: &Table, out: &mut W) -> io::Result<()> {
    let columns = table.column_count();
    for row in table {
        writeln!(out, "{}", fixed_line(row, columns))?;
    }
    Ok(())
}

/// Render the fixed-format grid into a string.
pub fn render_fixed(table: &Table) -> String {
    let columns = table.column_count();
    table
        .iter()
        .map(|row| fixed_line(row, columns) + "\n")
        .collect()
}

/// Column labels of the aligned benchmark grid.
///
/// The name column comes first, then every global property, then the two
/// local metrics of each column, prefixed with the column label when
/// columns are declared.
pub fn grid_labels(table: &Table, columns: &[ColumnSpec], locals: &LocalSpec) -> Vec<String> {
    let mut labels = vec![NAME_LABEL.to_string()];
    labels.extend(table.globals().iter().map(|spec| spec.name.clone()));

    if columns.is_empty() {
        labels.push(locals.count.clone());
        labels.push(locals.duration.clone());
    } else {
        for column in columns {
            labels.push(format!("{} {}", column.label, locals.count));
            labels.push(format!("{} {}", column.label, locals.duration));
        }
    }

    labels
}

/// Build an aligned grid with a header from a benchmark table.
pub fn benchmark_grid(
    table: &Table,
    columns: &[ColumnSpec],
    locals: &LocalSpec,
) -> AlignedTable<Vec<String>> {
    let mut grid = AlignedTable::new(grid_labels(table, columns, locals));
    let width = table.column_count();

    for row in table {
        let mut cells = Vec::with_capacity(1 + row.globals.len() + 2 * width);
        cells.push(row.name.clone());
        cells.extend(row.globals.iter().map(TypedValue::to_string));
        for local in row.locals.iter().take(width) {
            cells.push(local.count.to_string());
            cells.push(TypedValue::Float(local.duration).to_string());
        }
        // Rows are sized from the same table, so the arity always matches.
        if let Err(e) = grid.add(cells) {
            tracing::warn!("Dropping row '{}' from grid: {}", row.name, e);
        }
    }

    grid
}

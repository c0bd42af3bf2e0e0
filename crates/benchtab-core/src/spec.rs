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

//! Parsers for the compact configuration strings.
//!
//! Three kinds of string configure a scan:
//!
//! - property specs, `"Lines:u,Runtime:f"`: ordered `name:type` pairs where
//!   the type tag is `u` (unsigned) or `f` (float);
//! - column specs, `"00=Col 1,01=Col 2"`: ordered `id=label` pairs;
//! - the local spec, a property spec with exactly one unsigned and one
//!   float entry naming the per-column metrics.
//!
//! An empty string is always valid and yields an empty list.

use crate::error::{ReportError, ReportResult};
use crate::value::PropertyType;

/// Log key whose value becomes the per-column count.
pub const GATES_KEY: &str = "Gates";
/// Log key whose value becomes the per-column duration.
pub const RUNTIME_KEY: &str = "Runtime";

/// A named, typed property.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertySpec {
    pub name: String,
    pub ty: PropertyType,
}

impl PropertySpec {
    pub fn new(name: impl Into<String>, ty: PropertyType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// A table column, selected by the discriminator captured from a file name.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnSpec {
    pub id: String,
    pub label: String,
}

impl ColumnSpec {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Labels of the two per-column metrics.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalSpec {
    /// Label of the unsigned count metric.
    pub count: String,
    /// Label of the float duration metric.
    pub duration: String,
}

impl Default for LocalSpec {
    fn default() -> Self {
        Self {
            count: GATES_KEY.to_string(),
            duration: RUNTIME_KEY.to_string(),
        }
    }
}

/// Parse a comma-separated list of `name:type` pairs.
///
/// # Errors
///
/// Returns a format error if a pair has no `:`, an empty name, or a type
/// tag other than a single `u` or `f`.
///
/// # Examples
///
/// ```
/// use benchtab_core::{parse_property_specs, PropertyType};
///
/// let specs = parse_property_specs("Lines:u,Runtime:f").unwrap();
/// assert_eq!(specs[0].name, "Lines");
/// assert_eq!(specs[1].ty, PropertyType::Float);
/// ```
pub fn parse_property_specs(input: &str) -> ReportResult<Vec<PropertySpec>> {
    if input.is_empty() {
        return Ok(Vec::new());
    }

    input
        .split(',')
        .map(|pair| {
            let (name, tag) = pair.split_once(':').ok_or_else(|| {
                ReportError::format(format!("property '{}' is missing ':<type>'", pair))
            })?;
            let name = name.trim();
            if name.is_empty() {
                return Err(ReportError::format(format!(
                    "property '{}' has an empty name",
                    pair
                )));
            }

            let mut chars = tag.trim().chars();
            let ty = match (chars.next(), chars.next()) {
                (Some(c), None) => PropertyType::from_tag(c),
                _ => None,
            }
            .ok_or_else(|| {
                ReportError::format(format!(
                    "property '{}' has type '{}', expected 'u' or 'f'",
                    name,
                    tag.trim()
                ))
            })?;

            Ok(PropertySpec::new(name, ty))
        })
        .collect()
}

/// Parse a comma-separated list of `id=label` pairs.
///
/// # Errors
///
/// Returns a format error if a pair has no `=`.
pub fn parse_column_specs(input: &str) -> ReportResult<Vec<ColumnSpec>> {
    if input.is_empty() {
        return Ok(Vec::new());
    }

    input
        .split(',')
        .map(|pair| {
            let (id, label) = pair.split_once('=').ok_or_else(|| {
                ReportError::format(format!("column '{}' is missing '=<label>'", pair))
            })?;
            Ok(ColumnSpec::new(id.trim(), label.trim()))
        })
        .collect()
}

/// Parse the local property spec.
///
/// The first entry must be unsigned and labels the count, the second must
/// be a float and labels the duration.
pub fn parse_local_spec(input: &str) -> ReportResult<LocalSpec> {
    let specs = parse_property_specs(input)?;
    match specs.as_slice() {
        [count, duration]
            if count.ty == PropertyType::UInt && duration.ty == PropertyType::Float =>
        {
            Ok(LocalSpec {
                count: count.name.clone(),
                duration: duration.name.clone(),
            })
        }
        _ => Err(ReportError::format(format!(
            "local properties '{}' must be one unsigned count followed by one float duration",
            input
        ))),
    }
}

/// Index of the first property with the given name.
pub fn find_property(specs: &[PropertySpec], name: &str) -> Option<usize> {
    specs.iter().position(|spec| spec.name == name)
}

/// Index of the column selected by a captured discriminator.
///
/// File names usually carry the short column id (`00` in `00=Col 1`), so
/// ids are matched first; a discriminator equal to a label is accepted when
/// no id matches.
pub fn find_column(columns: &[ColumnSpec], discriminator: &str) -> Option<usize> {
    columns
        .iter()
        .position(|column| column.id == discriminator)
        .or_else(|| columns.iter().position(|column| column.label == discriminator))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReportErrorKind;

    #[test]
    fn test_parse_property_specs() {
        let specs = parse_property_specs("Lines:u,Runtime:f").unwrap();
        assert_eq!(
            specs,
            vec![
                PropertySpec::new("Lines", PropertyType::UInt),
                PropertySpec::new("Runtime", PropertyType::Float),
            ]
        );
    }

    #[test]
    fn test_parse_property_specs_empty() {
        assert!(parse_property_specs("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_property_specs_trims_whitespace() {
        let specs = parse_property_specs("Lines:u, Qubits : u").unwrap();
        assert_eq!(specs[1], PropertySpec::new("Qubits", PropertyType::UInt));
    }

    #[test]
    fn test_parse_property_specs_missing_separator() {
        let err = parse_property_specs("Lines:u,Runtime").unwrap_err();
        assert_eq!(err.kind, ReportErrorKind::Format);
        assert!(err.message.contains("Runtime"));
    }

    #[test]
    fn test_parse_property_specs_bad_tag() {
        for input in ["Lines:s", "Lines:", "Lines:uf"] {
            let err = parse_property_specs(input).unwrap_err();
            assert_eq!(err.kind, ReportErrorKind::Format, "input {:?}", input);
        }
    }

    #[test]
    fn test_parse_property_specs_empty_name() {
        let err = parse_property_specs(":u").unwrap_err();
        assert_eq!(err.kind, ReportErrorKind::Format);
    }

    #[test]
    fn test_duplicate_properties_first_wins_on_lookup() {
        let specs = parse_property_specs("Lines:u,Lines:f").unwrap();
        assert_eq!(specs.len(), 2);
        assert_eq!(find_property(&specs, "Lines"), Some(0));
        assert_eq!(find_property(&specs, "Gates"), None);
    }

    #[test]
    fn test_parse_column_specs() {
        let columns = parse_column_specs("00=Col 1,01=Col 2").unwrap();
        assert_eq!(
            columns,
            vec![ColumnSpec::new("00", "Col 1"), ColumnSpec::new("01", "Col 2")]
        );
        assert_eq!(find_column(&columns, "01"), Some(1));
        assert_eq!(find_column(&columns, "Col 2"), Some(1));
        assert_eq!(find_column(&columns, "02"), None);
    }

    #[test]
    fn test_find_column_prefers_ids() {
        let columns = parse_column_specs("a=b,b=c").unwrap();
        assert_eq!(find_column(&columns, "b"), Some(1));
        assert_eq!(find_column(&columns, "c"), Some(1));
    }

    #[test]
    fn test_parse_column_specs_empty() {
        assert!(parse_column_specs("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_column_specs_malformed() {
        let err = parse_column_specs("00=a,01").unwrap_err();
        assert_eq!(err.kind, ReportErrorKind::Format);
    }

    #[test]
    fn test_parse_local_spec_default_shape() {
        let local = parse_local_spec("Gates:u,Runtime:f").unwrap();
        assert_eq!(local, LocalSpec::default());

        let local = parse_local_spec("Cost:u,Time:f").unwrap();
        assert_eq!(local.count, "Cost");
        assert_eq!(local.duration, "Time");
    }

    #[test]
    fn test_parse_local_spec_rejects_other_shapes() {
        for input in ["", "Gates:u", "Runtime:f,Gates:u", "Gates:u,Runtime:f,Lines:u"] {
            let err = parse_local_spec(input).unwrap_err();
            assert_eq!(err.kind, ReportErrorKind::Format, "input {:?}", input);
        }
    }
}

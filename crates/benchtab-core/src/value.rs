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

//! Typed cell values for benchmark rows.

use crate::error::{ReportError, ReportResult};
use std::fmt;

/// Width of an unsigned cell in the fixed-format table.
pub const UINT_WIDTH: usize = 10;
/// Width of a float cell in the fixed-format table.
pub const FLOAT_WIDTH: usize = 7;
/// Digits after the decimal point for float cells.
pub const FLOAT_PRECISION: usize = 2;

/// Type tag of a property, as written in a property spec (`u` or `f`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PropertyType {
    /// Unsigned integer (`u`).
    UInt,
    /// Floating point (`f`).
    Float,
}

impl PropertyType {
    /// Map a single-character type tag to a property type.
    pub fn from_tag(tag: char) -> Option<Self> {
        match tag {
            'u' => Some(Self::UInt),
            'f' => Some(Self::Float),
            _ => None,
        }
    }

    /// The single-character tag for this type.
    pub fn tag(self) -> char {
        match self {
            Self::UInt => 'u',
            Self::Float => 'f',
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UInt => write!(f, "unsigned integer"),
            Self::Float => write!(f, "float"),
        }
    }
}

/// A numeric cell value: either an unsigned integer or a float.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypedValue {
    UInt(u64),
    Float(f64),
}

impl TypedValue {
    /// The zero value for a property type.
    pub fn zero(ty: PropertyType) -> Self {
        match ty {
            PropertyType::UInt => Self::UInt(0),
            PropertyType::Float => Self::Float(0.0),
        }
    }

    /// Coerce log text into a value of the given type.
    ///
    /// Surrounding whitespace is ignored; anything else that does not parse
    /// as the declared type is a conversion error.
    pub fn coerce(ty: PropertyType, text: &str) -> ReportResult<Self> {
        match ty {
            PropertyType::UInt => parse_uint(text).map(Self::UInt),
            PropertyType::Float => parse_float(text).map(Self::Float),
        }
    }

    /// The type tag of this value.
    pub fn property_type(&self) -> PropertyType {
        match self {
            Self::UInt(_) => PropertyType::UInt,
            Self::Float(_) => PropertyType::Float,
        }
    }

    pub fn as_uint(&self) -> Option<u64> {
        match self {
            Self::UInt(n) => Some(*n),
            Self::Float(_) => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(x) => Some(*x),
            Self::UInt(_) => None,
        }
    }

    /// Right-justified rendering used by the fixed-format table.
    pub fn to_fixed(&self) -> String {
        match self {
            Self::UInt(n) => format!("{:>width$}", n, width = UINT_WIDTH),
            Self::Float(x) => format!(
                "{:>width$.prec$}",
                x,
                width = FLOAT_WIDTH,
                prec = FLOAT_PRECISION
            ),
        }
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UInt(n) => write!(f, "{}", n),
            Self::Float(x) => write!(f, "{:.prec$}", x, prec = FLOAT_PRECISION),
        }
    }
}

/// Per-column metrics of a benchmark: gate count and runtime.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalEntry {
    pub count: u64,
    pub duration: f64,
}

impl LocalEntry {
    pub fn new(count: u64, duration: f64) -> Self {
        Self { count, duration }
    }
}

pub(crate) fn parse_uint(text: &str) -> ReportResult<u64> {
    text.trim().parse::<u64>().map_err(|e| {
        ReportError::conversion(format!(
            "'{}' is not a valid {}: {}",
            text,
            PropertyType::UInt,
            e
        ))
    })
}

pub(crate) fn parse_float(text: &str) -> ReportResult<f64> {
    text.trim().parse::<f64>().map_err(|e| {
        ReportError::conversion(format!(
            "'{}' is not a valid {}: {}",
            text,
            PropertyType::Float,
            e
        ))
    })
}

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

//! First-match rule dispatch over log lines.
//!
//! A [`RuleSet`] is an ordered list of [`Rule`]s. Each line of input is
//! tested against the rules in order and only the first rule whose pattern
//! matches runs its action. Lines no rule matches are dropped.
//!
//! Actions are plain functions receiving the captures and a mutable target,
//! so a rule set can be built once and applied to many targets.
//!
//! # Examples
//!
//! ```
//! use benchtab_core::rules::{Rule, RuleSet};
//!
//! let rules = RuleSet::new()
//!     .with_rule(Rule::new(r"^error: (.*)$", |caps, errors: &mut Vec<String>| {
//!         errors.push(caps[1].to_string());
//!         Ok(())
//!     }).unwrap());
//!
//! let mut errors = Vec::new();
//! let matched = rules.apply("ok\nerror: disk full\n".lines(), &mut errors).unwrap();
//! assert_eq!(matched, 1);
//! assert_eq!(errors, vec!["disk full".to_string()]);
//! ```

use crate::error::{ReportError, ReportResult};
use regex::{Captures, Regex};

/// Action run for a matching line.
pub type RuleAction<T> = fn(&Captures<'_>, &mut T) -> ReportResult<()>;

/// A compiled line pattern and the action it triggers.
pub struct Rule<T> {
    pattern: Regex,
    action: RuleAction<T>,
}

impl<T> Rule<T> {
    /// Compile `pattern` into a rule.
    ///
    /// # Errors
    ///
    /// Returns a pattern error if the regular expression does not compile.
    pub fn new(pattern: &str, action: RuleAction<T>) -> ReportResult<Self> {
        let pattern = Regex::new(pattern).map_err(|e| {
            ReportError::pattern(format!("invalid rule pattern '{}': {}", pattern, e))
        })?;
        Ok(Self::from_regex(pattern, action))
    }

    pub fn from_regex(pattern: Regex, action: RuleAction<T>) -> Self {
        Self { pattern, action }
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }
}

impl<T> std::fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("pattern", &self.pattern.as_str())
            .finish_non_exhaustive()
    }
}

/// Ordered rules, evaluated first-match-wins per line.
#[derive(Debug)]
pub struct RuleSet<T> {
    rules: Vec<Rule<T>>,
}

impl<T> Default for RuleSet<T> {
    fn default() -> Self {
        Self { rules: Vec::new() }
    }
}

impl<T> RuleSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule with the lowest priority so far.
    pub fn with_rule(mut self, rule: Rule<T>) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn push(&mut self, rule: Rule<T>) {
        self.rules.push(rule);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run the first matching rule on a single line.
    ///
    /// Returns whether any rule matched.
    pub fn apply_line(&self, line: &str, target: &mut T) -> ReportResult<bool> {
        for rule in &self.rules {
            if let Some(caps) = rule.pattern.captures(line) {
                (rule.action)(&caps, target)?;
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Run the rules over every line, returning how many lines matched.
    ///
    /// # Errors
    ///
    /// Stops at the first failing action and returns its error, prefixed
    /// with the 1-based line number. Changes made to `target` by earlier
    /// lines are kept.
    pub fn apply<'a, I>(&self, lines: I, target: &mut T) -> ReportResult<usize>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut matched = 0;
        for (index, line) in lines.into_iter().enumerate() {
            let hit = self.apply_line(line, target).map_err(|e| {
                ReportError::new(e.kind, format!("line {}: {}", index + 1, e.message))
            })?;
            if hit {
                matched += 1;
            }
        }
        Ok(matched)
    }
}

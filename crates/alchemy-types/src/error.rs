// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Errors raised while parsing parameter values from text

use thiserror::Error;

/// A value is not a member of the closed set accepted for a parameter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} `{value}`, expected one of: {}", .expected.join(", "))]
pub struct ParseEnumError {
    /// Human readable name of the parameter kind
    pub kind: &'static str,
    /// The rejected input
    pub value: String,
    /// Accepted wire values
    pub expected: Vec<&'static str>,
}

impl ParseEnumError {
    /// Create a new parse error for `kind`
    pub fn new(kind: &'static str, value: impl Into<String>, expected: Vec<&'static str>) -> Self {
        Self {
            kind,
            value: value.into(),
            expected,
        }
    }
}

// Copyright 2026 the Fieldwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validation results as plain data.

use alloc::string::String;

use smallvec::SmallVec;

use crate::CheckKind;

/// One violated constraint, with a human-readable description.
///
/// Issues are ordered: a failed [`Validation`] lists them in the schema's
/// declaration order, and presentation layers typically surface only the
/// first (see [`Validation::first_message`]).
#[derive(Clone, Debug, PartialEq)]
pub struct ValidationIssue {
    /// The constraint kind that was violated, or `None` when the value was
    /// not a number at all.
    pub check: Option<CheckKind>,
    /// Human-readable description of the violation.
    pub message: String,
}

/// The outcome of validating a value against a schema.
///
/// Validation failures are data flowing through normal return values, never
/// errors: an invalid draft is a legitimate state while the user is still
/// editing.
#[derive(Clone, Debug, PartialEq)]
pub enum Validation {
    /// The value satisfies every constraint.
    Valid,
    /// One or more constraints were violated, in declaration order.
    Invalid(SmallVec<[ValidationIssue; 2]>),
}

impl Validation {
    /// Returns `true` if the value satisfied every constraint.
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The violated constraints, in declaration order. Empty when valid.
    pub fn issues(&self) -> &[ValidationIssue] {
        match self {
            Self::Valid => &[],
            Self::Invalid(issues) => issues,
        }
    }

    /// The first issue's message, if any.
    ///
    /// This is the message an inline validation renderer shows next to the
    /// field.
    pub fn first_message(&self) -> Option<&str> {
        self.issues().first().map(|issue| issue.message.as_str())
    }
}

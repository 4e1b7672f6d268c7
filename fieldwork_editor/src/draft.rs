// Copyright 2026 the Fieldwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The in-progress value of a field, distinct from the committed value.

use fieldwork_schema::{NumberSchema, Validation};

/// The value a user is currently editing, plus its validation result.
///
/// A draft may legitimately be invalid: the user might be mid-edit, or
/// deliberately saving an out-of-policy value that the host allows through.
/// Transitions are pure — each returns a fresh `Draft` validated against the
/// schema — so controller behavior is testable without any rendering
/// environment.
#[derive(Clone, Debug, PartialEq)]
pub struct Draft {
    /// The draft value. May be `NaN` after a failed text parse.
    pub value: f64,
    /// The result of validating `value` against the field's schema.
    pub validation: Validation,
}

impl Draft {
    /// A draft holding `value`, validated against `schema`.
    pub fn new<S: NumberSchema + ?Sized>(schema: &S, value: f64) -> Self {
        Self {
            value,
            validation: schema.validate(value),
        }
    }

    /// The draft after a user edit to `value`.
    #[must_use]
    pub fn with_edit<S: NumberSchema + ?Sized>(&self, schema: &S, value: f64) -> Self {
        Self::new(schema, value)
    }

    /// The draft after a reset to `default`.
    #[must_use]
    pub fn with_reset<S: NumberSchema + ?Sized>(&self, schema: &S, default: f64) -> Self {
        Self::new(schema, default)
    }

    /// Returns `true` if the draft satisfies the schema.
    pub const fn is_valid(&self) -> bool {
        self.validation.is_valid()
    }

    /// The first validation message, if the draft is invalid.
    pub fn first_message(&self) -> Option<&str> {
        self.validation.first_message()
    }
}

#[cfg(test)]
mod tests {
    use fieldwork_schema::NumberField;

    use super::*;

    #[test]
    fn new_draft_carries_fresh_validation() {
        let schema = NumberField::new().min(0.0);
        let draft = Draft::new(&schema, 5.0);
        assert_eq!(draft.value, 5.0);
        assert!(draft.is_valid());
        assert_eq!(draft.validation, schema.validate(5.0));
    }

    #[test]
    fn transitions_do_not_mutate_the_source() {
        let schema = NumberField::new().min(0.0);
        let first = Draft::new(&schema, 5.0);
        let second = first.with_edit(&schema, -1.0);

        assert_eq!(first.value, 5.0);
        assert!(first.is_valid());
        assert_eq!(second.value, -1.0);
        assert!(!second.is_valid());

        let third = second.with_reset(&schema, 0.0);
        assert_eq!(third.value, 0.0);
        assert!(third.is_valid());
    }

    #[test]
    fn nan_draft_is_invalid_with_message() {
        let schema = NumberField::new();
        let draft = Draft::new(&schema, f64::NAN);
        assert!(!draft.is_valid());
        assert_eq!(draft.first_message(), Some("Expected a number"));
    }
}

// Copyright 2026 the Fieldwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deriving input-surface hints from schema constraints.

use core::fmt;

use fieldwork_schema::{Check, CheckKind, NumberSchema};

/// Numeric hints for an input surface, derived from a schema.
///
/// `None` means unbounded (for `min`/`max`) or no stepping hint (`step`).
/// Bounds are hints for clamping and stepping widgets only — they do not
/// enforce correctness. The schema's own validation remains the source of
/// truth for what is acceptable.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Bounds {
    /// Inclusive lower bound, or `None` when unbounded below.
    pub min: Option<f64>,
    /// Inclusive upper bound, or `None` when unbounded above.
    pub max: Option<f64>,
    /// Stepping hint from a multiple-of constraint, or `None`.
    pub step: Option<f64>,
}

impl Bounds {
    /// No bounds and no stepping hint.
    pub const UNBOUNDED: Self = Self {
        min: None,
        max: None,
        step: None,
    };

    /// Returns `true` if neither bound nor step is declared.
    pub const fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none() && self.step.is_none()
    }
}

/// A schema implementation violated its own invariants.
///
/// This is the fail-fast channel for defects in the schema capability, kept
/// strictly separate from user-facing validation failures. It must never be
/// caught and papered over with a default bound.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SchemaIntegrityError {
    /// A constraint entry located by kind carried a different kind tag.
    CheckKindMismatch {
        /// The kind used to locate the entry.
        expected: CheckKind,
        /// The kind the entry actually carried.
        found: CheckKind,
    },
}

impl fmt::Display for SchemaIntegrityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CheckKindMismatch { expected, found } => write!(
                f,
                "schema returned a {found:?} check when asked for {expected:?}",
            ),
        }
    }
}

impl core::error::Error for SchemaIntegrityError {}

/// Derive [`Bounds`] from a schema's declared constraints.
///
/// - An inclusive `Min`/`Max` becomes the corresponding bound; an exclusive
///   or absent bound yields `None`. Treating exclusive bounds as unbounded
///   is a deliberate simplification: a clamping hint at an excluded value
///   would invite the widget to produce an invalid value.
/// - A `MultipleOf` constraint becomes the stepping hint.
///
/// Pure function of the schema's constraint table; callers cache the result
/// per schema reference.
pub fn extract_bounds<S: NumberSchema + ?Sized>(
    schema: &S,
) -> Result<Bounds, SchemaIntegrityError> {
    let min = inclusive_bound(schema, CheckKind::Min)?;
    let max = inclusive_bound(schema, CheckKind::Max)?;
    let step = locate(schema, CheckKind::MultipleOf)?.map(|check| check.value);
    Ok(Bounds { min, max, step })
}

/// Locate a check by kind, verifying the entry's own tag.
fn locate<S: NumberSchema + ?Sized>(
    schema: &S,
    kind: CheckKind,
) -> Result<Option<&Check>, SchemaIntegrityError> {
    match schema.check(kind) {
        None => Ok(None),
        Some(check) if check.kind == kind => Ok(Some(check)),
        Some(check) => Err(SchemaIntegrityError::CheckKindMismatch {
            expected: kind,
            found: check.kind,
        }),
    }
}

fn inclusive_bound<S: NumberSchema + ?Sized>(
    schema: &S,
    kind: CheckKind,
) -> Result<Option<f64>, SchemaIntegrityError> {
    Ok(locate(schema, kind)?.and_then(|check| check.inclusive.then_some(check.value)))
}

#[cfg(test)]
mod tests {
    use fieldwork_schema::{NumberField, Validation};

    use super::*;

    #[test]
    fn inclusive_bounds_and_step_are_extracted() {
        let schema = NumberField::new().min(0.0).max(100.0).multiple_of(5.0);
        let bounds = extract_bounds(&schema).unwrap();
        assert_eq!(bounds.min, Some(0.0));
        assert_eq!(bounds.max, Some(100.0));
        assert_eq!(bounds.step, Some(5.0));
        assert!(!bounds.is_unbounded());
    }

    #[test]
    fn absent_constraints_yield_unbounded() {
        let schema = NumberField::new();
        let bounds = extract_bounds(&schema).unwrap();
        assert_eq!(bounds, Bounds::UNBOUNDED);
        assert!(bounds.is_unbounded());
    }

    #[test]
    fn exclusive_bounds_are_treated_as_unbounded() {
        let schema = NumberField::new().gt(0.0).lt(1.0);
        let bounds = extract_bounds(&schema).unwrap();
        assert_eq!(bounds.min, None);
        assert_eq!(bounds.max, None);
    }

    #[test]
    fn mixed_inclusivity_extracts_only_inclusive_sides() {
        let schema = NumberField::new().gt(0.0).max(63.0);
        let bounds = extract_bounds(&schema).unwrap();
        assert_eq!(bounds.min, None);
        assert_eq!(bounds.max, Some(63.0));
    }

    /// A schema whose `check` lookup is broken: it answers every lookup with
    /// its first entry, whatever that entry's kind is.
    struct MisTagged(NumberField);

    impl NumberSchema for MisTagged {
        fn validate(&self, value: f64) -> Validation {
            self.0.validate(value)
        }

        fn checks(&self) -> &[Check] {
            self.0.checks()
        }

        fn check(&self, _kind: CheckKind) -> Option<&Check> {
            self.checks().first()
        }
    }

    #[test]
    fn mis_kinded_entry_fails_fast() {
        let schema = MisTagged(NumberField::new().max(10.0));
        let err = extract_bounds(&schema).unwrap_err();
        assert_eq!(
            err,
            SchemaIntegrityError::CheckKindMismatch {
                expected: CheckKind::Min,
                found: CheckKind::Max,
            }
        );
    }

    #[test]
    fn integrity_errors_never_reach_the_validation_channel() {
        // The mis-tagged schema still validates normally: the two failure
        // channels stay separate.
        let schema = MisTagged(NumberField::new().max(10.0));
        assert!(schema.validate(5.0).is_valid());
        assert!(!schema.validate(11.0).is_valid());
        assert!(extract_bounds(&schema).is_err());
    }
}

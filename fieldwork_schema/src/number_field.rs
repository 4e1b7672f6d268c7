// Copyright 2026 the Fieldwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The concrete builder-style numeric schema.

use alloc::format;
use alloc::string::String;

use smallvec::{SmallVec, smallvec};

use crate::{Check, CheckKind, NumberSchema, Validation, ValidationIssue};

/// A numeric schema built from chained constraint declarations.
///
/// Constraints are stored and validated in declaration order:
///
/// ```rust
/// use fieldwork_schema::{NumberField, NumberSchema};
///
/// let schema = NumberField::new().min(1.0).max(51.0).int();
/// assert!(schema.validate(18.0).is_valid());
/// assert!(!schema.validate(0.0).is_valid());
/// assert!(!schema.validate(2.5).is_valid());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NumberField {
    checks: SmallVec<[Check; 4]>,
}

impl NumberField {
    /// A schema with no constraints; every number is valid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `value` as an inclusive lower bound.
    #[must_use]
    pub fn min(mut self, value: f64) -> Self {
        self.checks.push(Check::min(value));
        self
    }

    /// Require the value to be strictly greater than `value`.
    #[must_use]
    pub fn gt(mut self, value: f64) -> Self {
        self.checks.push(Check::gt(value));
        self
    }

    /// Require `value` as an inclusive upper bound.
    #[must_use]
    pub fn max(mut self, value: f64) -> Self {
        self.checks.push(Check::max(value));
        self
    }

    /// Require the value to be strictly less than `value`.
    #[must_use]
    pub fn lt(mut self, value: f64) -> Self {
        self.checks.push(Check::lt(value));
        self
    }

    /// Require the value to be a multiple of `value`.
    #[must_use]
    pub fn multiple_of(mut self, value: f64) -> Self {
        self.checks.push(Check::multiple_of(value));
        self
    }

    /// Require the value to be a whole number.
    #[must_use]
    pub fn int(mut self) -> Self {
        self.checks.push(Check::int());
        self
    }
}

impl NumberSchema for NumberField {
    fn validate(&self, value: f64) -> Validation {
        // Non-numeric input short-circuits: no per-check message is
        // meaningful for NaN, and raw-text parse failures land here.
        if value.is_nan() {
            return Validation::Invalid(smallvec![ValidationIssue {
                check: None,
                message: "Expected a number".into(),
            }]);
        }

        let mut issues: SmallVec<[ValidationIssue; 2]> = SmallVec::new();
        for check in &self.checks {
            let ok = match check.kind {
                CheckKind::Min => {
                    if check.inclusive {
                        value >= check.value
                    } else {
                        value > check.value
                    }
                }
                CheckKind::Max => {
                    if check.inclusive {
                        value <= check.value
                    } else {
                        value < check.value
                    }
                }
                CheckKind::MultipleOf => float_safe_remainder(value, check.value) == 0.0,
                CheckKind::Int => value % 1.0 == 0.0,
            };
            if !ok {
                issues.push(ValidationIssue {
                    check: Some(check.kind),
                    message: violation_message(check),
                });
            }
        }

        if issues.is_empty() {
            Validation::Valid
        } else {
            Validation::Invalid(issues)
        }
    }

    fn checks(&self) -> &[Check] {
        &self.checks
    }
}

fn violation_message(check: &Check) -> String {
    match (check.kind, check.inclusive) {
        (CheckKind::Min, true) => {
            format!("Number must be greater than or equal to {}", check.value)
        }
        (CheckKind::Min, false) => format!("Number must be greater than {}", check.value),
        (CheckKind::Max, true) => format!("Number must be less than or equal to {}", check.value),
        (CheckKind::Max, false) => format!("Number must be less than {}", check.value),
        (CheckKind::MultipleOf, _) => format!("Number must be a multiple of {}", check.value),
        (CheckKind::Int, _) => "Expected an integer".into(),
    }
}

/// Remainder of `value / step`, robust against decimal float error.
///
/// `0.3 % 0.1` is not `0.0` in IEEE arithmetic. Scale both operands to
/// integers at their decimal precision before taking the remainder, so that
/// decimal steps behave the way users writing `multiple_of(0.1)` expect.
fn float_safe_remainder(value: f64, step: f64) -> f64 {
    let decimals = decimal_places(value).max(decimal_places(step));
    let scale = pow10(decimals);
    let scaled_value = round(value * scale);
    let scaled_step = round(step * scale);
    (scaled_value % scaled_step) / scale
}

/// Number of digits after the decimal point in the shortest decimal
/// representation of `x`.
fn decimal_places(x: f64) -> usize {
    let formatted = format!("{x}");
    match formatted.split('.').nth(1) {
        Some(fraction) => fraction.len(),
        None => 0,
    }
}

fn pow10(n: usize) -> f64 {
    let mut scale = 1.0;
    for _ in 0..n {
        scale *= 10.0;
    }
    scale
}

#[cfg(feature = "std")]
fn round(x: f64) -> f64 {
    x.round()
}

#[cfg(not(feature = "std"))]
fn round(x: f64) -> f64 {
    libm::round(x)
}

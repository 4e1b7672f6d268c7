// Copyright 2026 the Fieldwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The numeric schema capability trait.

use crate::{Check, CheckKind, Validation};

/// A declarative description of a numeric value's constraints.
///
/// Implementations provide two capabilities:
///
/// - [`validate`](Self::validate): check a value and return the result as
///   data. Must never panic, including for `NaN` input.
/// - [`checks`](Self::checks): expose the constraints as an ordered sequence
///   of kind-tagged [`Check`] records for introspection (for example,
///   deriving min/max/step hints for an input surface).
///
/// Consumers that locate an entry via [`check`](Self::check) must verify the
/// returned entry's own `kind` tag before trusting its payload; an entry
/// whose tag differs from the kind used to locate it indicates a defect in
/// the schema implementation and must be treated as unrecoverable rather
/// than silently substituted.
pub trait NumberSchema {
    /// Validate `value` against every declared constraint.
    fn validate(&self, value: f64) -> Validation;

    /// The declared constraints, in declaration order.
    fn checks(&self) -> &[Check];

    /// The first constraint entry located by `kind`, if any.
    fn check(&self, kind: CheckKind) -> Option<&Check> {
        self.checks().iter().find(|c| c.kind == kind)
    }
}

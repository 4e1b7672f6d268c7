// Copyright 2026 the Fieldwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Kind-tagged constraint records.

/// The kind of a numeric constraint.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CheckKind {
    /// Lower bound; inclusive or exclusive per [`Check::inclusive`].
    Min,
    /// Upper bound; inclusive or exclusive per [`Check::inclusive`].
    Max,
    /// Divisibility constraint: the value must be a multiple of
    /// [`Check::value`].
    MultipleOf,
    /// The value must be a whole number.
    Int,
}

/// A single constraint entry in a schema's ordered checks table.
///
/// `Check` is a flat kind-tagged record rather than a per-kind enum: the
/// constraint table is modeled on the dynamic checks tables found in
/// declarative validation libraries, and consumers that locate an entry by
/// kind are expected to verify the entry's own tag before trusting its
/// payload. A mismatch indicates a defect in the schema implementation, not
/// bad user input.
///
/// `value` and `inclusive` are meaningless for kinds that do not use them
/// ([`CheckKind::Int`]); such entries carry `0.0` and `true`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Check {
    /// Which constraint this entry declares.
    pub kind: CheckKind,
    /// The constraint's numeric payload (bound or divisor).
    pub value: f64,
    /// For bound kinds, whether the bound itself is a permitted value.
    pub inclusive: bool,
}

impl Check {
    /// An inclusive lower bound.
    pub const fn min(value: f64) -> Self {
        Self {
            kind: CheckKind::Min,
            value,
            inclusive: true,
        }
    }

    /// An exclusive lower bound (`> value`).
    pub const fn gt(value: f64) -> Self {
        Self {
            kind: CheckKind::Min,
            value,
            inclusive: false,
        }
    }

    /// An inclusive upper bound.
    pub const fn max(value: f64) -> Self {
        Self {
            kind: CheckKind::Max,
            value,
            inclusive: true,
        }
    }

    /// An exclusive upper bound (`< value`).
    pub const fn lt(value: f64) -> Self {
        Self {
            kind: CheckKind::Max,
            value,
            inclusive: false,
        }
    }

    /// A divisibility constraint.
    pub const fn multiple_of(value: f64) -> Self {
        Self {
            kind: CheckKind::MultipleOf,
            value,
            inclusive: true,
        }
    }

    /// A whole-number constraint.
    pub const fn int() -> Self {
        Self {
            kind: CheckKind::Int,
            value: 0.0,
            inclusive: true,
        }
    }
}

// Copyright 2026 the Fieldwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fieldwork Schema: declarative numeric value schemas.
//!
//! This crate models a numeric schema as two capabilities:
//!
//! - **Validation**: [`NumberSchema::validate`] checks a value against the
//!   schema's constraints and returns a [`Validation`] — plain data, not an
//!   error. A failed validation carries an ordered list of human-readable
//!   [`ValidationIssue`]s.
//! - **Constraint introspection**: [`NumberSchema::checks`] exposes the
//!   schema's constraints as an ordered sequence of kind-tagged [`Check`]
//!   records, so consumers (for example an input surface deriving
//!   min/max/step hints) can inspect declared bounds without re-parsing
//!   anything.
//!
//! [`NumberField`] is the concrete builder-style schema:
//!
//! ```rust
//! use fieldwork_schema::{NumberField, NumberSchema};
//!
//! let schema = NumberField::new().min(0.0).max(100.0).multiple_of(5.0);
//!
//! assert!(schema.validate(40.0).is_valid());
//!
//! let failed = schema.validate(37.0);
//! assert!(!failed.is_valid());
//! assert_eq!(failed.first_message(), Some("Number must be a multiple of 5"));
//! ```
//!
//! Non-numeric input (`NaN`, for example from a failed text parse) flows
//! through validation like any other value and fails with a single
//! "expected a number" issue; it is not a separate error channel:
//!
//! ```rust
//! use fieldwork_schema::{NumberField, NumberSchema};
//!
//! let schema = NumberField::new().min(0.0);
//! assert_eq!(
//!     schema.validate(f64::NAN).first_message(),
//!     Some("Expected a number"),
//! );
//! ```
//!
//! ## Features
//!
//! - `std` (default): uses `std` float math.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point
//!   math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("fieldwork_schema requires either the `std` or `libm` feature");

mod check;
mod number_field;
mod schema;
mod validation;

pub use check::{Check, CheckKind};
pub use number_field::NumberField;
pub use schema::NumberSchema;
pub use validation::{Validation, ValidationIssue};

// Copyright 2026 the Fieldwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fieldwork Editor: a draft/commit controller for schema-constrained
//! numeric fields.
//!
//! ## Overview
//!
//! An editable numeric field has three values in play:
//!
//! - the **committed** value the host currently holds,
//! - the **default** value the field can be reset to,
//! - and the **draft** the user is editing right now, which may legitimately
//!   be invalid mid-edit.
//!
//! [`FieldEditor`] owns the draft and the schema, validates every edit, and
//! reports edits back to the host as typed [`Edit`] values rather than
//! through callbacks. Committing is a distinct, explicit action
//! ([`FieldEditor::save`]) from editing; validity is surfaced to the user
//! but never gates editing or saving — enforcement is host policy.
//!
//! [`extract_bounds`] derives min/max/step *hints* for an input surface from
//! the schema's declared constraints. Hints only: out-of-range drafts still
//! flow through validation and show the schema's own message.
//!
//! ## Minimal example
//!
//! ```rust
//! use fieldwork_editor::{EditSource, FieldEditor};
//! use fieldwork_schema::NumberField;
//!
//! let schema = NumberField::new().min(0.0).max(100.0).multiple_of(5.0);
//! let mut field = FieldEditor::new(schema, 10.0, 10.0).unwrap();
//!
//! // The input surface gets clamping/stepping hints from the schema.
//! let bounds = field.bounds();
//! assert_eq!((bounds.min, bounds.max, bounds.step),
//!            (Some(0.0), Some(100.0), Some(5.0)));
//!
//! // A drag gesture edits the draft; the edit is reported, not committed.
//! let edit = field.edit_numeric(37.0);
//! assert_eq!(edit.source, EditSource::User);
//! assert!(!field.is_valid()); // 37 is not a multiple of 5
//! assert!(field.first_error().is_some());
//!
//! // Typed text flows through the same path; non-numeric text fails
//! // validation rather than raising a parse error.
//! field.edit_text("abc");
//! assert!(!field.is_valid());
//!
//! // Reset is presentation-only; save forwards the committed-level value.
//! field.reset();
//! assert_eq!(field.draft().value, 10.0);
//! assert_eq!(field.save(), 10.0);
//! ```
//!
//! ## Multiple fields
//!
//! [`FieldSet`] keys independent editors by a host-chosen field key and
//! answers aggregate questions such as "is any field invalid?" — the signal
//! a host uses to disable a form-level save action.
//!
//! ## Error handling
//!
//! User-facing validation failures are data ([`fieldwork_schema::Validation`])
//! and never errors. The only fallible path is [`SchemaIntegrityError`]: a
//! schema implementation returning a mis-kinded constraint entry is a defect
//! in the schema itself and fails fast instead of silently mis-hinting the
//! input surface. The two channels are never conflated.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod bounds;
mod draft;
mod editor;
mod fields;

pub use bounds::{Bounds, SchemaIntegrityError, extract_bounds};
pub use draft::Draft;
pub use editor::{Edit, EditSource, FieldEditor, FieldFlags};
pub use fields::FieldSet;

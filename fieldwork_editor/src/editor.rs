// Copyright 2026 the Fieldwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-field draft/commit controller.

use fieldwork_schema::NumberSchema;

use crate::{Bounds, Draft, SchemaIntegrityError, extract_bounds};

bitflags::bitflags! {
    /// Row state summary for a presentation layer.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct FieldFlags: u8 {
        /// The committed value equals the default value.
        const DEFAULT = 0b0000_0001;
        /// The current draft satisfies the schema.
        const VALID   = 0b0000_0010;
    }
}

/// How an edit was produced.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EditSource {
    /// A typed or dragged edit from the user.
    User,
    /// A programmatic reset to the default value.
    Reset,
}

/// One draft edit, reported back to the host.
///
/// The host forwards `value` to wherever it tracks the field's pre-commit
/// value (and typically calls [`FieldEditor::set_committed`] back once it
/// has accepted it). `source` lets hosts treat resets differently from typed
/// edits, for example when deciding whether a reset should also save.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Edit {
    /// The new draft value.
    pub value: f64,
    /// Whether the edit came from the user or from a reset.
    pub source: EditSource,
}

/// Draft/commit controller for one schema-constrained numeric field.
///
/// The editor owns the schema, the derived input-surface [`Bounds`], and the
/// current [`Draft`]. The committed and default values are host-owned inputs
/// mirrored here read-only; the editor never writes them upstream — it only
/// reports [`Edit`]s and answers [`save`](Self::save).
///
/// Every operation is synchronous and applied in call order. Fields are
/// independent: no state is shared between editors.
#[derive(Clone, Debug)]
pub struct FieldEditor<S> {
    schema: S,
    bounds: Bounds,
    committed: f64,
    default: f64,
    draft: Draft,
}

impl<S: NumberSchema> FieldEditor<S> {
    /// Create an editor for a field whose committed value is `committed` and
    /// whose reset target is `default`.
    ///
    /// The initial draft mirrors the committed value. Bound extraction
    /// happens once here; a schema returning mis-kinded constraint entries
    /// is the only failure.
    pub fn new(schema: S, committed: f64, default: f64) -> Result<Self, SchemaIntegrityError> {
        let bounds = extract_bounds(&schema)?;
        let draft = Draft::new(&schema, committed);
        Ok(Self {
            schema,
            bounds,
            committed,
            default,
            draft,
        })
    }

    /// The schema this field validates against.
    pub fn schema(&self) -> &S {
        &self.schema
    }

    /// Clamping/stepping hints for the input surface. Hints only; they do
    /// not enforce validity.
    pub const fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// The current draft.
    pub const fn draft(&self) -> &Draft {
        &self.draft
    }

    /// The host-committed value this editor mirrors.
    pub const fn committed(&self) -> f64 {
        self.committed
    }

    /// The value [`reset`](Self::reset) returns the draft to.
    pub const fn default_value(&self) -> f64 {
        self.default
    }

    /// Resync after the committed value changed externally (for example,
    /// another actor updated it). Replaces the draft with a fresh one
    /// mirroring `committed`.
    pub fn set_committed(&mut self, committed: f64) {
        self.committed = committed;
        self.draft = Draft::new(&self.schema, committed);
    }

    /// Apply a numeric edit (slider, drag gesture) to the draft.
    ///
    /// The draft is revalidated but nothing is committed, and out-of-range
    /// values are not rejected here — a draft may legitimately be invalid
    /// pending further edits or an explicit save.
    pub fn edit_numeric(&mut self, value: f64) -> Edit {
        self.draft = self.draft.with_edit(&self.schema, value);
        Edit {
            value,
            source: EditSource::User,
        }
    }

    /// Apply a raw-text edit to the draft.
    ///
    /// Non-numeric text parses to `NaN`, which still becomes the draft value
    /// and fails validation with the schema's own message — there is no
    /// separate parse-error channel.
    pub fn edit_text(&mut self, raw: &str) -> Edit {
        self.edit_numeric(parse_text(raw))
    }

    /// Reset the draft to the default value.
    ///
    /// Presentation-only: the host decides whether a reset also saves, based
    /// on the returned [`Edit`]'s [`EditSource::Reset`].
    pub fn reset(&mut self) -> Edit {
        self.draft = self.draft.with_reset(&self.schema, self.default);
        Edit {
            value: self.default,
            source: EditSource::Reset,
        }
    }

    /// The value to persist on an explicit save action.
    ///
    /// This is the committed-level value, not the draft, and it is not gated
    /// on draft validity: save means "accept what the host currently shows
    /// as the field's value". Blocking invalid data is host policy (see
    /// [`FieldSet::any_invalid`](crate::FieldSet::any_invalid)), not a
    /// controller invariant.
    pub const fn save(&self) -> f64 {
        self.committed
    }

    /// Returns `true` if the committed value equals the default value.
    ///
    /// Compares committed against default, independent of the draft.
    pub fn is_default(&self) -> bool {
        self.committed == self.default
    }

    /// Returns `true` if the current draft satisfies the schema.
    pub const fn is_valid(&self) -> bool {
        self.draft.is_valid()
    }

    /// The first validation message for the current draft, if invalid.
    pub fn first_error(&self) -> Option<&str> {
        self.draft.first_message()
    }

    /// Default-ness and validity, packed for a labeled-row renderer.
    pub fn flags(&self) -> FieldFlags {
        let mut flags = FieldFlags::empty();
        if self.is_default() {
            flags |= FieldFlags::DEFAULT;
        }
        if self.is_valid() {
            flags |= FieldFlags::VALID;
        }
        flags
    }
}

/// Parse raw input-field text as a number; non-numeric text yields `NaN`.
fn parse_text(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use fieldwork_schema::NumberField;

    use super::*;

    fn crf_field() -> FieldEditor<NumberField> {
        let schema = NumberField::new().min(0.0).max(100.0).multiple_of(5.0);
        FieldEditor::new(schema, 10.0, 10.0).unwrap()
    }

    #[test]
    fn initial_draft_mirrors_committed() {
        let field = crf_field();
        assert_eq!(field.draft().value, 10.0);
        assert!(field.is_valid());
        assert!(field.is_default());
    }

    #[test]
    fn edit_numeric_updates_draft_and_revalidates() {
        let mut field = crf_field();

        let edit = field.edit_numeric(37.0);
        assert_eq!(edit, Edit { value: 37.0, source: EditSource::User });
        assert_eq!(field.draft().value, 37.0);
        assert!(!field.is_valid());
        assert_eq!(field.first_error(), Some("Number must be a multiple of 5"));

        field.edit_numeric(40.0);
        assert_eq!(field.draft().value, 40.0);
        assert!(field.is_valid());
        assert_eq!(field.first_error(), None);
    }

    #[test]
    fn out_of_range_edits_are_not_rejected() {
        let mut field = crf_field();
        field.edit_numeric(250.0);
        assert_eq!(field.draft().value, 250.0);
        assert!(!field.is_valid());
    }

    #[test]
    fn text_edits_parse_and_non_numeric_fails_validation() {
        let mut field = crf_field();

        field.edit_text(" 40 ");
        assert_eq!(field.draft().value, 40.0);
        assert!(field.is_valid());

        let edit = field.edit_text("abc");
        assert!(edit.value.is_nan());
        assert_eq!(edit.source, EditSource::User);
        assert!(field.draft().value.is_nan());
        assert!(!field.is_valid());
        assert_eq!(field.first_error(), Some("Expected a number"));
    }

    #[test]
    fn reset_restores_default_regardless_of_prior_draft() {
        let mut field = crf_field();
        field.edit_text("abc");

        let edit = field.reset();
        assert_eq!(edit, Edit { value: 10.0, source: EditSource::Reset });
        assert_eq!(field.draft().value, 10.0);
        assert!(field.is_valid());
    }

    #[test]
    fn is_default_compares_committed_to_default_not_draft() {
        let mut field = crf_field();
        assert!(field.is_default());

        // The draft changes; committed does not.
        field.edit_numeric(20.0);
        assert!(field.is_default());

        // The host accepts the edit: no longer default.
        field.set_committed(20.0);
        assert!(!field.is_default());
    }

    #[test]
    fn save_returns_committed_value_even_while_draft_is_invalid() {
        let mut field = crf_field();
        field.edit_numeric(37.0);
        assert!(!field.is_valid());

        // Save is not gated on validity and forwards the committed-level
        // value, not the draft.
        assert_eq!(field.save(), 10.0);
    }

    #[test]
    fn set_committed_resyncs_the_draft() {
        let mut field = crf_field();
        field.edit_numeric(37.0);

        field.set_committed(55.0);
        assert_eq!(field.committed(), 55.0);
        assert_eq!(field.draft().value, 55.0);
        assert!(field.is_valid());
        assert_eq!(field.save(), 55.0);
    }

    #[test]
    fn bounds_come_from_the_schema() {
        let field = crf_field();
        assert_eq!(field.bounds().min, Some(0.0));
        assert_eq!(field.bounds().max, Some(100.0));
        assert_eq!(field.bounds().step, Some(5.0));
    }

    #[test]
    fn flags_summarize_row_state() {
        let mut field = crf_field();
        assert_eq!(field.flags(), FieldFlags::DEFAULT | FieldFlags::VALID);

        field.edit_numeric(37.0);
        assert_eq!(field.flags(), FieldFlags::DEFAULT);

        field.set_committed(40.0);
        assert_eq!(field.flags(), FieldFlags::VALID);
    }

    #[test]
    fn mis_tagged_schema_fails_construction() {
        use fieldwork_schema::{Check, CheckKind, NumberSchema, Validation};

        struct Broken;
        impl NumberSchema for Broken {
            fn validate(&self, _value: f64) -> Validation {
                Validation::Valid
            }
            fn checks(&self) -> &[Check] {
                const CHECKS: [Check; 1] = [Check::max(10.0)];
                &CHECKS
            }
            fn check(&self, _kind: CheckKind) -> Option<&Check> {
                self.checks().first()
            }
        }

        assert!(FieldEditor::new(Broken, 0.0, 0.0).is_err());
    }
}

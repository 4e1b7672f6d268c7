// Copyright 2026 the Fieldwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Editing a codec's CRF setting: render-option tables + field editor.
//!
//! This example shows how to combine:
//! - `fieldwork_render_opts` for the valid CRF range and default per codec,
//! - `fieldwork_schema` to turn that range into a validating schema,
//! - `fieldwork_editor` for draft editing, bounds hints, reset, and save.
//!
//! Run:
//! - `cargo run -p fieldwork_demos --example crf_field`

use fieldwork_editor::{EditSource, FieldEditor};
use fieldwork_render_opts::{Codec, default_crf, valid_crf_range};
use fieldwork_schema::NumberField;

fn print_row(label: &str, field: &FieldEditor<NumberField>) {
    let status = if field.is_valid() { "ok" } else { "error" };
    println!(
        "  {label}: draft={} committed={} default?={} [{status}]",
        field.draft().value,
        field.committed(),
        field.is_default(),
    );
    if let Some(message) = field.first_error() {
        println!("    message: {message}");
    }
}

fn main() {
    let codec = Codec::H264;
    let range = valid_crf_range(codec).expect("h264 uses a rate factor");
    let default = f64::from(default_crf(codec).expect("h264 has a default crf"));

    // Build the field's schema from the codec's CRF table.
    let schema = NumberField::new()
        .min(f64::from(range.min))
        .max(f64::from(range.max))
        .int();

    let mut field = FieldEditor::new(schema, default, default).unwrap();

    let bounds = field.bounds();
    println!(
        "== CRF field for {} (min={:?} max={:?} step={:?}) ==",
        codec.as_str(),
        bounds.min,
        bounds.max,
        bounds.step,
    );
    print_row("initial", &field);

    // A drag gesture lands on a valid value; the host accepts the reported
    // edit and commits it at its own granularity.
    let edit = field.edit_numeric(23.0);
    assert_eq!(edit.source, EditSource::User);
    field.set_committed(edit.value);
    print_row("after drag to 23", &field);

    // The user types something that is not a number. The draft carries NaN
    // and validation surfaces the schema's message; editing is not blocked.
    field.edit_text("abc");
    print_row("after typing \"abc\"", &field);

    // An out-of-range typed value is also kept as the draft.
    field.edit_text("200");
    print_row("after typing \"200\"", &field);

    // Save forwards the committed-level value, not the invalid draft.
    println!("  save() forwards: {}", field.save());

    // Reset is presentation-only; this host also saves on reset.
    let edit = field.reset();
    if edit.source == EditSource::Reset {
        field.set_committed(edit.value);
    }
    print_row("after reset", &field);
}

// Copyright 2026 the Fieldwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A keyed collection of independent field editors.

use core::hash::Hash;

use hashbrown::HashMap;

use fieldwork_schema::NumberSchema;

use crate::FieldEditor;

/// Independent [`FieldEditor`]s keyed by a host-chosen field key.
///
/// Hosts editing a structured value (for example, a form over an object
/// schema) typically key fields by path. The set answers the aggregate
/// questions a form-level chrome needs — most importantly
/// [`any_invalid`](Self::any_invalid), the usual signal for disabling a
/// form-wide save action while some field's draft fails validation.
///
/// Editors in the set stay fully independent; the set never shares state
/// between them.
#[derive(Clone, Debug)]
pub struct FieldSet<K, S> {
    fields: HashMap<K, FieldEditor<S>>,
}

impl<K, S> Default for FieldSet<K, S> {
    fn default() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash, S: NumberSchema> FieldSet<K, S> {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the editor for `key`, returning the previous editor
    /// if one existed.
    pub fn insert(&mut self, key: K, editor: FieldEditor<S>) -> Option<FieldEditor<S>> {
        self.fields.insert(key, editor)
    }

    /// The editor for `key`, if present.
    pub fn get(&self, key: &K) -> Option<&FieldEditor<S>> {
        self.fields.get(key)
    }

    /// Mutable access to the editor for `key`, if present.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut FieldEditor<S>> {
        self.fields.get_mut(key)
    }

    /// Delete the field entirely, returning its editor if it existed.
    pub fn remove(&mut self, key: &K) -> Option<FieldEditor<S>> {
        self.fields.remove(key)
    }

    /// Number of fields in the set.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the set holds no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over all fields, in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &FieldEditor<S>)> {
        self.fields.iter()
    }

    /// Returns `true` if any field's draft currently fails validation.
    pub fn any_invalid(&self) -> bool {
        self.fields.values().any(|editor| !editor.is_valid())
    }

    /// Returns `true` if every field's committed value equals its default.
    pub fn all_default(&self) -> bool {
        self.fields.values().all(FieldEditor::is_default)
    }
}

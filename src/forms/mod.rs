//! Form validation and submission.
//!
//! Each form is a thin typed wrapper around a [`FormState`]: raw string
//! values keyed by field name, the current [`FieldErrors`], and the pending
//! flag that blocks a second submission while one is in flight.
//!
//! Validation follows the usual "validate on submit, re-validate on change"
//! pattern: editing a field does nothing until the first submit attempt,
//! after which every edit re-checks that field.
//!
//! | Module | Form |
//! |--------|------|
//! | [`contact`] | Contact page message |
//! | [`donation`] | Donation with preset amounts |
//! | [`login`] | Admin sign-in |
//! | [`submit`] | Gateway contract, simulated gateway, outcomes |

pub mod contact;
pub mod donation;
pub mod login;
pub mod schema;
pub mod submit;

use schema::{FieldErrors, Schema};
use std::collections::BTreeMap;

/// Raw input, errors and submission flags for one form instance.
#[derive(Debug, Clone)]
pub struct FormState {
    schema: &'static Schema,
    defaults: BTreeMap<&'static str, String>,
    values: BTreeMap<&'static str, String>,
    errors: FieldErrors,
    submit_attempted: bool,
    pending: bool,
}

impl FormState {
    /// Empty form; every schema field starts as `""`.
    pub fn new(schema: &'static Schema) -> Self {
        Self::with_defaults(schema, &[])
    }

    /// Form with some fields pre-filled. Defaults are restored by [`reset`](Self::reset).
    pub fn with_defaults(schema: &'static Schema, defaults: &[(&str, &str)]) -> Self {
        let defaults: BTreeMap<&'static str, String> = schema
            .fields
            .iter()
            .map(|spec| {
                let value = defaults
                    .iter()
                    .find(|(name, _)| *name == spec.name)
                    .map(|(_, v)| v.to_string())
                    .unwrap_or_default();
                (spec.name, value)
            })
            .collect();
        Self {
            schema,
            values: defaults.clone(),
            defaults,
            errors: FieldErrors::default(),
            submit_attempted: false,
            pending: false,
        }
    }

    pub fn schema(&self) -> &'static Schema {
        self.schema
    }

    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    /// Update a field. Returns `false` for names the schema doesn't define.
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> bool {
        let Some(spec) = self.schema.field(field) else {
            return false;
        };
        let value = value.into();
        if self.submit_attempted {
            match spec.check(&value) {
                Some(error) => self.errors.insert(error),
                None => self.errors.remove(spec.name),
            }
        }
        self.values.insert(spec.name, value);
        true
    }

    /// Put one field back to its default without flagging it.
    pub fn clear(&mut self, field: &str) {
        if let Some((name, default)) = self.defaults.get_key_value(field) {
            self.values.insert(*name, default.clone());
            self.errors.remove(field);
        }
    }

    /// Run the whole schema and remember that a submit was attempted.
    pub fn validate(&mut self) -> bool {
        self.submit_attempted = true;
        let values = &self.values;
        self.errors = self
            .schema
            .validate(|name| values.get(name).map(String::as_str));
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn submit_attempted(&self) -> bool {
        self.submit_attempted
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Mark a submission in flight. `false` if one already is.
    pub fn begin(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    pub fn finish(&mut self) {
        self.pending = false;
    }

    /// Restore defaults and forget errors and the submit attempt.
    pub fn reset(&mut self) {
        self.values = self.defaults.clone();
        self.errors = FieldErrors::default();
        self.submit_attempted = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schema::{Constraint, FieldSpec, Rule};

    static SCHEMA: Schema = Schema {
        fields: &[
            FieldSpec {
                name: "name",
                optional: false,
                constraints: &[Constraint {
                    rule: Rule::MinChars(2),
                    message: "common:validation.nameRequired",
                }],
            },
            FieldSpec {
                name: "note",
                optional: true,
                constraints: &[],
            },
        ],
    };

    #[test]
    fn edits_do_not_validate_before_first_submit() {
        let mut form = FormState::new(&SCHEMA);
        form.set("name", "J");
        assert!(form.errors().is_empty());
    }

    #[test]
    fn edits_revalidate_after_submit_attempt() {
        let mut form = FormState::new(&SCHEMA);
        assert!(!form.validate());
        assert!(form.errors().get("name").is_some());

        form.set("name", "Jo");
        assert!(form.errors().get("name").is_none());

        form.set("name", "J");
        assert!(form.errors().get("name").is_some());
    }

    #[test]
    fn unknown_field_is_rejected() {
        let mut form = FormState::new(&SCHEMA);
        assert!(!form.set("nickname", "x"));
        assert_eq!(form.value("nickname"), "");
    }

    #[test]
    fn reset_restores_defaults() {
        let mut form = FormState::with_defaults(&SCHEMA, &[("note", "hola")]);
        form.set("name", "Ana");
        form.set("note", "cambio");
        form.validate();
        form.reset();
        assert_eq!(form.value("name"), "");
        assert_eq!(form.value("note"), "hola");
        assert!(!form.submit_attempted());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn clear_does_not_flag_field() {
        let mut form = FormState::new(&SCHEMA);
        form.set("name", "Ana");
        form.validate();
        form.clear("name");
        assert_eq!(form.value("name"), "");
        assert!(form.errors().is_empty());
    }

    #[test]
    fn begin_blocks_second_submission_until_finish() {
        let mut form = FormState::new(&SCHEMA);
        assert!(form.begin());
        assert!(form.is_pending());
        assert!(!form.begin());
        form.finish();
        assert!(!form.is_pending());
        assert!(form.begin());
    }
}

//! Form controller
//!
//! Owns the value bag for one form instance. Edits revalidate the
//! touched field immediately ("all" mode), submit revalidates every
//! field and only hands the values back when the error bag is clean.

use std::collections::BTreeMap;

use super::rules::{FieldSchema, validate_field};

/// Value bag + error bag for one form
#[derive(Debug, Clone)]
pub struct FormState {
    fields: &'static [FieldSchema],
    values: BTreeMap<&'static str, String>,
    defaults: BTreeMap<&'static str, String>,
    errors: BTreeMap<&'static str, String>,
}

impl FormState {
    /// Blank form: every field starts empty
    pub fn new(fields: &'static [FieldSchema]) -> Self {
        let defaults: BTreeMap<_, _> = fields
            .iter()
            .map(|field| (field.name, String::new()))
            .collect();
        Self {
            fields,
            values: defaults.clone(),
            defaults,
            errors: BTreeMap::new(),
        }
    }

    /// Form seeded with defaults, e.g. a create template or an
    /// entity snapshot for editing. Unknown keys are ignored.
    pub fn with_defaults(
        fields: &'static [FieldSchema],
        seed: impl IntoIterator<Item = (&'static str, String)>,
    ) -> Self {
        let mut form = Self::new(fields);
        for (name, value) in seed {
            if form.defaults.contains_key(name) {
                form.defaults.insert(name, value.clone());
                form.values.insert(name, value);
            }
        }
        form
    }

    /// Write one field and revalidate it. A field that becomes valid
    /// sheds its error right away, without a resubmission.
    pub fn set_value(&mut self, name: &'static str, value: String) {
        if !self.defaults.contains_key(name) {
            return;
        }
        self.values.insert(name, value);
        self.revalidate(name);
    }

    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or_default()
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Restore the value bag to its last-set defaults
    pub fn reset(&mut self) {
        self.values = self.defaults.clone();
        self.errors.clear();
    }

    /// Validate every field; return the values only when all pass
    pub fn submit(&mut self) -> Option<BTreeMap<&'static str, String>> {
        self.errors.clear();
        for field in self.fields {
            if let Some(message) = validate_field(field, self.value(field.name)) {
                self.errors.insert(field.name, message);
            }
        }
        if self.errors.is_empty() {
            Some(self.values.clone())
        } else {
            None
        }
    }

    fn revalidate(&mut self, name: &'static str) {
        let Some(field) = self.fields.iter().find(|f| f.name == name) else {
            return;
        };
        match validate_field(field, self.value(name)) {
            Some(message) => {
                self.errors.insert(name, message);
            }
            None => {
                self.errors.remove(name);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::rules::Rule;

    const FIELDS: &[FieldSchema] = &[
        FieldSchema {
            name: "email",
            label: "Email",
            rules: &[Rule::Required, Rule::Email],
        },
        FieldSchema {
            name: "password",
            label: "Password",
            rules: &[Rule::Required],
        },
    ];

    #[test]
    fn submit_blocks_while_required_fields_are_empty() {
        let mut form = FormState::new(FIELDS);
        assert!(form.submit().is_none());
        assert_eq!(form.error("email"), Some("Email is required"));
        assert_eq!(form.error("password"), Some("Password is required"));
    }

    #[test]
    fn filling_a_field_clears_its_error_without_resubmission() {
        let mut form = FormState::new(FIELDS);
        assert!(form.submit().is_none());

        form.set_value("email", "ops@example.com".to_string());
        assert_eq!(form.error("email"), None);
        // The untouched field keeps its error
        assert_eq!(form.error("password"), Some("Password is required"));
    }

    #[test]
    fn editing_revalidates_on_every_change() {
        let mut form = FormState::new(FIELDS);
        form.set_value("email", "not-an-email".to_string());
        assert_eq!(form.error("email"), Some("Email must be a valid email"));
        form.set_value("email", "ops@example.com".to_string());
        assert_eq!(form.error("email"), None);
    }

    #[test]
    fn submit_returns_the_value_bag_once_clean() {
        let mut form = FormState::new(FIELDS);
        form.set_value("email", "ops@example.com".to_string());
        form.set_value("password", "hunter2".to_string());
        let values = form.submit().expect("form should be valid");
        assert_eq!(values.get("email").map(String::as_str), Some("ops@example.com"));
    }

    #[test]
    fn reset_restores_the_seeded_defaults() {
        let mut form = FormState::with_defaults(
            FIELDS,
            [("email", "seed@example.com".to_string())],
        );
        form.set_value("email", "changed@example.com".to_string());
        form.reset();
        assert_eq!(form.value("email"), "seed@example.com");
        assert!(!form.has_errors());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let mut form = FormState::new(FIELDS);
        form.set_value("bogus", "x".to_string());
        assert_eq!(form.value("bogus"), "");
        assert!(!form.has_errors());
    }
}

//! Create and update forms.
//!
//! A form is a list of [`FormField`]s plus one text buffer per field.
//! [`FormState::validate`] turns the buffers into a [`Record`], enforcing
//! required fields and per-kind parsing.

use crate::model::{EntityKind, Record, Value, ID_FIELD};
use crate::utils::datetime::{format_ymd, parse_date_like};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{field} is required")]
    MissingRequired { field: String },
    #[error("{field}: '{value}' is not a number")]
    InvalidNumber { field: String, value: String },
    #[error("{field}: '{value}' is not a date (expected YYYY-MM-DD)")]
    InvalidDate { field: String, value: String },
    #[error("{field}: '{value}' is not one of the allowed values")]
    InvalidOption { field: String, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Text,
    Number,
    Date,
    Select(Vec<String>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub key: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
}

impl FormField {
    fn new(key: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            kind,
            required: false,
        }
    }

    pub fn text(key: &str, label: &str) -> Self {
        Self::new(key, label, FieldKind::Text)
    }

    pub fn number(key: &str, label: &str) -> Self {
        Self::new(key, label, FieldKind::Number)
    }

    pub fn date(key: &str, label: &str) -> Self {
        Self::new(key, label, FieldKind::Date)
    }

    pub fn select(key: &str, label: &str, options: &[&str]) -> Self {
        Self::new(key, label, FieldKind::Select(options.iter().map(|o| o.to_string()).collect()))
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Parse one input buffer into a field value. Empty optional input
    /// becomes `Value::Null`.
    pub fn parse(&self, input: &str) -> Result<Value, FormError> {
        let input = input.trim();
        if input.is_empty() {
            return if self.required {
                Err(FormError::MissingRequired {
                    field: self.label.clone(),
                })
            } else {
                Ok(Value::Null)
            };
        }

        match &self.kind {
            FieldKind::Text => Ok(Value::text(input)),
            FieldKind::Number => input
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(Value::Number)
                .ok_or_else(|| FormError::InvalidNumber {
                    field: self.label.clone(),
                    value: input.to_string(),
                }),
            FieldKind::Date => parse_date_like(input)
                .map(|date| Value::Text(format_ymd(date)))
                .ok_or_else(|| FormError::InvalidDate {
                    field: self.label.clone(),
                    value: input.to_string(),
                }),
            FieldKind::Select(options) => options
                .iter()
                .find(|option| option.as_str() == input)
                .map(|option| Value::text(option.as_str()))
                .ok_or_else(|| FormError::InvalidOption {
                    field: self.label.clone(),
                    value: input.to_string(),
                }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update(String),
}

/// Input state of an open create/update form
#[derive(Debug, Clone)]
pub struct FormState {
    pub kind: EntityKind,
    pub mode: FormMode,
    fields: Vec<FormField>,
    inputs: Vec<String>,
    focus: usize,
    base: Record,
}

impl FormState {
    /// Empty form; select fields start on their first option
    pub fn create(kind: EntityKind, fields: Vec<FormField>) -> Self {
        let inputs = fields
            .iter()
            .map(|field| match &field.kind {
                FieldKind::Select(options) => options.first().cloned().unwrap_or_default(),
                _ => String::new(),
            })
            .collect();
        Self {
            kind,
            mode: FormMode::Create,
            fields,
            inputs,
            focus: 0,
            base: Record::new(),
        }
    }

    /// Form prefilled from an existing record. Fields not on the form are
    /// carried over unchanged on save.
    pub fn edit(kind: EntityKind, fields: Vec<FormField>, record: &Record) -> Self {
        let inputs = fields.iter().map(|field| record.text(&field.key)).collect();
        Self {
            kind,
            mode: FormMode::Update(record.text(ID_FIELD)),
            fields,
            inputs,
            focus: 0,
            base: record.clone(),
        }
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn input(&self, index: usize) -> &str {
        self.inputs.get(index).map(String::as_str).unwrap_or_default()
    }

    pub fn value_of(&self, key: &str) -> Option<&str> {
        let index = self.fields.iter().position(|field| field.key == key)?;
        Some(self.input(index))
    }

    pub fn set_value(&mut self, key: &str, value: impl Into<String>) {
        if let Some(index) = self.fields.iter().position(|field| field.key == key) {
            self.inputs[index] = value.into();
        }
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn focused_field(&self) -> Option<&FormField> {
        self.fields.get(self.focus)
    }

    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + 1) % self.fields.len();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
        }
    }

    /// Type into the focused field; select fields ignore typing
    pub fn push_char(&mut self, c: char) {
        if let Some(field) = self.fields.get(self.focus) {
            if !matches!(field.kind, FieldKind::Select(_)) {
                self.inputs[self.focus].push(c);
            }
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.fields.get(self.focus) {
            if !matches!(field.kind, FieldKind::Select(_)) {
                self.inputs[self.focus].pop();
            }
        }
    }

    /// Step the focused select field to its next (or previous) option
    pub fn cycle_option(&mut self, forward: bool) {
        let Some(FormField {
            kind: FieldKind::Select(options),
            ..
        }) = self.fields.get(self.focus)
        else {
            return;
        };
        if options.is_empty() {
            return;
        }
        let current = options.iter().position(|o| *o == self.inputs[self.focus]);
        let next = match (current, forward) {
            (Some(i), true) => (i + 1) % options.len(),
            (Some(i), false) => (i + options.len() - 1) % options.len(),
            (None, _) => 0,
        };
        self.inputs[self.focus] = options[next].clone();
    }

    /// Id of the record being edited, `None` when creating
    pub fn editing_id(&self) -> Option<&str> {
        match &self.mode {
            FormMode::Create => None,
            FormMode::Update(id) => Some(id),
        }
    }

    /// Build the record to save under `id`; the first failing field wins.
    pub fn validate(&self, id: &str) -> Result<Record, FormError> {
        let mut record = self.base.clone();
        record.set(ID_FIELD, id);
        for (field, input) in self.fields.iter().zip(&self.inputs) {
            record.set(field.key.clone(), field.parse(input)?);
        }
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> Vec<FormField> {
        vec![
            FormField::text("name", "Name").required(),
            FormField::number("price", "Price").required(),
            FormField::date("launched", "Launched"),
            FormField::select("status", "Status", &["active", "inactive"]),
        ]
    }

    #[test]
    fn create_form_validates_into_record() {
        let mut form = FormState::create(EntityKind::Product, fields());
        form.set_value("name", "Desk Lamp");
        form.set_value("price", "49.5");
        form.set_value("launched", "2024-02-01");

        let record = form.validate("PROD010").unwrap();
        assert_eq!(record.text("id"), "PROD010");
        assert_eq!(record.number("price"), Some(49.5));
        assert_eq!(record.text("status"), "active");
    }

    #[test]
    fn required_fields_are_enforced() {
        let form = FormState::create(EntityKind::Product, fields());
        assert_eq!(
            form.validate("PROD010"),
            Err(FormError::MissingRequired {
                field: "Name".to_string()
            })
        );
    }

    #[test]
    fn bad_number_and_date_are_rejected() {
        let mut form = FormState::create(EntityKind::Product, fields());
        form.set_value("name", "Lamp");
        form.set_value("price", "cheap");
        assert!(matches!(form.validate("X"), Err(FormError::InvalidNumber { .. })));

        form.set_value("price", "10");
        form.set_value("launched", "soon");
        assert!(matches!(form.validate("X"), Err(FormError::InvalidDate { .. })));
    }

    #[test]
    fn edit_keeps_fields_outside_the_form() {
        let original = Record::new()
            .with("id", "PROD001")
            .with("name", "Lamp")
            .with("price", 10.0)
            .with("vendor", "Acme");
        let mut form = FormState::edit(EntityKind::Product, fields(), &original);
        assert_eq!(form.editing_id(), Some("PROD001"));
        form.set_value("name", "Brass Lamp");

        let record = form.validate("PROD001").unwrap();
        assert_eq!(record.text("name"), "Brass Lamp");
        assert_eq!(record.text("vendor"), "Acme");
    }

    #[test]
    fn select_fields_cycle_and_ignore_typing() {
        let mut form = FormState::create(EntityKind::Product, fields());
        for _ in 0..3 {
            form.focus_next();
        }
        form.push_char('x');
        assert_eq!(form.value_of("status"), Some("active"));
        form.cycle_option(true);
        assert_eq!(form.value_of("status"), Some("inactive"));
        form.cycle_option(true);
        assert_eq!(form.value_of("status"), Some("active"));
    }
}

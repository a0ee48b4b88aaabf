//! Form state managers
//!
//! [`FormState`] tracks values, per-field errors and a submission status for
//! one form. The concrete forms plug in through [`FormFields`]:
//!
//! - [`ContactMessage`](crate::models::ContactMessage): name, email, message
//! - [`ReservationDraft`]: date, time, guests, name, phone
//! - [`CheckoutDraft`]: delivery address and payment, wrapped by [`OrderForm`]
//!
//! Submission is two-phase. [`FormState::prepare_submit`] validates and
//! builds the typed record without touching the form; the caller persists it,
//! then [`FormState::complete_submit`] resets the form. [`FormState::on_submit`]
//! does both at once.

mod checkout;
mod contact;
mod order;
mod reservation;

pub use checkout::CheckoutDraft;
pub use order::{OrderForm, OrderSnapshot};
pub use reservation::ReservationDraft;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::validation::{Field, ValidationContext, validate_field};

/// Message returned when a submission fails field validation
pub const FORM_INVALID_MESSAGE: &str = "Please fix the errors in the form.";

/// Submission status of a form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormStatus {
    #[default]
    Idle,
    /// Last submission attempt failed validation
    Invalid,
    /// Last submission succeeded; cleared by the success banner timer
    Submitted,
}

/// Per-field error text, empty string meaning no error
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    /// One empty entry per field
    pub fn empty(fields: &[Field]) -> Self {
        Self(fields.iter().map(|f| (*f, String::new())).collect())
    }

    pub fn get(&self, field: Field) -> &str {
        self.0.get(&field).map(String::as_str).unwrap_or_default()
    }

    pub fn set(&mut self, field: Field, message: String) {
        self.0.insert(field, message);
    }

    pub fn is_clear(&self) -> bool {
        self.0.values().all(String::is_empty)
    }

    /// Only the fields that currently carry an error
    pub fn failing(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0
            .iter()
            .filter(|(_, message)| !message.is_empty())
            .map(|(field, message)| (*field, message.as_str()))
    }

    fn failing_json(&self) -> Value {
        let map = self
            .failing()
            .map(|(field, message)| (field.to_string(), Value::String(message.to_string())))
            .collect::<serde_json::Map<_, _>>();
        Value::Object(map)
    }
}

/// Field set of one concrete form
pub trait FormFields: Default + Clone + Send + 'static {
    /// Typed value produced by a successful submission
    type Record;

    /// Fields tracked by this form, all required
    const FIELDS: &'static [Field];

    fn value(&self, field: Field) -> &str;

    /// Only called with members of [`Self::FIELDS`]
    fn set_value(&mut self, field: Field, value: String);

    /// Build the record from values that passed validation
    fn to_record(&self) -> AppResult<Self::Record>;
}

/// Status hooks used by the success banner
pub trait FormLifecycle {
    fn status(&self) -> FormStatus;

    /// `Submitted -> Idle`, otherwise a no-op
    fn clear_submitted(&mut self);
}

/// Values, errors and status of one form
#[derive(Debug, Clone)]
pub struct FormState<F: FormFields> {
    values: F,
    errors: FieldErrors,
    status: FormStatus,
}

impl<F: FormFields> Default for FormState<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FormFields> FormState<F> {
    pub fn new() -> Self {
        Self {
            values: F::default(),
            errors: FieldErrors::empty(F::FIELDS),
            status: FormStatus::Idle,
        }
    }

    pub fn values(&self) -> &F {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn tracks(field: Field) -> bool {
        F::FIELDS.contains(&field)
    }

    /// Store `value` and recompute only that field's error
    ///
    /// Returns the new error text for the field.
    pub fn on_field_change(
        &mut self,
        field: Field,
        value: impl Into<String>,
        ctx: &ValidationContext,
    ) -> AppResult<&str> {
        if !Self::tracks(field) {
            return Err(AppError::invalid_request(format!(
                "Field {field} does not belong to this form"
            )));
        }

        let value = value.into();
        let message = validate_field(field, &value, ctx);
        self.values.set_value(field, value);
        self.errors.set(field, message);
        if self.status == FormStatus::Invalid {
            self.status = FormStatus::Idle;
        }
        Ok(self.errors.get(field))
    }

    /// Every error empty and every field filled in
    pub fn can_submit(&self) -> bool {
        self.errors.is_clear() && F::FIELDS.iter().all(|f| !self.values.value(*f).is_empty())
    }

    /// Validate every field and build the record; the form keeps its values
    pub fn prepare_submit(&mut self, ctx: &ValidationContext) -> AppResult<F::Record> {
        let mut errors = FieldErrors::empty(F::FIELDS);
        for field in F::FIELDS {
            errors.set(*field, validate_field(*field, self.values.value(*field), ctx));
        }
        self.errors = errors;

        if !self.errors.is_clear() {
            self.status = FormStatus::Invalid;
            return Err(AppError::validation(FORM_INVALID_MESSAGE)
                .with_detail("fields", self.errors.failing_json()));
        }
        self.values.to_record()
    }

    /// Reset values and errors after the record was accepted
    pub fn complete_submit(&mut self) {
        self.values = F::default();
        self.errors = FieldErrors::empty(F::FIELDS);
        self.status = FormStatus::Submitted;
    }

    pub fn on_submit(&mut self, ctx: &ValidationContext) -> AppResult<F::Record> {
        let record = self.prepare_submit(ctx)?;
        self.complete_submit();
        Ok(record)
    }

    pub fn snapshot(&self) -> FormSnapshot<F>
    where
        F: Serialize,
    {
        FormSnapshot {
            values: self.values.clone(),
            errors: self.errors.clone(),
            can_submit: self.can_submit(),
            status: self.status,
        }
    }
}

impl<F: FormFields> FormLifecycle for FormState<F> {
    fn status(&self) -> FormStatus {
        self.status
    }

    fn clear_submitted(&mut self) {
        if self.status == FormStatus::Submitted {
            self.status = FormStatus::Idle;
        }
    }
}

/// Read-only view of a form
#[derive(Debug, Clone, Serialize)]
pub struct FormSnapshot<F> {
    pub values: F,
    pub errors: FieldErrors,
    pub can_submit: bool,
    pub status: FormStatus,
}

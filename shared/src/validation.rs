//! Presence and format checks for the auth forms.
//!
//! The rules live on the payload types as `validator` derives; this module
//! runs them against a form snapshot and reduces the result to one message
//! per field.

use validator::{Validate, ValidationError, ValidationErrors};

use crate::api::{LoginData, RegisterData};
use crate::models::{Field, FieldErrors, FormKind, FormValues};

/// Validate a snapshot of `values` for the given form.
///
/// Returns an empty [`FieldErrors`] when every check passes.
pub fn validate(kind: FormKind, values: &FormValues) -> FieldErrors {
    let result = match kind {
        FormKind::Login => LoginData::from_values(values, false).validate(),
        FormKind::Register => RegisterData::from_values(values).validate(),
    };

    match result {
        Ok(()) => FieldErrors::new(),
        Err(errors) => collect_messages(&errors),
    }
}

fn collect_messages(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(key, field_errors)| {
            let field = Field::from_key(key)?;
            let first = field_errors.iter().min_by_key(|e| rule_rank(e))?;
            Some((field, message_for(field, first)))
        })
        .collect()
}

// A missing value is reported before any shape or equality check.
fn rule_rank(error: &ValidationError) -> u8 {
    match error.code.as_ref() {
        "length" => 0,
        _ => 1,
    }
}

fn message_for(field: Field, error: &ValidationError) -> String {
    error
        .message
        .as_deref()
        .map(str::to_string)
        .unwrap_or_else(|| format!("{} is invalid", field))
}

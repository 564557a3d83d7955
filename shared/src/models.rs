use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single input on one of the auth forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
        }
    }

    /// Map a payload struct field name (snake_case) back to the form field.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "name" => Some(Field::Name),
            "email" => Some(Field::Email),
            "password" => Some(Field::Password),
            "confirm_password" | "confirmPassword" => Some(Field::ConfirmPassword),
            _ => None,
        }
    }

    /// Fields whose contents are masked until the user reveals them.
    pub fn is_obscured(&self) -> bool {
        matches!(self, Field::Password | Field::ConfirmPassword)
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Name => "Full Name",
            Field::Email => "Email",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm Password",
        }
    }

    pub fn input_type(&self) -> &'static str {
        match self {
            Field::Name => "text",
            Field::Email => "email",
            Field::Password | Field::ConfirmPassword => "password",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which auth form is being rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    Login,
    Register,
}

impl FormKind {
    pub fn fields(&self) -> &'static [Field] {
        match self {
            FormKind::Login => &[Field::Email, Field::Password],
            FormKind::Register => &[
                Field::Name,
                Field::Email,
                Field::Password,
                Field::ConfirmPassword,
            ],
        }
    }

    pub fn has_field(&self, field: Field) -> bool {
        self.fields().contains(&field)
    }

    pub fn title(&self) -> &'static str {
        match self {
            FormKind::Login => "Welcome Back",
            FormKind::Register => "Create Account",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            FormKind::Login => "Sign in to continue your Study Planner",
            FormKind::Register => "Sign up to get started with Study Planner",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            FormKind::Login => "Sign In",
            FormKind::Register => "Create Account",
        }
    }

    pub fn loading_label(&self) -> &'static str {
        match self {
            FormKind::Login => "Signing In...",
            FormKind::Register => "Creating Account...",
        }
    }

    /// The opposite form, used by the switch links and the demo toggle.
    pub fn other(&self) -> Self {
        match self {
            FormKind::Login => FormKind::Register,
            FormKind::Register => FormKind::Login,
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormKind::Login => f.write_str("Login"),
            FormKind::Register => f.write_str("Register"),
        }
    }
}

/// Current user-entered values for one form instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues(BTreeMap<Field, String>);

impl FormValues {
    /// Empty values for every field of `kind`.
    pub fn empty(kind: FormKind) -> Self {
        Self(
            kind.fields()
                .iter()
                .map(|field| (*field, String::new()))
                .collect(),
        )
    }

    /// Value of `field`, or `""` when the field was never set.
    pub fn get(&self, field: Field) -> &str {
        self.0.get(&field).map(String::as_str).unwrap_or_default()
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.0.insert(field, value.into());
    }
}

impl<S: Into<String>> FromIterator<(Field, S)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (Field, S)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(field, value)| (field, value.into()))
                .collect(),
        )
    }
}

/// Validation messages keyed by field. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn remove(&mut self, field: Field) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }
}

impl<S: Into<String>> FromIterator<(Field, S)> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = (Field, S)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(field, message)| (field, message.into()))
                .collect(),
        )
    }
}

/// Masked/plain state for the obscured fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Visibility {
    password: bool,
    confirm_password: bool,
}

impl Visibility {
    /// Flip the flag for `field`. Fields that are never masked are ignored.
    pub fn toggle(&mut self, field: Field) {
        match field {
            Field::Password => self.password = !self.password,
            Field::ConfirmPassword => self.confirm_password = !self.confirm_password,
            Field::Name | Field::Email => {}
        }
    }

    pub fn is_revealed(&self, field: Field) -> bool {
        match field {
            Field::Password => self.password,
            Field::ConfirmPassword => self.confirm_password,
            Field::Name | Field::Email => true,
        }
    }

    /// The `type` attribute the input should render with.
    pub fn input_type(&self, field: Field) -> &'static str {
        if field.is_obscured() && self.is_revealed(field) {
            "text"
        } else {
            field.input_type()
        }
    }
}

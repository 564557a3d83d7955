//! Form state and validation shared by the Study Planner auth screens.

pub mod api;
pub mod form;
pub mod models;
pub mod validation;

pub use form::{AuthForm, FormPhase, SubmitFailure, SubmitOutcome, SubmitResult};
pub use models::{Field, FieldErrors, FormKind, FormValues, Visibility};

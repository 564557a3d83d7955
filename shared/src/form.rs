//! Interaction state for one rendered auth form.
//!
//! [`AuthForm`] owns the field store, visibility flags and the submission
//! lifecycle. It never performs I/O; the embedding layer supplies the submit
//! callback and reports completion back through [`AuthForm::complete`].

use thiserror::Error;

use crate::api::{LoginData, RegisterData};
use crate::models::{Field, FieldErrors, FormKind, FormValues, Visibility};
use crate::validation::validate;

/// Message shown after the submit boundary reports a failure.
pub const SUBMIT_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Failure signalled by the external submit boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitFailure {
    #[error("request failed: {0}")]
    Network(String),

    #[error("credentials rejected: {0}")]
    Rejected(String),
}

pub type SubmitResult = Result<(), SubmitFailure>;

/// Submission lifecycle. `Validating` only exists inside a single submit call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Validating,
    Invalid,
    Submitting,
}

/// What a submit gesture led to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; the errors were written into the store.
    Rejected(FieldErrors),
    /// Values were valid and handed to the submit boundary.
    Dispatched(FormValues),
    /// A submission is already in flight.
    Busy,
}

/// Values and per-field errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldStore {
    kind: FormKind,
    values: FormValues,
    errors: FieldErrors,
}

impl FieldStore {
    pub fn new(kind: FormKind) -> Self {
        Self {
            kind,
            values: FormValues::empty(kind),
            errors: FieldErrors::new(),
        }
    }

    /// Overwrite `field` and drop any error currently shown for it.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        if !self.kind.has_field(field) {
            tracing::debug!("ignoring edit of {} on {} form", field, self.kind);
            return;
        }
        self.values.set(field, value);
        self.errors.remove(field);
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    fn set_errors(&mut self, errors: FieldErrors) {
        self.errors = errors;
    }

    fn reset(&mut self) {
        self.values = FormValues::empty(self.kind);
        self.errors = FieldErrors::new();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthForm {
    kind: FormKind,
    store: FieldStore,
    visibility: Visibility,
    remember: bool,
    phase: FormPhase,
    pending: Option<FormValues>,
    failure: Option<String>,
}

impl AuthForm {
    pub fn new(kind: FormKind) -> Self {
        Self {
            kind,
            store: FieldStore::new(kind),
            visibility: Visibility::default(),
            remember: false,
            phase: FormPhase::Idle,
            pending: None,
            failure: None,
        }
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn values(&self) -> &FormValues {
        self.store.values()
    }

    pub fn value(&self, field: Field) -> &str {
        self.store.values().get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        self.store.errors()
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.store.errors().get(field)
    }

    pub fn is_loading(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    pub fn remember(&self) -> bool {
        self.remember
    }

    pub fn visibility(&self) -> &Visibility {
        &self.visibility
    }

    /// Snapshot handed to the submit boundary for the in-flight attempt.
    pub fn pending_submission(&self) -> Option<&FormValues> {
        self.pending.as_ref()
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.store.set(field, value);
        self.failure = None;
        if self.phase == FormPhase::Invalid {
            self.phase = FormPhase::Idle;
        }
    }

    pub fn set_remember(&mut self, remember: bool) {
        self.remember = remember;
    }

    pub fn toggle_visibility(&mut self, field: Field) {
        self.visibility.toggle(field);
    }

    /// Validate and, when valid, enter `Submitting` holding the snapshot.
    ///
    /// Nothing is invoked here; callers that emit the submit callback later
    /// read it back from [`AuthForm::pending_submission`].
    pub fn begin_submit(&mut self) -> SubmitOutcome {
        if self.is_loading() {
            tracing::debug!("{} submit ignored while a submission is in flight", self.kind);
            return SubmitOutcome::Busy;
        }

        self.failure = None;
        self.phase = FormPhase::Validating;
        let errors = validate(self.kind, self.store.values());

        if !errors.is_empty() {
            tracing::debug!(
                "{} form invalid: {:?}",
                self.kind,
                errors.fields().collect::<Vec<_>>()
            );
            self.store.set_errors(errors.clone());
            self.phase = FormPhase::Invalid;
            return SubmitOutcome::Rejected(errors);
        }

        self.store.set_errors(FieldErrors::new());
        let snapshot = self.store.values().clone();
        self.pending = Some(snapshot.clone());
        self.phase = FormPhase::Submitting;
        tracing::debug!("{} form submitting", self.kind);

        SubmitOutcome::Dispatched(snapshot)
    }

    /// Run a submit gesture, invoking `on_submit` once if the values are valid.
    ///
    /// The loading flag is already set when `on_submit` runs.
    pub fn submit<F>(&mut self, on_submit: F) -> SubmitOutcome
    where
        F: FnOnce(FormValues),
    {
        let outcome = self.begin_submit();
        if let SubmitOutcome::Dispatched(values) = &outcome {
            on_submit(values.clone());
        }
        outcome
    }

    /// Record the submit boundary's completion signal.
    pub fn complete(&mut self, result: SubmitResult) {
        if self.phase != FormPhase::Submitting {
            tracing::warn!("{} completion received with no submission in flight", self.kind);
            return;
        }

        self.pending = None;
        self.phase = FormPhase::Idle;

        match result {
            Ok(()) => {
                tracing::debug!("{} submission completed", self.kind);
                self.store.reset();
                self.failure = None;
            }
            Err(e) => {
                tracing::warn!("{} submission failed: {}", self.kind, e);
                self.failure = Some(SUBMIT_FAILURE_MESSAGE.to_string());
            }
        }
    }

    pub fn login_data(&self) -> LoginData {
        LoginData::from_values(self.store.values(), self.remember)
    }

    pub fn register_data(&self) -> RegisterData {
        RegisterData::from_values(self.store.values())
    }
}

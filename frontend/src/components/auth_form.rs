//! Login/register form bound to the shared [`AuthForm`] state machine.
//!
//! The component owns the form state through a reducer. Valid submissions are
//! handed to the parent as a [`SubmitRequest`]; the parent reports back through
//! `done`, which clears the loading state.

use std::rc::Rc;

use shared::{AuthForm, Field, FormKind, FormValues, SubmitOutcome, SubmitResult};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::field_input::FieldInput;

/// Handed to the submit boundary. `done` must be emitted exactly once.
#[derive(Clone)]
pub struct SubmitRequest {
    pub kind: FormKind,
    pub values: FormValues,
    pub remember: bool,
    pub done: Callback<SubmitResult>,
}

pub enum FormAction {
    Edit(Field, String),
    ToggleVisibility(Field),
    SetRemember(bool),
    Submit,
    Complete(SubmitResult),
}

#[derive(Clone, PartialEq)]
pub struct FormState {
    form: AuthForm,
    // Bumped on every dispatched submission so the effect below fires once per attempt.
    attempt: u32,
}

impl FormState {
    fn new(kind: FormKind) -> Self {
        Self {
            form: AuthForm::new(kind),
            attempt: 0,
        }
    }
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::Edit(field, value) => next.form.set(field, value),
            FormAction::ToggleVisibility(field) => next.form.toggle_visibility(field),
            FormAction::SetRemember(remember) => next.form.set_remember(remember),
            FormAction::Submit => {
                if let SubmitOutcome::Dispatched(_) = next.form.begin_submit() {
                    next.attempt += 1;
                }
            }
            FormAction::Complete(result) => next.form.complete(result),
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthFormProps {
    pub kind: FormKind,
    pub on_submit: Callback<SubmitRequest>,
    /// Asks the parent to show the other form.
    pub on_switch: Callback<FormKind>,
}

#[function_component(AuthFormView)]
pub fn auth_form_view(props: &AuthFormProps) -> Html {
    let kind = props.kind;
    let state = use_reducer(move || FormState::new(kind));

    // Hand each dispatched snapshot to the submit boundary.
    {
        let state = state.clone();
        let on_submit = props.on_submit.clone();
        use_effect_with(state.attempt, move |_| {
            if let Some(values) = state.form.pending_submission() {
                let dispatcher = state.dispatcher();
                on_submit.emit(SubmitRequest {
                    kind: state.form.kind(),
                    values: values.clone(),
                    remember: state.form.remember(),
                    done: Callback::from(move |result: SubmitResult| {
                        dispatcher.dispatch(FormAction::Complete(result))
                    }),
                });
            }
            || ()
        });
    }

    let onsubmit = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            dispatcher.dispatch(FormAction::Submit);
        })
    };

    let on_remember = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(FormAction::SetRemember(input.checked()));
        })
    };

    let on_switch = {
        let on_switch = props.on_switch.clone();
        let other = kind.other();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_switch.emit(other);
        })
    };

    let form = &state.form;
    let loading = form.is_loading();

    let fields = kind
        .fields()
        .iter()
        .map(|&field| {
            let on_input = {
                let dispatcher = state.dispatcher();
                Callback::from(move |value: String| {
                    dispatcher.dispatch(FormAction::Edit(field, value))
                })
            };
            let (revealed, on_toggle) = if field.is_obscured() {
                let dispatcher = state.dispatcher();
                (
                    Some(form.visibility().is_revealed(field)),
                    Some(Callback::from(move |_: ()| {
                        dispatcher.dispatch(FormAction::ToggleVisibility(field))
                    })),
                )
            } else {
                (None, None)
            };

            html! {
                <FieldInput
                    key={field.as_str()}
                    {field}
                    value={form.value(field).to_string()}
                    input_type={form.visibility().input_type(field)}
                    error={form.error(field).map(|e| AttrValue::from(e.to_string()))}
                    {on_input}
                    {revealed}
                    {on_toggle}
                    disabled={loading}
                />
            }
        })
        .collect::<Html>();

    html! {
        <div class="auth-card">
            <div class="auth-header">
                <h3 class="auth-title">{ kind.title() }</h3>
                <p class="auth-subtitle">{ kind.subtitle() }</p>
            </div>

            <form class="auth-form" {onsubmit} novalidate={true}>
                { fields }

                if kind == FormKind::Login {
                    <div class="form-options">
                        <label class="remember">
                            <input
                                type="checkbox"
                                checked={form.remember()}
                                disabled={loading}
                                onchange={on_remember}
                            />
                            { " Remember me" }
                        </label>
                        <a href="#" class="link">{ "Forgot password?" }</a>
                    </div>
                }

                if let Some(message) = form.failure() {
                    <p class="form-failure">{ message.to_string() }</p>
                }

                <button type="submit" class="btn btn-primary btn-block" disabled={loading}>
                    if loading {
                        <>
                            <span class="spinner"></span>
                            { kind.loading_label() }
                        </>
                    } else {
                        <>
                            { kind.submit_label() }
                            <span class="arrow">{ " →" }</span>
                        </>
                    }
                </button>
            </form>

            <div class="auth-footer">
                <p>
                    {
                        match kind {
                            FormKind::Login => "Don't have an account? ",
                            FormKind::Register => "Already have an account? ",
                        }
                    }
                    <a href="#" class="link" onclick={on_switch}>
                        {
                            match kind {
                                FormKind::Login => "Create one",
                                FormKind::Register => "Sign in",
                            }
                        }
                    </a>
                </p>
            </div>
        </div>
    }
}

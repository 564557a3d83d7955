//! Stand-in submit boundary for the auth forms.
//!
//! Credentials go to the identity provider in production; until that is
//! wired in, submissions are logged and acknowledged after a short delay.

use gloo::timers::callback::Timeout;
use shared::api::{LoginData, RegisterData};
use shared::FormKind;

use crate::components::auth_form::SubmitRequest;

const SIMULATED_LATENCY_MS: u32 = 2_000;

fn success_message(kind: FormKind) -> &'static str {
    match kind {
        FormKind::Login => "Login successful! Check console for data.",
        FormKind::Register => "Registration successful! Check console for data.",
    }
}

pub fn simulate_submit(request: SubmitRequest) {
    match request.kind {
        FormKind::Login => tracing::info!(
            "Login data: {:?}",
            LoginData::from_values(&request.values, request.remember)
        ),
        FormKind::Register => {
            tracing::info!("Register data: {:?}", RegisterData::from_values(&request.values))
        }
    }

    let SubmitRequest { kind, done, .. } = request;
    Timeout::new(SIMULATED_LATENCY_MS, move || {
        done.emit(Ok(()));
        gloo::dialogs::alert(success_message(kind));
    })
    .forget();
}

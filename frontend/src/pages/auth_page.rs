use shared::FormKind;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::auth_form::AuthFormView;
use crate::components::auth_layout::AuthLayout;
use crate::router::Route;
use crate::services::auth::simulate_submit;

#[derive(Properties, PartialEq)]
pub struct AuthPageProps {
    pub kind: FormKind,
}

/// `/login` and `/register`.
#[function_component(AuthPage)]
pub fn auth_page(props: &AuthPageProps) -> Html {
    let navigator = use_navigator();

    let on_switch = Callback::from(move |kind: FormKind| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::for_form(kind));
        }
    });

    html! {
        <AuthLayout>
            // Keyed so switching routes mounts a fresh form.
            <AuthFormView
                key={props.kind.to_string()}
                kind={props.kind}
                on_submit={Callback::from(simulate_submit)}
                {on_switch}
            />
        </AuthLayout>
    }
}

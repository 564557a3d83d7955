use shared::FormKind;
use yew::prelude::*;

use crate::components::auth_form::AuthFormView;
use crate::components::auth_layout::AuthLayout;
use crate::services::auth::simulate_submit;

/// Both forms on one page with a toggle between them.
#[function_component(AuthDemo)]
pub fn auth_demo() -> Html {
    let current_view = use_state(|| FormKind::Login);

    let toggle_view = {
        let current_view = current_view.clone();
        Callback::from(move |_: MouseEvent| current_view.set(current_view.other()))
    };

    let on_switch = {
        let current_view = current_view.clone();
        Callback::from(move |kind: FormKind| current_view.set(kind))
    };

    html! {
        <div class="auth-demo">
            <div class="demo-switch">
                <button class="btn btn-outline" onclick={toggle_view}>
                    { format!("Switch to {}", current_view.other()) }
                </button>
            </div>
            <AuthLayout>
                <AuthFormView
                    key={current_view.to_string()}
                    kind={*current_view}
                    on_submit={Callback::from(simulate_submit)}
                    {on_switch}
                />
            </AuthLayout>
        </div>
    }
}

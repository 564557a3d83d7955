use shared::api::SessionResponse;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;
use crate::services::api::ApiService;

/// Landing page behind the route guard.
#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let session = use_state(|| None::<SessionResponse>);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| true);

    {
        let session = session.clone();
        let error = error.clone();
        let loading = loading.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiService::current_session().await {
                    Ok(response) => {
                        session.set(Some(response));
                        loading.set(false);
                    }
                    Err(e) => {
                        tracing::error!("Failed to fetch session: {:?}", e);
                        error.set(Some(e));
                        loading.set(false);
                    }
                }
            });
            || ()
        });
    }

    let body = if *loading {
        html! {
            <div class="loading">
                <div class="spinner"></div>
            </div>
        }
    } else if let Some(session) = &*session {
        html! { <p>{ format!("Signed in as {}", session.user_id) }</p> }
    } else {
        html! {
            <div class="empty-state">
                <p class="error">{ (*error).clone().unwrap_or_default() }</p>
                <Link<Route> to={Route::Login}>
                    <button class="btn btn-primary">{ "Sign In" }</button>
                </Link<Route>>
            </div>
        }
    };

    html! {
        <div class="container">
            <h2>{ "Study Planner" }</h2>
            { body }
        </div>
    }
}

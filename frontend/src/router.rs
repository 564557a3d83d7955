use shared::FormKind;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{
    auth_demo::AuthDemo, auth_page::AuthPage, dashboard::Dashboard, not_found::NotFound,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn for_form(kind: FormKind) -> Self {
        match kind {
            FormKind::Login => Route::Login,
            FormKind::Register => Route::Register,
        }
    }
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <AuthDemo /> },
        Route::Login => html! { <AuthPage kind={FormKind::Login} /> },
        Route::Register => html! { <AuthPage kind={FormKind::Register} /> },
        Route::Dashboard => html! { <Dashboard /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

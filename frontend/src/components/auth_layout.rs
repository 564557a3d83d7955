use yew::prelude::*;

const BACKGROUND_IMAGE: &str = "/register/registerBG.png";

#[derive(Properties, PartialEq)]
pub struct AuthLayoutProps {
    #[prop_or_default]
    pub children: Html,
}

/// Full-screen backdrop the auth cards sit on.
#[function_component(AuthLayout)]
pub fn auth_layout(props: &AuthLayoutProps) -> Html {
    html! {
        <div
            class="auth-layout"
            style={format!("background-image: url('{}')", BACKGROUND_IMAGE)}
        >
            <div class="auth-layout-inner">
                { props.children.clone() }
            </div>
        </div>
    }
}

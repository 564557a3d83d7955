use shared::Field;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FieldInputProps {
    pub field: Field,
    pub value: AttrValue,
    pub input_type: AttrValue,
    pub on_input: Callback<String>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    /// Present only for masked fields.
    #[prop_or_default]
    pub revealed: Option<bool>,
    #[prop_or_default]
    pub on_toggle: Option<Callback<()>>,
    #[prop_or_default]
    pub disabled: bool,
}

fn icon(field: Field) -> &'static str {
    match field {
        Field::Name => "👤",
        Field::Email => "✉",
        Field::Password | Field::ConfirmPassword => "🔒",
    }
}

#[function_component(FieldInput)]
pub fn field_input(props: &FieldInputProps) -> Html {
    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit(input.value());
        })
    };

    let id = props.field.as_str();
    let input_class = if props.error.is_some() {
        "form-input has-error"
    } else {
        "form-input"
    };

    html! {
        <div class="form-field">
            <label for={id} class="form-label">{ props.field.placeholder() }</label>
            <div class="input-group">
                <span class="input-icon">{ icon(props.field) }</span>
                <input
                    id={id}
                    class={input_class}
                    type={props.input_type.clone()}
                    placeholder={props.field.placeholder()}
                    value={props.value.clone()}
                    disabled={props.disabled}
                    autocomplete="off"
                    {oninput}
                />
                if let (Some(revealed), Some(on_toggle)) = (props.revealed, props.on_toggle.clone()) {
                    <button
                        type="button"
                        class="visibility-toggle"
                        aria-label={if revealed { "Hide password" } else { "Show password" }}
                        onclick={on_toggle.reform(|_: MouseEvent| ())}
                    >
                        { if revealed { "🙈" } else { "👁" } }
                    </button>
                }
            </div>
            if let Some(error) = props.error.clone() {
                <p class="field-error">{ error.to_string() }</p>
            }
        </div>
    }
}

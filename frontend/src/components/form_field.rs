use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FormFieldProps {
    pub label: AttrValue,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub required: bool,
    pub children: Html,
}

/// Labelled form row with an optional inline validation message.
#[function_component(FormField)]
pub fn form_field(props: &FormFieldProps) -> Html {
    html! {
        <div class="form-field">
            <label class="form-label">
                {props.label.clone()}
                if props.required {
                    <span class="form-required">{" *"}</span>
                }
            </label>
            {props.children.clone()}
            if let Some(error) = &props.error {
                <p class="form-error">{error.clone()}</p>
            }
        </div>
    }
}

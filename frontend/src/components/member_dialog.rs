use shared::{validate_member, FamilyMember, MemberFormErrors};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::form_field::FormField;
use crate::services::ApiClient;

#[derive(Properties, PartialEq)]
pub struct MemberDialogProps {
    pub api_client: ApiClient,
    /// Present when editing, absent when creating.
    #[prop_or_default]
    pub member: Option<FamilyMember>,
    pub on_success: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(MemberDialog)]
pub fn member_dialog(props: &MemberDialogProps) -> Html {
    let is_edit = props.member.is_some();
    let name = use_state(|| {
        props
            .member
            .as_ref()
            .map(|m| m.name.clone())
            .unwrap_or_default()
    });
    let role = use_state(|| {
        props
            .member
            .as_ref()
            .and_then(|m| m.role.clone())
            .unwrap_or_default()
    });
    let salary = use_state(|| {
        props
            .member
            .as_ref()
            .map(|m| m.salary.to_string())
            .unwrap_or_default()
    });
    let errors = use_state(MemberFormErrors::default);
    let submit_error = use_state(|| Option::<String>::None);
    let submitting = use_state(|| false);

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let on_role = {
        let role = role.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            role.set(input.value());
        })
    };
    let on_salary = {
        let salary = salary.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            salary.set(input.value());
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_submit = {
        let api_client = props.api_client.clone();
        let member = props.member.clone();
        let on_success = props.on_success.clone();
        let name = name.clone();
        let role = role.clone();
        let salary = salary.clone();
        let errors = errors.clone();
        let submit_error = submit_error.clone();
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let payload = match validate_member(&name, &role, &salary) {
                Ok(payload) => {
                    errors.set(MemberFormErrors::default());
                    payload
                }
                Err(field_errors) => {
                    errors.set(field_errors);
                    return;
                }
            };

            let api_client = api_client.clone();
            let member = member.clone();
            let on_success = on_success.clone();
            let submit_error = submit_error.clone();
            let submitting = submitting.clone();

            spawn_local(async move {
                submitting.set(true);
                submit_error.set(None);
                let result = match &member {
                    Some(member) => api_client.update_member(&member.id, &payload).await,
                    None => api_client.create_member(&payload).await,
                };
                match result {
                    Ok(_) => on_success.emit(()),
                    Err(e) => submit_error.set(Some(e.user_message())),
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="dialog-backdrop">
            <div class="dialog">
                <h2 class="dialog-title">
                    {if is_edit { "Modifica membro" } else { "Nuovo membro" }}
                </h2>
                <form onsubmit={on_submit}>
                    <FormField label="Nome completo" required=true error={errors.name.clone()}>
                        <input class="input" placeholder="Mario Rossi" value={(*name).clone()} oninput={on_name} />
                    </FormField>

                    <FormField label="Ruolo">
                        <input class="input" placeholder="Es. Capofamiglia, Coniuge..." value={(*role).clone()} oninput={on_role} />
                    </FormField>

                    <FormField label="Stipendio mensile (€)" required=true error={errors.salary.clone()}>
                        <input class="input" inputmode="decimal" placeholder="2000" value={(*salary).clone()} oninput={on_salary} />
                    </FormField>

                    if let Some(error) = &*submit_error {
                        <div class="alert alert-error">{error.clone()}</div>
                    }

                    <div class="dialog-footer">
                        <button type="button" class="btn btn-outline" onclick={on_cancel}>{"Annulla"}</button>
                        <button type="submit" class="btn btn-primary" disabled={*submitting}>
                            {if *submitting { "Salvataggio..." } else if is_edit { "Aggiorna" } else { "Crea" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

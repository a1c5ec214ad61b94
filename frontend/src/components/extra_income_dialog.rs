use shared::{validate_extra_income, ExtraIncome, ExtraIncomeFormErrors};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::form_field::FormField;
use crate::services::ApiClient;

#[derive(Properties, PartialEq)]
pub struct ExtraIncomeDialogProps {
    pub api_client: ApiClient,
    pub member_id: String,
    #[prop_or_default]
    pub income: Option<ExtraIncome>,
    pub on_success: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(ExtraIncomeDialog)]
pub fn extra_income_dialog(props: &ExtraIncomeDialogProps) -> Html {
    let is_edit = props.income.is_some();
    let name = use_state(|| {
        props
            .income
            .as_ref()
            .map(|i| i.name.clone())
            .unwrap_or_default()
    });
    let amount = use_state(|| {
        props
            .income
            .as_ref()
            .map(|i| i.amount.to_string())
            .unwrap_or_default()
    });
    let errors = use_state(ExtraIncomeFormErrors::default);
    let submit_error = use_state(|| Option::<String>::None);
    let submitting = use_state(|| false);

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let on_amount = {
        let amount = amount.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            amount.set(input.value());
        })
    };
    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_submit = {
        let api_client = props.api_client.clone();
        let member_id = props.member_id.clone();
        let income = props.income.clone();
        let on_success = props.on_success.clone();
        let name = name.clone();
        let amount = amount.clone();
        let errors = errors.clone();
        let submit_error = submit_error.clone();
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let payload = match validate_extra_income(&name, &amount) {
                Ok(payload) => {
                    errors.set(ExtraIncomeFormErrors::default());
                    payload
                }
                Err(field_errors) => {
                    errors.set(field_errors);
                    return;
                }
            };

            let api_client = api_client.clone();
            let member_id = member_id.clone();
            let income = income.clone();
            let on_success = on_success.clone();
            let submit_error = submit_error.clone();
            let submitting = submitting.clone();

            spawn_local(async move {
                submitting.set(true);
                submit_error.set(None);
                let result = match &income {
                    Some(income) => {
                        api_client
                            .update_extra_income(&member_id, &income.id, &payload)
                            .await
                    }
                    None => api_client.add_extra_income(&member_id, &payload).await,
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
                    {if is_edit { "Modifica entrata extra" } else { "Nuova entrata extra" }}
                </h2>
                <form onsubmit={on_submit}>
                    <FormField label="Nome" required=true error={errors.name.clone()}>
                        <input class="input" placeholder="Es. Affitto box, Ripetizioni..." value={(*name).clone()} oninput={on_name} />
                    </FormField>

                    <FormField label="Importo mensile (€)" required=true error={errors.amount.clone()}>
                        <input class="input" inputmode="decimal" placeholder="0,00" value={(*amount).clone()} oninput={on_amount} />
                    </FormField>

                    if let Some(error) = &*submit_error {
                        <div class="alert alert-error">{error.clone()}</div>
                    }

                    <div class="dialog-footer">
                        <button type="button" class="btn btn-outline" onclick={on_cancel}>{"Annulla"}</button>
                        <button type="submit" class="btn btn-primary" disabled={*submitting}>
                            {if *submitting { "Salvataggio..." } else if is_edit { "Aggiorna" } else { "Aggiungi" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

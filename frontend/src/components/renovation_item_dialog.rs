use shared::{validate_renovation_item, RenovationItem, RenovationItemFormErrors};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::form_field::FormField;
use crate::services::ApiClient;

#[derive(Properties, PartialEq)]
pub struct RenovationItemDialogProps {
    pub api_client: ApiClient,
    pub project_id: String,
    #[prop_or_default]
    pub item: Option<RenovationItem>,
    pub on_success: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(RenovationItemDialog)]
pub fn renovation_item_dialog(props: &RenovationItemDialogProps) -> Html {
    let is_edit = props.item.is_some();
    let name = use_state(|| {
        props
            .item
            .as_ref()
            .map(|i| i.name.clone())
            .unwrap_or_default()
    });
    let company = use_state(|| {
        props
            .item
            .as_ref()
            .and_then(|i| i.company.clone())
            .unwrap_or_default()
    });
    let total_price = use_state(|| {
        props
            .item
            .as_ref()
            .map(|i| i.total_price.to_string())
            .unwrap_or_default()
    });
    let paid_amount = use_state(|| {
        props
            .item
            .as_ref()
            .map(|i| i.paid_amount.to_string())
            .unwrap_or_default()
    });
    let errors = use_state(RenovationItemFormErrors::default);
    let submit_error = use_state(|| Option::<String>::None);
    let submitting = use_state(|| false);

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let on_company = {
        let company = company.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            company.set(input.value());
        })
    };
    let on_total = {
        let total_price = total_price.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            total_price.set(input.value());
        })
    };
    let on_paid = {
        let paid_amount = paid_amount.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            paid_amount.set(input.value());
        })
    };
    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_submit = {
        let api_client = props.api_client.clone();
        let project_id = props.project_id.clone();
        let item = props.item.clone();
        let on_success = props.on_success.clone();
        let name = name.clone();
        let company = company.clone();
        let total_price = total_price.clone();
        let paid_amount = paid_amount.clone();
        let errors = errors.clone();
        let submit_error = submit_error.clone();
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let payload =
                match validate_renovation_item(&name, &company, &total_price, &paid_amount) {
                    Ok(payload) => {
                        errors.set(RenovationItemFormErrors::default());
                        payload
                    }
                    Err(field_errors) => {
                        errors.set(field_errors);
                        return;
                    }
                };

            let api_client = api_client.clone();
            let project_id = project_id.clone();
            let item = item.clone();
            let on_success = on_success.clone();
            let submit_error = submit_error.clone();
            let submitting = submitting.clone();

            spawn_local(async move {
                submitting.set(true);
                submit_error.set(None);
                let result = match &item {
                    Some(item) => {
                        api_client
                            .update_renovation_item(&project_id, &item.id, &payload)
                            .await
                    }
                    None => {
                        api_client
                            .create_renovation_item(&project_id, &payload)
                            .await
                    }
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
                    {if is_edit { "Modifica elemento" } else { "Nuovo elemento" }}
                </h2>
                <form onsubmit={on_submit}>
                    <FormField label="Nome elemento" required=true error={errors.name.clone()}>
                        <input class="input" placeholder="Es. Piastrelle, Sanitari, Manodopera..." value={(*name).clone()} oninput={on_name} />
                    </FormField>

                    <FormField label="Azienda/Fornitore">
                        <input class="input" placeholder="Es. Ceramiche Rossi" value={(*company).clone()} oninput={on_company} />
                    </FormField>

                    <div class="form-grid-2">
                        <FormField label="Prezzo totale (€)" required=true error={errors.total_price.clone()}>
                            <input class="input" inputmode="decimal" placeholder="0,00" value={(*total_price).clone()} oninput={on_total} />
                        </FormField>
                        <FormField label="Importo pagato (€)" required=true error={errors.paid_amount.clone()}>
                            <input class="input" inputmode="decimal" placeholder="0,00" value={(*paid_amount).clone()} oninput={on_paid} />
                        </FormField>
                    </div>

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

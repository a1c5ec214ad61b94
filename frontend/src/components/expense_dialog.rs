use shared::{
    frequency_label, validate_expense, Expense, ExpenseFormErrors, ExpenseFrequency,
    EXPENSE_CATEGORIES,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::form_field::FormField;
use crate::services::ApiClient;

const FREQUENCIES: [ExpenseFrequency; 3] = [
    ExpenseFrequency::Monthly,
    ExpenseFrequency::Bimonthly,
    ExpenseFrequency::Custom,
];

fn frequency_value(frequency: ExpenseFrequency) -> &'static str {
    match frequency {
        ExpenseFrequency::Monthly => "MONTHLY",
        ExpenseFrequency::Bimonthly => "BIMONTHLY",
        ExpenseFrequency::Custom => "CUSTOM",
    }
}

fn frequency_from_value(value: &str) -> ExpenseFrequency {
    match value {
        "BIMONTHLY" => ExpenseFrequency::Bimonthly,
        "CUSTOM" => ExpenseFrequency::Custom,
        _ => ExpenseFrequency::Monthly,
    }
}

#[derive(Properties, PartialEq)]
pub struct ExpenseDialogProps {
    pub api_client: ApiClient,
    #[prop_or_default]
    pub expense: Option<Expense>,
    pub on_success: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(ExpenseDialog)]
pub fn expense_dialog(props: &ExpenseDialogProps) -> Html {
    let is_edit = props.expense.is_some();
    let name = use_state(|| {
        props
            .expense
            .as_ref()
            .map(|e| e.name.clone())
            .unwrap_or_default()
    });
    let amount = use_state(|| {
        props
            .expense
            .as_ref()
            .map(|e| e.amount.to_string())
            .unwrap_or_default()
    });
    let frequency = use_state(|| {
        props
            .expense
            .as_ref()
            .map(|e| e.frequency)
            .unwrap_or(ExpenseFrequency::Monthly)
    });
    let category = use_state(|| {
        props
            .expense
            .as_ref()
            .map(|e| e.category.clone())
            .unwrap_or_default()
    });
    let day_of_month = use_state(|| {
        props
            .expense
            .as_ref()
            .and_then(|e| e.day_of_month)
            .map(|d| d.to_string())
            .unwrap_or_default()
    });
    let errors = use_state(ExpenseFormErrors::default);
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
    let on_frequency = {
        let frequency = frequency.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            frequency.set(frequency_from_value(&select.value()));
        })
    };
    let on_category = {
        let category = category.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            category.set(select.value());
        })
    };
    let on_day = {
        let day_of_month = day_of_month.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            day_of_month.set(input.value());
        })
    };
    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_submit = {
        let api_client = props.api_client.clone();
        let expense = props.expense.clone();
        let on_success = props.on_success.clone();
        let name = name.clone();
        let amount = amount.clone();
        let frequency = frequency.clone();
        let category = category.clone();
        let day_of_month = day_of_month.clone();
        let errors = errors.clone();
        let submit_error = submit_error.clone();
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let payload =
                match validate_expense(&name, &amount, *frequency, &category, &day_of_month) {
                    Ok(payload) => {
                        errors.set(ExpenseFormErrors::default());
                        payload
                    }
                    Err(field_errors) => {
                        errors.set(field_errors);
                        return;
                    }
                };

            let api_client = api_client.clone();
            let expense = expense.clone();
            let on_success = on_success.clone();
            let submit_error = submit_error.clone();
            let submitting = submitting.clone();

            spawn_local(async move {
                submitting.set(true);
                submit_error.set(None);
                let result = match &expense {
                    Some(expense) => api_client.update_expense(&expense.id, &payload).await,
                    None => api_client.create_expense(&payload).await,
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
                    {if is_edit { "Modifica spesa" } else { "Nuova spesa" }}
                </h2>
                <form onsubmit={on_submit}>
                    <FormField label="Nome spesa" required=true error={errors.name.clone()}>
                        <input class="input" placeholder="Es. Mutuo, Spesa alimentare..." value={(*name).clone()} oninput={on_name} />
                    </FormField>

                    <div class="form-grid-2">
                        <FormField label="Importo (€)" required=true error={errors.amount.clone()}>
                            <input class="input" inputmode="decimal" placeholder="0,00" value={(*amount).clone()} oninput={on_amount} />
                        </FormField>

                        <FormField label="Frequenza" required=true>
                            <select class="input" onchange={on_frequency}>
                                {for FREQUENCIES.iter().map(|f| {
                                    html! {
                                        <option value={frequency_value(*f)} selected={*f == *frequency}>
                                            {frequency_label(*f)}
                                        </option>
                                    }
                                })}
                            </select>
                        </FormField>
                    </div>

                    <FormField label="Categoria" required=true error={errors.category.clone()}>
                        <select class="input" onchange={on_category}>
                            <option value="" selected={category.is_empty()} disabled=true>
                                {"Seleziona categoria..."}
                            </option>
                            {for EXPENSE_CATEGORIES.iter().map(|cat| {
                                html! {
                                    <option value={*cat} selected={*cat == category.as_str()}>{*cat}</option>
                                }
                            })}
                        </select>
                    </FormField>

                    if *frequency == ExpenseFrequency::Monthly {
                        <FormField label="Giorno del mese" error={errors.day_of_month.clone()}>
                            <input
                                class="input"
                                inputmode="numeric"
                                placeholder="Es. 5 (per il 5 del mese)"
                                value={(*day_of_month).clone()}
                                oninput={on_day}
                            />
                        </FormField>
                    }

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

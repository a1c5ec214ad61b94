use chrono::Datelike;
use shared::{format_date_naive, month_name_it, weekday_name_it};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::layout::PageHeader;
use crate::hooks::use_session;
use crate::hooks::use_shopping::{use_shopping, CompletionInput};
use crate::services::date_utils;

fn today_long_label() -> String {
    let today = date_utils::today();
    let label = format!(
        "{} {} {} {}",
        weekday_name_it(today.weekday()),
        today.day(),
        month_name_it(today.month()),
        today.year()
    );
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => label,
    }
}

#[function_component(ShoppingPage)]
pub fn shopping_page() -> Html {
    let session = use_session();
    let api_client = session.api_client();
    let shopping = use_shopping(&api_client);
    let state = shopping.state;
    let actions = shopping.actions;

    let new_text = use_state(String::new);
    let total_input = use_state(String::new);
    let note_input = use_state(String::new);

    let on_new_text = {
        let new_text = new_text.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            new_text.set(input.value());
        })
    };
    let submit_new = {
        let add = actions.add.clone();
        let new_text = new_text.clone();
        Callback::from(move |_| {
            if !new_text.trim().is_empty() {
                add.emit((*new_text).clone());
                new_text.set(String::new());
            }
        })
    };
    let on_add_click = {
        let submit_new = submit_new.clone();
        Callback::from(move |_: MouseEvent| submit_new.emit(()))
    };
    let on_keydown = {
        let submit_new = submit_new.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                submit_new.emit(());
            }
        })
    };
    let on_clear = {
        let clear = actions.clear.clone();
        Callback::from(move |_: MouseEvent| clear.emit(()))
    };
    let open_complete = {
        let set_complete_open = actions.set_complete_open.clone();
        let total_input = total_input.clone();
        let note_input = note_input.clone();
        Callback::from(move |_: MouseEvent| {
            total_input.set(String::new());
            note_input.set(String::new());
            set_complete_open.emit(true);
        })
    };
    let close_complete = {
        let set_complete_open = actions.set_complete_open.clone();
        Callback::from(move |_: MouseEvent| set_complete_open.emit(false))
    };
    let on_total = {
        let total_input = total_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            total_input.set(input.value());
        })
    };
    let on_note = {
        let note_input = note_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            note_input.set(input.value());
        })
    };
    let on_complete = {
        let complete = actions.complete.clone();
        let total_input = total_input.clone();
        let note_input = note_input.clone();
        Callback::from(move |_: MouseEvent| {
            complete.emit(CompletionInput {
                total: (*total_input).clone(),
                note: (*note_input).clone(),
            });
        })
    };

    let items = state.list.display_order();
    let checked_count = state.list.checked_count();
    let unchecked_count = state.list.unchecked_count();

    html! {
        <div>
            <PageHeader
                title="Spesa giornaliera"
                description={Some(today_long_label())}
                actions={html! {
                    if !state.list.items.is_empty() {
                        <div class="page-actions-group">
                            <button class="btn btn-outline btn-sm" onclick={on_clear}>{"Svuota"}</button>
                            <button class="btn btn-primary" onclick={open_complete}>{"Completa spesa"}</button>
                        </div>
                    }
                }}
            />

            if let Some(message) = &state.success_message {
                <div class="alert alert-success">{message.clone()}</div>
            }

            <div class="card">
                <div class="add-item-row">
                    <input
                        class="input"
                        placeholder="Aggiungi prodotto..."
                        value={(*new_text).clone()}
                        oninput={on_new_text}
                        onkeydown={on_keydown}
                    />
                    <button
                        class="btn btn-primary"
                        onclick={on_add_click}
                        disabled={new_text.trim().is_empty()}
                    >
                        {"Aggiungi"}
                    </button>
                </div>
            </div>

            if state.list.items.is_empty() {
                <div class="card empty-state">
                    {"La lista è vuota. Aggiungi i prodotti da acquistare."}
                </div>
            } else {
                <div class="card card-flush">
                    {for items.iter().map(|item| {
                        let on_toggle = {
                            let toggle = actions.toggle.clone();
                            let id = item.id.clone();
                            Callback::from(move |_: MouseEvent| toggle.emit(id.clone()))
                        };
                        let on_remove = {
                            let remove = actions.remove.clone();
                            let id = item.id.clone();
                            Callback::from(move |_: MouseEvent| remove.emit(id.clone()))
                        };
                        html! {
                            <div class={classes!("shopping-row", item.checked.then_some("shopping-row-checked"))}>
                                <button class="btn-icon" onclick={on_toggle}>
                                    {if item.checked { "☑" } else { "☐" }}
                                </button>
                                <span class={classes!("shopping-text", item.checked.then_some("shopping-text-done"))}>
                                    {item.text.clone()}
                                </span>
                                <button class="btn-icon btn-icon-danger" onclick={on_remove}>{"✕"}</button>
                            </div>
                        }
                    })}
                </div>

                <p class="shopping-counter">
                    {if unchecked_count > 0 {
                        format!("{unchecked_count} da acquistare · {checked_count} acquistati")
                    } else {
                        format!("Tutti i {checked_count} prodotti acquistati")
                    }}
                </p>
            }

            if state.complete_open {
                <div class="dialog-backdrop">
                    <div class="dialog dialog-sm">
                        <h2 class="dialog-title">{"Completa spesa"}</h2>
                        <p class="dialog-message">
                            {format!(
                                "{} prodotti in lista ({} acquistati). Inserisci il totale speso per aggiungere questa voce alle spese.",
                                state.list.items.len(),
                                checked_count
                            )}
                        </p>

                        <div class="form-field">
                            <label class="form-label">
                                {"Totale speso (€)"}<span class="form-required">{" *"}</span>
                            </label>
                            <input
                                class="input"
                                inputmode="decimal"
                                placeholder="0,00"
                                value={(*total_input).clone()}
                                oninput={on_total}
                            />
                        </div>

                        <div class="form-field">
                            <label class="form-label">{"Note (opzionale)"}</label>
                            <input
                                class="input"
                                placeholder="es. Esselunga, spesa settimanale..."
                                value={(*note_input).clone()}
                                oninput={on_note}
                            />
                        </div>

                        if let Some(error) = &state.complete_error {
                            <p class="form-error">{error.clone()}</p>
                        }

                        <div class="dialog-footer">
                            <button class="btn btn-outline" onclick={close_complete} disabled={state.saving}>
                                {"Annulla"}
                            </button>
                            <button class="btn btn-primary" onclick={on_complete} disabled={state.saving}>
                                {if state.saving { "Salvataggio..." } else { "Aggiungi alle spese" }}
                            </button>
                        </div>
                    </div>
                </div>
            }

            <p class="shopping-footnote">
                {format!("Lista del {}: si azzera automaticamente al cambio di giorno.", format_date_naive(date_utils::today()))}
            </p>
        </div>
    }
}

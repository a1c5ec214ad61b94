use shared::{format_currency, frequency_label, month_name_it, Expense, HistoryMonth};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::{ApiClient, Logger};

#[derive(Properties, PartialEq)]
pub struct ExpenseHistoryModalProps {
    pub api_client: ApiClient,
    pub on_close: Callback<()>,
}

fn month_label(month: &HistoryMonth) -> String {
    let mut name = month_name_it(month.month).to_string();
    if let Some(first) = name.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    format!("{name} {}", month.year)
}

/// Browser for the archived months: a month navigator on top, the
/// month's expenses grouped by category below. Months arrive newest
/// first and are trusted in that order.
#[function_component(ExpenseHistoryModal)]
pub fn expense_history_modal(props: &ExpenseHistoryModalProps) -> Html {
    let months = use_state(Vec::<HistoryMonth>::new);
    let selected_index = use_state(|| 0usize);
    let expenses = use_state(Vec::<Expense>::new);
    let loading_months = use_state(|| true);
    let loading_expenses = use_state(|| false);

    {
        let api_client = props.api_client.clone();
        let months = months.clone();
        let selected_index = selected_index.clone();
        let loading_months = loading_months.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match api_client.history_months().await {
                    Ok(data) => {
                        months.set(data);
                        selected_index.set(0);
                    }
                    Err(e) => Logger::error("expenses", &format!("history load failed: {e}")),
                }
                loading_months.set(false);
            });
            || ()
        });
    }

    // Reload the archived expenses whenever the selected month changes.
    {
        let api_client = props.api_client.clone();
        let expenses = expenses.clone();
        let loading_expenses = loading_expenses.clone();
        let selected = months.get(*selected_index).cloned();
        use_effect_with(selected, move |selected| {
            if let Some(selected) = selected.clone() {
                spawn_local(async move {
                    loading_expenses.set(true);
                    match api_client
                        .history_expenses(selected.month, selected.year)
                        .await
                    {
                        Ok(data) => expenses.set(data),
                        Err(e) => Logger::error("expenses", &format!("history load failed: {e}")),
                    }
                    loading_expenses.set(false);
                });
            } else {
                expenses.set(Vec::new());
            }
            || ()
        });
    }

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_older = {
        let selected_index = selected_index.clone();
        Callback::from(move |_: MouseEvent| selected_index.set(*selected_index + 1))
    };
    let on_newer = {
        let selected_index = selected_index.clone();
        Callback::from(move |_: MouseEvent| {
            selected_index.set(selected_index.saturating_sub(1))
        })
    };

    let selected = months.get(*selected_index).cloned();
    let total: f64 = expenses.iter().map(|e| e.amount).sum();
    let mut categories: Vec<String> = expenses.iter().map(|e| e.category.clone()).collect();
    categories.sort();
    categories.dedup();

    html! {
        <div class="dialog-backdrop">
            <div class="dialog">
                <div class="dialog-header">
                    <h2 class="dialog-title">{"Storico Spese"}</h2>
                    <button class="btn-icon" onclick={on_close}>{"Chiudi"}</button>
                </div>

                if *loading_months {
                    <p class="empty-note">{"Caricamento..."}</p>
                } else if months.is_empty() {
                    <div class="empty-state">
                        <p>{"Nessuna spesa archiviata nei mesi precedenti."}</p>
                        <p class="empty-note">
                            {"Le spese personalizzate vengono archiviate automaticamente ogni 1° del mese."}
                        </p>
                    </div>
                } else {
                    <div class="history-body">
                        <div class="history-navigator">
                            <button
                                class="btn-icon"
                                disabled={*selected_index >= months.len().saturating_sub(1)}
                                onclick={on_older}
                            >
                                {"‹"}
                            </button>
                            <div class="history-current">
                                <p class="history-month">
                                    {selected.as_ref().map(month_label).unwrap_or_else(|| "—".to_string())}
                                </p>
                                <p class="empty-note">
                                    {format!("{} di {} mesi archiviati", *selected_index + 1, months.len())}
                                </p>
                            </div>
                            <button
                                class="btn-icon"
                                disabled={*selected_index == 0}
                                onclick={on_newer}
                            >
                                {"›"}
                            </button>
                        </div>

                        if let Some(selected) = &selected {
                            if !*loading_expenses {
                                <div class="history-summary">
                                    <span>{format!(
                                        "{} {}",
                                        selected.count,
                                        if selected.count == 1 { "voce" } else { "voci" }
                                    )}</span>
                                    <span class="amount">{format_currency(total)}</span>
                                </div>
                            }
                        }

                        if *loading_expenses {
                            <p class="empty-note">{"Caricamento..."}</p>
                        } else if expenses.is_empty() {
                            <p class="empty-note">{"Nessuna spesa in questo mese."}</p>
                        } else {
                            <div class="history-list">
                                {for categories.iter().map(|category| {
                                    let in_category: Vec<Expense> = expenses
                                        .iter()
                                        .filter(|e| &e.category == category)
                                        .cloned()
                                        .collect();
                                    let category_total: f64 = in_category.iter().map(|e| e.amount).sum();
                                    html! {
                                        <div class="group-section">
                                            <div class="group-header">
                                                <h4 class="group-title">{category.clone()}</h4>
                                                <span class="group-total">{format_currency(category_total)}</span>
                                            </div>
                                            <div class="card card-flush">
                                                {for in_category.iter().map(|expense| {
                                                    html! {
                                                        <div class="row">
                                                            <div class="row-main">
                                                                <p class="row-name">{expense.name.clone()}</p>
                                                                <span class="badge badge-outline">
                                                                    {frequency_label(expense.frequency)}
                                                                </span>
                                                            </div>
                                                            <span class="amount">{format_currency(expense.amount)}</span>
                                                        </div>
                                                    }
                                                })}
                                            </div>
                                        </div>
                                    }
                                })}
                            </div>
                        }
                    </div>
                }
            </div>
        </div>
    }
}

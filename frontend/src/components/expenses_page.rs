use shared::{
    format_currency, frequency_label, group_by_category, monthly_equivalent, monthly_total,
    month_name_it, partition_active, Expense, ExpenseFrequency,
};
use yew::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::expense_dialog::ExpenseDialog;
use crate::components::expense_history_modal::ExpenseHistoryModal;
use crate::components::layout::PageHeader;
use crate::components::loading::PageLoader;
use crate::hooks::use_expenses::use_expenses;
use crate::hooks::{use_session, DialogState};
use crate::services::date_utils;

fn current_month_label() -> String {
    let today = date_utils::today();
    use chrono::Datelike;
    let mut label = month_name_it(today.month()).to_string();
    if let Some(first) = label.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    format!("{label} {}", today.year())
}

#[function_component(ExpensesPage)]
pub fn expenses_page() -> Html {
    let session = use_session();
    let api_client = session.api_client();
    let expenses = use_expenses(&api_client);
    let state = expenses.state;
    let actions = expenses.actions;

    if state.loading {
        return html! { <PageLoader /> };
    }

    let (active, inactive) = partition_active(&state.expenses);
    let groups = group_by_category(&active);
    let total_monthly = monthly_total(&active);

    let open_create = {
        let set_dialog = actions.set_dialog.clone();
        Callback::from(move |_: MouseEvent| set_dialog.emit(DialogState::Create))
    };
    let open_history = {
        let set_history_open = actions.set_history_open.clone();
        Callback::from(move |_: MouseEvent| set_history_open.emit(true))
    };
    let close_history = {
        let set_history_open = actions.set_history_open.clone();
        Callback::from(move |_| set_history_open.emit(false))
    };
    let on_dialog_success = {
        let set_dialog = actions.set_dialog.clone();
        let reload = actions.reload.clone();
        Callback::from(move |_| {
            set_dialog.emit(DialogState::Closed);
            reload.emit(());
        })
    };
    let on_dialog_close = {
        let set_dialog = actions.set_dialog.clone();
        Callback::from(move |_| set_dialog.emit(DialogState::Closed))
    };

    html! {
        <div>
            <PageHeader
                title="Spese Mensili"
                description={Some(format!(
                    "{} · {} spese attive · Totale: {}",
                    current_month_label(),
                    active.len(),
                    format_currency(total_monthly)
                ))}
                actions={html! {
                    <div class="page-actions-group">
                        <button class="btn btn-outline" onclick={open_history}>{"Storico"}</button>
                        <button class="btn btn-primary" onclick={open_create}>{"Aggiungi spesa"}</button>
                    </div>
                }}
            />

            {for groups.iter().map(|group| {
                html! {
                    <div class="group-section">
                        <div class="group-header">
                            <h3 class="group-title">{group.category.clone()}</h3>
                            <span class="group-total">{format!("{}/mese", format_currency(group.monthly_total))}</span>
                        </div>
                        <div class="card card-flush">
                            {for group.expenses.iter().map(|expense| {
                                html! {
                                    <ExpenseRow
                                        expense={expense.clone()}
                                        set_dialog={actions.set_dialog.clone()}
                                        toggle_active={actions.toggle_active.clone()}
                                    />
                                }
                            })}
                        </div>
                    </div>
                }
            })}

            if state.expenses.is_empty() {
                <div class="card empty-state">
                    {format!("Nessuna spesa per {}. Clicca \"Aggiungi spesa\" per iniziare.", current_month_label())}
                </div>
            }

            if !inactive.is_empty() {
                <div class="group-section group-inactive">
                    <h3 class="group-title">{format!("Spese sospese ({})", inactive.len())}</h3>
                    <div class="card card-flush">
                        {for inactive.iter().map(|expense| {
                            html! {
                                <ExpenseRow
                                    expense={expense.clone()}
                                    set_dialog={actions.set_dialog.clone()}
                                    toggle_active={actions.toggle_active.clone()}
                                />
                            }
                        })}
                    </div>
                </div>
            }

            if state.dialog.form_open() {
                <ExpenseDialog
                    api_client={api_client.clone()}
                    expense={state.dialog.editing().cloned()}
                    on_success={on_dialog_success}
                    on_close={on_dialog_close.clone()}
                />
            }

            if state.history_open {
                <ExpenseHistoryModal
                    api_client={api_client.clone()}
                    on_close={close_history}
                />
            }

            if let Some(expense) = state.dialog.delete_target() {
                <ConfirmDialog
                    title="Elimina spesa"
                    message={format!("Sei sicuro di voler eliminare \"{}\"?", expense.name)}
                    error={state.delete_error.clone()}
                    busy={state.deleting}
                    on_confirm={actions.confirm_delete.clone()}
                    on_cancel={on_dialog_close}
                />
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ExpenseRowProps {
    expense: Expense,
    set_dialog: Callback<DialogState<Expense>>,
    toggle_active: Callback<Expense>,
}

#[function_component(ExpenseRow)]
fn expense_row(props: &ExpenseRowProps) -> Html {
    let expense = &props.expense;

    let on_toggle = {
        let toggle_active = props.toggle_active.clone();
        let expense = expense.clone();
        Callback::from(move |_: MouseEvent| toggle_active.emit(expense.clone()))
    };
    let on_edit = {
        let set_dialog = props.set_dialog.clone();
        let expense = expense.clone();
        Callback::from(move |_: MouseEvent| set_dialog.emit(DialogState::Edit(expense.clone())))
    };
    let on_delete = {
        let set_dialog = props.set_dialog.clone();
        let expense = expense.clone();
        Callback::from(move |_: MouseEvent| {
            set_dialog.emit(DialogState::ConfirmDelete(expense.clone()))
        })
    };

    html! {
        <div class={classes!("row", (!expense.is_active).then_some("row-muted"))}>
            <button
                class={classes!("switch", expense.is_active.then_some("switch-on"))}
                onclick={on_toggle}
                title={if expense.is_active { "Sospendi" } else { "Riattiva" }}
            >
                <span class="switch-thumb"></span>
            </button>
            <div class="row-main">
                <p class="row-name">{expense.name.clone()}</p>
                <div class="row-meta">
                    <span class="badge badge-outline">{frequency_label(expense.frequency)}</span>
                    if let Some(day) = expense.day_of_month {
                        <span class="row-meta-note">{format!("Giorno {day}")}</span>
                    }
                </div>
            </div>
            <div class="row-amount">
                <p class="amount">{format_currency(expense.amount)}</p>
                if expense.frequency == ExpenseFrequency::Bimonthly {
                    <p class="amount-caption">{format!("{}/mese", format_currency(monthly_equivalent(expense)))}</p>
                }
            </div>
            <div class="row-buttons">
                <button class="btn-icon" onclick={on_edit}>{"Modifica"}</button>
                <button class="btn-icon btn-icon-danger" onclick={on_delete}>{"Elimina"}</button>
            </div>
        </div>
    }
}

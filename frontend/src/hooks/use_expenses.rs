use shared::{Expense, ExpensePayload};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::{ApiClient, Logger};

use super::DialogState;

#[derive(Clone, PartialEq)]
pub struct ExpensesState {
    pub expenses: Vec<Expense>,
    pub loading: bool,
    pub dialog: DialogState<Expense>,
    pub history_open: bool,
    pub deleting: bool,
    pub delete_error: Option<String>,
}

#[derive(Clone)]
pub struct UseExpensesActions {
    pub reload: Callback<()>,
    pub set_dialog: Callback<DialogState<Expense>>,
    pub set_history_open: Callback<bool>,
    pub confirm_delete: Callback<()>,
    pub toggle_active: Callback<Expense>,
}

pub struct UseExpensesResult {
    pub state: ExpensesState,
    pub actions: UseExpensesActions,
}

#[hook]
pub fn use_expenses(api_client: &ApiClient) -> UseExpensesResult {
    let expenses = use_state(Vec::<Expense>::new);
    let loading = use_state(|| true);
    let dialog = use_state(DialogState::<Expense>::default);
    let history_open = use_state(|| false);
    let deleting = use_state(|| false);
    let delete_error = use_state(|| Option::<String>::None);

    let reload = {
        let api_client = api_client.clone();
        let expenses = expenses.clone();
        let loading = loading.clone();

        Callback::from(move |_| {
            let api_client = api_client.clone();
            let expenses = expenses.clone();
            let loading = loading.clone();

            spawn_local(async move {
                loading.set(true);
                match api_client.list_expenses().await {
                    Ok(data) => expenses.set(data),
                    Err(e) => Logger::error("expenses", &format!("load failed: {e}")),
                }
                loading.set(false);
            });
        })
    };

    {
        let reload = reload.clone();
        use_effect_with((), move |_| {
            reload.emit(());
            || ()
        });
    }

    let set_dialog = {
        let dialog = dialog.clone();
        let delete_error = delete_error.clone();
        Callback::from(move |next: DialogState<Expense>| {
            delete_error.set(None);
            dialog.set(next);
        })
    };

    let set_history_open = {
        let history_open = history_open.clone();
        Callback::from(move |open: bool| history_open.set(open))
    };

    let confirm_delete = {
        let api_client = api_client.clone();
        let dialog = dialog.clone();
        let deleting = deleting.clone();
        let delete_error = delete_error.clone();
        let reload = reload.clone();

        Callback::from(move |_| {
            let Some(expense) = dialog.delete_target().cloned() else {
                return;
            };
            let api_client = api_client.clone();
            let dialog = dialog.clone();
            let deleting = deleting.clone();
            let delete_error = delete_error.clone();
            let reload = reload.clone();

            spawn_local(async move {
                deleting.set(true);
                delete_error.set(None);
                match api_client.delete_expense(&expense.id).await {
                    Ok(()) => {
                        dialog.set(DialogState::Closed);
                        reload.emit(());
                    }
                    Err(e) => delete_error.set(Some(e.user_message())),
                }
                deleting.set(false);
            });
        })
    };

    // The row switch flips only `is_active`; the rest of the payload is
    // rebuilt from the loaded expense since updates carry full bodies.
    let toggle_active = {
        let api_client = api_client.clone();
        let reload = reload.clone();

        Callback::from(move |expense: Expense| {
            let api_client = api_client.clone();
            let reload = reload.clone();

            spawn_local(async move {
                let payload = ExpensePayload {
                    name: expense.name.clone(),
                    amount: expense.amount,
                    frequency: expense.frequency,
                    category: expense.category.clone(),
                    day_of_month: expense.day_of_month,
                    date: expense.date.clone(),
                    is_active: Some(!expense.is_active),
                };
                match api_client.update_expense(&expense.id, &payload).await {
                    Ok(_) => reload.emit(()),
                    Err(e) => Logger::error("expenses", &format!("toggle failed: {e}")),
                }
            });
        })
    };

    UseExpensesResult {
        state: ExpensesState {
            expenses: (*expenses).clone(),
            loading: *loading,
            dialog: (*dialog).clone(),
            history_open: *history_open,
            deleting: *deleting,
            delete_error: (*delete_error).clone(),
        },
        actions: UseExpensesActions {
            reload,
            set_dialog,
            set_history_open,
            confirm_delete,
            toggle_active,
        },
    }
}

use gloo::timers::future::TimeoutFuture;
use shared::{completion_expense_name, format_number, ExpenseFrequency, ExpensePayload};
use shared::{validate_shopping_total, StoredShoppingList};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::{date_utils, shopping_store, ApiClient};

const SUCCESS_CLEAR_MS: u32 = 4000;

/// Input of the "completa spesa" dialog.
#[derive(Clone, PartialEq)]
pub struct CompletionInput {
    pub total: String,
    pub note: String,
}

#[derive(Clone, PartialEq)]
pub struct ShoppingState {
    pub list: StoredShoppingList,
    pub complete_open: bool,
    pub saving: bool,
    pub complete_error: Option<String>,
    pub success_message: Option<String>,
}

#[derive(Clone)]
pub struct UseShoppingActions {
    pub add: Callback<String>,
    pub toggle: Callback<String>,
    pub remove: Callback<String>,
    pub clear: Callback<()>,
    pub set_complete_open: Callback<bool>,
    pub complete: Callback<CompletionInput>,
}

pub struct UseShoppingResult {
    pub state: ShoppingState,
    pub actions: UseShoppingActions,
}

/// The shopping list lives entirely in browser storage; every mutation
/// writes the whole list back under today's day key. "Completa spesa" is
/// the only operation that touches the network: it books one custom
/// expense and then prunes the checked items locally.
#[hook]
pub fn use_shopping(api_client: &ApiClient) -> UseShoppingResult {
    let list = use_state(|| shopping_store::load(&date_utils::today_key()));
    let complete_open = use_state(|| false);
    let saving = use_state(|| false);
    let complete_error = use_state(|| Option::<String>::None);
    let success_message = use_state(|| Option::<String>::None);

    let apply = {
        let list = list.clone();
        move |mutate: &dyn Fn(&mut StoredShoppingList)| {
            let mut next = (*list).clone();
            mutate(&mut next);
            shopping_store::save(&next);
            list.set(next);
        }
    };

    let add = {
        let apply = apply.clone();
        Callback::from(move |text: String| {
            apply(&|l: &mut StoredShoppingList| {
                l.add(shopping_store::new_item_id(), &text);
            });
        })
    };

    let toggle = {
        let apply = apply.clone();
        Callback::from(move |id: String| {
            apply(&|l: &mut StoredShoppingList| l.toggle(&id));
        })
    };

    let remove = {
        let apply = apply.clone();
        Callback::from(move |id: String| {
            apply(&|l: &mut StoredShoppingList| l.remove(&id));
        })
    };

    let clear = {
        let apply = apply.clone();
        Callback::from(move |_| {
            apply(&|l: &mut StoredShoppingList| l.clear());
        })
    };

    let set_complete_open = {
        let complete_open = complete_open.clone();
        let complete_error = complete_error.clone();
        Callback::from(move |open: bool| {
            complete_error.set(None);
            complete_open.set(open);
        })
    };

    let complete = {
        let api_client = api_client.clone();
        let list = list.clone();
        let complete_open = complete_open.clone();
        let saving = saving.clone();
        let complete_error = complete_error.clone();
        let success_message = success_message.clone();

        Callback::from(move |input: CompletionInput| {
            let amount = match validate_shopping_total(&input.total) {
                Ok(amount) => amount,
                Err(message) => {
                    complete_error.set(Some(message));
                    return;
                }
            };

            let api_client = api_client.clone();
            let list = list.clone();
            let complete_open = complete_open.clone();
            let saving = saving.clone();
            let complete_error = complete_error.clone();
            let success_message = success_message.clone();

            spawn_local(async move {
                saving.set(true);
                complete_error.set(None);

                let today = date_utils::today();
                let payload = ExpensePayload {
                    name: completion_expense_name(today, &input.note),
                    amount,
                    frequency: ExpenseFrequency::Custom,
                    category: "spesa".to_string(),
                    day_of_month: None,
                    date: Some(date_utils::today_key()),
                    is_active: Some(true),
                };

                match api_client.create_expense(&payload).await {
                    Ok(_) => {
                        // Bought items leave the list; everything still
                        // unchecked carries over.
                        let mut next = (*list).clone();
                        next.prune_checked();
                        shopping_store::save(&next);
                        list.set(next);
                        complete_open.set(false);
                        success_message.set(Some(format!(
                            "Spesa di €{} aggiunta correttamente!",
                            format_number(amount)
                        )));

                        let success_message = success_message.clone();
                        spawn_local(async move {
                            TimeoutFuture::new(SUCCESS_CLEAR_MS).await;
                            success_message.set(None);
                        });
                    }
                    Err(e) => complete_error.set(Some(e.user_message())),
                }
                saving.set(false);
            });
        })
    };

    UseShoppingResult {
        state: ShoppingState {
            list: (*list).clone(),
            complete_open: *complete_open,
            saving: *saving,
            complete_error: (*complete_error).clone(),
            success_message: (*success_message).clone(),
        },
        actions: UseShoppingActions {
            add,
            toggle,
            remove,
            clear,
            set_complete_open,
            complete,
        },
    }
}

use shared::{ExtraIncome, FamilyMember};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::{ApiClient, Logger};

use super::DialogState;

/// Extra-income dialogs need the owning member alongside the income.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum IncomeDialog {
    #[default]
    Closed,
    Create {
        member_id: String,
    },
    Edit {
        member_id: String,
        income: ExtraIncome,
    },
    ConfirmDelete {
        member_id: String,
        income: ExtraIncome,
    },
}

#[derive(Clone, PartialEq)]
pub struct MembersState {
    pub members: Vec<FamilyMember>,
    pub loading: bool,
    pub expanded_id: Option<String>,
    pub member_dialog: DialogState<FamilyMember>,
    pub income_dialog: IncomeDialog,
    pub deleting: bool,
    pub delete_error: Option<String>,
}

#[derive(Clone)]
pub struct UseMembersActions {
    pub reload: Callback<()>,
    pub toggle_expanded: Callback<String>,
    pub set_member_dialog: Callback<DialogState<FamilyMember>>,
    pub set_income_dialog: Callback<IncomeDialog>,
    pub close_dialogs: Callback<()>,
    pub confirm_delete: Callback<()>,
}

pub struct UseMembersResult {
    pub state: MembersState,
    pub actions: UseMembersActions,
}

#[hook]
pub fn use_members(api_client: &ApiClient) -> UseMembersResult {
    let members = use_state(Vec::<FamilyMember>::new);
    let loading = use_state(|| true);
    let expanded_id = use_state(|| Option::<String>::None);
    let member_dialog = use_state(DialogState::<FamilyMember>::default);
    let income_dialog = use_state(IncomeDialog::default);
    let deleting = use_state(|| false);
    let delete_error = use_state(|| Option::<String>::None);

    let reload = {
        let api_client = api_client.clone();
        let members = members.clone();
        let loading = loading.clone();

        Callback::from(move |_| {
            let api_client = api_client.clone();
            let members = members.clone();
            let loading = loading.clone();

            spawn_local(async move {
                loading.set(true);
                match api_client.list_members().await {
                    Ok(data) => members.set(data),
                    Err(e) => Logger::error("members", &format!("load failed: {e}")),
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

    let toggle_expanded = {
        let expanded_id = expanded_id.clone();
        Callback::from(move |id: String| {
            if expanded_id.as_deref() == Some(id.as_str()) {
                expanded_id.set(None);
            } else {
                expanded_id.set(Some(id));
            }
        })
    };

    let set_member_dialog = {
        let member_dialog = member_dialog.clone();
        let delete_error = delete_error.clone();
        Callback::from(move |next: DialogState<FamilyMember>| {
            delete_error.set(None);
            member_dialog.set(next);
        })
    };

    let set_income_dialog = {
        let income_dialog = income_dialog.clone();
        let delete_error = delete_error.clone();
        Callback::from(move |next: IncomeDialog| {
            delete_error.set(None);
            income_dialog.set(next);
        })
    };

    let close_dialogs = {
        let member_dialog = member_dialog.clone();
        let income_dialog = income_dialog.clone();
        let delete_error = delete_error.clone();
        Callback::from(move |_| {
            member_dialog.set(DialogState::Closed);
            income_dialog.set(IncomeDialog::Closed);
            delete_error.set(None);
        })
    };

    // Deletes both member and extra-income confirmations, depending on
    // which dialog is armed. A failure keeps the dialog open so the user
    // can retry or cancel.
    let confirm_delete = {
        let api_client = api_client.clone();
        let member_dialog = member_dialog.clone();
        let income_dialog = income_dialog.clone();
        let deleting = deleting.clone();
        let delete_error = delete_error.clone();
        let reload = reload.clone();

        Callback::from(move |_| {
            let api_client = api_client.clone();
            let member_dialog = member_dialog.clone();
            let income_dialog = income_dialog.clone();
            let deleting = deleting.clone();
            let delete_error = delete_error.clone();
            let reload = reload.clone();

            spawn_local(async move {
                deleting.set(true);
                delete_error.set(None);

                let result = if let DialogState::ConfirmDelete(member) = &*member_dialog {
                    api_client.delete_member(&member.id).await
                } else if let IncomeDialog::ConfirmDelete { member_id, income } = &*income_dialog {
                    api_client.delete_extra_income(member_id, &income.id).await
                } else {
                    Ok(())
                };

                match result {
                    Ok(()) => {
                        member_dialog.set(DialogState::Closed);
                        income_dialog.set(IncomeDialog::Closed);
                        reload.emit(());
                    }
                    Err(e) => delete_error.set(Some(e.user_message())),
                }
                deleting.set(false);
            });
        })
    };

    UseMembersResult {
        state: MembersState {
            members: (*members).clone(),
            loading: *loading,
            expanded_id: (*expanded_id).clone(),
            member_dialog: (*member_dialog).clone(),
            income_dialog: (*income_dialog).clone(),
            deleting: *deleting,
            delete_error: (*delete_error).clone(),
        },
        actions: UseMembersActions {
            reload,
            toggle_expanded,
            set_member_dialog,
            set_income_dialog,
            close_dialogs,
            confirm_delete,
        },
    }
}

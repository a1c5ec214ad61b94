use shared::{RenovationItem, RenovationProject};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::{ApiClient, Logger};

use super::DialogState;

/// Item dialogs carry the owning project id alongside the item.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ItemDialog {
    #[default]
    Closed,
    Create {
        project_id: String,
    },
    Edit {
        project_id: String,
        item: RenovationItem,
    },
    ConfirmDelete {
        project_id: String,
        item: RenovationItem,
    },
}

#[derive(Clone, PartialEq)]
pub struct RenovationState {
    pub projects: Vec<RenovationProject>,
    pub loading: bool,
    pub expanded_id: Option<String>,
    pub project_dialog: DialogState<RenovationProject>,
    pub item_dialog: ItemDialog,
    pub deleting: bool,
    pub delete_error: Option<String>,
}

#[derive(Clone)]
pub struct UseRenovationActions {
    pub reload: Callback<()>,
    pub toggle_expanded: Callback<String>,
    pub set_project_dialog: Callback<DialogState<RenovationProject>>,
    pub set_item_dialog: Callback<ItemDialog>,
    pub close_dialogs: Callback<()>,
    pub confirm_delete: Callback<()>,
}

pub struct UseRenovationResult {
    pub state: RenovationState,
    pub actions: UseRenovationActions,
}

#[hook]
pub fn use_renovation(api_client: &ApiClient) -> UseRenovationResult {
    let projects = use_state(Vec::<RenovationProject>::new);
    let loading = use_state(|| true);
    let expanded_id = use_state(|| Option::<String>::None);
    let project_dialog = use_state(DialogState::<RenovationProject>::default);
    let item_dialog = use_state(ItemDialog::default);
    let deleting = use_state(|| false);
    let delete_error = use_state(|| Option::<String>::None);

    let reload = {
        let api_client = api_client.clone();
        let projects = projects.clone();
        let loading = loading.clone();

        Callback::from(move |_| {
            let api_client = api_client.clone();
            let projects = projects.clone();
            let loading = loading.clone();

            spawn_local(async move {
                loading.set(true);
                match api_client.list_projects().await {
                    Ok(data) => projects.set(data),
                    Err(e) => Logger::error("renovation", &format!("load failed: {e}")),
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

    let set_project_dialog = {
        let project_dialog = project_dialog.clone();
        let delete_error = delete_error.clone();
        Callback::from(move |next: DialogState<RenovationProject>| {
            delete_error.set(None);
            project_dialog.set(next);
        })
    };

    let set_item_dialog = {
        let item_dialog = item_dialog.clone();
        let delete_error = delete_error.clone();
        Callback::from(move |next: ItemDialog| {
            delete_error.set(None);
            item_dialog.set(next);
        })
    };

    let close_dialogs = {
        let project_dialog = project_dialog.clone();
        let item_dialog = item_dialog.clone();
        let delete_error = delete_error.clone();
        Callback::from(move |_| {
            project_dialog.set(DialogState::Closed);
            item_dialog.set(ItemDialog::Closed);
            delete_error.set(None);
        })
    };

    let confirm_delete = {
        let api_client = api_client.clone();
        let project_dialog = project_dialog.clone();
        let item_dialog = item_dialog.clone();
        let deleting = deleting.clone();
        let delete_error = delete_error.clone();
        let reload = reload.clone();

        Callback::from(move |_| {
            let api_client = api_client.clone();
            let project_dialog = project_dialog.clone();
            let item_dialog = item_dialog.clone();
            let deleting = deleting.clone();
            let delete_error = delete_error.clone();
            let reload = reload.clone();

            spawn_local(async move {
                deleting.set(true);
                delete_error.set(None);

                let result = if let DialogState::ConfirmDelete(project) = &*project_dialog {
                    api_client.delete_project(&project.id).await
                } else if let ItemDialog::ConfirmDelete { project_id, item } = &*item_dialog {
                    api_client.delete_renovation_item(project_id, &item.id).await
                } else {
                    Ok(())
                };

                match result {
                    Ok(()) => {
                        project_dialog.set(DialogState::Closed);
                        item_dialog.set(ItemDialog::Closed);
                        reload.emit(());
                    }
                    Err(e) => delete_error.set(Some(e.user_message())),
                }
                deleting.set(false);
            });
        })
    };

    UseRenovationResult {
        state: RenovationState {
            projects: (*projects).clone(),
            loading: *loading,
            expanded_id: (*expanded_id).clone(),
            project_dialog: (*project_dialog).clone(),
            item_dialog: (*item_dialog).clone(),
            deleting: *deleting,
            delete_error: (*delete_error).clone(),
        },
        actions: UseRenovationActions {
            reload,
            toggle_expanded,
            set_project_dialog,
            set_item_dialog,
            close_dialogs,
            confirm_delete,
        },
    }
}

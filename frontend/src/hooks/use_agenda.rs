use shared::{Appointment, RangeFilter};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::{ApiClient, Logger};

use super::DialogState;

#[derive(Clone, PartialEq)]
pub struct AgendaState {
    pub appointments: Vec<Appointment>,
    pub loading: bool,
    pub filter: RangeFilter,
    pub show_past: bool,
    pub dialog: DialogState<Appointment>,
    pub deleting: bool,
    pub delete_error: Option<String>,
}

#[derive(Clone)]
pub struct UseAgendaActions {
    pub reload: Callback<()>,
    pub set_filter: Callback<RangeFilter>,
    pub toggle_past: Callback<()>,
    pub set_dialog: Callback<DialogState<Appointment>>,
    pub confirm_delete: Callback<()>,
}

pub struct UseAgendaResult {
    pub state: AgendaState,
    pub actions: UseAgendaActions,
}

#[hook]
pub fn use_agenda(api_client: &ApiClient) -> UseAgendaResult {
    let appointments = use_state(Vec::<Appointment>::new);
    let loading = use_state(|| true);
    let filter = use_state(|| RangeFilter::All);
    let show_past = use_state(|| false);
    let dialog = use_state(DialogState::<Appointment>::default);
    let deleting = use_state(|| false);
    let delete_error = use_state(|| Option::<String>::None);

    let reload = {
        let api_client = api_client.clone();
        let appointments = appointments.clone();
        let loading = loading.clone();

        Callback::from(move |_| {
            let api_client = api_client.clone();
            let appointments = appointments.clone();
            let loading = loading.clone();

            spawn_local(async move {
                loading.set(true);
                match api_client.list_appointments().await {
                    Ok(data) => appointments.set(data),
                    Err(e) => Logger::error("agenda", &format!("load failed: {e}")),
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

    let set_filter = {
        let filter = filter.clone();
        Callback::from(move |next: RangeFilter| filter.set(next))
    };

    let toggle_past = {
        let show_past = show_past.clone();
        Callback::from(move |_| show_past.set(!*show_past))
    };

    let set_dialog = {
        let dialog = dialog.clone();
        let delete_error = delete_error.clone();
        Callback::from(move |next: DialogState<Appointment>| {
            delete_error.set(None);
            dialog.set(next);
        })
    };

    let confirm_delete = {
        let api_client = api_client.clone();
        let dialog = dialog.clone();
        let deleting = deleting.clone();
        let delete_error = delete_error.clone();
        let reload = reload.clone();

        Callback::from(move |_| {
            let Some(appointment) = dialog.delete_target().cloned() else {
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
                match api_client.delete_appointment(&appointment.id).await {
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

    UseAgendaResult {
        state: AgendaState {
            appointments: (*appointments).clone(),
            loading: *loading,
            filter: *filter,
            show_past: *show_past,
            dialog: (*dialog).clone(),
            deleting: *deleting,
            delete_error: (*delete_error).clone(),
        },
        actions: UseAgendaActions {
            reload,
            set_filter,
            toggle_past,
            set_dialog,
            confirm_delete,
        },
    }
}

use shared::{
    appointment_category_label, day_label, filter_by_range, format_time, group_by_day,
    partition_upcoming, Appointment, RangeFilter,
};
use yew::prelude::*;

use crate::components::appointment_dialog::AppointmentDialog;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::layout::PageHeader;
use crate::components::loading::PageLoader;
use crate::hooks::use_agenda::use_agenda;
use crate::hooks::{use_session, DialogState};
use crate::services::date_utils;

#[function_component(AgendaPage)]
pub fn agenda_page() -> Html {
    let session = use_session();
    let api_client = session.api_client();
    let agenda = use_agenda(&api_client);
    let state = agenda.state;
    let actions = agenda.actions;

    if state.loading {
        return html! { <PageLoader /> };
    }

    let now = date_utils::now_local();
    let today = now.date();
    let (upcoming, past) = partition_upcoming(&state.appointments, now);
    let filtered = filter_by_range(&upcoming, state.filter, today);
    let grouped = group_by_day(&filtered);

    let open_create = {
        let set_dialog = actions.set_dialog.clone();
        Callback::from(move |_: MouseEvent| set_dialog.emit(DialogState::Create))
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
    let on_toggle_past = {
        let toggle_past = actions.toggle_past.clone();
        Callback::from(move |_: MouseEvent| toggle_past.emit(()))
    };

    html! {
        <div>
            <PageHeader
                title="Agenda"
                description={Some(format!("{} prossimi appuntamenti", upcoming.len()))}
                actions={html! {
                    <button class="btn btn-primary" onclick={open_create}>{"Nuovo appuntamento"}</button>
                }}
            />

            <div class="filter-row">
                {for RangeFilter::ALL.iter().map(|filter| {
                    let active = *filter == state.filter;
                    let set_filter = actions.set_filter.clone();
                    let value = *filter;
                    let onclick = Callback::from(move |_: MouseEvent| set_filter.emit(value));
                    html! {
                        <button
                            class={classes!("btn", "btn-sm", if active { "btn-primary" } else { "btn-outline" })}
                            {onclick}
                        >
                            {filter.label()}
                        </button>
                    }
                })}
            </div>

            if filtered.is_empty() {
                <div class="card empty-state">
                    {"Nessun appuntamento trovato per questo periodo."}
                </div>
            } else {
                {for grouped.iter().map(|(day, appointments)| {
                    html! {
                        <div class="group-section">
                            <h3 class="group-title">{day_label(*day, today)}</h3>
                            <div class="card card-flush">
                                {for appointments.iter().map(|appointment| {
                                    html! {
                                        <AppointmentRow
                                            appointment={appointment.clone()}
                                            past={false}
                                            set_dialog={actions.set_dialog.clone()}
                                        />
                                    }
                                })}
                            </div>
                        </div>
                    }
                })}
            }

            if !past.is_empty() {
                <div class="group-section group-inactive">
                    <button class="group-toggle" onclick={on_toggle_past}>
                        {if state.show_past { "▾ " } else { "▸ " }}
                        {format!("Passati ({})", past.len())}
                    </button>
                    if state.show_past {
                        <div class="card card-flush">
                            {for past.iter().map(|appointment| {
                                html! {
                                    <AppointmentRow
                                        appointment={appointment.clone()}
                                        past={true}
                                        set_dialog={actions.set_dialog.clone()}
                                    />
                                }
                            })}
                        </div>
                    }
                </div>
            }

            if state.dialog.form_open() {
                <AppointmentDialog
                    api_client={api_client.clone()}
                    appointment={state.dialog.editing().cloned()}
                    on_success={on_dialog_success}
                    on_close={on_dialog_close.clone()}
                />
            }

            if let Some(appointment) = state.dialog.delete_target() {
                <ConfirmDialog
                    title="Elimina appuntamento"
                    message={format!("Sei sicuro di voler eliminare \"{}\"?", appointment.title)}
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
struct AppointmentRowProps {
    appointment: Appointment,
    past: bool,
    set_dialog: Callback<DialogState<Appointment>>,
}

#[function_component(AppointmentRow)]
fn appointment_row(props: &AppointmentRowProps) -> Html {
    let appointment = &props.appointment;

    let on_edit = {
        let set_dialog = props.set_dialog.clone();
        let appointment = appointment.clone();
        Callback::from(move |_: MouseEvent| {
            set_dialog.emit(DialogState::Edit(appointment.clone()))
        })
    };
    let on_delete = {
        let set_dialog = props.set_dialog.clone();
        let appointment = appointment.clone();
        Callback::from(move |_: MouseEvent| {
            set_dialog.emit(DialogState::ConfirmDelete(appointment.clone()))
        })
    };

    html! {
        <div class={classes!("row", props.past.then_some("row-muted"))}>
            <div class="row-main">
                <div class="row-title">
                    <span class={classes!("badge", format!("badge-{}", appointment.category))}>
                        {appointment_category_label(&appointment.category)}
                    </span>
                    <span class="row-name">{appointment.title.clone()}</span>
                    if !appointment.notifications.is_empty() {
                        <span class="badge badge-bell" title="Promemoria attivi">{"🔔"}</span>
                    }
                </div>
                <div class="row-meta">
                    <span>{format_time(&appointment.start_date)}</span>
                    if let Some(end) = &appointment.end_date {
                        <span>{format!("→ {}", format_time(end))}</span>
                    }
                    if let Some(member) = &appointment.member {
                        <span>{format!("· {}", member.name)}</span>
                    }
                </div>
            </div>
            <div class="row-buttons">
                <button class="btn-icon" onclick={on_edit}>{"Modifica"}</button>
                <button class="btn-icon btn-icon-danger" onclick={on_delete}>{"Elimina"}</button>
            </div>
        </div>
    }
}

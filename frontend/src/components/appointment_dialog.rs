use shared::{
    format_datetime_input, validate_appointment, Appointment, AppointmentFormErrors, FamilyMember,
    NotificationChannel, NotificationInput, NotificationSettings, APPOINTMENT_CATEGORIES,
    MINUTES_OPTIONS,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::form_field::FormField;
use crate::services::ApiClient;

/// `datetime-local` inputs emit `YYYY-MM-DDTHH:MM`; the API stores full
/// clock timestamps.
fn normalize_datetime(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.len() == 16 {
        format!("{trimmed}:00")
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_datetime;

    #[test]
    fn test_normalize_datetime_appends_seconds() {
        assert_eq!(normalize_datetime("2026-09-01T10:30"), "2026-09-01T10:30:00");
        assert_eq!(
            normalize_datetime("2026-09-01T10:30:00"),
            "2026-09-01T10:30:00"
        );
        assert_eq!(normalize_datetime(""), "");
    }
}

fn channel_value(channel: NotificationChannel) -> &'static str {
    match channel {
        NotificationChannel::Sms => "SMS",
        NotificationChannel::Whatsapp => "WHATSAPP",
    }
}

fn channel_from_value(value: &str) -> NotificationChannel {
    match value {
        "SMS" => NotificationChannel::Sms,
        _ => NotificationChannel::Whatsapp,
    }
}

#[derive(Properties, PartialEq)]
pub struct AppointmentDialogProps {
    pub api_client: ApiClient,
    #[prop_or_default]
    pub appointment: Option<Appointment>,
    pub on_success: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(AppointmentDialog)]
pub fn appointment_dialog(props: &AppointmentDialogProps) -> Html {
    let is_edit = props.appointment.is_some();
    let title = use_state(|| {
        props
            .appointment
            .as_ref()
            .map(|a| a.title.clone())
            .unwrap_or_default()
    });
    let category = use_state(|| {
        props
            .appointment
            .as_ref()
            .map(|a| a.category.clone())
            .unwrap_or_else(|| "altro".to_string())
    });
    let start_date = use_state(|| {
        props
            .appointment
            .as_ref()
            .map(|a| format_datetime_input(&a.start_date))
            .unwrap_or_default()
    });
    let end_date = use_state(|| {
        props
            .appointment
            .as_ref()
            .and_then(|a| a.end_date.as_deref())
            .map(format_datetime_input)
            .unwrap_or_default()
    });
    let member_id = use_state(|| {
        props
            .appointment
            .as_ref()
            .and_then(|a| a.member_id.clone())
            .unwrap_or_default()
    });
    let description = use_state(|| {
        props
            .appointment
            .as_ref()
            .and_then(|a| a.description.clone())
            .unwrap_or_default()
    });
    let notes = use_state(|| {
        props
            .appointment
            .as_ref()
            .and_then(|a| a.notes.clone())
            .unwrap_or_default()
    });
    let notifications = use_state(|| {
        props
            .appointment
            .as_ref()
            .map(|a| {
                a.notifications
                    .iter()
                    .map(|n| NotificationInput {
                        minutes_before: n.minutes_before,
                        channel: n.channel,
                        recipient_phone: n.recipient_phone.clone(),
                    })
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default()
    });
    let errors = use_state(AppointmentFormErrors::default);
    let submit_error = use_state(|| Option::<String>::None);
    let submitting = use_state(|| false);

    // Member choices and notification defaults are secondary reads; either
    // failing just leaves its section with fewer options.
    let members = use_state(Vec::<FamilyMember>::new);
    let defaults = use_state(|| Option::<NotificationSettings>::None);
    {
        let api_client = props.api_client.clone();
        let members = members.clone();
        let defaults = defaults.clone();
        use_effect_with((), move |_| {
            {
                let api_client = api_client.clone();
                let members = members.clone();
                spawn_local(async move {
                    if let Ok(data) = api_client.list_members().await {
                        members.set(data);
                    }
                });
            }
            spawn_local(async move {
                if let Ok(data) = api_client.notification_settings().await {
                    defaults.set(Some(data));
                }
            });
            || ()
        });
    }

    let on_title = {
        let title = title.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            title.set(input.value());
        })
    };
    let on_category = {
        let category = category.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            category.set(select.value());
        })
    };
    let on_start = {
        let start_date = start_date.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            start_date.set(input.value());
        })
    };
    let on_end = {
        let end_date = end_date.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            end_date.set(input.value());
        })
    };
    let on_member = {
        let member_id = member_id.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            member_id.set(select.value());
        })
    };
    let on_description = {
        let description = description.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            description.set(input.value());
        })
    };
    let on_notes = {
        let notes = notes.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            notes.set(input.value());
        })
    };

    let on_add_notification = {
        let notifications = notifications.clone();
        let defaults = defaults.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*notifications).clone();
            let seed = defaults.as_ref();
            next.push(NotificationInput {
                minutes_before: seed.map(|s| s.default_minutes).unwrap_or(60),
                channel: seed
                    .map(|s| s.default_channel)
                    .unwrap_or(NotificationChannel::Whatsapp),
                recipient_phone: seed
                    .and_then(|s| s.default_phone.clone())
                    .unwrap_or_default(),
            });
            notifications.set(next);
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_submit = {
        let api_client = props.api_client.clone();
        let appointment = props.appointment.clone();
        let on_success = props.on_success.clone();
        let title = title.clone();
        let category = category.clone();
        let start_date = start_date.clone();
        let end_date = end_date.clone();
        let member_id = member_id.clone();
        let description = description.clone();
        let notes = notes.clone();
        let notifications = notifications.clone();
        let errors = errors.clone();
        let submit_error = submit_error.clone();
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let payload = match validate_appointment(
                &title,
                &category,
                &normalize_datetime(&start_date),
                &normalize_datetime(&end_date),
                &member_id,
                &description,
                &notes,
                &notifications,
            ) {
                Ok(payload) => {
                    errors.set(AppointmentFormErrors::default());
                    payload
                }
                Err(field_errors) => {
                    errors.set(field_errors);
                    return;
                }
            };

            let api_client = api_client.clone();
            let appointment = appointment.clone();
            let on_success = on_success.clone();
            let submit_error = submit_error.clone();
            let submitting = submitting.clone();

            spawn_local(async move {
                submitting.set(true);
                submit_error.set(None);
                let result = match &appointment {
                    Some(appointment) => {
                        api_client
                            .update_appointment(&appointment.id, &payload)
                            .await
                    }
                    None => api_client.create_appointment(&payload).await,
                };
                match result {
                    Ok(_) => on_success.emit(()),
                    Err(e) => submit_error.set(Some(e.user_message())),
                }
                submitting.set(false);
            });
        })
    };

    let notification_rows = notifications.iter().enumerate().map(|(index, row)| {
        let on_minutes = {
            let notifications = notifications.clone();
            Callback::from(move |e: Event| {
                let select: HtmlSelectElement = e.target_unchecked_into();
                let minutes = select.value().parse::<u32>().unwrap_or(60);
                let mut next = (*notifications).clone();
                if let Some(entry) = next.get_mut(index) {
                    entry.minutes_before = minutes;
                }
                notifications.set(next);
            })
        };
        let on_channel = {
            let notifications = notifications.clone();
            Callback::from(move |e: Event| {
                let select: HtmlSelectElement = e.target_unchecked_into();
                let channel = channel_from_value(&select.value());
                let mut next = (*notifications).clone();
                if let Some(entry) = next.get_mut(index) {
                    entry.channel = channel;
                }
                notifications.set(next);
            })
        };
        let on_phone = {
            let notifications = notifications.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                let value = input.value();
                let mut next = (*notifications).clone();
                if let Some(entry) = next.get_mut(index) {
                    entry.recipient_phone = value;
                }
                notifications.set(next);
            })
        };
        let on_remove = {
            let notifications = notifications.clone();
            Callback::from(move |_: MouseEvent| {
                let mut next = (*notifications).clone();
                next.remove(index);
                notifications.set(next);
            })
        };
        let phone_error = errors.phones.get(index).cloned().flatten();

        html! {
            <div class="notification-row">
                <select class="input" onchange={on_minutes}>
                    {for MINUTES_OPTIONS.iter().map(|(value, label)| {
                        html! {
                            <option value={value.to_string()} selected={*value == row.minutes_before}>
                                {*label}
                            </option>
                        }
                    })}
                </select>
                <select class="input" onchange={on_channel}>
                    <option value="WHATSAPP" selected={row.channel == NotificationChannel::Whatsapp}>{"WhatsApp"}</option>
                    <option value="SMS" selected={row.channel == NotificationChannel::Sms}>{"SMS"}</option>
                </select>
                <div class="notification-phone">
                    <input
                        class="input"
                        placeholder="+39 333 000 0000"
                        value={row.recipient_phone.clone()}
                        oninput={on_phone}
                    />
                    if let Some(error) = phone_error {
                        <p class="form-error">{error}</p>
                    }
                </div>
                <button type="button" class="btn-icon btn-icon-danger" onclick={on_remove}>{"Rimuovi"}</button>
            </div>
        }
    });

    html! {
        <div class="dialog-backdrop">
            <div class="dialog dialog-lg">
                <h2 class="dialog-title">
                    {if is_edit { "Modifica appuntamento" } else { "Nuovo appuntamento" }}
                </h2>
                <form onsubmit={on_submit}>
                    <FormField label="Titolo" required=true error={errors.title.clone()}>
                        <input class="input" placeholder="es. Visita medica, Riunione..." value={(*title).clone()} oninput={on_title} />
                    </FormField>

                    <FormField label="Categoria">
                        <select class="input" onchange={on_category}>
                            {for APPOINTMENT_CATEGORIES.iter().map(|(value, label)| {
                                html! {
                                    <option value={*value} selected={*value == category.as_str()}>{*label}</option>
                                }
                            })}
                        </select>
                    </FormField>

                    <div class="form-grid-2">
                        <FormField label="Data e ora inizio" required=true error={errors.start_date.clone()}>
                            <input type="datetime-local" class="input" value={(*start_date).clone()} oninput={on_start} />
                        </FormField>
                        <FormField label="Data e ora fine">
                            <input type="datetime-local" class="input" value={(*end_date).clone()} oninput={on_end} />
                        </FormField>
                    </div>

                    <FormField label="Membro della famiglia">
                        <select class="input" onchange={on_member}>
                            <option value="" selected={member_id.is_empty()}>{"Nessuno"}</option>
                            {for members.iter().map(|member| {
                                html! {
                                    <option value={member.id.clone()} selected={member.id == *member_id}>
                                        {member.name.clone()}
                                    </option>
                                }
                            })}
                        </select>
                    </FormField>

                    <FormField label="Descrizione">
                        <textarea class="input" rows="2" value={(*description).clone()} oninput={on_description} />
                    </FormField>

                    <FormField label="Note">
                        <textarea class="input" rows="2" value={(*notes).clone()} oninput={on_notes} />
                    </FormField>

                    <div class="notification-section">
                        <div class="row-detail-header">
                            <h4>{"Promemoria"}</h4>
                            <button type="button" class="btn btn-outline btn-sm" onclick={on_add_notification}>
                                {"Aggiungi promemoria"}
                            </button>
                        </div>
                        if notifications.is_empty() {
                            <p class="empty-note">{"Nessun promemoria configurato."}</p>
                        } else {
                            {for notification_rows}
                        }
                    </div>

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

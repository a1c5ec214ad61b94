use shared::{NotificationChannel, SettingsPayload, TestNotificationRequest, MINUTES_OPTIONS};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::form_field::FormField;
use crate::components::layout::PageHeader;
use crate::components::loading::PageLoader;
use crate::hooks::use_session;
use crate::hooks::use_settings::use_settings;

const TIMEZONES: [&str; 10] = [
    "Europe/Rome",
    "Europe/London",
    "Europe/Paris",
    "Europe/Berlin",
    "Europe/Madrid",
    "Europe/Zurich",
    "America/New_York",
    "America/Sao_Paulo",
    "Asia/Tokyo",
    "UTC",
];

fn channel_from_value(value: &str) -> NotificationChannel {
    match value {
        "SMS" => NotificationChannel::Sms,
        _ => NotificationChannel::Whatsapp,
    }
}

#[function_component(SettingsPage)]
pub fn settings_page() -> Html {
    let session = use_session();
    let api_client = session.api_client();
    let settings = use_settings(&api_client);
    let state = settings.state;
    let actions = settings.actions;

    let default_phone = use_state(String::new);
    let default_channel = use_state(|| NotificationChannel::Whatsapp);
    let default_minutes = use_state(|| 60u32);
    let timezone = use_state(|| "Europe/Rome".to_string());
    let test_phone = use_state(String::new);
    let test_channel = use_state(|| NotificationChannel::Whatsapp);
    let test_phone_error = use_state(|| Option::<String>::None);

    // Seed the form once the settings arrive.
    {
        let default_phone = default_phone.clone();
        let default_channel = default_channel.clone();
        let default_minutes = default_minutes.clone();
        let timezone = timezone.clone();
        let test_phone = test_phone.clone();
        let test_channel = test_channel.clone();
        use_effect_with(state.settings.clone(), move |settings| {
            if let Some(settings) = settings {
                default_phone.set(settings.default_phone.clone().unwrap_or_default());
                default_channel.set(settings.default_channel);
                default_minutes.set(settings.default_minutes);
                timezone.set(settings.timezone.clone());
                test_phone.set(settings.default_phone.clone().unwrap_or_default());
                test_channel.set(settings.default_channel);
            }
            || ()
        });
    }

    if state.loading {
        return html! { <PageLoader /> };
    }

    let on_phone = {
        let default_phone = default_phone.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            default_phone.set(input.value());
        })
    };
    let on_channel = {
        let default_channel = default_channel.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            default_channel.set(channel_from_value(&select.value()));
        })
    };
    let on_minutes = {
        let default_minutes = default_minutes.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            default_minutes.set(select.value().parse().unwrap_or(60));
        })
    };
    let on_timezone = {
        let timezone = timezone.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            timezone.set(select.value());
        })
    };
    let on_test_phone = {
        let test_phone = test_phone.clone();
        let test_phone_error = test_phone_error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            test_phone.set(input.value());
            test_phone_error.set(None);
        })
    };
    let on_test_channel = {
        let test_channel = test_channel.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            test_channel.set(channel_from_value(&select.value()));
        })
    };

    let on_save = {
        let save = actions.save.clone();
        let default_phone = default_phone.clone();
        let default_channel = default_channel.clone();
        let default_minutes = default_minutes.clone();
        let timezone = timezone.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let phone = default_phone.trim().to_string();
            save.emit(SettingsPayload {
                default_phone: if phone.is_empty() { None } else { Some(phone) },
                default_channel: *default_channel,
                default_minutes: *default_minutes,
                timezone: (*timezone).clone(),
            });
        })
    };

    let on_send_test = {
        let send_test = actions.send_test.clone();
        let test_phone = test_phone.clone();
        let test_channel = test_channel.clone();
        let test_phone_error = test_phone_error.clone();
        Callback::from(move |_: MouseEvent| {
            let phone = test_phone.trim().to_string();
            if phone.is_empty() {
                test_phone_error.set(Some(
                    "Inserisci un numero di telefono per il test.".to_string(),
                ));
                return;
            }
            send_test.emit(TestNotificationRequest {
                phone,
                channel: *test_channel,
            });
        })
    };

    html! {
        <div class="settings-page">
            <PageHeader
                title="Impostazioni"
                description={Some("Configura fuso orario e notifiche".to_string())}
            />

            <div class="card">
                <h3 class="card-title">{"Preferenze notifiche"}</h3>
                <form onsubmit={on_save}>
                    <FormField label="Numero di telefono predefinito">
                        <input class="input" placeholder="+39 333 000 0000" value={(*default_phone).clone()} oninput={on_phone} />
                    </FormField>

                    <div class="form-grid-2">
                        <FormField label="Canale predefinito">
                            <select class="input" onchange={on_channel}>
                                <option value="WHATSAPP" selected={*default_channel == NotificationChannel::Whatsapp}>{"WhatsApp"}</option>
                                <option value="SMS" selected={*default_channel == NotificationChannel::Sms}>{"SMS"}</option>
                            </select>
                        </FormField>

                        <FormField label="Anticipo predefinito">
                            <select class="input" onchange={on_minutes}>
                                {for MINUTES_OPTIONS.iter().map(|(value, label)| {
                                    html! {
                                        <option value={value.to_string()} selected={*value == *default_minutes}>
                                            {*label}
                                        </option>
                                    }
                                })}
                            </select>
                        </FormField>
                    </div>

                    <FormField label="Fuso orario">
                        <select class="input" onchange={on_timezone}>
                            {for TIMEZONES.iter().map(|tz| {
                                html! {
                                    <option value={*tz} selected={*tz == timezone.as_str()}>{*tz}</option>
                                }
                            })}
                        </select>
                    </FormField>

                    if let Some(message) = &state.save_message {
                        <p class={classes!(if state.save_failed { "form-error" } else { "form-success" })}>
                            {message.clone()}
                        </p>
                    }

                    <button type="submit" class="btn btn-primary" disabled={state.saving}>
                        {if state.saving { "Salvataggio..." } else { "Salva impostazioni" }}
                    </button>
                </form>
            </div>

            <div class="card">
                <h3 class="card-title">{"Invia notifica di test"}</h3>
                <div class="form-grid-2">
                    <FormField label="Numero destinatario" error={(*test_phone_error).clone()}>
                        <input class="input" placeholder="+39 333 000 0000" value={(*test_phone).clone()} oninput={on_test_phone} />
                    </FormField>
                    <FormField label="Canale">
                        <select class="input" onchange={on_test_channel}>
                            <option value="WHATSAPP" selected={*test_channel == NotificationChannel::Whatsapp}>{"WhatsApp"}</option>
                            <option value="SMS" selected={*test_channel == NotificationChannel::Sms}>{"SMS"}</option>
                        </select>
                    </FormField>
                </div>

                if let Some(message) = &state.test_message {
                    <p class="form-success">{message.clone()}</p>
                }
                if let Some(error) = &state.test_error {
                    <p class="form-error">{error.clone()}</p>
                }

                <button class="btn btn-outline" onclick={on_send_test} disabled={state.testing}>
                    {if state.testing { "Invio..." } else { "Invia test" }}
                </button>
            </div>
        </div>
    }
}

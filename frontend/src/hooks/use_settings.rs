use gloo::timers::future::TimeoutFuture;
use shared::{NotificationSettings, SettingsPayload, TestNotificationRequest};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::{ApiClient, Logger};

const MESSAGE_CLEAR_MS: u32 = 4000;

#[derive(Clone, PartialEq)]
pub struct SettingsState {
    pub settings: Option<NotificationSettings>,
    pub loading: bool,
    pub saving: bool,
    pub save_message: Option<String>,
    pub save_failed: bool,
    pub testing: bool,
    pub test_message: Option<String>,
    pub test_error: Option<String>,
}

#[derive(Clone)]
pub struct UseSettingsActions {
    pub save: Callback<SettingsPayload>,
    pub send_test: Callback<TestNotificationRequest>,
}

pub struct UseSettingsResult {
    pub state: SettingsState,
    pub actions: UseSettingsActions,
}

#[hook]
pub fn use_settings(api_client: &ApiClient) -> UseSettingsResult {
    let settings = use_state(|| Option::<NotificationSettings>::None);
    let loading = use_state(|| true);
    let saving = use_state(|| false);
    let save_message = use_state(|| Option::<String>::None);
    let save_failed = use_state(|| false);
    let testing = use_state(|| false);
    let test_message = use_state(|| Option::<String>::None);
    let test_error = use_state(|| Option::<String>::None);

    {
        let api_client = api_client.clone();
        let settings = settings.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match api_client.notification_settings().await {
                    Ok(data) => settings.set(Some(data)),
                    Err(e) => Logger::error("settings", &format!("load failed: {e}")),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let save = {
        let api_client = api_client.clone();
        let settings = settings.clone();
        let saving = saving.clone();
        let save_message = save_message.clone();
        let save_failed = save_failed.clone();

        Callback::from(move |payload: SettingsPayload| {
            let api_client = api_client.clone();
            let settings = settings.clone();
            let saving = saving.clone();
            let save_message = save_message.clone();
            let save_failed = save_failed.clone();

            spawn_local(async move {
                saving.set(true);
                save_message.set(None);
                match api_client.update_notification_settings(&payload).await {
                    Ok(updated) => {
                        settings.set(Some(updated));
                        save_failed.set(false);
                        save_message.set(Some("Impostazioni salvate con successo.".to_string()));
                    }
                    Err(e) => {
                        save_failed.set(true);
                        save_message.set(Some(e.user_message()));
                    }
                }
                saving.set(false);

                let save_message = save_message.clone();
                spawn_local(async move {
                    TimeoutFuture::new(MESSAGE_CLEAR_MS).await;
                    save_message.set(None);
                });
            });
        })
    };

    let send_test = {
        let api_client = api_client.clone();
        let testing = testing.clone();
        let test_message = test_message.clone();
        let test_error = test_error.clone();

        Callback::from(move |request: TestNotificationRequest| {
            let api_client = api_client.clone();
            let testing = testing.clone();
            let test_message = test_message.clone();
            let test_error = test_error.clone();

            spawn_local(async move {
                testing.set(true);
                test_message.set(None);
                test_error.set(None);
                match api_client.send_test_notification(&request).await {
                    Ok(response) if response.success => {
                        test_message.set(Some(
                            "Notifica di test inviata con successo! Controlla il tuo telefono."
                                .to_string(),
                        ));
                    }
                    Ok(response) => test_error.set(Some(response.message)),
                    Err(e) => test_error.set(Some(e.user_message())),
                }
                testing.set(false);
            });
        })
    };

    UseSettingsResult {
        state: SettingsState {
            settings: (*settings).clone(),
            loading: *loading,
            saving: *saving,
            save_message: (*save_message).clone(),
            save_failed: *save_failed,
            testing: *testing,
            test_message: (*test_message).clone(),
            test_error: (*test_error).clone(),
        },
        actions: UseSettingsActions { save, send_test },
    }
}

use shared::{validate_login, LoginFormErrors};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::{use_session, SessionAction};
use crate::services::{session, ApiClient};

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let session_handle = use_session();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let errors = use_state(LoginFormErrors::default);
    let submit_error = use_state(|| Option::<String>::None);
    let submitting = use_state(|| false);

    let on_email = {
        let email = email.clone();
        let submit_error = submit_error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
            submit_error.set(None);
        })
    };

    let on_password = {
        let password = password.clone();
        let submit_error = submit_error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
            submit_error.set(None);
        })
    };

    let on_submit = {
        let session_handle = session_handle.clone();
        let email = email.clone();
        let password = password.clone();
        let errors = errors.clone();
        let submit_error = submit_error.clone();
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = match validate_login(&email, &password) {
                Ok(request) => {
                    errors.set(LoginFormErrors::default());
                    request
                }
                Err(field_errors) => {
                    errors.set(field_errors);
                    return;
                }
            };

            let session_handle = session_handle.clone();
            let submit_error = submit_error.clone();
            let submitting = submitting.clone();

            spawn_local(async move {
                submitting.set(true);
                submit_error.set(None);
                let api_client = ApiClient::new(None);
                match api_client.login(&request).await {
                    Ok(response) => {
                        session::save_token(&response.token);
                        session_handle
                            .dispatch(SessionAction::LoggedIn(response.user, response.token));
                    }
                    Err(e) => submit_error.set(Some(e.user_message())),
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <form class="login-form" onsubmit={on_submit}>
            <h2 class="login-title">{"Accedi"}</h2>

            <div class="form-field">
                <label class="form-label">{"Email"}<span class="form-required">{" *"}</span></label>
                <input
                    type="email"
                    class="input"
                    placeholder="email@esempio.it"
                    value={(*email).clone()}
                    oninput={on_email}
                />
                if let Some(error) = &errors.email {
                    <p class="form-error">{error.clone()}</p>
                }
            </div>

            <div class="form-field">
                <label class="form-label">{"Password"}<span class="form-required">{" *"}</span></label>
                <input
                    type="password"
                    class="input"
                    placeholder="••••••••"
                    value={(*password).clone()}
                    oninput={on_password}
                />
                if let Some(error) = &errors.password {
                    <p class="form-error">{error.clone()}</p>
                }
            </div>

            if let Some(error) = &*submit_error {
                <div class="alert alert-error">{error.clone()}</div>
            }

            <button type="submit" class="btn btn-primary btn-block" disabled={*submitting}>
                {if *submitting { "Accesso in corso..." } else { "Accedi" }}
            </button>
        </form>
    }
}

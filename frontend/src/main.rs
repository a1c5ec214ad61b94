//! Household finance and logistics dashboard, web client. The app shell
//! owns two pieces of state: the session (reducer-backed context, restored
//! from the stored token at startup) and the requested route, which is
//! passed through the guard on every render so protected pages bounce to
//! the login screen and vice versa.

mod components;
mod hooks;
mod services;

use shared::{resolve_route, Route};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use components::{
    AgendaPage, AppLayout, AuthLayout, DashboardPage, ExpensesPage, LoginPage, MembersPage,
    PageLoader, RenovationPage, SettingsPage, ShoppingPage,
};
use hooks::{Session, SessionAction, SessionHandle};
use services::{session as session_store, ApiClient, Logger};

#[function_component(App)]
fn app() -> Html {
    let session = use_reducer(|| Session::from_stored_token(session_store::load_token()));

    // Validate the stored token against /auth/me once at startup. Failure
    // is an expired session, not an error the user should see.
    {
        let session = session.clone();
        use_effect_with((), move |_| {
            if let Some(token) = session.token.clone() {
                spawn_local(async move {
                    let api_client = ApiClient::new(Some(token));
                    match api_client.me().await {
                        Ok(user) => session.dispatch(SessionAction::Restored(user)),
                        Err(e) => {
                            Logger::info("session", &format!("stored token rejected: {e}"));
                            session_store::clear_token();
                            session.dispatch(SessionAction::Invalidated);
                        }
                    }
                });
            }
            || ()
        });
    }

    let requested = use_state(|| Route::Dashboard);
    let on_navigate = {
        let requested = requested.clone();
        Callback::from(move |route: Route| requested.set(route))
    };

    if !session.initialized {
        return html! { <div class="app-boot"><PageLoader /></div> };
    }

    let route = resolve_route(*requested, session.is_authenticated());
    let page = match route {
        Route::Login => html! { <LoginPage /> },
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Members => html! { <MembersPage /> },
        Route::Expenses => html! { <ExpensesPage /> },
        Route::Renovation => html! { <RenovationPage /> },
        Route::Agenda => html! { <AgendaPage /> },
        Route::Shopping => html! { <ShoppingPage /> },
        Route::Settings => html! { <SettingsPage /> },
    };

    html! {
        <ContextProvider<SessionHandle> context={session.clone()}>
            if route == Route::Login {
                <AuthLayout>{page}</AuthLayout>
            } else {
                <AppLayout {route} on_navigate={on_navigate}>{page}</AppLayout>
            }
        </ContextProvider<SessionHandle>>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}

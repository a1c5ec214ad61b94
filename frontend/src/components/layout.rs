use shared::Route;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::{use_session, SessionAction};
use crate::services::session;

#[derive(Properties, PartialEq)]
pub struct AuthLayoutProps {
    pub children: Html,
}

/// Centered card shell for the login screen.
#[function_component(AuthLayout)]
pub fn auth_layout(props: &AuthLayoutProps) -> Html {
    html! {
        <div class="auth-layout">
            <div class="auth-card">
                <h1 class="auth-brand">{"CRM Familiare"}</h1>
                {props.children.clone()}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AppLayoutProps {
    pub route: Route,
    pub on_navigate: Callback<Route>,
    pub children: Html,
}

/// Sidebar shell around every authenticated page. Logout notifies the
/// server best-effort, then clears local session state unconditionally;
/// the route guard bounces to the login screen.
#[function_component(AppLayout)]
pub fn app_layout(props: &AppLayoutProps) -> Html {
    let session_handle = use_session();

    let on_logout = {
        let session_handle = session_handle.clone();
        Callback::from(move |_: MouseEvent| {
            let session_handle = session_handle.clone();
            let api_client = session_handle.api_client();
            spawn_local(async move {
                let _ = api_client.logout().await;
                session::clear_token();
                session_handle.dispatch(SessionAction::LoggedOut);
            });
        })
    };

    let nav_items = Route::NAV.iter().map(|route| {
        let active = *route == props.route;
        let on_navigate = props.on_navigate.clone();
        let target = *route;
        let onclick = Callback::from(move |_: MouseEvent| on_navigate.emit(target));
        html! {
            <button
                class={classes!("nav-item", active.then_some("nav-item-active"))}
                {onclick}
            >
                {route.title()}
            </button>
        }
    });

    html! {
        <div class="app-layout">
            <aside class="sidebar">
                <div class="sidebar-header">
                    <span class="sidebar-brand">{"CRM Familiare"}</span>
                </div>
                <nav class="sidebar-nav">
                    {for nav_items}
                </nav>
                <div class="sidebar-footer">
                    if let Some(user) = session_handle.user() {
                        <div class="sidebar-user">
                            <p class="sidebar-user-name">{user.name.clone()}</p>
                            <p class="sidebar-user-email">{user.email.clone()}</p>
                        </div>
                    }
                    <button class="nav-item" onclick={on_logout}>{"Esci"}</button>
                </div>
            </aside>
            <main class="app-main">
                {props.children.clone()}
            </main>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PageHeaderProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub description: Option<String>,
    #[prop_or_default]
    pub actions: Html,
}

/// Title row shared by every page.
#[function_component(PageHeader)]
pub fn page_header(props: &PageHeaderProps) -> Html {
    html! {
        <div class="page-header">
            <div>
                <h1 class="page-title">{props.title.clone()}</h1>
                if let Some(description) = &props.description {
                    <p class="page-description">{description.clone()}</p>
                }
            </div>
            <div class="page-actions">{props.actions.clone()}</div>
        </div>
    }
}

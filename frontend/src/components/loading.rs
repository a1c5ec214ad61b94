use yew::prelude::*;

/// Full-area spinner shown while a page collection loads.
#[function_component(PageLoader)]
pub fn page_loader() -> Html {
    html! {
        <div class="page-loader">
            <div class="loading-spinner"></div>
            <p>{"Caricamento..."}</p>
        </div>
    }
}

use shared::{
    format_date_input, renovation_status_label, validate_project, ProjectFormErrors,
    RenovationProject, RenovationStatus,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::form_field::FormField;
use crate::services::ApiClient;

const STATUSES: [RenovationStatus; 4] = [
    RenovationStatus::Planned,
    RenovationStatus::InProgress,
    RenovationStatus::Completed,
    RenovationStatus::OnHold,
];

fn status_value(status: RenovationStatus) -> &'static str {
    match status {
        RenovationStatus::Planned => "PLANNED",
        RenovationStatus::InProgress => "IN_PROGRESS",
        RenovationStatus::Completed => "COMPLETED",
        RenovationStatus::OnHold => "ON_HOLD",
    }
}

fn status_from_value(value: &str) -> RenovationStatus {
    match value {
        "IN_PROGRESS" => RenovationStatus::InProgress,
        "COMPLETED" => RenovationStatus::Completed,
        "ON_HOLD" => RenovationStatus::OnHold,
        _ => RenovationStatus::Planned,
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectDialogProps {
    pub api_client: ApiClient,
    #[prop_or_default]
    pub project: Option<RenovationProject>,
    pub on_success: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(ProjectDialog)]
pub fn project_dialog(props: &ProjectDialogProps) -> Html {
    let is_edit = props.project.is_some();
    let name = use_state(|| {
        props
            .project
            .as_ref()
            .map(|p| p.name.clone())
            .unwrap_or_default()
    });
    let company = use_state(|| {
        props
            .project
            .as_ref()
            .and_then(|p| p.company.clone())
            .unwrap_or_default()
    });
    let status = use_state(|| {
        props
            .project
            .as_ref()
            .map(|p| p.status)
            .unwrap_or(RenovationStatus::Planned)
    });
    let start_date = use_state(|| {
        props
            .project
            .as_ref()
            .and_then(|p| p.start_date.as_deref())
            .map(format_date_input)
            .unwrap_or_default()
    });
    let end_date = use_state(|| {
        props
            .project
            .as_ref()
            .and_then(|p| p.end_date.as_deref())
            .map(format_date_input)
            .unwrap_or_default()
    });
    let errors = use_state(ProjectFormErrors::default);
    let submit_error = use_state(|| Option::<String>::None);
    let submitting = use_state(|| false);

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let on_company = {
        let company = company.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            company.set(input.value());
        })
    };
    let on_status = {
        let status = status.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            status.set(status_from_value(&select.value()));
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
    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_submit = {
        let api_client = props.api_client.clone();
        let project = props.project.clone();
        let on_success = props.on_success.clone();
        let name = name.clone();
        let company = company.clone();
        let status = status.clone();
        let start_date = start_date.clone();
        let end_date = end_date.clone();
        let errors = errors.clone();
        let submit_error = submit_error.clone();
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let payload =
                match validate_project(&name, &company, *status, &start_date, &end_date) {
                    Ok(payload) => {
                        errors.set(ProjectFormErrors::default());
                        payload
                    }
                    Err(field_errors) => {
                        errors.set(field_errors);
                        return;
                    }
                };

            let api_client = api_client.clone();
            let project = project.clone();
            let on_success = on_success.clone();
            let submit_error = submit_error.clone();
            let submitting = submitting.clone();

            spawn_local(async move {
                submitting.set(true);
                submit_error.set(None);
                let result = match &project {
                    Some(project) => api_client.update_project(&project.id, &payload).await,
                    None => api_client.create_project(&payload).await,
                };
                match result {
                    Ok(_) => on_success.emit(()),
                    Err(e) => submit_error.set(Some(e.user_message())),
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="dialog-backdrop">
            <div class="dialog">
                <h2 class="dialog-title">
                    {if is_edit { "Modifica progetto" } else { "Nuovo progetto" }}
                </h2>
                <form onsubmit={on_submit}>
                    <FormField label="Nome progetto" required=true error={errors.name.clone()}>
                        <input class="input" placeholder="Es. Bagno, Cucina..." value={(*name).clone()} oninput={on_name} />
                    </FormField>

                    <FormField label="Azienda/Fornitore">
                        <input class="input" placeholder="Es. Impresa Bianchi" value={(*company).clone()} oninput={on_company} />
                    </FormField>

                    <FormField label="Stato">
                        <select class="input" onchange={on_status}>
                            {for STATUSES.iter().map(|s| {
                                html! {
                                    <option value={status_value(*s)} selected={*s == *status}>
                                        {renovation_status_label(*s)}
                                    </option>
                                }
                            })}
                        </select>
                    </FormField>

                    <div class="form-grid-2">
                        <FormField label="Data inizio">
                            <input type="date" class="input" value={(*start_date).clone()} oninput={on_start} />
                        </FormField>
                        <FormField label="Data fine">
                            <input type="date" class="input" value={(*end_date).clone()} oninput={on_end} />
                        </FormField>
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

use shared::{
    format_currency, format_date, project_progress, renovation_status_label, renovation_totals,
    RenovationItem, RenovationProject,
};
use yew::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::layout::PageHeader;
use crate::components::loading::PageLoader;
use crate::components::project_dialog::ProjectDialog;
use crate::components::renovation_item_dialog::RenovationItemDialog;
use crate::hooks::use_renovation::{use_renovation, ItemDialog};
use crate::hooks::{use_session, DialogState};

#[function_component(RenovationPage)]
pub fn renovation_page() -> Html {
    let session = use_session();
    let api_client = session.api_client();
    let renovation = use_renovation(&api_client);
    let state = renovation.state;
    let actions = renovation.actions;

    if state.loading {
        return html! { <PageLoader /> };
    }

    let totals = renovation_totals(&state.projects);

    let open_create = {
        let set_project_dialog = actions.set_project_dialog.clone();
        Callback::from(move |_: MouseEvent| set_project_dialog.emit(DialogState::Create))
    };
    let on_dialog_success = {
        let close_dialogs = actions.close_dialogs.clone();
        let reload = actions.reload.clone();
        Callback::from(move |_| {
            close_dialogs.emit(());
            reload.emit(());
        })
    };
    let on_dialog_close = {
        let close_dialogs = actions.close_dialogs.clone();
        Callback::from(move |_| close_dialogs.emit(()))
    };

    let item_dialog_view = match &state.item_dialog {
        ItemDialog::Create { project_id } => html! {
            <RenovationItemDialog
                api_client={api_client.clone()}
                project_id={project_id.clone()}
                item={Option::<RenovationItem>::None}
                on_success={on_dialog_success.clone()}
                on_close={on_dialog_close.clone()}
            />
        },
        ItemDialog::Edit { project_id, item } => html! {
            <RenovationItemDialog
                api_client={api_client.clone()}
                project_id={project_id.clone()}
                item={Some(item.clone())}
                on_success={on_dialog_success.clone()}
                on_close={on_dialog_close.clone()}
            />
        },
        _ => Html::default(),
    };

    html! {
        <div>
            <PageHeader
                title="Ristrutturazione"
                description={Some(format!(
                    "{} progetti · Totale: {} · Pagato: {}",
                    state.projects.len(),
                    format_currency(totals.total_cost),
                    format_currency(totals.total_paid)
                ))}
                actions={html! {
                    <button class="btn btn-primary" onclick={open_create}>{"Nuovo progetto"}</button>
                }}
            />

            if state.projects.is_empty() {
                <div class="card empty-state">
                    {"Nessun progetto di ristrutturazione. Clicca \"Nuovo progetto\" per iniziare."}
                </div>
            }

            <div class="card-list">
                {for state.projects.iter().map(|project| {
                    let expanded = state.expanded_id.as_deref() == Some(project.id.as_str());
                    html! {
                        <ProjectRow
                            project={project.clone()}
                            {expanded}
                            on_toggle={actions.toggle_expanded.clone()}
                            set_project_dialog={actions.set_project_dialog.clone()}
                            set_item_dialog={actions.set_item_dialog.clone()}
                        />
                    }
                })}
            </div>

            if state.project_dialog.form_open() {
                <ProjectDialog
                    api_client={api_client.clone()}
                    project={state.project_dialog.editing().cloned()}
                    on_success={on_dialog_success.clone()}
                    on_close={on_dialog_close.clone()}
                />
            }

            {item_dialog_view}

            if let Some(project) = state.project_dialog.delete_target() {
                <ConfirmDialog
                    title="Elimina progetto"
                    message={format!(
                        "Sei sicuro di voler eliminare \"{}\" e tutti i suoi elementi?",
                        project.name
                    )}
                    error={state.delete_error.clone()}
                    busy={state.deleting}
                    on_confirm={actions.confirm_delete.clone()}
                    on_cancel={actions.close_dialogs.clone()}
                />
            }

            if let ItemDialog::ConfirmDelete { item, .. } = &state.item_dialog {
                <ConfirmDialog
                    title="Elimina elemento"
                    message={format!("Sei sicuro di voler eliminare \"{}\"?", item.name)}
                    error={state.delete_error.clone()}
                    busy={state.deleting}
                    on_confirm={actions.confirm_delete.clone()}
                    on_cancel={actions.close_dialogs.clone()}
                />
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectRowProps {
    project: RenovationProject,
    expanded: bool,
    on_toggle: Callback<String>,
    set_project_dialog: Callback<DialogState<RenovationProject>>,
    set_item_dialog: Callback<ItemDialog>,
}

#[function_component(ProjectRow)]
fn project_row(props: &ProjectRowProps) -> Html {
    let project = &props.project;
    let progress = project_progress(project);

    let on_toggle = {
        let on_toggle = props.on_toggle.clone();
        let id = project.id.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(id.clone()))
    };
    let on_edit = {
        let set_project_dialog = props.set_project_dialog.clone();
        let project = project.clone();
        Callback::from(move |_: MouseEvent| {
            set_project_dialog.emit(DialogState::Edit(project.clone()))
        })
    };
    let on_delete = {
        let set_project_dialog = props.set_project_dialog.clone();
        let project = project.clone();
        Callback::from(move |_: MouseEvent| {
            set_project_dialog.emit(DialogState::ConfirmDelete(project.clone()))
        })
    };
    let on_add_item = {
        let set_item_dialog = props.set_item_dialog.clone();
        let project_id = project.id.clone();
        Callback::from(move |_: MouseEvent| {
            set_item_dialog.emit(ItemDialog::Create {
                project_id: project_id.clone(),
            })
        })
    };

    html! {
        <div class="card">
            <div class="row">
                <button class="btn-icon" onclick={on_toggle}>
                    {if props.expanded { "▾" } else { "▸" }}
                </button>
                <div class="row-main">
                    <div class="row-title">
                        <span class="row-name">{project.name.clone()}</span>
                        <span class={classes!("badge", status_class(project))}>
                            {renovation_status_label(project.status)}
                        </span>
                    </div>
                    if let Some(company) = &project.company {
                        <p class="row-subtitle">{company.clone()}</p>
                    }
                    if let Some(start) = &project.start_date {
                        <p class="row-subtitle">
                            {format!("Dal {}", format_date(start))}
                            if let Some(end) = &project.end_date {
                                {format!(" al {}", format_date(end))}
                            }
                        </p>
                    }
                    <div class="progress-row">
                        <div class="progress-track">
                            <div
                                class="progress-fill"
                                style={format!("width: {:.0}%", progress.percent_paid.min(100.0))}
                            ></div>
                        </div>
                        <span class="progress-caption">{format!("{:.0}%", progress.percent_paid)}</span>
                    </div>
                </div>
                <div class="row-amount">
                    <p class="amount">{format_currency(progress.total_cost)}</p>
                    <p class="amount-caption amount-positive">{format!("{} pagato", format_currency(progress.total_paid))}</p>
                    if progress.remaining > 0.0 {
                        <p class="amount-caption amount-warning">{format!("{} rimanente", format_currency(progress.remaining))}</p>
                    }
                </div>
                <div class="row-buttons">
                    <button class="btn-icon" onclick={on_edit}>{"Modifica"}</button>
                    <button class="btn-icon btn-icon-danger" onclick={on_delete}>{"Elimina"}</button>
                </div>
            </div>

            if props.expanded {
                <div class="row-detail">
                    <div class="row-detail-header">
                        <h4>{format!("Elementi ({})", project.items.len())}</h4>
                        <button class="btn btn-outline btn-sm" onclick={on_add_item}>{"Aggiungi"}</button>
                    </div>
                    if project.items.is_empty() {
                        <p class="empty-note">{"Nessun elemento aggiunto"}</p>
                    } else {
                        <div class="income-list">
                            {for project.items.iter().map(|item| {
                                html! {
                                    <ItemRow
                                        project_id={project.id.clone()}
                                        item={item.clone()}
                                        set_item_dialog={props.set_item_dialog.clone()}
                                    />
                                }
                            })}
                        </div>
                    }
                </div>
            }
        </div>
    }
}

fn status_class(project: &RenovationProject) -> &'static str {
    use shared::RenovationStatus::*;
    match project.status {
        Planned => "badge-planned",
        InProgress => "badge-in-progress",
        Completed => "badge-completed",
        OnHold => "badge-on-hold",
    }
}

#[derive(Properties, PartialEq)]
struct ItemRowProps {
    project_id: String,
    item: RenovationItem,
    set_item_dialog: Callback<ItemDialog>,
}

#[function_component(ItemRow)]
fn item_row(props: &ItemRowProps) -> Html {
    let item = &props.item;

    let on_edit = {
        let set_item_dialog = props.set_item_dialog.clone();
        let project_id = props.project_id.clone();
        let item = item.clone();
        Callback::from(move |_: MouseEvent| {
            set_item_dialog.emit(ItemDialog::Edit {
                project_id: project_id.clone(),
                item: item.clone(),
            })
        })
    };
    let on_delete = {
        let set_item_dialog = props.set_item_dialog.clone();
        let project_id = props.project_id.clone();
        let item = item.clone();
        Callback::from(move |_: MouseEvent| {
            set_item_dialog.emit(ItemDialog::ConfirmDelete {
                project_id: project_id.clone(),
                item: item.clone(),
            })
        })
    };

    html! {
        <div class="income-row">
            <div class="row-main">
                <p class="row-name">{item.name.clone()}</p>
                if let Some(company) = &item.company {
                    <p class="row-subtitle">{company.clone()}</p>
                }
            </div>
            <div class="income-row-right">
                <div class="row-amount">
                    <p class="amount">{format_currency(item.total_price)}</p>
                    <p class="amount-caption amount-positive">{format!("{} pagato", format_currency(item.paid_amount))}</p>
                    if item.remaining > 0.0 {
                        <p class="amount-caption amount-warning">{format!("{} rimanente", format_currency(item.remaining))}</p>
                    }
                </div>
                <button class="btn-icon" onclick={on_edit}>{"Modifica"}</button>
                <button class="btn-icon btn-icon-danger" onclick={on_delete}>{"Elimina"}</button>
            </div>
        </div>
    }
}

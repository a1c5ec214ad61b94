use shared::{extra_income_total, format_currency, household_income, member_total_income};
use shared::{ExtraIncome, FamilyMember};
use yew::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::extra_income_dialog::ExtraIncomeDialog;
use crate::components::layout::PageHeader;
use crate::components::loading::PageLoader;
use crate::components::member_dialog::MemberDialog;
use crate::hooks::use_members::{use_members, IncomeDialog};
use crate::hooks::{use_session, DialogState};

#[function_component(MembersPage)]
pub fn members_page() -> Html {
    let session = use_session();
    let api_client = session.api_client();
    let members = use_members(&api_client);
    let state = members.state;
    let actions = members.actions;

    if state.loading {
        return html! { <PageLoader /> };
    }

    let total_income = household_income(&state.members);

    let open_create = {
        let set_member_dialog = actions.set_member_dialog.clone();
        Callback::from(move |_: MouseEvent| set_member_dialog.emit(DialogState::Create))
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

    let income_dialog_view = match &state.income_dialog {
        IncomeDialog::Create { member_id } => html! {
            <ExtraIncomeDialog
                api_client={api_client.clone()}
                member_id={member_id.clone()}
                income={Option::<ExtraIncome>::None}
                on_success={on_dialog_success.clone()}
                on_close={on_dialog_close.clone()}
            />
        },
        IncomeDialog::Edit { member_id, income } => html! {
            <ExtraIncomeDialog
                api_client={api_client.clone()}
                member_id={member_id.clone()}
                income={Some(income.clone())}
                on_success={on_dialog_success.clone()}
                on_close={on_dialog_close.clone()}
            />
        },
        _ => Html::default(),
    };

    html! {
        <div>
            <PageHeader
                title="Membri Famiglia"
                description={Some(format!(
                    "{} membri · Reddito totale: {}/mese",
                    state.members.len(),
                    format_currency(total_income)
                ))}
                actions={html! {
                    <button class="btn btn-primary" onclick={open_create}>{"Aggiungi membro"}</button>
                }}
            />

            if state.members.is_empty() {
                <div class="card empty-state">
                    {"Nessun membro aggiunto. Clicca \"Aggiungi membro\" per iniziare."}
                </div>
            }

            <div class="card-list">
                {for state.members.iter().map(|member| {
                    let expanded = state.expanded_id.as_deref() == Some(member.id.as_str());
                    html! {
                        <MemberRow
                            member={member.clone()}
                            {expanded}
                            on_toggle={actions.toggle_expanded.clone()}
                            set_member_dialog={actions.set_member_dialog.clone()}
                            set_income_dialog={actions.set_income_dialog.clone()}
                        />
                    }
                })}
            </div>

            if state.member_dialog.form_open() {
                <MemberDialog
                    api_client={api_client.clone()}
                    member={state.member_dialog.editing().cloned()}
                    on_success={on_dialog_success.clone()}
                    on_close={on_dialog_close.clone()}
                />
            }

            {income_dialog_view}

            if let Some(member) = state.member_dialog.delete_target() {
                <ConfirmDialog
                    title="Elimina membro"
                    message={format!(
                        "Sei sicuro di voler eliminare {}? Questa azione è irreversibile.",
                        member.name
                    )}
                    error={state.delete_error.clone()}
                    busy={state.deleting}
                    on_confirm={actions.confirm_delete.clone()}
                    on_cancel={actions.close_dialogs.clone()}
                />
            }

            if let IncomeDialog::ConfirmDelete { income, .. } = &state.income_dialog {
                <ConfirmDialog
                    title="Elimina entrata extra"
                    message={format!("Sei sicuro di voler eliminare \"{}\"?", income.name)}
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
struct MemberRowProps {
    member: FamilyMember,
    expanded: bool,
    on_toggle: Callback<String>,
    set_member_dialog: Callback<DialogState<FamilyMember>>,
    set_income_dialog: Callback<IncomeDialog>,
}

#[function_component(MemberRow)]
fn member_row(props: &MemberRowProps) -> Html {
    let member = &props.member;
    let total_extra = extra_income_total(member);

    let on_toggle = {
        let on_toggle = props.on_toggle.clone();
        let id = member.id.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(id.clone()))
    };
    let on_edit = {
        let set_member_dialog = props.set_member_dialog.clone();
        let member = member.clone();
        Callback::from(move |_: MouseEvent| {
            set_member_dialog.emit(DialogState::Edit(member.clone()))
        })
    };
    let on_delete = {
        let set_member_dialog = props.set_member_dialog.clone();
        let member = member.clone();
        Callback::from(move |_: MouseEvent| {
            set_member_dialog.emit(DialogState::ConfirmDelete(member.clone()))
        })
    };
    let on_add_income = {
        let set_income_dialog = props.set_income_dialog.clone();
        let member_id = member.id.clone();
        Callback::from(move |_: MouseEvent| {
            set_income_dialog.emit(IncomeDialog::Create {
                member_id: member_id.clone(),
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
                        <span class="row-name">{member.name.clone()}</span>
                        if let Some(role) = &member.role {
                            <span class="badge">{role.clone()}</span>
                        }
                    </div>
                    <p class="row-subtitle">
                        {format!("Stipendio: {}/mese", format_currency(member.salary))}
                        if total_extra > 0.0 {
                            {format!(" · Extra: {}/mese", format_currency(total_extra))}
                        }
                    </p>
                </div>
                <div class="row-amount">
                    <p class="amount-positive">{format_currency(member_total_income(member))}</p>
                    <p class="amount-caption">{"totale/mese"}</p>
                </div>
                <div class="row-buttons">
                    <button class="btn-icon" onclick={on_edit}>{"Modifica"}</button>
                    <button class="btn-icon btn-icon-danger" onclick={on_delete}>{"Elimina"}</button>
                </div>
            </div>

            if props.expanded {
                <div class="row-detail">
                    <div class="row-detail-header">
                        <h4>{"Entrate extra"}</h4>
                        <button class="btn btn-outline btn-sm" onclick={on_add_income}>{"Aggiungi"}</button>
                    </div>
                    if member.extra_incomes.is_empty() {
                        <p class="empty-note">{"Nessuna entrata extra"}</p>
                    } else {
                        <div class="income-list">
                            {for member.extra_incomes.iter().map(|income| {
                                html! {
                                    <IncomeRow
                                        member_id={member.id.clone()}
                                        income={income.clone()}
                                        set_income_dialog={props.set_income_dialog.clone()}
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

#[derive(Properties, PartialEq)]
struct IncomeRowProps {
    member_id: String,
    income: ExtraIncome,
    set_income_dialog: Callback<IncomeDialog>,
}

#[function_component(IncomeRow)]
fn income_row(props: &IncomeRowProps) -> Html {
    let on_edit = {
        let set_income_dialog = props.set_income_dialog.clone();
        let member_id = props.member_id.clone();
        let income = props.income.clone();
        Callback::from(move |_: MouseEvent| {
            set_income_dialog.emit(IncomeDialog::Edit {
                member_id: member_id.clone(),
                income: income.clone(),
            })
        })
    };
    let on_delete = {
        let set_income_dialog = props.set_income_dialog.clone();
        let member_id = props.member_id.clone();
        let income = props.income.clone();
        Callback::from(move |_: MouseEvent| {
            set_income_dialog.emit(IncomeDialog::ConfirmDelete {
                member_id: member_id.clone(),
                income: income.clone(),
            })
        })
    };

    html! {
        <div class="income-row">
            <span>{props.income.name.clone()}</span>
            <div class="income-row-right">
                <span class="amount-positive">{format!("{}/mese", format_currency(props.income.amount))}</span>
                <button class="btn-icon" onclick={on_edit}>{"Modifica"}</button>
                <button class="btn-icon btn-icon-danger" onclick={on_delete}>{"Elimina"}</button>
            </div>
        </div>
    }
}

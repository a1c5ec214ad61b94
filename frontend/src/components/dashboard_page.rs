use shared::format_currency;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::charts::TrendChart;
use crate::components::layout::PageHeader;
use crate::components::loading::PageLoader;
use crate::components::stat_card::StatCard;
use crate::hooks::use_dashboard::use_dashboard;
use crate::hooks::use_session;

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let session = use_session();
    let api_client = session.api_client();
    let dashboard = use_dashboard(&api_client);
    let state = dashboard.state;
    let actions = dashboard.actions;

    if state.loading() {
        return html! { <PageLoader /> };
    }
    let Some(summary) = state.summary.clone() else {
        return html! {
            <div class="alert alert-error">{"Impossibile caricare la panoramica. Riprova."}</div>
        };
    };

    let on_from = {
        let set_from = actions.set_from.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set_from.emit(input.value());
        })
    };
    let on_to = {
        let set_to = actions.set_to.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set_to.emit(input.value());
        })
    };
    let on_refresh = {
        let reload = actions.reload.clone();
        Callback::from(move |_: MouseEvent| reload.emit(()))
    };

    let renovation = &summary.renovation;
    let renovation_pct = if renovation.total_cost > 0.0 {
        renovation.total_paid / renovation.total_cost * 100.0
    } else {
        0.0
    };

    let max_category = summary
        .expenses
        .by_category
        .iter()
        .map(|c| c.amount)
        .fold(0.0_f64, f64::max)
        .max(1.0);

    html! {
        <div>
            <PageHeader
                title="Dashboard"
                description={Some("Panoramica finanziaria familiare".to_string())}
                actions={html! {
                    <div class="range-controls">
                        <input type="date" class="input input-date" value={state.from.clone()} oninput={on_from} />
                        <span class="range-separator">{"→"}</span>
                        <input type="date" class="input input-date" value={state.to.clone()} oninput={on_to} />
                        <button class="btn btn-primary btn-sm" onclick={on_refresh}>{"Aggiorna"}</button>
                    </div>
                }}
            />

            <div class="stat-grid">
                <StatCard
                    title="Entrate totali"
                    value={format_currency(summary.income.total)}
                    subtitle={Some(format!("{} membri", summary.income.member_count))}
                    accent={Some("stat-positive")}
                />
                <StatCard
                    title="Stipendi"
                    value={format_currency(summary.income.total_salaries)}
                    subtitle={Some("mensili".to_string())}
                />
                <StatCard
                    title="Entrate extra"
                    value={format_currency(summary.income.total_extra_incomes)}
                    subtitle={Some("mensili".to_string())}
                />
                <StatCard
                    title="Spese mensili"
                    value={format_currency(summary.expenses.total_monthly)}
                    subtitle={Some(format!("{} voci", summary.expenses.count))}
                    accent={Some("stat-negative")}
                />
                <StatCard
                    title="Saldo netto"
                    value={format_currency(summary.balance)}
                    subtitle={Some("entrate - spese".to_string())}
                    accent={Some(if summary.balance >= 0.0 { "stat-positive" } else { "stat-negative" })}
                />
            </div>

            <div class="dashboard-charts">
                <div class="card">
                    <h3 class="card-title">{"Andamento mensile"}</h3>
                    <TrendChart data={state.trend.clone()} />
                </div>

                <div class="card">
                    <h3 class="card-title">{"Spese per categoria"}</h3>
                    if summary.expenses.by_category.is_empty() {
                        <p class="chart-empty">{"Nessuna spesa registrata."}</p>
                    } else {
                        <div class="category-bars">
                            {for summary.expenses.by_category.iter().map(|entry| {
                                let width = (entry.amount / max_category * 100.0).min(100.0);
                                html! {
                                    <div class="category-bar-row">
                                        <span class="category-bar-label">{entry.category.clone()}</span>
                                        <div class="category-bar-track">
                                            <div class="category-bar-fill" style={format!("width: {width:.1}%")}></div>
                                        </div>
                                        <span class="category-bar-amount">{format_currency(entry.amount)}</span>
                                    </div>
                                }
                            })}
                        </div>
                    }
                </div>
            </div>

            <div class="card">
                <h3 class="card-title">{"Riepilogo ristrutturazione"}</h3>
                <div class="renovation-recap">
                    <div>
                        <p class="recap-value">{format_currency(renovation.total_cost)}</p>
                        <p class="recap-label">{"Costo totale"}</p>
                    </div>
                    <div>
                        <p class="recap-value recap-paid">{format_currency(renovation.total_paid)}</p>
                        <p class="recap-label">{"Pagato"}</p>
                    </div>
                    <div>
                        <p class="recap-value recap-remaining">{format_currency(renovation.total_remaining)}</p>
                        <p class="recap-label">{"Rimanente"}</p>
                    </div>
                </div>
                if renovation.total_cost > 0.0 {
                    <div class="progress-track">
                        <div
                            class="progress-fill"
                            style={format!("width: {:.1}%", renovation_pct.min(100.0))}
                        ></div>
                    </div>
                    <p class="progress-caption">{format!("{renovation_pct:.1}% pagato")}</p>
                }
            </div>
        </div>
    }
}

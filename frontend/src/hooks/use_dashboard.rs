use shared::{DashboardSummary, TrendPoint};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::TrendGroupBy;
use crate::services::{date_utils, ApiClient, Logger};

#[derive(Clone, PartialEq)]
pub struct DashboardState {
    pub summary: Option<DashboardSummary>,
    pub trend: Vec<TrendPoint>,
    pub loading_summary: bool,
    pub loading_trend: bool,
    pub from: String,
    pub to: String,
}

impl DashboardState {
    /// The page renders once both independent reads have resolved.
    pub fn loading(&self) -> bool {
        self.loading_summary || self.loading_trend
    }
}

#[derive(Clone)]
pub struct UseDashboardActions {
    pub reload: Callback<()>,
    pub set_from: Callback<String>,
    pub set_to: Callback<String>,
}

pub struct UseDashboardResult {
    pub state: DashboardState,
    pub actions: UseDashboardActions,
}

#[hook]
pub fn use_dashboard(api_client: &ApiClient) -> UseDashboardResult {
    let (default_from, default_to) = date_utils::current_month_range();
    let summary = use_state(|| Option::<DashboardSummary>::None);
    let trend = use_state(Vec::<TrendPoint>::new);
    let loading_summary = use_state(|| true);
    let loading_trend = use_state(|| true);
    let from = use_state(|| default_from);
    let to = use_state(|| default_to);

    // Summary and trend are independent reads; each runs in its own task
    // so they load concurrently, and the page waits on both flags.
    let reload = {
        let api_client = api_client.clone();
        let summary = summary.clone();
        let trend = trend.clone();
        let loading_summary = loading_summary.clone();
        let loading_trend = loading_trend.clone();
        let from = from.clone();
        let to = to.clone();

        Callback::from(move |_| {
            let range_from = (*from).clone();
            let range_to = (*to).clone();

            loading_summary.set(true);
            loading_trend.set(true);

            {
                let api_client = api_client.clone();
                let summary = summary.clone();
                let loading_summary = loading_summary.clone();
                let range_from = range_from.clone();
                let range_to = range_to.clone();
                spawn_local(async move {
                    match api_client
                        .dashboard_summary(Some(&range_from), Some(&range_to))
                        .await
                    {
                        Ok(data) => summary.set(Some(data)),
                        Err(e) => Logger::error("dashboard", &format!("summary failed: {e}")),
                    }
                    loading_summary.set(false);
                });
            }

            {
                let api_client = api_client.clone();
                let trend = trend.clone();
                let loading_trend = loading_trend.clone();
                spawn_local(async move {
                    match api_client
                        .dashboard_trend(Some(&range_from), Some(&range_to), TrendGroupBy::Month)
                        .await
                    {
                        Ok(data) => trend.set(data.trend),
                        Err(e) => Logger::error("dashboard", &format!("trend failed: {e}")),
                    }
                    loading_trend.set(false);
                });
            }
        })
    };

    {
        let reload = reload.clone();
        use_effect_with((), move |_| {
            reload.emit(());
            || ()
        });
    }

    let set_from = {
        let from = from.clone();
        Callback::from(move |value: String| from.set(value))
    };

    let set_to = {
        let to = to.clone();
        Callback::from(move |value: String| to.set(value))
    };

    UseDashboardResult {
        state: DashboardState {
            summary: (*summary).clone(),
            trend: (*trend).clone(),
            loading_summary: *loading_summary,
            loading_trend: *loading_trend,
            from: (*from).clone(),
            to: (*to).clone(),
        },
        actions: UseDashboardActions {
            reload,
            set_from,
            set_to,
        },
    }
}

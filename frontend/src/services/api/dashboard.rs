use shared::{DashboardSummary, TrendResponse};

use super::{ApiClient, ApiResult};

/// Granularity of the trend series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendGroupBy {
    Month,
    Week,
}

impl TrendGroupBy {
    fn as_str(self) -> &'static str {
        match self {
            TrendGroupBy::Month => "month",
            TrendGroupBy::Week => "week",
        }
    }
}

fn range_query(from: Option<&str>, to: Option<&str>) -> String {
    let mut params: Vec<String> = Vec::new();
    if let Some(from) = from {
        params.push(format!("from={from}"));
    }
    if let Some(to) = to {
        params.push(format!("to={to}"));
    }
    params.join("&")
}

impl ApiClient {
    pub async fn dashboard_summary(
        &self,
        from: Option<&str>,
        to: Option<&str>,
    ) -> ApiResult<DashboardSummary> {
        let query = range_query(from, to);
        self.get_json(&format!("/dashboard/summary?{query}")).await
    }

    pub async fn dashboard_trend(
        &self,
        from: Option<&str>,
        to: Option<&str>,
        group_by: TrendGroupBy,
    ) -> ApiResult<TrendResponse> {
        let mut query = range_query(from, to);
        if !query.is_empty() {
            query.push('&');
        }
        query.push_str(&format!("groupBy={}", group_by.as_str()));
        self.get_json(&format!("/dashboard/trend?{query}")).await
    }
}

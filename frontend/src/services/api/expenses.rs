use shared::{Expense, ExpensePayload, HistoryMonth};

use super::{ApiClient, ApiResult};

impl ApiClient {
    pub async fn list_expenses(&self) -> ApiResult<Vec<Expense>> {
        self.get_json("/expenses").await
    }

    pub async fn get_expense(&self, id: &str) -> ApiResult<Expense> {
        self.get_json(&format!("/expenses/{id}")).await
    }

    pub async fn create_expense(&self, payload: &ExpensePayload) -> ApiResult<Expense> {
        self.post_json("/expenses", payload).await
    }

    pub async fn update_expense(&self, id: &str, payload: &ExpensePayload) -> ApiResult<Expense> {
        self.put_json(&format!("/expenses/{id}"), payload).await
    }

    pub async fn delete_expense(&self, id: &str) -> ApiResult<()> {
        self.delete(&format!("/expenses/{id}")).await
    }

    /// Months that hold archived custom expenses, newest first.
    pub async fn history_months(&self) -> ApiResult<Vec<HistoryMonth>> {
        self.get_json("/expenses/history").await
    }

    /// Archived expenses of one (month, year).
    pub async fn history_expenses(&self, month: u32, year: i32) -> ApiResult<Vec<Expense>> {
        self.get_json(&format!("/expenses/history?month={month}&year={year}"))
            .await
    }
}

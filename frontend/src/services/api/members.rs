use shared::{ExtraIncome, ExtraIncomePayload, FamilyMember, MemberPayload};

use super::{ApiClient, ApiResult};

impl ApiClient {
    pub async fn list_members(&self) -> ApiResult<Vec<FamilyMember>> {
        self.get_json("/members").await
    }

    pub async fn get_member(&self, id: &str) -> ApiResult<FamilyMember> {
        self.get_json(&format!("/members/{id}")).await
    }

    pub async fn create_member(&self, payload: &MemberPayload) -> ApiResult<FamilyMember> {
        self.post_json("/members", payload).await
    }

    pub async fn update_member(
        &self,
        id: &str,
        payload: &MemberPayload,
    ) -> ApiResult<FamilyMember> {
        self.put_json(&format!("/members/{id}"), payload).await
    }

    pub async fn delete_member(&self, id: &str) -> ApiResult<()> {
        self.delete(&format!("/members/{id}")).await
    }

    pub async fn add_extra_income(
        &self,
        member_id: &str,
        payload: &ExtraIncomePayload,
    ) -> ApiResult<ExtraIncome> {
        self.post_json(&format!("/members/{member_id}/extra-incomes"), payload)
            .await
    }

    pub async fn update_extra_income(
        &self,
        member_id: &str,
        income_id: &str,
        payload: &ExtraIncomePayload,
    ) -> ApiResult<ExtraIncome> {
        self.put_json(
            &format!("/members/{member_id}/extra-incomes/{income_id}"),
            payload,
        )
        .await
    }

    pub async fn delete_extra_income(&self, member_id: &str, income_id: &str) -> ApiResult<()> {
        self.delete(&format!("/members/{member_id}/extra-incomes/{income_id}"))
            .await
    }
}

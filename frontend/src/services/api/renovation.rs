use shared::{
    ProjectPayload, RenovationItem, RenovationItemPayload, RenovationProject, RenovationSummary,
};

use super::{ApiClient, ApiResult};

impl ApiClient {
    pub async fn list_projects(&self) -> ApiResult<Vec<RenovationProject>> {
        self.get_json("/renovation/projects").await
    }

    pub async fn get_project(&self, id: &str) -> ApiResult<RenovationProject> {
        self.get_json(&format!("/renovation/projects/{id}")).await
    }

    pub async fn create_project(&self, payload: &ProjectPayload) -> ApiResult<RenovationProject> {
        self.post_json("/renovation/projects", payload).await
    }

    pub async fn update_project(
        &self,
        id: &str,
        payload: &ProjectPayload,
    ) -> ApiResult<RenovationProject> {
        self.put_json(&format!("/renovation/projects/{id}"), payload)
            .await
    }

    pub async fn delete_project(&self, id: &str) -> ApiResult<()> {
        self.delete(&format!("/renovation/projects/{id}")).await
    }

    pub async fn create_renovation_item(
        &self,
        project_id: &str,
        payload: &RenovationItemPayload,
    ) -> ApiResult<RenovationItem> {
        self.post_json(&format!("/renovation/projects/{project_id}/items"), payload)
            .await
    }

    pub async fn update_renovation_item(
        &self,
        project_id: &str,
        item_id: &str,
        payload: &RenovationItemPayload,
    ) -> ApiResult<RenovationItem> {
        self.put_json(
            &format!("/renovation/projects/{project_id}/items/{item_id}"),
            payload,
        )
        .await
    }

    pub async fn delete_renovation_item(&self, project_id: &str, item_id: &str) -> ApiResult<()> {
        self.delete(&format!("/renovation/projects/{project_id}/items/{item_id}"))
            .await
    }

    pub async fn renovation_summary(&self) -> ApiResult<RenovationSummary> {
        self.get_json("/renovation/summary").await
    }
}

use shared::{
    NotificationSettings, SettingsPayload, TestNotificationRequest, TestNotificationResponse,
};

use super::{ApiClient, ApiResult};

impl ApiClient {
    pub async fn notification_settings(&self) -> ApiResult<NotificationSettings> {
        self.get_json("/settings/notifications").await
    }

    pub async fn update_notification_settings(
        &self,
        payload: &SettingsPayload,
    ) -> ApiResult<NotificationSettings> {
        self.put_json("/settings/notifications", payload).await
    }

    pub async fn send_test_notification(
        &self,
        request: &TestNotificationRequest,
    ) -> ApiResult<TestNotificationResponse> {
        self.post_json("/settings/test", request).await
    }
}

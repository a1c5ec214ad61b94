use shared::{Appointment, AppointmentPayload};

use super::{ApiClient, ApiResult};

impl ApiClient {
    pub async fn list_appointments(&self) -> ApiResult<Vec<Appointment>> {
        self.get_json("/appointments").await
    }

    pub async fn get_appointment(&self, id: &str) -> ApiResult<Appointment> {
        self.get_json(&format!("/appointments/{id}")).await
    }

    /// Create with the reminder descriptors embedded; the server replaces
    /// the notification set wholesale on update.
    pub async fn create_appointment(&self, payload: &AppointmentPayload) -> ApiResult<Appointment> {
        self.post_json("/appointments", payload).await
    }

    pub async fn update_appointment(
        &self,
        id: &str,
        payload: &AppointmentPayload,
    ) -> ApiResult<Appointment> {
        self.put_json(&format!("/appointments/{id}"), payload).await
    }

    pub async fn delete_appointment(&self, id: &str) -> ApiResult<()> {
        self.delete(&format!("/appointments/{id}")).await
    }
}

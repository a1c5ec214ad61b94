use shared::{LoginRequest, LoginResponse, User};

use super::{ApiClient, ApiResult};

impl ApiClient {
    pub async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse> {
        self.post_json("/auth/login", request).await
    }

    /// Best-effort server-side logout; local state is cleared regardless of
    /// the outcome.
    pub async fn logout(&self) -> ApiResult<()> {
        self.post_empty("/auth/logout").await
    }

    /// Validate the stored token and fetch the account it belongs to.
    pub async fn me(&self) -> ApiResult<User> {
        self.get_json("/auth/me").await
    }
}

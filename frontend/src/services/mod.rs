pub mod api;
pub mod date_utils;
pub mod logging;
pub mod session;
pub mod shopping_store;

pub use api::{ApiClient, ApiError, ApiResult};
pub use logging::Logger;

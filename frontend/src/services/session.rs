//! Durable storage of the session token. The session state itself lives in
//! a yew reducer context; this module only bridges to `localStorage`.

use gloo::storage::{LocalStorage, Storage};

const TOKEN_KEY: &str = "crm_token";

pub fn load_token() -> Option<String> {
    LocalStorage::get(TOKEN_KEY).ok()
}

pub fn save_token(token: &str) {
    if let Err(e) = LocalStorage::set(TOKEN_KEY, token) {
        crate::services::Logger::error("session", &format!("failed to persist token: {e}"));
    }
}

pub fn clear_token() {
    LocalStorage::delete(TOKEN_KEY);
}

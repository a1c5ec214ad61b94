use gloo::console;

/// Console-backed logger with a component tag per call site.
pub struct Logger;

impl Logger {
    pub fn info(component: &str, message: &str) {
        console::info!(format!("[{component}] {message}"));
    }

    pub fn warn(component: &str, message: &str) {
        console::warn!(format!("[{component}] {message}"));
    }

    pub fn error(component: &str, message: &str) {
        console::error!(format!("[{component}] {message}"));
    }
}

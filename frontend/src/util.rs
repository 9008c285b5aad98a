use gloo_console::error;
use gloo_utils::window;

pub fn alert(message: &str) {
    if window().alert_with_message(message).is_err() {
        error!(format!("Could not show alert: {message}"));
    }
}

pub fn confirm(message: &str) -> bool {
    window().confirm_with_message(message).unwrap_or(false)
}

pub fn reload_page() {
    if let Err(err) = window().location().reload() {
        error!("Reload failed", err);
    }
}

//! Blocking browser dialogs.

use dioxus_logger::tracing;

pub fn alert(message: &str) {
    let shown = web_sys::window().map(|window| window.alert_with_message(message));
    if !matches!(shown, Some(Ok(()))) {
        tracing::warn!("could not show alert: {}", message);
    }
}

/// Ask the operator to confirm. A dialog that cannot be shown counts as "no".
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

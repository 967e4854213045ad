/// Show a blocking browser alert.
pub fn blocking_alert(message: &str) {
    log::warn!("Alerting user: {}", message);
    match web_sys::window() {
        Some(window) => {
            if let Err(e) = window.alert_with_message(message) {
                log::error!("Failed to show alert: {:?}", e);
            }
        }
        None => log::error!("No window available to show alert"),
    }
}

/// Show a blocking notice to the user.
///
/// On the web this is `window.alert`; native builds have no modal to block
/// on, so the message goes to the log.
pub fn notify(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if window.alert_with_message(message).is_ok() {
                return;
            }
        }
        tracing::warn!("alert unavailable: {message}");
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!("notice: {message}");
    }
}

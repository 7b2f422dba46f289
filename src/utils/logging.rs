use tracing::{error, info};

/// Logs run start with consistent format
pub fn log_run_start(mode: &str, details: Option<&str>) {
    match details {
        Some(d) => info!("RUN_START: {} - {}", mode, d),
        None => info!("RUN_START: {}", mode),
    }
}

/// Logs the dispatched action with consistent format
pub fn log_dispatch(action: &str, weekday_index: u32, details: Option<&str>) {
    match details {
        Some(d) => info!("DISPATCH: {} (weekday {}) - {}", action, weekday_index, d),
        None => info!("DISPATCH: {} (weekday {})", action, weekday_index),
    }
}

/// Logs a successful send with consistent format
pub fn log_send_success(kind: &str, chat_id: i64) {
    info!("SEND_OK: {} to chat {}", kind, chat_id);
}

/// Logs a failed send with consistent format
pub fn log_send_error(kind: &str, chat_id: i64, error: &str) {
    error!("SEND_ERROR: {} to chat {} failed: {}", kind, chat_id, error);
}

/// Logs run completion with consistent format
pub fn log_run_end(outcome: &str) {
    info!("RUN_END: {}", outcome);
}

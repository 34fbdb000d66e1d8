use tracing::{debug, error, info, warn};

/// Logs command start with consistent format
pub fn log_command_start(command: &str, user: &str, user_id: i64, chat_id: i64, details: Option<&str>) {
    match details {
        Some(d) => info!(
            "CMD_START: {} by {}({}) in chat {} - {}",
            command, user, user_id, chat_id, d
        ),
        None => info!(
            "CMD_START: {} by {}({}) in chat {}",
            command, user, user_id, chat_id
        ),
    }
}

/// Logs command completion with consistent format
pub fn log_command_success(command: &str, user: &str, user_id: i64, chat_id: i64, details: Option<&str>) {
    match details {
        Some(d) => info!(
            "CMD_SUCCESS: {} by {}({}) in chat {} - {}",
            command, user, user_id, chat_id, d
        ),
        None => info!(
            "CMD_SUCCESS: {} by {}({}) in chat {}",
            command, user, user_id, chat_id
        ),
    }
}

/// Logs command errors with consistent format
pub fn log_command_error(command: &str, user: &str, user_id: i64, chat_id: i64, error: &str) {
    error!(
        "CMD_ERROR: {} by {}({}) in chat {} - {}",
        command, user, user_id, chat_id, error
    );
}

/// Logs validation errors with consistent format
pub fn log_validation_error(command: &str, field: &str, value: &str, error: &str, user_id: i64, chat_id: i64) {
    warn!(
        "VALIDATION_ERROR: {} - {} field '{}' invalid: {} - user {} in chat {}",
        command, field, value, error, user_id, chat_id
    );
}

/// Logs a command refused because the caller is still on cooldown
pub fn log_cooldown_hit(command: &str, user_id: i64, chat_id: i64, remaining_secs: u64) {
    info!(
        "COOLDOWN: {} by {} in chat {} - {}s remaining",
        command, user_id, chat_id, remaining_secs
    );
}

/// Logs store operations with consistent format
pub fn log_store_operation(operation: &str, entity: &str, chat_id: i64, details: Option<&str>) {
    match details {
        Some(d) => debug!("STORE_OP: {} on {} for chat {} - {}", operation, entity, chat_id, d),
        None => debug!("STORE_OP: {} on {} for chat {}", operation, entity, chat_id),
    }
}

/// Logs store errors with consistent format
pub fn log_store_error(operation: &str, entity: &str, error: &str, details: Option<&str>) {
    match details {
        Some(d) => error!("STORE_ERROR: {} on {} failed: {} - {}", operation, entity, error, d),
        None => error!("STORE_ERROR: {} on {} failed: {}", operation, entity, error),
    }
}

/// Logs system events with consistent format
pub fn log_system_event(event: &str, details: Option<&str>) {
    match details {
        Some(d) => info!("SYSTEM: {} - {}", event, d),
        None => info!("SYSTEM: {}", event),
    }
}

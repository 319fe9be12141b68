//! Generic error reporting for the command line front end
//!
//! Errors that the user can fix (bad config values, unreadable config file)
//! are reported with their own message; anything else is reported with the
//! operation context and the details are kept at debug level.

/// Trait for errors that can distinguish between user-actionable and system errors
///
/// When `is_user_actionable()` returns `true`, `user_message()` should return
/// `Some(message)`; otherwise it should return `None`.
pub trait ContextualError: std::error::Error {
    /// Returns true if this error carries a message the user can act on
    fn is_user_actionable(&self) -> bool;

    /// The user-facing message, if this is a user-actionable error
    fn user_message(&self) -> Option<String>;
}

/// Primary line reported for a fatal error
pub fn fatal_message<E: ContextualError>(error: &E, operation_context: &str) -> String {
    match error.user_message() {
        Some(user_msg) if error.is_user_actionable() => format!("FATAL: {}", user_msg),
        _ => format!("FATAL: {}", operation_context),
    }
}

/// Log errors with appropriate detail level based on error specificity
pub fn log_error_with_context<E: ContextualError + std::fmt::Debug>(
    error: &E,
    operation_context: &str,
) {
    log::error!("{}", fatal_message(error, operation_context));
    log::debug!("DETAIL: {}", error);
    log::debug!("DEBUG_DETAILS: {:?}", error);
}

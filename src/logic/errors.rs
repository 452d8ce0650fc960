use thiserror::Error;

use crate::api::FetchError;

/// Errors raised by navigation intents
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("illegal argument '{argument}': {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: &'static str,
    },

    #[error("image '{name}' is not in the current listing")]
    NotFound { name: String },

    #[error("no image is selected")]
    NoImageSelected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorType {
    ConnectionRefused,
    Timeout,
    NotFound,     // HTTP 404
    ServerError,  // HTTP 500+
    BadResponse,  // Body did not match the album format
    NetworkError, // DNS, routing, etc.
    Other,
}

/// Classify a fetch error for the album pane
pub fn classify_error(error: &FetchError) -> ErrorType {
    if let FetchError::Decode { .. } = error {
        return ErrorType::BadResponse;
    }

    if let Some(status) = error.status() {
        return match status {
            404 => ErrorType::NotFound,
            500..=599 => ErrorType::ServerError,
            _ => ErrorType::Other,
        };
    }

    if let FetchError::Request { source, .. } = error {
        if source.is_timeout() {
            return ErrorType::Timeout;
        }
    }

    let error_msg = format_error_message(error).to_lowercase();
    if error_msg.contains("connection refused") {
        return ErrorType::ConnectionRefused;
    }
    if error_msg.contains("timed out") || error_msg.contains("timeout") {
        return ErrorType::Timeout;
    }
    if error_msg.contains("dns") || error_msg.contains("network") || error_msg.contains("connect") {
        return ErrorType::NetworkError;
    }

    ErrorType::Other
}

/// Format error message for display: the top-level message plus its root cause
pub fn format_error_message(error: &(dyn std::error::Error + 'static)) -> String {
    let top = error.to_string();

    let mut source = error.source();
    let mut deepest = None;
    while let Some(err) = source {
        deepest = Some(err.to_string());
        source = err.source();
    }

    match deepest {
        Some(root) if !top.contains(&root) => format!("{} ({})", top, root),
        _ => top,
    }
}

/// Short label shown above the error message in the album pane
pub fn error_headline(error_type: &ErrorType) -> &'static str {
    match error_type {
        ErrorType::ConnectionRefused => "Server refused the connection",
        ErrorType::Timeout => "Server did not answer in time",
        ErrorType::NotFound => "Album not found",
        ErrorType::ServerError => "Server error",
        ErrorType::BadResponse => "Unexpected response from server",
        ErrorType::NetworkError => "Network error",
        ErrorType::Other => "Could not load album",
    }
}

//! Shared error classification.

/// Grepable error code and retryable flag for structured error logs and
/// JSON error bodies.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn retryable(&self) -> bool {
        false
    }
}

//! Stable machine-readable codes for logged failures.

/// Errors that carry a stable code alongside their display message.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;
}

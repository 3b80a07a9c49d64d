//! TagCloudErrorCode trait for the host integration boundary.

/// Trait for converting engine errors to host-facing error codes.
/// Every error enum implements this so the host can branch on a stable
/// code string instead of parsing messages.
pub trait TagCloudErrorCode {
    /// Returns the error code string (e.g., "DUPLICATE_NAME").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted host string: `[ERROR_CODE] message`.
    fn host_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants for the host boundary.
pub const INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";
pub const DUPLICATE_NAME: &str = "DUPLICATE_NAME";
pub const OUT_OF_RANGE: &str = "OUT_OF_RANGE";
pub const UNSUPPORTED_ATTRIBUTE_TYPE: &str = "UNSUPPORTED_ATTRIBUTE_TYPE";
pub const NOT_FOUND: &str = "NOT_FOUND";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";

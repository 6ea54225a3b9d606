//! Standard error messages for consistent error responses.

/// Body message for every server-side failure; the cause is only logged.
pub const INTERNAL_ERROR: &str = "internal server error";
pub const INVALID_JSON: &str = "invalid JSON body";
pub const NOT_FOUND_RESOURCE: &str = "resource not found";
pub const METHOD_NOT_ALLOWED: &str = "method not allowed";
pub const PANIC_RECOVERED: &str = "internal server error: request handler panicked";

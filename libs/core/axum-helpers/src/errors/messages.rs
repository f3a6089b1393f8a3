//! Standard response messages for consistent API responses.

/// Fixed client-facing body for any unexpected server-side fault.
///
/// Deliberately free of detail: internals are logged, never returned.
pub const GENERIC_FAILURE: &str = "An unexpected error occurred.";

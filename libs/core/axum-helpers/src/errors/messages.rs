//! Client-facing messages carried in the `message` field of the failure envelope.

pub const INTERNAL_ERROR: &str = "Internal server error";
pub const INVALID_QUERY: &str = "Invalid query string";
pub const NOT_FOUND_RESOURCE: &str = "The requested resource was not found";
pub const METHOD_NOT_ALLOWED: &str = "The HTTP method is not allowed for this resource";
pub const SERVICE_UNAVAILABLE: &str = "Service unavailable";

//! HTTP header name constants.

/// Header set by the reverse proxy with the caller's address.
/// Its value is trusted as-is and stored verbatim.
pub const HEADER_X_FORWARDED_FOR: &str = "x-forwarded-for";

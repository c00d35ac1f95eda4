//! Network URL constants for the KubeCoin SDK.

/// Default REST API base URL (the broker's in-cluster service port).
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

use serde::{Deserialize, Serialize};

/// Common error response envelope returned by the judge API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

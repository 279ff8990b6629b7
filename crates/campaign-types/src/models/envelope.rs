//! Response envelope shared by every API endpoint.

use serde::{Deserialize, Serialize};

/// `{ data, message }` wrapper around every API response body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiResponse<T> {
    /// Payload
    pub data: T,
    /// Optional server note; empty when absent
    #[serde(default)]
    pub message: String,
}

/// Payload of the message generation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneratedMessage {
    /// Generated text
    pub message: String,
}

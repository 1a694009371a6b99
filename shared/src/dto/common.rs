use serde::{Deserialize, Serialize};

/// Error body returned by the API on non-2xx responses.
///
/// FastAPI validation failures carry a list under `detail`; those do not
/// decode into this type.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ErrorResponse {
    /// Human readable reason
    pub detail: String,
}

/// Plain `{"message": ...}` acknowledgement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

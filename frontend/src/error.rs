use shared::SharedError;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Everything the client can fail with.
///
/// A 401 is not in here: the request wrapper handles it by tearing down the
/// session and returning `Ok(None)`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiError {
    /// Non-2xx response; `message` is the body's `detail` or the fallback.
    #[error("{message}")]
    RequestFailed { status: u16, message: String },

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Invalid JSON: {0}")]
    Parse(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> Self {
        Self::Parse(error.to_string())
    }
}

impl From<SharedError> for ApiError {
    fn from(error: SharedError) -> Self {
        match error {
            SharedError::Conversion(msg) => Self::Parse(msg),
            other => Self::Validation(other.to_string()),
        }
    }
}

impl From<ApiError> for JsValue {
    fn from(error: ApiError) -> Self {
        js_sys::Error::new(&error.to_string()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_request_failed_displays_bare_message() {
        let err = ApiError::RequestFailed {
            status: 400,
            message: "bad input".to_string(),
        };
        assert_eq!(err.to_string(), "bad input");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_shared_error_mapping() {
        let err: ApiError = SharedError::Validation("email: Invalid email format".to_string()).into();
        assert_eq!(err, ApiError::Validation("Validation error: email: Invalid email format".to_string()));

        let err: ApiError = SharedError::Conversion("eof".to_string()).into();
        assert_eq!(err, ApiError::Parse("eof".to_string()));
        assert_eq!(err.status(), None);
    }
}

use log::debug;
use shared::{ChatRequest, ChatResponse};

use crate::api::client::{validate_body, ApiClient};
use crate::api::request::RequestOptions;
use crate::error::ApiError;

/// Asks the learning assistant; the reply is restricted markdown.
pub async fn ask(client: &ApiClient, request: &ChatRequest) -> Result<Option<ChatResponse>, ApiError> {
    debug!("Sending chat message ({} chars)", request.message.len());
    validate_body("/chat/ask", request)?;
    client
        .fetch_json("/chat/ask", RequestOptions::post(request)?)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{block_on, json_response, signed_in};
    use serde_json::json;

    #[test]
    fn test_ask_returns_reply() {
        let h = signed_in(vec![json_response(200, json!({"response": "**Yes**"}))]);
        let request = ChatRequest {
            message: "Is Rust fun?".to_string(),
            course_id: Some(1),
            context: None,
        };
        let reply = block_on(ask(&h.client, &request)).unwrap().unwrap();
        assert_eq!(reply.response, "**Yes**");
        assert_eq!(
            h.transport.requests()[0].body.as_deref(),
            Some(r#"{"message":"Is Rust fun?","course_id":1}"#)
        );
    }

    #[test]
    fn test_empty_message_is_rejected_before_sending() {
        let h = signed_in(vec![]);
        let err = block_on(ask(&h.client, &ChatRequest::default())).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert!(h.transport.requests().is_empty());
    }
}

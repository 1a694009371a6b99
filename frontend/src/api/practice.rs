use log::debug;
use shared::{
    AnswerSubmit, PracticeEvaluation, PracticeHistoryEntry, PracticeRequest, PracticeSet,
};

use crate::api::client::{validate_body, ApiClient};
use crate::api::request::RequestOptions;
use crate::error::ApiError;

pub async fn generate(
    client: &ApiClient,
    request: &PracticeRequest,
) -> Result<Option<PracticeSet>, ApiError> {
    debug!("Generating practice questions for course {}", request.course_id);
    validate_body("/practice/generate", request)?;
    client
        .fetch_json("/practice/generate", RequestOptions::post(request)?)
        .await
}

pub async fn submit(
    client: &ApiClient,
    answers: &AnswerSubmit,
) -> Result<Option<PracticeEvaluation>, ApiError> {
    debug!("Submitting {} answers for session {}", answers.answers.len(), answers.session_id);
    validate_body("/practice/submit", answers)?;
    client
        .fetch_json("/practice/submit", RequestOptions::post(answers)?)
        .await
}

pub async fn history(
    client: &ApiClient,
    course_id: i64,
) -> Result<Option<Vec<PracticeHistoryEntry>>, ApiError> {
    client
        .fetch_json(&format!("/practice/history/{}", course_id), RequestOptions::get())
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{block_on, json_response, signed_in};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_generate_then_submit() {
        let h = signed_in(vec![
            json_response(
                200,
                json!({
                    "session_id": 31,
                    "topic_title": "Borrowing",
                    "questions": [{"question": "What is a borrow?", "options": ["a", "b"]}]
                }),
            ),
            json_response(
                200,
                json!({
                    "session_id": 31,
                    "score": 90.0,
                    "correct_answers": 9,
                    "total_questions": 10,
                    "results": [],
                    "overall_feedback": "Great work"
                }),
            ),
        ]);

        let request = PracticeRequest {
            course_id: 2,
            topic_title: Some("Borrowing".to_string()),
            ..Default::default()
        };
        let set = block_on(generate(&h.client, &request)).unwrap().unwrap();
        assert_eq!(set.questions.len(), 1);

        let answers = AnswerSubmit {
            session_id: set.session_id,
            answers: vec!["a".to_string()],
        };
        let evaluation = block_on(submit(&h.client, &answers)).unwrap().unwrap();
        assert_eq!(evaluation.score, Some(90.0));
        assert_eq!(evaluation.overall_feedback, "Great work");

        let sent = h.transport.requests();
        assert_eq!(sent[0].url, "/api/practice/generate");
        assert_eq!(sent[1].url, "/api/practice/submit");
    }

    #[test]
    fn test_history_path() {
        let h = signed_in(vec![json_response(200, json!([]))]);
        let entries = block_on(history(&h.client, 5)).unwrap().unwrap();
        assert!(entries.is_empty());
        assert_eq!(h.transport.requests()[0].url, "/api/practice/history/5");
    }

    #[test]
    fn test_empty_submission_rejected_locally() {
        let h = signed_in(vec![]);
        let answers = AnswerSubmit {
            session_id: 1,
            answers: vec![],
        };
        assert!(matches!(
            block_on(submit(&h.client, &answers)),
            Err(ApiError::Validation(_))
        ));
        assert!(h.transport.requests().is_empty());
    }
}

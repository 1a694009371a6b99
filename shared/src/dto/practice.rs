use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct PracticeRequest {
    #[validate(range(min = 1))]
    pub course_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_title: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PracticeSet {
    pub session_id: i64,
    pub topic_title: String,
    /// Question objects as produced by the AI service
    #[serde(default)]
    pub questions: Vec<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnswerSubmit {
    pub session_id: i64,
    #[validate(length(min = 1, message = "At least one answer is required"))]
    pub answers: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PracticeEvaluation {
    pub session_id: i64,
    pub score: Option<f64>,
    pub correct_answers: u32,
    pub total_questions: u32,
    #[serde(default)]
    pub results: Vec<Value>,
    #[serde(default)]
    pub overall_feedback: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PracticeHistoryEntry {
    pub id: i64,
    pub topic_title: Option<String>,
    pub score: Option<f64>,
    pub correct_answers: u32,
    pub total_questions: u32,
    pub created_at: Option<String>,
}

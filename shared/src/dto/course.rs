use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CourseLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CourseEnrollRequest {
    #[validate(length(min = 1, message = "Subject is required"))]
    pub subject: String,
    #[serde(default)]
    pub level: CourseLevel,
    /// Why the learner wants this course
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[validate(range(min = 1, max = 52))]
    pub preferred_duration_weeks: Option<u32>,
    #[validate(range(min = 0.25, max = 24.0))]
    pub daily_hours: Option<f64>,
}

impl CourseEnrollRequest {
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            level: CourseLevel::default(),
            reason: None,
            preferred_duration_weeks: Some(4),
            daily_hours: Some(1.0),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnrollResponse {
    pub message: String,
    pub course_id: i64,
    pub title: String,
    pub total_topics: u32,
    /// Raw AI-generated curriculum
    #[serde(default)]
    pub curriculum: Value,
}

/// Row of `GET /courses/`. The JSON-ish columns arrive as encoded strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CourseSummary {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub level: Option<String>,
    pub reason: Option<String>,
    pub status: String,
    pub progress: f64,
    pub total_topics: u32,
    pub completed_topics: u32,
    pub enrolled_at: Option<String>,
    pub completed_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Topic {
    pub id: i64,
    pub week: Option<u32>,
    pub day: Option<u32>,
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub resources: Value,
    pub duration_minutes: Option<u32>,
    pub order_index: u32,
    pub is_completed: bool,
    pub completed_at: Option<String>,
}

/// Score entry appended after each practice submission
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LearningScore {
    pub session_id: i64,
    pub topic: Option<String>,
    pub score: f64,
    pub total_correct: u32,
    pub total_questions: u32,
}

/// `GET /courses/{id}`, with the JSON columns already decoded
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CourseDetail {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub level: Option<String>,
    pub reason: Option<String>,
    pub status: String,
    #[serde(default)]
    pub curriculum: Value,
    #[serde(default)]
    pub roadmap: Value,
    #[serde(default)]
    pub resources: Value,
    #[serde(default)]
    pub schedule: Value,
    pub progress: f64,
    pub total_topics: u32,
    pub completed_topics: u32,
    #[serde(default)]
    pub learning_scores: Vec<LearningScore>,
    pub enrolled_at: Option<String>,
    pub completed_at: Option<String>,
    #[serde(default)]
    pub topics: Vec<Topic>,
}

impl CourseDetail {
    /// Labels and values for the learning-curve chart
    pub fn score_series(&self) -> (Vec<String>, Vec<f64>) {
        self.learning_scores
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let label = s.topic.clone().unwrap_or_else(|| format!("Session {}", i + 1));
                (label, s.score)
            })
            .unzip()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopicToggleResponse {
    pub topic_id: i64,
    pub is_completed: bool,
    pub course_progress: f64,
    pub course_status: String,
    pub completed_topics: u32,
    pub total_topics: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardCourse {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub progress: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub enrolled_at: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LearningCurve {
    pub course_id: i64,
    pub title: String,
    pub progress: f64,
    #[serde(default)]
    pub scores: Vec<LearningScore>,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dashboard {
    pub user: crate::dto::user::UserProfile,
    pub recent_courses: Vec<DashboardCourse>,
    pub ongoing_count: u32,
    pub completed_count: u32,
    pub total_courses: u32,
    pub ongoing_courses: Vec<DashboardCourse>,
    pub completed_courses: Vec<DashboardCourse>,
    pub learning_data: Vec<LearningCurve>,
}

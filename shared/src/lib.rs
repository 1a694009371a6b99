pub mod dto {
    pub mod auth;
    pub mod chat;
    pub mod common;
    pub mod course;
    pub mod practice;
    pub mod user;
}

pub mod error;

// Re-export commonly used items
pub use error::{SharedError, Result};
pub use validator::Validate;

// Re-export DTOs
pub use dto::{
    auth::{AuthResponse, GoogleAuthRequest, LoginRequest, SignupRequest},
    chat::{ChatRequest, ChatResponse},
    common::{ErrorResponse, MessageResponse},
    course::{
        CourseDetail, CourseEnrollRequest, CourseLevel, CourseSummary, Dashboard,
        DashboardCourse, EnrollResponse, LearningCurve, LearningScore, Topic,
        TopicToggleResponse,
    },
    practice::{AnswerSubmit, PracticeEvaluation, PracticeHistoryEntry, PracticeRequest, PracticeSet},
    user::{ProfileUpdate, UserProfile, UserResponse},
};

/// Runs `validator` checks on an outbound body and maps the failure.
pub fn validate<T: validator::Validate>(value: &T) -> Result<()> {
    value.validate().map_err(SharedError::from)
}

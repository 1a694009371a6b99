use log::debug;
use shared::{
    CourseDetail, CourseEnrollRequest, CourseSummary, Dashboard, EnrollResponse,
    MessageResponse, TopicToggleResponse,
};

use crate::api::client::{validate_body, ApiClient};
use crate::api::request::{Method, RequestOptions};
use crate::error::ApiError;

/// Enrolls in a new course; the server generates the curriculum.
pub async fn enroll(
    client: &ApiClient,
    request: &CourseEnrollRequest,
) -> Result<Option<EnrollResponse>, ApiError> {
    debug!("Enrolling in course: {}", request.subject);
    validate_body("/courses/enroll", request)?;
    client
        .fetch_json("/courses/enroll", RequestOptions::post(request)?)
        .await
}

pub async fn list(client: &ApiClient) -> Result<Option<Vec<CourseSummary>>, ApiError> {
    debug!("Fetching all courses");
    client.fetch_json("/courses/", RequestOptions::get()).await
}

pub async fn dashboard(client: &ApiClient) -> Result<Option<Dashboard>, ApiError> {
    debug!("Fetching dashboard");
    client.fetch_json("/courses/dashboard", RequestOptions::get()).await
}

pub async fn get(client: &ApiClient, course_id: i64) -> Result<Option<CourseDetail>, ApiError> {
    debug!("Fetching course with ID: {}", course_id);
    client
        .fetch_json(&format!("/courses/{}", course_id), RequestOptions::get())
        .await
}

/// Flips a topic's completion flag and returns the recalculated progress.
pub async fn toggle_topic(
    client: &ApiClient,
    course_id: i64,
    topic_id: i64,
) -> Result<Option<TopicToggleResponse>, ApiError> {
    debug!("Toggling topic {} of course {}", topic_id, course_id);
    client
        .fetch_json(
            &format!("/courses/{}/topics/{}/toggle", course_id, topic_id),
            RequestOptions::get().method(Method::Put),
        )
        .await
}

pub async fn delete(client: &ApiClient, course_id: i64) -> Result<Option<MessageResponse>, ApiError> {
    debug!("Deleting course with ID: {}", course_id);
    client
        .fetch_json(&format!("/courses/{}", course_id), RequestOptions::delete())
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{block_on, json_response, signed_in};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_enroll_posts_request() {
        let h = signed_in(vec![json_response(
            200,
            json!({
                "message": "Course enrolled successfully!",
                "course_id": 12,
                "title": "Rust Fundamentals",
                "total_topics": 20,
                "curriculum": {"overview": "..."}
            }),
        )]);

        let enrolled = block_on(enroll(&h.client, &CourseEnrollRequest::new("Rust")))
            .unwrap()
            .unwrap();
        assert_eq!(enrolled.course_id, 12);

        let sent = h.transport.requests();
        assert_eq!(sent[0].url, "/api/courses/enroll");
        assert_eq!(sent[0].method, Method::Post);
    }

    #[test]
    fn test_list_and_expired_session() {
        let h = signed_in(vec![
            json_response(
                200,
                json!([{
                    "id": 1,
                    "title": "Rust",
                    "description": null,
                    "level": "beginner",
                    "reason": null,
                    "status": "ongoing",
                    "progress": 25.0,
                    "total_topics": 4,
                    "completed_topics": 1,
                    "enrolled_at": "2025-01-05T10:20:30",
                    "completed_at": null
                }]),
            ),
            json_response(401, json!({"detail": "Token expired"})),
        ]);

        let courses = block_on(list(&h.client)).unwrap().unwrap();
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].progress, 25.0);

        assert_eq!(block_on(list(&h.client)).unwrap(), None);
        assert_eq!(h.navigator.visits(), vec!["/".to_string()]);
        assert_eq!(h.client.session().get_token(), None);
    }

    #[test]
    fn test_toggle_and_delete_paths() {
        let h = signed_in(vec![
            json_response(
                200,
                json!({
                    "topic_id": 3,
                    "is_completed": true,
                    "course_progress": 50.0,
                    "course_status": "ongoing",
                    "completed_topics": 2,
                    "total_topics": 4
                }),
            ),
            json_response(200, json!({"message": "Course deleted successfully"})),
        ]);

        let toggled = block_on(toggle_topic(&h.client, 7, 3)).unwrap().unwrap();
        assert!(toggled.is_completed);
        block_on(delete(&h.client, 7)).unwrap();

        let sent = h.transport.requests();
        assert_eq!(sent[0].url, "/api/courses/7/topics/3/toggle");
        assert_eq!(sent[0].method, Method::Put);
        assert_eq!(sent[0].body, None);
        assert_eq!(sent[1].url, "/api/courses/7");
        assert_eq!(sent[1].method, Method::Delete);
    }

    #[test]
    fn test_missing_course_reports_detail() {
        let h = signed_in(vec![json_response(404, json!({"detail": "Course not found"}))]);
        let err = block_on(get(&h.client, 99)).unwrap_err();
        assert_eq!(err.to_string(), "Course not found");
        assert_eq!(err.status(), Some(404));
    }
}

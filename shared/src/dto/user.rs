use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

/// The profile persisted alongside the bearer token.
///
/// Only the fields the pages read are typed; anything else the API sends
/// back is kept in `extra` so a stored profile round-trips unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserProfile {
    /// Single upper-cased letter shown in the sidebar avatar
    pub fn initial(&self) -> String {
        self.name
            .as_deref()
            .and_then(|n| n.trim().chars().next())
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "U".to_string())
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("User")
    }
}

impl From<UserResponse> for UserProfile {
    fn from(user: UserResponse) -> Self {
        Self {
            id: Some(user.id),
            name: Some(user.name),
            email: Some(user.email),
            avatar_url: user.avatar_url,
            extra: Map::new(),
        }
    }
}

/// Full account record returned by `/auth/me` and `/auth/profile`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub age: Option<u32>,
    pub hobbies: Option<String>,
    pub habits: Option<String>,
    pub educational_qualification: Option<String>,
    pub educational_interests: Option<String>,
    pub daily_routine: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: Option<String>,
}

/// Partial profile update; unset fields are left out of the body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, PartialEq)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = 150))]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hobbies: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub habits: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub educational_qualification: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub educational_interests: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_routine: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_profile_keeps_unknown_fields() {
        let raw = json!({"id": 3, "name": "Ada", "email": "ada@example.com", "theme": "dark"});
        let profile: UserProfile = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(profile.name.as_deref(), Some("Ada"));
        assert_eq!(profile.extra.get("theme"), Some(&json!("dark")));
        assert_eq!(serde_json::to_value(&profile).unwrap(), raw);
    }

    #[test]
    fn test_profile_accepts_empty_object() {
        let profile: UserProfile = serde_json::from_str("{}").unwrap();
        assert_eq!(profile, UserProfile::default());
        assert_eq!(profile.display_name(), "User");
        assert_eq!(profile.initial(), "U");
    }

    #[test]
    fn test_initial_is_uppercased() {
        let profile = UserProfile {
            name: Some("  grace".to_string()),
            ..Default::default()
        };
        assert_eq!(profile.initial(), "G");
    }

    #[test]
    fn test_profile_update_skips_unset_fields() {
        let update = ProfileUpdate {
            hobbies: Some("chess".to_string()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&update).unwrap(), json!({"hobbies": "chess"}));
    }

    #[test]
    fn test_profile_update_rejects_empty_name() {
        let update = ProfileUpdate {
            name: Some(String::new()),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }
}

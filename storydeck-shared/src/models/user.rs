use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

use super::{Story, Timestamp};

/// An account as returned by the auth and profile endpoints.
///
/// `favorites` and `stories` arrive in server order; the front end treats
/// them as the source of truth for star state and the my-stories view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Login name, unique across the service.
    pub username: String,

    /// Display name chosen at signup.
    pub name: String,

    /// When the account was created.
    pub created_at: Timestamp,

    /// Stories this user has starred, in server order.
    #[serde(default)]
    pub favorites: Vec<Story>,

    /// Stories this user has submitted, in server order.
    #[serde(default)]
    pub stories: Vec<Story>,
}

impl User {
    /// Whether `story_id` is in this user's favorites.
    #[must_use]
    pub fn is_favorite(&self, story_id: Uuid) -> bool {
        self.favorites
            .iter()
            .any(|story| story.story_id == story_id)
    }

    /// The set of favorited story ids, for membership filtering.
    #[must_use]
    pub fn favorite_ids(&self) -> HashSet<Uuid> {
        self.favorites
            .iter()
            .map(|story| story.story_id)
            .collect()
    }
}

/// Body of a login request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Login name.
    pub username: String,
    /// Plain-text password; only ever sent over the wire, never stored.
    pub password: String,
}

/// Body of an account-creation request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignupRequest {
    /// Display name for the new account.
    pub name: String,
    /// Desired login name.
    pub username: String,
    /// Plain-text password.
    pub password: String,
}

/// Response to a successful login or signup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    /// Opaque bearer token for subsequent requests.
    pub token: String,
    /// The authenticated account.
    pub user: User,
}

/// Response wrapper for a profile fetch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserResponse {
    /// The requested account.
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_story(title: &str) -> Story {
        Story {
            story_id: Uuid::new_v4(),
            title: title.to_string(),
            author: "Author".to_string(),
            url: "https://example.com/a".to_string(),
            username: "alice".to_string(),
            created_at: Timestamp(Utc::now()),
        }
    }

    fn sample_user() -> User {
        User {
            username: "alice".to_string(),
            name: "Alice".to_string(),
            created_at: Timestamp(Utc::now()),
            favorites: vec![],
            stories: vec![],
        }
    }

    #[test]
    fn is_favorite_checks_story_id_membership() {
        let starred = sample_story("starred");
        let other = sample_story("other");
        let mut user = sample_user();
        user.favorites.push(starred.clone());

        assert!(user.is_favorite(starred.story_id));
        assert!(!user.is_favorite(other.story_id));
    }

    #[test]
    fn favorite_ids_collects_every_favorite() {
        let first = sample_story("first");
        let second = sample_story("second");
        let mut user = sample_user();
        user.favorites = vec![first.clone(), second.clone()];

        let ids = user.favorite_ids();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&first.story_id));
        assert!(ids.contains(&second.story_id));
    }

    #[test]
    fn user_with_missing_lists_deserializes_empty() {
        let json = r#"{"username":"alice","name":"Alice","createdAt":"2026-01-05T12:00:00Z"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.favorites.is_empty());
        assert!(user.stories.is_empty());
    }

    #[test]
    fn auth_response_roundtrip() {
        let response = AuthResponse {
            token: "opaque-token".to_string(),
            user: sample_user(),
        };

        let json = serde_json::to_string(&response).unwrap();
        let back: AuthResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(back, response);
    }

    #[test]
    fn login_request_serializes_both_fields() {
        let request = LoginRequest {
            username: "alice".to_string(),
            password: "hunter22".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"username\""));
        assert!(json.contains("\"password\""));
    }
}

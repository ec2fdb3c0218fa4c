//! Tests for the API client functionality
//!
//! Validates endpoint URL construction, status-to-error mapping, and the
//! wire model shapes the client decodes.

#[cfg(test)]
mod tests {
    use crate::api::{StorydeckClient, error_for_status};
    use chrono::Utc;
    use reqwest::StatusCode;
    use shared::models::{ApiError, Story, StoriesResponse, Timestamp};
    use uuid::Uuid;

    /// Tests API client creation
    #[test]
    fn test_api_client_creation() {
        let client = StorydeckClient::new("http://localhost:8080/");
        assert_eq!(client.current_token(), None);
    }

    /// Tests token installation and clearing
    #[test]
    fn test_token_roundtrip() {
        let client = StorydeckClient::new("http://localhost:8080");
        client.set_token(Some("opaque-token".to_string()));
        assert_eq!(client.current_token().as_deref(), Some("opaque-token"));
        client.set_token(None);
        assert_eq!(client.current_token(), None);
    }

    /// Tests API endpoint URLs
    #[test]
    fn test_api_endpoints() {
        let story_id = Uuid::new_v4();
        let username = "alice";

        let stories_url = "/api/stories".to_string();
        assert_eq!(stories_url, "/api/stories");

        let story_url = format!("/api/stories/{story_id}");
        assert!(story_url.starts_with("/api/stories/"));

        let favorite_url = format!("/api/users/{username}/favorites/{story_id}");
        assert!(favorite_url.starts_with("/api/users/alice/favorites/"));
    }

    /// Tests authentication failure mapping
    #[test]
    fn test_auth_errors_map_to_authentication_failed() {
        assert_eq!(
            error_for_status(StatusCode::UNAUTHORIZED, None),
            ApiError::AuthenticationFailed
        );
        assert_eq!(
            error_for_status(StatusCode::FORBIDDEN, None),
            ApiError::AuthenticationFailed
        );
    }

    /// Tests not-found mapping
    #[test]
    fn test_missing_entity_maps_to_not_found() {
        assert_eq!(
            error_for_status(StatusCode::NOT_FOUND, None),
            ApiError::NotFound
        );
    }

    /// Tests validation failure mapping with and without server detail
    #[test]
    fn test_rejected_body_maps_to_validation_failed() {
        assert_eq!(
            error_for_status(StatusCode::BAD_REQUEST, Some("url is required".to_string())),
            ApiError::ValidationFailed("url is required".to_string())
        );
        assert_eq!(
            error_for_status(StatusCode::UNPROCESSABLE_ENTITY, None),
            ApiError::ValidationFailed("malformed request".to_string())
        );
    }

    /// Tests fallthrough mapping keeps the status code
    #[test]
    fn test_other_statuses_map_to_unexpected() {
        assert_eq!(
            error_for_status(StatusCode::INTERNAL_SERVER_ERROR, None),
            ApiError::Unexpected(500)
        );
        assert_eq!(
            error_for_status(StatusCode::BAD_GATEWAY, None),
            ApiError::Unexpected(502)
        );
    }

    /// Tests the stories response shape the client decodes
    #[test]
    fn test_stories_response_model() {
        let response = StoriesResponse {
            stories: vec![Story {
                story_id: Uuid::new_v4(),
                title: "A headline".to_string(),
                author: "Author".to_string(),
                url: "https://example.com/a".to_string(),
                username: "alice".to_string(),
                created_at: Timestamp(Utc::now()),
            }],
        };

        let json = serde_json::to_string(&response).unwrap();
        let back: StoriesResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(back, response);
        assert_eq!(back.stories.len(), 1);
    }
}

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

use super::Timestamp;

/// A submitted link as returned by the stories API.
///
/// Stories are immutable from the front end's perspective; favoriting and
/// deletion are routed back through the API rather than mutating the value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    /// Unique identifier for the story.
    pub story_id: Uuid,

    /// Headline shown in every list view.
    pub title: String,

    /// Author credited on the story.
    pub author: String,

    /// Link target. May lack a scheme; see [`host_name`].
    pub url: String,

    /// Username of the account that submitted the story.
    pub username: String,

    /// When the story was submitted.
    pub created_at: Timestamp,
}

/// Body of a story-creation request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewStoryPayload {
    /// Author credited on the story.
    pub author: String,
    /// Headline for the story.
    pub title: String,
    /// Link target.
    pub url: String,
}

/// Response wrapper for `GET /stories`. Order is the server's and is
/// preserved all the way to the rendered lists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoriesResponse {
    /// Stories in server order.
    pub stories: Vec<Story>,
}

/// Response wrapper for a single created story.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoryResponse {
    /// The story as persisted by the server.
    pub story: Story,
}

/// Pull a display hostname out of a URL string.
///
/// With a scheme separator this is the authority component; without one it is
/// the first path segment. A leading `www.` is stripped either way. Malformed
/// input degrades to whatever the heuristic yields rather than failing.
#[must_use]
pub fn host_name(url: &str) -> String {
    let remainder = match url.split_once("://") {
        Some((_, rest)) => rest,
        None => url,
    };
    let host = remainder.split('/').next().unwrap_or_default();
    host.strip_prefix("www.").unwrap_or(host).to_string()
}

/// Stories submitted by `username`, in their original order.
#[must_use]
pub fn own_stories(stories: &[Story], username: &str) -> Vec<Story> {
    stories
        .iter()
        .filter(|story| story.username == username)
        .cloned()
        .collect()
}

/// Stories whose id appears in `favorite_ids`, in their original order.
#[must_use]
pub fn favorite_stories(stories: &[Story], favorite_ids: &HashSet<Uuid>) -> Vec<Story> {
    stories
        .iter()
        .filter(|story| favorite_ids.contains(&story.story_id))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn story(title: &str, username: &str) -> Story {
        Story {
            story_id: Uuid::new_v4(),
            title: title.to_string(),
            author: "Author".to_string(),
            url: "https://example.com".to_string(),
            username: username.to_string(),
            created_at: Timestamp(Utc::now()),
        }
    }

    #[test]
    fn host_name_strips_scheme_and_www() {
        assert_eq!(host_name("https://www.example.com/a"), "example.com");
    }

    #[test]
    fn host_name_without_scheme_uses_first_segment() {
        assert_eq!(host_name("example.com/a"), "example.com");
    }

    #[test]
    fn host_name_keeps_subdomains() {
        assert_eq!(host_name("sub.example.com"), "sub.example.com");
    }

    #[test]
    fn host_name_strips_www_without_scheme() {
        assert_eq!(host_name("www.example.com/path/deep"), "example.com");
    }

    #[test]
    fn host_name_handles_empty_input() {
        assert_eq!(host_name(""), "");
    }

    #[test]
    fn own_stories_filters_by_submitter_preserving_order() {
        let stories = vec![
            story("first", "alice"),
            story("second", "bob"),
            story("third", "alice"),
        ];

        let mine = own_stories(&stories, "alice");
        let titles: Vec<&str> = mine.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "third"]);
    }

    #[test]
    fn own_stories_empty_for_unknown_user() {
        let stories = vec![story("first", "alice")];
        assert!(own_stories(&stories, "nobody").is_empty());
    }

    #[test]
    fn favorite_stories_filters_by_membership_preserving_order() {
        let stories = vec![
            story("first", "alice"),
            story("second", "bob"),
            story("third", "carol"),
        ];
        let favorite_ids: HashSet<Uuid> = [stories[2].story_id, stories[0].story_id]
            .into_iter()
            .collect();

        let favorites = favorite_stories(&stories, &favorite_ids);
        let titles: Vec<&str> = favorites.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "third"]);
    }

    #[test]
    fn favorite_stories_empty_set_yields_nothing() {
        let stories = vec![story("first", "alice")];
        assert!(favorite_stories(&stories, &HashSet::new()).is_empty());
    }

    #[test]
    fn story_serialization_uses_camel_case() {
        let item = story("first", "alice");
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"storyId\""));
        assert!(json.contains("\"createdAt\""));

        let back: Story = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}

use shared::models::{Story, User, host_name};
use uuid::Uuid;

/// Everything a story row renders, computed ahead of time so the markup
/// mapping stays a dumb template and the decoration rules stay testable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryRowModel {
    pub story_id: Uuid,
    pub title: String,
    pub url: String,
    pub host: String,
    pub author: String,
    pub submitter: String,
    /// `None` when nobody is logged in (no star at all), otherwise whether
    /// the star renders filled.
    pub star: Option<bool>,
    /// Delete control, shown only in the my-stories view.
    pub show_trash: bool,
}

impl StoryRowModel {
    /// Build the view-model for one story as seen by `viewer`.
    #[must_use]
    pub fn build(story: &Story, viewer: Option<&User>, own_view: bool) -> Self {
        Self {
            story_id: story.story_id,
            title: story.title.clone(),
            url: story.url.clone(),
            host: host_name(&story.url),
            author: story.author.clone(),
            submitter: story.username.clone(),
            star: viewer.map(|user| user.is_favorite(story.story_id)),
            show_trash: own_view,
        }
    }
}

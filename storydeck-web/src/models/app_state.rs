use shared::models::{Story, User};
use uuid::Uuid;
use yewdux::Store;

/// Session state for the whole app. "Logged in" is exactly `user.is_some()`.
///
/// All updates go through the pure transition methods below so the
/// login/logout/favorite flows can be unit-tested without a DOM; components
/// apply the returned value to the store and re-render from it.
#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct AppState {
    pub user: Option<User>,
    pub token: Option<String>,
}

impl AppState {
    /// State after a successful login, signup, or session restore.
    #[must_use]
    pub fn logged_in(user: User, token: String) -> Self {
        Self {
            user: Some(user),
            token: Some(token),
        }
    }

    /// State after logout. Replaces the reload-the-page reset: every field
    /// goes back to its initial value explicitly.
    #[must_use]
    pub fn logged_out() -> Self {
        Self::default()
    }

    /// This state with `story` appended to the user's favorites.
    /// No-op when logged out or when the story is already starred.
    #[must_use]
    pub fn with_favorite_added(&self, story: Story) -> Self {
        let mut next = self.clone();
        if let Some(user) = next.user.as_mut()
            && !user.is_favorite(story.story_id)
        {
            user.favorites.push(story);
        }
        next
    }

    /// This state with `story_id` removed from the user's favorites,
    /// preserving the order of the remaining entries.
    #[must_use]
    pub fn with_favorite_removed(&self, story_id: Uuid) -> Self {
        let mut next = self.clone();
        if let Some(user) = next.user.as_mut() {
            user.favorites.retain(|story| story.story_id != story_id);
        }
        next
    }

    /// Whether `story_id` is starred in this state. `None` when logged out,
    /// so render code can distinguish "no star at all" from either star kind.
    #[must_use]
    pub fn favorite_state(&self, story_id: Uuid) -> Option<bool> {
        self.user.as_ref().map(|user| user.is_favorite(story_id))
    }
}

pub(crate) mod error_alert;
pub(crate) mod loading;
pub(crate) mod story_list;
pub(crate) mod story_row;

// Re-export components for convenience
pub use error_alert::ErrorAlert;
pub use story_list::StoryList;

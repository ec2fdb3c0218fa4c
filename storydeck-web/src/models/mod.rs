pub mod app_state;
pub mod story_row;

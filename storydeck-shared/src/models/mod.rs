//! Wire models for the Storydeck API plus the pure helpers the views use.

pub mod errors;
pub mod story;
pub mod timestamp;
pub mod user;
pub mod validation;

pub use errors::{ApiError, ErrorBody};
pub use story::{
    NewStoryPayload, StoriesResponse, Story, StoryResponse, favorite_stories, host_name,
    own_stories,
};
pub use timestamp::Timestamp;
pub use user::{AuthResponse, LoginRequest, SignupRequest, User, UserResponse};
pub use validation::{
    ValidationError, validate_password, validate_required, validate_story_url, validate_username,
};

mod error;
mod favorites;
mod home;
pub mod login;
mod my_stories;
mod profile;
mod submit;

pub use error::ErrorPage;
pub use favorites::FavoritesPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use my_stories::MyStoriesPage;
pub use profile::ProfilePage;
pub use submit::SubmitPage;

use crate::api::StorydeckClient;
use crate::models::app_state::AppState;
use shared::models::Story;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::UseStateHandle;
use yewdux::Dispatch;

/// Flip a story's favorite state for the current user.
///
/// The star flips in the store before the request goes out; if the request
/// fails the flip is reverted and `error` gets a user-facing message. Does
/// nothing while logged out.
pub(crate) fn toggle_favorite(
    dispatch: &Dispatch<AppState>,
    story: &Story,
    error: &UseStateHandle<Option<String>>,
) {
    let Some(user) = dispatch.get().user.clone() else {
        return;
    };
    let was_favorite = user.is_favorite(story.story_id);
    let username = user.username.clone();
    let story = story.clone();
    let dispatch = dispatch.clone();
    let error = error.clone();

    if was_favorite {
        dispatch.reduce(|state: Rc<AppState>| Rc::new(state.with_favorite_removed(story.story_id)));
    } else {
        let starred = story.clone();
        dispatch.reduce(move |state: Rc<AppState>| Rc::new(state.with_favorite_added(starred)));
    }

    spawn_local(async move {
        let client = StorydeckClient::shared();
        let result = if was_favorite {
            client.remove_favorite(&username, story.story_id).await
        } else {
            client.add_favorite(&username, story.story_id).await
        };

        if let Err(err) = result {
            if was_favorite {
                let restored = story.clone();
                dispatch
                    .reduce(move |state: Rc<AppState>| Rc::new(state.with_favorite_added(restored)));
            } else {
                dispatch.reduce(|state: Rc<AppState>| {
                    Rc::new(state.with_favorite_removed(story.story_id))
                });
            }
            error.set(Some(err.user_message()));
        }
    });
}

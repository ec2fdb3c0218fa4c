use crate::api::StorydeckClient;
use crate::components::{ErrorAlert, StoryList};
use crate::models::app_state::AppState;
use crate::models::story_row::StoryRowModel;
use crate::pages::toggle_favorite;
use shared::models::{Story, favorite_stories};
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::use_store;

/// The starred-stories view. Re-fetches the full story list on mount and
/// filters it against the current user's favorites; because the rows derive
/// from the store, unstarring removes exactly that row immediately (and the
/// row comes back if the request fails and the flip is rolled back).
#[function_component(FavoritesPage)]
pub fn favorites_page() -> Html {
    let (state, dispatch) = use_store::<AppState>();
    let stories = use_state(Vec::<Story>::new);
    let error = use_state(|| None::<String>);

    {
        let stories = stories.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let client = StorydeckClient::shared();
                match client.get_stories().await {
                    Ok(response) => {
                        stories.set(response.stories);
                        error.set(None);
                    }
                    Err(err) => error.set(Some(err.user_message())),
                }
            });
            || ()
        });
    }

    let on_toggle_star = {
        let stories = stories.clone();
        let dispatch = dispatch.clone();
        let error = error.clone();
        Callback::from(move |story_id: Uuid| {
            if let Some(story) = stories.iter().find(|s| s.story_id == story_id) {
                toggle_favorite(&dispatch, story, &error);
            }
        })
    };

    let rows: Vec<StoryRowModel> = state.user.as_ref().map_or_else(Vec::new, |user| {
        favorite_stories(&stories, &user.favorite_ids())
            .iter()
            .map(|story| StoryRowModel::build(story, Some(user), false))
            .collect()
    });

    html! {
        <div class="space-y-4">
            <h1 class="text-xl font-bold">{"Favorites"}</h1>
            <ErrorAlert message={(*error).clone()} />
            <StoryList {rows} {on_toggle_star} empty_message="You have not favorited any stories yet." />
        </div>
    }
}

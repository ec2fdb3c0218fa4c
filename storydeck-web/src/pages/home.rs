use crate::api::StorydeckClient;
use crate::components::{ErrorAlert, StoryList};
use crate::models::app_state::AppState;
use crate::models::story_row::StoryRowModel;
use crate::pages::toggle_favorite;
use shared::models::Story;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::use_store;

/// The public front page: every story, in the order the API returned them.
#[function_component(HomePage)]
pub fn home_page() -> Html {
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

    let rows: Vec<StoryRowModel> = stories
        .iter()
        .map(|story| StoryRowModel::build(story, state.user.as_ref(), false))
        .collect();

    html! {
        <div class="space-y-4">
            <ErrorAlert message={(*error).clone()} />
            <StoryList {rows} {on_toggle_star} empty_message="No stories have been submitted yet." />
        </div>
    }
}

use crate::api::StorydeckClient;
use crate::components::{ErrorAlert, StoryList};
use crate::models::app_state::AppState;
use crate::models::story_row::StoryRowModel;
use crate::pages::toggle_favorite;
use shared::models::{Story, own_stories};
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::use_store;

/// Remove `story_id` from `stories`, handing back the shortened list together
/// with the removed story and its position so a failed delete can put it back.
fn remove_story(stories: &[Story], story_id: Uuid) -> Option<(Vec<Story>, Story, usize)> {
    let index = stories.iter().position(|s| s.story_id == story_id)?;
    let mut next = stories.to_vec();
    let removed = next.remove(index);
    Some((next, removed, index))
}

/// Reinsert `story` into `stories` at its original position.
fn restore_story(stories: &[Story], story: Story, index: usize) -> Vec<Story> {
    let mut next = stories.to_vec();
    next.insert(index.min(next.len()), story);
    next
}

/// Stories submitted by the current user, with delete controls.
///
/// Deleting removes the row immediately and then fires the API call; if the
/// call fails the row is restored at its original position with an error.
#[function_component(MyStoriesPage)]
pub fn my_stories_page() -> Html {
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

    let on_trash = {
        let stories = stories.clone();
        let error = error.clone();
        Callback::from(move |story_id: Uuid| {
            let Some((next, removed, index)) = remove_story(&stories, story_id) else {
                return;
            };
            stories.set(next.clone());

            let stories_handle = stories.clone();
            let error_handle = error.clone();
            spawn_local(async move {
                let client = StorydeckClient::shared();
                if let Err(err) = client.delete_story(story_id).await {
                    // Roll back from the post-removal list, not the handle's
                    // render-time snapshot, which still contains the story.
                    stories_handle.set(restore_story(&next, removed, index));
                    error_handle.set(Some(err.user_message()));
                }
            });
        })
    };

    let rows: Vec<StoryRowModel> = state.user.as_ref().map_or_else(Vec::new, |user| {
        own_stories(&stories, &user.username)
            .iter()
            .map(|story| StoryRowModel::build(story, Some(user), true))
            .collect()
    });

    html! {
        <div class="space-y-4">
            <h1 class="text-xl font-bold">{"My stories"}</h1>
            <ErrorAlert message={(*error).clone()} />
            <StoryList {rows} {on_toggle_star} {on_trash} empty_message="You have not submitted any stories yet." />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shared::models::Timestamp;

    fn story(title: &str) -> Story {
        Story {
            story_id: Uuid::new_v4(),
            title: title.to_string(),
            author: "Author".to_string(),
            url: "https://example.com/a".to_string(),
            username: "alice".to_string(),
            created_at: Timestamp(Utc::now()),
        }
    }

    fn titles(stories: &[Story]) -> Vec<&str> {
        stories.iter().map(|s| s.title.as_str()).collect()
    }

    #[test]
    fn remove_story_drops_exactly_the_target() {
        let list = vec![story("first"), story("second"), story("third")];

        let (next, removed, index) = remove_story(&list, list[1].story_id).unwrap();
        assert_eq!(titles(&next), vec!["first", "third"]);
        assert_eq!(removed.title, "second");
        assert_eq!(index, 1);
    }

    #[test]
    fn remove_story_unknown_id_is_none() {
        let list = vec![story("first")];
        assert!(remove_story(&list, Uuid::new_v4()).is_none());
    }

    #[test]
    fn failed_delete_restores_original_list_without_duplicates() {
        let list = vec![story("first"), story("second"), story("third")];
        let target = list[1].story_id;

        let (next, removed, index) = remove_story(&list, target).unwrap();
        let restored = restore_story(&next, removed, index);

        assert_eq!(restored, list);
        let occurrences = restored
            .iter()
            .filter(|s| s.story_id == target)
            .count();
        assert_eq!(occurrences, 1);
    }

    #[test]
    fn restore_at_list_end_clamps_the_index() {
        let list = vec![story("only")];
        let (next, removed, index) = remove_story(&list, list[0].story_id).unwrap();
        assert!(next.is_empty());

        let restored = restore_story(&next, removed, index);
        assert_eq!(restored, list);
    }
}

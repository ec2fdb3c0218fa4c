use crate::api::StorydeckClient;
use crate::routes::MainRoute;
use shared::models::{NewStoryPayload, validate_required, validate_story_url};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;

/// New-story form. On success the form resets and navigation returns to the
/// front page, which re-fetches the list; on failure the input is kept and
/// the error is shown inline.
#[function_component(SubmitPage)]
pub fn submit_page() -> Html {
    let author = use_state(String::new);
    let title = use_state(String::new);
    let url = use_state(String::new);
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);
    let navigator = use_navigator();

    let input_callback = |handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                handle.set(input.value());
            }
        })
    };

    let onsubmit = {
        let author_handle = author.clone();
        let title_handle = title.clone();
        let url_handle = url.clone();
        let error_handle = error.clone();
        let busy_handle = busy.clone();
        let navigator = navigator;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let payload = NewStoryPayload {
                author: (*author_handle).clone(),
                title: (*title_handle).clone(),
                url: (*url_handle).clone(),
            };
            busy_handle.set(true);
            error_handle.set(None);

            let author_ref = author_handle.clone();
            let title_ref = title_handle.clone();
            let url_ref = url_handle.clone();
            let error_ref = error_handle.clone();
            let busy_ref = busy_handle.clone();
            let navigator_handle = navigator.clone();
            spawn_local(async move {
                let client = StorydeckClient::shared();
                match client.add_story(&payload).await {
                    Ok(_) => {
                        author_ref.set(String::new());
                        title_ref.set(String::new());
                        url_ref.set(String::new());
                        if let Some(ref nav) = navigator_handle {
                            nav.push(&MainRoute::Home);
                        }
                    }
                    Err(err) => error_ref.set(Some(err.user_message())),
                }
                busy_ref.set(false);
            });
        })
    };

    let invalid = validate_required(&author).is_err()
        || validate_required(&title).is_err()
        || validate_story_url(&url).is_err();
    let disable_submit = invalid || *busy;

    html! {
        <div class="flex items-start justify-center bg-base-200 p-6">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{"Submit a story"}</h2>
                    if let Some(message) = &*error {
                        <div class="alert alert-error">
                            <span>{message.clone()}</span>
                        </div>
                    }
                    <div class="form-control">
                        <label class="label" for="author">
                            <span class="label-text">{"Author"}</span>
                        </label>
                        <input
                            id="author"
                            class="input input-bordered"
                            type="text"
                            required=true
                            value={(*author).clone()}
                            oninput={input_callback(&author)}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="title">
                            <span class="label-text">{"Title"}</span>
                        </label>
                        <input
                            id="title"
                            class="input input-bordered"
                            type="text"
                            required=true
                            value={(*title).clone()}
                            oninput={input_callback(&title)}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="url">
                            <span class="label-text">{"URL"}</span>
                        </label>
                        <input
                            id="url"
                            class="input input-bordered"
                            type="text"
                            required=true
                            value={(*url).clone()}
                            oninput={input_callback(&url)}
                        />
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            {if *busy { "Submitting..." } else { "Submit" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

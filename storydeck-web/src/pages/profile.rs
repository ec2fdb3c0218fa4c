use crate::models::app_state::AppState;
use yew::prelude::*;
use yewdux::prelude::use_selector;

/// Account details for the logged-in user.
#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let user = use_selector(|state: &AppState| state.user.clone());

    let Some(user) = (*user).clone() else {
        // The route is auth-gated; an empty state only shows up transiently
        // while the session restore is still in flight.
        return html! {};
    };

    let member_since = user.created_at.0.format("%B %-d, %Y").to_string();

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{"Your profile"}</h1>
            <div class="card bg-base-200 max-w-md">
                <div class="card-body space-y-2">
                    <div>
                        <span class="font-semibold">{"Username: "}</span>
                        <span>{ &user.username }</span>
                    </div>
                    <div>
                        <span class="font-semibold">{"Name: "}</span>
                        <span>{ &user.name }</span>
                    </div>
                    <div>
                        <span class="font-semibold">{"Member since: "}</span>
                        <span>{ member_since }</span>
                    </div>
                </div>
            </div>
        </div>
    }
}

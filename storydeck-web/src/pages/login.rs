use crate::api::StorydeckClient;
use crate::models::app_state::AppState;
use crate::routes::MainRoute;
use crate::session::{self, StoredCredentials};
use shared::models::{
    AuthResponse, LoginRequest, SignupRequest, validate_password, validate_required,
    validate_username,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_store;

fn oninput_to(handle: &UseStateHandle<String>) -> Callback<InputEvent> {
    let handle = handle.clone();
    Callback::from(move |event: InputEvent| {
        if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
            handle.set(input.value());
        }
    })
}

/// Login and account-creation forms.
///
/// Successful authentication installs the token on the shared client, writes
/// the local-storage mirror, replaces the session state, and navigates home.
/// Failures surface as inline alerts; nothing reloads the page.
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let (_state, dispatch) = use_store::<AppState>();
    let navigator = use_navigator();

    let login_username = use_state(String::new);
    let login_password = use_state(String::new);
    let login_error = use_state(|| None::<String>);
    let login_busy = use_state(|| false);

    let signup_name = use_state(String::new);
    let signup_username = use_state(String::new);
    let signup_password = use_state(String::new);
    let signup_error = use_state(|| None::<String>);
    let signup_busy = use_state(|| false);

    let finish_auth = {
        let dispatch = dispatch.clone();
        let navigator = navigator.clone();
        Callback::from(move |response: AuthResponse| {
            let AuthResponse { token, user } = response;
            session::save(&StoredCredentials {
                token: token.clone(),
                username: user.username.clone(),
            });
            dispatch.set(AppState::logged_in(user, token));
            if let Some(ref nav) = navigator {
                nav.push(&MainRoute::Home);
            }
        })
    };

    let on_login_submit = {
        let username = login_username.clone();
        let password = login_password.clone();
        let error = login_error.clone();
        let busy = login_busy.clone();
        let finish_auth = finish_auth.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let request = LoginRequest {
                username: (*username).clone(),
                password: (*password).clone(),
            };
            busy.set(true);
            error.set(None);
            let error = error.clone();
            let busy = busy.clone();
            let finish_auth = finish_auth.clone();
            spawn_local(async move {
                let client = StorydeckClient::shared();
                match client.login(&request).await {
                    Ok(response) => finish_auth.emit(response),
                    Err(err) => error.set(Some(err.user_message())),
                }
                busy.set(false);
            });
        })
    };

    let on_signup_submit = {
        let name = signup_name.clone();
        let username = signup_username.clone();
        let password = signup_password.clone();
        let error = signup_error.clone();
        let busy = signup_busy.clone();
        let finish_auth = finish_auth.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let request = SignupRequest {
                name: (*name).clone(),
                username: (*username).clone(),
                password: (*password).clone(),
            };
            busy.set(true);
            error.set(None);
            let error = error.clone();
            let busy = busy.clone();
            let finish_auth = finish_auth.clone();
            spawn_local(async move {
                let client = StorydeckClient::shared();
                match client.signup(&request).await {
                    Ok(response) => finish_auth.emit(response),
                    Err(err) => error.set(Some(err.user_message())),
                }
                busy.set(false);
            });
        })
    };

    let login_invalid = validate_username(&login_username).is_err()
        || validate_required(&login_password).is_err();
    let disable_login = login_invalid || *login_busy;

    let signup_invalid = validate_required(&signup_name).is_err()
        || validate_username(&signup_username).is_err()
        || validate_password(&signup_password).is_err();
    let disable_signup = signup_invalid || *signup_busy;

    html! {
        <div class="flex flex-wrap items-start justify-center gap-6 min-h-screen bg-base-200 p-6">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={on_login_submit}>
                    <h2 class="card-title text-2xl">{"Sign in"}</h2>
                    if let Some(message) = &*login_error {
                        <div class="alert alert-error">
                            <span>{message.clone()}</span>
                        </div>
                    }
                    <div class="form-control">
                        <label class="label" for="login-username">
                            <span class="label-text">{"Username"}</span>
                        </label>
                        <input
                            id="login-username"
                            class="input input-bordered"
                            type="text"
                            required=true
                            value={(*login_username).clone()}
                            oninput={oninput_to(&login_username)}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="login-password">
                            <span class="label-text">{"Password"}</span>
                        </label>
                        <input
                            id="login-password"
                            class="input input-bordered"
                            type="password"
                            required=true
                            value={(*login_password).clone()}
                            oninput={oninput_to(&login_password)}
                        />
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_login}>
                            {if *login_busy { "Signing in..." } else { "Sign in" }}
                        </button>
                    </div>
                </form>
            </div>

            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={on_signup_submit}>
                    <h2 class="card-title text-2xl">{"Create account"}</h2>
                    if let Some(message) = &*signup_error {
                        <div class="alert alert-error">
                            <span>{message.clone()}</span>
                        </div>
                    }
                    <div class="form-control">
                        <label class="label" for="signup-name">
                            <span class="label-text">{"Name"}</span>
                        </label>
                        <input
                            id="signup-name"
                            class="input input-bordered"
                            type="text"
                            required=true
                            value={(*signup_name).clone()}
                            oninput={oninput_to(&signup_name)}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="signup-username">
                            <span class="label-text">{"Username"}</span>
                        </label>
                        <input
                            id="signup-username"
                            class="input input-bordered"
                            type="text"
                            required=true
                            value={(*signup_username).clone()}
                            oninput={oninput_to(&signup_username)}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="signup-password">
                            <span class="label-text">{"Password"}</span>
                        </label>
                        <input
                            id="signup-password"
                            class="input input-bordered"
                            type="password"
                            required=true
                            value={(*signup_password).clone()}
                            oninput={oninput_to(&signup_password)}
                        />
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-secondary" type="submit" disabled={disable_signup}>
                            {if *signup_busy { "Creating account..." } else { "Create account" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

use crate::api::StorydeckClient;
use crate::models::app_state::AppState;
use crate::routes::MainRoute;
use crate::session;
use shared::models::{ApiError, UserResponse};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::suspense::Suspense;
use yew::{Callback, Html, function_component, html, use_effect_with, use_state};
use yew_router::prelude::*;
use yewdux::prelude::use_store;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

#[function_component(App)]
pub fn app() -> Html {
    let (_store_state, store_dispatch) = use_store::<AppState>();
    let app_state = use_state(|| None::<AppState>);

    // Restore the session from the local-storage mirror once, on mount.
    {
        let app_state_handle = app_state.clone();
        let store_dispatch_handle = store_dispatch.clone();
        use_effect_with((), move |_| {
            let app_state_handle = app_state_handle.clone();
            spawn_local(async move {
                let client = StorydeckClient::shared();
                let state = match session::load() {
                    Some(credentials) => {
                        client.set_token(Some(credentials.token.clone()));
                        match client.get_user(&credentials.username).await {
                            Ok(UserResponse { user }) => {
                                AppState::logged_in(user, credentials.token)
                            }
                            Err(ApiError::AuthenticationFailed) => {
                                // The mirrored token is stale; forget it.
                                session::clear();
                                client.set_token(None);
                                AppState::logged_out()
                            }
                            Err(err) => {
                                // Keep the mirror so the next load can retry.
                                log(std::format!("session restore failed: {err}").as_str());
                                client.set_token(None);
                                AppState::logged_out()
                            }
                        }
                    }
                    None => AppState::logged_out(),
                };
                app_state_handle.set(Some(state.clone()));
                store_dispatch_handle.set(state);
            });
            || ()
        });
    }

    let logout_callback = {
        let state_setter = app_state.clone();
        let logout_dispatch = store_dispatch.clone();
        Callback::from(move |()| {
            session::clear();
            let client = StorydeckClient::shared();
            client.set_token(None);
            let state = AppState::logged_out();
            state_setter.set(Some(state.clone()));
            logout_dispatch.set(state);
        })
    };

    html! {
        <Suspense fallback={ html!{ <crate::components::loading::Loading/> } }>
            {
                match *app_state {
                    None => html!{ /* Pending session restore */ },
                    Some(_) => html! {
                        <BrowserRouter>
                            <Switch<MainRoute> render={move |route| crate::routes::switch_with_logout(route, logout_callback.clone())} />
                        </BrowserRouter>
                    },
                }
            }
        </Suspense>
    }
}

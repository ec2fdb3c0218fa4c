use crate::{containers::layout::Layout, models::app_state::AppState, pages::*};
use strum::{EnumIter, IntoEnumIterator};
use wasm_bindgen::prelude::*;
use yew::Callback;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// The main routes
#[derive(Debug, Clone, PartialEq, Eq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/submit")]
    Submit,
    #[at("/favorites")]
    Favorites,
    #[at("/my-stories")]
    MyStories,
    #[at("/profile")]
    Profile,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl MainRoute {
    /// Label shown for this route in the navigation bar.
    #[must_use]
    pub fn nav_label(&self) -> &'static str {
        match self {
            Self::Home => "all",
            Self::Login => "login",
            Self::Submit => "submit",
            Self::Favorites => "favorites",
            Self::MyStories => "my stories",
            Self::Profile => "profile",
            Self::NotFound => "404",
        }
    }
}

/// Routes that appear in the navigation bar. The authenticated-only entries
/// (submit, favorites, my stories) are hidden while logged out, mirroring the
/// nav show/hide the session state drives. The profile page is reached from
/// the username in the header rather than the nav.
#[must_use]
pub fn nav_routes(is_authenticated: bool) -> Vec<MainRoute> {
    MainRoute::iter()
        .filter(|route| match route {
            MainRoute::Home => true,
            MainRoute::Submit | MainRoute::Favorites | MainRoute::MyStories => is_authenticated,
            MainRoute::Login | MainRoute::Profile | MainRoute::NotFound => false,
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct MainRouteViewProps {
    pub route: MainRoute,
    pub on_logout: Callback<()>,
}

#[function_component(MainRouteView)]
fn main_route_view(props: &MainRouteViewProps) -> Html {
    let user = use_selector(|state: &AppState| state.user.clone());
    let is_authenticated = (*user).is_some();
    let on_logout = props.on_logout.clone();

    match props.route.clone() {
        MainRoute::Login => {
            if is_authenticated {
                html! { <Redirect<MainRoute> to={MainRoute::Home} /> }
            } else {
                html! {
                    <Layout current_route={MainRoute::Login} on_logout={Some(on_logout)}>
                        <LoginPage />
                    </Layout>
                }
            }
        }
        // The story list is public; decorations differ by session state.
        MainRoute::Home => html! {
            <Layout current_route={MainRoute::Home} on_logout={Some(on_logout)}>
                <HomePage />
            </Layout>
        },
        MainRoute::Submit => {
            if !is_authenticated {
                return html! { <Redirect<MainRoute> to={MainRoute::Login} /> };
            }
            html! {
                <Layout current_route={MainRoute::Submit} on_logout={Some(on_logout)}>
                    <SubmitPage />
                </Layout>
            }
        }
        MainRoute::Favorites => {
            if !is_authenticated {
                return html! { <Redirect<MainRoute> to={MainRoute::Login} /> };
            }
            html! {
                <Layout current_route={MainRoute::Favorites} on_logout={Some(on_logout)}>
                    <FavoritesPage />
                </Layout>
            }
        }
        MainRoute::MyStories => {
            if !is_authenticated {
                return html! { <Redirect<MainRoute> to={MainRoute::Login} /> };
            }
            html! {
                <Layout current_route={MainRoute::MyStories} on_logout={Some(on_logout)}>
                    <MyStoriesPage />
                </Layout>
            }
        }
        MainRoute::Profile => {
            if !is_authenticated {
                return html! { <Redirect<MainRoute> to={MainRoute::Login} /> };
            }
            html! {
                <Layout current_route={MainRoute::Profile} on_logout={Some(on_logout)}>
                    <ProfilePage />
                </Layout>
            }
        }
        MainRoute::NotFound => html! {
            <Layout current_route={MainRoute::NotFound} on_logout={Some(on_logout)}>
                <ErrorPage />
            </Layout>
        },
    }
}

/// Switch function for the main routes.
pub fn switch_with_logout(route: MainRoute, on_logout: Callback<()>) -> Html {
    log(std::format!("Switching to route: {:?}", route).as_str());
    html! { <MainRouteView {route} {on_logout} /> }
}

use crate::{
    models::app_state::AppState,
    routes::{MainRoute, nav_routes},
};
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
    #[prop_or_default]
    pub on_logout: Option<Callback<()>>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let user = use_selector(|state: &AppState| state.user.clone());
    let user_opt = (*user).clone();
    let is_authenticated = user_opt.is_some();

    let render_routes = || -> Html {
        html! {
            { for nav_routes(is_authenticated).into_iter().map(|route| {
                let active_class = if props.current_route.as_ref() == Some(&route) {
                    "btn-soft"
                } else {
                    ""
                };
                html! {
                    <li>
                        <Link<MainRoute> to={route.clone()} classes={classes!("btn", "btn-ghost", "gap-2", active_class)}>
                            { route.nav_label() }
                        </Link<MainRoute>>
                    </li>
                }
            })}
        }
    };

    let logout_button = {
        let on_logout = props.on_logout.clone();
        let onclick = Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            if let Some(callback) = on_logout.clone() {
                callback.emit(());
            }
        });
        html! {
            <button class="btn btn-ghost btn-sm" {onclick}>{"logout"}</button>
        }
    };

    html! {
        <nav class="navbar justify-between bg-base-300">
            <a class="btn btn-ghost text-lg">
                <Link<MainRoute> to={MainRoute::Home} classes="text-lg">
                    {"Storydeck"}
                </Link<MainRoute>>
            </a>
            <ul class="menu menu-horizontal">
                { render_routes() }
            </ul>
            <div class="flex items-center gap-2">
                {
                    user_opt.as_ref().map_or_else(
                        || html! {
                            <Link<MainRoute> to={MainRoute::Login} classes="btn btn-primary btn-sm">
                                {"login / signup"}
                            </Link<MainRoute>>
                        },
                        |user| html! {
                            <>
                                <Link<MainRoute> to={MainRoute::Profile} classes="link link-hover text-sm text-base-content/80 mr-2">
                                    { &user.username }
                                </Link<MainRoute>>
                                { logout_button.clone() }
                            </>
                        },
                    )
                }
            </div>
        </nav>
    }
}

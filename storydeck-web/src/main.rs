mod api;
#[cfg(test)]
mod api_test;
mod app;
mod components;
mod config;
mod containers;
mod models;
mod pages;
mod routes;
#[cfg(test)]
mod routes_test;
mod session;

use app::App;
use yew::Renderer;
use yew::{Html, function_component, html};
use yewdux::YewduxRoot;

#[function_component(Root)]
fn root() -> Html {
    html! {
        <YewduxRoot>
            <App />
        </YewduxRoot>
    }
}

fn main() {
    // Surface panics in the browser console instead of a silent hang
    std::panic::set_hook(Box::new(|info| {
        web_sys::console::error_1(&info.to_string().into());
    }));

    web_sys::console::log_1(&"Starting Storydeck".into());

    // Mount the app to the document body
    Renderer::<Root>::with_root(
        web_sys::window()
            .unwrap()
            .document()
            .unwrap()
            .get_elements_by_tag_name("body")
            .item(0)
            .unwrap(),
    )
    .render();
}

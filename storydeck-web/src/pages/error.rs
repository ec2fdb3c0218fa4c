use yew::{Html, function_component, html};
use yew_router::prelude::Link;

use crate::routes::MainRoute;

/// `ErrorPage` page component
#[function_component(ErrorPage)]
pub fn error_page() -> Html {
    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ "Page not found" }</h1>
            <p>{ "Nothing lives at this address." }</p>
            <Link<MainRoute> to={MainRoute::Home} classes="btn btn-primary btn-sm">
                { "Back to the front page" }
            </Link<MainRoute>>
        </div>
    }
}

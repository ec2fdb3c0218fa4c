use yew::{Html, function_component, html};

/// Suspense fallback shown while the story list view is being prepared.
#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <div class="flex items-center justify-center h-full">
            <div class="card bg-base-200 shadow-md">
                <div class="card-body items-center gap-3">
                    <span class="loading loading-dots loading-lg text-primary"></span>
                    <span class="text-sm text-base-content/70">{"Fetching stories"}</span>
                </div>
            </div>
        </div>
    }
}

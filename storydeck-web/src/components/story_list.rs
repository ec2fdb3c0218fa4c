use uuid::Uuid;
use yew::{Callback, Html, Properties, function_component, html};

use crate::components::story_row::StoryRow;
use crate::models::story_row::StoryRowModel;

#[derive(Properties, PartialEq)]
pub struct StoryListProps {
    /// Rows in render order; callers preserve the API's ordering.
    pub rows: Vec<StoryRowModel>,
    pub on_toggle_star: Callback<Uuid>,
    #[prop_or_default]
    pub on_trash: Callback<Uuid>,
    #[prop_or_default]
    pub empty_message: String,
}

#[function_component(StoryList)]
pub fn story_list(props: &StoryListProps) -> Html {
    if props.rows.is_empty() {
        let message = if props.empty_message.is_empty() {
            "No stories yet.".to_string()
        } else {
            props.empty_message.clone()
        };
        return html! {
            <div class="p-4 text-sm text-base-content/70">{ message }</div>
        };
    }

    html! {
        <ul class="divide-y divide-base-300">
            { for props.rows.iter().map(|row| html! {
                <StoryRow
                    key={row.story_id.to_string()}
                    model={row.clone()}
                    on_toggle_star={props.on_toggle_star.clone()}
                    on_trash={props.on_trash.clone()}
                />
            })}
        </ul>
    }
}

use uuid::Uuid;
use yew::{Callback, Html, Properties, function_component, html};
use yew_icons::{Icon, IconId};

use crate::models::story_row::StoryRowModel;

#[derive(Properties, PartialEq)]
pub struct StoryRowProps {
    pub model: StoryRowModel,
    /// Fired with the story id when the star is clicked.
    pub on_toggle_star: Callback<Uuid>,
    /// Fired with the story id when the trash control is clicked.
    #[prop_or_default]
    pub on_trash: Callback<Uuid>,
}

/// One story row: optional star, optional trash, link, author, host,
/// submitter. All decoration decisions are already made in the view-model.
#[function_component(StoryRow)]
pub fn story_row(props: &StoryRowProps) -> Html {
    let model = props.model.clone();

    let star = match model.star {
        None => html! {},
        Some(filled) => {
            let on_toggle_star = props.on_toggle_star.clone();
            let story_id = model.story_id;
            let onclick = Callback::from(move |_| on_toggle_star.emit(story_id));
            let icon_id = if filled {
                IconId::HeroiconsSolidStar
            } else {
                IconId::HeroiconsOutlineStar
            };
            html! {
                <button class="btn btn-ghost btn-xs" aria-label="toggle favorite" {onclick}>
                    <Icon {icon_id} class="w-4 h-4 text-warning" />
                </button>
            }
        }
    };

    let trash = if model.show_trash {
        let on_trash = props.on_trash.clone();
        let story_id = model.story_id;
        let onclick = Callback::from(move |_| on_trash.emit(story_id));
        html! {
            <button class="btn btn-ghost btn-xs" aria-label="delete story" {onclick}>
                <Icon icon_id={IconId::HeroiconsOutlineTrash} class="w-4 h-4 text-error" />
            </button>
        }
    } else {
        html! {}
    };

    html! {
        <li class="p-3 flex items-center gap-2" id={model.story_id.to_string()}>
            { star }
            { trash }
            <div>
                <a class="link link-hover font-medium" href={model.url.clone()} target="_blank">
                    { model.title.clone() }
                </a>
                <span class="text-xs text-base-content/60 ml-2">{ format!("({})", model.host) }</span>
                <div class="text-xs text-base-content/70 mt-1">
                    { format!("by {} · posted by {}", model.author, model.submitter) }
                </div>
            </div>
        </li>
    }
}

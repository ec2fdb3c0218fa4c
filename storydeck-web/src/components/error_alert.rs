use yew::{Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct ErrorAlertProps {
    /// Message to show; `None` renders nothing.
    #[prop_or_default]
    pub message: Option<String>,
}

/// Inline alert for failed actions. Every fallible page renders one of these
/// instead of letting a rejected request disappear into the console.
#[function_component(ErrorAlert)]
pub fn error_alert(props: &ErrorAlertProps) -> Html {
    let Some(message) = props.message.clone() else {
        return html! {};
    };

    html! {
        <div class="alert alert-error">
            <span>{message}</span>
        </div>
    }
}

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorDisplayProps {
    /// Heading above the message
    #[prop_or(AttrValue::Static("Something went wrong"))]
    pub title: AttrValue,
    pub message: String,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

#[function_component(ErrorDisplay)]
pub fn error_display(props: &ErrorDisplayProps) -> Html {
    log::warn!("Displaying error to user: {}", props.message);

    html! {
        <div class="flex flex-col gap-4">
            <div class="flex items-start gap-3 rounded-xl border border-pink-500/20 bg-pink-500/10 p-4 text-pink-200">
                <i class="fas fa-exclamation-circle text-xl"></i>
                <div class="flex flex-col gap-1">
                    <span class="font-semibold">{props.title.clone()}</span>
                    <span class="text-sm">{&props.message}</span>
                </div>
            </div>
            {if let Some(on_retry) = &props.on_retry {
                let on_retry = on_retry.clone();
                html! {
                    <button
                        class="self-start bg-blue-600 hover:bg-blue-500 text-white px-3 py-1.5 rounded-lg"
                        onclick={Callback::from(move |_| {
                            log::debug!("User clicked retry button");
                            on_retry.emit(());
                        })}
                    >
                        <i class="fas fa-redo"></i>
                        {" Run again"}
                    </button>
                }
            } else {
                html! {}
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_defaults_to_generic_text() {
        let props = yew::props!(ErrorDisplayProps {
            message: "HTTP error: 503".to_string()
        });
        assert_eq!(props.title.as_str(), "Something went wrong");
        assert!(props.on_retry.is_none());
    }
}

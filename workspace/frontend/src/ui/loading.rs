use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or_default]
    pub text: Option<AttrValue>,
}

/// Inline loading indicator with optional text.
#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="flex items-center gap-3 text-slate-400">
            <i class="fas fa-circle-notch fa-spin"></i>
            {if let Some(text) = &props.text {
                html! { <p>{text}</p> }
            } else {
                html! {}
            }}
        </div>
    }
}

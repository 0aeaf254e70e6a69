use yew::prelude::*;

use crate::i18n::current::error_banner as t;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: AttrValue,
}

/// Persistent alert for failures the page cannot recover from.
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    if props.message.trim().is_empty() {
        return Html::default();
    }

    html! {
        <div
            class={classes!(
                "flex",
                "items-start",
                "gap-3",
                "rounded-xl",
                "px-5",
                "py-4",
                "text-sm",
                "bg-red-950/80",
                "border",
                "border-red-500/40",
                "text-red-100",
                "shadow-xl",
                "w-full",
                "max-w-2xl",
                "animate-fade-in"
            )}
            role="alert"
            aria-live="assertive"
        >
            <span class="text-2xl" aria-hidden="true">{ "⚠️" }</span>
            <div class={classes!("flex-1", "space-y-1")}>
                <p class={classes!("font-semibold", "text-base")}>{ t::TITLE }</p>
                <p>{ props.message.clone() }</p>
            </div>
        </div>
    }
}

use yew::prelude::*;

use crate::{
    components::{
        icons::{Icon, IconName},
        tooltip::{Tooltip, TooltipPosition},
    },
    config::SCROLL_TOP_AFTER,
    hooks::{scroll_window_to_top, use_scroll_y},
    i18n::current::scroll_to_top as t,
};

#[function_component(ScrollToTopButton)]
pub fn scroll_to_top_button() -> Html {
    let scroll_y = use_scroll_y();

    let onclick = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_window_to_top();
    });

    if scroll_y <= SCROLL_TOP_AFTER {
        return html! {};
    }

    html! {
        <div class={classes!("fixed", "bottom-8", "right-8", "z-[90]")}>
            <Tooltip text={t::TOOLTIP} position={TooltipPosition::Top}>
                <button
                    type="button"
                    class={classes!(
                        "p-3",
                        "rounded-full",
                        "bg-gray-900/90",
                        "border",
                        "border-gray-700",
                        "text-gray-300",
                        "shadow-lg",
                        "backdrop-blur-sm",
                        "transition-all",
                        "duration-300",
                        "hover:border-blue-500",
                        "hover:text-white",
                        "hover:scale-110"
                    )}
                    onclick={onclick}
                    aria-label={t::TOOLTIP}
                >
                    <Icon name={IconName::ArrowUp} size={20} />
                </button>
            </Tooltip>
        </div>
    }
}

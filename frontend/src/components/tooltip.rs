use gloo_timers::callback::Timeout;
use web_sys::TouchEvent;
use yew::prelude::*;

/// Long-press delay before a tooltip shows on touch screens.
const TOUCH_DELAY_MS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TooltipPosition {
    Top,
    Bottom,
}

#[derive(Properties, PartialEq)]
pub struct TooltipProps {
    pub text: AttrValue,

    #[prop_or(TooltipPosition::Top)]
    pub position: TooltipPosition,

    #[prop_or_default]
    pub children: Children,
}

#[function_component(Tooltip)]
pub fn tooltip(props: &TooltipProps) -> Html {
    let TooltipProps {
        text,
        position,
        children,
    } = props;

    let visible = use_state(|| false);
    let touch_timeout = use_mut_ref(|| None::<Timeout>);

    // Desktop: show on hover
    let on_mouse_enter = {
        let visible = visible.clone();
        let touch_timeout = touch_timeout.clone();
        Callback::from(move |_: MouseEvent| {
            touch_timeout.borrow_mut().take();
            visible.set(true);
        })
    };

    let on_mouse_leave = {
        let visible = visible.clone();
        Callback::from(move |_: MouseEvent| visible.set(false))
    };

    // Touch: show on long press
    let on_touch_start = {
        let visible = visible.clone();
        let touch_timeout = touch_timeout.clone();
        Callback::from(move |_: TouchEvent| {
            let visible = visible.clone();
            let timeout = Timeout::new(TOUCH_DELAY_MS, move || visible.set(true));
            *touch_timeout.borrow_mut() = Some(timeout);
        })
    };

    let on_touch_end = {
        let visible = visible.clone();
        let touch_timeout = touch_timeout.clone();
        Callback::from(move |_: TouchEvent| {
            touch_timeout.borrow_mut().take();
            visible.set(false);
        })
    };

    let position_classes = match position {
        TooltipPosition::Top => {
            classes!("bottom-[calc(100%+8px)]", "left-1/2", "-translate-x-1/2")
        },
        TooltipPosition::Bottom => {
            classes!("top-[calc(100%+8px)]", "left-1/2", "-translate-x-1/2")
        },
    };

    let tooltip_class = classes!(
        "absolute",
        "z-[999]",
        "px-3",
        "py-1.5",
        "text-xs",
        "font-medium",
        "whitespace-nowrap",
        "bg-gray-800",
        "text-white",
        "border",
        "border-gray-700",
        "rounded-md",
        "pointer-events-none",
        "transition-opacity",
        "duration-200",
        position_classes,
        if *visible { "opacity-100" } else { "opacity-0" }
    );

    html! {
        <div
            class={classes!("relative", "inline-flex")}
            onmouseenter={on_mouse_enter}
            onmouseleave={on_mouse_leave}
            ontouchstart={on_touch_start}
            ontouchend={on_touch_end.clone()}
            ontouchcancel={on_touch_end}
        >
            { for children.iter() }
            <div class={tooltip_class} role="tooltip">
                { text.clone() }
            </div>
        </div>
    }
}

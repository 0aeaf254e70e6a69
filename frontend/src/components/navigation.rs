use portfolio_shared::{active_section, SectionId};
use yew::prelude::*;

use crate::{
    components::icons::{Icon, IconName},
    config::{HEADER_OFFSET, NAV_SCROLLED_AFTER},
    hooks::{measure_sections, scroll_to_section, use_scroll_y},
    i18n::current::navigation as t,
};

#[derive(Properties, PartialEq)]
pub struct NavigationProps {
    pub brand: AttrValue,
}

#[function_component(Navigation)]
pub fn navigation(props: &NavigationProps) -> Html {
    let mobile_menu_open = use_state(|| false);
    let scroll_y = use_scroll_y();
    let scrolled = scroll_y > NAV_SCROLLED_AFTER;
    let active = active_section(&measure_sections(scroll_y), scroll_y, HEADER_OFFSET);

    let toggle_mobile_menu = {
        let mobile_menu_open = mobile_menu_open.clone();
        Callback::from(move |_: MouseEvent| mobile_menu_open.set(!*mobile_menu_open))
    };

    let close_mobile_menu = {
        let mobile_menu_open = mobile_menu_open.clone();
        Callback::from(move |_: MouseEvent| mobile_menu_open.set(false))
    };

    // Anchor clicks scroll smoothly instead of jumping
    let go_to = {
        let mobile_menu_open = mobile_menu_open.clone();
        move |section: SectionId| {
            let mobile_menu_open = mobile_menu_open.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                mobile_menu_open.set(false);
                scroll_to_section(section);
            })
        }
    };

    let header_classes = classes!(
        "fixed",
        "top-0",
        "left-0",
        "right-0",
        "z-[130]",
        "w-full",
        "transition-all",
        "duration-300",
        if scrolled {
            "bg-black/80 backdrop-blur-md border-b border-gray-800 shadow-lg"
        } else {
            "bg-transparent border-b border-transparent"
        }
    );

    let link_classes = |section: SectionId| {
        classes!(
            "px-3",
            "py-2",
            "rounded-lg",
            "text-sm",
            "font-medium",
            "transition-colors",
            "duration-200",
            if section == active {
                "text-white bg-white/10"
            } else {
                "text-gray-400 hover:text-white"
            }
        )
    };

    let mobile_menu_classes = classes!(
        "md:hidden",
        "fixed",
        "inset-0",
        "z-[120]",
        "transition-opacity",
        "duration-300",
        if *mobile_menu_open {
            "opacity-100 pointer-events-auto"
        } else {
            "opacity-0 pointer-events-none"
        }
    );

    let mobile_panel_classes = classes!(
        "absolute",
        "inset-x-0",
        "top-0",
        "bg-gray-950/95",
        "border-b",
        "border-gray-800",
        "p-[4.5rem_1.5rem_2rem]",
        "flex",
        "flex-col",
        "gap-2",
        "backdrop-blur-md",
        "transition-all",
        "duration-300",
        if *mobile_menu_open { "translate-y-0 opacity-100" } else { "-translate-y-4 opacity-0" }
    );

    html! {
        <>
            <header class={header_classes}>
                <div class={classes!(
                    "flex", "items-center", "justify-between",
                    "h-16", "md:h-20",
                    "max-w-7xl", "mx-auto", "px-6"
                )}>
                    // Brand
                    <a
                        href={SectionId::Home.href()}
                        onclick={go_to(SectionId::Home)}
                        class={classes!("text-xl", "font-bold", "text-white", "tracking-tight")}
                    >
                        { props.brand.clone() }
                    </a>

                    // Desktop links
                    <nav class={classes!("hidden", "md:flex", "items-center", "gap-1")} aria-label={t::NAV_MAIN_ARIA}>
                        { for SectionId::NAV.iter().map(|section| html! {
                            <a
                                href={section.href()}
                                onclick={go_to(*section)}
                                class={link_classes(*section)}
                                aria-current={(*section == active).then_some("true")}
                            >
                                { section.label() }
                            </a>
                        }) }
                    </nav>

                    // Hamburger
                    <button
                        type="button"
                        class={classes!(
                            "md:hidden",
                            "p-2",
                            "rounded-lg",
                            "text-gray-300",
                            "hover:text-white",
                            "hover:bg-white/10",
                            "transition-colors"
                        )}
                        aria-label={if *mobile_menu_open { t::CLOSE_MENU_ARIA } else { t::OPEN_MENU_ARIA }}
                        aria-expanded={(*mobile_menu_open).to_string()}
                        onclick={toggle_mobile_menu}
                    >
                        <Icon name={if *mobile_menu_open { IconName::X } else { IconName::Menu }} size={24} />
                    </button>
                </div>
            </header>

            // Mobile menu overlay
            <div class={mobile_menu_classes}>
                <div
                    class={classes!("absolute", "inset-0", "bg-black/60", "backdrop-blur-sm")}
                    onclick={close_mobile_menu}
                />
                <div class={mobile_panel_classes} role="dialog" aria-modal="true">
                    <nav class={classes!("flex", "flex-col", "gap-2")} aria-label={t::MOBILE_NAV_ARIA}>
                        { for SectionId::NAV.iter().map(|section| html! {
                            <a
                                href={section.href()}
                                onclick={go_to(*section)}
                                class={classes!(
                                    "py-3",
                                    "px-4",
                                    "rounded-lg",
                                    "border",
                                    "font-medium",
                                    "transition-colors",
                                    if *section == active {
                                        "border-blue-500 text-white"
                                    } else {
                                        "border-gray-800 text-gray-300 hover:border-blue-500"
                                    }
                                )}
                            >
                                { section.label() }
                            </a>
                        }) }
                    </nav>
                </div>
            </div>
        </>
    }
}

use portfolio_shared::{LinkTarget, Profile, SectionId};
use yew::prelude::*;

use crate::{
    components::{
        icons::{Icon, IconName},
        tooltip::{Tooltip, TooltipPosition},
    },
    hooks::scroll_to_section,
    i18n::current::hero as t,
};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub profile: Profile,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let profile = &props.profile;

    let scroll_to = |section: SectionId| Callback::from(move |_: MouseEvent| scroll_to_section(section));

    let primary_button_class = classes!(
        "px-8",
        "py-4",
        "bg-white",
        "text-black",
        "font-semibold",
        "rounded-lg",
        "hover:bg-gray-200",
        "transition-all",
        "duration-300",
        "hover:scale-105",
        "shadow-lg"
    );

    let secondary_button_class = classes!(
        "px-8",
        "py-4",
        "bg-transparent",
        "border-2",
        "border-white",
        "text-white",
        "font-semibold",
        "rounded-lg",
        "hover:bg-white",
        "hover:text-black",
        "transition-all",
        "duration-300",
        "hover:scale-105"
    );

    html! {
        <section
            id={SectionId::Home.anchor()}
            class={classes!(
                "min-h-screen",
                "flex",
                "items-center",
                "justify-center",
                "bg-gradient-to-br",
                "from-black",
                "via-gray-900",
                "to-black",
                "text-white",
                "relative",
                "overflow-hidden"
            )}
        >
            <div class={classes!(
                "absolute",
                "inset-0",
                "bg-[radial-gradient(ellipse_at_center,_var(--tw-gradient-stops))]",
                "from-blue-900/20",
                "via-transparent",
                "to-transparent"
            )}></div>

            <div class={classes!("max-w-4xl", "mx-auto", "px-6", "text-center", "relative", "z-10")}>
                <div class="animate-fade-in">
                    <h1 class={classes!(
                        "text-5xl",
                        "md:text-7xl",
                        "font-bold",
                        "mb-4",
                        "bg-gradient-to-r",
                        "from-white",
                        "via-blue-100",
                        "to-white",
                        "bg-clip-text",
                        "text-transparent"
                    )}>
                        { &profile.name }
                    </h1>
                    <h2 class={classes!("text-2xl", "md:text-3xl", "text-gray-300", "mb-6", "font-light")}>
                        { &profile.headline }
                    </h2>
                    <p class={classes!("text-xl", "md:text-2xl", "text-gray-400", "mb-12", "max-w-2xl", "mx-auto")}>
                        { &profile.tagline }
                    </p>

                    <div class={classes!("flex", "flex-col", "sm:flex-row", "gap-4", "justify-center", "mb-12")}>
                        <button
                            type="button"
                            onclick={scroll_to(SectionId::Projects)}
                            class={primary_button_class}
                        >
                            { t::VIEW_PROJECTS }
                        </button>
                        <button
                            type="button"
                            onclick={scroll_to(SectionId::Contact)}
                            class={secondary_button_class}
                        >
                            { t::CONTACT_ME }
                        </button>
                    </div>

                    <div class={classes!("flex", "justify-center", "space-x-6")}>
                        { for profile.socials.iter().map(|social| {
                            let link = LinkTarget::for_href(&social.href);
                            html! {
                                <Tooltip text={social.label.clone()} position={TooltipPosition::Bottom}>
                                    <a
                                        href={social.href.clone()}
                                        target={link.target()}
                                        rel={link.rel()}
                                        class={classes!("text-gray-400", "hover:text-white", "transition-colors")}
                                        aria-label={social.label.clone()}
                                    >
                                        <Icon name={IconName::from(social.kind)} size={28} />
                                    </a>
                                </Tooltip>
                            }
                        }) }
                    </div>
                </div>
            </div>

            <button
                type="button"
                onclick={scroll_to(SectionId::Projects)}
                class={classes!(
                    "absolute",
                    "bottom-8",
                    "left-1/2",
                    "transform",
                    "-translate-x-1/2",
                    "animate-bounce",
                    "text-gray-400"
                )}
                aria-label={t::SCROLL_HINT_ARIA}
            >
                <Icon name={IconName::ArrowDown} size={32} />
            </button>
        </section>
    }
}

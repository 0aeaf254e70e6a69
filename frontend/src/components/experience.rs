use portfolio_shared::{reveal::HIDDEN_CLASS, Experience as ExperienceEntry, SectionCopy, SectionId};
use yew::prelude::*;

use crate::{
    components::{
        icons::{Icon, IconName},
        section_header::SectionHeader,
    },
    hooks::use_scroll_reveal,
};

#[derive(Properties, PartialEq)]
pub struct ExperienceProps {
    pub copy: SectionCopy,
    pub entries: Vec<ExperienceEntry>,
}

#[function_component(Experience)]
pub fn experience(props: &ExperienceProps) -> Html {
    let section_ref = use_node_ref();
    use_scroll_reveal(section_ref.clone(), ".experience-card");

    html! {
        <section
            id={SectionId::Experience.anchor()}
            class={classes!("py-20", "bg-gray-950", "text-white")}
            ref={section_ref}
        >
            <div class={classes!("max-w-7xl", "mx-auto", "px-6")}>
                <SectionHeader copy={props.copy.clone()} />

                <div class={classes!("space-y-8", "max-w-4xl", "mx-auto")}>
                    { for props.entries.iter().enumerate().map(|(index, entry)| html! {
                        <div
                            class={classes!(
                                "experience-card",
                                HIDDEN_CLASS,
                                "bg-gray-900",
                                "rounded-xl",
                                "p-8",
                                "border",
                                "border-gray-800",
                                "hover:border-blue-500",
                                "transition-all",
                                "duration-300"
                            )}
                            data-reveal-index={index.to_string()}
                        >
                            <div class={classes!("flex", "items-start", "space-x-4")}>
                                <div class={classes!("text-blue-400", "flex-shrink-0", "mt-1")}>
                                    <Icon name={IconName::from(entry.icon)} size={28} />
                                </div>
                                <div class="flex-1">
                                    <h3 class={classes!("text-2xl", "font-bold", "mb-1")}>{ &entry.title }</h3>
                                    <p class={classes!("text-blue-400", "mb-4", "font-medium")}>{ &entry.organization }</p>
                                    <ul class="space-y-3">
                                        { for entry.achievements.iter().map(|achievement| html! {
                                            <li class={classes!("flex", "items-start", "space-x-3", "text-gray-300")}>
                                                <span class={classes!("text-blue-400", "mt-1.5")}>{ "•" }</span>
                                                <span>{ achievement }</span>
                                            </li>
                                        }) }
                                    </ul>
                                </div>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

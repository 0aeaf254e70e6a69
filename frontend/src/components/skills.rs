use portfolio_shared::{reveal::HIDDEN_CLASS, SectionCopy, SectionId, SkillCategory};
use yew::prelude::*;

use crate::{
    components::{
        icons::{Icon, IconName},
        section_header::SectionHeader,
    },
    hooks::use_scroll_reveal,
};

#[derive(Properties, PartialEq)]
pub struct SkillsProps {
    pub copy: SectionCopy,
    pub categories: Vec<SkillCategory>,
}

#[function_component(Skills)]
pub fn skills(props: &SkillsProps) -> Html {
    let section_ref = use_node_ref();
    use_scroll_reveal(section_ref.clone(), ".skill-card");

    html! {
        <section
            id={SectionId::Skills.anchor()}
            class={classes!("py-20", "bg-black", "text-white")}
            ref={section_ref}
        >
            <div class={classes!("max-w-7xl", "mx-auto", "px-6")}>
                <SectionHeader copy={props.copy.clone()} />

                <div class={classes!("grid", "grid-cols-1", "md:grid-cols-3", "gap-8")}>
                    { for props.categories.iter().enumerate().map(|(index, category)| html! {
                        <div
                            class={classes!(
                                "skill-card",
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
                            <div class={classes!("text-blue-400", "mb-4")}>
                                <Icon name={IconName::from(category.icon)} size={32} />
                            </div>
                            <h3 class={classes!("text-2xl", "font-bold", "mb-6")}>{ &category.title }</h3>
                            <div class="space-y-3">
                                { for category.skills.iter().map(|skill| html! {
                                    <div class={classes!("flex", "items-center", "space-x-3", "text-gray-300")}>
                                        <div class={classes!("w-2", "h-2", "bg-blue-400", "rounded-full")}></div>
                                        <span>{ skill }</span>
                                    </div>
                                }) }
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

use portfolio_shared::{reveal::HIDDEN_CLASS, Award, SectionCopy, SectionId};
use yew::prelude::*;

use crate::{
    components::{
        icons::{Icon, IconName},
        section_header::SectionHeader,
    },
    hooks::use_scroll_reveal,
};

#[derive(Properties, PartialEq)]
pub struct AwardsProps {
    pub copy: SectionCopy,
    pub awards: Vec<Award>,
}

#[function_component(Awards)]
pub fn awards(props: &AwardsProps) -> Html {
    let section_ref = use_node_ref();
    use_scroll_reveal(section_ref.clone(), ".award-card");

    html! {
        <section
            id={SectionId::Awards.anchor()}
            class={classes!("py-20", "bg-black", "text-white")}
            ref={section_ref}
        >
            <div class={classes!("max-w-7xl", "mx-auto", "px-6")}>
                <SectionHeader copy={props.copy.clone()} />

                <div class={classes!("grid", "grid-cols-1", "md:grid-cols-2", "gap-8", "max-w-4xl", "mx-auto")}>
                    { for props.awards.iter().enumerate().map(|(index, award)| html! {
                        <div
                            class={classes!(
                                "award-card",
                                HIDDEN_CLASS,
                                "bg-gradient-to-br",
                                "from-gray-900",
                                "to-gray-800",
                                "rounded-xl",
                                "p-8",
                                "border",
                                "border-gray-700",
                                "hover:border-yellow-500",
                                "transition-all",
                                "duration-300",
                                "hover:transform",
                                "hover:scale-105"
                            )}
                            data-reveal-index={index.to_string()}
                        >
                            <div class={classes!("text-yellow-500", "mb-4")}>
                                <Icon name={IconName::from(award.icon)} size={32} />
                            </div>
                            <h3 class={classes!("text-2xl", "font-bold", "mb-2")}>{ &award.title }</h3>
                            <p class="text-gray-400">{ &award.description }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

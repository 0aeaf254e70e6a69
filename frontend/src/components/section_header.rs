use portfolio_shared::SectionCopy;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub copy: SectionCopy,
}

#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <>
            <h2 class={classes!("text-4xl", "md:text-5xl", "font-bold", "mb-4", "text-center")}>
                { &props.copy.heading }
            </h2>
            <p class={classes!("text-gray-400", "text-center", "mb-16", "max-w-2xl", "mx-auto")}>
                { &props.copy.blurb }
            </p>
        </>
    }
}

use portfolio_shared::{reveal::HIDDEN_CLASS, Project, SectionCopy, SectionId};
use yew::prelude::*;

use crate::{
    components::{
        icons::{Icon, IconName},
        section_header::SectionHeader,
    },
    hooks::use_scroll_reveal,
    i18n::{current::projects as t, fill_one},
};

#[derive(Properties, PartialEq)]
pub struct ProjectsProps {
    pub copy: SectionCopy,
    pub projects: Vec<Project>,
    /// Receives the id of the project whose card was clicked.
    pub on_open: Callback<String>,
}

#[function_component(Projects)]
pub fn projects(props: &ProjectsProps) -> Html {
    let section_ref = use_node_ref();
    use_scroll_reveal(section_ref.clone(), ".project-card");

    html! {
        <section
            id={SectionId::Projects.anchor()}
            class={classes!("py-20", "bg-gray-950", "text-white")}
            ref={section_ref}
        >
            <div class={classes!("max-w-7xl", "mx-auto", "px-6")}>
                <SectionHeader copy={props.copy.clone()} />

                <div class={classes!("grid", "grid-cols-1", "md:grid-cols-2", "lg:grid-cols-3", "gap-8")}>
                    { for props.projects.iter().enumerate().map(|(index, project)| html! {
                        <ProjectCard
                            key={project.id.clone()}
                            index={index}
                            project={project.clone()}
                            on_open={props.on_open.clone()}
                        />
                    }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    index: usize,
    project: Project,
    on_open: Callback<String>,
}

/// Enter or Space opens the details only while the card itself has focus.
fn activates_card(key: &str, from_card: bool) -> bool {
    from_card && matches!(key, "Enter" | " ")
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let project = &props.project;

    let open = {
        let on_open = props.on_open.clone();
        let id = project.id.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(id.clone()))
    };
    let open_with_keyboard = {
        let on_open = props.on_open.clone();
        let id = project.id.clone();
        Callback::from(move |e: KeyboardEvent| {
            // Keys pressed on the inner GitHub link bubble up here too
            let from_card = e.target() == e.current_target();
            if activates_card(&e.key(), from_card) {
                e.prevent_default();
                on_open.emit(id.clone());
            }
        })
    };
    // The GitHub link must not also open the modal
    let stop_bubble = Callback::from(|e: MouseEvent| e.stop_propagation());

    let card_class = classes!(
        "project-card",
        HIDDEN_CLASS,
        "cursor-pointer",
        "bg-gray-900",
        "rounded-xl",
        "overflow-hidden",
        "border",
        "border-gray-800",
        "hover:border-blue-500",
        "transition-all",
        "duration-300",
        "hover:transform",
        "hover:scale-105",
        "hover:shadow-2xl",
        "hover:shadow-blue-500/20",
        "focus-visible:outline-none",
        "focus-visible:ring-2",
        "focus-visible:ring-blue-500"
    );

    html! {
        <div
            class={card_class}
            data-reveal-index={props.index.to_string()}
            role="button"
            tabindex="0"
            aria-label={fill_one(t::OPEN_DETAILS_ARIA_TEMPLATE, &project.title)}
            onclick={open}
            onkeydown={open_with_keyboard}
        >
            <div class={classes!(
                "h-48",
                "bg-gradient-to-br",
                "from-gray-800",
                "to-gray-900",
                "flex",
                "items-center",
                "justify-center"
            )}>
                <div class={classes!("text-6xl", "opacity-20")}>{ "💻" }</div>
            </div>

            <div class="p-6">
                <div class={classes!("flex", "items-start", "justify-between", "mb-3")}>
                    <h3 class={classes!("text-xl", "font-bold")}>{ &project.title }</h3>
                    if project.has_award() {
                        <span title={project.award.clone()} aria-label={t::AWARD_ARIA}>
                            <Icon
                                name={IconName::Award}
                                size={20}
                                class={classes!("text-yellow-500", "flex-shrink-0", "ml-2")}
                            />
                        </span>
                    }
                </div>

                <div class={classes!("space-y-2", "mb-4")}>
                    { for project.highlights.iter().map(|line| html! {
                        <p class={classes!("text-gray-400", "text-sm")}>{ format!("• {line}") }</p>
                    }) }
                </div>

                <div class={classes!("flex", "flex-wrap", "gap-2", "mb-4")}>
                    { for project.technologies.iter().map(|tech| html! {
                        <span class={classes!(
                            "px-3",
                            "py-1",
                            "bg-gray-800",
                            "text-blue-400",
                            "text-xs",
                            "rounded-full",
                            "border",
                            "border-gray-700"
                        )}>
                            { tech }
                        </span>
                    }) }
                </div>

                <a
                    href={project.github.clone()}
                    target="_blank"
                    rel="noopener noreferrer"
                    onclick={stop_bubble}
                    class={classes!(
                        "inline-flex",
                        "items-center",
                        "text-blue-400",
                        "hover:text-blue-300",
                        "transition-colors",
                        "text-sm",
                        "font-medium"
                    )}
                >
                    { t::VIEW_ON_GITHUB }
                    <Icon name={IconName::ExternalLink} size={16} class={classes!("ml-2")} />
                </a>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::activates_card;

    #[test]
    fn enter_and_space_open_a_focused_card() {
        assert!(activates_card("Enter", true));
        assert!(activates_card(" ", true));
        assert!(!activates_card("Tab", true));
    }

    #[test]
    fn keys_from_the_github_link_are_left_alone() {
        assert!(!activates_card("Enter", false));
        assert!(!activates_card(" ", false));
    }
}

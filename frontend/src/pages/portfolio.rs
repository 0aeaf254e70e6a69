use std::rc::Rc;

use portfolio_shared::{Catalog, ContentError, ModalState, SectionId};
use web_sys::console;
use yew::prelude::*;

use crate::{
    components::{
        awards::Awards, contact::Contact, error_banner::ErrorBanner, experience::Experience,
        hero::Hero, navigation::Navigation, project_modal::ProjectModal, projects::Projects,
        scroll_to_top_button::ScrollToTopButton, skills::Skills,
    },
    i18n::{
        current::{error_banner as t, navigation as nav_t},
        fill_one,
    },
};

fn load_catalog() -> Result<Rc<Catalog>, AttrValue> {
    Catalog::builtin().map(Rc::new).map_err(|err| {
        console::error_1(&format!("Failed to load portfolio content: {err}").into());
        failure_message(&err)
    })
}

fn failure_message(err: &ContentError) -> AttrValue {
    fill_one(t::CONTENT_LOAD_FAILED, err).into()
}

/// Anchors kept on the page when the content is missing, so navigation
/// links still have targets.
fn skeleton_anchors() -> impl Iterator<Item = &'static str> {
    SectionId::ALL.into_iter().map(SectionId::anchor)
}

#[function_component(PortfolioPage)]
pub fn portfolio_page() -> Html {
    let catalog = use_memo((), |_| load_catalog());
    let modal = use_state(ModalState::closed);

    let open_project = {
        let modal = modal.clone();
        Callback::from(move |id: String| modal.set(ModalState::open(id)))
    };
    let close_modal = {
        let modal = modal.clone();
        Callback::from(move |_: ()| modal.set(ModalState::closed()))
    };

    let catalog = match &*catalog {
        Ok(catalog) => catalog.clone(),
        Err(message) => {
            return html! {
                <div class={classes!("min-h-screen", "bg-black", "text-white")}>
                    <Navigation brand={nav_t::FALLBACK_BRAND} />
                    { for skeleton_anchors().map(|anchor| {
                        let is_home = anchor == SectionId::Home.anchor();
                        html! {
                            <section
                                id={anchor}
                                class={classes!(
                                    "flex",
                                    "justify-center",
                                    "px-6",
                                    if is_home { "pt-28 pb-12" } else { "py-10" }
                                )}
                            >
                                if is_home {
                                    <ErrorBanner message={message.clone()} />
                                }
                            </section>
                        }
                    }) }
                </div>
            };
        },
    };

    let selected = modal
        .project_id()
        .and_then(|id| catalog.project(id))
        .cloned();

    html! {
        <div class={classes!("min-h-screen", "bg-black")}>
            <Navigation brand={catalog.profile.name.clone()} />
            <Hero profile={catalog.profile.clone()} />
            <Projects
                copy={catalog.sections.projects.clone()}
                projects={catalog.projects.clone()}
                on_open={open_project}
            />
            <Skills copy={catalog.sections.skills.clone()} categories={catalog.skills.clone()} />
            <Experience
                copy={catalog.sections.experience.clone()}
                entries={catalog.experience.clone()}
            />
            <Awards copy={catalog.sections.awards.clone()} awards={catalog.awards.clone()} />
            <Contact
                copy={catalog.sections.contact.clone()}
                contacts={catalog.contacts.clone()}
                profile={catalog.profile.clone()}
            />
            <ProjectModal
                key={modal.project_id().unwrap_or_default().to_string()}
                project={selected}
                is_open={modal.is_open()}
                on_close={close_modal}
            />
            <ScrollToTopButton />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_content_loads() {
        assert!(load_catalog().is_ok());
    }

    #[test]
    fn failure_message_names_the_cause() {
        let err = Catalog::from_json("{ \"profile\": ").expect_err("truncated document");
        let message = failure_message(&err);
        assert!(message.starts_with("Portfolio content could not be loaded: "));
        assert!(message.contains("failed to parse content"));
    }

    #[test]
    fn skeleton_keeps_every_navigation_target() {
        let anchors: Vec<_> = skeleton_anchors().collect();
        for section in SectionId::NAV {
            let href = section.href();
            let target = href.trim_start_matches('#');
            assert!(anchors.contains(&target), "missing anchor for {href}");
        }
    }
}

use portfolio_shared::{ContactEntry, LinkTarget, Profile, SectionCopy, SectionId, SocialKind};
use yew::prelude::*;

use crate::{
    components::{
        icons::{Icon, IconName},
        section_header::SectionHeader,
    },
    i18n::current::contact as t,
};

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub copy: SectionCopy,
    pub contacts: Vec<ContactEntry>,
    pub profile: Profile,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    // Call-to-action uses the first email address on file
    let email_href = props
        .contacts
        .iter()
        .find(|entry| entry.kind == SocialKind::Email)
        .map(|entry| entry.href.clone())
        .or_else(|| {
            props
                .profile
                .socials
                .iter()
                .find(|social| social.kind == SocialKind::Email)
                .map(|social| social.href.clone())
        });

    html! {
        <section id={SectionId::Contact.anchor()} class={classes!("py-20", "bg-gray-950", "text-white")}>
            <div class={classes!("max-w-7xl", "mx-auto", "px-6")}>
                <SectionHeader copy={props.copy.clone()} />

                <div class={classes!("max-w-3xl", "mx-auto")}>
                    <div class={classes!("grid", "grid-cols-1", "md:grid-cols-2", "gap-6", "mb-12")}>
                        { for props.contacts.iter().map(|entry| {
                            let link = LinkTarget::for_href(&entry.href);
                            html! {
                                <a
                                    href={entry.href.clone()}
                                    target={link.target()}
                                    rel={link.rel()}
                                    class={classes!(
                                        "bg-gray-900",
                                        "rounded-xl",
                                        "p-6",
                                        "border",
                                        "border-gray-800",
                                        "hover:border-blue-500",
                                        "transition-all",
                                        "duration-300",
                                        "hover:transform",
                                        "hover:scale-105",
                                        "flex",
                                        "items-center",
                                        "space-x-4"
                                    )}
                                >
                                    <div class="text-blue-400">
                                        <Icon name={IconName::from(entry.kind)} size={24} />
                                    </div>
                                    <div>
                                        <p class={classes!("text-gray-400", "text-sm", "mb-1")}>{ &entry.label }</p>
                                        <p class={classes!("text-white", "font-medium")}>{ &entry.value }</p>
                                    </div>
                                </a>
                            }
                        }) }
                    </div>

                    if let Some(href) = email_href {
                        <div class="text-center">
                            <a
                                href={href}
                                class={classes!(
                                    "inline-block",
                                    "px-12",
                                    "py-4",
                                    "bg-blue-600",
                                    "text-white",
                                    "font-semibold",
                                    "rounded-lg",
                                    "hover:bg-blue-500",
                                    "transition-all",
                                    "duration-300",
                                    "hover:scale-105",
                                    "shadow-lg",
                                    "shadow-blue-600/30"
                                )}
                            >
                                { t::EMAIL_ME }
                            </a>
                        </div>
                    }
                </div>
            </div>

            <footer class={classes!("mt-20", "pt-8", "border-t", "border-gray-800", "text-center", "text-gray-500")}>
                <p>{ &props.profile.copyright }</p>
            </footer>
        </section>
    }
}

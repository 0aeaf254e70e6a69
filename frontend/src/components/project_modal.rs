use portfolio_shared::{MediaCarousel, MediaItem, MediaKind, Project};
use web_sys::HtmlVideoElement;
use yew::prelude::*;

use crate::{
    components::{
        icons::{Icon, IconButton, IconName},
        image_with_loading::ImageWithLoading,
    },
    config::media_url,
    hooks::{use_body_scroll_lock, use_escape_key},
    i18n::{current::project_modal as t, fill_one},
};

#[derive(Properties, PartialEq)]
pub struct ProjectModalProps {
    pub project: Option<Project>,
    pub is_open: bool,
    pub on_close: Callback<()>,
}

/// Detail dialog for a single project with a media carousel.
///
/// Closes on the close button, on Escape and on clicks outside the dialog
/// body. Page scrolling is locked while it is open.
#[function_component(ProjectModal)]
pub fn project_modal(props: &ProjectModalProps) -> Html {
    let carousel = use_state(|| {
        props
            .project
            .as_ref()
            .map(|project| MediaCarousel::for_media(&project.detail.media))
            .unwrap_or_default()
    });
    let media_failed = use_state(|| false);
    let video_ref = use_node_ref();

    use_body_scroll_lock(props.is_open);
    use_escape_key(props.is_open, props.on_close.clone());

    let project = match (props.project.as_ref(), props.is_open) {
        (Some(project), true) => project,
        _ => return html! {},
    };

    let update_carousel = |step: fn(&mut MediaCarousel)| {
        let carousel = carousel.clone();
        let media_failed = media_failed.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            let mut next = *carousel;
            step(&mut next);
            carousel.set(next);
            media_failed.set(false);
        })
    };
    let show_prev = update_carousel(MediaCarousel::prev);
    let show_next = update_carousel(MediaCarousel::next);

    let select_media = |index: usize| {
        let carousel = carousel.clone();
        let media_failed = media_failed.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            let mut next = *carousel;
            if next.select(index) {
                carousel.set(next);
                media_failed.set(false);
            }
        })
    };

    let toggle_video = {
        let carousel = carousel.clone();
        let video_ref = video_ref.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(video) = video_ref.cast::<HtmlVideoElement>() else {
                return;
            };
            let mut next = *carousel;
            if next.toggle_video() {
                let _ = video.play();
            } else {
                let _ = video.pause();
            }
            carousel.set(next);
        })
    };

    let on_media_failed = {
        let media_failed = media_failed.clone();
        Callback::from(move |_: ()| media_failed.set(true))
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let stop_bubble = Callback::from(|e: MouseEvent| e.stop_propagation());

    let view = carousel.view(&project.detail.media, *media_failed);

    let frame = match view.item {
        Some(media) => html! {
            <div class={classes!("relative", "mx-auto", "max-w-4xl")}>
                <div class={classes!(
                    "relative",
                    "bg-gray-800",
                    "rounded-xl",
                    "overflow-hidden",
                    "shadow-2xl",
                    "shadow-black/50"
                )}>
                    <BrowserBar title={project.title.clone()} />
                    <div
                        class={classes!(
                            "relative",
                            "bg-gray-950",
                            "flex",
                            "items-center",
                            "justify-center",
                            "overflow-hidden"
                        )}
                        style="min-height: 300px; max-height: 60vh;"
                    >
                        {
                            render_media(
                                media,
                                &project.title,
                                carousel.is_video_playing(),
                                video_ref.clone(),
                                toggle_video,
                                on_media_failed,
                            )
                        }
                    </div>
                </div>
            </div>
        },
        None => html! { <NoMedia /> },
    };

    // Paging stays available while the current item shows the placeholder
    let controls = if view.controls {
        html! {
            <>
                <IconButton
                    icon={IconName::ChevronLeft}
                    size={20}
                    onclick={show_prev}
                    aria_label={t::PREV_MEDIA}
                    class={classes!(
                        "absolute", "left-2", "md:left-4", "top-1/2", "-translate-y-1/2",
                        "p-3", "bg-gray-900/80", "hover:bg-gray-800",
                        "border", "border-gray-700", "backdrop-blur-sm"
                    )}
                />
                <IconButton
                    icon={IconName::ChevronRight}
                    size={20}
                    onclick={show_next}
                    aria_label={t::NEXT_MEDIA}
                    class={classes!(
                        "absolute", "right-2", "md:right-4", "top-1/2", "-translate-y-1/2",
                        "p-3", "bg-gray-900/80", "hover:bg-gray-800",
                        "border", "border-gray-700", "backdrop-blur-sm"
                    )}
                />
                <div class={classes!(
                    "absolute",
                    "bottom-2",
                    "left-1/2",
                    "-translate-x-1/2",
                    "flex",
                    "gap-2",
                    "bg-gray-900/80",
                    "backdrop-blur-sm",
                    "px-3",
                    "py-2",
                    "rounded-full",
                    "border",
                    "border-gray-700/50"
                )}>
                    { for (0..carousel.len()).map(|index| html! {
                        <button
                            type="button"
                            onclick={select_media(index)}
                            class={classes!(
                                "h-2",
                                "rounded-full",
                                "transition-all",
                                if index == carousel.index() {
                                    "bg-blue-400 w-6"
                                } else {
                                    "bg-gray-500 hover:bg-gray-400 w-2"
                                }
                            )}
                            aria-label={fill_one(t::GOTO_MEDIA_TEMPLATE, index + 1)}
                        />
                    }) }
                </div>
            </>
        }
    } else {
        html! {}
    };

    let heading_bar = html! {
        <span class={classes!("w-1", "h-5", "bg-blue-500", "rounded-full")}></span>
    };
    let heading_class = classes!(
        "text-lg",
        "font-semibold",
        "text-white",
        "mb-3",
        "flex",
        "items-center",
        "gap-2"
    );

    html! {
        <div
            class={classes!(
                "fixed",
                "inset-0",
                "z-[150]",
                "flex",
                "items-center",
                "justify-center",
                "p-4",
                "md:p-8"
            )}
            role="dialog"
            aria-modal="true"
            aria-labelledby="project-modal-title"
            data-testid="project-modal-overlay"
            onclick={close.clone()}
        >
            // Backdrop
            <div class={classes!("absolute", "inset-0", "bg-black/80", "backdrop-blur-sm", "animate-fade-in")} />

            <div
                class={classes!(
                    "relative",
                    "w-full",
                    "max-w-5xl",
                    "max-h-[90vh]",
                    "bg-gray-900",
                    "rounded-2xl",
                    "overflow-hidden",
                    "border",
                    "border-gray-700",
                    "shadow-2xl",
                    "shadow-blue-500/10",
                    "animate-modal-in"
                )}
                data-testid="project-modal-content"
                onclick={stop_bubble}
            >
                <IconButton
                    icon={IconName::X}
                    size={24}
                    onclick={close}
                    aria_label={t::CLOSE_ARIA}
                    test_id="project-modal-close"
                    class={classes!(
                        "absolute", "top-4", "right-4", "z-10",
                        "p-2", "bg-gray-800/80", "hover:bg-gray-700"
                    )}
                />

                <div class={classes!("overflow-y-auto", "max-h-[90vh]", "custom-scrollbar")}>
                    <div class={classes!(
                        "relative",
                        "w-full",
                        "bg-gradient-to-b",
                        "from-gray-800/50",
                        "to-gray-900",
                        "p-6",
                        "md:p-8"
                    )}>
                        { frame }
                        { controls }
                    </div>

                    <div class={classes!("p-6", "md:p-8")}>
                        <div class="mb-6">
                            <div class={classes!("flex", "items-start", "justify-between", "flex-wrap", "gap-4")}>
                                <h2
                                    id="project-modal-title"
                                    class={classes!("text-2xl", "md:text-3xl", "font-bold", "text-white")}
                                    data-testid="project-modal-title"
                                >
                                    { &project.title }
                                </h2>
                                if let Some(award) = project.award.as_ref().filter(|_| project.has_award()) {
                                    <div class={classes!(
                                        "flex",
                                        "items-center",
                                        "gap-2",
                                        "px-3",
                                        "py-1.5",
                                        "bg-yellow-500/10",
                                        "border",
                                        "border-yellow-500/30",
                                        "rounded-full"
                                    )}>
                                        <Icon name={IconName::Award} size={16} class={classes!("text-yellow-500")} />
                                        <span class={classes!("text-yellow-400", "text-sm", "font-medium")}>{ award }</span>
                                    </div>
                                }
                            </div>

                            <div class={classes!("flex", "flex-wrap", "items-center", "gap-4", "mt-4", "text-sm", "text-gray-400")}>
                                <div class={classes!("flex", "items-center", "gap-2")}>
                                    <Icon name={IconName::Users} size={16} class={classes!("text-blue-400")} />
                                    <span>{ &project.detail.collaborators }</span>
                                </div>
                                if let Some(dates) = project.detail.dates.as_ref() {
                                    <div class={classes!("flex", "items-center", "gap-2")}>
                                        <Icon name={IconName::Calendar} size={16} class={classes!("text-blue-400")} />
                                        <span>{ dates }</span>
                                    </div>
                                }
                            </div>
                        </div>

                        <div class="mb-6">
                            <h3 class={heading_class.clone()}>{ heading_bar.clone() }{ t::OVERVIEW }</h3>
                            <p class={classes!("text-gray-300", "leading-relaxed")} data-testid="project-modal-overview">
                                { &project.detail.overview }
                            </p>
                        </div>

                        <div class="mb-6">
                            <h3 class={heading_class.clone()}>{ heading_bar.clone() }{ t::KEY_FEATURES }</h3>
                            <ul class="space-y-2" data-testid="project-modal-features">
                                { for project.detail.key_features.iter().map(|feature| html! {
                                    <li class={classes!("flex", "items-start", "gap-3", "text-gray-300")}>
                                        <span class={classes!("w-1.5", "h-1.5", "bg-blue-400", "rounded-full", "mt-2", "flex-shrink-0")}></span>
                                        <span>{ feature }</span>
                                    </li>
                                }) }
                            </ul>
                        </div>

                        <div class="mb-6">
                            <h3 class={heading_class}>{ heading_bar }{ t::TECHNOLOGIES }</h3>
                            <div class={classes!("flex", "flex-wrap", "gap-2")}>
                                { for project.technologies.iter().map(|tech| html! {
                                    <span class={classes!(
                                        "px-3",
                                        "py-1.5",
                                        "bg-gray-800",
                                        "text-blue-400",
                                        "text-sm",
                                        "rounded-lg",
                                        "border",
                                        "border-gray-700",
                                        "hover:border-blue-500/50",
                                        "transition-colors"
                                    )}>
                                        { tech }
                                    </span>
                                }) }
                            </div>
                        </div>

                        <div class={classes!("flex", "flex-wrap", "gap-4", "pt-4", "border-t", "border-gray-800")}>
                            <a
                                href={project.github.clone()}
                                target="_blank"
                                rel="noopener noreferrer"
                                class={classes!(
                                    "group",
                                    "inline-flex",
                                    "items-center",
                                    "gap-2",
                                    "px-5",
                                    "py-2.5",
                                    "bg-gray-800",
                                    "hover:bg-gray-700",
                                    "text-white",
                                    "rounded-lg",
                                    "transition-all",
                                    "duration-200",
                                    "hover:scale-105"
                                )}
                                data-testid="project-modal-github"
                            >
                                <Icon name={IconName::Github} size={18} class={classes!("group-hover:text-blue-400", "transition-colors")} />
                                <span>{ t::VIEW_ON_GITHUB }</span>
                                <Icon name={IconName::ExternalLink} size={14} class={classes!("opacity-50")} />
                            </a>
                            if let Some(demo) = project.detail.demo.clone() {
                                <a
                                    href={demo}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class={classes!(
                                        "inline-flex",
                                        "items-center",
                                        "gap-2",
                                        "px-5",
                                        "py-2.5",
                                        "bg-blue-600",
                                        "hover:bg-blue-500",
                                        "text-white",
                                        "rounded-lg",
                                        "transition-all",
                                        "duration-200",
                                        "hover:scale-105"
                                    )}
                                    data-testid="project-modal-demo"
                                >
                                    <span>{ t::LIVE_DEMO }</span>
                                    <Icon name={IconName::ExternalLink} size={14} />
                                </a>
                            }
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

fn render_media(
    media: &MediaItem,
    title: &str,
    playing: bool,
    video_ref: NodeRef,
    toggle_video: Callback<MouseEvent>,
    on_failed: Callback<()>,
) -> Html {
    let src = media_url(&media.url);
    match media.kind {
        MediaKind::Image => html! {
            <ImageWithLoading
                src={src}
                alt={fill_one(t::MEDIA_ALT_TEMPLATE, title)}
                class={classes!("w-full", "h-full", "object-contain")}
                container_class={classes!("w-full", "h-full")}
                onfail={on_failed}
            />
        },
        MediaKind::Video => {
            let on_error = Callback::from(move |_: Event| on_failed.emit(()));
            html! {
                <div class={classes!("relative", "w-full", "h-full", "flex", "items-center", "justify-center")}>
                    <video
                        ref={video_ref}
                        src={src}
                        class={classes!("w-full", "h-full", "object-contain")}
                        style="max-height: 60vh;"
                        loop={true}
                        muted={true}
                        playsinline={true}
                        onerror={on_error}
                    />
                    <button
                        type="button"
                        onclick={toggle_video}
                        class={classes!(
                            "absolute",
                            "inset-0",
                            "flex",
                            "items-center",
                            "justify-center",
                            "bg-black/20",
                            "hover:bg-black/30",
                            "transition-colors"
                        )}
                        aria-label={if playing { t::PAUSE_VIDEO } else { t::PLAY_VIDEO }}
                    >
                        <div class={classes!(
                            "p-4",
                            "rounded-full",
                            "bg-blue-500/90",
                            "backdrop-blur-sm",
                            "transition-transform",
                            if playing { "scale-90" } else { "scale-100 hover:scale-110" }
                        )}>
                            <Icon
                                name={if playing { IconName::Pause } else { IconName::Play }}
                                size={32}
                                class={classes!("text-white", (!playing).then_some("ml-1"))}
                            />
                        </div>
                    </button>
                </div>
            }
        },
    }
}

#[derive(Properties, PartialEq)]
struct BrowserBarProps {
    title: AttrValue,
}

/// Fake browser chrome framing the screenshot.
#[function_component(BrowserBar)]
fn browser_bar(props: &BrowserBarProps) -> Html {
    html! {
        <div class={classes!(
            "flex",
            "items-center",
            "gap-2",
            "px-4",
            "py-3",
            "bg-gray-900/80",
            "border-b",
            "border-gray-700/50"
        )}>
            <div class={classes!("flex", "gap-1.5")}>
                <span class={classes!("w-3", "h-3", "rounded-full", "bg-red-500/80")}></span>
                <span class={classes!("w-3", "h-3", "rounded-full", "bg-yellow-500/80")}></span>
                <span class={classes!("w-3", "h-3", "rounded-full", "bg-green-500/80")}></span>
            </div>
            <div class={classes!("flex-1", "mx-4")}>
                <div class={classes!(
                    "bg-gray-700/50",
                    "rounded-md",
                    "px-3",
                    "py-1",
                    "text-xs",
                    "text-gray-400",
                    "text-center",
                    "max-w-md",
                    "mx-auto",
                    "truncate"
                )}>
                    { props.title.clone() }
                </div>
            </div>
        </div>
    }
}

#[function_component(NoMedia)]
fn no_media() -> Html {
    html! {
        <div class={classes!("flex", "flex-col", "items-center", "justify-center", "py-16", "text-center")}>
            <div class={classes!(
                "w-20",
                "h-20",
                "mb-4",
                "bg-gradient-to-br",
                "from-gray-700",
                "to-gray-800",
                "rounded-2xl",
                "flex",
                "items-center",
                "justify-center",
                "border",
                "border-gray-600/30"
            )}>
                <Icon
                    name={IconName::ImagePlaceholder}
                    size={40}
                    stroke_width={1.5}
                    class={classes!("text-gray-500")}
                />
            </div>
            <p class={classes!("text-gray-400", "text-sm", "font-medium")}>{ t::NO_MEDIA }</p>
            <p class={classes!("text-gray-500", "text-xs", "mt-1")}>{ t::NO_MEDIA_HINT }</p>
        </div>
    }
}

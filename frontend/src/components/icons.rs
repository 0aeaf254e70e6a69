use portfolio_shared::{AwardIcon, ExperienceIcon, SkillIcon, SocialKind};
use yew::prelude::*;

/// Outline icon set.
/// SVG paths come from <https://lucide.dev>.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IconName {
    // Navigation
    ChevronLeft,
    ChevronRight,
    ArrowUp,
    ArrowDown,
    ExternalLink,

    // Actions
    X,
    Menu,
    Play,
    Pause,

    // Social
    Github,
    Linkedin,
    Mail,
    Phone,

    // Content
    Award,
    Trophy,
    Code,
    Wrench,
    Lightbulb,
    Briefcase,
    GraduationCap,
    Users,
    Calendar,
    ImagePlaceholder,
}

impl IconName {
    /// SVG path data for this icon.
    pub fn path(&self) -> &'static str {
        match self {
            IconName::ChevronLeft => "m15 18-6-6 6-6",
            IconName::ChevronRight => "m9 18 6-6-6-6",
            IconName::ArrowUp => "m18 15-6-6-6 6",
            IconName::ArrowDown => "M12 5v14M19 12l-7 7-7-7",
            IconName::ExternalLink => {
                "M15 3h6v6M10 14 21 3M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"
            },

            IconName::X => "M18 6 6 18M6 6l12 12",
            IconName::Menu => "M4 12h16M4 6h16M4 18h16",
            IconName::Play => "m6 3 14 9-14 9V3z",
            IconName::Pause => "M6 4h4v16H6zM14 4h4v16h-4z",

            IconName::Github => {
                "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 \
                 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 \
                 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 \
                 1.85v4M9 18c-4.51 2-5-2-7-2"
            },
            IconName::Linkedin => {
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 \
                 6-6zM2 9h4v12H2zM4 2a2 2 0 1 1 0 4 2 2 0 0 1 0-4z"
            },
            IconName::Mail => {
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2zm18 2-10 \
                 7L2 6"
            },
            IconName::Phone => {
                "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 \
                 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 \
                 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 \
                 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z"
            },

            IconName::Award => {
                "M12 2a6 6 0 1 1 0 12 6 6 0 0 1 0-12zM8.21 13.89 7 23l5-3 5 3-1.21-9.12"
            },
            IconName::Trophy => {
                "M6 9H4.5a2.5 2.5 0 0 1 0-5H6M18 9h1.5a2.5 2.5 0 0 0 0-5H18M4 22h16M10 \
                 14.66V17c0 .55-.47.98-.97 1.21C7.85 18.75 7 20.24 7 22M14 14.66V17c0 .55.47.98.97 \
                 1.21C16.15 18.75 17 20.24 17 22M18 2H6v7a6 6 0 0 0 12 0V2z"
            },
            IconName::Code => "m16 18 6-6-6-6M8 6l-6 6 6 6",
            IconName::Wrench => {
                "M14.7 6.3a1 1 0 0 0 0 1.4l1.6 1.6a1 1 0 0 0 1.4 0l3.77-3.77a6 6 0 0 1-7.94 \
                 7.94l-6.91 6.91a2.12 2.12 0 0 1-3-3l6.91-6.91a6 6 0 0 1 7.94-7.94l-3.76 3.76z"
            },
            IconName::Lightbulb => {
                "M15 14c.2-1 .7-1.7 1.5-2.5 1-.9 1.5-2.2 1.5-3.5A6 6 0 0 0 6 8c0 1 .2 2.2 1.5 \
                 3.5.7.7 1.3 1.5 1.5 2.5M9 18h6M10 22h4"
            },
            IconName::Briefcase => {
                "M4 7h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V9a2 2 0 0 1 2-2zM16 \
                 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16"
            },
            IconName::GraduationCap => "M22 10 12 5 2 10l10 5 10-5zM6 12v5c3 3 9 3 12 0v-5",
            IconName::Users => {
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2M9 3a4 4 0 1 1 0 8 4 4 0 0 1 0-8zM22 \
                 21v-2a4 4 0 0 0-3-3.87M16 3.13a4 4 0 0 1 0 7.75"
            },
            IconName::Calendar => {
                "M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2zM16 \
                 2v4M8 2v4M3 10h18"
            },
            IconName::ImagePlaceholder => {
                "M4 16l4.586-4.586a2 2 0 012.828 0L16 16m-2-2l1.586-1.586a2 2 0 012.828 0L20 \
                 14m-6-6h.01M6 20h12a2 2 0 002-2V6a2 2 0 00-2-2H6a2 2 0 00-2 2v12a2 2 0 002 2z"
            },
        }
    }

    /// Filled icons (playback controls).
    pub fn needs_fill(&self) -> bool {
        matches!(self, IconName::Play | IconName::Pause)
    }
}

impl From<SocialKind> for IconName {
    fn from(kind: SocialKind) -> Self {
        match kind {
            SocialKind::GitHub => IconName::Github,
            SocialKind::LinkedIn => IconName::Linkedin,
            SocialKind::Email => IconName::Mail,
            SocialKind::Phone => IconName::Phone,
        }
    }
}

impl From<SkillIcon> for IconName {
    fn from(icon: SkillIcon) -> Self {
        match icon {
            SkillIcon::Code => IconName::Code,
            SkillIcon::Wrench => IconName::Wrench,
            SkillIcon::Lightbulb => IconName::Lightbulb,
        }
    }
}

impl From<ExperienceIcon> for IconName {
    fn from(icon: ExperienceIcon) -> Self {
        match icon {
            ExperienceIcon::Users => IconName::Users,
            ExperienceIcon::GraduationCap => IconName::GraduationCap,
            ExperienceIcon::Briefcase => IconName::Briefcase,
        }
    }
}

impl From<AwardIcon> for IconName {
    fn from(icon: AwardIcon) -> Self {
        match icon {
            AwardIcon::Trophy => IconName::Trophy,
            AwardIcon::Award => IconName::Award,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub name: IconName,

    #[prop_or(24)]
    pub size: u32,

    #[prop_or_else(|| "currentColor".to_string())]
    pub color: String,

    #[prop_or_default]
    pub stroke_width: Option<f64>,

    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let IconProps {
        name,
        size,
        color,
        stroke_width,
        class,
    } = props;

    let stroke_width = stroke_width.unwrap_or(if *size <= 16 { 2.5 } else { 2.0 });
    let fill = if name.needs_fill() { color.as_str() } else { "none" };

    html! {
        <svg
            class={classes!(
                "inline-flex",
                "items-center",
                "justify-center",
                "shrink-0",
                class.clone()
            )}
            width={size.to_string()}
            height={size.to_string()}
            viewBox="0 0 24 24"
            fill={fill.to_string()}
            stroke={color.clone()}
            stroke-width={stroke_width.to_string()}
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            xmlns="http://www.w3.org/2000/svg"
        >
            <path d={name.path()} />
        </svg>
    }
}

/// Round icon button, used for the modal's close and paging controls.
#[derive(Properties, PartialEq)]
pub struct IconButtonProps {
    pub icon: IconName,

    #[prop_or(24)]
    pub size: u32,

    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,

    #[prop_or_default]
    pub class: Classes,

    #[prop_or_default]
    pub aria_label: Option<AttrValue>,

    #[prop_or_default]
    pub test_id: Option<AttrValue>,
}

#[function_component(IconButton)]
pub fn icon_button(props: &IconButtonProps) -> Html {
    let IconButtonProps {
        icon,
        size,
        onclick,
        class,
        aria_label,
        test_id,
    } = props;

    let button_class = classes!(
        "group",
        "inline-flex",
        "items-center",
        "justify-center",
        "rounded-full",
        "transition-all",
        "duration-200",
        "hover:scale-110",
        class.clone()
    );

    html! {
        <button
            class={button_class}
            onclick={onclick}
            type="button"
            aria-label={aria_label.clone()}
            data-testid={test_id.clone()}
        >
            <Icon
                name={*icon}
                size={*size}
                class={classes!("text-gray-400", "group-hover:text-white", "transition-colors")}
            />
        </button>
    }
}

pub mod navigation {
    pub const NAV_MAIN_ARIA: &str = "Main navigation";
    pub const MOBILE_NAV_ARIA: &str = "Mobile navigation";
    pub const OPEN_MENU_ARIA: &str = "Open menu";
    pub const CLOSE_MENU_ARIA: &str = "Close menu";
    /// Brand shown when the profile could not be loaded.
    pub const FALLBACK_BRAND: &str = "Portfolio";
}

pub mod hero {
    pub const VIEW_PROJECTS: &str = "View Projects";
    pub const CONTACT_ME: &str = "Contact Me";
    pub const SCROLL_HINT_ARIA: &str = "Scroll to projects";
}

pub mod projects {
    pub const VIEW_ON_GITHUB: &str = "View on GitHub";
    pub const OPEN_DETAILS_ARIA_TEMPLATE: &str = "Show details for {}";
    pub const AWARD_ARIA: &str = "Award-winning project";
}

pub mod project_modal {
    pub const CLOSE_ARIA: &str = "Close modal";
    pub const PREV_MEDIA: &str = "Previous media";
    pub const NEXT_MEDIA: &str = "Next media";
    pub const GOTO_MEDIA_TEMPLATE: &str = "Go to media {}";
    pub const PLAY_VIDEO: &str = "Play video";
    pub const PAUSE_VIDEO: &str = "Pause video";
    pub const NO_MEDIA: &str = "No media available";
    pub const NO_MEDIA_HINT: &str = "Screenshots coming soon";
    pub const OVERVIEW: &str = "Overview";
    pub const KEY_FEATURES: &str = "Key Features & Achievements";
    pub const TECHNOLOGIES: &str = "Technologies Used";
    pub const VIEW_ON_GITHUB: &str = "View on GitHub";
    pub const LIVE_DEMO: &str = "Live Demo";
    pub const MEDIA_ALT_TEMPLATE: &str = "{} screenshot";
}

pub mod contact {
    pub const EMAIL_ME: &str = "Email Me";
}

pub mod scroll_to_top {
    pub const TOOLTIP: &str = "Back to top";
}

pub mod error_banner {
    pub const TITLE: &str = "Something went wrong";
    pub const CONTENT_LOAD_FAILED: &str = "Portfolio content could not be loaded: {}";
}

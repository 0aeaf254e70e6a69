//! Content model and UI state shared by the portfolio frontend and the
//! content CLI.
//!
//! Everything here is free of DOM access so it builds for both `wasm32` and
//! native targets and can be unit tested without a browser.

pub mod catalog;
pub mod content;
pub mod links;
pub mod modal;
pub mod reveal;
pub mod sections;

pub use catalog::{Catalog, ContentError, ContentProblem};
pub use content::{
    Award, AwardIcon, ContactEntry, Experience, ExperienceIcon, MediaItem, MediaKind, Profile,
    Project, ProjectDetail, SectionCopies, SectionCopy, SkillCategory, SkillIcon, SocialKind,
    SocialLink,
};
pub use links::LinkTarget;
pub use modal::{MediaCarousel, MediaView, ModalState};
pub use reveal::{RevealTracker, REVEAL_THRESHOLD};
pub use sections::{active_section, SectionId};

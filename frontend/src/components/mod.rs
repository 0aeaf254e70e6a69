// Reusable components live here.

pub mod awards;
pub mod contact;
pub mod error_banner;
pub mod experience;
pub mod hero;
pub mod icons;
pub mod image_with_loading;
pub mod navigation;
pub mod project_modal;
pub mod projects;
pub mod scroll_to_top_button;
pub mod section_header;
pub mod skills;
pub mod tooltip;

use serde::{Deserialize, Serialize};

/// Owner of the portfolio: hero text, social links and footer line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub tagline: String,
    pub socials: Vec<SocialLink>,
    pub copyright: String,
}

/// Which icon and link scheme a social/contact entry uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    GitHub,
    LinkedIn,
    Email,
    Phone,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub label: String,
    pub href: String,
}

/// Heading and one-line blurb rendered above each section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionCopy {
    pub heading: String,
    pub blurb: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionCopies {
    pub projects: SectionCopy,
    pub skills: SectionCopy,
    pub experience: SectionCopy,
    pub awards: SectionCopy,
    pub contact: SectionCopy,
}

// Card and detail modal data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Stable key used to open the detail modal.
    pub id: String,
    pub title: String,
    /// Short bullet points shown on the card.
    pub highlights: Vec<String>,
    pub technologies: Vec<String>,
    pub github: String,
    #[serde(default)]
    pub award: Option<String>,
    pub detail: ProjectDetail,
}

impl Project {
    pub fn has_award(&self) -> bool {
        self.award.as_deref().is_some_and(|award| !award.trim().is_empty())
    }
}

/// Extended information only shown inside the project modal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDetail {
    pub collaborators: String,
    #[serde(default)]
    pub dates: Option<String>,
    pub overview: String,
    pub key_features: Vec<String>,
    #[serde(default)]
    pub demo: Option<String>,
    #[serde(default)]
    pub media: Vec<MediaItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    pub kind: MediaKind,
    pub url: String,
}

impl MediaItem {
    /// Media with a blank URL renders the placeholder instead.
    pub fn is_playable(&self) -> bool {
        !self.url.trim().is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkillIcon {
    Code,
    Wrench,
    Lightbulb,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub icon: SkillIcon,
    pub title: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExperienceIcon {
    Users,
    GraduationCap,
    Briefcase,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub icon: ExperienceIcon,
    pub title: String,
    pub organization: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AwardIcon {
    Trophy,
    Award,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Award {
    pub icon: AwardIcon,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactEntry {
    pub kind: SocialKind,
    pub label: String,
    pub value: String,
    pub href: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_kind_uses_lowercase_tags() {
        let item: MediaItem =
            serde_json::from_str(r#"{"kind":"video","url":"demo.mp4"}"#).expect("parse media");
        assert_eq!(item.kind, MediaKind::Video);
        assert!(item.is_playable());
    }

    #[test]
    fn blank_media_url_is_not_playable() {
        let item = MediaItem {
            kind: MediaKind::Image,
            url: "   ".to_string(),
        };
        assert!(!item.is_playable());
    }

    #[test]
    fn optional_project_fields_default_to_none() {
        let raw = r#"{
            "collaborators": "Solo project",
            "overview": "Overview",
            "key_features": ["One"]
        }"#;
        let detail: ProjectDetail = serde_json::from_str(raw).expect("parse detail");
        assert!(detail.dates.is_none());
        assert!(detail.demo.is_none());
        assert!(detail.media.is_empty());
    }
}

use std::{collections::HashSet, fmt};

use serde::{Deserialize, Serialize};

use crate::content::{
    Award, ContactEntry, Experience, Profile, Project, SectionCopies, SkillCategory,
};

/// Content document compiled into the site.
pub const BUILTIN_CONTENT: &str = include_str!("../content/portfolio.json");

const ALLOWED_SCHEMES: [&str; 4] = ["https://", "http://", "mailto:", "tel:"];

/// Everything the page renders, in page order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub profile: Profile,
    pub sections: SectionCopies,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillCategory>,
    pub experience: Vec<Experience>,
    pub awards: Vec<Award>,
    pub contacts: Vec<ContactEntry>,
}

/// A single rule violation found while validating a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentProblem {
    EmptyField { location: String },
    EmptyList { location: String },
    DuplicateProjectId { id: String },
    UnsupportedLink { location: String, href: String },
    EmptyMediaUrl { project: String, index: usize },
}

impl fmt::Display for ContentProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentProblem::EmptyField {
                location,
            } => write!(f, "{location}: must not be empty"),
            ContentProblem::EmptyList {
                location,
            } => write!(f, "{location}: needs at least one entry"),
            ContentProblem::DuplicateProjectId {
                id,
            } => write!(f, "project id `{id}` is used more than once"),
            ContentProblem::UnsupportedLink {
                location,
                href,
            } => write!(f, "{location}: unsupported link `{href}`"),
            ContentProblem::EmptyMediaUrl {
                project,
                index,
            } => write!(f, "projects[{project}].media[{index}]: url is empty"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to parse content: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("content has {} problem(s): {}", .problems.len(), join_problems(.problems))]
    Invalid { problems: Vec<ContentProblem> },
}

fn join_problems(problems: &[ContentProblem]) -> String {
    problems
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl Catalog {
    /// Parse and validate a JSON content document.
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let catalog: Catalog = serde_json::from_str(raw)?;
        tracing::debug!(
            projects = catalog.projects.len(),
            skills = catalog.skills.len(),
            experience = catalog.experience.len(),
            awards = catalog.awards.len(),
            "parsed portfolio content"
        );
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn builtin() -> Result<Self, ContentError> {
        Self::from_json(BUILTIN_CONTENT)
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    /// Check every rule and report all violations at once.
    pub fn validate(&self) -> Result<(), ContentError> {
        let problems = self.problems();
        if problems.is_empty() {
            return Ok(());
        }
        for problem in &problems {
            tracing::warn!(%problem, "invalid portfolio content");
        }
        Err(ContentError::Invalid {
            problems,
        })
    }

    fn problems(&self) -> Vec<ContentProblem> {
        let mut out = Vec::new();

        require_text(&mut out, "profile.name", &self.profile.name);
        require_text(&mut out, "profile.headline", &self.profile.headline);
        for (i, social) in self.profile.socials.iter().enumerate() {
            require_link(&mut out, &format!("profile.socials[{i}]"), &social.href);
        }

        require_list(&mut out, "projects", self.projects.len());
        let mut seen = HashSet::new();
        for project in &self.projects {
            let at = format!("projects[{}]", project.id);
            require_text(&mut out, &format!("{at}.id"), &project.id);
            require_text(&mut out, &format!("{at}.title"), &project.title);
            require_list(&mut out, &format!("{at}.technologies"), project.technologies.len());
            require_link(&mut out, &format!("{at}.github"), &project.github);
            if let Some(demo) = project.detail.demo.as_deref() {
                require_link(&mut out, &format!("{at}.demo"), demo);
            }
            require_text(&mut out, &format!("{at}.overview"), &project.detail.overview);
            for (index, media) in project.detail.media.iter().enumerate() {
                if !media.is_playable() {
                    out.push(ContentProblem::EmptyMediaUrl {
                        project: project.id.clone(),
                        index,
                    });
                }
            }
            if !project.id.is_empty() && !seen.insert(project.id.as_str()) {
                out.push(ContentProblem::DuplicateProjectId {
                    id: project.id.clone(),
                });
            }
        }

        for (i, category) in self.skills.iter().enumerate() {
            require_text(&mut out, &format!("skills[{i}].title"), &category.title);
            require_list(&mut out, &format!("skills[{i}].skills"), category.skills.len());
        }
        for (i, exp) in self.experience.iter().enumerate() {
            require_text(&mut out, &format!("experience[{i}].title"), &exp.title);
            require_text(&mut out, &format!("experience[{i}].organization"), &exp.organization);
        }
        for (i, award) in self.awards.iter().enumerate() {
            require_text(&mut out, &format!("awards[{i}].title"), &award.title);
        }
        for (i, contact) in self.contacts.iter().enumerate() {
            require_link(&mut out, &format!("contacts[{i}]"), &contact.href);
        }

        out
    }
}

fn require_text(out: &mut Vec<ContentProblem>, location: &str, value: &str) {
    if value.trim().is_empty() {
        out.push(ContentProblem::EmptyField {
            location: location.to_string(),
        });
    }
}

fn require_list(out: &mut Vec<ContentProblem>, location: &str, len: usize) {
    if len == 0 {
        out.push(ContentProblem::EmptyList {
            location: location.to_string(),
        });
    }
}

fn require_link(out: &mut Vec<ContentProblem>, location: &str, href: &str) {
    if !ALLOWED_SCHEMES.iter().any(|scheme| href.starts_with(scheme)) {
        out.push(ContentProblem::UnsupportedLink {
            location: location.to_string(),
            href: href.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin() -> Catalog {
        Catalog::builtin().expect("embedded content must be valid")
    }

    #[test]
    fn builtin_content_is_valid() {
        let catalog = builtin();
        assert_eq!(catalog.projects.len(), 6);
        assert_eq!(catalog.skills.len(), 3);
        assert_eq!(catalog.experience.len(), 3);
        assert_eq!(catalog.awards.len(), 2);
        assert_eq!(catalog.contacts.len(), 4);
    }

    #[test]
    fn looks_up_projects_by_id() {
        let catalog = builtin();
        let first_id = catalog.projects[0].id.clone();
        assert_eq!(catalog.project(&first_id).map(|p| p.id.as_str()), Some(first_id.as_str()));
        assert!(catalog.project("does-not-exist").is_none());
    }

    #[test]
    fn only_the_hackathon_project_carries_an_award() {
        let catalog = builtin();
        let awarded: Vec<_> = catalog.projects.iter().filter(|p| p.has_award()).collect();
        assert_eq!(awarded.len(), 1);
        assert_eq!(awarded[0].award.as_deref(), Some("Hackathon Winner"));
    }

    #[test]
    fn reports_every_problem_instead_of_the_first() {
        let mut catalog = builtin();
        catalog.profile.name = " ".to_string();
        let duplicate = catalog.projects[0].clone();
        catalog.projects.push(duplicate);
        catalog.contacts[0].href = "javascript:alert(1)".to_string();

        let err = catalog.validate().expect_err("catalog should be rejected");
        let problems = match err {
            ContentError::Invalid {
                problems,
            } => problems,
            other => panic!("expected validation error, got {other:?}"),
        };
        assert_eq!(problems.len(), 3);
        assert!(problems.contains(&ContentProblem::EmptyField {
            location: "profile.name".to_string()
        }));
        assert!(problems
            .iter()
            .any(|p| matches!(p, ContentProblem::DuplicateProjectId { .. })));
        assert!(problems
            .iter()
            .any(|p| matches!(p, ContentProblem::UnsupportedLink { href, .. } if href.starts_with("javascript"))));
    }

    fn problems_of(catalog: &Catalog) -> Vec<ContentProblem> {
        match catalog.validate() {
            Err(ContentError::Invalid {
                problems,
            }) => problems,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn empty_project_list_is_reported() {
        let mut catalog = builtin();
        catalog.projects.clear();
        assert_eq!(problems_of(&catalog), vec![ContentProblem::EmptyList {
            location: "projects".to_string()
        }]);
    }

    #[test]
    fn reports_empty_lists_and_bad_demo_links() {
        let mut catalog = builtin();
        let id = catalog.projects[0].id.clone();
        catalog.projects[0].technologies.clear();
        catalog.projects[0].detail.demo = Some("ftp://example.com/demo".to_string());
        catalog.skills[0].skills.clear();

        let problems = problems_of(&catalog);
        assert_eq!(problems.len(), 3, "problems: {problems:?}");
        assert!(problems.contains(&ContentProblem::EmptyList {
            location: format!("projects[{id}].technologies")
        }));
        assert!(problems.contains(&ContentProblem::EmptyList {
            location: "skills[0].skills".to_string()
        }));
        assert!(problems.contains(&ContentProblem::UnsupportedLink {
            location: format!("projects[{id}].demo"),
            href: "ftp://example.com/demo".to_string(),
        }));
    }

    #[test]
    fn rejects_media_with_blank_url() {
        let mut catalog = builtin();
        catalog.projects[1].detail.media.push(crate::MediaItem {
            kind: crate::MediaKind::Image,
            url: String::new(),
        });
        let id = catalog.projects[1].id.clone();

        let err = catalog.validate().expect_err("blank media url");
        assert!(err.to_string().contains(&format!("projects[{id}].media[0]")));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = Catalog::from_json("{ not json").expect_err("should fail");
        assert!(matches!(err, ContentError::Parse(_)));
    }
}

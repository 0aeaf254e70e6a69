/// Top-level sections of the page, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    Projects,
    Skills,
    Experience,
    Awards,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Experience,
        SectionId::Awards,
        SectionId::Contact,
    ];

    /// Entries rendered in the navigation bar.
    pub const NAV: [SectionId; 6] = Self::ALL;

    /// DOM id of the `<section>` element.
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Projects => "projects",
            SectionId::Skills => "skills",
            SectionId::Experience => "experience",
            SectionId::Awards => "awards",
            SectionId::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::Projects => "Projects",
            SectionId::Skills => "Skills",
            SectionId::Experience => "Experience",
            SectionId::Awards => "Awards",
            SectionId::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }
}

/// Section the reader is currently looking at.
///
/// `offsets` holds the document-relative top of each rendered section. The
/// last section whose top has scrolled past `scroll_y + header_offset` wins,
/// so a section becomes active as soon as it slides under the fixed header.
pub fn active_section(offsets: &[(SectionId, f64)], scroll_y: f64, header_offset: f64) -> SectionId {
    let line = scroll_y + header_offset;
    offsets
        .iter()
        .filter(|(_, top)| *top <= line)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(id, _)| *id)
        .unwrap_or(SectionId::Home)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Vec<(SectionId, f64)> {
        vec![
            (SectionId::Home, 0.0),
            (SectionId::Projects, 900.0),
            (SectionId::Skills, 1800.0),
            (SectionId::Experience, 2500.0),
            (SectionId::Awards, 3600.0),
            (SectionId::Contact, 4200.0),
        ]
    }

    #[test]
    fn top_of_page_is_home() {
        assert_eq!(active_section(&layout(), 0.0, 80.0), SectionId::Home);
    }

    #[test]
    fn section_activates_once_under_header() {
        assert_eq!(active_section(&layout(), 819.0, 80.0), SectionId::Home);
        assert_eq!(active_section(&layout(), 820.0, 80.0), SectionId::Projects);
        assert_eq!(active_section(&layout(), 2600.0, 80.0), SectionId::Experience);
    }

    #[test]
    fn past_the_end_stays_on_contact() {
        assert_eq!(active_section(&layout(), 10_000.0, 80.0), SectionId::Contact);
    }

    #[test]
    fn no_measurements_defaults_to_home() {
        assert_eq!(active_section(&[], 500.0, 80.0), SectionId::Home);
    }

    #[test]
    fn anchors_match_section_ids() {
        let anchors: Vec<_> = SectionId::ALL.iter().map(|s| s.anchor()).collect();
        assert_eq!(anchors, ["home", "projects", "skills", "experience", "awards", "contact"]);
        assert_eq!(SectionId::Awards.href(), "#awards");
    }
}

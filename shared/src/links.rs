/// How an anchor should open, derived from its href.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    /// Web links open in a new tab without an opener reference.
    External,
    /// `mailto:`, `tel:` and in-page anchors stay in the current window.
    SameWindow,
}

impl LinkTarget {
    pub fn for_href(href: &str) -> Self {
        if href.starts_with("http") {
            LinkTarget::External
        } else {
            LinkTarget::SameWindow
        }
    }

    pub fn target(self) -> Option<&'static str> {
        match self {
            LinkTarget::External => Some("_blank"),
            LinkTarget::SameWindow => None,
        }
    }

    pub fn rel(self) -> Option<&'static str> {
        match self {
            LinkTarget::External => Some("noopener noreferrer"),
            LinkTarget::SameWindow => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LinkTarget;

    #[test]
    fn web_links_open_in_new_tab() {
        let target = LinkTarget::for_href("https://github.com/YakshB07");
        assert_eq!(target, LinkTarget::External);
        assert_eq!(target.target(), Some("_blank"));
        assert_eq!(target.rel(), Some("noopener noreferrer"));
    }

    #[test]
    fn mail_and_phone_links_stay_in_window() {
        for href in ["mailto:someone@example.com", "tel:+15555550100", "#contact"] {
            let target = LinkTarget::for_href(href);
            assert_eq!(target, LinkTarget::SameWindow, "{href}");
            assert_eq!(target.target(), None);
            assert_eq!(target.rel(), None);
        }
    }
}

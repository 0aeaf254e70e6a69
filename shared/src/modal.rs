//! State behind the project-detail modal and its media carousel.

use crate::content::MediaItem;

/// Which project, if any, the detail modal is showing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    project_id: Option<String>,
}

impl ModalState {
    pub fn closed() -> Self {
        Self::default()
    }

    pub fn open(project_id: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
        }
    }

    pub fn close(&mut self) {
        self.project_id = None;
    }

    pub fn is_open(&self) -> bool {
        self.project_id.is_some()
    }

    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }
}

/// Position in a project's media list plus the video play flag.
///
/// Any navigation stops playback, mirroring how the `<video>` element is
/// swapped out underneath the controls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MediaCarousel {
    len: usize,
    index: usize,
    video_playing: bool,
}

impl MediaCarousel {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            video_playing: false,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_video_playing(&self) -> bool {
        self.video_playing
    }

    /// Arrows and indicator dots only make sense with two or more items.
    pub fn has_navigation(&self) -> bool {
        self.len > 1
    }

    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + 1) % self.len;
        self.video_playing = false;
    }

    pub fn prev(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + self.len - 1) % self.len;
        self.video_playing = false;
    }

    /// Jump to `index`. Out-of-range requests are ignored and return `false`.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len {
            tracing::debug!(index, len = self.len, "ignoring out-of-range media selection");
            return false;
        }
        self.index = index;
        self.video_playing = false;
        true
    }

    /// Flip between playing and paused, returning the new state.
    pub fn toggle_video(&mut self) -> bool {
        self.video_playing = !self.video_playing;
        self.video_playing
    }

    pub fn reset(&mut self) {
        self.index = 0;
        self.video_playing = false;
    }

    /// Item to render, or `None` when the placeholder should be shown.
    pub fn current<'a>(&self, media: &'a [MediaItem]) -> Option<&'a MediaItem> {
        media.get(self.index).filter(|item| item.is_playable())
    }

    /// Fresh carousel positioned on the first of `media`.
    pub fn for_media(media: &[MediaItem]) -> Self {
        Self::new(media.len())
    }

    /// What the media frame shows. A failed item falls back to the
    /// placeholder while paging controls stay available.
    pub fn view<'a>(&self, media: &'a [MediaItem], failed: bool) -> MediaView<'a> {
        MediaView {
            item: self.current(media).filter(|_| !failed),
            controls: self.has_navigation(),
        }
    }
}

/// Render plan for the modal's media area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MediaView<'a> {
    /// `None` renders the "no media" placeholder.
    pub item: Option<&'a MediaItem>,
    /// Arrows and indicator dots.
    pub controls: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::MediaKind;

    fn media(urls: &[&str]) -> Vec<MediaItem> {
        urls.iter()
            .map(|url| MediaItem {
                kind: if url.ends_with(".mp4") { MediaKind::Video } else { MediaKind::Image },
                url: url.to_string(),
            })
            .collect()
    }

    #[test]
    fn modal_open_and_close() {
        let mut modal = ModalState::closed();
        assert!(!modal.is_open());

        modal = ModalState::open("apple-clone");
        assert!(modal.is_open());
        assert_eq!(modal.project_id(), Some("apple-clone"));

        modal.close();
        assert!(!modal.is_open());
        assert_eq!(modal.project_id(), None);
    }

    #[test]
    fn next_and_prev_wrap_around() {
        let mut carousel = MediaCarousel::new(3);
        carousel.prev();
        assert_eq!(carousel.index(), 2);
        carousel.next();
        assert_eq!(carousel.index(), 0);
        carousel.next();
        carousel.next();
        carousel.next();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn navigation_stops_video() {
        let mut carousel = MediaCarousel::new(2);
        assert!(carousel.toggle_video());
        carousel.next();
        assert!(!carousel.is_video_playing());

        carousel.toggle_video();
        carousel.prev();
        assert!(!carousel.is_video_playing());

        carousel.toggle_video();
        assert!(carousel.select(1));
        assert!(!carousel.is_video_playing());
    }

    #[test]
    fn select_rejects_out_of_range() {
        let mut carousel = MediaCarousel::new(2);
        carousel.toggle_video();
        assert!(!carousel.select(5));
        assert_eq!(carousel.index(), 0);
        assert!(carousel.is_video_playing());
    }

    #[test]
    fn empty_carousel_ignores_navigation() {
        let mut carousel = MediaCarousel::new(0);
        carousel.next();
        carousel.prev();
        assert_eq!(carousel.index(), 0);
        assert!(!carousel.has_navigation());
        assert!(carousel.current(&[]).is_none());
    }

    #[test]
    fn reset_returns_to_first_item() {
        let mut carousel = MediaCarousel::new(4);
        carousel.select(3);
        carousel.toggle_video();
        carousel.reset();
        assert_eq!(carousel, MediaCarousel::new(4));
    }

    #[test]
    fn current_skips_blank_urls() {
        let items = media(&["shot.png", ""]);
        let mut carousel = MediaCarousel::new(items.len());
        assert_eq!(carousel.current(&items).map(|m| m.url.as_str()), Some("shot.png"));
        carousel.next();
        assert!(carousel.current(&items).is_none());
    }

    #[test]
    fn single_item_has_no_navigation() {
        let carousel = MediaCarousel::new(1);
        assert!(!carousel.has_navigation());
        assert!(MediaCarousel::new(2).has_navigation());
    }

    #[test]
    fn failed_item_keeps_paging_controls() {
        let items = media(&["broken.png", "ok.png", "clip.mp4"]);
        let mut carousel = MediaCarousel::for_media(&items);

        let view = carousel.view(&items, true);
        assert!(view.item.is_none());
        assert!(view.controls);

        carousel.next();
        let view = carousel.view(&items, false);
        assert_eq!(view.item.map(|m| m.url.as_str()), Some("ok.png"));
        assert!(view.controls);
    }

    #[test]
    fn carousel_built_for_a_project_starts_on_its_first_item() {
        let items = media(&["a.png", "b.png"]);
        let carousel = MediaCarousel::for_media(&items);
        let view = carousel.view(&items, false);
        assert_eq!(view.item.map(|m| m.url.as_str()), Some("a.png"));
        assert!(view.controls);

        let view = MediaCarousel::for_media(&[]).view(&[], false);
        assert_eq!(view, MediaView { item: None, controls: false });
    }
}

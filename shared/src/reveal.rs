use std::collections::BTreeSet;

/// Minimum intersection ratio before a card fades in.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Class every revealable card starts with.
pub const HIDDEN_CLASS: &str = "opacity-0";

/// Class added on the first intersection and kept afterwards.
pub const REVEALED_CLASS: &str = "animate-fade-in-up";

/// Remembers which cards of a section have already faded in.
///
/// Reveals are one-way: scrolling a card back out of view does not hide it
/// again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealTracker {
    revealed: BTreeSet<usize>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an observer notification for the card at `index`.
    ///
    /// Returns `true` only for the notification that reveals the card.
    pub fn observe(&mut self, index: usize, is_intersecting: bool) -> bool {
        is_intersecting && self.revealed.insert(index)
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::RevealTracker;

    #[test]
    fn reveals_once_on_first_intersection() {
        let mut tracker = RevealTracker::new();
        assert!(!tracker.observe(2, false));
        assert!(!tracker.is_revealed(2));

        assert!(tracker.observe(2, true));
        assert!(!tracker.observe(2, true));
        assert!(tracker.is_revealed(2));
    }

    #[test]
    fn leaving_the_viewport_keeps_card_visible() {
        let mut tracker = RevealTracker::new();
        tracker.observe(0, true);
        tracker.observe(0, false);
        assert!(tracker.is_revealed(0));
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn cards_are_tracked_independently() {
        let mut tracker = RevealTracker::new();
        tracker.observe(0, true);
        tracker.observe(3, true);
        assert!(tracker.is_revealed(0));
        assert!(!tracker.is_revealed(1));
        assert!(tracker.is_revealed(3));
        assert_eq!(tracker.len(), 2);
    }
}

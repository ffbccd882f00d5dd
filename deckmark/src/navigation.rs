//! Navigation controller
//!
//! Tracks the selected slide of a deck and the direction of the last move.
//! All operations are saturating: requests past either end, or outside the
//! deck, leave the state unchanged instead of failing.

use std::fmt;

/// Direction of the most recent navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Towards later slides
    #[default]
    Forward,
    /// Towards earlier slides
    Backward,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => f.write_str("forward"),
            Direction::Backward => f.write_str("backward"),
        }
    }
}

/// Current-slide state of a presentation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Navigator {
    current_index: usize,
    slide_count: usize,
    direction: Direction,
}

impl Navigator {
    /// Create a navigator positioned on the first slide
    pub fn new(slide_count: usize) -> Self {
        Self {
            current_index: 0,
            slide_count,
            direction: Direction::Forward,
        }
    }

    /// Index of the selected slide (0 when the deck is empty)
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Number of slides in the latest parse
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Direction of the last successful move
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether there is nothing to show
    pub fn is_empty(&self) -> bool {
        self.slide_count == 0
    }

    /// Whether the first slide is selected
    pub fn is_first(&self) -> bool {
        self.current_index == 0
    }

    /// Whether the last slide is selected (also true for an empty deck)
    pub fn is_last(&self) -> bool {
        self.current_index + 1 >= self.slide_count
    }

    /// Move to the next slide
    ///
    /// # Returns
    /// * `bool` - True if the index changed; false on the last slide
    pub fn advance(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.current_index += 1;
        self.direction = Direction::Forward;
        true
    }

    /// Move to the previous slide
    ///
    /// # Returns
    /// * `bool` - True if the index changed; false on the first slide
    pub fn retreat(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.current_index -= 1;
        self.direction = Direction::Backward;
        true
    }

    /// Select a slide by index
    ///
    /// Out-of-range requests usually come from stale UI state and are ignored.
    /// Jumping to the current slide is accepted and records `Backward`.
    ///
    /// # Parameters
    /// * `index` - 0-based slide index
    ///
    /// # Returns
    /// * `bool` - True if the request was in range and applied
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.slide_count {
            log::debug!(
                "Ignoring jump to slide {} of {}",
                index + 1,
                self.slide_count
            );
            return false;
        }
        self.direction = if index > self.current_index {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.current_index = index;
        true
    }

    /// Adopt the slide count of a fresh parse
    ///
    /// Clamps the current index when the deck shrank below it.
    ///
    /// # Parameters
    /// * `slide_count` - Number of slides in the new parse
    pub fn reconcile(&mut self, slide_count: usize) {
        self.slide_count = slide_count;
        if self.current_index >= slide_count {
            self.current_index = slide_count.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_saturates_at_last_slide() {
        let mut nav = Navigator::new(2);
        assert!(nav.advance());
        assert_eq!(nav.current_index(), 1);
        assert_eq!(nav.direction(), Direction::Forward);
        assert!(!nav.advance());
        assert_eq!(nav.current_index(), 1);
    }

    #[test]
    fn test_retreat_saturates_at_first_slide() {
        let mut nav = Navigator::new(3);
        assert!(!nav.retreat());
        assert_eq!(nav.current_index(), 0);
        assert_eq!(nav.direction(), Direction::Forward);
    }

    #[test]
    fn test_advance_then_retreat_restores_interior_index() {
        let mut nav = Navigator::new(5);
        nav.jump_to(2);
        assert!(nav.advance());
        assert!(nav.retreat());
        assert_eq!(nav.current_index(), 2);
        assert_eq!(nav.direction(), Direction::Backward);
    }

    #[test]
    fn test_jump_to_records_direction() {
        let mut nav = Navigator::new(5);
        assert!(nav.jump_to(3));
        assert_eq!(nav.direction(), Direction::Forward);
        assert!(nav.jump_to(1));
        assert_eq!(nav.direction(), Direction::Backward);
        assert!(nav.jump_to(1));
        assert_eq!(nav.direction(), Direction::Backward);
    }

    #[test]
    fn test_jump_out_of_range_is_ignored() {
        let mut nav = Navigator::new(3);
        nav.jump_to(1);
        assert!(!nav.jump_to(3));
        assert!(!nav.jump_to(usize::MAX));
        assert_eq!(nav.current_index(), 1);
    }

    #[test]
    fn test_reconcile_clamps_when_deck_shrinks() {
        let mut nav = Navigator::new(3);
        nav.jump_to(2);
        nav.reconcile(1);
        assert_eq!(nav.current_index(), 0);
        assert_eq!(nav.slide_count(), 1);
    }

    #[test]
    fn test_reconcile_keeps_index_when_still_valid() {
        let mut nav = Navigator::new(3);
        nav.jump_to(1);
        nav.reconcile(10);
        assert_eq!(nav.current_index(), 1);
    }

    #[test]
    fn test_empty_deck() {
        let mut nav = Navigator::new(4);
        nav.jump_to(3);
        nav.reconcile(0);
        assert!(nav.is_empty());
        assert_eq!(nav.current_index(), 0);
        assert!(!nav.advance());
        assert!(!nav.retreat());
        assert!(!nav.jump_to(0));
    }
}

//! Hover sessions for dropdown panels.
//!
//! Measuring and placing a panel is asynchronous, so a position computed for
//! an earlier hover can arrive after the pointer has already left. Each
//! pointer-enter starts a new session and gets a [`HoverTicket`]; a result is
//! only applied while its ticket is still the current one. Leaving resets the
//! panel immediately and retires the ticket.

use crate::error::PositionError;
use crate::position::Point;

/// Coordinate used to park a panel outside the visible area. The panel stays
/// in the tree so it can be measured before it is shown.
pub const OFFSCREEN: f64 = -99999.0;

/// Identifies one hover session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverTicket(u64);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DropdownTracker {
    generation: u64,
    hovering: bool,
    position: Option<Point>,
}

impl DropdownTracker {
    /// Start a session. Any previous ticket becomes stale.
    pub fn enter(&mut self) -> HoverTicket {
        self.generation = self.generation.wrapping_add(1);
        self.hovering = true;
        HoverTicket(self.generation)
    }

    /// End the session and park the panel off-screen.
    pub fn leave(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.hovering = false;
        self.position = None;
    }

    pub fn is_current(&self, ticket: HoverTicket) -> bool {
        self.hovering && ticket.0 == self.generation
    }

    /// Apply a position result. Returns whether it was applied.
    ///
    /// Stale tickets are dropped. Errors leave the panel off-screen.
    pub fn resolve(&mut self, ticket: HoverTicket, result: Result<Point, PositionError>) -> bool {
        if !self.is_current(ticket) {
            tracing::trace!(?ticket, generation = self.generation, "dropping stale dropdown position");
            return false;
        }
        match result {
            Ok(point) => {
                self.position = Some(point);
                true
            }
            Err(error) => {
                tracing::warn!(%error, "could not position dropdown");
                self.position = None;
                false
            }
        }
    }

    pub fn position(&self) -> Option<Point> {
        self.position
    }

    /// Inline `left`/`top` for the panel.
    pub fn style(&self) -> String {
        let Point { x, y } = self.position.unwrap_or(Point::new(OFFSCREEN, OFFSCREEN));
        format!("left: {x}px; top: {y}px;")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offscreen_until_resolved() {
        let mut tracker = DropdownTracker::default();
        assert_eq!(tracker.style(), "left: -99999px; top: -99999px;");

        let ticket = tracker.enter();
        assert_eq!(tracker.position(), None);
        assert!(tracker.resolve(ticket, Ok(Point::new(12.0, 40.5))));
        assert_eq!(tracker.style(), "left: 12px; top: 40.5px;");
    }

    #[test]
    fn test_leave_resets_synchronously() {
        let mut tracker = DropdownTracker::default();
        let ticket = tracker.enter();
        tracker.resolve(ticket, Ok(Point::new(1.0, 2.0)));
        tracker.leave();
        assert_eq!(tracker.position(), None);
    }

    #[test]
    fn test_late_result_after_leave_is_dropped() {
        let mut tracker = DropdownTracker::default();
        let ticket = tracker.enter();
        tracker.leave();
        assert!(!tracker.resolve(ticket, Ok(Point::new(1.0, 2.0))));
        assert_eq!(tracker.position(), None);
    }

    #[test]
    fn test_result_from_previous_session_is_dropped() {
        let mut tracker = DropdownTracker::default();
        let first = tracker.enter();
        tracker.leave();
        let second = tracker.enter();

        assert!(!tracker.resolve(first, Ok(Point::new(1.0, 1.0))));
        assert!(tracker.resolve(second, Ok(Point::new(2.0, 2.0))));
        assert_eq!(tracker.position(), Some(Point::new(2.0, 2.0)));
    }

    #[test]
    fn test_error_keeps_panel_offscreen() {
        let mut tracker = DropdownTracker::default();
        let ticket = tracker.enter();
        assert!(!tracker.resolve(ticket, Err(PositionError::Unmounted("dropdown"))));
        assert_eq!(tracker.position(), None);
        assert!(tracker.is_current(ticket));
    }
}

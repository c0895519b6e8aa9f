//! Appear-From State
//!
//! Per-instance bookkeeping for elements that enter from an anchor point.

use kurbo::{Point, Size, Vec2};

use crate::geometry::centre_on;

/// What an appearing element should currently render
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AppearPhase {
    /// Anchor not resolvable yet; keep the element hidden at its start state
    Unresolved,
    /// Rendered at the anchor, transitions disabled
    Start(Vec2),
    /// Animating (or animated) to its natural position
    Appeared,
}

/// Tracks the start offset and the one-shot "has appeared" flag
#[derive(Clone, Copy, Debug, Default)]
pub struct AppearState {
    start: Option<Vec2>,
    has_appeared: bool,
}

impl AppearState {
    /// Compute the start offset from the anchor resolved in the element's own
    /// coordinate space. Ignored once appeared.
    pub fn prepare(&mut self, resolved: Option<Point>, own_size: Size) -> AppearPhase {
        if !self.has_appeared {
            if let Some(point) = resolved {
                self.start = Some(centre_on(point, own_size));
            }
        }
        self.phase()
    }

    /// Flip the flag. Returns `true` only the first time, and only once a
    /// start offset is known.
    pub fn appear(&mut self) -> bool {
        if self.has_appeared || self.start.is_none() {
            return false;
        }
        self.has_appeared = true;
        true
    }

    pub fn has_appeared(&self) -> bool {
        self.has_appeared
    }

    pub fn phase(&self) -> AppearPhase {
        match (self.has_appeared, self.start) {
            (true, _) => AppearPhase::Appeared,
            (false, Some(offset)) => AppearPhase::Start(offset),
            (false, None) => AppearPhase::Unresolved,
        }
    }
}

impl AppearPhase {
    /// Inline style for the wrapper element
    pub fn style(&self, appear_ms: u32) -> String {
        match *self {
            AppearPhase::Unresolved => "visibility: hidden;".to_string(),
            AppearPhase::Start(offset) => format!(
                "transform: translate({}px, {}px); transition: none;",
                offset.x, offset.y
            ),
            AppearPhase::Appeared => {
                format!("transform: translate(0px, 0px); transition: transform {appear_ms}ms ease-in-out;")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_holds() {
        let mut state = AppearState::default();
        assert_eq!(state.prepare(None, Size::new(60.0, 60.0)), AppearPhase::Unresolved);
        assert!(!state.appear());
        assert!(!state.has_appeared());
    }

    #[test]
    fn test_start_offset_centres_on_anchor() {
        let mut state = AppearState::default();
        let phase = state.prepare(Some(Point::new(120.0, -250.0)), Size::new(60.0, 60.0));
        assert_eq!(phase, AppearPhase::Start(Vec2::new(90.0, -280.0)));
    }

    #[test]
    fn test_appears_exactly_once() {
        let mut state = AppearState::default();
        state.prepare(Some(Point::new(10.0, 10.0)), Size::new(20.0, 20.0));
        assert!(state.appear());
        assert!(!state.appear());
        assert_eq!(state.phase(), AppearPhase::Appeared);

        // Re-layout after appearing must not bring the start offset back
        let phase = state.prepare(Some(Point::new(500.0, 500.0)), Size::new(20.0, 20.0));
        assert_eq!(phase, AppearPhase::Appeared);
        assert!(!state.appear());
    }

    #[test]
    fn test_style() {
        assert_eq!(AppearPhase::Unresolved.style(350), "visibility: hidden;");
        assert!(AppearPhase::Start(Vec2::new(-3.0, 8.0)).style(350).contains("translate(-3px, 8px)"));
        assert!(AppearPhase::Appeared.style(350).contains("350ms"));
    }
}

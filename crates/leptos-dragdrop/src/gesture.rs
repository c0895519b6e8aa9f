//! Gesture State Machine
//!
//! One recognizer for both taps and drags. Movement threshold distinguishes
//! a tap from a drag, so the two never race.

use kurbo::{Point, Rect, Vec2};

/// Browser pointer id (`PointerEvent.pointerId`)
pub type PointerId = i32;

/// Current phase of a pointer gesture
#[derive(Clone, Copy, Debug, Default, PartialEq)]
enum GesturePhase {
    /// No pointer is down
    #[default]
    Idle,
    /// Pointer down, not moved past the threshold yet
    Pressed { start: Point, origin: Rect },
    /// Pointer moved past the threshold; `translation` is relative to `start`
    Dragging { start: Point, origin: Rect, translation: Vec2 },
}

/// Terminal event of a gesture
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Release {
    /// Released before crossing the threshold
    Tapped { local: Point },
    /// Released after dragging
    Dropped { local: Point, translation: Vec2 },
}

/// Tap/drag recognizer fed with viewport pointer positions.
///
/// Follows the one pointer that pressed; events from any other pointer are
/// ignored until that gesture ends.
#[derive(Clone, Copy, Debug)]
pub struct DragGesture {
    phase: GesturePhase,
    pointer: Option<PointerId>,
    threshold: f64,
}

impl DragGesture {
    pub fn new(threshold: f64) -> Self {
        Self {
            phase: GesturePhase::Idle,
            pointer: None,
            threshold,
        }
    }

    /// `pointer` went down at `point` on content whose frame is `origin`.
    /// Returns `false` (and changes nothing) while another gesture is active.
    pub fn press(&mut self, pointer: PointerId, point: Point, origin: Rect) -> bool {
        if self.is_active() {
            return false;
        }
        self.pointer = Some(pointer);
        self.phase = GesturePhase::Pressed { start: point, origin };
        true
    }

    fn owns(&self, pointer: PointerId) -> bool {
        self.pointer == Some(pointer)
    }

    /// Pointer moved. Returns the dragged content's current frame while dragging.
    pub fn moved(&mut self, pointer: PointerId, point: Point) -> Option<Rect> {
        if !self.owns(pointer) {
            return None;
        }
        match self.phase {
            GesturePhase::Idle => None,
            GesturePhase::Pressed { start, origin } => {
                let translation = point - start;
                // Either axis past the threshold starts the drag
                if translation.x.abs() > self.threshold || translation.y.abs() > self.threshold {
                    self.phase = GesturePhase::Dragging { start, origin, translation };
                    Some(origin + translation)
                } else {
                    None
                }
            }
            GesturePhase::Dragging { start, origin, .. } => {
                let translation = point - start;
                self.phase = GesturePhase::Dragging { start, origin, translation };
                Some(origin + translation)
            }
        }
    }

    /// Pointer released at `point`. Returns the terminal event, if this
    /// pointer's gesture was active.
    ///
    /// The release point is expressed relative to the content's frame origin
    /// at press time.
    pub fn release(&mut self, pointer: PointerId, point: Point) -> Option<Release> {
        if !self.owns(pointer) {
            return None;
        }
        self.pointer = None;
        match std::mem::take(&mut self.phase) {
            GesturePhase::Idle => None,
            GesturePhase::Pressed { origin, .. } => Some(Release::Tapped {
                local: (point - origin.origin()).to_point(),
            }),
            GesturePhase::Dragging { start, origin, .. } => Some(Release::Dropped {
                local: (point - origin.origin()).to_point(),
                translation: point - start,
            }),
        }
    }

    /// Platform cancelled `pointer`. Returns `true` if its gesture had been dragging.
    pub fn cancel(&mut self, pointer: PointerId) -> bool {
        if !self.owns(pointer) {
            return false;
        }
        let was_dragging = self.is_dragging();
        self.pointer = None;
        self.phase = GesturePhase::Idle;
        was_dragging
    }

    pub fn is_active(&self) -> bool {
        self.phase != GesturePhase::Idle
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, GesturePhase::Dragging { .. })
    }

    pub fn translation(&self) -> Option<Vec2> {
        match self.phase {
            GesturePhase::Dragging { translation, .. } => Some(translation),
            _ => None,
        }
    }
}

/// Visual state of the drag ghost
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Ghost {
    #[default]
    Hidden,
    /// Tracking the pointer
    Following(Vec2),
    /// Animating back to the origin
    Returning,
    /// Fading out where it was released
    Fading(Vec2),
}

impl Ghost {
    /// Ghost state right after a drop
    pub fn released(translation: Vec2, snap_back: bool) -> Self {
        if snap_back {
            Ghost::Returning
        } else {
            Ghost::Fading(translation)
        }
    }

    pub fn is_visible(&self) -> bool {
        *self != Ghost::Hidden
    }

    /// Whether the ghost is settling and should be hidden after the settle delay
    pub fn is_settling(&self) -> bool {
        matches!(self, Ghost::Returning | Ghost::Fading(_))
    }

    /// Inline style for the ghost element
    pub fn style(&self, settle_ms: u32) -> String {
        match *self {
            Ghost::Hidden => "display: none;".to_string(),
            Ghost::Following(t) => format!(
                "transform: translate({}px, {}px); transition: none; opacity: 1;",
                t.x, t.y
            ),
            Ghost::Returning => format!(
                "transform: translate(0px, 0px); transition: transform {settle_ms}ms ease-out; opacity: 1;"
            ),
            Ghost::Fading(t) => format!(
                "transform: translate({}px, {}px); transition: opacity {settle_ms}ms ease-out; opacity: 0;",
                t.x, t.y
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FINGER: PointerId = 1;
    const OTHER_FINGER: PointerId = 2;

    fn origin() -> Rect {
        Rect::new(100.0, 20.0, 160.0, 80.0)
    }

    fn pressed() -> DragGesture {
        let mut g = DragGesture::new(5.0);
        assert!(g.press(FINGER, Point::new(130.0, 50.0), origin()));
        g
    }

    #[test]
    fn test_small_movement_is_a_tap() {
        let mut g = pressed();
        assert_eq!(g.moved(FINGER, Point::new(133.0, 54.0)), None);
        assert!(!g.is_dragging());

        let release = g.release(FINGER, Point::new(133.0, 54.0));
        assert_eq!(release, Some(Release::Tapped { local: Point::new(33.0, 34.0) }));
        assert!(!g.is_active());
    }

    #[test]
    fn test_threshold_on_either_axis_starts_drag() {
        let mut g = pressed();
        let frame = g.moved(FINGER, Point::new(130.0, 56.0));
        assert_eq!(frame, Some(origin() + Vec2::new(0.0, 6.0)));
        assert!(g.is_dragging());
    }

    #[test]
    fn test_drag_reports_live_frame() {
        let mut g = pressed();
        g.moved(FINGER, Point::new(150.0, 50.0));
        let frame = g.moved(FINGER, Point::new(180.0, 250.0));
        assert_eq!(frame, Some(Rect::new(150.0, 220.0, 210.0, 280.0)));
        assert_eq!(g.translation(), Some(Vec2::new(50.0, 200.0)));
    }

    #[test]
    fn test_drag_release_reports_local_point() {
        let mut g = pressed();
        g.moved(FINGER, Point::new(180.0, 250.0));
        let release = g.release(FINGER, Point::new(180.0, 250.0));
        assert_eq!(
            release,
            Some(Release::Dropped {
                local: Point::new(80.0, 230.0),
                translation: Vec2::new(50.0, 200.0),
            })
        );
        assert!(!g.is_active());
    }

    #[test]
    fn test_move_and_release_without_press() {
        let mut g = DragGesture::new(5.0);
        assert_eq!(g.moved(FINGER, Point::new(10.0, 10.0)), None);
        assert_eq!(g.release(FINGER, Point::new(10.0, 10.0)), None);
    }

    #[test]
    fn test_cancel_emits_no_terminal_event() {
        let mut g = pressed();
        g.moved(FINGER, Point::new(200.0, 50.0));
        assert!(g.cancel(FINGER));
        assert_eq!(g.release(FINGER, Point::new(200.0, 50.0)), None);

        let mut g = pressed();
        assert!(!g.cancel(FINGER));
        assert!(!g.is_active());
    }

    #[test]
    fn test_second_pointer_is_ignored() {
        let mut g = pressed();
        assert!(!g.press(OTHER_FINGER, Point::new(140.0, 60.0), origin()));

        g.moved(FINGER, Point::new(150.0, 50.0));
        // Another finger moving on the same item does not move the drag
        assert_eq!(g.moved(OTHER_FINGER, Point::new(400.0, 400.0)), None);
        assert_eq!(g.translation(), Some(Vec2::new(20.0, 0.0)));

        // Nor does its release or cancellation end it
        assert_eq!(g.release(OTHER_FINGER, Point::new(400.0, 400.0)), None);
        assert!(!g.cancel(OTHER_FINGER));
        assert!(g.is_dragging());

        let release = g.release(FINGER, Point::new(150.0, 50.0));
        assert!(matches!(release, Some(Release::Dropped { .. })));
        assert_eq!(g.release(FINGER, Point::new(150.0, 50.0)), None);
    }

    #[test]
    fn test_new_press_after_release() {
        let mut g = pressed();
        g.release(FINGER, Point::new(130.0, 50.0));
        assert!(g.press(OTHER_FINGER, Point::new(130.0, 50.0), origin()));
        assert_eq!(g.moved(FINGER, Point::new(300.0, 50.0)), None);
    }

    #[test]
    fn test_ghost_after_release() {
        let t = Vec2::new(10.0, 20.0);
        assert_eq!(Ghost::released(t, true), Ghost::Returning);
        assert_eq!(Ghost::released(t, false), Ghost::Fading(t));
        assert!(Ghost::Returning.is_settling());
        assert!(!Ghost::Following(t).is_settling());
        assert!(!Ghost::Hidden.is_visible());
    }

    #[test]
    fn test_ghost_style() {
        let style = Ghost::Following(Vec2::new(4.0, -2.5)).style(250);
        assert!(style.contains("translate(4px, -2.5px)"));
        assert!(Ghost::Returning.style(250).contains("transform 250ms"));
        assert!(Ghost::Fading(Vec2::ZERO).style(250).contains("opacity: 0"));
    }
}

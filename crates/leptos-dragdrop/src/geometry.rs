//! Geometry and Anchors
//!
//! Element frames, deferred-resolution anchors and the "first present"
//! preference reduction. Pure Rust, no DOM access.

use std::collections::HashMap;

use kurbo::{Point, Rect, Vec2};

/// Identifies an element whose frame can be reported and resolved against
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

/// A point captured in one element's local coordinate space.
///
/// Capturing does not look at layout. The point is turned into coordinates
/// only when [`FrameRegistry::resolve`] is called, against whatever frames are
/// known at that time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    source: ElementId,
    local: Point,
}

/// Record `local` (relative to `source`'s frame origin) for later resolution
pub fn capture_anchor(source: ElementId, local: Point) -> Anchor {
    Anchor { source, local }
}

/// Axis-aligned overlap test with strictly positive overlap on both axes.
///
/// Rectangles that only share an edge or a corner do not intersect.
pub fn frames_intersect(a: Rect, b: Rect) -> bool {
    let (a, b) = (a.abs(), b.abs());
    a.x0 < b.x1 && b.x0 < a.x1 && a.y0 < b.y1 && b.y0 < a.y1
}

/// Last known frame of every reported element, in viewport coordinates
#[derive(Clone, Debug, Default)]
pub struct FrameRegistry {
    frames: HashMap<ElementId, Rect>,
}

impl FrameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the frame of `id`. Returns `true` if it differs from the previous report.
    pub fn report(&mut self, id: ElementId, frame: Rect) -> bool {
        match self.frames.insert(id, frame) {
            Some(previous) => previous != frame,
            None => true,
        }
    }

    pub fn frame(&self, id: ElementId) -> Option<Rect> {
        self.frames.get(&id).copied()
    }

    /// Resolve `anchor` into `target`'s coordinate space.
    ///
    /// Returns `None` until both the source and the target have reported a frame.
    pub fn resolve(&self, anchor: &Anchor, target: ElementId) -> Option<Point> {
        let source = self.frame(anchor.source)?;
        let target = self.frame(target)?;
        let global = source.origin() + anchor.local.to_vec2();
        Some((global - target.origin()).to_point())
    }
}

/// Suppresses repeated identical frame measurements
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameObserver {
    last: Option<Rect>,
}

impl FrameObserver {
    /// Feed a new measurement; yields it only on first measurement or actual change
    pub fn observe(&mut self, frame: Rect) -> Option<Rect> {
        if self.last == Some(frame) {
            return None;
        }
        self.last = Some(frame);
        Some(frame)
    }
}

/// Reduce an ordered collection of optional reports to the first present one
pub fn first_present<T>(reports: impl IntoIterator<Item = Option<T>>) -> Option<T> {
    reports.into_iter().flatten().next()
}

/// One logical value reported from several ordered positions.
///
/// Each slot holds that position's latest report (or nothing); the value is
/// the first present report in slot order.
#[derive(Clone, Debug, PartialEq)]
pub struct Preference<T> {
    slots: Vec<Option<T>>,
}

impl<T> Default for Preference<T> {
    fn default() -> Self {
        Self { slots: Vec::new() }
    }
}

impl<T: Clone> Preference<T> {
    /// Set (or clear, with `None`) the report of `slot`
    pub fn report(&mut self, slot: usize, value: Option<T>) {
        if self.slots.len() <= slot {
            self.slots.resize(slot + 1, None);
        }
        self.slots[slot] = value;
    }

    pub fn value(&self) -> Option<T> {
        first_present(self.slots.iter().cloned())
    }
}

/// Translation that moves a rect of `size` so its centre sits on `point`
pub(crate) fn centre_on(point: Point, size: kurbo::Size) -> Vec2 {
    point.to_vec2() - size.to_vec2() / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const ITEM: ElementId = ElementId(1);
    const ENTRY: ElementId = ElementId(2);

    #[test]
    fn test_intersection_is_symmetric() {
        let rects = [
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Rect::new(5.0, 5.0, 15.0, 15.0),
            Rect::new(10.0, 0.0, 20.0, 10.0),
            Rect::new(30.0, 30.0, 40.0, 40.0),
            Rect::new(2.0, 2.0, 3.0, 3.0),
            Rect::new(10.0, 10.0, 0.0, 0.0),
        ];
        for a in rects {
            for b in rects {
                assert_eq!(frames_intersect(a, b), frames_intersect(b, a), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let zone = Rect::new(0.0, 100.0, 300.0, 160.0);
        // Shares the top edge of the zone
        let above = Rect::new(10.0, 40.0, 70.0, 100.0);
        // Shares only a corner
        let corner = Rect::new(300.0, 160.0, 360.0, 220.0);
        assert!(!frames_intersect(above, zone));
        assert!(!frames_intersect(corner, zone));

        let one_pixel_in = Rect::new(10.0, 41.0, 70.0, 101.0);
        assert!(frames_intersect(one_pixel_in, zone));
    }

    #[test]
    fn test_containment_intersects() {
        let zone = Rect::new(0.0, 100.0, 300.0, 160.0);
        let inside = Rect::new(20.0, 110.0, 60.0, 150.0);
        assert!(frames_intersect(inside, zone));
        assert!(frames_intersect(zone, inside));
    }

    #[test]
    fn test_resolve_waits_for_both_frames() {
        let mut registry = FrameRegistry::new();
        let anchor = capture_anchor(ITEM, Point::new(30.0, 30.0));
        assert_eq!(registry.resolve(&anchor, ENTRY), None);

        registry.report(ITEM, Rect::new(100.0, 20.0, 160.0, 80.0));
        assert_eq!(registry.resolve(&anchor, ENTRY), None);

        registry.report(ENTRY, Rect::new(10.0, 300.0, 70.0, 360.0));
        // (100 + 30, 20 + 30) seen from (10, 300)
        assert_eq!(registry.resolve(&anchor, ENTRY), Some(Point::new(120.0, -250.0)));
    }

    #[test]
    fn test_resolve_uses_latest_frames() {
        let mut registry = FrameRegistry::new();
        let anchor = capture_anchor(ITEM, Point::new(5.0, 5.0));
        registry.report(ITEM, Rect::new(0.0, 0.0, 10.0, 10.0));
        registry.report(ENTRY, Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(registry.resolve(&anchor, ENTRY), Some(Point::new(5.0, 5.0)));

        // Window resize moved the source
        registry.report(ITEM, Rect::new(50.0, 0.0, 60.0, 10.0));
        assert_eq!(registry.resolve(&anchor, ENTRY), Some(Point::new(55.0, 5.0)));
    }

    #[test]
    fn test_resolve_against_source_is_identity() {
        let mut registry = FrameRegistry::new();
        registry.report(ITEM, Rect::new(40.0, 40.0, 100.0, 100.0));
        let anchor = capture_anchor(ITEM, Point::new(12.0, 7.0));
        assert_eq!(registry.resolve(&anchor, ITEM), Some(Point::new(12.0, 7.0)));
    }

    #[test]
    fn test_report_detects_change() {
        let mut registry = FrameRegistry::new();
        let frame = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(registry.report(ITEM, frame));
        assert!(!registry.report(ITEM, frame));
        assert!(registry.report(ITEM, frame + Vec2::new(1.0, 0.0)));
    }

    #[test]
    fn test_frame_observer_suppresses_duplicates() {
        let mut observer = FrameObserver::default();
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(0.0, 0.0, 20.0, 10.0);

        assert_eq!(observer.observe(a), Some(a));
        assert_eq!(observer.observe(a), None);
        assert_eq!(observer.observe(b), Some(b));
        assert_eq!(observer.observe(a), Some(a));
        assert_eq!(observer.observe(a), None);
    }

    #[test]
    fn test_first_present() {
        assert_eq!(first_present([None, Some(2), Some(3)]), Some(2));
        assert_eq!(first_present::<i32>([None, None]), None);
        assert_eq!(first_present::<i32>([]), None);
    }

    #[test]
    fn test_preference_slots() {
        let row = Rect::new(0.0, 200.0, 400.0, 280.0);
        let placeholder = Rect::new(0.0, 200.0, 400.0, 240.0);
        let mut pref = Preference::default();
        assert_eq!(pref.value(), None);

        pref.report(1, Some(placeholder));
        assert_eq!(pref.value(), Some(placeholder));

        pref.report(0, Some(row));
        assert_eq!(pref.value(), Some(row));

        pref.report(0, None);
        assert_eq!(pref.value(), Some(placeholder));
    }

    #[test]
    fn test_centre_on() {
        let offset = centre_on(Point::new(100.0, 50.0), kurbo::Size::new(40.0, 20.0));
        assert_eq!(offset, Vec2::new(80.0, 40.0));
    }
}

//! DnD Context
//!
//! Configuration and the shared anchor resolver, provided via Leptos Context API.

use kurbo::{Point, Rect};
use leptos::prelude::*;

use crate::geometry::{Anchor, ElementId, FrameRegistry};

/// Tunables for gestures and animations
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DndConfig {
    /// Movement threshold in pixels to start dragging
    pub drag_threshold_px: f64,
    /// How long the ghost takes to return or fade after a drop
    pub settle_ms: u32,
    /// Duration of the appear-from animation
    pub appear_ms: u32,
}

impl Default for DndConfig {
    fn default() -> Self {
        Self {
            drag_threshold_px: 5.0,
            settle_ms: 250,
            appear_ms: 350,
        }
    }
}

pub fn provide_dnd_config(config: DndConfig) {
    provide_context(config);
}

/// Config from context, or the defaults if none was provided
pub fn use_dnd_config() -> DndConfig {
    use_context::<DndConfig>().unwrap_or_default()
}

/// Reactive handle around a [`FrameRegistry`].
///
/// Every frame change bumps a version signal, so tracked resolution re-runs
/// its effect once more frames are known.
#[derive(Clone, Copy)]
pub struct AnchorResolver {
    registry: StoredValue<FrameRegistry>,
    version: RwSignal<u64>,
}

impl AnchorResolver {
    pub fn new() -> Self {
        Self {
            registry: StoredValue::new(FrameRegistry::new()),
            version: RwSignal::new(0),
        }
    }

    /// Record the latest frame of `id`
    pub fn report(&self, id: ElementId, frame: Rect) {
        let mut changed = false;
        self.registry.update_value(|r| changed = r.report(id, frame));
        if changed {
            self.version.update(|v| *v += 1);
        }
    }

    /// Resolve and subscribe the current reactive scope to future frame changes
    pub fn resolve(&self, anchor: &Anchor, target: ElementId) -> Option<Point> {
        self.version.track();
        self.resolve_untracked(anchor, target)
    }

    pub fn resolve_untracked(&self, anchor: &Anchor, target: ElementId) -> Option<Point> {
        self.registry.with_value(|r| r.resolve(anchor, target))
    }
}

impl Default for AnchorResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a resolver and provide it to all children
pub fn provide_anchor_resolver() -> AnchorResolver {
    let resolver = AnchorResolver::new();
    provide_context(resolver);
    resolver
}

pub fn use_anchor_resolver() -> AnchorResolver {
    use_context::<AnchorResolver>().expect("AnchorResolver should be provided")
}

//! Leptos DragDrop Utilities
//!
//! Tap/drag/drop for Leptos using pointer events, plus anchors that capture a
//! point in one element and resolve it later against another element's layout.
//! Uses movement threshold to distinguish tap from drag.
//!
//! The pure parts ([`geometry`], [`gesture`], [`appear`]) have no DOM access.
//! The components ([`Draggable`], [`AppearFrom`]) and [`observe_frame`] wire
//! them to `web-sys`.

pub mod appear;
mod appear_from;
mod context;
mod draggable;
pub mod geometry;
pub mod gesture;
mod observe;

pub use appear_from::AppearFrom;
pub use context::{
    provide_anchor_resolver, provide_dnd_config, use_anchor_resolver, use_dnd_config,
    AnchorResolver, DndConfig,
};
pub use draggable::Draggable;
pub use geometry::{capture_anchor, first_present, frames_intersect, Anchor, ElementId, Preference};
pub use observe::{measure, observe_frame, rect_from_dom};

//! Draggable Component
//!
//! Wraps content so it can be tapped or dragged. While dragging, a ghost copy
//! follows the pointer above the stationary original.

use gloo_timers::callback::Timeout;
use kurbo::Rect;
use leptos::html::Div;
use leptos::prelude::*;
use web_sys::PointerEvent;

use crate::context::{use_anchor_resolver, use_dnd_config};
use crate::geometry::{capture_anchor, Anchor, ElementId};
use crate::gesture::{DragGesture, Ghost, Release};
use crate::observe::{measure, mounted_element, observe_frame, pointer_point};

/// Hide the ghost once its return/fade transition is over, unless a newer
/// gesture took it over in the meantime
fn settle(ghost: RwSignal<Ghost>, generation: StoredValue<u64>, settle_ms: u32) {
    generation.update_value(|g| *g += 1);
    let scheduled = generation.get_value();
    Timeout::new(settle_ms, move || {
        if generation.get_value() == scheduled && ghost.get_untracked().is_settling() {
            ghost.set(Ghost::Hidden);
        }
    })
    .forget();
}

/// Tappable, draggable content.
///
/// `snap_back` is read at release time, before `on_ended` runs.
#[component]
pub fn Draggable(
    /// Element id anchors are captured in
    element: ElementId,
    /// Whether a released ghost returns to its origin (otherwise it fades in place)
    #[prop(into)]
    snap_back: Signal<bool>,
    /// Live frame of the dragged content, viewport coordinates
    #[prop(into)]
    on_dragged: Callback<Rect>,
    /// Released without dragging
    #[prop(into)]
    on_tapped: Callback<Anchor>,
    /// Released after dragging
    #[prop(into)]
    on_ended: Callback<Anchor>,
    /// Platform cancelled an active drag
    #[prop(optional, into)]
    on_cancelled: Option<Callback<()>>,
    children: ChildrenFn,
) -> impl IntoView {
    let config = use_dnd_config();
    let resolver = use_anchor_resolver();

    let wrapper = NodeRef::<Div>::new();
    let gesture = StoredValue::new(DragGesture::new(config.drag_threshold_px));
    let ghost = RwSignal::new(Ghost::Hidden);
    let settle_generation = StoredValue::new(0u64);

    observe_frame(wrapper, Callback::new(move |frame: Rect| resolver.report(element, frame)));

    let on_pointerdown = move |ev: PointerEvent| {
        if !ev.is_primary() || ev.button() != 0 {
            return;
        }
        let Some(el) = mounted_element(wrapper) else { return };
        let origin = measure(&el);
        let mut pressed = false;
        gesture.update_value(|g| pressed = g.press(ev.pointer_id(), pointer_point(&ev), origin));
        if !pressed {
            return;
        }
        resolver.report(element, origin);
        // Keep receiving moves and the release even when the pointer leaves
        if let Err(err) = el.set_pointer_capture(ev.pointer_id()) {
            log::warn!("[DND] Pointer capture failed: {:?}", err);
        }
    };

    let on_pointermove = move |ev: PointerEvent| {
        let was_dragging = gesture.with_value(|g| g.is_dragging());
        let mut frame = None;
        gesture.update_value(|g| frame = g.moved(ev.pointer_id(), pointer_point(&ev)));
        let Some(frame) = frame else { return };
        if !was_dragging {
            log::debug!("[DND] Drag started: element={:?}", element);
        }
        if let Some(translation) = gesture.with_value(|g| g.translation()) {
            ghost.set(Ghost::Following(translation));
        }
        on_dragged.run(frame);
    };

    let on_pointerup = move |ev: PointerEvent| {
        let snap = snap_back.get_untracked();
        let mut release = None;
        gesture.update_value(|g| release = g.release(ev.pointer_id(), pointer_point(&ev)));
        match release {
            Some(Release::Tapped { local }) => {
                log::debug!("[DND] Tapped: element={:?}", element);
                on_tapped.run(capture_anchor(element, local));
            }
            Some(Release::Dropped { local, translation }) => {
                log::debug!("[DND] Dropped: element={:?}, snap_back={}", element, snap);
                ghost.set(Ghost::released(translation, snap));
                on_ended.run(capture_anchor(element, local));
                settle(ghost, settle_generation, config.settle_ms);
            }
            None => {}
        }
    };

    // Also fires after a normal release, when the gesture is already idle
    let on_cancel = move |ev: PointerEvent| {
        let mut was_dragging = false;
        gesture.update_value(|g| was_dragging = g.cancel(ev.pointer_id()));
        if was_dragging {
            log::debug!("[DND] Drag cancelled: element={:?}", element);
            ghost.set(Ghost::Returning);
            if let Some(on_cancelled) = on_cancelled {
                on_cancelled.run(());
            }
            settle(ghost, settle_generation, config.settle_ms);
        }
    };

    let ghost_children = children.clone();
    let settle_ms = config.settle_ms;

    view! {
        <div
            class=move || if ghost.get().is_visible() { "draggable active" } else { "draggable" }
            node_ref=wrapper
            on:pointerdown=on_pointerdown
            on:pointermove=on_pointermove
            on:pointerup=on_pointerup
            on:pointercancel=on_cancel
            on:lostpointercapture=on_cancel
        >
            <div class="draggable-content">{children()}</div>
            <Show when=move || ghost.get().is_visible()>
                // Transparent, but still receives the gesture at the original location
                <div class="drag-shield"></div>
                <div class="drag-ghost" style=move || ghost.get().style(settle_ms)>
                    {ghost_children()}
                </div>
            </Show>
        </div>
    }
}

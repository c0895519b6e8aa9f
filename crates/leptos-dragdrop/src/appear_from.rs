//! Appear-From Component
//!
//! Makes newly inserted content start at an anchor and animate to its
//! natural position, once per instance.

use leptos::html::Div;
use leptos::prelude::*;

use crate::appear::{AppearPhase, AppearState};
use crate::context::{use_anchor_resolver, use_dnd_config};
use crate::geometry::{Anchor, ElementId};
use crate::observe::measure;

#[component]
pub fn AppearFrom(
    /// Where the content should appear from
    anchor: Anchor,
    /// This element's own id, used as the resolution target
    element: ElementId,
    children: Children,
) -> impl IntoView {
    let config = use_dnd_config();
    let resolver = use_anchor_resolver();

    let node = NodeRef::<Div>::new();
    let state = StoredValue::new(AppearState::default());
    let phase = RwSignal::new(AppearPhase::Unresolved);

    Effect::new(move |_| {
        let Some(el) = node.get() else { return };
        // Only the unresolved state renders without a transform, so it is the
        // only time the natural frame can be measured
        if phase.get_untracked() != AppearPhase::Unresolved {
            return;
        }
        let frame = measure(&el);
        resolver.report(element, frame);

        let resolved = resolver.resolve(&anchor, element);
        let mut next = AppearPhase::Unresolved;
        state.update_value(|s| next = s.prepare(resolved, frame.size()));
        let AppearPhase::Start(offset) = next else {
            log::debug!("[APPEAR] Waiting for anchor: element={:?}", element);
            return;
        };

        log::debug!("[APPEAR] Start: element={:?}, offset={:?}", element, offset);
        phase.set(next);
        // Two frames: the first paints the start offset, the second animates away from it
        request_animation_frame(move || {
            request_animation_frame(move || {
                let mut appeared = false;
                state.update_value(|s| appeared = s.appear());
                if appeared {
                    phase.set(AppearPhase::Appeared);
                }
            });
        });
    });

    let appear_ms = config.appear_ms;

    view! {
        <div class="appear-from" node_ref=node style=move || phase.get().style(appear_ms)>
            {children()}
        </div>
    }
}

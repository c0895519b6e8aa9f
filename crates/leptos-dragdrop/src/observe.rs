//! Frame Observation
//!
//! Measures DOM elements and reports their viewport frames as they change.

use kurbo::{Point, Rect};
use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::geometry::FrameObserver;

/// Live `ResizeObserver` with the closure it calls
type ResizeWatch = (web_sys::ResizeObserver, Closure<dyn FnMut()>);

pub fn rect_from_dom(rect: &web_sys::DomRect) -> Rect {
    Rect::new(rect.left(), rect.top(), rect.right(), rect.bottom())
}

/// Current frame of `el` in viewport coordinates
pub fn measure(el: &web_sys::Element) -> Rect {
    rect_from_dom(&el.get_bounding_client_rect())
}

pub(crate) fn pointer_point(ev: &web_sys::MouseEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

/// The element behind `node_ref`, or `None` if unmounted or already disposed
pub(crate) fn mounted_element(node_ref: NodeRef<Div>) -> Option<web_sys::HtmlDivElement> {
    node_ref.try_get_untracked().flatten()
}

fn disconnect(watch: StoredValue<Option<ResizeWatch>, LocalStorage>) {
    if let Some(Some((resize_observer, _on_resize))) = watch.try_update_value(Option::take) {
        resize_observer.disconnect();
    }
}

/// Call `on_change` with the element's frame on mount and whenever it changes.
///
/// Element resizes come from a `ResizeObserver`, moves from window resize
/// and scroll. Identical consecutive measurements are reported once.
/// Everything is disconnected when the owner is cleaned up.
pub fn observe_frame(node_ref: NodeRef<Div>, on_change: Callback<Rect>) {
    let observer = StoredValue::new(FrameObserver::default());
    let watch = StoredValue::new_local(None::<ResizeWatch>);

    let remeasure = move || {
        let Some(el) = mounted_element(node_ref) else { return };
        let frame = measure(&el);
        let Some(fresh) = observer.try_update_value(|o| o.observe(frame)) else { return };
        if let Some(frame) = fresh {
            on_change.run(frame);
        }
    };

    Effect::new(move |_| {
        let Some(el) = node_ref.get() else { return };
        remeasure();

        disconnect(watch);
        let on_resize = Closure::<dyn FnMut()>::new(remeasure);
        match web_sys::ResizeObserver::new(on_resize.as_ref().unchecked_ref()) {
            Ok(resize_observer) => {
                resize_observer.observe(&el);
                watch.set_value(Some((resize_observer, on_resize)));
            }
            Err(err) => log::warn!("[DND] ResizeObserver unavailable: {:?}", err),
        }
    });

    let on_window_resize = window_event_listener(ev::resize, move |_| remeasure());
    let on_window_scroll = window_event_listener(ev::scroll, move |_| remeasure());
    on_cleanup(move || {
        disconnect(watch);
        on_window_resize.remove();
        on_window_scroll.remove();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mounted_element_after_owner_cleanup() {
        let owner = Owner::new();
        let node = owner.with(NodeRef::<Div>::new);
        assert!(mounted_element(node).is_none());

        owner.cleanup();
        // Late observer callbacks must see "unmounted", not panic
        assert!(mounted_element(node).is_none());
    }
}

//! Cart Zone Component
//!
//! The drop zone. Shows a placeholder while empty and the cart row
//! afterwards; whichever is mounted reports the drop zone frame.

use kurbo::Rect;
use leptos::html::Div;
use leptos::prelude::*;
use leptos_dragdrop::{observe_frame, AppearFrom};

use crate::components::ItemIcon;
use crate::models::{entry_element, shop_item};
use crate::store::{
    store_cart_items, store_cart_len, store_in_drop_zone, store_report_drop_frame, use_shop_store, DropSlot,
};

/// Container that reports its frame into a drop zone slot while mounted
#[component]
fn DropSlotFrame(drop_slot: DropSlot, css_class: &'static str, children: Children) -> impl IntoView {
    let store = use_shop_store();
    let node = NodeRef::<Div>::new();

    observe_frame(
        node,
        Callback::new(move |frame: Rect| store_report_drop_frame(&store, drop_slot, Some(frame))),
    );
    on_cleanup(move || store_report_drop_frame(&store, drop_slot, None));

    view! { <div class=css_class node_ref=node>{children()}</div> }
}

#[component]
pub fn CartZone() -> impl IntoView {
    let store = use_shop_store();

    let is_empty = move || store_cart_len(&store) == 0;
    let zone_class = move || {
        let mut c = String::from("cart-zone");
        if store_in_drop_zone(&store) { c.push_str(" drop-target"); }
        c
    };

    view! {
        <section class=zone_class>
            <h2 class="cart-title">"Cart"</h2>
            <Show
                when=move || !is_empty()
                fallback=|| view! {
                    <DropSlotFrame drop_slot=DropSlot::Placeholder css_class="cart-placeholder">
                        "Drag or tap an item to add it"
                    </DropSlotFrame>
                }
            >
                <DropSlotFrame drop_slot=DropSlot::CartRow css_class="cart-row">
                    <For
                        each=move || store_cart_items(&store)
                        key=|entry| entry.id
                        children=move |entry| {
                            shop_item(entry.item).map(|item| view! {
                                <AppearFrom anchor=entry.origin element=entry_element(entry.id)>
                                    <ItemIcon item=item />
                                </AppearFrom>
                            })
                        }
                    />
                </DropSlotFrame>
            </Show>
        </section>
    }
}

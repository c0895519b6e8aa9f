//! Shop Row Component
//!
//! The shelf of draggable items.

use kurbo::Rect;
use leptos::prelude::*;
use leptos_dragdrop::{Anchor, Draggable};

use crate::components::ItemIcon;
use crate::models::{item_element, SHOP_ITEMS};
use crate::store::{
    store_drag_cancelled, store_drag_ended, store_drag_moved, store_in_drop_zone, store_tap,
    use_shop_store,
};

#[component]
pub fn ShopRow() -> impl IntoView {
    let store = use_shop_store();

    // Released ghosts return home unless they are over the cart
    let snap_back = Signal::derive(move || !store_in_drop_zone(&store));

    view! {
        <div class="shop-row">
            {SHOP_ITEMS
                .iter()
                .map(|item| {
                    let index = item.index;
                    view! {
                        <Draggable
                            element=item_element(index)
                            snap_back=snap_back
                            on_dragged=move |frame: Rect| store_drag_moved(&store, frame)
                            on_tapped=move |anchor: Anchor| store_tap(&store, index, anchor)
                            on_ended=move |anchor: Anchor| store_drag_ended(&store, index, anchor)
                            on_cancelled=move |_: ()| store_drag_cancelled(&store)
                        >
                            <ItemIcon item=item />
                        </Draggable>
                    }
                })
                .collect_view()}
        </div>
    }
}

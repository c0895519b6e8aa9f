//! Shop Screen App
//!
//! Shelf of items on top, cart zone below.

use leptos::prelude::*;
use leptos_dragdrop::{provide_anchor_resolver, provide_dnd_config, DndConfig};
use reactive_stores::Store;

use crate::components::{CartZone, ShopRow};
use crate::store::{store_cart_len, ShopState};

#[component]
pub fn App() -> impl IntoView {
    // Provide context to all children
    provide_dnd_config(DndConfig::default());
    provide_anchor_resolver();
    let store = Store::new(ShopState::new());
    provide_context(store);

    let count_label = move || match store_cart_len(&store) {
        1 => "1 item in cart".to_string(),
        n => format!("{} items in cart", n),
    };

    view! {
        <main class="shop-screen">
            <h1>"Shop"</h1>
            <ShopRow />
            <CartZone />
            <p class="cart-count">{count_label}</p>
        </main>
    }
}

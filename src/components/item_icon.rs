//! Item Icon Component

use leptos::prelude::*;

use crate::models::ShopItem;

/// Coloured circle with the item's glyph
#[component]
pub fn ItemIcon(item: &'static ShopItem) -> impl IntoView {
    view! {
        <div
            class="item-icon"
            title=item.name
            style=format!("background-color: {};", item.color().css())
        >
            <span class="item-glyph">{item.glyph}</span>
        </div>
    }
}

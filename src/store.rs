//! Shop Screen State Store
//!
//! Cart entries, the live drag rectangle and the drop zone, in a Leptos
//! reactive_stores Store. Drop-zone decisions live on [`ShopState`] so they
//! can be tested without a reactive runtime.

use kurbo::Rect;
use leptos::prelude::*;
use leptos_dragdrop::{frames_intersect, Anchor, Preference};
use reactive_stores::Store;

use crate::models::CartEntry;

/// Positions that report the drop zone frame, in priority order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropSlot {
    /// The cart row, once it has entries
    CartRow = 0,
    /// The empty-cart placeholder
    Placeholder = 1,
}

/// Shop screen state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ShopState {
    /// Cart entries in insertion order
    pub cart_items: Vec<CartEntry>,
    /// Frame of the item being dragged; set only while a drag is active
    pub drag_rect: Option<Rect>,
    /// Drop zone frame as reported by each slot
    pub drop_reports: Preference<Rect>,
    /// Id for the next cart entry
    pub next_entry_id: u64,
}

impl ShopState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drop_rect(&self) -> Option<Rect> {
        self.drop_reports.value()
    }

    /// Whether a drag released now would land in the cart
    pub fn is_in_drop_zone(&self) -> bool {
        in_drop_zone(self.drag_rect, self.drop_rect())
    }

    /// A drag of `item` ended. Adds an entry only if it ended over the cart.
    pub fn drag_ended(&mut self, item: usize, origin: Anchor) -> Option<CartEntry> {
        let accepted = self.is_in_drop_zone();
        self.drag_rect = None;
        accepted.then(|| self.append(item, origin))
    }

    pub fn drag_cancelled(&mut self) {
        self.drag_rect = None;
    }

    /// Taps always add, whatever the drag state
    pub fn tapped(&mut self, item: usize, origin: Anchor) -> CartEntry {
        self.append(item, origin)
    }

    pub fn report_drop_frame(&mut self, slot: DropSlot, frame: Option<Rect>) {
        self.drop_reports.report(slot as usize, frame);
    }

    fn append(&mut self, item: usize, origin: Anchor) -> CartEntry {
        let entry = CartEntry {
            id: self.next_entry_id,
            item,
            origin,
        };
        self.next_entry_id += 1;
        self.cart_items.push(entry);
        entry
    }
}

/// A drag frame lands in the cart when it overlaps the drop zone
pub fn in_drop_zone(drag_rect: Option<Rect>, drop_rect: Option<Rect>) -> bool {
    match (drag_rect, drop_rect) {
        (Some(drag), Some(drop)) => frames_intersect(drag, drop),
        _ => false,
    }
}

/// Type alias for the store
pub type ShopStore = Store<ShopState>;

/// Get the shop store from context
pub fn use_shop_store() -> ShopStore {
    expect_context::<ShopStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Runs on every pointer move, so only `drag_rect` subscribers are notified
pub fn store_drag_moved(store: &ShopStore, frame: Rect) {
    store.drag_rect().set(Some(frame));
}

pub fn store_drag_ended(store: &ShopStore, item: usize, origin: Anchor) {
    match store.write().drag_ended(item, origin) {
        Some(entry) => log::info!("[CART] Dropped item {} into cart as entry {}", item, entry.id),
        None => log::debug!("[CART] Item {} dropped outside the cart", item),
    }
}

pub fn store_drag_cancelled(store: &ShopStore) {
    store.write().drag_cancelled();
}

pub fn store_tap(store: &ShopStore, item: usize, origin: Anchor) {
    let entry = store.write().tapped(item, origin);
    log::info!("[CART] Tapped item {} into cart as entry {}", item, entry.id);
}

/// Update a drop zone slot; tolerates a store that is already disposed
pub fn store_report_drop_frame(store: &ShopStore, slot: DropSlot, frame: Option<Rect>) {
    if let Some(mut state) = store.try_write() {
        state.report_drop_frame(slot, frame);
    }
}

pub fn store_cart_items(store: &ShopStore) -> Vec<CartEntry> {
    store.cart_items().get()
}

pub fn store_cart_len(store: &ShopStore) -> usize {
    store.cart_items().read().len()
}

pub fn store_in_drop_zone(store: &ShopStore) -> bool {
    let drop_rect = store.drop_reports().with(Preference::value);
    in_drop_zone(store.drag_rect().get(), drop_rect)
}

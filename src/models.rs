//! Frontend Models
//!
//! The fixed shop item table and cart entries.

use leptos_dragdrop::{Anchor, ElementId};

/// Number of items on the shop shelf
pub const ITEM_COUNT: usize = 5;

/// Cart entry element ids start above every shop item id
const CART_ENTRY_ELEMENT_BASE: u64 = 1 << 32;

/// Colour in hue/saturation/brightness, hue in turns
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsb {
    pub hue: f64,
    pub saturation: f64,
    pub brightness: f64,
}

impl Hsb {
    /// Same colour as (hue, saturation, lightness), all in 0..=1
    pub fn to_hsl(self) -> (f64, f64, f64) {
        let lightness = self.brightness * (1.0 - self.saturation / 2.0);
        let saturation = if lightness == 0.0 || lightness == 1.0 {
            0.0
        } else {
            (self.brightness - lightness) / lightness.min(1.0 - lightness)
        };
        (self.hue, saturation, lightness)
    }

    /// CSS `hsl()` value
    pub fn css(self) -> String {
        let (h, s, l) = self.to_hsl();
        format!("hsl({:.1}deg {:.1}% {:.1}%)", h * 360.0, s * 100.0, l * 100.0)
    }
}

/// A shop item (fixed table entry)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShopItem {
    pub index: usize,
    pub name: &'static str,
    pub glyph: &'static str,
}

impl ShopItem {
    /// Evenly spaced around the colour wheel at full saturation
    pub fn color(&self) -> Hsb {
        Hsb {
            hue: self.index as f64 / ITEM_COUNT as f64,
            saturation: 1.0,
            brightness: 0.8,
        }
    }
}

pub static SHOP_ITEMS: [ShopItem; ITEM_COUNT] = [
    ShopItem { index: 0, name: "bag", glyph: "👜" },
    ShopItem { index: 1, name: "gift", glyph: "🎁" },
    ShopItem { index: 2, name: "hourglass", glyph: "⌛" },
    ShopItem { index: 3, name: "light bulb", glyph: "💡" },
    ShopItem { index: 4, name: "umbrella", glyph: "☂" },
];

pub fn shop_item(index: usize) -> Option<&'static ShopItem> {
    SHOP_ITEMS.get(index)
}

/// Element id of the shop item at `index`
pub fn item_element(index: usize) -> ElementId {
    ElementId(index as u64)
}

/// Element id of the cart entry with `entry_id`
pub fn entry_element(entry_id: u64) -> ElementId {
    ElementId(CART_ENTRY_ELEMENT_BASE + entry_id)
}

/// An item added to the cart. Never changes once created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartEntry {
    /// Insertion sequence number, also the render key
    pub id: u64,
    /// Index into [`SHOP_ITEMS`]
    pub item: usize,
    /// Where the entry should appear from
    pub origin: Anchor,
}

//! UI Components
//!
//! Shop shelf, cart zone and the icon both of them render.

mod cart_zone;
mod item_icon;
mod shop_row;

pub use cart_zone::CartZone;
pub use item_icon::ItemIcon;
pub use shop_row::ShopRow;

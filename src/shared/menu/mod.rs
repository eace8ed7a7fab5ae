//! Sidebar menu: tree flattening, key derivation and open/close state

pub mod controller;
pub mod keys;
pub mod open_keys;
pub mod tree;

pub use controller::LayoutController;
pub use keys::{default_open_keys, first_menu_key, selected_keys, top_level_menus};
pub use open_keys::OpenKeys;
pub use tree::{build_menu, MenuItem};

pub mod button;
pub mod card;
pub mod common;
pub mod icon;
pub mod menu;

pub use button::{Button, ButtonVariant};
pub use card::Card;
pub use common::{EmptyState, ErrorMessage, LoadingText, Spin};
pub use icon::{icon_glyph, Icon};
pub use menu::{Menu, MenuEntry};

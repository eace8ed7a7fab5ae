// Domain models (navigation, routing, user)
// Pure Rust, no framework dependencies

pub mod nav;
pub mod route;
pub mod user;

pub use nav::{NavNode, PageRef};
pub use route::{RouteEntry, RouteParams, RouteTable};
pub use user::CurrentUser;

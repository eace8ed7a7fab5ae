//! Route table flattening and URL dispatch

pub mod dispatch;
pub mod history;
pub mod table;

pub use dispatch::{dispatch, match_path, RouteOutcome};
pub use history::HistoryMode;
pub use table::{flatten_routes, route_table_for_layout};

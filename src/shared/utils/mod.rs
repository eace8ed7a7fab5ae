pub mod paths;

pub use paths::{is_absolute_url, is_external_path, join_path};

// Shared services
pub mod admin_service;
pub mod transport;

pub use admin_service::AdminService;
pub use transport::{DefaultTransport, HttpMethod, PreparedRequest, Transport};

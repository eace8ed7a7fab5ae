pub mod errors;
pub mod constants;
pub mod logging;
pub mod menu;
pub mod nav_data;
pub mod routing;
pub mod services;
pub mod utils;

// Available in fullstack mode (both client and server)
pub mod hooks;
pub mod state;

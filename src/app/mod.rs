pub mod components;
pub mod layouts;
pub mod pages;

// Root component with router and shell-wide context
pub use pages::routes::App;

pub mod api;
pub mod browser;
pub mod filter;
pub mod item_browser;
pub mod loader;
pub mod render;
pub mod state;

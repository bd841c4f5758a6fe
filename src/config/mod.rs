//! Configuration module for the StockSight application.

mod api;
mod debug;

// Public
pub mod constants;

// Re-export commonly used items
pub use api::{API, ApiConfig};
pub use debug::DF;

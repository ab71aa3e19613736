// Library exports for integration tests and the desktop binary

pub mod catalog;
pub mod config;
pub mod listing;
pub mod ui;

// Re-export AppContext at crate root for easier access
pub use ui::AppContext;

// Test support (only available with test-utils feature)
#[cfg(feature = "test-utils")]
pub mod test_support;

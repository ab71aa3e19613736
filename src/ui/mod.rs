pub mod app;
pub mod app_context;
pub mod components;
pub mod format;
pub mod listing;

pub use app::*;
pub use app_context::{use_catalog_client, AppContext};
pub use components::*;
pub use listing::{use_listing, Listing, ListingView, TaskScheduler};

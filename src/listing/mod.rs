//! Paginated search-list controller shared by the artist and music listings.
//!
//! A listing page owns one [`ListController`]. User actions (keystrokes,
//! submit, clear, next/previous page, retry) mutate it and return a
//! [`Dispatch`] describing the fetches to start. The UI runs those against a
//! [`CatalogSource`](crate::catalog::CatalogSource) and feeds the results
//! back; responses for superseded requests are dropped by sequence number.

mod controller;
mod cursor;
mod debounce;
mod search;

use std::time::Duration;

pub use controller::{
    CountFetch, CountState, Dispatch, ListController, ListFetch, ListMode, ListState, ListStatus,
};
pub use cursor::{Direction, PageCursor, PageRequest, PageVariables};
pub use debounce::{CancelHandle, Debouncer, Scheduler};
pub use search::{ilike_pattern, InputTicket, SearchQuery};

/// Items per page on the artist and music listings
pub const PAGE_SIZE: u32 = 12;

/// Tracks per page on an artist's detail page
pub const ARTIST_TRACKS_PAGE_SIZE: u32 = 10;

/// Quiet period before a search term is committed
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

pub mod client;
pub mod models;
pub mod queries;
pub mod source;

pub use client::{CatalogClient, CatalogError};
pub use models::{Artist, ArtistProfile, ArtistRef, Connection, Edge, Music, PageInfo};
pub use source::{ArtistMusics, CatalogSource};

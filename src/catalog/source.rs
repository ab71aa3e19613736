use super::client::{CatalogClient, CatalogError};
use super::models::{Artist, Connection, Music};
use crate::listing::{CountFetch, ListFetch};

/// Data source a listing page is driven through (allows mocking for tests)
#[async_trait::async_trait]
pub trait CatalogSource<T>: Send + Sync {
    async fn fetch_page(&self, fetch: &ListFetch) -> Result<Connection<T>, CatalogError>;
    async fn fetch_count(&self, fetch: &CountFetch) -> Result<u64, CatalogError>;
}

#[async_trait::async_trait]
impl CatalogSource<Artist> for CatalogClient {
    async fn fetch_page(&self, fetch: &ListFetch) -> Result<Connection<Artist>, CatalogError> {
        self.artists_page(&fetch.mode, &fetch.page).await
    }

    async fn fetch_count(&self, fetch: &CountFetch) -> Result<u64, CatalogError> {
        self.artists_count(&fetch.mode).await
    }
}

#[async_trait::async_trait]
impl CatalogSource<Music> for CatalogClient {
    async fn fetch_page(&self, fetch: &ListFetch) -> Result<Connection<Music>, CatalogError> {
        self.musics_page(&fetch.mode, &fetch.page).await
    }

    async fn fetch_count(&self, fetch: &CountFetch) -> Result<u64, CatalogError> {
        self.musics_count(&fetch.mode).await
    }
}

/// Tracks belonging to one artist, newest first. Browse only.
#[derive(Clone)]
pub struct ArtistMusics {
    client: CatalogClient,
    artist_id: String,
}

impl ArtistMusics {
    pub fn new(client: CatalogClient, artist_id: impl Into<String>) -> Self {
        Self {
            client,
            artist_id: artist_id.into(),
        }
    }

    pub fn artist_id(&self) -> &str {
        &self.artist_id
    }
}

#[async_trait::async_trait]
impl CatalogSource<Music> for ArtistMusics {
    async fn fetch_page(&self, fetch: &ListFetch) -> Result<Connection<Music>, CatalogError> {
        if fetch.mode.is_search() {
            return Err(CatalogError::InvalidInput(
                "an artist's tracks cannot be searched".to_string(),
            ));
        }
        self.client.artist_musics(&self.artist_id, &fetch.page).await
    }

    async fn fetch_count(&self, _fetch: &CountFetch) -> Result<u64, CatalogError> {
        self.client.artist_musics_count(&self.artist_id).await
    }
}

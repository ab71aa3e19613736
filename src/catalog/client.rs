use super::models::{Artist, ArtistProfile, ArtistRef, Connection, Music};
use super::queries;
use crate::config::Config;
use crate::listing::{ListMode, PageRequest, PageVariables};
use reqwest::{Client, Error as ReqwestError, StatusCode};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("GraphQL error: {0}")]
    GraphQl(String),
    #[error("Request rejected by the catalog, check the anon key")]
    Unauthorized,
    #[error("API rate limit exceeded")]
    RateLimit,
    #[error("Unexpected response status: {0}")]
    Status(StatusCode),
    #[error("No data returned for {0}")]
    EmptyResponse(&'static str),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

#[derive(Serialize)]
struct GraphQlRequest<'a, V> {
    query: &'a str,
    variables: &'a V,
}

#[derive(Deserialize)]
struct GraphQlResponse<D> {
    data: Option<D>,
    #[serde(default)]
    errors: Vec<GraphQlErrorEntry>,
}

#[derive(Deserialize)]
struct GraphQlErrorEntry {
    message: String,
}

/// `data` of every collection query: a single `<table>Collection` field
#[derive(Deserialize)]
struct CollectionData<T> {
    #[serde(alias = "artistsCollection", alias = "musicsCollection")]
    collection: T,
}

#[derive(Serialize)]
struct NoVariables {}

#[derive(Serialize)]
struct SearchFilter {
    search: String,
}

#[derive(Serialize)]
struct SearchVariables {
    search: String,
    first: Option<u32>,
    after: Option<String>,
}

#[derive(Serialize)]
struct SlugVariables<'a> {
    slug: &'a str,
}

#[derive(Serialize)]
struct IdVariables<'a> {
    id: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ArtistVariables<'a> {
    artist_id: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ArtistPageVariables<'a> {
    artist_id: &'a str,
    #[serde(flatten)]
    page: PageVariables,
}

/// Search documents only take forward arguments
fn search_variables(search: String, page: &PageRequest) -> Result<SearchVariables, CatalogError> {
    match page {
        PageRequest::Forward { after, size } => Ok(SearchVariables {
            search,
            first: Some(*size),
            after: after.clone(),
        }),
        PageRequest::Backward { .. } => Err(CatalogError::InvalidInput(
            "search results can only be paged forward".to_string(),
        )),
    }
}

/// Client for the catalog's GraphQL endpoint
#[derive(Clone)]
pub struct CatalogClient {
    client: Client,
    endpoint: String,
    anon_key: Option<String>,
}

impl CatalogClient {
    pub fn new(endpoint: impl Into<String>, anon_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            anon_key,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.graphql_url.clone(), config.anon_key.clone())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn execute<V, D>(
        &self,
        operation: &'static str,
        query: &str,
        variables: &V,
    ) -> Result<D, CatalogError>
    where
        V: Serialize,
        D: DeserializeOwned,
    {
        debug!("📡 GraphQL {} -> {}", operation, self.endpoint);

        let mut request = self
            .client
            .post(&self.endpoint)
            .json(&GraphQlRequest { query, variables });
        if let Some(key) = &self.anon_key {
            request = request.header("apiKey", key);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            warn!("✗ Catalog rejected {}: {}", operation, status);
            return Err(CatalogError::Unauthorized);
        } else if status == StatusCode::TOO_MANY_REQUESTS {
            warn!("✗ Catalog rate limit exceeded");
            return Err(CatalogError::RateLimit);
        } else if !status.is_success() {
            warn!("✗ Catalog error for {}: {}", operation, status);
            return Err(CatalogError::Status(status));
        }

        let body = response.text().await?;
        let parsed: GraphQlResponse<D> = serde_json::from_str(&body)?;

        if !parsed.errors.is_empty() {
            let message = parsed
                .errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join("; ");
            warn!("✗ GraphQL {} failed: {}", operation, message);
            return Err(CatalogError::GraphQl(message));
        }

        parsed.data.ok_or(CatalogError::EmptyResponse(operation))
    }

    async fn collection_page<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        browse_query: &str,
        search_query: &str,
        mode: &ListMode,
        page: &PageRequest,
    ) -> Result<Connection<T>, CatalogError> {
        let data: CollectionData<Connection<T>> = match mode.pattern() {
            None => {
                self.execute(operation, browse_query, &page.variables())
                    .await?
            }
            Some(search) => {
                let variables = search_variables(search, page)?;
                self.execute(operation, search_query, &variables).await?
            }
        };
        Ok(data.collection)
    }

    /// There is no totalCount on the backend, so a count is the number of
    /// ids the filter matches.
    async fn collection_count(
        &self,
        operation: &'static str,
        browse_query: &str,
        search_query: &str,
        mode: &ListMode,
    ) -> Result<u64, CatalogError> {
        let data: CollectionData<Connection<IgnoredAny>> = match mode.pattern() {
            None => self.execute(operation, browse_query, &NoVariables {}).await?,
            Some(search) => {
                self.execute(operation, search_query, &SearchFilter { search })
                    .await?
            }
        };
        Ok(data.collection.edges.len() as u64)
    }

    async fn first_node<V, T>(
        &self,
        operation: &'static str,
        query: &str,
        variables: &V,
    ) -> Result<Option<T>, CatalogError>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let data: CollectionData<Connection<T>> = self.execute(operation, query, variables).await?;
        Ok(data.collection.into_nodes().into_iter().next())
    }

    pub async fn artists_page(
        &self,
        mode: &ListMode,
        page: &PageRequest,
    ) -> Result<Connection<Artist>, CatalogError> {
        self.collection_page(
            "artists page",
            queries::ARTISTS_PAGINATED,
            queries::SEARCH_ARTISTS,
            mode,
            page,
        )
        .await
    }

    pub async fn artists_count(&self, mode: &ListMode) -> Result<u64, CatalogError> {
        self.collection_count(
            "artists count",
            queries::ARTISTS_COUNT,
            queries::SEARCH_ARTISTS_COUNT,
            mode,
        )
        .await
    }

    pub async fn featured_artists(&self) -> Result<Vec<Artist>, CatalogError> {
        let data: CollectionData<Connection<Artist>> = self
            .execute("featured artists", queries::FEATURED_ARTISTS, &NoVariables {})
            .await?;
        Ok(data.collection.into_nodes())
    }

    pub async fn artist_by_slug(&self, slug: &str) -> Result<Option<ArtistProfile>, CatalogError> {
        self.first_node("artist by slug", queries::ARTIST_BY_SLUG, &SlugVariables { slug })
            .await
    }

    pub async fn artist_for_music(&self, artist_id: &str) -> Result<Option<ArtistRef>, CatalogError> {
        self.first_node(
            "artist for music",
            queries::ARTIST_FOR_MUSIC,
            &ArtistVariables { artist_id },
        )
        .await
    }

    pub async fn artist_musics(
        &self,
        artist_id: &str,
        page: &PageRequest,
    ) -> Result<Connection<Music>, CatalogError> {
        let variables = ArtistPageVariables {
            artist_id,
            page: page.variables(),
        };
        let data: CollectionData<Connection<Music>> = self
            .execute("artist musics", queries::ARTIST_MUSICS, &variables)
            .await?;
        Ok(data.collection)
    }

    pub async fn artist_musics_count(&self, artist_id: &str) -> Result<u64, CatalogError> {
        let data: CollectionData<Connection<IgnoredAny>> = self
            .execute(
                "artist musics count",
                queries::ARTIST_MUSICS_COUNT,
                &ArtistVariables { artist_id },
            )
            .await?;
        Ok(data.collection.edges.len() as u64)
    }

    pub async fn musics_page(
        &self,
        mode: &ListMode,
        page: &PageRequest,
    ) -> Result<Connection<Music>, CatalogError> {
        self.collection_page(
            "musics page",
            queries::MUSICS_PAGINATED,
            queries::SEARCH_MUSICS,
            mode,
            page,
        )
        .await
    }

    pub async fn musics_count(&self, mode: &ListMode) -> Result<u64, CatalogError> {
        self.collection_count(
            "musics count",
            queries::MUSICS_COUNT,
            queries::SEARCH_MUSICS_COUNT,
            mode,
        )
        .await
    }

    pub async fn featured_musics(&self) -> Result<Vec<Music>, CatalogError> {
        let data: CollectionData<Connection<Music>> = self
            .execute("featured musics", queries::FEATURED_MUSICS, &NoVariables {})
            .await?;
        Ok(data.collection.into_nodes())
    }

    pub async fn music_by_slug(&self, slug: &str) -> Result<Option<Music>, CatalogError> {
        self.first_node("music by slug", queries::MUSIC_BY_SLUG, &SlugVariables { slug })
            .await
    }

    pub async fn music_by_id(&self, id: &str) -> Result<Option<Music>, CatalogError> {
        self.first_node("music by id", queries::MUSIC_BY_ID, &IdVariables { id })
            .await
    }
}

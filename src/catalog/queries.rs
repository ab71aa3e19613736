//! GraphQL documents for the catalog endpoint.
//!
//! Collections follow the pg_graphql connection shape: `edges { node cursor }`
//! plus `pageInfo`. Forward pages use `first`/`after`, backward pages use
//! `last`/`before`; search documents accept forward arguments only.

pub const ARTISTS_PAGINATED: &str = r#"
query GetArtistsPaginated($first: Int, $after: Cursor, $last: Int, $before: Cursor) {
  artistsCollection(
    first: $first,
    after: $after,
    last: $last,
    before: $before,
    orderBy: { name: AscNullsLast }
  ) {
    edges {
      node { id name description image slug created_at }
      cursor
    }
    pageInfo { hasNextPage hasPreviousPage startCursor endCursor }
  }
}
"#;

pub const ARTISTS_COUNT: &str = r#"
query GetArtistsCount {
  artistsCollection {
    edges { node { id } }
  }
}
"#;

pub const SEARCH_ARTISTS: &str = r#"
query SearchArtists($search: String!, $first: Int, $after: Cursor) {
  artistsCollection(
    first: $first,
    after: $after,
    filter: { name: { ilike: $search } }
  ) {
    edges {
      node { id name description image slug created_at }
      cursor
    }
    pageInfo { hasNextPage hasPreviousPage startCursor endCursor }
  }
}
"#;

pub const SEARCH_ARTISTS_COUNT: &str = r#"
query SearchArtistsCount($search: String!) {
  artistsCollection(filter: { name: { ilike: $search } }) {
    edges { node { id } }
  }
}
"#;

pub const FEATURED_ARTISTS: &str = r#"
query GetFeaturedArtists {
  artistsCollection(last: 6) {
    edges {
      node { id name description image slug }
    }
  }
}
"#;

pub const ARTIST_BY_SLUG: &str = r#"
query GetArtistBySlug($slug: String!) {
  artistsCollection(filter: { slug: { eq: $slug } }, first: 1) {
    edges {
      node { id name description image slug created_at updated_at }
    }
  }
}
"#;

pub const ARTIST_FOR_MUSIC: &str = r#"
query GetArtistForMusic($artistId: BigInt!) {
  artistsCollection(filter: { id: { eq: $artistId } }, first: 1) {
    edges {
      node { id name slug image }
    }
  }
}
"#;

pub const ARTIST_MUSICS: &str = r#"
query GetArtistMusics($artistId: BigInt!, $first: Int, $after: Cursor, $last: Int, $before: Cursor) {
  musicsCollection(
    filter: { artist_id: { eq: $artistId } }
    first: $first
    after: $after
    last: $last
    before: $before
    orderBy: [{ created_at: DescNullsLast }]
  ) {
    edges {
      node { id name slug lyrics image file artist_id created_at updated_at }
      cursor
    }
    pageInfo { hasNextPage hasPreviousPage startCursor endCursor }
  }
}
"#;

pub const ARTIST_MUSICS_COUNT: &str = r#"
query GetArtistMusicsCount($artistId: BigInt!) {
  musicsCollection(filter: { artist_id: { eq: $artistId } }) {
    edges { node { id } }
  }
}
"#;

pub const MUSICS_PAGINATED: &str = r#"
query GetMusicsPaginated($first: Int, $after: Cursor, $last: Int, $before: Cursor) {
  musicsCollection(
    first: $first,
    after: $after,
    last: $last,
    before: $before,
    orderBy: [{ created_at: DescNullsLast }]
  ) {
    edges {
      node { id name slug lyrics image file artist_id created_at updated_at }
      cursor
    }
    pageInfo { hasNextPage hasPreviousPage startCursor endCursor }
  }
}
"#;

pub const MUSICS_COUNT: &str = r#"
query GetMusicsCount {
  musicsCollection {
    edges { node { id } }
  }
}
"#;

pub const SEARCH_MUSICS: &str = r#"
query SearchMusics($search: String!, $first: Int, $after: Cursor) {
  musicsCollection(
    first: $first,
    after: $after,
    filter: { name: { ilike: $search } }
  ) {
    edges {
      node { id name slug lyrics image file artist_id created_at updated_at }
      cursor
    }
    pageInfo { hasNextPage hasPreviousPage startCursor endCursor }
  }
}
"#;

pub const SEARCH_MUSICS_COUNT: &str = r#"
query SearchMusicsCount($search: String!) {
  musicsCollection(filter: { name: { ilike: $search } }) {
    edges { node { id } }
  }
}
"#;

pub const FEATURED_MUSICS: &str = r#"
query GetFeaturedMusics {
  musicsCollection(
    first: 8,
    orderBy: [{ created_at: DescNullsLast }]
  ) {
    edges {
      node { id name slug lyrics image file artist_id created_at updated_at }
      cursor
    }
    pageInfo { hasNextPage hasPreviousPage startCursor endCursor }
  }
}
"#;

pub const MUSIC_BY_SLUG: &str = r#"
query GetMusicBySlug($slug: String!) {
  musicsCollection(filter: { slug: { eq: $slug } }, first: 1) {
    edges {
      node { id name slug lyrics image file artist_id created_at updated_at }
    }
  }
}
"#;

pub const MUSIC_BY_ID: &str = r#"
query GetMusicById($id: BigInt!) {
  musicsCollection(filter: { id: { eq: $id } }, first: 1) {
    edges {
      node { id name slug lyrics image file artist_id created_at updated_at }
    }
  }
}
"#;

use serde::{Deserialize, Deserializer, Serialize};

/// Cursor metadata returned alongside every page of a collection
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub start_cursor: Option<String>,
    pub end_cursor: Option<String>,
}

/// A single entry of a connection: the entity plus its position token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Edge<T> {
    pub node: T,
    #[serde(default)]
    pub cursor: Option<String>,
}

/// Connection-style page of results
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Connection<T> {
    pub edges: Vec<Edge<T>>,
    #[serde(default)]
    pub page_info: PageInfo,
}

impl<T> Connection<T> {
    pub fn into_nodes(self) -> Vec<T> {
        self.edges.into_iter().map(|edge| edge.node).collect()
    }
}

/// Artist as listed on the artists page and in cards
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Artist {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    pub slug: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Artist with the extra profile fields shown on the detail page.
///
/// The profile columns are optional on the backend, so everything beyond the
/// listing fields may be absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArtistProfile {
    #[serde(flatten)]
    pub artist: Artist,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub social_links: Option<String>,
}

/// Short artist reference shown on a music page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArtistRef {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// A track in the catalog. `file` is the playable audio URL.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Music {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub lyrics: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    pub file: String,
    #[serde(deserialize_with = "de_id")]
    pub artist_id: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Postgres BigInt ids come back as JSON strings, plain ints as numbers
fn de_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artist_ids_accept_strings_and_numbers() {
        let from_string: Artist =
            serde_json::from_str(r#"{"id":"42","name":"Luna Echo","slug":"luna-echo"}"#).unwrap();
        let from_number: Artist =
            serde_json::from_str(r#"{"id":42,"name":"Luna Echo","slug":"luna-echo"}"#).unwrap();
        assert_eq!(from_string.id, "42");
        assert_eq!(from_number.id, "42");
        assert_eq!(from_string.description, None);
    }

    #[test]
    fn test_connection_parses_page_info() {
        let json = r#"{
            "edges": [
                {"node": {"id": "1", "name": "Neon Dreams", "slug": "neon-dreams",
                          "file": "https://cdn.example/neon.mp3", "artist_id": "7",
                          "lyrics": null, "image": null}, "cursor": "WzFd"}
            ],
            "pageInfo": {"hasNextPage": true, "hasPreviousPage": false,
                         "startCursor": "WzFd", "endCursor": "WzFd"}
        }"#;
        let page: Connection<Music> = serde_json::from_str(json).unwrap();
        assert!(page.page_info.has_next_page);
        assert_eq!(page.page_info.end_cursor.as_deref(), Some("WzFd"));
        assert_eq!(page.edges[0].cursor.as_deref(), Some("WzFd"));

        let tracks = page.into_nodes();
        assert_eq!(tracks[0].artist_id, "7");
        assert_eq!(tracks[0].file, "https://cdn.example/neon.mp3");
    }

    #[test]
    fn test_artist_profile_flattens_listing_fields() {
        let json = r#"{"id":"3","name":"Coastal Dreams","slug":"coastal-dreams",
                       "description":"Dream pop","image":null,"created_at":"2024-05-01T00:00:00",
                       "updated_at":"2024-06-01T00:00:00"}"#;
        let detail: ArtistProfile = serde_json::from_str(json).unwrap();
        assert_eq!(detail.artist.name, "Coastal Dreams");
        assert_eq!(detail.artist.description.as_deref(), Some("Dream pop"));
        assert_eq!(detail.updated_at.as_deref(), Some("2024-06-01T00:00:00"));
        assert_eq!(detail.genre, None);
    }
}

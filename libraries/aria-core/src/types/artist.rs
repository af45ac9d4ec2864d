/// Artist domain type
use crate::types::ArtistId;
use serde::{Deserialize, Serialize};

/// Recording artist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    /// Unique artist identifier
    pub id: ArtistId,

    /// Artist name
    pub name: String,

    /// Cover/portrait image URL
    pub image_url: String,

    /// Free-form biography
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Fields for creating an artist
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateArtist {
    /// Artist name
    pub name: String,
    /// Cover/portrait image URL
    pub image_url: String,
    /// Free-form biography
    #[serde(default)]
    pub description: Option<String>,
}

/// Partial update for an artist; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArtist {
    /// New artist name
    pub name: Option<String>,
    /// New image URL
    pub image_url: Option<String>,
    /// New biography
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artist_json_is_camel_case() {
        let artist = Artist {
            id: ArtistId::new(1),
            name: "Ada Vale".to_string(),
            image_url: "https://img.example/ada.jpg".to_string(),
            description: None,
        };

        let json = serde_json::to_value(&artist).unwrap();
        assert_eq!(json["imageUrl"], "https://img.example/ada.jpg");
        assert!(json.get("description").is_none());
    }
}

use std::fmt;

use concat_string::concat_string;
use serde::{Deserialize, Serialize};

/// Identifier of a playlist as returned by the sharing endpoint. The wire
/// format is not consistent about its type, so both strings and numbers are
/// accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlaylistId {
    Text(String),
    Number(u64),
}

impl fmt::Display for PlaylistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(id) => id.fmt(f),
            Self::Number(id) => id.fmt(f),
        }
    }
}

/// One playlist record of the collection returned by the sharing endpoint.
/// Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: PlaylistId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub image: Option<String>,
    pub tracks: u32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub spotify_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub owner: Option<String>,
}

impl Playlist {
    /// The endpoint forwards the Spotify playlist id verbatim, so a missing
    /// outbound link can be rebuilt from it. Applied once at ingestion.
    pub fn ensure_spotify_url(mut self) -> Self {
        if self.spotify_url.is_none() {
            self.spotify_url =
                Some(concat_string!("https://open.spotify.com/playlist/", self.id.to_string()));
        }
        self
    }

    /// Description as displayed. The endpoint emits an empty string for
    /// playlists without one.
    pub fn display_description(&self) -> Option<&str> {
        self.description.as_deref().filter(|description| !description.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(
        r#"{
            "id": "37i9dQZF1DXcBWIGoYBM5M",
            "name": "Today's Top Hits",
            "description": "The hottest 50.",
            "image": "https://i.scdn.co/image/abc",
            "tracks": 50,
            "spotify_url": "https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M",
            "owner": "Spotify"
        }"#,
        Playlist {
            id: PlaylistId::Text("37i9dQZF1DXcBWIGoYBM5M".into()),
            name: "Today's Top Hits".into(),
            description: Some("The hottest 50.".into()),
            image: Some("https://i.scdn.co/image/abc".into()),
            tracks: 50,
            spotify_url: Some(
                "https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M".into()
            ),
            owner: Some("Spotify".into()),
        }
    )]
    #[case(
        r#"{"id": 42, "name": "Mix", "tracks": 7}"#,
        Playlist {
            id: PlaylistId::Number(42),
            name: "Mix".into(),
            description: None,
            image: None,
            tracks: 7,
            spotify_url: None,
            owner: None,
        }
    )]
    fn test_deserialize(#[case] json: &str, #[case] playlist: Playlist) {
        assert_eq!(serde_json::from_str::<Playlist>(json).unwrap(), playlist);
    }

    #[rstest]
    #[case(PlaylistId::Text("abc123".into()), "abc123")]
    #[case(PlaylistId::Number(42), "42")]
    fn test_id_display(#[case] id: PlaylistId, #[case] display: &str) {
        assert_eq!(id.to_string(), display);
    }

    #[rstest]
    #[case(
        PlaylistId::Text("37i9dQZF1DXcBWIGoYBM5M".into()),
        None,
        "https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M"
    )]
    #[case(
        PlaylistId::Number(42),
        None,
        "https://open.spotify.com/playlist/42"
    )]
    #[case(
        PlaylistId::Text("ignored".into()),
        Some("https://open.spotify.com/playlist/kept".to_owned()),
        "https://open.spotify.com/playlist/kept"
    )]
    fn test_ensure_spotify_url(
        #[case] id: PlaylistId,
        #[case] spotify_url: Option<String>,
        #[case] expected: &str,
    ) {
        let playlist = Playlist {
            id,
            name: "Mix".into(),
            description: None,
            image: None,
            tracks: 0,
            spotify_url,
            owner: None,
        }
        .ensure_spotify_url();
        assert_eq!(playlist.spotify_url.as_deref(), Some(expected));
    }

    #[rstest]
    #[case(None, None)]
    #[case(Some("".to_owned()), None)]
    #[case(Some("High energy".to_owned()), Some("High energy"))]
    fn test_display_description(
        #[case] description: Option<String>,
        #[case] displayed: Option<&str>,
    ) {
        let playlist = Playlist {
            id: PlaylistId::Number(1),
            name: "Mix".into(),
            description,
            image: None,
            tracks: 0,
            spotify_url: None,
            owner: None,
        };
        assert_eq!(playlist.display_description(), displayed);
    }
}

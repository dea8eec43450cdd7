use anyhow::Result;
use gloo::net::http;
use mixcase_types::Playlist;

/// Origin of the playlist sharing endpoint. The whole collection is served
/// from the bare origin, without path, query or auth.
pub const API_ORIGIN: &str = "https://spotify-playlist-sharing.onrender.com";

pub async fn fetch_playlists() -> Result<Vec<Playlist>> {
    let response = http::Request::get(API_ORIGIN).send().await?;
    if !response.ok() {
        anyhow::bail!("HTTP error! status: {}", response.status());
    }
    let playlists: Vec<Playlist> = response.json().await?;
    Ok(playlists.into_iter().map(Playlist::ensure_spotify_url).collect())
}

use crate::playlist::Playlist;

fn matches(playlist: &Playlist, lowercase_term: &str) -> bool {
    playlist.name.to_lowercase().contains(lowercase_term)
        || playlist
            .description
            .as_ref()
            .is_some_and(|description| description.to_lowercase().contains(lowercase_term))
}

/// Derive the displayed list from the base list and the current search term:
/// the subset whose name or description contains the term, case-insensitively,
/// in fetch order. The empty term is the identity. The base list is never
/// mutated.
pub fn filter(playlists: &[Playlist], term: &str) -> Vec<Playlist> {
    if term.is_empty() {
        return playlists.to_vec();
    }
    let term = term.to_lowercase();
    playlists.iter().filter(|playlist| matches(playlist, &term)).cloned().collect()
}

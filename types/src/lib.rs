#![deny(clippy::all)]

pub mod playlist;
pub mod search;

pub use playlist::{Playlist, PlaylistId};

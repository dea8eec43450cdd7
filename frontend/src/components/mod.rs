mod home;
mod loading;
mod navbar;
mod not_found;
mod playlists;

pub use home::Home;
pub use loading::Loading;
pub use navbar::Navbar;
pub use not_found::NotFound;
pub use playlists::Playlists;

use dioxus::prelude::*;

use crate::components::*;

#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(Navbar)]
    #[route("/")]
    Home {},
    #[route("/playlists")]
    Playlists {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

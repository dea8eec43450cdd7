use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "hero min-h-[60vh]",
            div { class: "hero-content text-center",
                div { class: "max-w-md",
                    h1 { class: "text-5xl font-bold text-base-content", "mixcase" }
                    p { class: "py-6 text-base-content",
                        "A small showcase of my public Spotify playlists."
                    }
                    Link { class: "btn btn-primary", to: Route::Playlists {}, "Browse playlists" }
                }
            }
        }
    }
}

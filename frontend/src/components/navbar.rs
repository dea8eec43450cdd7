use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div { class: "min-h-screen flex flex-col bg-base-100",
            div { class: "w-full navbar shadow bg-base-300 z-10",
                div { class: "navbar-start",
                    Link { class: "text-base-content btn btn-ghost text-xl", to: Route::Home {}, "mixcase" }
                }
                div { class: "navbar-end",
                    Link { class: "btn btn-ghost text-base", to: Route::Home {}, "Home" }
                    Link {
                        class: "btn btn-ghost text-base",
                        to: Route::Playlists {},
                        "My Playlists"
                    }
                }
            }
            div { class: "min-h-0 w-full flex-1", Outlet::<Route> {} }
        }
    }
}

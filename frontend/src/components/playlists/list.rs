use dioxus::prelude::*;
use mixcase_types::search;

use super::card::PlaylistCard;
use super::super::Loading;
use crate::client;
use crate::Route;

#[component]
pub fn Playlists() -> Element {
    let nav = navigator();
    let mut search_term = use_signal(String::default);

    let playlists_fut = use_resource(move || async move {
        client::fetch_playlists().await.map_err(|error| {
            tracing::error!("Error fetching playlists: {error:?}");
            error.to_string()
        })
    });

    match &*playlists_fut.read_unchecked() {
        Some(Ok(playlists)) => {
            let term = search_term();
            let filtered = search::filter(playlists, &term);
            let shown = filtered.len();
            let total = playlists.len();

            rsx! {
                div { class: "container mx-auto p-6",
                    div { class: "flex items-center gap-4 mb-6",
                        button {
                            class: "btn btn-ghost",
                            onclick: move |_| {
                                nav.push(Route::Home {});
                            },
                            svg {
                                class: "fill-none h-5 w-5 stroke-2 stroke-base-content",
                                xmlns: "http://www.w3.org/2000/svg",
                                view_box: "0 0 24 24",
                                path {
                                    stroke_linecap: "round",
                                    stroke_linejoin: "round",
                                    d: "M10.5 19.5 3 12m0 0 7.5-7.5M3 12h18"
                                }
                            }
                            "Back"
                        }
                        div { class: "grow flex justify-end",
                            label { class: "input input-bordered flex items-center gap-2 w-full max-w-xs",
                                input {
                                    r#type: "text",
                                    class: "grow",
                                    placeholder: "Search playlists...",
                                    value: "{search_term}",
                                    oninput: move |e: Event<FormData>| search_term.set(e.value())
                                }
                                svg {
                                    class: "fill-none h-4 w-4 stroke-2 stroke-base-content opacity-70",
                                    xmlns: "http://www.w3.org/2000/svg",
                                    view_box: "0 0 24 24",
                                    path {
                                        stroke_linecap: "round",
                                        stroke_linejoin: "round",
                                        d: "M21 21l-6-6m2-5a7 7 0 11-14 0 7 7 0 0114 0z"
                                    }
                                }
                                if !term.is_empty() {
                                    button {
                                        class: "btn btn-ghost btn-circle btn-xs",
                                        onclick: move |_| search_term.set(String::new()),
                                        svg {
                                            class: "fill-none h-4 w-4 stroke-2 stroke-base-content",
                                            xmlns: "http://www.w3.org/2000/svg",
                                            view_box: "0 0 24 24",
                                            path {
                                                stroke_linecap: "round",
                                                stroke_linejoin: "round",
                                                d: "M6 18L18 6M6 6l12 12"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    h1 { class: "text-3xl font-bold text-base-content mb-4", "My Playlists" }
                    if !term.is_empty() {
                        p { class: "text-sm text-base-content/70 mb-4",
                            "Showing {shown} of {total} playlists"
                        }
                    }
                    if filtered.is_empty() {
                        if term.is_empty() {
                            div { class: "text-center py-12",
                                h2 { class: "text-2xl font-bold text-base-content mb-2",
                                    "No playlists yet"
                                }
                                p { class: "text-base-content/70",
                                    "This account has no public playlists to show."
                                }
                            }
                        } else {
                            div { class: "text-center py-12 text-base-content/70",
                                "No playlists found matching \"{term}\""
                            }
                        }
                    } else {
                        div { class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6",
                            for playlist in filtered {
                                PlaylistCard { key: "{playlist.id}", playlist: playlist }
                            }
                        }
                    }
                }
            }
        }
        Some(Err(error)) => {
            rsx! {
                div { class: "container mx-auto p-6",
                    div { class: "alert alert-error",
                        span { class: "text-error-content", "Error: {error}" }
                    }
                }
            }
        }
        None => {
            rsx! {
                Loading {}
            }
        }
    }
}

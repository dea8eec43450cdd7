use dioxus::prelude::*;
use mixcase_types::Playlist;

#[component]
pub fn PlaylistCard(playlist: Playlist) -> Element {
    rsx! {
        div { class: "card bg-base-200 shadow-xl",
            if let Some(image) = &playlist.image {
                figure {
                    img {
                        class: "w-full h-48 object-cover",
                        src: "{image}",
                        alt: "{playlist.name}"
                    }
                }
            }
            div { class: "card-body",
                h3 { class: "card-title text-base-content", "{playlist.name}" }
                if let Some(description) = playlist.display_description() {
                    p { class: "text-sm text-base-content/70 whitespace-pre-line", "{description}" }
                }
                if let Some(owner) = &playlist.owner {
                    p { class: "text-xs text-base-content/50", "by {owner}" }
                }
                p { class: "text-sm text-base-content", "{playlist.tracks} tracks" }
                if let Some(spotify_url) = &playlist.spotify_url {
                    div { class: "card-actions justify-end",
                        a {
                            class: "btn btn-primary btn-sm",
                            href: "{spotify_url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "Open in Spotify"
                        }
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div { class: "text-center py-12",
            h2 { class: "text-2xl font-bold text-base-content", "Not found" }
            p { class: "py-2 text-base-content/70", "/{path}" }
        }
    }
}

use crate::ui::Route;
use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div { class: "container mx-auto p-6 text-center py-24",
            div { class: "text-gray-500 text-6xl mb-4", "404" }
            h1 { class: "text-2xl font-bold text-gray-300 mb-2", "Page not found" }
            p { class: "text-gray-500 mb-6", "Nothing lives at {path}." }
            Link {
                to: Route::Home {},
                class: "inline-block bg-blue-600 hover:bg-blue-700 text-white font-bold py-2 px-4 rounded",
                "Back to Home"
            }
        }
    }
}

use crate::ui::Route;
use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    rsx! {
        div { class: "container mx-auto p-6 max-w-3xl",
            h1 { class: "text-3xl font-bold text-white mb-6", "About encore" }
            p { class: "text-gray-300 mb-4",
                "encore is a place to discover independent artists. Browse the catalog, search for names you have heard of, and listen to full tracks straight from the artist's page."
            }
            p { class: "text-gray-400 mb-8",
                "Everything you see is served from the public catalog. New artists and tracks show up as soon as they are published."
            }
            div { class: "flex gap-4",
                Link {
                    to: Route::Artists {},
                    class: "inline-block bg-blue-600 hover:bg-blue-700 text-white font-bold py-2 px-4 rounded",
                    "Browse Artists"
                }
                Link {
                    to: Route::Musics {},
                    class: "inline-block bg-gray-700 hover:bg-gray-600 text-white font-bold py-2 px-4 rounded",
                    "Browse Music"
                }
            }
        }
    }
}

use crate::catalog::Artist;
use crate::ui::format::initial;
use crate::ui::Route;
use dioxus::prelude::*;

/// Individual artist card component
#[component]
pub fn ArtistCard(artist: Artist) -> Element {
    let card_class = "bg-gray-800 rounded-lg overflow-hidden shadow-lg hover:shadow-xl transition-shadow duration-300 cursor-pointer group";
    let description = artist
        .description
        .clone()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| "No description yet".to_string());

    rsx! {
        Link {
            to: Route::ArtistDetail { slug: artist.slug.clone() },
            class: "{card_class}",

            div { class: "aspect-square bg-gray-700 flex items-center justify-center relative",
                if let Some(image) = &artist.image {
                    img {
                        src: "{image}",
                        alt: "Photo of {artist.name}",
                        class: "w-full h-full object-cover",
                    }
                } else {
                    div { class: "w-24 h-24 rounded-full bg-gradient-to-br from-blue-500 to-purple-600 flex items-center justify-center text-4xl font-bold text-white",
                        "{initial(&artist.name)}"
                    }
                }
            }

            div { class: "p-4",
                h3 {
                    class: "font-bold text-white text-lg truncate group-hover:text-blue-300 transition-colors",
                    title: "{artist.name}",
                    "{artist.name}"
                }
                p { class: "text-gray-400 text-sm line-clamp-2 mt-1", "{description}" }
            }
        }
    }
}

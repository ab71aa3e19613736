use crate::catalog::Music;
use crate::ui::format::format_date;
use crate::ui::Route;
use dioxus::prelude::*;

/// Individual track card component
#[component]
pub fn MusicCard(music: Music) -> Element {
    let card_class = "bg-gray-800 rounded-lg overflow-hidden shadow-lg hover:shadow-xl transition-shadow duration-300 cursor-pointer group";
    let released = music.created_at.as_deref().and_then(format_date);

    rsx! {
        Link {
            to: Route::MusicDetail { slug: music.slug.clone() },
            class: "{card_class}",

            div { class: "aspect-square bg-gray-700 flex items-center justify-center relative",
                if let Some(image) = &music.image {
                    img {
                        src: "{image}",
                        alt: "Cover art for {music.name}",
                        class: "w-full h-full object-cover",
                    }
                } else {
                    div { class: "w-full h-full bg-gradient-to-br from-purple-700 to-blue-800 flex items-center justify-center",
                        div { class: "text-gray-200 text-5xl", "🎵" }
                    }
                }

                // Play overlay
                div { class: "absolute inset-0 bg-black/40 opacity-0 group-hover:opacity-100 transition-opacity flex items-center justify-center",
                    div { class: "bg-blue-600 rounded-full w-14 h-14 flex items-center justify-center text-white text-2xl",
                        "▶"
                    }
                }
            }

            div { class: "p-4",
                h3 {
                    class: "font-bold text-white text-lg truncate",
                    title: "{music.name}",
                    "{music.name}"
                }
                if let Some(released) = released {
                    p { class: "text-gray-500 text-xs mt-1", "{released}" }
                }
            }
        }
    }
}

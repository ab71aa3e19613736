use crate::ui::components::{ArtistCard, ErrorMessage, Loading, MusicCard};
use crate::ui::{use_catalog_client, Route};
use dioxus::prelude::*;

/// Landing page: hero plus the featured artists and newest tracks
#[component]
pub fn Home() -> Element {
    let client = use_catalog_client();

    let featured_artists = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.featured_artists().await }
        }
    });
    let latest_musics = use_resource(move || {
        let client = client.clone();
        async move { client.featured_musics().await }
    });

    rsx! {
        section { class: "bg-gradient-to-br from-blue-900 via-gray-900 to-purple-900 py-20",
            div { class: "container mx-auto px-6 text-center",
                h1 { class: "text-5xl font-bold text-white mb-4", "Hear what's next" }
                p { class: "text-xl text-gray-300 mb-8",
                    "Stream new music from independent artists, straight from the source."
                }
                div { class: "flex justify-center gap-4",
                    Link {
                        to: Route::Musics {},
                        class: "bg-blue-600 hover:bg-blue-700 text-white font-bold py-3 px-6 rounded-lg",
                        "Start Listening"
                    }
                    Link {
                        to: Route::Artists {},
                        class: "bg-gray-800 hover:bg-gray-700 text-white font-bold py-3 px-6 rounded-lg",
                        "Meet the Artists"
                    }
                }
            }
        }

        section { class: "container mx-auto p-6 mt-8",
            SectionHeading { title: "Featured Artists", to: Route::Artists {} }
            match featured_artists.read().as_ref() {
                None => rsx! {
                    Loading { message: "Loading artists..." }
                },
                Some(Err(e)) => rsx! {
                    ErrorMessage {
                        message: "Failed to load featured artists",
                        details: Some(e.to_string()),
                    }
                },
                Some(Ok(artists)) if artists.is_empty() => rsx! {
                    p { class: "text-gray-500", "No artists yet." }
                },
                Some(Ok(artists)) => rsx! {
                    div { class: "grid grid-cols-2 md:grid-cols-3 lg:grid-cols-6 gap-6",
                        for artist in artists.iter() {
                            ArtistCard { key: "{artist.id}", artist: artist.clone() }
                        }
                    }
                },
            }
        }

        section { class: "container mx-auto p-6 mt-8",
            SectionHeading { title: "Latest Music", to: Route::Musics {} }
            match latest_musics.read().as_ref() {
                None => rsx! {
                    Loading { message: "Loading music..." }
                },
                Some(Err(e)) => rsx! {
                    ErrorMessage {
                        message: "Failed to load the latest music",
                        details: Some(e.to_string()),
                    }
                },
                Some(Ok(musics)) if musics.is_empty() => rsx! {
                    p { class: "text-gray-500", "No tracks yet." }
                },
                Some(Ok(musics)) => rsx! {
                    div { class: "grid grid-cols-2 md:grid-cols-4 gap-6",
                        for music in musics.iter() {
                            MusicCard { key: "{music.id}", music: music.clone() }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn SectionHeading(title: String, to: Route) -> Element {
    rsx! {
        div { class: "flex items-center justify-between mb-6",
            h2 { class: "text-2xl font-bold text-white", "{title}" }
            Link { to, class: "text-blue-400 hover:text-blue-300 text-sm", "View all →" }
        }
    }
}

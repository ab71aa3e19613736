use crate::catalog::{ArtistRef, Music};
use crate::ui::components::{AudioPlayer, Loading};
use crate::ui::format::{format_date, initial};
use crate::ui::{use_catalog_client, Route};
use dioxus::prelude::*;
use tracing::{debug, warn};

/// Track page: cover, player, artist link and lyrics
#[component]
pub fn MusicDetail(slug: ReadSignal<String>) -> Element {
    let client = use_catalog_client();

    let music = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            let slug = slug();
            async move {
                debug!("Loading track {}", slug);
                client.music_by_slug(&slug).await
            }
        }
    });

    // The artist is looked up once the track is known. A failure here only
    // hides the artist link.
    let artist = use_resource(move || {
        let client = client.clone();
        let artist_id = music
            .read()
            .as_ref()
            .and_then(|result| result.as_ref().ok())
            .and_then(|music| music.as_ref())
            .map(|music| music.artist_id.clone());
        async move {
            let artist_id = artist_id?;
            match client.artist_for_music(&artist_id).await {
                Ok(artist) => artist,
                Err(e) => {
                    warn!("✗ Could not load artist {}: {}", artist_id, e);
                    None
                }
            }
        }
    });

    let artist = artist.read().as_ref().cloned().flatten();

    rsx! {
        div { class: "container mx-auto p-6",
            Link {
                to: Route::Musics {},
                class: "inline-block text-gray-400 hover:text-white mb-6",
                "← Back to Music"
            }
            match music.read().as_ref() {
                None => rsx! {
                    Loading { message: "Loading track..." }
                },
                Some(Err(e)) => rsx! {
                    TrackMissing { details: Some(e.to_string()) }
                },
                Some(Ok(None)) => rsx! {
                    TrackMissing { details: None }
                },
                Some(Ok(Some(music))) => rsx! {
                    TrackView { key: "{music.id}", music: music.clone(), artist: artist.clone() }
                },
            }
        }
    }
}

#[component]
fn TrackMissing(details: Option<String>) -> Element {
    rsx! {
        div { class: "text-center py-12",
            div { class: "text-gray-400 text-6xl mb-4", "🎵" }
            h2 { class: "text-2xl font-bold text-gray-300 mb-2", "Track not found" }
            p { class: "text-gray-500 mb-4",
                "The track you're looking for doesn't exist or has been removed."
            }
            if let Some(details) = details {
                p { class: "text-sm text-red-300 mb-4", "{details}" }
            }
            Link {
                to: Route::Musics {},
                class: "inline-block bg-blue-600 hover:bg-blue-700 text-white font-bold py-2 px-4 rounded",
                "Browse Music"
            }
        }
    }
}

#[component]
fn TrackView(music: Music, artist: Option<ArtistRef>) -> Element {
    let released = music.created_at.as_deref().and_then(format_date);
    let lyrics = music
        .lyrics
        .clone()
        .filter(|lyrics| !lyrics.trim().is_empty());

    rsx! {
        div { class: "grid grid-cols-1 lg:grid-cols-3 gap-8",
            div { class: "lg:col-span-1",
                div { class: "aspect-square bg-gray-700 rounded-lg overflow-hidden shadow-lg flex items-center justify-center",
                    if let Some(image) = &music.image {
                        img {
                            src: "{image}",
                            alt: "Cover art for {music.name}",
                            class: "w-full h-full object-cover",
                        }
                    } else {
                        div { class: "text-gray-400 text-8xl", "🎵" }
                    }
                }
            }

            div { class: "lg:col-span-2",
                h1 { class: "text-4xl font-bold text-white mb-2", "{music.name}" }
                if let Some(artist) = &artist {
                    Link {
                        to: Route::ArtistDetail { slug: artist.slug.clone() },
                        class: "inline-flex items-center gap-3 text-gray-300 hover:text-white mb-2",
                        div { class: "w-8 h-8 rounded-full bg-gray-700 overflow-hidden flex items-center justify-center",
                            if let Some(image) = &artist.image {
                                img { src: "{image}", class: "w-full h-full object-cover" }
                            } else {
                                span { class: "text-sm font-bold", "{initial(&artist.name)}" }
                            }
                        }
                        span { class: "text-lg", "{artist.name}" }
                    }
                }
                if let Some(released) = released {
                    p { class: "text-gray-500 text-sm mb-6", "Released {released}" }
                }

                AudioPlayer {
                    src: music.file.clone(),
                    title: music.name.clone(),
                    artist: artist.as_ref().map(|artist| artist.name.clone()),
                }

                div { class: "mt-8",
                    h2 { class: "text-xl font-bold text-white mb-3", "Lyrics" }
                    if let Some(lyrics) = lyrics {
                        p { class: "text-gray-300 whitespace-pre-line leading-relaxed", "{lyrics}" }
                    } else {
                        p { class: "text-gray-500 italic", "No lyrics available for this track." }
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
enum PlayerState {
    Loading,
    Ready,
    Playing,
    Paused,
    Ended,
    Failed,
}

/// Native audio element with a status line underneath
#[component]
pub fn AudioPlayer(src: String, title: String, artist: Option<String>) -> Element {
    let mut state = use_signal(|| PlayerState::Loading);

    if src.trim().is_empty() {
        return rsx! {
            div { class: "bg-gray-800 rounded-lg p-4 text-gray-400", "No audio file available for this track." }
        };
    }

    let status = match state() {
        PlayerState::Loading => "Loading audio...",
        PlayerState::Ready => "Ready to play",
        PlayerState::Playing => "Playing",
        PlayerState::Paused => "Paused",
        PlayerState::Ended => "Finished",
        PlayerState::Failed => "This track could not be played",
    };
    let subtitle = match &artist {
        Some(artist) => format!("{} · {}", title, artist),
        None => title.clone(),
    };

    rsx! {
        div { class: "bg-gray-800 rounded-lg p-4 shadow-lg",
            p { class: "text-white font-medium truncate mb-3", "{subtitle}" }
            audio {
                class: "w-full",
                src: "{src}",
                controls: true,
                preload: "metadata",
                oncanplay: move |_| {
                    if state() == PlayerState::Loading {
                        state.set(PlayerState::Ready);
                    }
                },
                onplay: move |_| state.set(PlayerState::Playing),
                onpause: move |_| {
                    if state() != PlayerState::Ended {
                        state.set(PlayerState::Paused);
                    }
                },
                onended: move |_| state.set(PlayerState::Ended),
                onerror: move |_| state.set(PlayerState::Failed),
            }
            p {
                class: if state() == PlayerState::Failed { "mt-2 text-sm text-red-300" } else { "mt-2 text-sm text-gray-400" },
                "{status}"
            }
        }
    }
}

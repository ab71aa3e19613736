pub mod about;
pub mod app;
pub mod artist_card;
pub mod artist_detail;
pub mod artists;
pub mod audio_player;
pub mod home;
pub mod listing_view;
pub mod music_card;
pub mod music_detail;
pub mod musics;
pub mod navbar;
pub mod not_found;
pub mod status;

pub use about::About;
pub use app::App;
pub use artist_card::ArtistCard;
pub use artist_detail::ArtistDetail;
pub use artists::Artists;
pub use audio_player::AudioPlayer;
pub use home::Home;
pub use music_card::MusicCard;
pub use music_detail::MusicDetail;
pub use musics::Musics;
pub use navbar::Navbar;
pub use not_found::NotFound;
pub use status::{ErrorMessage, Loading};

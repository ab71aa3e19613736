#![allow(dead_code)]

use encore::catalog::Artist;
use encore::test_support::artist;

/// Initialize tracing for tests with proper test output handling
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// 27 filler artists followed by three whose names contain "luna"
pub fn artist_fixtures() -> Vec<Artist> {
    let mut artists: Vec<Artist> = (1..=27)
        .map(|i| artist(i, &format!("Artist {:02}", i)))
        .collect();
    artists.push(artist(28, "Luna Echo"));
    artists.push(artist(29, "Lunar Tide"));
    artists.push(artist(30, "Park Luna"));
    artists
}

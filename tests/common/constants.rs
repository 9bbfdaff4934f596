//! Shared constants for end-to-end tests

// ============================================================================
// Seeded Songs
// ============================================================================

/// Song present in the seed file, with `en` and `fr` translations
pub const SEEDED_SONG_NUMBER: &str = "101";
pub const SEEDED_SONG_TITLE: &str = "Seeded title";
pub const SEEDED_SONG_EN_TITLE: &str = "Seeded English title";

/// Song present in the seed file, without translations
pub const SEEDED_PLAIN_SONG_NUMBER: &str = "102";

/// Number of songs in the seed file
pub const SEEDED_SONGS_COUNT: usize = 2;

// ============================================================================
// Timeouts
// ============================================================================

pub const REQUEST_TIMEOUT_SECS: u64 = 5;
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 20;

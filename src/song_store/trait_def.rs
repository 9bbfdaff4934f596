//! SongStore trait definition.

use super::error::SongStoreResult;
use super::models::{SeedSummary, Song, SongUpdate};

/// Trait for song storage backends.
///
/// Every write runs in a single transaction: it either fully applies or
/// leaves the store untouched.
pub trait SongStore: Send + Sync {
    /// List all songs ordered by song number.
    ///
    /// When `language` is given, each song only carries the translation for
    /// that language (if any).
    fn list_songs(&self, language: Option<&str>) -> SongStoreResult<Vec<Song>>;

    /// Get a single song, with the same translation filtering as `list_songs`.
    fn get_song(&self, song_number: &str, language: Option<&str>) -> SongStoreResult<Song>;

    /// Create a song and its translations. Fails with `Conflict` if the song
    /// number is taken or the payload repeats a language.
    fn create_song(&self, song: &Song) -> SongStoreResult<Song>;

    /// Apply a partial update and return the reloaded song.
    fn update_song(&self, song_number: &str, update: &SongUpdate) -> SongStoreResult<Song>;

    /// Delete a song and, by cascade, its translations.
    ///
    /// Returns whether a song was actually removed.
    fn delete_song(&self, song_number: &str) -> SongStoreResult<bool>;

    /// Insert songs and translations that are not already stored, leaving
    /// existing rows untouched.
    fn seed_songs(&self, songs: &[Song]) -> SongStoreResult<SeedSummary>;

    fn get_songs_count(&self) -> SongStoreResult<usize>;
}

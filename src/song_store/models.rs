//! Song and translation records as exchanged over the API and the seed file.

use serde::{Deserialize, Serialize};

/// A language-specific rendering of a song's title and text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    pub language: String,
    pub title: String,
    pub text: String,
}

/// A song keyed by `song_number`, with its primary-language title and text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub song_number: String,
    pub title_ta: String,
    pub text_ta: String,
    #[serde(default)]
    pub translations: Vec<Translation>,
}

/// Partial update of a song.
///
/// `None` means the field was not sent and is left unchanged. A present
/// value is always written, including an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SongUpdate {
    #[serde(default)]
    pub title_ta: Option<String>,
    #[serde(default)]
    pub text_ta: Option<String>,
    /// Upserted one by one; translations not listed here are kept.
    #[serde(default)]
    pub translations: Option<Vec<Translation>>,
}

impl SongUpdate {
    pub fn touches_primary_fields(&self) -> bool {
        self.title_ta.is_some() || self.text_ta.is_some()
    }
}

/// Outcome of an insert-if-absent seeding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub records_read: usize,
    pub songs_inserted: usize,
    pub translations_inserted: usize,
}

//! One-time seeding of the song store from a static JSON file.
//!
//! The file holds an array of song objects in the same shape the API
//! returns. Rows that already exist are left untouched, so running the
//! import on every startup is safe.

use crate::song_store::{SeedSummary, Song, SongStore};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// Reads and parses a seed file.
pub fn read_seed_file(path: &Path) -> Result<Vec<Song>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file: {:?}", path))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse seed file: {:?}", path))
}

/// Seeds `store` from `path` if the file exists.
///
/// Returns `None` when there is no file to import.
pub fn import_seed_file(store: &dyn SongStore, path: &Path) -> Result<Option<SeedSummary>> {
    if !path.exists() {
        info!("No seed file at {:?}, skipping initial data load", path);
        return Ok(None);
    }

    let songs = read_seed_file(path)?;
    let summary = store
        .seed_songs(&songs)
        .with_context(|| format!("Failed to import seed file: {:?}", path))?;

    info!(
        "Seeded from {:?}: {} records, {} new songs, {} new translations",
        path, summary.records_read, summary.songs_inserted, summary.translations_inserted
    );
    Ok(Some(summary))
}

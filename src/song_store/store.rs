//! SQLite-backed song store implementation.
//!
//! Each operation opens its own connection, runs inside one transaction and
//! closes the connection when done. Foreign keys are enabled per connection
//! so that deleting a song cascades to its translations.

use super::error::{SongStoreError, SongStoreResult};
use super::models::{SeedSummary, Song, SongUpdate, Translation};
use super::schema::SONGS_SCHEMA;
use super::trait_def::SongStore;
use anyhow::{Context, Result};
use rusqlite::{params, Connection, OpenFlags, OptionalExtension, TransactionBehavior};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// How long a connection waits on a locked database before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

const UPSERT_TRANSLATION_SQL: &str = "INSERT INTO translations (song_number, language, title, text) \
     VALUES (?1, ?2, ?3, ?4) \
     ON CONFLICT(song_number, language) DO UPDATE SET title = excluded.title, text = excluded.text";

/// SQLite-backed song store.
#[derive(Debug, Clone)]
pub struct SqliteSongStore {
    db_path: PathBuf,
}

impl SqliteSongStore {
    /// Open the store at `db_path`, creating the file and any missing tables.
    ///
    /// Fails if existing tables do not match the expected layout.
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let db_path = db_path.as_ref().to_path_buf();

        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create database directory {:?}", parent)
                })?;
            }
        }

        let conn = Connection::open(&db_path)
            .with_context(|| format!("Failed to open songs database at {:?}", db_path))?;
        SONGS_SCHEMA
            .create_if_absent(&conn)
            .context("Failed to create songs schema")?;
        SONGS_SCHEMA
            .validate(&conn)
            .context("Songs database does not match the expected schema")?;

        let songs_count: i64 = conn.query_row("SELECT COUNT(*) FROM songs", [], |r| r.get(0))?;
        let translations_count: i64 =
            conn.query_row("SELECT COUNT(*) FROM translations", [], |r| r.get(0))?;
        info!(
            "Opened songs database: {} songs, {} translations",
            songs_count, translations_count
        );

        Ok(SqliteSongStore { db_path })
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    fn open_connection(&self) -> SongStoreResult<Connection> {
        let conn = Connection::open_with_flags(
            &self.db_path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_URI
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        Ok(conn)
    }

    // =========================================================================
    // Internal Helper Methods
    // =========================================================================

    fn song_exists(conn: &Connection, song_number: &str) -> SongStoreResult<bool> {
        Ok(conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM songs WHERE song_number = ?1)",
            params![song_number],
            |r| r.get(0),
        )?)
    }

    fn load_song(
        conn: &Connection,
        song_number: &str,
        language: Option<&str>,
    ) -> SongStoreResult<Option<Song>> {
        let song = conn
            .query_row(
                "SELECT song_number, title_ta, text_ta FROM songs WHERE song_number = ?1",
                params![song_number],
                |row| {
                    Ok(Song {
                        song_number: row.get(0)?,
                        title_ta: row.get(1)?,
                        text_ta: row.get(2)?,
                        translations: Vec::new(),
                    })
                },
            )
            .optional()?;

        let Some(mut song) = song else {
            return Ok(None);
        };

        let mut stmt = conn.prepare(
            "SELECT language, title, text FROM translations
             WHERE song_number = ?1 AND (?2 IS NULL OR language = ?2)
             ORDER BY id",
        )?;
        song.translations = stmt
            .query_map(params![song_number, language], |row| {
                Ok(Translation {
                    language: row.get(0)?,
                    title: row.get(1)?,
                    text: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(song))
    }

    fn load_translations_by_song(
        conn: &Connection,
        language: Option<&str>,
    ) -> SongStoreResult<HashMap<String, Vec<Translation>>> {
        let mut stmt = conn.prepare(
            "SELECT song_number, language, title, text FROM translations
             WHERE ?1 IS NULL OR language = ?1
             ORDER BY id",
        )?;
        let rows = stmt.query_map(params![language], |row| {
            Ok((
                row.get::<_, String>(0)?,
                Translation {
                    language: row.get(1)?,
                    title: row.get(2)?,
                    text: row.get(3)?,
                },
            ))
        })?;

        let mut by_song: HashMap<String, Vec<Translation>> = HashMap::new();
        for row in rows {
            let (song_number, translation) = row?;
            by_song.entry(song_number).or_default().push(translation);
        }
        Ok(by_song)
    }
}

impl SongStore for SqliteSongStore {
    fn list_songs(&self, language: Option<&str>) -> SongStoreResult<Vec<Song>> {
        let mut conn = self.open_connection()?;
        let tx = conn.transaction()?;

        let mut songs = {
            let mut stmt = tx.prepare(
                "SELECT song_number, title_ta, text_ta FROM songs ORDER BY song_number",
            )?;
            let songs = stmt
                .query_map([], |row| {
                    Ok(Song {
                        song_number: row.get(0)?,
                        title_ta: row.get(1)?,
                        text_ta: row.get(2)?,
                        translations: Vec::new(),
                    })
                })?
                .collect::<Result<Vec<_>, _>>()?;
            songs
        };

        let mut translations = Self::load_translations_by_song(&tx, language)?;
        for song in songs.iter_mut() {
            if let Some(song_translations) = translations.remove(&song.song_number) {
                song.translations = song_translations;
            }
        }

        tx.commit()?;
        Ok(songs)
    }

    fn get_song(&self, song_number: &str, language: Option<&str>) -> SongStoreResult<Song> {
        let mut conn = self.open_connection()?;
        let tx = conn.transaction()?;
        let song = Self::load_song(&tx, song_number, language)?
            .ok_or_else(|| SongStoreError::NotFound(song_number.to_owned()))?;
        tx.commit()?;
        Ok(song)
    }

    fn create_song(&self, song: &Song) -> SongStoreResult<Song> {
        let mut conn = self.open_connection()?;
        // Dropping the transaction without committing rolls everything back.
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        if Self::song_exists(&tx, &song.song_number)? {
            return Err(SongStoreError::Conflict(format!(
                "Song '{}' already exists",
                song.song_number
            )));
        }

        tx.execute(
            "INSERT INTO songs (song_number, title_ta, text_ta) VALUES (?1, ?2, ?3)",
            params![&song.song_number, &song.title_ta, &song.text_ta],
        )
        .map_err(|e| {
            SongStoreError::from_write(e, || {
                format!("Song '{}' already exists", song.song_number)
            })
        })?;

        for translation in &song.translations {
            tx.execute(
                "INSERT INTO translations (song_number, language, title, text) VALUES (?1, ?2, ?3, ?4)",
                params![
                    &song.song_number,
                    &translation.language,
                    &translation.title,
                    &translation.text
                ],
            )
            .map_err(|e| {
                SongStoreError::from_write(e, || {
                    format!(
                        "Duplicate translation language '{}' for song '{}'",
                        translation.language, song.song_number
                    )
                })
            })?;
        }

        let created = Self::load_song(&tx, &song.song_number, None)?
            .ok_or_else(|| SongStoreError::NotFound(song.song_number.clone()))?;
        tx.commit()?;

        debug!(
            "Created song {} with {} translations",
            created.song_number,
            created.translations.len()
        );
        Ok(created)
    }

    fn update_song(&self, song_number: &str, update: &SongUpdate) -> SongStoreResult<Song> {
        let mut conn = self.open_connection()?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        if !Self::song_exists(&tx, song_number)? {
            return Err(SongStoreError::NotFound(song_number.to_owned()));
        }

        if update.touches_primary_fields() {
            tx.execute(
                "UPDATE songs SET title_ta = COALESCE(?1, title_ta), text_ta = COALESCE(?2, text_ta)
                 WHERE song_number = ?3",
                params![&update.title_ta, &update.text_ta, song_number],
            )?;
        }

        if let Some(translations) = &update.translations {
            let mut stmt = tx.prepare(UPSERT_TRANSLATION_SQL)?;
            for translation in translations {
                stmt.execute(params![
                    song_number,
                    &translation.language,
                    &translation.title,
                    &translation.text
                ])?;
            }
        }

        let updated = Self::load_song(&tx, song_number, None)?
            .ok_or_else(|| SongStoreError::NotFound(song_number.to_owned()))?;
        tx.commit()?;
        Ok(updated)
    }

    fn delete_song(&self, song_number: &str) -> SongStoreResult<bool> {
        let conn = self.open_connection()?;
        let deleted = conn.execute(
            "DELETE FROM songs WHERE song_number = ?1",
            params![song_number],
        )?;
        Ok(deleted > 0)
    }

    fn seed_songs(&self, songs: &[Song]) -> SongStoreResult<SeedSummary> {
        let mut conn = self.open_connection()?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let mut summary = SeedSummary {
            records_read: songs.len(),
            ..Default::default()
        };
        {
            let mut insert_song = tx.prepare(
                "INSERT OR IGNORE INTO songs (song_number, title_ta, text_ta) VALUES (?1, ?2, ?3)",
            )?;
            let mut insert_translation = tx.prepare(
                "INSERT OR IGNORE INTO translations (song_number, language, title, text)
                 VALUES (?1, ?2, ?3, ?4)",
            )?;

            for song in songs {
                summary.songs_inserted += insert_song.execute(params![
                    &song.song_number,
                    &song.title_ta,
                    &song.text_ta
                ])?;
                for translation in &song.translations {
                    summary.translations_inserted += insert_translation.execute(params![
                        &song.song_number,
                        &translation.language,
                        &translation.title,
                        &translation.text
                    ])?;
                }
            }
        }

        tx.commit()?;
        Ok(summary)
    }

    fn get_songs_count(&self) -> SongStoreResult<usize> {
        let conn = self.open_connection()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM songs", [], |r| r.get(0))?;
        Ok(count as usize)
    }
}

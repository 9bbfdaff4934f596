//! SQLite schema for songs and their translations.

use crate::sqlite_column;
use crate::sqlite_persistence::{ForeignKey, ForeignKeyOnChange, Schema, SqlType, Table};

/// Songs table - one row per song, keyed by its song number
const SONGS_TABLE: Table = Table {
    name: "songs",
    columns: &[
        sqlite_column!("song_number", &SqlType::Text, is_primary_key = true),
        sqlite_column!("title_ta", &SqlType::Text, non_null = true),
        sqlite_column!("text_ta", &SqlType::Text, non_null = true),
    ],
    unique_constraints: &[],
};

/// Translations table - at most one row per (song, language)
const TRANSLATIONS_TABLE: Table = Table {
    name: "translations",
    columns: &[
        sqlite_column!("id", &SqlType::Integer, is_primary_key = true),
        sqlite_column!(
            "song_number",
            &SqlType::Text,
            non_null = true,
            foreign_key = Some(&ForeignKey {
                foreign_table: "songs",
                foreign_column: "song_number",
                on_delete: ForeignKeyOnChange::Cascade,
            })
        ),
        sqlite_column!("language", &SqlType::Text, non_null = true),
        sqlite_column!("title", &SqlType::Text, non_null = true),
        sqlite_column!("text", &SqlType::Text, non_null = true),
    ],
    unique_constraints: &[&["song_number", "language"]],
};

pub const SONGS_SCHEMA: Schema = Schema {
    tables: &[SONGS_TABLE, TRANSLATIONS_TABLE],
};

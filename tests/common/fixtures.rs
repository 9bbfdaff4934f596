//! Test fixtures: seed files and song payloads

use super::constants::*;
use anyhow::Result;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Writes the standard seed file into `dir` and returns its path
pub fn write_seed_file(dir: &Path) -> Result<PathBuf> {
    let seed = json!([
        {
            "song_number": SEEDED_SONG_NUMBER,
            "title_ta": SEEDED_SONG_TITLE,
            "text_ta": "Seeded text",
            "translations": [
                {"language": "en", "title": SEEDED_SONG_EN_TITLE, "text": "Seeded English text"},
                {"language": "fr", "title": "Titre", "text": "Texte"}
            ]
        },
        {
            "song_number": SEEDED_PLAIN_SONG_NUMBER,
            "title_ta": "Plain title",
            "text_ta": "Plain text"
        }
    ]);

    let path = dir.join("data.json");
    fs::write(&path, serde_json::to_string_pretty(&seed)?)?;
    Ok(path)
}

/// Builds a song payload with the given translations as (language, title, text)
pub fn new_song(song_number: &str, translations: &[(&str, &str, &str)]) -> Value {
    json!({
        "song_number": song_number,
        "title_ta": format!("Title {}", song_number),
        "text_ta": format!("Text {}", song_number),
        "translations": translations
            .iter()
            .map(|(language, title, text)| json!({
                "language": language,
                "title": title,
                "text": text
            }))
            .collect::<Vec<_>>()
    })
}

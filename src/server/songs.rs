//! Song CRUD endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::{debug, info};

use super::state::{GuardedSongStore, ServerState};
use crate::song_store::{Song, SongUpdate};

/// Query parameters for song reads.
#[derive(Deserialize, Debug, Default)]
pub struct LanguageQuery {
    pub language: Option<String>,
}

impl LanguageQuery {
    /// An empty `language=` behaves like no filter at all.
    fn language(&self) -> Option<&str> {
        self.language.as_deref().filter(|l| !l.is_empty())
    }
}

/// GET /songs - List all songs, optionally filtering translations by language
async fn list_songs(
    State(song_store): State<GuardedSongStore>,
    Query(query): Query<LanguageQuery>,
) -> Response {
    match song_store.list_songs(query.language()) {
        Ok(songs) => Json(songs).into_response(),
        Err(err) => err.into_response(),
    }
}

/// GET /songs/{song_number}
async fn get_song(
    State(song_store): State<GuardedSongStore>,
    Path(song_number): Path<String>,
    Query(query): Query<LanguageQuery>,
) -> Response {
    match song_store.get_song(&song_number, query.language()) {
        Ok(song) => Json(song).into_response(),
        Err(err) => err.into_response(),
    }
}

/// POST /songs
async fn create_song(
    State(song_store): State<GuardedSongStore>,
    Json(song): Json<Song>,
) -> Response {
    match song_store.create_song(&song) {
        Ok(created) => {
            info!(
                "Created song {} ({} translations)",
                created.song_number,
                created.translations.len()
            );
            (StatusCode::CREATED, Json(created)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

/// PATCH /songs/{song_number}
async fn update_song(
    State(song_store): State<GuardedSongStore>,
    Path(song_number): Path<String>,
    Json(update): Json<SongUpdate>,
) -> Response {
    match song_store.update_song(&song_number, &update) {
        Ok(song) => Json(song).into_response(),
        Err(err) => err.into_response(),
    }
}

/// DELETE /songs/{song_number} - succeeds whether or not the song existed
async fn delete_song(
    State(song_store): State<GuardedSongStore>,
    Path(song_number): Path<String>,
) -> Response {
    match song_store.delete_song(&song_number) {
        Ok(deleted) => {
            debug!("Delete song {}: removed={}", song_number, deleted);
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub fn make_songs_routes(state: ServerState) -> Router {
    Router::new()
        .route("/songs", get(list_songs).post(create_song))
        .route(
            "/songs/{song_number}",
            get(get_song).patch(update_song).delete(delete_song),
        )
        .with_state(state)
}

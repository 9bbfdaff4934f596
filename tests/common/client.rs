//! HTTP client for end-to-end tests
//!
//! Wraps reqwest with one method per songs-server endpoint.

use super::constants::*;
use reqwest::Response;
use serde_json::Value;
use std::time::Duration;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    /// GET /
    pub async fn get_status(&self) -> Response {
        self.client
            .get(format!("{}/", self.base_url))
            .send()
            .await
            .expect("Status request failed")
    }

    /// GET /songs
    pub async fn list_songs(&self) -> Response {
        self.client
            .get(format!("{}/songs", self.base_url))
            .send()
            .await
            .expect("List songs request failed")
    }

    /// GET /songs?language={language}
    pub async fn list_songs_in_language(&self, language: &str) -> Response {
        self.client
            .get(format!("{}/songs", self.base_url))
            .query(&[("language", language)])
            .send()
            .await
            .expect("List songs request failed")
    }

    /// GET /songs/{song_number}
    pub async fn get_song(&self, song_number: &str) -> Response {
        self.client
            .get(format!("{}/songs/{}", self.base_url, song_number))
            .send()
            .await
            .expect("Get song request failed")
    }

    /// GET /songs/{song_number}?language={language}
    pub async fn get_song_in_language(&self, song_number: &str, language: &str) -> Response {
        self.client
            .get(format!("{}/songs/{}", self.base_url, song_number))
            .query(&[("language", language)])
            .send()
            .await
            .expect("Get song request failed")
    }

    /// POST /songs
    pub async fn create_song(&self, song: &Value) -> Response {
        self.client
            .post(format!("{}/songs", self.base_url))
            .json(song)
            .send()
            .await
            .expect("Create song request failed")
    }

    /// PATCH /songs/{song_number}
    pub async fn update_song(&self, song_number: &str, update: &Value) -> Response {
        self.client
            .patch(format!("{}/songs/{}", self.base_url, song_number))
            .json(update)
            .send()
            .await
            .expect("Update song request failed")
    }

    /// DELETE /songs/{song_number}
    pub async fn delete_song(&self, song_number: &str) -> Response {
        self.client
            .delete(format!("{}/songs/{}", self.base_url, song_number))
            .send()
            .await
            .expect("Delete song request failed")
    }
}

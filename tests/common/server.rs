//! Test server lifecycle management
//!
//! Each test gets an isolated server with its own database, seeded from
//! the standard seed file.

use super::constants::*;
use super::fixtures::write_seed_file;
use songs_server::seed_import::import_seed_file;
use songs_server::server::{server::make_app, RequestsLoggingLevel, ServerConfig};
use songs_server::SqliteSongStore;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::net::TcpListener;

/// Test server instance with an isolated database
///
/// When dropped, the server gracefully shuts down and temp resources are cleaned up.
pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    /// Path of the SQLite database, for direct inspection in tests
    pub db_path: PathBuf,

    /// Path of the seed file the server was started with
    pub seed_path: PathBuf,

    // Private fields - keep resources alive until drop
    _temp_dir: TempDir,
    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestServer {
    /// Spawns a new seeded test server on a random port
    ///
    /// # Panics
    ///
    /// Panics if the database cannot be created or seeded, the port cannot
    /// be bound, or the server does not become ready within the timeout.
    pub async fn spawn() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("songs.db");
        let seed_path = write_seed_file(temp_dir.path()).expect("Failed to write seed file");

        let song_store =
            Arc::new(SqliteSongStore::new(&db_path).expect("Failed to open song store"));
        import_seed_file(song_store.as_ref(), &seed_path).expect("Failed to seed song store");

        // Bind to random port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();
        let base_url = format!("http://127.0.0.1:{}", port);

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        let config = ServerConfig {
            port,
            requests_logging_level: RequestsLoggingLevel::None,
        };
        let app = make_app(config, song_store);

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Server failed");
        });

        let server = Self {
            base_url,
            db_path,
            seed_path,
            _temp_dir: temp_dir,
            _shutdown_tx: Some(shutdown_tx),
        };

        server.wait_for_ready().await;

        server
    }

    /// Waits for the server to become ready by polling the status endpoint
    async fn wait_for_ready(&self) {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .expect("Failed to build reqwest client");

        let start = std::time::Instant::now();
        let timeout = Duration::from_millis(SERVER_READY_TIMEOUT_MS);

        loop {
            if start.elapsed() > timeout {
                panic!(
                    "Server did not become ready within {}ms",
                    SERVER_READY_TIMEOUT_MS
                );
            }

            match client.get(format!("{}/", self.base_url)).send().await {
                Ok(response) if response.status().is_success() => return,
                _ => {
                    tokio::time::sleep(Duration::from_millis(SERVER_READY_POLL_INTERVAL_MS)).await;
                }
            }
        }
    }

    /// Counts translation rows for a song directly in the database
    pub fn count_translation_rows(&self, song_number: &str) -> i64 {
        let conn = rusqlite::Connection::open(&self.db_path).expect("Failed to open database");
        conn.query_row(
            "SELECT COUNT(*) FROM translations WHERE song_number = ?1",
            [song_number],
            |r| r.get(0),
        )
        .expect("Failed to count translations")
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self._shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

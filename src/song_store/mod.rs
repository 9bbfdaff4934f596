mod error;
mod models;
mod schema;
mod store;
mod trait_def;

pub use error::{SongStoreError, SongStoreResult};
pub use models::*;
pub use schema::SONGS_SCHEMA;
pub use store::SqliteSongStore;
pub use trait_def::SongStore;

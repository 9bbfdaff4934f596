pub mod config;
mod error;
mod http_layers;
pub mod server;
mod songs;
pub mod state;

pub use config::ServerConfig;
pub use http_layers::*;
pub(self) use songs::make_songs_routes;
pub use server::run_server;

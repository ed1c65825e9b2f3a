//! Core domain types for vidra: movie records, playback options,
//! embed URL construction, the persisted watchlist, and configuration.

pub mod config;
pub mod embed;
pub mod error;
pub mod models;
pub mod watchlist;

pub use config::AppConfig;
pub use error::VidraError;
pub use models::{MovieRecord, PlaybackOptions};
pub use watchlist::{JsonFileBackend, WatchlistBackend, WatchlistStore};

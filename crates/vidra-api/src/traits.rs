//! Trait definitions for movie metadata providers.
//!
//! The resolver and CLI are provider-agnostic; TMDB is the shipped
//! implementation.

use std::future::Future;

/// A movie metadata lookup service.
pub trait MetadataProvider: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Search for movies by free-text title, in provider ranking order.
    fn search_movies(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<MovieSearchResult>, Self::Error>> + Send;

    /// Fetch details for a single movie by the provider-internal id.
    fn movie_details(
        &self,
        provider_id: u64,
    ) -> impl Future<Output = Result<MovieDetails, Self::Error>> + Send;
}

/// A search result from any metadata provider.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct MovieSearchResult {
    pub provider_id: u64,
    pub title: String,
    pub year: Option<u32>,
    pub poster_url: Option<String>,
    pub overview: Option<String>,
}

/// Details for a single movie.
///
/// `imdb_id` is the cross-reference identifier used for playback URLs; the
/// provider may return it absent or null.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct MovieDetails {
    pub imdb_id: Option<String>,
    pub title: Option<String>,
    pub runtime_minutes: Option<u32>,
    pub overview: Option<String>,
}

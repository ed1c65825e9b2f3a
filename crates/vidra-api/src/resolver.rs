//! Maps a free-text title to a playable embed URL via two chained lookups:
//! search for the title, then fetch details for the first match to obtain
//! its IMDb id.

use thiserror::Error;

use vidra_core::embed::embed_url;
use vidra_core::models::{MovieRecord, PlaybackOptions};

use crate::traits::MetadataProvider;

/// Errors from a single resolve attempt. None are retried; the caller
/// re-invokes if it wants another attempt.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("no title given")]
    EmptyInput,

    #[error("movie not found")]
    NotFound,

    #[error("metadata request failed: {0}")]
    Transport(Box<dyn std::error::Error + Send + Sync>),
}

/// A successful resolution: the movie record plus its playback URL.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub record: MovieRecord,
    pub playback_url: String,
}

/// Stateless title resolver over any metadata provider.
pub struct Resolver<P> {
    provider: P,
    embed_base: String,
}

impl<P: MetadataProvider> Resolver<P> {
    pub fn new(provider: P, embed_base: impl Into<String>) -> Self {
        Self {
            provider,
            embed_base: embed_base.into(),
        }
    }

    /// Resolve a title to a movie record and playback URL.
    ///
    /// The two provider calls are strictly sequential: details are requested
    /// only after the search response arrives, and only for the first match
    /// (provider order, no re-ranking). A missing IMDb id maps to the empty
    /// string and URL construction still proceeds.
    pub async fn resolve(
        &self,
        title: &str,
        options: &PlaybackOptions,
    ) -> Result<Resolution, ResolveError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ResolveError::EmptyInput);
        }

        let results = self
            .provider
            .search_movies(title)
            .await
            .map_err(|e| ResolveError::Transport(Box::new(e)))?;

        let Some(first) = results.into_iter().next() else {
            return Err(ResolveError::NotFound);
        };

        let details = self
            .provider
            .movie_details(first.provider_id)
            .await
            .map_err(|e| ResolveError::Transport(Box::new(e)))?;

        let record = MovieRecord {
            title: first.title,
            imdb_id: details.imdb_id.unwrap_or_default(),
            year: first.year,
            poster_url: first.poster_url,
        };
        let playback_url = embed_url(&self.embed_base, &record.imdb_id, options);

        Ok(Resolution {
            record,
            playback_url,
        })
    }
}

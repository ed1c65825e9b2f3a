use reqwest::Client;

use super::error::TmdbError;
use super::types::{TmdbMovieDetails, TmdbSearchResponse};
use crate::traits::{MetadataProvider, MovieDetails, MovieSearchResult};

const BASE_URL: &str = "https://api.themoviedb.org/3";

/// TMDB API v3 client, authenticated via the `api_key` query parameter.
pub struct TmdbClient {
    api_key: String,
    http: Client,
}

impl TmdbClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            http: Client::new(),
        }
    }

    /// Check the HTTP response for errors and return the body text on failure.
    async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, TmdbError> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status, "TMDB API error");
            Err(TmdbError::Api {
                status,
                message: body,
            })
        }
    }
}

impl MetadataProvider for TmdbClient {
    type Error = TmdbError;

    async fn search_movies(&self, query: &str) -> Result<Vec<MovieSearchResult>, TmdbError> {
        tracing::debug!(query, "TMDB movie search");
        let resp = self
            .http
            .get(format!("{BASE_URL}/search/movie"))
            .query(&[("api_key", self.api_key.as_str()), ("query", query)])
            .send()
            .await?;

        let resp = Self::check_response(resp).await?;
        let search: TmdbSearchResponse = resp
            .json()
            .await
            .map_err(|e| TmdbError::Parse(e.to_string()))?;

        Ok(search
            .results
            .into_iter()
            .map(|m| m.into_search_result())
            .collect())
    }

    async fn movie_details(&self, provider_id: u64) -> Result<MovieDetails, TmdbError> {
        tracing::debug!(provider_id, "TMDB movie details");
        let resp = self
            .http
            .get(format!("{BASE_URL}/movie/{provider_id}"))
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await?;

        let resp = Self::check_response(resp).await?;
        let details: TmdbMovieDetails = resp
            .json()
            .await
            .map_err(|e| TmdbError::Parse(e.to_string()))?;

        Ok(details.into_details())
    }
}

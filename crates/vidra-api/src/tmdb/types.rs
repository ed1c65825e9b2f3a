use serde::Deserialize;

use crate::traits::{MovieDetails, MovieSearchResult};

const IMAGE_BASE: &str = "https://image.tmdb.org/t/p";

// ── Search responses ─────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct TmdbSearchResponse {
    #[serde(default)]
    pub results: Vec<TmdbSearchMovie>,
}

#[derive(Debug, Deserialize)]
pub struct TmdbSearchMovie {
    pub id: u64,
    pub title: String,
    pub release_date: Option<String>,
    pub poster_path: Option<String>,
    pub overview: Option<String>,
}

// ── Movie detail responses ───────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct TmdbMovieDetails {
    pub imdb_id: Option<String>,
    pub title: Option<String>,
    pub runtime: Option<u32>,
    pub overview: Option<String>,
}

// ── Conversions to shared trait types ────────────────────────────

impl TmdbSearchMovie {
    pub fn into_search_result(self) -> MovieSearchResult {
        // Release dates are "YYYY-MM-DD"; the year is the first four chars.
        let year = self
            .release_date
            .as_deref()
            .and_then(|d| d.get(..4))
            .and_then(|y| y.parse().ok());
        MovieSearchResult {
            provider_id: self.id,
            title: self.title,
            year,
            poster_url: self.poster_path.map(|p| format!("{IMAGE_BASE}/w500{p}")),
            overview: self.overview,
        }
    }
}

impl TmdbMovieDetails {
    pub fn into_details(self) -> MovieDetails {
        MovieDetails {
            imdb_id: self.imdb_id,
            title: self.title,
            runtime_minutes: self.runtime,
            overview: self.overview,
        }
    }
}

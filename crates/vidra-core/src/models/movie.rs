use serde::{Deserialize, Serialize};

/// A resolved movie, as stored in the watchlist.
///
/// Identity is the IMDb id; the watchlist keeps at most one record per id.
/// `year` and `poster_url` come from the search response when available and
/// default to `None` so older persisted lists still deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub title: String,
    pub imdb_id: String,
    #[serde(default)]
    pub year: Option<u32>,
    #[serde(default)]
    pub poster_url: Option<String>,
}

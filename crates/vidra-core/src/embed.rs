//! Embed playback URL construction.
//!
//! The embed provider takes the movie's IMDb id as a path segment and
//! playback options as query parameters, in fixed order:
//! `sub_url` (when set), `ds_lang` (when non-empty), `autoplay` (always).

use url::form_urlencoded;

use crate::models::{MovieRecord, PlaybackOptions};

/// Build the embed player URL for a movie id.
///
/// An empty `imdb_id` still produces a syntactically valid URL; callers that
/// want to reject it must do so before getting here.
pub fn embed_url(base: &str, imdb_id: &str, options: &PlaybackOptions) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());

    if let Some(sub) = options.subtitle_url.as_deref() {
        if !sub.is_empty() {
            query.append_pair("sub_url", sub);
        }
    }
    if !options.subtitle_lang.is_empty() {
        query.append_pair("ds_lang", &options.subtitle_lang);
    }
    query.append_pair("autoplay", if options.autoplay { "1" } else { "0" });

    format!(
        "{}/{}?{}",
        base.trim_end_matches('/'),
        imdb_id,
        query.finish()
    )
}

/// Re-derive a playback URL from a stored watchlist record, without any
/// network call.
pub fn rebuild_playback_url(
    record: &MovieRecord,
    base: &str,
    options: &PlaybackOptions,
) -> String {
    embed_url(base, &record.imdb_id, options)
}

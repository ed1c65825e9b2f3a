use serde::{Deserialize, Serialize};

/// User-chosen options applied when building an embed playback URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackOptions {
    /// External subtitle file (.vtt or .srt). Omitted from the URL when empty.
    pub subtitle_url: Option<String>,
    /// Default subtitle language code. Omitted from the URL when empty.
    pub subtitle_lang: String,
    pub autoplay: bool,
}

impl Default for PlaybackOptions {
    fn default() -> Self {
        Self {
            subtitle_url: None,
            subtitle_lang: "en".to_string(),
            autoplay: true,
        }
    }
}

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "vidra", version, about = "Movie search and streaming-link tool")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve a movie title and print its playback URL.
    Watch {
        /// Free-text movie title, e.g. "Shazam".
        title: String,

        /// External subtitle file URL (.vtt or .srt).
        #[arg(long)]
        sub_url: Option<String>,

        /// Subtitle language code; defaults to the configured language.
        #[arg(long)]
        lang: Option<String>,

        /// Disable autoplay.
        #[arg(long)]
        no_autoplay: bool,

        /// Add the resolved movie to the watchlist.
        #[arg(long)]
        save: bool,
    },

    /// Print the watchlist in insertion order.
    List,

    /// Rebuild a playback URL from a watchlist entry, without network access.
    Play {
        /// IMDb id of a saved movie, e.g. "tt0448115".
        imdb_id: String,

        /// External subtitle file URL (.vtt or .srt).
        #[arg(long)]
        sub_url: Option<String>,

        /// Subtitle language code; defaults to the configured language.
        #[arg(long)]
        lang: Option<String>,

        /// Disable autoplay.
        #[arg(long)]
        no_autoplay: bool,
    },

    /// Remove an entry from the watchlist.
    Remove {
        /// IMDb id of the entry to remove.
        imdb_id: String,
    },
}

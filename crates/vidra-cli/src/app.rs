//! Command handling. Session state (config, the loaded watchlist) lives in
//! an explicit [`App`] struct rather than globals. One resolve runs per
//! invocation, so overlapping lookups cannot race.

use vidra_api::{ResolveError, Resolver, TmdbClient};
use vidra_core::config::PlaybackConfig;
use vidra_core::embed::rebuild_playback_url;
use vidra_core::models::{MovieRecord, PlaybackOptions};
use vidra_core::{AppConfig, JsonFileBackend, WatchlistStore};

use crate::cli::{Cli, Command};

type CliResult = Result<(), Box<dyn std::error::Error>>;

pub struct App {
    config: AppConfig,
    store: WatchlistStore<JsonFileBackend>,
}

pub async fn run(cli: Cli) -> CliResult {
    let mut app = App::new()?;
    match cli.command {
        Command::Watch {
            title,
            sub_url,
            lang,
            no_autoplay,
            save,
        } => {
            let options = playback_options(&app.config.playback, sub_url, lang, no_autoplay);
            app.watch(&title, &options, save).await
        }
        Command::List => {
            app.list();
            Ok(())
        }
        Command::Play {
            imdb_id,
            sub_url,
            lang,
            no_autoplay,
        } => {
            let options = playback_options(&app.config.playback, sub_url, lang, no_autoplay);
            app.play(&imdb_id, &options)
        }
        Command::Remove { imdb_id } => app.remove(&imdb_id),
    }
}

impl App {
    fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let config = AppConfig::load()?;
        let store = WatchlistStore::load(JsonFileBackend::default_location());
        Ok(Self { config, store })
    }

    /// Resolve a title and print the playback URL; `save` also commits the
    /// record to the watchlist.
    async fn watch(&mut self, title: &str, options: &PlaybackOptions, save: bool) -> CliResult {
        let api_key = self.config.tmdb_api_key().ok_or(
            "no TMDB API key configured; set TMDB_API_KEY or add [tmdb] api_key to the config",
        )?;
        let resolver = Resolver::new(
            TmdbClient::new(api_key),
            self.config.playback.embed_base.clone(),
        );

        let resolution = match resolver.resolve(title, options).await {
            Ok(resolution) => resolution,
            Err(ResolveError::EmptyInput) => return Err("please enter a movie name".into()),
            Err(ResolveError::NotFound) => return Err("movie not found".into()),
            Err(ResolveError::Transport(cause)) => {
                tracing::error!(%cause, "resolve failed");
                return Err("something went wrong".into());
            }
        };

        print_record(&resolution.record);
        println!("{}", resolution.playback_url);

        if save {
            if self.store.add(resolution.record.clone())? {
                println!("added \"{}\" to the watchlist", resolution.record.title);
            } else {
                println!("\"{}\" is already in the watchlist", resolution.record.title);
            }
        }
        Ok(())
    }

    fn list(&self) {
        if self.store.is_empty() {
            println!("watchlist is empty");
            return;
        }
        for (i, record) in self.store.entries().iter().enumerate() {
            match record.year {
                Some(year) => println!("{:3}. {} ({year})  [{}]", i + 1, record.title, record.imdb_id),
                None => println!("{:3}. {}  [{}]", i + 1, record.title, record.imdb_id),
            }
        }
    }

    /// Re-derive a playback URL from a stored entry. No network call.
    fn play(&self, imdb_id: &str, options: &PlaybackOptions) -> CliResult {
        let record = self
            .store
            .get(imdb_id)
            .ok_or_else(|| format!("{imdb_id} is not in the watchlist"))?;

        print_record(record);
        println!(
            "{}",
            rebuild_playback_url(record, &self.config.playback.embed_base, options)
        );
        Ok(())
    }

    fn remove(&mut self, imdb_id: &str) -> CliResult {
        if self.store.remove(imdb_id)? {
            println!("removed {imdb_id} from the watchlist");
        } else {
            println!("{imdb_id} is not in the watchlist");
        }
        Ok(())
    }
}

fn print_record(record: &MovieRecord) {
    match record.year {
        Some(year) => println!("{} ({year})", record.title),
        None => println!("{}", record.title),
    }
}

/// Merge command-line playback flags over configured defaults.
fn playback_options(
    config: &PlaybackConfig,
    sub_url: Option<String>,
    lang: Option<String>,
    no_autoplay: bool,
) -> PlaybackOptions {
    PlaybackOptions {
        subtitle_url: sub_url,
        subtitle_lang: lang.unwrap_or_else(|| config.subtitle_lang.clone()),
        autoplay: if no_autoplay { false } else { config.autoplay },
    }
}

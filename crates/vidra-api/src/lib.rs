//! Metadata provider clients and the title resolver.

pub mod resolver;
pub mod tmdb;
pub mod traits;

pub use resolver::{Resolution, ResolveError, Resolver};
pub use tmdb::{TmdbClient, TmdbError};
pub use traits::{MetadataProvider, MovieDetails, MovieSearchResult};

mod movie;
mod playback;

pub use movie::MovieRecord;
pub use playback::PlaybackOptions;

use std::path::PathBuf;

use thiserror::Error;

use ghost_recording::errors::RecordingError;

#[derive(Debug, Error)]
pub enum ExtractorError {
    #[error("{0}")]
    Recording(#[from] RecordingError),

    #[error("Unable to read action frames file {path}: {source}")]
    ActionFrames {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed writing an event block: {0}")]
    Emit(std::io::Error),
}

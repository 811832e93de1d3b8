//! Loader for the RON motion file at startup.

use ron::Options;
use std::fs;
use std::path::Path;
use thiserror::Error;

use super::data::MotionDefaults;

/// Error type for content loading failures.
#[derive(Debug, Error)]
pub enum ContentLoadError {
    #[error("Failed to load {file}: IO error: {source}")]
    Io {
        file: String,
        source: std::io::Error,
    },
    #[error("Failed to load {file}: Parse error: {source}")]
    Parse {
        file: String,
        source: ron::error::SpannedError,
    },
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse motion defaults from RON text. `file` only labels errors.
pub fn parse_motion_defaults(
    file: &str,
    contents: &str,
) -> Result<MotionDefaults, ContentLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|source| ContentLoadError::Parse {
            file: file.to_string(),
            source,
        })
}

/// Load assets/data/motion.ron (or any other path) into `MotionDefaults`.
pub fn load_motion_defaults(path: &Path) -> Result<MotionDefaults, ContentLoadError> {
    let file = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|source| ContentLoadError::Io {
        file: file.clone(),
        source,
    })?;

    parse_motion_defaults(&file, &contents)
}

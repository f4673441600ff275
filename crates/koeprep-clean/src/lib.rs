mod decode;
mod rules;

use std::path::{Path, PathBuf};

use thiserror::Error;

pub use decode::decode_shift_jis;
pub use rules::clean_text;

/// Recognized raw-file suffix, stripped to form the destination path.
pub const RAW_SUFFIX: &str = ".raw";

/// Failure modes of raw-text cleanup.
#[derive(Debug, Error)]
pub enum CleanError {
    /// Stripping the `.raw` suffix did not change the path.
    #[error("destination file is the same as source file: {path:?}")]
    SamePath { path: PathBuf },
    /// The input bytes are not valid Shift-JIS.
    #[error("input is not valid Shift-JIS")]
    Encoding,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Destination path for a raw corpus file: the trailing `.raw` is dropped.
pub fn cleaned_path(source: &Path) -> PathBuf {
    match source.to_str().and_then(|s| s.strip_suffix(RAW_SUFFIX)) {
        Some(stem) => PathBuf::from(stem),
        None => source.to_path_buf(),
    }
}

/// Clean one raw corpus file into its suffix-stripped sibling.
///
/// The destination check runs before any I/O: a path without the `.raw`
/// suffix would otherwise be overwritten in place. Returns the destination
/// path on success; an existing destination is overwritten.
pub fn preprocess_file(source: &Path) -> Result<PathBuf, CleanError> {
    let destination = cleaned_path(source);
    if destination.as_path() == source {
        return Err(CleanError::SamePath {
            path: source.to_path_buf(),
        });
    }

    let bytes = std::fs::read(source)?;
    let text = decode_shift_jis(&bytes)?;
    let cleaned = clean_text(&text);
    tracing::debug!(
        source = %source.display(),
        bytes_in = bytes.len(),
        bytes_out = cleaned.len(),
        "cleaned raw text"
    );

    std::fs::write(&destination, cleaned.as_bytes())?;
    Ok(destination)
}

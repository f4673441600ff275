mod extract;
mod project;

use std::path::PathBuf;

use thiserror::Error;

pub use extract::{extract_file, transcript_path, transcript_text, PROJECT_SUFFIX};
pub use project::{parse_project, AudioItem, Talk};

/// Failure modes of transcript extraction.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The project file is not valid JSON.
    #[error("project file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// Neither `talk` nor the document root carries `audioKeys`.
    #[error("project file has no audioKeys, neither under `talk` nor at the root")]
    MissingAudioKeys,
    /// An `audioKeys` entry has no matching `audioItems` record.
    #[error("audioKeys entry {key:?} has no audioItems record")]
    MissingItem { key: String },
    /// An `audioItems` record referenced from `audioKeys` has no `text`.
    #[error("audioItems record {key:?} has no text")]
    MissingText { key: String },
    /// The destination path would equal the source path.
    #[error("destination equals source for {path:?}; expected a `.vvproj` file")]
    SamePath { path: PathBuf },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

use std::path::{Path, PathBuf};

use crate::project::{parse_project, Talk};
use crate::ExtractError;

/// Recognized project-file suffix.
pub const PROJECT_SUFFIX: &str = ".vvproj";

/// Suffix of the transcript written next to the project file.
const TRANSCRIPT_SUFFIX: &str = ".txt";

/// Ideographic full stop appended to every extracted line.
const SENTENCE_END: char = '。';

/// Join the utterances of a talk root into transcript text.
///
/// Lines keep `audioKeys` order, each terminated with `。` and joined with a
/// single `\n`. An empty key list yields an empty string.
pub fn transcript_text(talk: &Talk) -> Result<String, ExtractError> {
    let mut lines = Vec::with_capacity(talk.audio_keys.len());
    for key in &talk.audio_keys {
        let item = talk
            .audio_items
            .get(key)
            .ok_or_else(|| ExtractError::MissingItem { key: key.clone() })?;
        let text = item
            .text
            .as_deref()
            .ok_or_else(|| ExtractError::MissingText { key: key.clone() })?;
        lines.push(format!("{text}{SENTENCE_END}"));
    }
    Ok(lines.join("\n"))
}

/// Destination path for a project file: a trailing `.vvproj` becomes `.txt`.
///
/// A path without the suffix maps to itself; [`extract_file`] rejects that
/// case before writing anything.
pub fn transcript_path(source: &Path) -> PathBuf {
    match source.to_str().and_then(|s| s.strip_suffix(PROJECT_SUFFIX)) {
        Some(stem) => PathBuf::from(format!("{stem}{TRANSCRIPT_SUFFIX}")),
        None => source.to_path_buf(),
    }
}

/// Extract the transcript of one project file to its `.txt` sibling.
///
/// Returns the destination path on success. An existing destination is
/// overwritten; nothing is written when parsing or lookup fails.
pub fn extract_file(source: &Path) -> Result<PathBuf, ExtractError> {
    let destination = transcript_path(source);
    if destination.as_path() == source {
        return Err(ExtractError::SamePath {
            path: source.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(source)?;
    let talk = parse_project(&content)?;
    tracing::debug!(
        source = %source.display(),
        keys = talk.audio_keys.len(),
        "resolved talk root"
    );

    std::fs::write(&destination, transcript_text(&talk)?)?;
    Ok(destination)
}

use std::fs;

use crate::error::{InspectError, Result, Target};
use crate::paths::resolve_within;
use crate::RepoConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContent {
    pub file_path: String,
    pub content: String,
}

impl FileContent {
    /// `# <path>` header, a blank line, then the file verbatim.
    pub fn render(&self) -> String {
        format!("# {}\n\n{}", self.file_path, self.content)
    }
}

/// Read a UTF-8 text file given relative to the repository root.
pub fn read_file(config: &RepoConfig, file_path: &str) -> Result<FileContent> {
    let target = Target::File;
    let full_path = resolve_within(config.root(), file_path, target)?;

    if !full_path.exists() {
        return Err(InspectError::NotFound {
            target,
            path: file_path.to_string(),
        });
    }
    if !full_path.is_file() {
        return Err(InspectError::WrongType {
            target,
            path: file_path.to_string(),
        });
    }

    let bytes = fs::read(&full_path).map_err(|source| InspectError::Io {
        target,
        path: file_path.to_string(),
        source,
    })?;
    let content = String::from_utf8(bytes).map_err(|_| InspectError::DecodeFailure {
        path: file_path.to_string(),
    })?;

    Ok(FileContent {
        file_path: file_path.to_string(),
        content,
    })
}

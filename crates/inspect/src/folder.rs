use std::fs;

use crate::error::{InspectError, Result, Target};
use crate::paths::resolve_within;
use crate::tree::EntryKind;
use crate::RepoConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderEntry {
    pub name: String,
    pub kind: EntryKind,
}

impl FolderEntry {
    pub fn render(&self) -> String {
        match self.kind {
            EntryKind::File => format!("📄 {}", self.name),
            EntryKind::Directory => format!("📁 {}/", self.name),
        }
    }
}

/// Immediate children of one folder, sorted by their rendered form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderListing {
    pub folder_path: String,
    pub entries: Vec<FolderEntry>,
}

impl FolderListing {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn render(&self) -> String {
        if self.entries.is_empty() {
            return format!("Folder '{}' is empty", self.folder_path);
        }
        let lines: Vec<String> = self.entries.iter().map(FolderEntry::render).collect();
        format!(
            "Contents of folder '{}':\n\n{}",
            self.folder_path,
            lines.join("\n")
        )
    }
}

/// List the direct children of `folder_path` (relative to the repository root).
///
/// Symlinks are classified by what they point to; entries that are neither a
/// file nor a directory are left out.
pub fn list_folder(config: &RepoConfig, folder_path: &str) -> Result<FolderListing> {
    let target = Target::Folder;
    let full_path = resolve_within(config.root(), folder_path, target)?;

    if !full_path.exists() {
        return Err(InspectError::NotFound {
            target,
            path: folder_path.to_string(),
        });
    }
    if !full_path.is_dir() {
        return Err(InspectError::WrongType {
            target,
            path: folder_path.to_string(),
        });
    }

    let io_err = |source| InspectError::Io {
        target,
        path: folder_path.to_string(),
        source,
    };

    let mut entries = Vec::new();
    for item in fs::read_dir(&full_path).map_err(io_err)? {
        let item = item.map_err(io_err)?;
        let path = item.path();
        let kind = if path.is_file() {
            EntryKind::File
        } else if path.is_dir() {
            EntryKind::Directory
        } else {
            continue;
        };
        entries.push(FolderEntry {
            name: item.file_name().to_string_lossy().into_owned(),
            kind,
        });
    }
    entries.sort_by_cached_key(FolderEntry::render);

    Ok(FolderListing {
        folder_path: folder_path.to_string(),
        entries,
    })
}

//! Bounded directory outline.
//!
//! The walk is a two-phase visit: every entry that passes the [`EntryFilter`] is
//! listed, and only afterwards does the [`DepthPolicy`] decide whether a listed
//! directory is descended into. Keeping the two apart lets each be tested alone.

use std::cmp::Ordering;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

use crate::RepoConfig;

/// Directories at this nesting level (root = 0) or deeper are listed but not entered.
pub const MAX_DEPTH: usize = 3;

/// Directory names never listed in the outline.
pub const IGNORED_DIRS: &[&str] = &[
    "__pycache__",
    "node_modules",
    ".git",
    "venv",
    "env",
    "build",
    "dist",
    ".pytest_cache",
];

/// Compiled-bytecode suffixes never listed in the outline.
pub const BYTECODE_SUFFIXES: &[&str] = &[".pyc", ".pyo"];

const INDENT: &str = "  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Directory,
    File,
}

/// One outline line: a directory at its nesting level, or a file one level
/// below its parent directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub depth: usize,
    pub name: String,
    pub kind: EntryKind,
}

impl TreeEntry {
    pub fn render(&self) -> String {
        let indent = INDENT.repeat(self.depth);
        match self.kind {
            EntryKind::Directory => format!("{indent}{}/", self.name),
            EntryKind::File => format!("{indent}{}", self.name),
        }
    }
}

/// Decides which listed directories are entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthPolicy {
    pub max_depth: usize,
}

impl Default for DepthPolicy {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
        }
    }
}

impl DepthPolicy {
    pub fn descends_into(&self, level: usize) -> bool {
        level < self.max_depth
    }
}

/// Decides which entries are listed at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntryFilter;

impl EntryFilter {
    pub fn allows(&self, name: &str, kind: EntryKind) -> bool {
        if name.starts_with('.') {
            return false;
        }
        match kind {
            EntryKind::Directory => !IGNORED_DIRS.contains(&name),
            EntryKind::File => !BYTECODE_SUFFIXES.iter().any(|ext| name.ends_with(ext)),
        }
    }
}

/// The indented structure of a repository, root first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outline {
    pub repo_name: String,
    pub entries: Vec<TreeEntry>,
}

impl Outline {
    /// `Repository: <name>` header, a blank line, then one line per entry.
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.entries.len() + 1);
        lines.push(format!("Repository: {}\n", self.repo_name));
        lines.extend(self.entries.iter().map(TreeEntry::render));
        lines.join("\n")
    }
}

pub fn summarize(config: &RepoConfig) -> Outline {
    summarize_with(config, DepthPolicy::default(), EntryFilter)
}

pub fn summarize_with(config: &RepoConfig, depth: DepthPolicy, filter: EntryFilter) -> Outline {
    let mut entries = Vec::new();

    let mut walker = WalkDir::new(config.root())
        .follow_links(false)
        .sort_by(files_first)
        .into_iter()
        .filter_entry(|e| {
            e.depth() == 0 || filter.allows(&e.file_name().to_string_lossy(), kind_of(e))
        });

    while let Some(next) = walker.next() {
        let entry = match next {
            Ok(entry) => entry,
            Err(err) => {
                log::debug!("skipping unreadable entry: {err}");
                continue;
            }
        };

        let kind = kind_of(&entry);
        let name = if entry.depth() == 0 {
            config.name().to_string()
        } else {
            entry.file_name().to_string_lossy().into_owned()
        };
        entries.push(TreeEntry {
            depth: entry.depth(),
            name,
            kind,
        });

        if entry.file_type().is_dir() && !depth.descends_into(entry.depth()) {
            walker.skip_current_dir();
        }
    }

    Outline {
        repo_name: config.name().to_string(),
        entries,
    }
}

fn kind_of(entry: &DirEntry) -> EntryKind {
    let file_type = entry.file_type();
    if file_type.is_dir() || (file_type.is_symlink() && is_dir_following_links(entry.path())) {
        EntryKind::Directory
    } else {
        EntryKind::File
    }
}

fn is_dir_following_links(path: &Path) -> bool {
    std::fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
}

/// Orders by the same kind the entry renders as, so a symlinked directory
/// sorts with the directories.
fn files_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    let is_dir = |e: &DirEntry| kind_of(e) == EntryKind::Directory;
    is_dir(a)
        .cmp(&is_dir(b))
        .then_with(|| a.file_name().cmp(b.file_name()))
}

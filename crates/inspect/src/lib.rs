//! # Repo Inspect
//!
//! Read-only inspection of a single repository root.
//!
//! ## Operations
//!
//! ```text
//! RepoConfig (root, resolved once)
//!     │
//!     ├──> overview()     Outline (depth-capped walk) + README
//!     ├──> list_folder()  Path Guard ─> immediate children
//!     └──> read_file()    Path Guard ─> UTF-8 content
//! ```
//!
//! Every operation is a pure function of the configured root, its arguments,
//! and the current file-system contents. Failures are typed ([`InspectError`])
//! and their `Display` is the text shown to callers.
//!
//! ## Example
//!
//! ```no_run
//! use repo_inspect::{list_folder, RepoConfig};
//!
//! let config = RepoConfig::from_env();
//! match list_folder(&config, "src") {
//!     Ok(listing) => println!("{}", listing.render()),
//!     Err(err) => eprintln!("{err} ({})", err.code()),
//! }
//! ```

mod config;
mod error;
mod file;
mod folder;
mod overview;
mod paths;
mod readme;
mod tree;

pub use config::{RepoConfig, DEFAULT_REPO_PATH, REPO_PATH_ENV};
pub use error::{InspectError, Result, Target};
pub use file::{read_file, FileContent};
pub use folder::{list_folder, FolderEntry, FolderListing};
pub use overview::{overview, RepoOverview};
pub use paths::{is_contained, normalize_lexically, resolve_within};
pub use readme::{locate_readme, Readme, README_CANDIDATES};
pub use tree::{
    summarize, summarize_with, DepthPolicy, EntryFilter, EntryKind, Outline, TreeEntry,
    BYTECODE_SUFFIXES, IGNORED_DIRS, MAX_DEPTH,
};

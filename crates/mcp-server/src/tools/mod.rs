//! Git repo MCP tool surface.
//!
//! Schemas, dispatch, and the tool inventory live in separate submodules; the
//! file-system work itself is in `repo-inspect`.

pub mod catalog;
mod dispatch;
mod schemas;

pub use dispatch::RepoService;

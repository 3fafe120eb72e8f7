use std::env;
use std::path::{Path, PathBuf};

use crate::paths::normalize_lexically;

/// Environment variable selecting the repository root.
pub const REPO_PATH_ENV: &str = "GIT_REPO_PATH";

/// Root used when `GIT_REPO_PATH` is unset. Packagers can bake one in with
/// `GIT_REPO_MCP_DEFAULT_ROOT=... cargo build`.
pub const DEFAULT_REPO_PATH: &str = match option_env!("GIT_REPO_MCP_DEFAULT_ROOT") {
    Some(path) => path,
    None => ".",
};

/// Immutable repository configuration, resolved once at start-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoConfig {
    root: PathBuf,
    name: String,
}

impl RepoConfig {
    /// Resolve the root from `GIT_REPO_PATH`, falling back to the build-time default.
    pub fn from_env() -> Self {
        let raw = env::var(REPO_PATH_ENV).ok();
        Self::from_root(select_root_setting(raw.as_deref()))
    }

    pub fn from_root(root: impl AsRef<Path>) -> Self {
        let root = resolve_root(root.as_ref());
        let name = repo_name(&root);
        Self { root, name }
    }

    /// Absolute (canonical when it exists) repository root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Base name of the root directory.
    pub fn name(&self) -> &str {
        &self.name
    }
}

fn select_root_setting(raw: Option<&str>) -> &str {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_REPO_PATH)
}

fn resolve_root(root: &Path) -> PathBuf {
    match dunce::canonicalize(root) {
        Ok(canonical) => canonical,
        Err(err) => {
            log::warn!(
                "Repository root '{}' cannot be canonicalized ({err}); using it as given",
                root.display()
            );
            let absolute = if root.is_absolute() {
                root.to_path_buf()
            } else {
                env::current_dir()
                    .unwrap_or_else(|_| PathBuf::from("/"))
                    .join(root)
            };
            normalize_lexically(&absolute)
        }
    }
}

fn repo_name(root: &Path) -> String {
    root.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn blank_setting_falls_back_to_default() {
        assert_eq!(select_root_setting(None), DEFAULT_REPO_PATH);
        assert_eq!(select_root_setting(Some("   ")), DEFAULT_REPO_PATH);
        assert_eq!(select_root_setting(Some(" /srv/repo ")), "/srv/repo");
    }

    #[test]
    fn existing_root_is_canonicalized() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir(tmp.path().join("proj")).unwrap();

        let config = RepoConfig::from_root(tmp.path().join("proj/./../proj"));
        let expected = dunce::canonicalize(tmp.path().join("proj")).unwrap();

        assert_eq!(config.root(), expected.as_path());
        assert_eq!(config.name(), "proj");
    }

    #[test]
    fn missing_root_is_kept_absolute() {
        let config = RepoConfig::from_root("/definitely/not/here/../repo");
        assert_eq!(config.root(), Path::new("/definitely/not/repo"));
        assert_eq!(config.name(), "repo");
    }
}

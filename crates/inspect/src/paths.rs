//! Root-locked path resolution.
//!
//! Every caller-supplied path is joined onto the repository root and checked for
//! containment *before* anything is learned about whether it exists. Containment
//! is compared per path component, so a root of `/a/b` never contains `/a/bc`.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::{InspectError, Result, Target};

/// Resolve `requested` against `root`, rejecting anything that lands outside it.
///
/// `root` must already be absolute and normalized (see [`crate::RepoConfig`]).
/// The returned path is canonical when the target exists and lexical otherwise;
/// existence and type checks are left to the caller. A missing target is only
/// accepted when its deepest existing ancestor (following dangling symlinks)
/// also stays inside the root, so a rejection never depends on whether
/// something exists outside it.
pub fn resolve_within(root: &Path, requested: &str, target: Target) -> Result<PathBuf> {
    let outside = || InspectError::OutsideRepository {
        target,
        path: requested.to_string(),
    };

    let lexical = normalize_lexically(&root.join(requested));
    if !is_contained(root, &lexical) {
        return Err(outside());
    }

    match dunce::canonicalize(&lexical) {
        Ok(canonical) if is_contained(root, &canonical) => Ok(canonical),
        // A symlink inside the tree pointing somewhere else.
        Ok(_) => Err(outside()),
        Err(err) => {
            log::debug!("canonicalize '{}' failed: {err}", lexical.display());
            if lands_inside(root, &lexical, MAX_LINK_HOPS) {
                Ok(lexical)
            } else {
                Err(outside())
            }
        }
    }
}

const MAX_LINK_HOPS: usize = 16;

/// Where `path` would land if its missing tail were created, judged from the
/// deepest ancestor that exists on disk.
fn lands_inside(root: &Path, path: &Path, hops: usize) -> bool {
    for ancestor in path.ancestors() {
        let Ok(meta) = fs::symlink_metadata(ancestor) else {
            continue;
        };
        if let Ok(canonical) = dunce::canonicalize(ancestor) {
            return is_contained(root, &canonical);
        }
        if !meta.file_type().is_symlink() {
            return is_contained(root, ancestor);
        }

        // Dangling symlink: follow its target by hand.
        if hops == 0 {
            return false;
        }
        let Ok(link) = fs::read_link(ancestor) else {
            return false;
        };
        let Some(parent) = ancestor.parent().and_then(|p| dunce::canonicalize(p).ok()) else {
            return false;
        };
        let mut target = normalize_lexically(&parent.join(link));
        if let Ok(rest) = path.strip_prefix(ancestor) {
            target = normalize_lexically(&target.join(rest));
        }
        return is_contained(root, &target) && lands_inside(root, &target, hops - 1);
    }
    false
}

/// Segment-aware containment: `path` equals `root` or is nested under it.
pub fn is_contained(root: &Path, path: &Path) -> bool {
    path.starts_with(root)
}

/// Resolve `.` and `..` without touching the file system.
///
/// `..` never climbs above the path's root component.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(prefix) => out.push(prefix.as_os_str()),
            Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            Component::Normal(name) => out.push(name),
        }
    }
    out
}

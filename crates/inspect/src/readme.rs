use std::fs;
use std::path::Path;

/// Probed in order directly under the repository root.
pub const README_CANDIDATES: &[&str] = &[
    "README.md",
    "README.rst",
    "README.txt",
    "readme.md",
    "readme.txt",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Readme {
    pub file_name: &'static str,
    pub content: String,
}

/// First candidate that is a regular file holding UTF-8 text.
pub fn locate_readme(root: &Path) -> Option<Readme> {
    README_CANDIDATES.iter().find_map(|&file_name| {
        let path = root.join(file_name);
        if !path.is_file() {
            return None;
        }
        match fs::read_to_string(&path) {
            Ok(content) => Some(Readme { file_name, content }),
            Err(err) => {
                log::debug!("skipping unreadable {file_name}: {err}");
                None
            }
        }
    })
}

use crate::readme::{locate_readme, Readme};
use crate::tree::{summarize, Outline};
use crate::RepoConfig;

/// Structure outline plus README, built fresh per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoOverview {
    pub outline: Outline,
    pub readme: Option<Readme>,
}

impl RepoOverview {
    pub fn render(&self) -> String {
        let structure = self.outline.render();
        let readme = match self.readme.as_ref().filter(|r| !r.content.is_empty()) {
            Some(readme) => readme.content.clone(),
            None => format!(
                "No README file found in repository: {}",
                self.outline.repo_name
            ),
        };
        format!(
            "# REPOSITORY OVERVIEW\n\n## Project Structure\n\n{structure}\n\n## README Content\n\n{readme}"
        )
    }
}

/// Never fails: unreadable entries are left out of the outline.
pub fn overview(config: &RepoConfig) -> RepoOverview {
    RepoOverview {
        outline: summarize(config),
        readme: locate_readme(config.root()),
    }
}

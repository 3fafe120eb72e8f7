use repo_inspect::RepoConfig;
use repo_protocol::{ServerIdent, ToolInventory};

use super::dispatch::{RepoService, SERVER_NAME};

pub fn tool_inventory(version: &str) -> ToolInventory {
    // Tool metadata does not depend on the root; avoid touching the environment.
    let service = RepoService::new(RepoConfig::from_root("/"));
    ToolInventory {
        server: ServerIdent {
            name: SERVER_NAME.to_string(),
            version: version.to_string(),
        },
        tools: service.tool_descriptors(),
    }
}

pub fn tool_inventory_json(version: &str) -> anyhow::Result<String> {
    repo_protocol::serialize_json_pretty(&tool_inventory(version))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn inventory_lists_the_three_tools() {
        let inventory = tool_inventory("0.0.0-test");
        let mut names: Vec<&str> = inventory.tool_names().collect();
        names.sort_unstable();
        assert_eq!(names, vec!["get_file", "get_files_from_folder", "overview"]);
        assert!(inventory.tools.iter().all(|t| t.description.is_some()));
    }

    #[test]
    fn inventory_json_round_trips() {
        let raw = tool_inventory_json("1.2.3").expect("inventory serializes");
        assert!(!raw.is_empty());
        let parsed: ToolInventory = serde_json::from_str(&raw).expect("valid json");
        assert_eq!(parsed.server.name, "git-repo-mcp");
        assert_eq!(parsed.server.version, "1.2.3");
    }
}

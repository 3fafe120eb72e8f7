use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetFileRequest {
    /// File path relative to the repository root
    #[schemars(
        description = "Relative path to the file from repository root (e.g., 'src/main.py', 'docs/api.md')"
    )]
    pub file_path: String,
}

use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetFilesFromFolderRequest {
    /// Folder path relative to the repository root
    #[schemars(
        description = "Relative path to the folder from repository root (e.g., 'src', 'docs', 'examples')"
    )]
    pub folder_path: String,
}

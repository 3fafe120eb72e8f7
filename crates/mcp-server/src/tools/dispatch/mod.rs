mod router;

use repo_inspect::RepoConfig;
use repo_protocol::ToolDescriptor;
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use std::sync::Arc;

use super::schemas::get_file::GetFileRequest;
use super::schemas::get_files_from_folder::GetFilesFromFolderRequest;

pub(crate) const SERVER_NAME: &str = "git-repo-mcp";

const INSTRUCTIONS: &str = "Read-only access to one repository. Start with `overview` \
(structure + README), browse with `get_files_from_folder`, read with `get_file`. \
All paths are relative to the repository root.";

/// MCP service for one repository root. Cheap to clone; the root is shared.
#[derive(Clone)]
pub struct RepoService {
    config: Arc<RepoConfig>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl RepoService {
    pub fn new(config: RepoConfig) -> Self {
        Self {
            config: Arc::new(config),
            tool_router: Self::tool_router(),
        }
    }

    pub(crate) fn config(&self) -> Arc<RepoConfig> {
        Arc::clone(&self.config)
    }

    /// Registered tools, in registration order.
    pub fn tool_descriptors(&self) -> Vec<ToolDescriptor> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|tool| ToolDescriptor {
                name: tool.name.to_string(),
                description: tool.description.map(|d| d.to_string()),
            })
            .collect()
    }

    #[tool(description = "Get repository overview: README content and project structure")]
    async fn overview(&self) -> Result<CallToolResult, McpError> {
        router::overview::overview(self).await
    }

    #[tool(
        description = "Get all files from a specific folder in the repository (non-recursive). Files are marked 📄, folders 📁."
    )]
    async fn get_files_from_folder(
        &self,
        Parameters(request): Parameters<GetFilesFromFolderRequest>,
    ) -> Result<CallToolResult, McpError> {
        router::folder::get_files_from_folder(self, request).await
    }

    #[tool(description = "Get the content of any specific file in the repository")]
    async fn get_file(
        &self,
        Parameters(request): Parameters<GetFileRequest>,
    ) -> Result<CallToolResult, McpError> {
        router::file::get_file(self, request).await
    }
}

#[tool_handler]
impl ServerHandler for RepoService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(INSTRUCTIONS.to_string()),
            ..Default::default()
        }
    }
}

fn text_result(text: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text)])
}

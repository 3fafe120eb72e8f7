// Per-tool dispatch functions used by the MCP tool router.

pub(super) mod error;
pub(super) mod file;
pub(super) mod folder;
pub(super) mod overview;

use rmcp::ErrorData as McpError;

/// Run a blocking file-system operation off the transport loop.
pub(super) async fn run_blocking<T, F>(op: F) -> Result<T, McpError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(op)
        .await
        .map_err(|err| McpError::internal_error(format!("inspection task failed: {err}"), None))
}

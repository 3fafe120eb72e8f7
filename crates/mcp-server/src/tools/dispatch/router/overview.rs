use super::super::{text_result, CallToolResult, McpError, RepoService};
use super::run_blocking;

/// Repository structure outline plus README. Never reports a tool error.
pub(in crate::tools::dispatch) async fn overview(
    service: &RepoService,
) -> Result<CallToolResult, McpError> {
    let config = service.config();
    let text = run_blocking(move || repo_inspect::overview(&config).render()).await?;
    Ok(text_result(text))
}

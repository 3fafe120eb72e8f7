use super::super::{text_result, CallToolResult, McpError, RepoService};
use crate::tools::schemas::get_file::GetFileRequest;

use super::error::{inspect_error, log_failure};
use super::run_blocking;

/// Read a whole UTF-8 file within the repository root.
pub(in crate::tools::dispatch) async fn get_file(
    service: &RepoService,
    request: GetFileRequest,
) -> Result<CallToolResult, McpError> {
    let config = service.config();
    let file_path = request.file_path;
    log::debug!("get_file '{file_path}'");

    let file = run_blocking(move || repo_inspect::read_file(&config, &file_path)).await?;
    match file {
        Ok(file) => Ok(text_result(file.render())),
        Err(err) => {
            log_failure("get_file", &err);
            Ok(inspect_error(&err))
        }
    }
}

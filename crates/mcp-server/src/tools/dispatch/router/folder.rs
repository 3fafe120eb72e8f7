use super::super::{text_result, CallToolResult, McpError, RepoService};
use crate::tools::schemas::get_files_from_folder::GetFilesFromFolderRequest;

use super::error::{inspect_error, log_failure};
use super::run_blocking;

/// List the immediate children of a folder within the repository root.
pub(in crate::tools::dispatch) async fn get_files_from_folder(
    service: &RepoService,
    request: GetFilesFromFolderRequest,
) -> Result<CallToolResult, McpError> {
    let config = service.config();
    let folder_path = request.folder_path;
    log::debug!("get_files_from_folder '{folder_path}'");

    let listing =
        run_blocking(move || repo_inspect::list_folder(&config, &folder_path)).await?;
    match listing {
        Ok(listing) => Ok(text_result(listing.render())),
        Err(err) => {
            log_failure("get_files_from_folder", &err);
            Ok(inspect_error(&err))
        }
    }
}

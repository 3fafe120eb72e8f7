use super::super::{CallToolResult, Content};
use repo_inspect::{InspectError, Target};
use repo_protocol::ErrorEnvelope;
use serde_json::json;

pub(super) fn tool_error_envelope(error: ErrorEnvelope) -> CallToolResult {
    let mut result = CallToolResult::error(vec![Content::text(error.message.clone())]);
    result.structured_content = Some(json!({ "error": error }));
    result
}

/// Tagged failure: `is_error` is set and `structured_content.error.code` names the kind.
pub(super) fn inspect_error(err: &InspectError) -> CallToolResult {
    let mut envelope = ErrorEnvelope::new(err.code(), err.to_string());
    if let Some(hint) = hint_for(err) {
        envelope = envelope.with_hint(hint);
    }
    tool_error_envelope(envelope)
}

/// I/O failures are unexpected and logged at warn; every other kind is a
/// normal answer to a bad request.
pub(super) fn failure_level(err: &InspectError) -> log::Level {
    if matches!(err, InspectError::Io { .. }) {
        log::Level::Warn
    } else {
        log::Level::Debug
    }
}

pub(super) fn log_failure(tool: &str, err: &InspectError) {
    log::log!(failure_level(err), "{tool} failed: {err}");
}

fn hint_for(err: &InspectError) -> Option<&'static str> {
    match err {
        InspectError::OutsideRepository { .. } => {
            Some("Paths are relative to the repository root and may not leave it.")
        }
        InspectError::NotFound { .. } => {
            Some("Call get_files_from_folder on the parent folder to see what exists.")
        }
        InspectError::WrongType {
            target: Target::Folder,
            ..
        } => Some("This is a file; read it with get_file."),
        InspectError::WrongType {
            target: Target::File,
            ..
        } => Some("This is a folder; list it with get_files_from_folder."),
        InspectError::DecodeFailure { .. } | InspectError::Io { .. } => None,
    }
}

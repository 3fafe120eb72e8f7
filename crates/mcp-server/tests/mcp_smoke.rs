use anyhow::{Context, Result};
use rmcp::{
    model::{CallToolRequestParam, CallToolResult},
    service::{RoleClient, RunningService, ServiceExt},
    transport::TokioChildProcess,
};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::process::Command;

fn locate_git_repo_mcp_bin() -> Result<PathBuf> {
    if let Some(path) = option_env!("CARGO_BIN_EXE_git-repo-mcp") {
        return Ok(PathBuf::from(path));
    }

    // `.../target/{debug|release}/deps/<test>` → `.../target/{debug|release}/git-repo-mcp`
    if let Ok(exe) = std::env::current_exe() {
        if let Some(target_profile_dir) = exe.parent().and_then(|p| p.parent()) {
            let candidate = target_profile_dir.join("git-repo-mcp");
            if candidate.exists() {
                return Ok(candidate);
            }
        }
    }

    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let repo_root = manifest_dir
        .ancestors()
        .nth(2)
        .context("failed to resolve repo root from CARGO_MANIFEST_DIR")?;
    for rel in ["target/debug/git-repo-mcp", "target/release/git-repo-mcp"] {
        let candidate = repo_root.join(rel);
        if candidate.exists() {
            return Ok(candidate);
        }
    }

    anyhow::bail!("failed to locate git-repo-mcp binary")
}

async fn start_server(repo: &Path) -> Result<RunningService<RoleClient, ()>> {
    let bin = locate_git_repo_mcp_bin()?;

    let mut cmd = Command::new(bin);
    cmd.env("GIT_REPO_PATH", repo);
    cmd.env("RUST_LOG", "warn");

    let transport = TokioChildProcess::new(cmd).context("spawn mcp server")?;
    tokio::time::timeout(Duration::from_secs(10), ().serve(transport))
        .await
        .context("timeout starting MCP server")?
        .context("initialize MCP session")
}

async fn call(
    service: &RunningService<RoleClient, ()>,
    name: &'static str,
    args: serde_json::Value,
) -> Result<CallToolResult> {
    tokio::time::timeout(
        Duration::from_secs(10),
        service.call_tool(CallToolRequestParam {
            name: name.into(),
            arguments: args.as_object().cloned(),
        }),
    )
    .await
    .with_context(|| format!("timeout calling {name}"))?
    .with_context(|| format!("call {name}"))
}

fn first_text(result: &CallToolResult) -> Result<&str> {
    result
        .content
        .first()
        .and_then(|c| c.as_text())
        .map(|t| t.text.as_str())
        .context("tool did not return text content")
}

fn error_code(result: &CallToolResult) -> Option<&str> {
    result
        .structured_content
        .as_ref()?
        .get("error")?
        .get("code")?
        .as_str()
}

/// `<tmp>/repo` with a README, `src/a.py`, `src/main.py`, `src/lib/`, plus
/// `<tmp>/outside.txt` and a sibling `<tmp>/repo2`.
fn sample_repo() -> Result<tempfile::TempDir> {
    let tmp = tempfile::tempdir().context("tempdir")?;
    let repo = tmp.path().join("repo");
    std::fs::create_dir_all(repo.join("src").join("lib")).context("mkdir src/lib")?;
    std::fs::create_dir_all(repo.join("node_modules").join("pkg")).context("mkdir node_modules")?;
    std::fs::create_dir_all(tmp.path().join("repo2")).context("mkdir repo2")?;
    std::fs::write(repo.join("README.md"), "Hello").context("write README")?;
    std::fs::write(repo.join("src").join("a.py"), "a = 1\n").context("write a.py")?;
    std::fs::write(repo.join("src").join("main.py"), "print('hi')\n")
        .context("write main.py")?;
    std::fs::write(tmp.path().join("outside.txt"), "secret").context("write outside")?;
    std::fs::write(tmp.path().join("repo2").join("x.txt"), "x").context("write repo2/x")?;
    Ok(tmp)
}

#[tokio::test]
async fn mcp_exposes_three_tools() -> Result<()> {
    let tmp = sample_repo()?;
    let service = start_server(&tmp.path().join("repo")).await?;

    let tools = tokio::time::timeout(
        Duration::from_secs(10),
        service.list_tools(Default::default()),
    )
    .await
    .context("timeout listing tools")??;
    let tool_names: HashSet<&str> = tools.tools.iter().map(|t| t.name.as_ref()).collect();
    assert_eq!(
        tool_names,
        HashSet::from(["overview", "get_files_from_folder", "get_file"])
    );

    service.cancel().await.context("shutdown")?;
    Ok(())
}

#[tokio::test]
async fn print_tools_emits_inventory_json() -> Result<()> {
    let bin = locate_git_repo_mcp_bin()?;
    let output = tokio::time::timeout(
        Duration::from_secs(10),
        Command::new(bin).arg("--print-tools").output(),
    )
    .await
    .context("timeout running --print-tools")??;
    assert!(output.status.success(), "exit status: {}", output.status);

    let inventory: serde_json::Value =
        serde_json::from_slice(&output.stdout).context("inventory is JSON")?;
    assert_eq!(inventory["server"]["name"], "git-repo-mcp");
    assert_eq!(inventory["tools"].as_array().map(Vec::len), Some(3));
    Ok(())
}

#[tokio::test]
async fn overview_contains_structure_and_readme() -> Result<()> {
    let tmp = sample_repo()?;
    let service = start_server(&tmp.path().join("repo")).await?;

    let result = call(&service, "overview", serde_json::json!({})).await?;
    assert_ne!(result.is_error, Some(true), "overview returned error");
    let text = first_text(&result)?;

    assert!(text.starts_with("# REPOSITORY OVERVIEW"));
    assert!(text.contains("Repository: repo\n"));
    assert!(text.contains("\n  src/\n"), "missing src/ line:\n{text}");
    assert!(text.contains("\n    main.py"), "missing nested main.py:\n{text}");
    assert!(!text.contains("node_modules"), "ignored dir leaked:\n{text}");
    assert!(text.ends_with("## README Content\n\nHello"));

    service.cancel().await.context("shutdown")?;
    Ok(())
}

#[tokio::test]
async fn folder_listing_and_status_messages() -> Result<()> {
    let tmp = sample_repo()?;
    let service = start_server(&tmp.path().join("repo")).await?;

    let listing = call(
        &service,
        "get_files_from_folder",
        serde_json::json!({ "folder_path": "src" }),
    )
    .await?;
    assert_ne!(listing.is_error, Some(true));
    assert_eq!(
        first_text(&listing)?,
        "Contents of folder 'src':\n\n📁 lib/\n📄 a.py\n📄 main.py"
    );

    let empty = call(
        &service,
        "get_files_from_folder",
        serde_json::json!({ "folder_path": "src/lib" }),
    )
    .await?;
    assert_ne!(empty.is_error, Some(true));
    assert_eq!(first_text(&empty)?, "Folder 'src/lib' is empty");

    let missing = call(
        &service,
        "get_files_from_folder",
        serde_json::json!({ "folder_path": "missing" }),
    )
    .await?;
    assert_eq!(missing.is_error, Some(true));
    assert_eq!(error_code(&missing), Some("not_found"));
    assert_eq!(first_text(&missing)?, "Folder not found: missing");

    let sibling = call(
        &service,
        "get_files_from_folder",
        serde_json::json!({ "folder_path": "../repo2" }),
    )
    .await?;
    assert_eq!(error_code(&sibling), Some("outside_repository"));

    service.cancel().await.context("shutdown")?;
    Ok(())
}

#[tokio::test]
async fn file_reads_are_root_locked() -> Result<()> {
    let tmp = sample_repo()?;
    let service = start_server(&tmp.path().join("repo")).await?;

    let file = call(
        &service,
        "get_file",
        serde_json::json!({ "file_path": "src/a.py" }),
    )
    .await?;
    assert_ne!(file.is_error, Some(true));
    assert_eq!(first_text(&file)?, "# src/a.py\n\na = 1\n");

    for escape in ["../outside.txt", "../does-not-exist.txt"] {
        let result = call(
            &service,
            "get_file",
            serde_json::json!({ "file_path": escape }),
        )
        .await?;
        assert_eq!(result.is_error, Some(true), "{escape} was not rejected");
        assert_eq!(error_code(&result), Some("outside_repository"));
        assert_eq!(first_text(&result)?, "Error: File path outside repository");
    }

    let folder = call(
        &service,
        "get_file",
        serde_json::json!({ "file_path": "src" }),
    )
    .await?;
    assert_eq!(error_code(&folder), Some("wrong_type"));

    service.cancel().await.context("shutdown")?;
    Ok(())
}

use anyhow::{Context, Result};
use repo_protocol::{ServerIdent, ToolDescriptor, ToolInventory};
use rmcp::{service::ServiceExt, transport::TokioChildProcess};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::process::Command;

const SERVER_BIN: &str = "git-repo-mcp";
const STARTUP_TIMEOUT: Duration = Duration::from_secs(10);

fn resolve_server_exe(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(path) = explicit {
        return path;
    }

    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            let candidate = dir.join(SERVER_BIN);
            if candidate.exists() {
                return candidate;
            }
        }
    }

    PathBuf::from(SERVER_BIN)
}

/// Spawn the MCP server for `repo`, ask it for its tools, and shut it down.
pub async fn list_server_tools(server: Option<PathBuf>, repo: &Path) -> Result<ToolInventory> {
    let exe = resolve_server_exe(server);
    log::debug!("spawning {}", exe.display());

    let mut cmd = Command::new(&exe);
    cmd.env("GIT_REPO_PATH", repo);

    let transport = TokioChildProcess::new(cmd)
        .with_context(|| format!("failed to spawn {}", exe.display()))?;
    let client = tokio::time::timeout(STARTUP_TIMEOUT, ().serve(transport))
        .await
        .context("timeout starting MCP server")?
        .context("MCP handshake failed")?;

    let server = client
        .peer_info()
        .map(|info| ServerIdent {
            name: info.server_info.name.clone(),
            version: info.server_info.version.clone(),
        })
        .unwrap_or_else(|| ServerIdent {
            name: SERVER_BIN.to_string(),
            version: String::new(),
        });

    let listed = tokio::time::timeout(STARTUP_TIMEOUT, client.list_all_tools())
        .await
        .context("timeout listing tools")?
        .context("tools/list failed")?;
    client.cancel().await.context("failed to stop MCP server")?;

    Ok(ToolInventory {
        server,
        tools: listed
            .into_iter()
            .map(|tool| ToolDescriptor {
                name: tool.name.to_string(),
                description: tool.description.map(|d| d.to_string()),
            })
            .collect(),
    })
}

pub fn print_inventory(inventory: &ToolInventory, json: bool) -> Result<()> {
    if json {
        println!("{}", repo_protocol::serialize_json_pretty(inventory)?);
        return Ok(());
    }

    println!("{} {}", inventory.server.name, inventory.server.version);
    for tool in &inventory.tools {
        match &tool.description {
            Some(description) => println!("  {:<24} {description}", tool.name),
            None => println!("  {}", tool.name),
        }
    }
    Ok(())
}

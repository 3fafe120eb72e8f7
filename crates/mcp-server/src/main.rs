//! Git Repo MCP Server
//!
//! Gives AI agents read-only access to one repository via the MCP protocol.
//!
//! ## Tools
//!
//! - `overview` - Project structure (depth-capped outline) + README content
//! - `get_files_from_folder` - Immediate children of a folder (root-locked)
//! - `get_file` - Full UTF-8 content of a file (root-locked)
//!
//! ## Configuration
//!
//! - `GIT_REPO_PATH` - repository root (default: build-time `GIT_REPO_MCP_DEFAULT_ROOT`, else `.`)
//! - `RUST_LOG` - log filter, written to stderr (default: `warn`)
//!
//! ## Usage
//!
//! Add to your MCP client configuration:
//! ```json
//! {
//!   "mcpServers": {
//!     "git-repo": {
//!       "command": "git-repo-mcp",
//!       "env": { "GIT_REPO_PATH": "/path/to/repo" }
//!     }
//!   }
//! }
//! ```

use anyhow::Result;
use repo_inspect::RepoConfig;
use rmcp::ServiceExt;
use std::env;

mod tools;

use tools::catalog;
use tools::RepoService;

fn print_help() {
    println!("Git repo MCP server");
    println!();
    println!("Usage: git-repo-mcp [--print-tools|--version|--help]");
    println!();
    println!("Environment:");
    println!(
        "  GIT_REPO_PATH  Repository root (default: {})",
        repo_inspect::DEFAULT_REPO_PATH
    );
    println!("  RUST_LOG       Log filter for stderr (default: warn)");
    println!();
    println!("Flags:");
    println!("  --print-tools  Print tool inventory as JSON and exit");
    println!("  --version      Print version and exit");
    println!("  --help         Print this help and exit");
}

fn handle_cli_args() -> Option<i32> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        return None;
    }

    if args.len() == 1 {
        match args[0].as_str() {
            "--print-tools" => {
                return match catalog::tool_inventory_json(env!("CARGO_PKG_VERSION")) {
                    Ok(json) => {
                        println!("{json}");
                        Some(0)
                    }
                    Err(err) => {
                        eprintln!("failed to serialize tool inventory: {err:#}");
                        Some(1)
                    }
                };
            }
            "--version" | "-V" => {
                println!("git-repo-mcp {}", env!("CARGO_PKG_VERSION"));
                return Some(0);
            }
            "--help" | "-h" => {
                print_help();
                return Some(0);
            }
            _ => {}
        }
    }

    eprintln!("Unknown arguments: {}", args.join(" "));
    print_help();
    Some(2)
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Some(exit_code) = handle_cli_args() {
        std::process::exit(exit_code);
    }

    // Configure logging to stderr only (stdout is for MCP protocol)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let config = RepoConfig::from_env();
    if !config.root().is_dir() {
        log::warn!(
            "Repository root {} is not a directory; tools will report not found",
            config.root().display()
        );
    }
    log::info!(
        "Starting git repo MCP server for {} ({})",
        config.name(),
        config.root().display()
    );

    let service = RepoService::new(config);
    let server = service.serve(rmcp::transport::stdio()).await?;

    // Wait for shutdown
    server.waiting().await?;

    log::info!("Git repo MCP server stopped");
    Ok(())
}

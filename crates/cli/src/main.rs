//! `git-repo`: run the repository inspection tools from a shell.
//!
//! `overview`, `ls`, and `cat` call the library directly; `tools` spawns the
//! MCP server over stdio and prints what it registers.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

mod command;

#[derive(Parser, Debug)]
#[command(name = "git-repo", version, about = "Read-only repository inspection")]
struct Cli {
    /// Repository root. Without it, GIT_REPO_PATH is read the same way the
    /// server reads it (blank means unset), then the build-time default.
    #[arg(long, global = true, value_name = "PATH")]
    repo: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Project structure outline and README content
    Overview,
    /// List the immediate children of a folder
    Ls {
        /// Folder path relative to the repository root
        #[arg(default_value = ".")]
        folder_path: String,
    },
    /// Print a file with its path header
    Cat {
        /// File path relative to the repository root
        file_path: String,
    },
    /// Start the MCP server and list the tools it exposes
    Tools {
        /// Server executable (default: git-repo-mcp next to this binary, then PATH)
        #[arg(long, value_name = "EXE")]
        server: Option<PathBuf>,
        /// Print the inventory as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let config = command::repo_config(cli.repo.as_deref());

    match cli.command {
        Command::Overview => Ok(command::print_overview(&config)),
        Command::Ls { folder_path } => Ok(command::print_folder(&config, &folder_path)),
        Command::Cat { file_path } => Ok(command::print_file(&config, &file_path)),
        Command::Tools { server, json } => {
            let inventory = command::tools::list_server_tools(server, config.root()).await?;
            command::tools::print_inventory(&inventory, json)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

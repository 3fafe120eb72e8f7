pub mod tools;

use repo_inspect::{InspectError, RepoConfig};
use std::path::Path;
use std::process::ExitCode;

pub fn repo_config(repo: Option<&Path>) -> RepoConfig {
    match repo {
        Some(root) => RepoConfig::from_root(root),
        None => RepoConfig::from_env(),
    }
}

pub fn print_overview(config: &RepoConfig) -> ExitCode {
    println!("{}", repo_inspect::overview(config).render());
    ExitCode::SUCCESS
}

pub fn print_folder(config: &RepoConfig, folder_path: &str) -> ExitCode {
    report(repo_inspect::list_folder(config, folder_path).map(|listing| listing.render()))
}

pub fn print_file(config: &RepoConfig, file_path: &str) -> ExitCode {
    report(repo_inspect::read_file(config, file_path).map(|file| file.render()))
}

fn report(result: Result<String, InspectError>) -> ExitCode {
    match result {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::debug!("{} failed: {}", err.path(), err.code());
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

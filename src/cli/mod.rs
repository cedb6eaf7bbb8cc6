//! cli
//!
//! Command-line interface layer for glpick.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments
//! - Drive the run: config, fetch, select, clone
//!
//! # Architecture
//!
//! The driver walks the pipeline strictly top to bottom. Each stage returns
//! a `Result`; the first error aborts the run and surfaces through `main`
//! as a fatal message with a non-zero exit. Nothing is retried and no stage
//! is re-entered.

pub mod args;

pub use args::Cli;

use std::env;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};

use crate::config::Config;
use crate::git;
use crate::gitlab::{project, GitLabClient, ListProjectsOpts};
use crate::ui::output::{self, Verbosity};
use crate::ui::prompts::{self, PromptError};

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub async fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);

    // Loader: read the config file, or collect and persist it interactively.
    let config_path = config_path(&cli)?;
    output::debug(
        format!("config path: {}", config_path.display()),
        verbosity,
    );
    let config = load_or_collect_config(&config_path)?;

    // CLI flags can only turn features off; the config provides the defaults.
    let include_subgroups = !cli.no_subgroups && config.include_subgroups();
    let tag_platforms = !cli.no_platform_tags && config.tag_platforms();

    // Fetcher: one GET, one page.
    let client = match config.timeout() {
        Some(timeout) => {
            GitLabClient::with_timeout(&config.gitlab_url, &config.access_token, timeout)?
        }
        None => GitLabClient::new(&config.gitlab_url, &config.access_token),
    };
    output::debug(
        format!(
            "request URL: {}",
            client.group_projects_url(&config.group_id)
        ),
        verbosity,
    );
    let mut projects = client
        .list_group_projects(&config.group_id, &ListProjectsOpts { include_subgroups })
        .await
        .context("failed to fetch projects")?;

    // Presenter/Selector: sorted listing, one prompt, exact id match.
    project::sort_by_name(&mut projects);
    println!("Available Projects:");
    for project in &projects {
        println!("{}", project.listing_line(tag_platforms));
    }

    let selection = prompts::input("Enter the project ID to clone: ")?;
    let selected = project::find_by_id(&projects, &selection)
        .ok_or_else(|| anyhow!("Invalid project selected"))?;

    // Cloner: delegate to the external git client.
    output::print(format!("Cloning {}...", selected.name), verbosity);
    let workdir = workdir(&cli)?;
    git::clone_repository(&selected.http_url_to_repo, &workdir)
        .context("failed to clone project")?;
    output::success("Project cloned successfully.", verbosity);

    Ok(())
}

/// Resolve the config file path: `--config` wins over `<home>/config.json`.
fn config_path(cli: &Cli) -> Result<PathBuf> {
    match &cli.config {
        Some(path) => Ok(path.clone()),
        None => Ok(Config::default_path()?),
    }
}

/// Resolve the clone working directory: `--cwd` wins over the process cwd.
fn workdir(cli: &Cli) -> Result<PathBuf> {
    match &cli.cwd {
        Some(path) => Ok(path.clone()),
        None => env::current_dir().context("failed to determine working directory"),
    }
}

/// Load the configuration, falling back to interactive collection.
///
/// A file whose required fields are all non-empty is used unmodified. When
/// the file is absent or any field is blank, all three fields are prompted
/// together and the result is persisted for future runs. Optional knobs
/// already present in a partial file survive the re-collection.
fn load_or_collect_config(path: &Path) -> Result<Config> {
    let existing = Config::load(path).context("failed to load configuration")?;
    match existing {
        Some(config) if config.is_complete() => Ok(config),
        existing => {
            let stdin = io::stdin();
            let mut reader = stdin.lock();
            let config = collect_config(existing.unwrap_or_default(), &mut reader)?;
            config.save(path).context("failed to save configuration")?;
            Ok(config)
        }
    }
}

/// Prompt for the three required fields, in fixed order.
fn collect_config<R: BufRead>(mut config: Config, reader: &mut R) -> Result<Config, PromptError> {
    config.gitlab_url =
        prompts::input_from("Enter GitLab URL (e.g., https://gitlab.com/): ", reader)?;
    config.group_id = prompts::input_from("Enter the group ID: ", reader)?;
    config.access_token = prompts::input_from("Enter the access token: ", reader)?;
    Ok(config)
}

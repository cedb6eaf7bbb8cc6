//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Flags
//!
//! All behavior toggles default to the historically shipped behavior:
//! subgroups included, platform tags shown, config at `<home>/config.json`,
//! clone into the current directory.

use clap::Parser;
use std::path::PathBuf;

/// glpick - Pick and clone a project from a GitLab group
#[derive(Parser, Debug)]
#[command(name = "glpick")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Clone into this directory instead of the current one
    #[arg(long, value_name = "PATH")]
    pub cwd: Option<PathBuf>,

    /// Read and write the configuration at this path
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// List only the group's own projects, not those of its subgroups
    #[arg(long)]
    pub no_subgroups: bool,

    /// Do not annotate listing lines with android/ios platform tags
    #[arg(long)]
    pub no_platform_tags: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_preserve_shipped_behavior() {
        let cli = Cli::parse_from(["glpick"]);
        assert!(cli.cwd.is_none());
        assert!(cli.config.is_none());
        assert!(!cli.no_subgroups);
        assert!(!cli.no_platform_tags);
        assert!(!cli.debug);
        assert!(!cli.quiet);
    }

    #[test]
    fn toggles_parse() {
        let cli = Cli::parse_from([
            "glpick",
            "--no-subgroups",
            "--no-platform-tags",
            "--config",
            "/tmp/c.json",
            "--cwd",
            "/tmp/work",
            "-q",
        ]);
        assert!(cli.no_subgroups);
        assert!(cli.no_platform_tags);
        assert_eq!(cli.config.unwrap(), PathBuf::from("/tmp/c.json"));
        assert_eq!(cli.cwd.unwrap(), PathBuf::from("/tmp/work"));
        assert!(cli.quiet);
    }
}

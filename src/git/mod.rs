//! git
//!
//! External `git clone` invocation.
//!
//! Cloning is delegated entirely to the ambient `git` executable; this
//! module implements no part of the git protocol. The child inherits
//! stdout/stderr so the operator sees git's own progress output, and
//! credentials for private projects come from whatever helper the ambient
//! git installation has configured — the token is never injected into the
//! clone URL.

use std::path::Path;
use std::process::Command;

use thiserror::Error;

/// Name of the version-control client executable.
const GIT_PROGRAM: &str = "git";

/// Errors from the clone invocation.
#[derive(Debug, Error)]
pub enum GitError {
    /// The child process could not be started.
    #[error("failed to run {program}: {source}")]
    SpawnFailed {
        program: String,
        source: std::io::Error,
    },

    /// The clone ran but exited non-zero.
    #[error("git clone of '{url}' failed with {status}")]
    CloneFailed { url: String, status: String },
}

/// Clone `url` into `workdir` via `git clone <url>`.
///
/// Blocks until the child exits. Only the exit status is inspected; the
/// child's output streams are inherited, not captured.
pub fn clone_repository(url: &str, workdir: &Path) -> Result<(), GitError> {
    run_clone(GIT_PROGRAM, url, workdir)
}

fn run_clone(program: &str, url: &str, workdir: &Path) -> Result<(), GitError> {
    let status = Command::new(program)
        .arg("clone")
        .arg(url)
        .current_dir(workdir)
        .status()
        .map_err(|e| GitError::SpawnFailed {
            program: program.to_string(),
            source: e,
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(GitError::CloneFailed {
            url: url.to_string(),
            status: status.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_program_is_spawn_failure() {
        let temp = TempDir::new().unwrap();
        let result = run_clone("glpick-no-such-git", "https://example.com/r.git", temp.path());
        assert!(matches!(result, Err(GitError::SpawnFailed { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_is_clone_failure() {
        let temp = TempDir::new().unwrap();
        // `false` ignores its arguments and exits 1.
        let result = run_clone("false", "https://example.com/r.git", temp.path());
        assert!(matches!(result, Err(GitError::CloneFailed { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn zero_exit_is_success() {
        let temp = TempDir::new().unwrap();
        let result = run_clone("true", "https://example.com/r.git", temp.path());
        assert!(result.is_ok());
    }
}

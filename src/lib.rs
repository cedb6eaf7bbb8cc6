//! glpick - Pick and clone a project from a GitLab group
//!
//! glpick is a single-binary tool that lists the projects of a GitLab group
//! (optionally including subgroups), lets the operator pick one by id, and
//! clones it locally via the ambient `git` client.
//!
//! # Architecture
//!
//! The codebase follows a layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, drives the run)
//! - [`config`] - Configuration schema, loading, and persistence
//! - [`gitlab`] - GitLab API client and project records
//! - [`git`] - External `git clone` invocation
//! - [`ui`] - User interaction utilities
//!
//! # Control Flow
//!
//! One run walks a one-directional pipeline with no retry loop:
//!
//! 1. Load the configuration, prompting and persisting it on first run
//! 2. Fetch the group's project listing (one page, one request)
//! 3. Sort, display, and read the operator's selection
//! 4. Clone the selected project into the working directory
//!
//! Every failure along the pipeline is fatal: the driver reports the error
//! and the process exits non-zero. Nothing is retried or rolled back.

pub mod cli;
pub mod config;
pub mod git;
pub mod gitlab;
pub mod ui;

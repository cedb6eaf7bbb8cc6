//! gitlab
//!
//! GitLab API client and project records.
//!
//! # Responsibilities
//!
//! - Issue the single group-projects listing request ([`client`])
//! - Decode, sort, tag, and select project records ([`project`])
//!
//! The client covers exactly one endpoint. Pagination stops at the first
//! page even when the server indicates more results exist, and the token
//! travels only in the query string; both are deliberate.

pub mod client;
pub mod project;

pub use client::{GitLabClient, GitLabError, ListProjectsOpts};
pub use project::{Namespace, Platform, Project};

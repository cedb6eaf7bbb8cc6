//! gitlab::project
//!
//! Project records returned by the group listing endpoint, plus the
//! ordering, tagging, and selection rules applied before display.
//!
//! # Variants
//!
//! Depending on the GitLab version and endpoint shape, the namespaced name
//! arrives either as a top-level `name_with_namespace` or under
//! `namespace.full_path`. [`Project::namespaced_name`] papers over the
//! difference so the rest of the crate never branches on it.

use serde::Deserialize;

/// A single remote project record.
///
/// Immutable once decoded; records live only for the duration of one run
/// and are never persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    /// Numeric identifier, unique per remote instance.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Full human-readable name including the namespace (may be absent).
    #[serde(default)]
    pub name_with_namespace: String,
    /// Owning namespace (may be absent).
    #[serde(default)]
    pub namespace: Option<Namespace>,
    /// HTTP clone URL.
    pub http_url_to_repo: String,
    /// Number of subprojects, when the server reports it.
    #[serde(default)]
    pub subprojects_count: Option<u64>,
}

/// The namespace a project belongs to.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Namespace {
    /// Full path of the namespace (e.g. `group/subgroup`).
    #[serde(default)]
    pub full_path: String,
}

/// Coarse platform classification derived from the namespaced name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Android,
    Ios,
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Android => write!(f, "android"),
            Platform::Ios => write!(f, "ios"),
        }
    }
}

impl Project {
    /// The namespaced name, whichever variant field carries it.
    ///
    /// Prefers the top-level `name_with_namespace`; falls back to the
    /// namespace's `full_path`, then to the bare project name.
    pub fn namespaced_name(&self) -> &str {
        if !self.name_with_namespace.is_empty() {
            return &self.name_with_namespace;
        }
        if let Some(ns) = &self.namespace {
            if !ns.full_path.is_empty() {
                return &ns.full_path;
            }
        }
        &self.name
    }

    /// Derive the platform tag from the namespaced name.
    ///
    /// Substring match, case-insensitive. Android is checked before iOS,
    /// so a name containing both yields Android.
    pub fn platform(&self) -> Option<Platform> {
        let name = self.namespaced_name().to_lowercase();
        if name.contains("android") {
            Some(Platform::Android)
        } else if name.contains("ios") {
            Some(Platform::Ios)
        } else {
            None
        }
    }

    /// Format one listing line: name, id, and an annotation.
    ///
    /// With `tag_platforms` the annotation is the derived platform tag,
    /// falling back to the raw namespaced name when neither substring
    /// matches. Without it, only name and id are printed.
    pub fn listing_line(&self, tag_platforms: bool) -> String {
        if !tag_platforms {
            return format!("{} {}", self.name, self.id);
        }
        let tag = match self.platform() {
            Some(platform) => platform.to_string(),
            None => self.namespaced_name().to_string(),
        };
        format!("{} {} {}", self.name, self.id, tag)
    }
}

/// Sort projects ascending by lowercase-folded name.
///
/// The sort is stable: projects whose folded names compare equal keep
/// their decode order.
pub fn sort_by_name(projects: &mut [Project]) {
    projects.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
}

/// Find the first project whose id's string form matches `input` exactly.
///
/// `input` is expected to be pre-trimmed. Returns `None` when no project
/// matches; the caller decides that this is fatal.
pub fn find_by_id<'a>(projects: &'a [Project], input: &str) -> Option<&'a Project> {
    projects.iter().find(|p| p.id.to_string() == input)
}

//! client::context
//!
//! Identifier defaults and the per-call merge rule.
//!
//! # Merge rule
//!
//! For each slot (project, branch, file, file version):
//! 1. a non-empty identifier on the [`Target`] wins
//! 2. else the non-empty [`Context`] default
//! 3. else the empty string
//!
//! Empty strings count as unset, on either side. An unset slot is not an
//! error here; it becomes an empty path segment and the server rejects the
//! request.

/// Identifiers the client substitutes when a call leaves a slot unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    pub project: Option<String>,
    pub branch: Option<String>,
    pub file: Option<String>,
    pub file_version: Option<String>,
}

/// Identifiers supplied explicitly for one call.
///
/// ```
/// use bild::Target;
///
/// let target = Target::new().project("p1").branch("main").file("f9");
/// assert_eq!(target.project.as_deref(), Some("p1"));
/// assert!(target.file_version.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Target {
    pub project: Option<String>,
    pub branch: Option<String>,
    pub file: Option<String>,
    pub file_version: Option<String>,
}

impl Target {
    /// A target that defers every slot to the client's context.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn project(mut self, id: impl Into<String>) -> Self {
        self.project = Some(id.into());
        self
    }

    pub fn branch(mut self, id: impl Into<String>) -> Self {
        self.branch = Some(id.into());
        self
    }

    pub fn file(mut self, id: impl Into<String>) -> Self {
        self.file = Some(id.into());
        self
    }

    pub fn file_version(mut self, id: impl Into<String>) -> Self {
        self.file_version = Some(id.into());
        self
    }
}

/// Identifiers after merging a [`Target`] with a [`Context`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub project: String,
    pub branch: String,
    pub file: String,
    pub file_version: String,
}

impl Context {
    /// Merge explicit identifiers over these defaults.
    ///
    /// ```
    /// use bild::{Context, Target};
    ///
    /// let context = Context {
    ///     project: Some("stored".into()),
    ///     branch: Some("main".into()),
    ///     ..Context::default()
    /// };
    /// let resolved = context.resolve(&Target::new().project("explicit"));
    ///
    /// assert_eq!(resolved.project, "explicit");
    /// assert_eq!(resolved.branch, "main");
    /// assert_eq!(resolved.file, "");
    /// ```
    pub fn resolve(&self, target: &Target) -> ResolvedTarget {
        ResolvedTarget {
            project: pick(&target.project, &self.project),
            branch: pick(&target.branch, &self.branch),
            file: pick(&target.file, &self.file),
            file_version: pick(&target.file_version, &self.file_version),
        }
    }

    /// Reset every slot to unset.
    pub fn clear(&mut self) {
        *self = Context::default();
    }
}

fn pick(explicit: &Option<String>, default: &Option<String>) -> String {
    explicit
        .as_deref()
        .filter(|id| !id.is_empty())
        .or_else(|| default.as_deref().filter(|id| !id.is_empty()))
        .unwrap_or_default()
        .to_string()
}

//! client::requests
//!
//! Request bodies sent by the endpoint operations.

use serde::Serialize;

/// Role assigned to invited users unless another is given.
pub const DEFAULT_ROLE: &str = "Member";

/// Users to invite, with the role and projects they receive.
///
/// Serializes to `{"emails": [...], "role": "...", "projects": [...]}`.
///
/// ```
/// use bild::AddUsersRequest;
///
/// let request = AddUsersRequest::new(["a@x.com"]);
/// assert_eq!(request.role, "Member");
/// assert!(request.projects.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddUsersRequest {
    /// Email addresses to invite
    pub emails: Vec<String>,
    /// Role name, free-form (the server owns the vocabulary)
    pub role: String,
    /// Project IDs to grant access to
    pub projects: Vec<String>,
}

impl Default for AddUsersRequest {
    fn default() -> Self {
        Self {
            emails: Vec::new(),
            role: DEFAULT_ROLE.to_string(),
            projects: Vec::new(),
        }
    }
}

impl AddUsersRequest {
    /// Invite `emails` as members of no project.
    pub fn new<I, S>(emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            emails: emails.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Override the role.
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Grant access to these projects.
    pub fn projects<I, S>(mut self, projects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.projects = projects.into_iter().map(Into::into).collect();
        self
    }
}

/// Neutral CAD export format produced by the universal-format endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UniversalFormat {
    Stl,
    Step,
}

impl std::fmt::Display for UniversalFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UniversalFormat::Stl => write!(f, "stl"),
            UniversalFormat::Step => write!(f, "step"),
        }
    }
}

/// Body of a universal-format conversion request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UniversalFormatBody<'a> {
    pub file_version: &'a str,
    pub universal_file_format: UniversalFormat,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn add_users_defaults() {
        let request = AddUsersRequest::new(["a@x.com"]);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"emails": ["a@x.com"], "role": "Member", "projects": []})
        );
    }

    #[test]
    fn add_users_overrides() {
        let request = AddUsersRequest::new(vec!["a@x.com".to_string(), "b@x.com".to_string()])
            .role("Admin")
            .projects(["p1"]);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"emails": ["a@x.com", "b@x.com"], "role": "Admin", "projects": ["p1"]})
        );
    }

    #[test]
    fn universal_format_display_and_serde() {
        assert_eq!(UniversalFormat::Stl.to_string(), "stl");
        assert_eq!(UniversalFormat::Step.to_string(), "step");
        assert_eq!(serde_json::to_value(UniversalFormat::Step).unwrap(), json!("step"));
    }

    #[test]
    fn universal_format_body_field_names() {
        let body = UniversalFormatBody {
            file_version: "v3",
            universal_file_format: UniversalFormat::Stl,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"fileVersion": "v3", "universalFileFormat": "stl"})
        );
    }
}

//! client::operations
//!
//! One method per remote endpoint.
//!
//! Identifiers come from the call's [`Target`] merged over the client's
//! context. Unset identifiers are interpolated as empty path segments and
//! left for the server to reject.

use serde_json::Value;

use super::context::{ResolvedTarget, Target};
use super::requests::{AddUsersRequest, UniversalFormat, UniversalFormatBody};
use super::BildClient;
use crate::error::BildError;
use crate::transport::Method;

impl BildClient {
    /// List all users in the organization.
    pub async fn list_users(&self) -> Result<Value, BildError> {
        self.execute(Method::Get, "/users", None).await
    }

    /// Invite users to Bild.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `request.emails` is empty; nothing is sent
    /// - `RemoteRequest` if the server rejects the invitation
    pub async fn add_users(&self, request: AddUsersRequest) -> Result<Value, BildError> {
        if request.emails.is_empty() {
            return Err(BildError::InvalidArgument("No emails provided".into()));
        }

        let body = serde_json::to_value(&request)
            .map_err(|e| BildError::InvalidArgument(e.to_string()))?;
        self.execute(Method::Put, "/users/add", Some(body)).await
    }

    /// List all projects visible to the credential.
    pub async fn list_projects(&self) -> Result<Value, BildError> {
        self.execute(Method::Get, "/projects", None).await
    }

    /// List files in a project.
    pub async fn list_files(&self, target: &Target) -> Result<Value, BildError> {
        let ids = self.context.resolve(target);
        let path = format!("/projects/{}/files", ids.project);
        self.execute(Method::Get, &path, None).await
    }

    /// List users with access to a project.
    pub async fn list_project_users(&self, target: &Target) -> Result<Value, BildError> {
        let ids = self.context.resolve(target);
        let path = format!("/projects/{}/users", ids.project);
        self.execute(Method::Get, &path, None).await
    }

    /// Request an STL export of a file version.
    pub async fn generate_stl(&self, target: &Target) -> Result<Value, BildError> {
        self.generate_universal_format(target, UniversalFormat::Stl).await
    }

    /// Request a STEP export of a file version.
    pub async fn generate_step(&self, target: &Target) -> Result<Value, BildError> {
        self.generate_universal_format(target, UniversalFormat::Step).await
    }

    /// Request an export of a file version in `format`.
    pub async fn generate_universal_format(
        &self,
        target: &Target,
        format: UniversalFormat,
    ) -> Result<Value, BildError> {
        let ids = self.context.resolve(target);
        let body = serde_json::to_value(UniversalFormatBody {
            file_version: &ids.file_version,
            universal_file_format: format,
        })
        .map_err(|e| BildError::InvalidArgument(e.to_string()))?;

        let path = file_path(&ids, "universalFormat");
        self.execute(Method::Post, &path, Some(body)).await
    }

    /// List the organization's metadata field definitions.
    pub async fn list_metadata_fields(&self) -> Result<Value, BildError> {
        self.execute(Method::Get, "/metadataFields", None).await
    }

    /// Get the metadata values attached to a file.
    pub async fn file_metadata(&self, target: &Target) -> Result<Value, BildError> {
        let ids = self.context.resolve(target);
        self.execute(Method::Get, &file_path(&ids, "metadata"), None).await
    }

    /// Get the newest version of a file on a branch.
    pub async fn latest_file_version(&self, target: &Target) -> Result<Value, BildError> {
        let ids = self.context.resolve(target);
        let path = file_path(&ids, "latestFileVersion");
        self.execute(Method::Get, &path, None).await
    }
}

fn file_path(ids: &ResolvedTarget, resource: &str) -> String {
    format!(
        "/projects/{}/branches/{}/files/{}/{}",
        ids.project, ids.branch, ids.file, resource
    )
}

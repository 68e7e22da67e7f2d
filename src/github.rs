//! GitHub REST API Client
//!
//! Thin wrapper over the endpoints needed to put issue cards on classic
//! project boards and to give teams access to repositories. Only the first
//! page of every listing is read.

use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::{Credentials, GitHubConfig};
use crate::error::{BoardError, Result};
use crate::resolve::{find_id, EntityKind, NamedEntity};

/// GitHub API client
pub struct GitHubClient {
    client: Client,
    api_url: String,
    credentials: Credentials,
}

// ============================================================
// Request Types
// ============================================================

/// Repository permission level that can be granted to a team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    Pull,
    Triage,
    Push,
    Maintain,
    Admin,
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Permission::Pull => write!(f, "pull"),
            Permission::Triage => write!(f, "triage"),
            Permission::Push => write!(f, "push"),
            Permission::Maintain => write!(f, "maintain"),
            Permission::Admin => write!(f, "admin"),
        }
    }
}

#[derive(Debug, Serialize)]
struct PermissionRequest {
    permission: Permission,
}

#[derive(Debug, Serialize)]
struct CreateCardRequest {
    note: String,
}

/// Note text for a card pointing at an issue: `{org}/{repo}/issues/{number}`.
///
/// This is plain text on the card, not a linked issue.
pub fn issue_note(organization: &str, repository: &str, issue_number: u64) -> String {
    format!("{}/{}/issues/{}", organization, repository, issue_number)
}

// ============================================================
// Client Implementation
// ============================================================

impl GitHubClient {
    /// Create a new GitHub client from configuration
    pub fn new(config: GitHubConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("lornu-github-projects/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()
            .map_err(|e| BoardError::Client(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_url: config.api_url,
            credentials: config.credentials,
        })
    }

    /// Fail on any non-2xx status, keeping the body for the error message
    async fn check(url: &str, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(BoardError::Api {
            status,
            url: url.to_string(),
            body,
        })
    }

    /// GET a listing of named records (first page only)
    async fn list(&self, path: &str) -> Result<Vec<NamedEntity>> {
        let url = format!("{}{}", self.api_url, path);
        debug!("GET {}", url);

        let request = self.credentials.apply(self.client.get(&url));
        let response = Self::check(&url, request.send().await?).await?;

        Ok(response.json().await?)
    }

    /// List the teams of an organization
    pub async fn list_teams(&self, organization: &str) -> Result<Vec<NamedEntity>> {
        self.list(&format!("/orgs/{}/teams", organization)).await
    }

    /// List the projects attached to a repository
    pub async fn list_projects(
        &self,
        organization: &str,
        repository: &str,
    ) -> Result<Vec<NamedEntity>> {
        self.list(&format!("/repos/{}/{}/projects", organization, repository))
            .await
    }

    /// List the columns of a project
    pub async fn list_columns(&self, project_id: u64) -> Result<Vec<NamedEntity>> {
        self.list(&format!("/projects/{}/columns", project_id)).await
    }

    /// Look up team ID by name
    pub async fn team_id(&self, organization: &str, team_name: &str) -> Result<u64> {
        debug!(org = %organization, team = %team_name, "Looking up team ID");
        let teams = self.list_teams(organization).await?;
        find_id(EntityKind::Team, &teams, team_name)
    }

    /// Look up project ID by name
    pub async fn project_id(
        &self,
        organization: &str,
        repository: &str,
        project_name: &str,
    ) -> Result<u64> {
        debug!(org = %organization, repo = %repository, project = %project_name, "Looking up project ID");
        let projects = self.list_projects(organization, repository).await?;
        debug!(?projects, "Projects in repository");
        find_id(EntityKind::Project, &projects, project_name)
    }

    /// Look up column ID by name
    pub async fn column_id(&self, project_id: u64, column_name: &str) -> Result<u64> {
        debug!(project_id, column = %column_name, "Looking up column ID");
        let columns = self.list_columns(project_id).await?;
        find_id(EntityKind::Column, &columns, column_name)
    }

    /// Grant a team a permission level on a repository
    pub async fn grant_permission(
        &self,
        team_id: u64,
        organization: &str,
        repository: &str,
        permission: Permission,
    ) -> Result<()> {
        let url = format!(
            "{}/teams/{}/repos/{}/{}",
            self.api_url, team_id, organization, repository
        );

        let request = self
            .credentials
            .apply(self.client.put(&url))
            .json(&PermissionRequest { permission });
        let response = Self::check(&url, request.send().await?).await?;

        info!(
            team_id,
            org = %organization,
            repo = %repository,
            permission = %permission,
            status = %response.status(),
            "Granted repository permission"
        );
        Ok(())
    }

    /// Create a note card in a column referencing an issue
    pub async fn create_issue_card(
        &self,
        column_id: u64,
        organization: &str,
        repository: &str,
        issue_number: u64,
    ) -> Result<()> {
        let url = format!("{}/projects/columns/{}/cards", self.api_url, column_id);
        let note = issue_note(organization, repository, issue_number);

        let request = self
            .credentials
            .apply(self.client.post(&url))
            .json(&CreateCardRequest { note: note.clone() });
        let response = Self::check(&url, request.send().await?).await?;

        info!(
            column_id,
            note = %note,
            status = %response.status(),
            "Created card"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_note_format() {
        assert_eq!(
            issue_note("acme-upstream", "widgets", 42),
            "acme-upstream/widgets/issues/42"
        );
    }

    #[test]
    fn test_permission_serializes_lowercase() {
        let body = serde_json::to_value(PermissionRequest {
            permission: Permission::Push,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "permission": "push" }));
    }

    #[test]
    fn test_permission_display_matches_wire_format() {
        for permission in [
            Permission::Pull,
            Permission::Triage,
            Permission::Push,
            Permission::Maintain,
            Permission::Admin,
        ] {
            let wire = serde_json::to_value(permission).unwrap();
            assert_eq!(wire, serde_json::Value::String(permission.to_string()));
        }
    }
}

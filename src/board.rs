//! Project board actions
//!
//! Chains the lookups and writes behind the two CLI commands. Each step
//! waits for the previous one; the first error stops the chain.

use tracing::info;

use crate::error::Result;
use crate::github::{GitHubClient, Permission};

/// Permission given by [`ProjectBoard::add_team_to_repository`]
pub const TEAM_PERMISSION: Permission = Permission::Push;

/// Card to add for an issue, possibly living in another repository
#[derive(Debug, Clone)]
pub struct IssueCard {
    /// Organization owning the board's repository
    pub organization: String,
    /// Repository the board is attached to
    pub repository: String,
    pub project_name: String,
    pub column_name: String,
    /// Organization owning the issue
    pub upstream_organization: String,
    pub issue_number: u64,
    /// Repository owning the issue; defaults to `repository`
    pub upstream_repository: Option<String>,
}

impl IssueCard {
    /// Repository used in the card note
    pub fn issue_repository(&self) -> &str {
        self.upstream_repository
            .as_deref()
            .unwrap_or(&self.repository)
    }
}

pub struct ProjectBoard {
    client: GitHubClient,
}

impl ProjectBoard {
    pub fn new(client: GitHubClient) -> Self {
        Self { client }
    }

    /// Resolve project, then column, then create the issue card
    pub async fn add_card_from_issue(&self, card: &IssueCard) -> Result<()> {
        info!(
            org = %card.organization,
            repo = %card.repository,
            project = %card.project_name,
            column = %card.column_name,
            "Adding issue card"
        );

        let project_id = self
            .client
            .project_id(&card.organization, &card.repository, &card.project_name)
            .await?;
        let column_id = self.client.column_id(project_id, &card.column_name).await?;

        self.client
            .create_issue_card(
                column_id,
                &card.upstream_organization,
                card.issue_repository(),
                card.issue_number,
            )
            .await
    }

    /// Resolve the team, then give it push access to the repository
    pub async fn add_team_to_repository(
        &self,
        organization: &str,
        repository: &str,
        team_name: &str,
    ) -> Result<()> {
        info!(org = %organization, repo = %repository, team = %team_name, "Adding team to repository");

        let team_id = self.client.team_id(organization, team_name).await?;
        self.client
            .grant_permission(team_id, organization, repository, TEAM_PERMISSION)
            .await
    }
}

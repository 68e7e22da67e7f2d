//! GitHub Projects Agent
//!
//! Adds issue cards to GitHub project boards and gives teams push access to
//! repositories, resolving names to IDs along the way.
//!
//! # Usage
//! ```bash
//! # Put acme-upstream/widgets#42 in the "Todo" column of the "Roadmap" board
//! github-projects add-card-from-issue \
//!   --organization acme --repository widgets \
//!   --project Roadmap --column Todo \
//!   --upstream-organization acme-upstream --issue 42
//!
//! # Give the "Core" team push access to acme/widgets
//! github-projects add-team-to-repository \
//!   --organization acme --repository widgets --team Core
//! ```

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use github_projects::config::{DEFAULT_TIMEOUT_SECS, GITHUB_API};
use github_projects::{Credentials, GitHubClient, GitHubConfig, IssueCard, ProjectBoard};

// ============================================================
// CLI Definition
// ============================================================

#[derive(Parser)]
#[command(name = "github-projects")]
#[command(about = "Lornu AI GitHub Projects Agent", long_about = None)]
#[command(version)]
struct Cli {
    /// GitHub user name for basic auth
    #[arg(long, env = "GITHUB_USER")]
    user: Option<String>,

    /// GitHub API token (PAT)
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// GitHub API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = GITHUB_API)]
    api_url: String,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a card referencing an issue to a project board column
    AddCardFromIssue {
        /// Organization owning the board's repository
        #[arg(long)]
        organization: String,

        /// Repository the project board belongs to
        #[arg(long)]
        repository: String,

        /// Project board name
        #[arg(long)]
        project: String,

        /// Column name within the project
        #[arg(long)]
        column: String,

        /// Organization owning the issue
        #[arg(long)]
        upstream_organization: String,

        /// Issue number
        #[arg(long)]
        issue: u64,

        /// Repository owning the issue (default: --repository)
        #[arg(long)]
        upstream_repository: Option<String>,
    },

    /// Give a team push access to a repository
    AddTeamToRepository {
        /// Organization owning the team and repository
        #[arg(long)]
        organization: String,

        /// Repository name
        #[arg(long)]
        repository: String,

        /// Team name
        #[arg(long)]
        team: String,
    },
}

// ============================================================
// Main Entry Point
// ============================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.log_format)?;

    info!("🚀 GitHub Projects Agent starting...");

    let config = GitHubConfig::new(Credentials::new(cli.user, cli.token))
        .with_api_url(cli.api_url)
        .with_timeout(Duration::from_secs(cli.timeout_secs));
    let client = GitHubClient::new(config).context("Failed to initialize GitHub client")?;
    let board = ProjectBoard::new(client);

    match cli.command {
        Commands::AddCardFromIssue {
            organization,
            repository,
            project,
            column,
            upstream_organization,
            issue,
            upstream_repository,
        } => {
            let card = IssueCard {
                organization,
                repository,
                project_name: project,
                column_name: column,
                upstream_organization,
                issue_number: issue,
                upstream_repository,
            };

            info!(
                "➕ Adding {}/{}#{} to {} / {}",
                card.upstream_organization,
                card.issue_repository(),
                card.issue_number,
                card.project_name,
                card.column_name
            );

            board
                .add_card_from_issue(&card)
                .await
                .context("Failed to add card from issue")?;

            println!(
                "✅ Added card for {}/{}#{} to column {}",
                card.upstream_organization,
                card.issue_repository(),
                card.issue_number,
                card.column_name
            );
        }

        Commands::AddTeamToRepository {
            organization,
            repository,
            team,
        } => {
            info!("👥 Granting team {} push on {}/{}", team, organization, repository);

            board
                .add_team_to_repository(&organization, &repository, &team)
                .await
                .context("Failed to add team to repository")?;

            println!("✅ Team {} can push to {}/{}", team, organization, repository);
        }
    }

    Ok(())
}

fn init_logging(verbose: bool, format: LogFormat) -> Result<()> {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let builder = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Text => tracing::subscriber::set_global_default(builder.finish())?,
        LogFormat::Json => tracing::subscriber::set_global_default(builder.json().finish())?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_add_card_from_issue() {
        let cli = Cli::try_parse_from([
            "github-projects",
            "--user",
            "octocat",
            "add-card-from-issue",
            "--organization",
            "acme",
            "--repository",
            "widgets",
            "--project",
            "Roadmap",
            "--column",
            "Todo",
            "--upstream-organization",
            "acme-upstream",
            "--issue",
            "42",
            "--upstream-repository",
            "other-repo",
        ])
        .unwrap();

        assert_eq!(cli.user.as_deref(), Some("octocat"));
        match cli.command {
            Commands::AddCardFromIssue {
                issue,
                upstream_repository,
                ..
            } => {
                assert_eq!(issue, 42);
                assert_eq!(upstream_repository.as_deref(), Some("other-repo"));
            }
            Commands::AddTeamToRepository { .. } => panic!("wrong subcommand"),
        }
    }

    #[test]
    fn test_issue_must_be_a_number() {
        let result = Cli::try_parse_from([
            "github-projects",
            "add-card-from-issue",
            "--organization",
            "acme",
            "--repository",
            "widgets",
            "--project",
            "Roadmap",
            "--column",
            "Todo",
            "--upstream-organization",
            "acme",
            "--issue",
            "forty-two",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_add_team_to_repository() {
        let cli = Cli::try_parse_from([
            "github-projects",
            "add-team-to-repository",
            "--organization",
            "acme",
            "--repository",
            "widgets",
            "--team",
            "Core",
        ])
        .unwrap();

        assert!(matches!(
            cli.command,
            Commands::AddTeamToRepository { ref team, .. } if team == "Core"
        ));
    }
}

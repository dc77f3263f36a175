//! Command-line arguments and their validation into a [`LookupConfig`].
//!
//! Validation happens once, before any client is built, and fails on the first
//! missing input in the order organization, project, column, token.

use clap::Parser;

use board::{ColumnName, LookupError, LookupTarget, OrganizationName, ProjectName, RepositoryName, Scope};
use github::{GithubClientConfig, StaticToken, DEFAULT_API_URL};

/// Environment variable holding the GitHub API token.
pub const TOKEN_VAR: &str = "GITHUB_API_KEY";

/// Print the numeric identifier of a GitHub project board column.
#[derive(Debug, Clone, Parser)]
#[command(name = "board-column-id", version)]
pub struct CliArgs {
    /// Organization containing the project.
    #[arg(long, default_value = "cockroachdb")]
    pub organization: String,

    /// Repository containing the project; searches the organization's boards when empty.
    #[arg(long, default_value = "")]
    pub repo: String,

    /// Project to look up.
    #[arg(long, default_value = "")]
    pub project: String,

    /// Column to fetch from the project.
    #[arg(long, default_value = "")]
    pub column: String,

    /// GitHub API root (override for GitHub Enterprise Server).
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,
}

/// Validated, immutable configuration for one lookup.
#[derive(Debug, Clone)]
pub struct LookupConfig {
    /// What to look up.
    pub target: LookupTarget,
    /// Where the API lives.
    pub client: GithubClientConfig,
    /// Credential for every request.
    pub token: StaticToken,
}

impl LookupConfig {
    /// Validates `args`, reading the token through `env`.
    ///
    /// `env` is the process environment in production (`std::env::var`); tests
    /// pass a closure over a fixed map.
    pub fn from_args<E>(args: &CliArgs, env: E) -> Result<Self, LookupError>
    where
        E: Fn(&str) -> Option<String>,
    {
        let organization = OrganizationName::new(args.organization.as_str())
            .ok_or_else(|| LookupError::configuration("--organization must be specified"))?;
        let project = ProjectName::new(args.project.as_str())
            .ok_or_else(|| LookupError::configuration("--project must be specified"))?;
        let column = ColumnName::new(args.column.as_str())
            .ok_or_else(|| LookupError::configuration("--column must be specified"))?;

        let token = env(TOKEN_VAR).map(StaticToken::new).ok_or_else(|| {
            LookupError::configuration(format!("cannot find {TOKEN_VAR} on local environment"))
        })?;

        let client = GithubClientConfig::new(&args.api_url)
            .map_err(|e| LookupError::configuration(e.to_string()))?;

        Ok(Self {
            target: LookupTarget {
                scope: Scope::new(organization, RepositoryName::new(args.repo.as_str())),
                project,
                column,
            },
            client,
            token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> CliArgs {
        let mut argv = vec!["board-column-id"];
        argv.extend_from_slice(extra);
        CliArgs::try_parse_from(argv).unwrap()
    }

    fn with_token(name: &str) -> Option<String> {
        (name == TOKEN_VAR).then(|| "ghp_test".to_string())
    }

    fn message(result: Result<LookupConfig, LookupError>) -> String {
        result.unwrap_err().to_string()
    }

    #[test]
    fn defaults_match_the_documented_flags() {
        let parsed = args(&[]);
        assert_eq!(parsed.organization, "cockroachdb");
        assert_eq!(parsed.repo, "");
        assert_eq!(parsed.project, "");
        assert_eq!(parsed.column, "");
    }

    #[test]
    fn empty_organization_is_rejected() {
        let parsed = args(&["--organization", "", "--project", "Roadmap", "--column", "Done"]);
        assert_eq!(
            message(LookupConfig::from_args(&parsed, with_token)),
            "--organization must be specified"
        );
    }

    #[test]
    fn project_and_column_are_required() {
        assert_eq!(
            message(LookupConfig::from_args(&args(&["--column", "Done"]), with_token)),
            "--project must be specified"
        );
        assert_eq!(
            message(LookupConfig::from_args(&args(&["--project", "Roadmap"]), with_token)),
            "--column must be specified"
        );
    }

    #[test]
    fn missing_token_is_a_configuration_error() {
        let parsed = args(&["--project", "Roadmap", "--column", "Done"]);
        let err = LookupConfig::from_args(&parsed, |_| None).unwrap_err();
        assert!(matches!(err, LookupError::Configuration { .. }));
        assert_eq!(err.to_string(), "cannot find GITHUB_API_KEY on local environment");
    }

    #[test]
    fn invalid_api_url_is_a_configuration_error() {
        let parsed = args(&["--project", "Roadmap", "--column", "Done", "--api-url", "ftp//nowhere"]);
        let err = LookupConfig::from_args(&parsed, with_token).unwrap_err();
        assert!(matches!(err, LookupError::Configuration { .. }));
    }

    #[test]
    fn empty_repo_selects_organization_scope() {
        let parsed = args(&["--organization", "acme", "--project", "Roadmap", "--column", "Done"]);
        let config = LookupConfig::from_args(&parsed, with_token).unwrap();
        assert_eq!(config.target.scope.to_string(), "organization acme");
        assert_eq!(config.target.project.as_str(), "Roadmap");
        assert_eq!(config.target.column.as_str(), "Done");
    }

    #[test]
    fn repo_selects_repository_scope() {
        let parsed = args(&["--organization", "acme", "--repo", "widgets", "--project", "Roadmap", "--column", "Done"]);
        let config = LookupConfig::from_args(&parsed, with_token).unwrap();
        assert_eq!(config.target.scope.to_string(), "repo acme/widgets");
    }

    #[test]
    fn names_are_forwarded_without_format_checks() {
        let parsed = args(&["--organization", "not a valid login!", "--project", "  Road map ", "--column", "x"]);
        let config = LookupConfig::from_args(&parsed, with_token).unwrap();
        assert_eq!(config.target.scope.organization().as_str(), "not a valid login!");
        assert_eq!(config.target.project.as_str(), "  Road map ");
    }
}

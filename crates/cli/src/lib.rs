//! board-column-id composition root.
//!
//! Responsibilities, in order:
//!
//! 1. **Validate configuration** — turn [`CliArgs`] and the environment into a
//!    [`LookupConfig`]; any missing input fails here, before a client exists.
//! 2. **Construct infrastructure** — build the [`github::GithubClient`] with
//!    the token as a static credential.
//! 3. **Resolve** — run [`board::find_column_id`] against the client.
//! 4. **Emit** — write the column identifier as a bare integer line.
//!
//! `main` wires the real process environment, stdout and GitHub client into
//! [`run`]; tests substitute each of them.

pub mod config;

use std::io::Write;

use anyhow::Context;
use tracing::debug;

use board::{find_column_id, ColumnId, LookupError, ProjectBoardSource};
use github::GithubClient;

pub use config::{CliArgs, LookupConfig, TOKEN_VAR};

/// Builds the GitHub client for a validated configuration.
pub fn connect_github(config: &LookupConfig) -> Result<GithubClient, LookupError> {
    GithubClient::new(config.client.clone(), &config.token)
        .map_err(|e| LookupError::configuration(e.to_string()))
}

/// Runs one lookup and writes the column identifier to `out`.
///
/// `connect` is invoked only after the configuration has been validated, so a
/// configuration error never reaches the network.
pub async fn run<E, F, S, W>(args: &CliArgs, env: E, connect: F, out: &mut W) -> anyhow::Result<ColumnId>
where
    E: Fn(&str) -> Option<String>,
    F: FnOnce(&LookupConfig) -> Result<S, LookupError>,
    S: ProjectBoardSource,
    W: Write,
{
    let config = LookupConfig::from_args(args, env)?;
    debug!(scope = %config.target.scope, api = %config.client.base_url, "configuration validated");

    let source = connect(&config)?;
    let id = find_column_id(&source, &config.target).await?;

    writeln!(out, "{id}").context("failed to write column id")?;
    out.flush().context("failed to write column id")?;
    Ok(id)
}

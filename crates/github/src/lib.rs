//! GitHub infrastructure adapter for project board lookups.
//!
//! Implements [`board::ProjectBoardSource`] over the GitHub REST API (classic
//! projects endpoints) using `reqwest`.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** This crate must not contain domain rules.
//! All GitHub API details (authentication headers, the `Link` pagination
//! header, error-status classification, JSON shapes) are handled here; the
//! [`board`] crate never sees them.
//!
//! ## Endpoints
//!
//! | Operation | Request |
//! |-----------|---------|
//! | organization projects | `GET /orgs/{org}/projects` |
//! | repository projects | `GET /repos/{org}/{repo}/projects` |
//! | project columns | `GET /projects/{project_id}/columns` |
//!
//! Every request carries `per_page` and `page` query parameters and the
//! bearer token from the [`TokenProvider`] given at construction.

pub mod auth;
pub mod client;
pub mod errors;
pub mod pagination;

pub use auth::{StaticToken, TokenProvider};
pub use client::{GithubClient, GithubClientConfig, DEFAULT_API_URL};
pub use errors::GithubError;

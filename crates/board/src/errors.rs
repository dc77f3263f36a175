//! Error types for project board lookups.
//!
//! [`SourceError`] is what a [`crate::ProjectBoardSource`] reports when a page
//! cannot be fetched. [`LookupError`] is the complete set of reasons a lookup
//! can fail; every variant is terminal for the process.
//!
//! Nothing here is retried. A lookup is a single-shot query, so any failure
//! means the requested identifier cannot be determined on this run.

use thiserror::Error;

use crate::{ColumnName, ProjectName, Scope};

// ---------------------------------------------------------------------------
// Source (transport) errors
// ---------------------------------------------------------------------------

/// Failure to fetch one page from the remote API.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// The request never produced an HTTP response (DNS, TLS, connection reset).
    #[error("transport failure: {message}")]
    Transport {
        /// Description of the underlying I/O failure.
        message: String,
    },

    /// The API rejected the credential (HTTP 401).
    #[error("authentication failed: {message}")]
    Authentication {
        /// Message returned by the API.
        message: String,
    },

    /// The API rate limit is exhausted.
    #[error("rate limit exceeded: {message}")]
    RateLimited {
        /// Message returned by the API.
        message: String,
    },

    /// Any other non-success response.
    #[error("API returned {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message returned by the API, or the raw body when it had none.
        message: String,
    },

    /// The response body did not have the expected shape.
    #[error("failed to decode response: {message}")]
    Decode {
        /// Description of the decoding failure.
        message: String,
    },
}

// ---------------------------------------------------------------------------
// Lookup errors
// ---------------------------------------------------------------------------

/// Every reason a column lookup can fail.
#[derive(Debug, Error)]
pub enum LookupError {
    /// A required input or credential is missing or unusable.
    ///
    /// Always detected before any network call.
    #[error("{message}")]
    Configuration {
        /// Operator-facing description, e.g. `--project must be specified`.
        message: String,
    },

    /// A project listing page could not be fetched.
    #[error("error listing projects on {scope}")]
    ProjectListing {
        /// Scope that was being searched.
        scope: Scope,
        /// Underlying fetch failure.
        #[source]
        source: SourceError,
    },

    /// A column listing page could not be fetched.
    #[error("unable to list project columns of project {project}")]
    ColumnListing {
        /// Project whose columns were being listed.
        project: String,
        /// Underlying fetch failure.
        #[source]
        source: SourceError,
    },

    /// Every project page was scanned without finding the requested name.
    #[error("unable to find project {project} on {scope}{}", .scope.retry_hint())]
    ProjectNotFound {
        /// The name that was searched for.
        project: ProjectName,
        /// Where it was searched for.
        scope: Scope,
    },

    /// Every column page of the project was scanned without finding the
    /// requested name.
    #[error("unable to find column {column} on project {project}")]
    ColumnNotFound {
        /// The name that was searched for.
        column: ColumnName,
        /// The project whose columns were searched.
        project: String,
    },
}

impl LookupError {
    /// Shorthand for [`LookupError::Configuration`].
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Returns `true` if the search completed and found nothing.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ProjectNotFound { .. } | Self::ColumnNotFound { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{OrganizationName, RepositoryName};

    fn project_not_found(repository: Option<&str>) -> LookupError {
        LookupError::ProjectNotFound {
            project: ProjectName::new("Roadmap").unwrap(),
            scope: Scope::new(
                OrganizationName::new("acme").unwrap(),
                repository.and_then(RepositoryName::new),
            ),
        }
    }

    #[test]
    fn organization_not_found_suggests_repository_scope() {
        assert_eq!(
            project_not_found(None).to_string(),
            "unable to find project Roadmap on organization acme - maybe try specifying --repo"
        );
    }

    #[test]
    fn repository_not_found_names_the_repository() {
        assert_eq!(
            project_not_found(Some("widgets")).to_string(),
            "unable to find project Roadmap on repo acme/widgets"
        );
    }

    #[test]
    fn column_not_found_names_column_and_project() {
        let err = LookupError::ColumnNotFound {
            column: ColumnName::new("Done").unwrap(),
            project: "Roadmap".to_string(),
        };
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "unable to find column Done on project Roadmap");
    }

    #[test]
    fn listing_errors_carry_the_phase_and_source() {
        let err = LookupError::ColumnListing {
            project: "Roadmap".to_string(),
            source: SourceError::Api {
                status: 500,
                message: "Server Error".to_string(),
            },
        };
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "unable to list project columns of project Roadmap");
        let cause = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(cause.as_deref(), Some("API returned 500: Server Error"));
    }
}

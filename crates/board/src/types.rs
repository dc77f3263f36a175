//! Value types for project board lookups.
//!
//! [`Scope`] and [`LookupTarget`] are fixed at startup from configuration.
//! [`Project`], [`Column`] and [`Page`] are transient read-only views over
//! remote state: fetched one page at a time, compared, and discarded unless
//! matched.

use serde::{Deserialize, Serialize};

use crate::{ColumnId, ColumnName, OrganizationName, ProjectId, ProjectName, RepositoryName};

/// Number of records requested per page from every listing.
pub const PAGE_SIZE: u32 = 100;

// ---------------------------------------------------------------------------
// Search scope
// ---------------------------------------------------------------------------

/// Where to search for a project board.
///
/// Repository scope is used only when a repository was explicitly requested;
/// otherwise the search covers the organization's own boards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// Boards owned by the organization itself.
    Organization(OrganizationName),
    /// Boards attached to one repository of the organization.
    Repository {
        /// Owner of the repository.
        organization: OrganizationName,
        /// Repository name, without the owner prefix.
        repository: RepositoryName,
    },
}

impl Scope {
    /// Builds the scope for `organization`, narrowed to `repository` when one
    /// is given.
    pub fn new(organization: OrganizationName, repository: Option<RepositoryName>) -> Self {
        match repository {
            Some(repository) => Self::Repository {
                organization,
                repository,
            },
            None => Self::Organization(organization),
        }
    }

    /// Returns the organization at the root of this scope.
    pub fn organization(&self) -> &OrganizationName {
        match self {
            Self::Organization(organization) => organization,
            Self::Repository { organization, .. } => organization,
        }
    }

    /// Returns the repository if the scope is repository-level.
    pub fn repository(&self) -> Option<&RepositoryName> {
        match self {
            Self::Organization(_) => None,
            Self::Repository { repository, .. } => Some(repository),
        }
    }

    /// Operator guidance appended to "not found" messages.
    ///
    /// Organization-wide searches miss repository boards, so the hint points
    /// at `--repo`. Repository searches have nowhere narrower to go.
    pub fn retry_hint(&self) -> &'static str {
        match self {
            Self::Organization(_) => " - maybe try specifying --repo",
            Self::Repository { .. } => "",
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Organization(organization) => write!(f, "organization {organization}"),
            Self::Repository {
                organization,
                repository,
            } => write!(f, "repo {organization}/{repository}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Remote records
// ---------------------------------------------------------------------------

/// A project board as returned by a project listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Remote identifier, used to list the board's columns.
    pub id: ProjectId,
    /// Display name compared against the requested project name.
    pub name: String,
}

/// A column of a project board as returned by a column listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Remote identifier; the lookup's final result.
    pub id: ColumnId,
    /// Display name compared against the requested column name.
    pub name: String,
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// Which slice of a listing to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number.
    pub number: u32,
    /// Maximum number of records in the page.
    pub per_page: u32,
}

impl PageRequest {
    /// The first page, at [`PAGE_SIZE`] records per page.
    pub fn first() -> Self {
        Self {
            number: 1,
            per_page: PAGE_SIZE,
        }
    }

    /// The same page size, positioned at page `number`.
    pub fn at(self, number: u32) -> Self {
        Self { number, ..self }
    }
}

/// One slice of a remote listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Records in the order the remote API returned them.
    pub items: Vec<T>,
    /// Page number of the following slice; `None` on the last page.
    pub next_page: Option<u32>,
}

impl<T> Page<T> {
    /// A page with no successor.
    pub fn last(items: Vec<T>) -> Self {
        Self {
            items,
            next_page: None,
        }
    }

    /// The next page to request, if the listing continues.
    ///
    /// A reported next page of `0` is treated as the end of the listing.
    pub fn continuation(&self) -> Option<u32> {
        self.next_page.filter(|&n| n != 0)
    }
}

// ---------------------------------------------------------------------------
// Lookup target
// ---------------------------------------------------------------------------

/// Everything needed to resolve a column identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTarget {
    /// Where the project board lives.
    pub scope: Scope,
    /// Display name of the board.
    pub project: ProjectName,
    /// Display name of the column within the board.
    pub column: ColumnName,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn org(name: &str) -> OrganizationName {
        OrganizationName::new(name).unwrap()
    }

    #[test]
    fn scope_without_repository_is_organization_wide() {
        let scope = Scope::new(org("acme"), None);
        assert_eq!(scope, Scope::Organization(org("acme")));
        assert!(scope.repository().is_none());
        assert_eq!(scope.to_string(), "organization acme");
        assert_eq!(scope.retry_hint(), " - maybe try specifying --repo");
    }

    #[test]
    fn scope_with_repository_is_repository_level() {
        let scope = Scope::new(org("acme"), RepositoryName::new("widgets"));
        assert_eq!(scope.organization().as_str(), "acme");
        assert_eq!(scope.repository().map(|r| r.as_str()), Some("widgets"));
        assert_eq!(scope.to_string(), "repo acme/widgets");
        assert_eq!(scope.retry_hint(), "");
    }

    #[test]
    fn zero_next_page_ends_the_listing() {
        let page: Page<Column> = Page {
            items: Vec::new(),
            next_page: Some(0),
        };
        assert_eq!(page.continuation(), None);
        assert_eq!(Page::<Column>::last(Vec::new()).continuation(), None);
    }

    #[test]
    fn page_request_keeps_page_size_when_advancing() {
        let next = PageRequest::first().at(3);
        assert_eq!(next.number, 3);
        assert_eq!(next.per_page, PAGE_SIZE);
    }
}

//! Project board lookup domain.
//!
//! Resolves a column name to its numeric identifier: find a project board by
//! name within an organization or repository, then find a column by name within
//! that board. Infrastructure crates supply the boards by implementing
//! [`ProjectBoardSource`]; this crate never performs I/O itself.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`identifiers`] | Newtype names and identifiers (`ProjectName`, `ColumnId`, etc.) |
//! | [`types`] | `Scope`, remote records, and pagination types |
//! | [`errors`] | `SourceError` and `LookupError` |
//! | [`source`] | The `ProjectBoardSource` port trait |
//! | [`resolver`] | The project and column resolvers |

pub mod errors;
pub mod identifiers;
pub mod resolver;
pub mod source;
pub mod types;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use errors::{LookupError, SourceError};
pub use identifiers::{ColumnId, ColumnName, OrganizationName, ProjectId, ProjectName, RepositoryName};
pub use resolver::{find_column_id, resolve_column, resolve_project};
pub use source::ProjectBoardSource;
pub use types::{Column, LookupTarget, Page, PageRequest, Project, Scope, PAGE_SIZE};

//! The two-stage paginated search: project first, then column.
//!
//! Both resolvers walk a listing one page at a time:
//!
//! ```text
//! Start → FetchPage → Scan ─┬─ match ──────────────→ Ok
//!            ↑              └─ no match ─┬─ next page → FetchPage
//!            │                           └─ last page → NotFound
//!            └──────────────────────────────────────────┘
//! ```
//!
//! The first exact, case-sensitive name match wins and no further pages are
//! fetched. A fetch error ends the search immediately. There is no page cap:
//! the walk ends only when the source reports no next page.

use tracing::{debug, info, instrument};

use crate::{
    Column, ColumnId, ColumnName, LookupError, LookupTarget, PageRequest, Project, ProjectBoardSource,
    ProjectName, Scope,
};

/// Finds the project board named `name` within `scope`.
///
/// Organization scope reads only the organization listing; repository scope
/// reads only the repository listing.
#[instrument(skip(source, scope, name), fields(scope = %scope, project = %name))]
pub async fn resolve_project<S>(
    source: &S,
    scope: &Scope,
    name: &ProjectName,
) -> Result<Project, LookupError>
where
    S: ProjectBoardSource + ?Sized,
{
    let mut request = PageRequest::first();
    loop {
        let fetched = match scope {
            Scope::Organization(organization) => {
                source.list_organization_projects(organization, request).await
            }
            Scope::Repository {
                organization,
                repository,
            } => {
                source
                    .list_repository_projects(organization, repository, request)
                    .await
            }
        };
        let page = fetched.map_err(|source| LookupError::ProjectListing {
            scope: scope.clone(),
            source,
        })?;
        debug!(page = request.number, count = page.items.len(), "fetched project page");

        let next = page.continuation();
        if let Some(project) = page.items.into_iter().find(|p| name.matches(&p.name)) {
            info!(project_id = %project.id, "resolved project");
            return Ok(project);
        }

        match next {
            Some(number) => request = request.at(number),
            None => break,
        }
    }

    Err(LookupError::ProjectNotFound {
        project: name.clone(),
        scope: scope.clone(),
    })
}

/// Finds the column named `name` on the board `project`.
#[instrument(skip(source, project, name), fields(project = %project.name, column = %name))]
pub async fn resolve_column<S>(
    source: &S,
    project: &Project,
    name: &ColumnName,
) -> Result<Column, LookupError>
where
    S: ProjectBoardSource + ?Sized,
{
    let mut request = PageRequest::first();
    loop {
        let page = source
            .list_project_columns(project.id, request)
            .await
            .map_err(|source| LookupError::ColumnListing {
                project: project.name.clone(),
                source,
            })?;
        debug!(page = request.number, count = page.items.len(), "fetched column page");

        let next = page.continuation();
        if let Some(column) = page.items.into_iter().find(|c| name.matches(&c.name)) {
            info!(column_id = %column.id, "resolved column");
            return Ok(column);
        }

        match next {
            Some(number) => request = request.at(number),
            None => break,
        }
    }

    Err(LookupError::ColumnNotFound {
        column: name.clone(),
        project: project.name.clone(),
    })
}

/// Resolves the project, then the column within it, and returns the column's
/// identifier.
pub async fn find_column_id<S>(source: &S, target: &LookupTarget) -> Result<ColumnId, LookupError>
where
    S: ProjectBoardSource + ?Sized,
{
    let project = resolve_project(source, &target.scope, &target.project).await?;
    let column = resolve_column(source, &project, &target.column).await?;
    Ok(column.id)
}

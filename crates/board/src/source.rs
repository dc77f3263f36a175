//! The port through which resolvers read project boards.
//!
//! Infrastructure crates implement [`ProjectBoardSource`] (the `github` crate
//! does so over the GitHub REST API). The resolvers in [`crate::resolver`] see
//! only this trait, which is what lets them be exercised against in-memory
//! fakes.

use async_trait::async_trait;

use crate::{Column, OrganizationName, Page, PageRequest, Project, ProjectId, RepositoryName, SourceError};

/// Paged, read-only access to project boards and their columns.
///
/// Each call fetches exactly one page. Callers follow [`Page::next_page`] to
/// continue; implementations must not prefetch or buffer further pages.
#[async_trait]
pub trait ProjectBoardSource: Send + Sync {
    /// Lists the project boards owned by `organization`.
    async fn list_organization_projects(
        &self,
        organization: &OrganizationName,
        page: PageRequest,
    ) -> Result<Page<Project>, SourceError>;

    /// Lists the project boards attached to `organization/repository`.
    async fn list_repository_projects(
        &self,
        organization: &OrganizationName,
        repository: &RepositoryName,
        page: PageRequest,
    ) -> Result<Page<Project>, SourceError>;

    /// Lists the columns of the project board `project`.
    async fn list_project_columns(
        &self,
        project: ProjectId,
        page: PageRequest,
    ) -> Result<Page<Column>, SourceError>;
}

#[async_trait]
impl<T> ProjectBoardSource for &T
where
    T: ProjectBoardSource + ?Sized,
{
    async fn list_organization_projects(
        &self,
        organization: &OrganizationName,
        page: PageRequest,
    ) -> Result<Page<Project>, SourceError> {
        (**self).list_organization_projects(organization, page).await
    }

    async fn list_repository_projects(
        &self,
        organization: &OrganizationName,
        repository: &RepositoryName,
        page: PageRequest,
    ) -> Result<Page<Project>, SourceError> {
        (**self)
            .list_repository_projects(organization, repository, page)
            .await
    }

    async fn list_project_columns(
        &self,
        project: ProjectId,
        page: PageRequest,
    ) -> Result<Page<Column>, SourceError> {
        (**self).list_project_columns(project, page).await
    }
}

//! In-memory [`ProjectBoardSource`] for tests.
//!
//! Compiled for this crate's own tests and, through the `testing` feature, for
//! downstream crates' dev-dependencies.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::{
    Column, ColumnId, OrganizationName, Page, PageRequest, Project, ProjectBoardSource, ProjectId,
    RepositoryName, SourceError,
};

/// One recorded call against a [`FakeBoardSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceCall {
    OrganizationProjects { page: u32 },
    RepositoryProjects { repository: String, page: u32 },
    ProjectColumns { project: u64, page: u32 },
}

/// A board source serving canned pages and recording every request.
///
/// Page `n` of a listing is the `n - 1`th entry of its configured pages; a
/// request past the end yields an empty last page.
#[derive(Debug, Default)]
pub struct FakeBoardSource {
    organization_projects: Vec<Page<Project>>,
    repository_projects: Vec<Page<Project>>,
    columns: HashMap<ProjectId, Vec<Page<Column>>>,
    failure: Option<(u32, SourceError)>,
    calls: Mutex<Vec<(SourceCall, u32)>>,
}

impl FakeBoardSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_organization_projects(mut self, pages: Vec<Page<Project>>) -> Self {
        self.organization_projects = pages;
        self
    }

    pub fn with_repository_projects(mut self, pages: Vec<Page<Project>>) -> Self {
        self.repository_projects = pages;
        self
    }

    pub fn with_project_columns(mut self, project: ProjectId, pages: Vec<Page<Column>>) -> Self {
        self.columns.insert(project, pages);
        self
    }

    /// Makes every listing fail with `error` when page `page` is requested.
    pub fn failing_on_page(mut self, page: u32, error: SourceError) -> Self {
        self.failure = Some((page, error));
        self
    }

    /// Calls received so far, in order.
    pub fn calls(&self) -> Vec<SourceCall> {
        self.lock().iter().map(|(call, _)| call.clone()).collect()
    }

    /// Page size of each call received so far, in order.
    pub fn page_sizes(&self) -> Vec<u32> {
        self.lock().iter().map(|(_, size)| *size).collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(SourceCall, u32)>> {
        self.calls.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn serve<T: Clone>(
        &self,
        call: SourceCall,
        request: PageRequest,
        pages: &[Page<T>],
    ) -> Result<Page<T>, SourceError> {
        self.lock().push((call, request.per_page));
        if let Some((page, error)) = &self.failure {
            if *page == request.number {
                return Err(error.clone());
            }
        }
        let index = request.number.saturating_sub(1) as usize;
        Ok(pages
            .get(index)
            .cloned()
            .unwrap_or_else(|| Page::last(Vec::new())))
    }
}

#[async_trait]
impl ProjectBoardSource for FakeBoardSource {
    async fn list_organization_projects(
        &self,
        _organization: &OrganizationName,
        page: PageRequest,
    ) -> Result<Page<Project>, SourceError> {
        self.serve(
            SourceCall::OrganizationProjects { page: page.number },
            page,
            &self.organization_projects,
        )
    }

    async fn list_repository_projects(
        &self,
        _organization: &OrganizationName,
        repository: &RepositoryName,
        page: PageRequest,
    ) -> Result<Page<Project>, SourceError> {
        self.serve(
            SourceCall::RepositoryProjects {
                repository: repository.to_string(),
                page: page.number,
            },
            page,
            &self.repository_projects,
        )
    }

    async fn list_project_columns(
        &self,
        project: ProjectId,
        page: PageRequest,
    ) -> Result<Page<Column>, SourceError> {
        let pages = self.columns.get(&project).map(Vec::as_slice).unwrap_or(&[]);
        self.serve(
            SourceCall::ProjectColumns {
                project: project.as_u64(),
                page: page.number,
            },
            page,
            pages,
        )
    }
}

/// Builds linked project pages: page `i` points at page `i + 1`, the final
/// page has no successor.
pub fn project_pages(pages: &[&[(u64, &str)]]) -> Vec<Page<Project>> {
    link(pages, |(id, name)| Project {
        id: ProjectId::new(*id),
        name: (*name).to_string(),
    })
}

/// Builds linked column pages, as [`project_pages`] does for projects.
pub fn column_pages(pages: &[&[(u64, &str)]]) -> Vec<Page<Column>> {
    link(pages, |(id, name)| Column {
        id: ColumnId::new(*id),
        name: (*name).to_string(),
    })
}

fn link<T>(pages: &[&[(u64, &str)]], build: impl Fn(&(u64, &str)) -> T) -> Vec<Page<T>> {
    let count = pages.len();
    pages
        .iter()
        .enumerate()
        .map(|(i, entries)| Page {
            items: entries.iter().map(&build).collect(),
            next_page: (i + 1 < count).then(|| i as u32 + 2),
        })
        .collect()
}

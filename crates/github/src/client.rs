//! [`GithubClient`]: the GitHub REST implementation of [`ProjectBoardSource`].

use async_trait::async_trait;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, trace};

use board::{
    Column, ColumnId, OrganizationName, Page, PageRequest, Project, ProjectBoardSource, ProjectId,
    RepositoryName, SourceError,
};

use crate::errors::{classify_failure, GithubError};
use crate::pagination::next_page_from_link;
use crate::TokenProvider;

/// Public GitHub API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Media type that enables the (classic) projects endpoints.
const PROJECTS_MEDIA_TYPE: &str = "application/vnd.github.inertia-preview+json";

const API_VERSION: &str = "2022-11-28";

const USER_AGENT: &str = concat!("board-column-id/", env!("CARGO_PKG_VERSION"));

/// Connection settings for [`GithubClient`].
#[derive(Debug, Clone)]
pub struct GithubClientConfig {
    /// API root, e.g. `https://api.github.com` or `https://ghe.example.com/api/v3`.
    pub base_url: Url,

    /// Sent as `User-Agent`; GitHub rejects requests without one.
    pub user_agent: String,
}

impl GithubClientConfig {
    /// Builds a configuration for the API rooted at `base_url`.
    pub fn new(base_url: &str) -> Result<Self, GithubError> {
        let invalid = |reason: String| GithubError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };
        let parsed = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if parsed.cannot_be_a_base() || !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid("expected an http(s) URL".to_string()));
        }

        Ok(Self {
            base_url: parsed,
            user_agent: USER_AGENT.to_string(),
        })
    }
}

/// GitHub REST API client, read-only, one request per page.
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: Client,
    base_url: Url,
}

// Wire shapes. Only the fields the lookup compares or returns are decoded.

#[derive(Debug, Deserialize)]
struct ProjectRecord {
    id: u64,
    name: String,
}

impl From<ProjectRecord> for Project {
    fn from(record: ProjectRecord) -> Self {
        Self {
            id: ProjectId::new(record.id),
            name: record.name,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ColumnRecord {
    id: u64,
    name: String,
}

impl From<ColumnRecord> for Column {
    fn from(record: ColumnRecord) -> Self {
        Self {
            id: ColumnId::new(record.id),
            name: record.name,
        }
    }
}

impl GithubClient {
    /// Creates a client that authenticates every request with the token from
    /// `credentials`.
    pub fn new(
        config: GithubClientConfig,
        credentials: &dyn TokenProvider,
    ) -> Result<Self, GithubError> {
        let mut headers = HeaderMap::new();

        let mut authorization =
            HeaderValue::from_str(&format!("Bearer {}", credentials.bearer_token()))
                .map_err(|_| GithubError::InvalidToken)?;
        authorization.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, authorization);
        headers.insert(header::ACCEPT, HeaderValue::from_static(PROJECTS_MEDIA_TYPE));
        headers.insert("x-github-api-version", HeaderValue::from_static(API_VERSION));

        let http = Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent)
            .build()
            .map_err(|e| GithubError::Client {
                message: e.to_string(),
            })?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Appends `segments` to the API root, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // `GithubClientConfig::new` rejects cannot-be-a-base URLs.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Fetches one page of a JSON array listing.
    async fn get_page<R, T>(&self, url: Url, page: PageRequest) -> Result<Page<T>, SourceError>
    where
        R: DeserializeOwned,
        T: From<R>,
    {
        debug!(url = %url, page = page.number, per_page = page.per_page, "GET");

        let response = self
            .http
            .get(url)
            .query(&[("per_page", page.per_page), ("page", page.number)])
            .send()
            .await
            .map_err(|e| SourceError::Transport {
                message: e.to_string(),
            })?;

        let status = response.status();
        trace!(status = status.as_u16(), "response received");
        if !status.is_success() {
            let headers = response.headers().clone();
            let body = response.text().await.unwrap_or_default();
            return Err(classify_failure(status, &headers, &body));
        }

        let next_page = response
            .headers()
            .get(header::LINK)
            .and_then(|v| v.to_str().ok())
            .and_then(next_page_from_link);

        let records = response
            .json::<Vec<R>>()
            .await
            .map_err(|e| SourceError::Decode {
                message: e.to_string(),
            })?;

        Ok(Page {
            items: records.into_iter().map(T::from).collect(),
            next_page,
        })
    }
}

#[async_trait]
impl ProjectBoardSource for GithubClient {
    async fn list_organization_projects(
        &self,
        organization: &OrganizationName,
        page: PageRequest,
    ) -> Result<Page<Project>, SourceError> {
        let url = self.endpoint(&["orgs", organization.as_str(), "projects"]);
        self.get_page::<ProjectRecord, Project>(url, page).await
    }

    async fn list_repository_projects(
        &self,
        organization: &OrganizationName,
        repository: &RepositoryName,
        page: PageRequest,
    ) -> Result<Page<Project>, SourceError> {
        let url = self.endpoint(&["repos", organization.as_str(), repository.as_str(), "projects"]);
        self.get_page::<ProjectRecord, Project>(url, page).await
    }

    async fn list_project_columns(
        &self,
        project: ProjectId,
        page: PageRequest,
    ) -> Result<Page<Column>, SourceError> {
        let id = project.to_string();
        let url = self.endpoint(&["projects", &id, "columns"]);
        self.get_page::<ColumnRecord, Column>(url, page).await
    }
}

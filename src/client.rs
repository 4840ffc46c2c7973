//! HTTP client for interacting with the Modrinth API

use crate::config::SdkConfig;
use crate::error::{ModrinthError, Result};
use crate::request::{
    ApiRequest, ENDPOINT_API_SERVER_INFO, ENDPOINT_PROJECT, ENDPOINT_SEARCH, ENDPOINT_VERSION,
    ENDPOINT_VERSIONS, ENDPOINT_VERSION_FILE,
};
use crate::server::{ApiEnvironment, ModrinthServer};
use crate::types::*;
use crate::utils::{format_file_size, json_param};
use crate::{DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use futures::StreamExt;
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, trace};

/// HTTP client for Modrinth API interactions.
///
/// Each method performs exactly one request. The client holds no mutable state
/// and can be cloned and shared across tasks.
#[derive(Debug, Clone)]
pub struct ModrinthClient {
    client: Client,
    server: ModrinthServer,
    timeout: Duration,
    download_timeout: Option<Duration>,
}

impl ModrinthClient {
    /// Create a client for the production deployment with default settings
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a new client builder
    pub fn builder() -> ModrinthClientBuilder {
        ModrinthClientBuilder::default()
    }

    /// Create a client from loaded configuration
    pub fn from_config(config: &SdkConfig) -> Result<Self> {
        config.validate()?;

        Self::builder()
            .server(config.server())
            .user_agent(&config.api.user_agent)
            .timeout(config.api.timeout())
            .connect_timeout(config.api.connect_timeout())
            .build()
    }

    /// The server this client talks to
    pub fn server(&self) -> &ModrinthServer {
        &self.server
    }

    /// Execute one API request and decode a 200 response body into `T`.
    ///
    /// Any other status is decoded as an [`ApiError`] envelope and returned as
    /// [`ModrinthError::Api`]; bodies that are not an envelope become
    /// [`ModrinthError::UnexpectedResponse`].
    pub async fn call_api<T: DeserializeOwned>(&self, request: &ApiRequest) -> Result<T> {
        let url = request.url(&self.server);
        let timeout = request.request_timeout().unwrap_or(self.timeout);
        debug!("{} {}", request.method(), url);

        let response = self
            .client
            .request(request.method().clone(), &url)
            .header(ACCEPT, "application/json")
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| map_transport_error(e, timeout))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| map_transport_error(e, timeout))?;

        debug!("{} {} -> {}", request.method(), url, status);
        trace!("Response body: {}", String::from_utf8_lossy(&body));

        if status != StatusCode::OK {
            return Err(match serde_json::from_slice::<ApiError>(&body) {
                Ok(api_error) => ModrinthError::Api {
                    status: status.as_u16(),
                    error: api_error.error,
                    description: api_error.description,
                },
                Err(_) => ModrinthError::UnexpectedResponse {
                    status: status.as_u16(),
                    body: String::from_utf8_lossy(&body).into_owned(),
                },
            });
        }

        Ok(serde_json::from_slice(&body)?)
    }

    /// Get name, version and documentation links of the API server
    pub async fn get_api_server_info(&self) -> Result<ApiServerInformation> {
        self.call_api(&ApiRequest::get(ENDPOINT_API_SERVER_INFO))
            .await
    }

    /// Search projects
    pub async fn search(&self, search_query: &SearchQuery) -> Result<SearchResult> {
        let mut request = ApiRequest::get(ENDPOINT_SEARCH).param("query", &search_query.query);

        if !search_query.facets.is_empty() {
            request = request.param("facets", json_param(&search_query.facets)?);
        }
        if let Some(index) = search_query.index {
            request = request.param("index", index.as_str());
        }
        if let Some(offset) = search_query.offset {
            request = request.param("offset", offset.to_string());
        }
        if let Some(limit) = search_query.limit {
            request = request.param("limit", limit.to_string());
        }

        let result: SearchResult = self.call_api(&request).await?;
        debug!(
            "Search for '{}' returned {} of {} hits",
            search_query.query,
            result.hits.len(),
            result.total_hits
        );
        Ok(result)
    }

    /// Get a project by id or slug
    pub async fn get_project(&self, id_or_slug: &str) -> Result<Project> {
        self.call_api(&ApiRequest::get(ENDPOINT_PROJECT).path(id_or_slug))
            .await
    }

    /// List the versions of a project, optionally filtered by loaders and game versions
    pub async fn get_project_versions(
        &self,
        id_or_slug: &str,
        loaders: Option<&[&str]>,
        game_versions: Option<&[&str]>,
    ) -> Result<Vec<ProjectVersion>> {
        let mut request = ApiRequest::get(ENDPOINT_PROJECT)
            .path(id_or_slug)
            .path("version");

        if let Some(loaders) = loaders {
            request = request.param("loaders", json_param(loaders)?);
        }
        if let Some(game_versions) = game_versions {
            request = request.param("game_versions", json_param(game_versions)?);
        }

        self.call_api(&request).await
    }

    /// Get one version of a project by version id or version number
    pub async fn get_project_version(
        &self,
        project: &Project,
        version_id_or_number: &str,
    ) -> Result<ProjectVersion> {
        let request = ApiRequest::get(ENDPOINT_PROJECT)
            .path(&project.id)
            .path("version")
            .path(version_id_or_number);

        self.call_api(&request).await
    }

    /// Get a version by its id
    pub async fn get_version_by_id(&self, version_id: &str) -> Result<ProjectVersion> {
        self.call_api(&ApiRequest::get(ENDPOINT_VERSION).path(version_id))
            .await
    }

    /// Find the version a file belongs to from the file's hash
    pub async fn get_project_version_from_hash(
        &self,
        hash: &str,
        algorithm: HashAlgorithm,
    ) -> Result<ProjectVersion> {
        let request = ApiRequest::get(ENDPOINT_VERSION_FILE)
            .path(hash)
            .param("algorithm", algorithm.as_str());

        self.call_api(&request).await
    }

    /// Get several versions by id in one call
    pub async fn get_multiple_versions(&self, version_ids: &[&str]) -> Result<Vec<ProjectVersion>> {
        let request = ApiRequest::get(ENDPOINT_VERSIONS).param("ids", json_param(version_ids)?);

        self.call_api(&request).await
    }

    /// Get all projects and versions a project depends on
    pub async fn get_project_dependencies(&self, id_or_slug: &str) -> Result<ProjectDependencies> {
        let request = ApiRequest::get(ENDPOINT_PROJECT)
            .path(id_or_slug)
            .path("dependencies");

        self.call_api(&request).await
    }

    /// Download a version file to `destination`, overwriting it if it exists.
    ///
    /// The body is streamed into `<destination>.part`, which is created before
    /// any network traffic, and renamed onto `destination` once complete. The
    /// `.part` file is removed when the download fails or the future is
    /// dropped, so an existing `destination` is only replaced by a complete
    /// download. Returns the number of bytes written.
    pub async fn download_project_version<P: AsRef<Path>>(
        &self,
        file: &ProjectVersionFile,
        destination: P,
    ) -> Result<u64> {
        let destination = destination.as_ref();
        let partial = PartialDownload::new(destination);
        let out = fs::File::create(partial.path()).await?;

        let written = self.stream_to_file(&file.url, out).await?;
        fs::rename(partial.path(), destination).await?;
        partial.keep();

        info!(
            "Downloaded {} ({}) to {}",
            file.filename,
            format_file_size(written),
            destination.display()
        );
        Ok(written)
    }

    async fn stream_to_file(&self, url: &str, mut out: fs::File) -> Result<u64> {
        debug!("GET {}", url);

        let mut request = self.client.get(url);
        if let Some(timeout) = self.download_timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(ModrinthError::UnexpectedResponse {
                status: status.as_u16(),
                body,
            });
        }

        let mut stream = response.bytes_stream();
        let mut written = 0u64;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            out.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }

        out.flush().await?;
        Ok(written)
    }
}

/// Removes an unfinished `.part` file when dropped
struct PartialDownload {
    path: PathBuf,
    done: bool,
}

impl PartialDownload {
    fn new(destination: &Path) -> Self {
        let mut path = destination.as_os_str().to_owned();
        path.push(".part");
        Self {
            path: PathBuf::from(path),
            done: false,
        }
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn keep(mut self) {
        self.done = true;
    }
}

impl Drop for PartialDownload {
    fn drop(&mut self) {
        if self.done {
            return;
        }
        if let Err(e) = std::fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                debug!(
                    "Failed to remove partial download {}: {}",
                    self.path.display(),
                    e
                );
            }
        }
    }
}

fn map_transport_error(error: reqwest::Error, timeout: Duration) -> ModrinthError {
    if error.is_timeout() {
        ModrinthError::Timeout(timeout)
    } else {
        ModrinthError::HttpError(error)
    }
}

/// Builder for creating a ModrinthClient with custom configuration
#[derive(Debug, Default)]
pub struct ModrinthClientBuilder {
    server: Option<ModrinthServer>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    download_timeout: Option<Duration>,
}

impl ModrinthClientBuilder {
    /// Target one of the known deployments
    pub fn environment(mut self, environment: ApiEnvironment) -> Self {
        self.server = Some(ModrinthServer::new(environment));
        self
    }

    /// Target an explicit server descriptor
    pub fn server(mut self, server: ModrinthServer) -> Self {
        self.server = Some(server);
        self
    }

    /// Set the user agent string
    pub fn user_agent<S: Into<String>>(mut self, agent: S) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Set the default deadline of API requests
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the connection timeout, shared by API requests and downloads
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Set a deadline for file downloads (unbounded by default)
    pub fn download_timeout(mut self, timeout: Duration) -> Self {
        self.download_timeout = Some(timeout);
        self
    }

    /// Build the ModrinthClient
    pub fn build(self) -> Result<ModrinthClient> {
        let user_agent = self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);
        let connect_timeout = self
            .connect_timeout
            .unwrap_or(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS));

        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(ModrinthClient {
            client,
            server: self.server.unwrap_or_default(),
            timeout: self
                .timeout
                .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            download_timeout: self.download_timeout,
        })
    }
}

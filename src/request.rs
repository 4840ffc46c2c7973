//! Request descriptions and URL construction for the Modrinth API

use crate::server::ModrinthServer;
use reqwest::Method;
use std::collections::BTreeMap;
use std::time::Duration;

/// API root, answers with server information
pub const ENDPOINT_API_SERVER_INFO: &str = "";
/// Project resources
pub const ENDPOINT_PROJECT: &str = "v2/project";
/// Project search
pub const ENDPOINT_SEARCH: &str = "v2/search";
/// Single version resources
pub const ENDPOINT_VERSION: &str = "v2/version";
/// Batch version lookup
pub const ENDPOINT_VERSIONS: &str = "v2/versions";
/// Version lookup by file hash
pub const ENDPOINT_VERSION_FILE: &str = "v2/version_file";

/// Flat query parameter mapping. Ordered so encoded URLs are deterministic.
pub type QueryParams = BTreeMap<String, String>;

/// Join the server base URL, an endpoint and sub-path segments with `/`.
///
/// Segments are inserted verbatim; callers pass URL-safe values such as ids or slugs.
pub fn build_api_url<S: AsRef<str>>(
    server: &ModrinthServer,
    endpoint: &str,
    sub_paths: &[S],
) -> String {
    let mut url = format!("{}/{}", server.base_url(), endpoint);
    for path in sub_paths {
        url.push('/');
        url.push_str(path.as_ref());
    }
    url
}

/// Percent-encode parameters as `key=value` pairs joined with `&`
pub fn encode_query(params: &QueryParams) -> String {
    params
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Everything the dispatcher needs to issue one call
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    endpoint: String,
    sub_paths: Vec<String>,
    params: Option<QueryParams>,
    timeout: Option<Duration>,
}

impl ApiRequest {
    /// A request with an explicit HTTP method against `endpoint`
    pub fn new<S: Into<String>>(method: Method, endpoint: S) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            sub_paths: Vec::new(),
            params: None,
            timeout: None,
        }
    }

    /// A read request against `endpoint`
    pub fn get<S: Into<String>>(endpoint: S) -> Self {
        Self::new(Method::GET, endpoint)
    }

    /// Append one sub-path segment
    pub fn path<S: Into<String>>(mut self, segment: S) -> Self {
        self.sub_paths.push(segment.into());
        self
    }

    /// Set one query parameter, replacing a previous value for the same key
    pub fn param<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.params
            .get_or_insert_with(QueryParams::new)
            .insert(key.into(), value.into());
        self
    }

    /// Replace the whole parameter mapping
    pub fn params(mut self, params: QueryParams) -> Self {
        self.params = Some(params);
        self
    }

    /// Deadline for this request, overriding the client default
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// HTTP method of the request
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Endpoint path relative to the server base URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sub-path segments appended after the endpoint
    pub fn sub_paths(&self) -> &[String] {
        &self.sub_paths
    }

    /// Query parameters, if any were set
    pub fn query_params(&self) -> Option<&QueryParams> {
        self.params.as_ref()
    }

    /// Deadline override for this request
    pub fn request_timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Full URL for this request on `server`.
    ///
    /// The query string is only appended for GET requests with at least one parameter.
    pub fn url(&self, server: &ModrinthServer) -> String {
        let url = build_api_url(server, &self.endpoint, &self.sub_paths);
        match &self.params {
            Some(params) if !params.is_empty() && self.method == Method::GET => {
                format!("{}?{}", url, encode_query(params))
            }
            _ => url,
        }
    }
}

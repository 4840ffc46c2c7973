//! Local stub of the Modrinth API used by the integration tests

#![allow(dead_code)]

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, StatusCode, Uri},
    response::Response,
    Router,
};
use modrinth_sdk::{ModrinthClient, ModrinthServer};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// A request as seen by the stub server
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
}

impl RecordedRequest {
    /// Percent-decoded query parameters
    pub fn query_params(&self) -> HashMap<String, String> {
        self.query
            .as_deref()
            .unwrap_or_default()
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (
                    urlencoding::decode(key).unwrap().into_owned(),
                    urlencoding::decode(value).unwrap().into_owned(),
                )
            })
            .collect()
    }

    pub fn header(&self, name: &str) -> Option<String> {
        self.headers
            .get(name)
            .map(|value| value.to_str().unwrap().to_string())
    }
}

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    body: Vec<u8>,
    content_type: &'static str,
    delay: Option<Duration>,
    recorded: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Canned response the stub answers every request with
pub struct Stub {
    status: StatusCode,
    body: Vec<u8>,
    content_type: &'static str,
    delay: Option<Duration>,
}

impl Stub {
    pub fn json(status: u16, body: &str) -> Self {
        Self {
            status: StatusCode::from_u16(status).unwrap(),
            body: body.as_bytes().to_vec(),
            content_type: "application/json",
            delay: None,
        }
    }

    pub fn text(status: u16, body: &str) -> Self {
        Self {
            content_type: "text/plain",
            ..Self::json(status, body)
        }
    }

    pub fn bytes(status: u16, body: Vec<u8>) -> Self {
        Self {
            status: StatusCode::from_u16(status).unwrap(),
            body,
            content_type: "application/java-archive",
            delay: None,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Bind to a random local port and serve until the test ends
    pub async fn start(self) -> StubServer {
        let recorded = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            status: self.status,
            body: self.body,
            content_type: self.content_type,
            delay: self.delay,
            recorded: recorded.clone(),
        };

        let app = Router::new().fallback(respond).with_state(state);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("Stub server error: {}", e);
            }
        });

        StubServer {
            base_url: format!("http://{}", addr),
            recorded,
        }
    }
}

async fn respond(State(state): State<StubState>, uri: Uri, headers: HeaderMap) -> Response {
    state.recorded.lock().unwrap().push(RecordedRequest {
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        headers,
    });

    if let Some(delay) = state.delay {
        tokio::time::sleep(delay).await;
    }

    Response::builder()
        .status(state.status)
        .header("content-type", state.content_type)
        .body(Body::from(state.body.clone()))
        .unwrap()
}

pub struct StubServer {
    pub base_url: String,
    recorded: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubServer {
    pub fn server(&self) -> ModrinthServer {
        ModrinthServer::custom("Stub", &self.base_url)
    }

    pub fn client(&self) -> ModrinthClient {
        ModrinthClient::builder()
            .server(self.server())
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.recorded.lock().unwrap().clone()
    }

    /// The single request the stub received
    pub fn only_request(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

pub const SERVER_INFO_JSON: &str = r#"{
    "about": "Welcome traveler!",
    "documentation": "https://docs.modrinth.com",
    "name": "modrinth-labrinth",
    "version": "2.7.0"
}"#;

pub const NOT_FOUND_JSON: &str =
    r#"{"error":"not_found","description":"x"}"#;

pub const PROJECT_JSON: &str = r#"{
    "id": "AABBCCDD",
    "slug": "sodium",
    "project_type": "mod",
    "team": "4reLOAKe",
    "organization": null,
    "title": "Sodium",
    "description": "The fastest rendering optimization mod",
    "body": "Long description",
    "client_side": "required",
    "server_side": "unsupported",
    "published": "2021-01-03T00:53:34.185936Z",
    "updated": "2024-01-10T17:03:21.245123Z",
    "approved": "2021-01-03T00:53:34.185936Z",
    "queued": null,
    "status": "approved",
    "requested_status": null,
    "license": {"id": "LGPL-3.0-only", "name": "GNU Lesser General Public License v3.0 only", "url": null},
    "downloads": 40000000,
    "followers": 25000,
    "categories": ["optimization"],
    "additional_categories": [],
    "game_versions": ["1.20.1", "1.20.4"],
    "loaders": ["fabric", "quilt"],
    "versions": ["IIJJKKLL", "MMNNOOPP"],
    "icon_url": "https://cdn.modrinth.com/data/AABBCCDD/icon.png",
    "issues_url": "https://github.com/CaffeineMC/sodium/issues",
    "source_url": "https://github.com/CaffeineMC/sodium",
    "wiki_url": null,
    "discord_url": null,
    "donation_urls": [{"id": "ko-fi", "platform": "Ko-fi", "url": "https://ko-fi.com/example"}],
    "gallery": [
        {
            "url": "https://cdn.modrinth.com/data/AABBCCDD/images/shot.png",
            "raw_url": "https://cdn.modrinth.com/data/AABBCCDD/images/shot_raw.png",
            "featured": true,
            "title": "Screenshot",
            "description": null,
            "created": "2022-06-01T10:00:00Z",
            "ordering": 0
        }
    ],
    "color": 8703084,
    "thread_id": "AABBCCDD",
    "monetization_status": "monetized"
}"#;

pub const VERSION_JSON: &str = r#"{
    "id": "IIJJKKLL",
    "project_id": "AABBCCDD",
    "author_id": "EEFFGGHH",
    "name": "Sodium 0.5.3",
    "version_number": "mc1.20.1-0.5.3",
    "changelog": "Fixes",
    "changelog_url": null,
    "featured": false,
    "date_published": "2023-09-20T15:00:00Z",
    "downloads": 123456,
    "version_type": "release",
    "status": "listed",
    "requested_status": null,
    "game_versions": ["1.20.1"],
    "loaders": ["fabric"],
    "files": [
        {
            "hashes": {"sha512": "d1c2b3a4", "sha1": "a1b2c3d4"},
            "url": "https://cdn.modrinth.com/data/AABBCCDD/versions/IIJJKKLL/sodium.jar",
            "filename": "sodium-fabric-mc1.20.1-0.5.3.jar",
            "primary": true,
            "size": 1048576,
            "file_type": null
        }
    ],
    "dependencies": [
        {"version_id": null, "project_id": "P7dR8mSH", "file_name": null, "dependency_type": "optional"}
    ]
}"#;

pub fn versions_json() -> String {
    format!("[{}]", VERSION_JSON)
}

pub fn dependencies_json() -> String {
    format!(
        r#"{{"projects": [{}], "versions": [{}]}}"#,
        PROJECT_JSON, VERSION_JSON
    )
}

pub const SEARCH_JSON: &str = r#"{
    "hits": [
        {
            "project_id": "AABBCCDD",
            "project_type": "mod",
            "slug": "sodium",
            "author": "jellysquid3",
            "title": "Sodium",
            "description": "The fastest rendering optimization mod",
            "categories": ["optimization", "fabric"],
            "display_categories": ["optimization"],
            "versions": ["1.20.1"],
            "downloads": 40000000,
            "follows": 25000,
            "icon_url": null,
            "date_created": "2021-01-03T00:53:34.185936Z",
            "date_modified": "2024-01-10T17:03:21.245123Z",
            "latest_version": "1.20.4",
            "license": "LGPL-3.0-only",
            "client_side": "required",
            "server_side": "unsupported",
            "gallery": [],
            "featured_gallery": null,
            "color": 8703084
        }
    ],
    "offset": 0,
    "limit": 10,
    "total_hits": 1
}"#;

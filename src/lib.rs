//! # Modrinth SDK
//!
//! Typed async client for the [Modrinth](https://modrinth.com) mod registry API.
//!
//! ## Features
//!
//! - **Project search** - Full text search with facet filters
//! - **Project lookup** - Projects, their versions and dependencies
//! - **Version lookup** - By id, by several ids at once or by file hash
//! - **File download** - Stream version files to disk
//! - **Deployments** - Production and staging servers, or any custom base URL
//!
//! Every method performs exactly one HTTP request. There is no caching, no
//! retrying and no rate limiting; those belong to the caller.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use modrinth_sdk::{ModrinthClient, Result, SearchQuery};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = ModrinthClient::new()?;
//!
//!     let results = client
//!         .search(&SearchQuery::new("sodium").facet(["categories:fabric"]))
//!         .await?;
//!     for hit in &results.hits {
//!         println!("{} ({} downloads)", hit.title, hit.downloads);
//!     }
//!
//!     let project = client.get_project("sodium").await?;
//!     println!("{}: {}", project.title, project.description);
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Custom Client Configuration
//!
//! ```rust,no_run
//! use modrinth_sdk::{ApiEnvironment, ModrinthClient, Result};
//! use std::time::Duration;
//!
//! # fn example() -> Result<()> {
//! let client = ModrinthClient::builder()
//!     .environment(ApiEnvironment::Staging)
//!     .timeout(Duration::from_secs(10))
//!     .user_agent("my-launcher/1.0 (contact@example.com)")
//!     .build()?;
//! # Ok(())
//! # }
//! ```
//!
//! ### Error Handling
//!
//! ```rust,no_run
//! use modrinth_sdk::{ModrinthClient, ModrinthError, Result};
//!
//! # async fn example() -> Result<()> {
//! let client = ModrinthClient::new()?;
//!
//! match client.get_project("unknown-project").await {
//!     Ok(project) => println!("Found: {}", project.title),
//!     Err(e) if e.is_not_found() => println!("No such project"),
//!     Err(ModrinthError::Api { error, description, .. }) => {
//!         println!("API error {}: {}", error, description);
//!     }
//!     Err(e) => println!("Error: {}", e.user_message()),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! [`SdkConfig`] reads an optional TOML file and environment variables:
//!
//! ```toml
//! [api]
//! environment = "staging"
//! timeout_seconds = 30
//!
//! [logging]
//! level = "debug"
//! ```
//!
//! Environment variables: `MODRINTH_SDK__SECTION__KEY`

pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod request;
pub mod server;
pub mod types;
pub mod utils;

pub use client::{ModrinthClient, ModrinthClientBuilder};
pub use config::{ApiConfig, LoggingConfig, SdkConfig};
pub use error::{ModrinthError, Result};
pub use request::{ApiRequest, QueryParams};
pub use server::{ApiEnvironment, ModrinthServer};
pub use types::{
    ApiError, ApiServerInformation, DependencyType, FileHashes, Gallery, HashAlgorithm, License,
    Project, ProjectDependencies, ProjectType, ProjectVersion, ProjectVersionDependency,
    ProjectVersionFile, SearchHit, SearchIndex, SearchQuery, SearchResult, SideSupport,
    VersionType,
};

/// Production API base URL
pub const PRODUCTION_API_URL: &str = "https://api.modrinth.com";

/// Staging API base URL
pub const STAGING_API_URL: &str = "https://staging-api.modrinth.com";

/// Default user agent for requests
pub const DEFAULT_USER_AGENT: &str = concat!("modrinth-sdk/", env!("CARGO_PKG_VERSION"));

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connection timeout in seconds
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

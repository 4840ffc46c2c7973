//! Descriptors for the Modrinth deployments a client can target

use crate::{PRODUCTION_API_URL, STAGING_API_URL};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Known Modrinth deployments
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiEnvironment {
    #[default]
    #[serde(alias = "Production")]
    Production,
    #[serde(alias = "Staging")]
    Staging,
}

impl ApiEnvironment {
    /// Display name of the deployment
    pub fn name(self) -> &'static str {
        match self {
            Self::Production => "Production",
            Self::Staging => "Staging",
        }
    }

    /// Base URL of the deployment
    pub fn base_url(self) -> &'static str {
        match self {
            Self::Production => PRODUCTION_API_URL,
            Self::Staging => STAGING_API_URL,
        }
    }
}

impl fmt::Display for ApiEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An immutable description of the server a request is sent to.
///
/// The API key is carried for callers that need it, but the SDK never sends it:
/// every call is made without an `Authorization` header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModrinthServer {
    name: String,
    #[serde(rename = "url")]
    base_url: String,
    #[serde(default, rename = "apiKey", skip_serializing_if = "Option::is_none")]
    api_key: Option<String>,
}

impl ModrinthServer {
    /// Descriptor for one of the known deployments
    pub fn new(environment: ApiEnvironment) -> Self {
        Self {
            name: environment.name().to_string(),
            base_url: environment.base_url().to_string(),
            api_key: None,
        }
    }

    /// Descriptor for a server outside the known deployments (mirrors, local stubs)
    pub fn custom<N: Into<String>, U: Into<String>>(name: N, base_url: U) -> Self {
        Self {
            name: name.into(),
            base_url: base_url.into(),
            api_key: None,
        }
    }

    /// Same descriptor carrying an API key
    pub fn with_api_key<S: Into<String>>(self, api_key: S) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..self
        }
    }

    /// Display name of the server
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// API key carried by the descriptor, if any
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
}

impl fmt::Display for ModrinthServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.base_url)
    }
}

impl Default for ModrinthServer {
    fn default() -> Self {
        Self::new(ApiEnvironment::default())
    }
}

impl From<ApiEnvironment> for ModrinthServer {
    fn from(environment: ApiEnvironment) -> Self {
        Self::new(environment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_deployments() {
        let production = ModrinthServer::new(ApiEnvironment::Production);
        assert_eq!(production.name(), "Production");
        assert_eq!(production.base_url(), "https://api.modrinth.com");
        assert_eq!(production.api_key(), None);

        let staging = ModrinthServer::new(ApiEnvironment::Staging);
        assert_eq!(staging.name(), "Staging");
        assert_eq!(staging.base_url(), "https://staging-api.modrinth.com");
    }

    #[test]
    fn test_default_is_production() {
        assert_eq!(
            ModrinthServer::default(),
            ModrinthServer::new(ApiEnvironment::Production)
        );
    }

    #[test]
    fn test_with_api_key_keeps_target() {
        let server = ModrinthServer::new(ApiEnvironment::Staging).with_api_key("mrp_secret");
        assert_eq!(server.api_key(), Some("mrp_secret"));
        assert_eq!(server.base_url(), STAGING_API_URL);
    }

    #[test]
    fn test_environment_accepts_both_spellings() {
        let lower: ApiEnvironment = serde_json::from_str("\"staging\"").unwrap();
        let upper: ApiEnvironment = serde_json::from_str("\"Staging\"").unwrap();
        assert_eq!(lower, ApiEnvironment::Staging);
        assert_eq!(upper, ApiEnvironment::Staging);
        assert_eq!(
            serde_json::to_string(&ApiEnvironment::Production).unwrap(),
            "\"production\""
        );
    }
}

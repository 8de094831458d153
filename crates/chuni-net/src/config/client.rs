use std::time::Duration;

use reqwest::Url;

use crate::error::{Error, Result};
use crate::retry::RetryPolicy;

use super::{network, portal};

/// Settings for one client instance.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Portal origin every endpoint path is joined onto.
    pub base_url: Url,
    /// Authentication gateway used for re-authentication.
    pub auth_url: Url,
    pub connect_timeout: Duration,
    pub read_timeout: Duration,
    pub call_timeout: Duration,
    pub user_agent: String,
    /// Retry policy for connection failures.
    pub retry: RetryPolicy,
}

impl ClientConfig {
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Resolve an endpoint path against the portal origin.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| Error::InvalidUrl(format!("{}: {}", path, e)))
    }

    /// Host of the authentication gateway.
    pub fn auth_host(&self) -> &str {
        self.auth_url.host_str().unwrap_or(portal::AUTH_HOST)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(portal::BASE_URL).expect("BASE_URL is a valid URL"),
            auth_url: Url::parse(portal::AUTH_URL).expect("AUTH_URL is a valid URL"),
            connect_timeout: network::CONNECT_TIMEOUT,
            read_timeout: network::READ_TIMEOUT,
            call_timeout: network::CALL_TIMEOUT,
            user_agent: network::USER_AGENT.to_string(),
            retry: RetryPolicy::default(),
        }
    }
}

/// Builder for [`ClientConfig`].
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    base_url: Option<String>,
    auth_url: Option<String>,
    connect_timeout: Option<Duration>,
    read_timeout: Option<Duration>,
    call_timeout: Option<Duration>,
    user_agent: Option<String>,
    retry: Option<RetryPolicy>,
}

impl ClientConfigBuilder {
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn auth_url(mut self, url: impl Into<String>) -> Self {
        self.auth_url = Some(url.into());
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = Some(timeout);
        self
    }

    pub fn call_timeout(mut self, timeout: Duration) -> Self {
        self.call_timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = Some(retry);
        self
    }

    pub fn build(self) -> Result<ClientConfig> {
        let defaults = ClientConfig::default();

        let base_url = match self.base_url {
            Some(url) => parse_origin(&url)?,
            None => defaults.base_url,
        };
        let auth_url = match self.auth_url {
            Some(url) => {
                Url::parse(&url).map_err(|e| Error::InvalidUrl(format!("{}: {}", url, e)))?
            }
            None => defaults.auth_url,
        };

        Ok(ClientConfig {
            base_url,
            auth_url,
            connect_timeout: self.connect_timeout.unwrap_or(defaults.connect_timeout),
            read_timeout: self.read_timeout.unwrap_or(defaults.read_timeout),
            call_timeout: self.call_timeout.unwrap_or(defaults.call_timeout),
            user_agent: self.user_agent.unwrap_or(defaults.user_agent),
            retry: self.retry.unwrap_or(defaults.retry),
        })
    }
}

/// Parse a portal origin, making sure it ends with `/` so endpoint paths join
/// below it instead of replacing its last segment.
fn parse_origin(url: &str) -> Result<Url> {
    let normalized = if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{}/", url)
    };
    Url::parse(&normalized).map_err(|e| Error::InvalidUrl(format!("{}: {}", url, e)))
}

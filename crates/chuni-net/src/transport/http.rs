use std::sync::Arc;

use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::HeaderValue;
use reqwest::redirect::Policy;
use reqwest::{Client, Url};
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::retry::{self, RetryPolicy};

use super::{PortalRequest, PortalResponse, Transport, find_cookie};

const MAX_REDIRECTS: usize = 10;

/// reqwest-backed transport.
///
/// The cookie store is owned by the caller, who can persist it between
/// sessions.
pub struct HttpTransport<C: CookieStore + 'static = Jar> {
    client: Client,
    cookies: Arc<C>,
    retry: RetryPolicy,
}

impl<C: CookieStore + 'static> HttpTransport<C> {
    pub fn new(config: &ClientConfig, cookies: Arc<C>) -> Result<Self> {
        let client = Client::builder()
            .cookie_provider(Arc::clone(&cookies))
            .connect_timeout(config.connect_timeout)
            .read_timeout(config.read_timeout)
            .timeout(config.call_timeout)
            .user_agent(config.user_agent.as_str())
            .redirect(Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            cookies,
            retry: config.retry.clone(),
        })
    }

    pub fn cookie_store(&self) -> &Arc<C> {
        &self.cookies
    }

    async fn send_once(
        &self,
        request: &PortalRequest,
    ) -> std::result::Result<PortalResponse, reqwest::Error> {
        let mut builder = self
            .client
            .request(request.method.clone(), request.url.clone());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if !request.form.is_empty() {
            builder = builder.form(&request.form);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let url = response.url().clone();
        let body = response.text().await?;

        Ok(PortalResponse { status, url, body })
    }
}

impl<C: CookieStore + 'static> Transport for HttpTransport<C> {
    async fn send(&self, request: &PortalRequest) -> Result<PortalResponse> {
        let response = retry::execute(
            &self.retry,
            |attempt| {
                debug!("{} {} (attempt {})", request.method, request.url, attempt + 1);
                self.send_once(request)
            },
            |e: &reqwest::Error| e.is_connect(),
        )
        .await?;

        debug!("{} resolved to {} ({})", request.url, response.url, response.status);
        Ok(response)
    }

    fn cookie(&self, url: &Url, name: &str) -> Option<String> {
        let header = self.cookies.cookies(url)?;
        find_cookie(header.to_str().ok()?, name)
    }

    fn set_cookie(&self, url: &Url, name: &str, value: &str, path: &str) {
        let cookie = format!("{}={}; Path={}", name, value, path);
        if let Ok(header) = HeaderValue::from_str(&cookie) {
            self.cookies
                .set_cookies(&mut std::iter::once(&header), url);
        }
    }
}

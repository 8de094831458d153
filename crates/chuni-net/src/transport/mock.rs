//! Scripted transport for testing
//!
//! Replays a queue of canned responses in order, records every request it
//! receives and keeps cookies in a simple in-memory map. Redirects are not
//! simulated: each scripted response carries the URL the request resolved to.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use reqwest::Url;

use crate::error::{Error, Result};

use super::{PortalRequest, PortalResponse, Transport};

/// A scripted response and the cookies the portal sets while serving it.
#[derive(Debug, Clone)]
pub struct MockResponse {
    status: u16,
    url: String,
    body: String,
    cookies: Vec<(String, String, String)>,
}

impl MockResponse {
    pub fn new(status: u16, url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status,
            url: url.into(),
            body: body.into(),
            cookies: Vec::new(),
        }
    }

    /// 200 response resolved at `url`.
    pub fn ok(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(200, url, body)
    }

    /// Set a cookie on the host of `url` when this response is served.
    pub fn with_cookie(
        mut self,
        url: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.cookies.push((url.into(), name.into(), value.into()));
        self
    }
}

/// Mock transport for testing
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<MockResponse>>,
    requests: Mutex<Vec<PortalRequest>>,
    cookies: Mutex<HashMap<(String, String), String>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for the next unanswered request.
    pub fn push(&self, response: MockResponse) -> &Self {
        if let Ok(mut responses) = self.responses.lock() {
            responses.push_back(response);
        }
        self
    }

    /// Requests received so far, in order.
    pub fn requests(&self) -> Vec<PortalRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or_default()
    }

    /// Responses that were scripted but never requested.
    pub fn remaining(&self) -> usize {
        self.responses.lock().map(|r| r.len()).unwrap_or_default()
    }

    fn store_cookie(&self, url: &Url, name: &str, value: &str) {
        let host = url.host_str().unwrap_or_default().to_string();
        if let Ok(mut cookies) = self.cookies.lock() {
            cookies.insert((host, name.to_string()), value.to_string());
        }
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: &PortalRequest) -> Result<PortalResponse> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }

        let next = self
            .responses
            .lock()
            .ok()
            .and_then(|mut responses| responses.pop_front());
        let Some(scripted) = next else {
            return Err(Error::Http(format!(
                "Connection failed: no scripted response for {} {}",
                request.method, request.url
            )));
        };

        for (url, name, value) in &scripted.cookies {
            let url = Url::parse(url).map_err(|e| Error::InvalidUrl(format!("{}: {}", url, e)))?;
            self.store_cookie(&url, name, value);
        }

        let url = Url::parse(&scripted.url)
            .map_err(|e| Error::InvalidUrl(format!("{}: {}", scripted.url, e)))?;
        Ok(PortalResponse {
            status: scripted.status,
            url,
            body: scripted.body,
        })
    }

    fn cookie(&self, url: &Url, name: &str) -> Option<String> {
        let host = url.host_str()?.to_string();
        self.cookies
            .lock()
            .ok()?
            .get(&(host, name.to_string()))
            .cloned()
    }

    fn set_cookie(&self, url: &Url, name: &str, value: &str, _path: &str) {
        self.store_cookie(url, name, value);
    }
}

//! Transport abstraction for testability.
//!
//! The session manager only talks to the network through [`Transport`], so a
//! scripted implementation can stand in for the portal in tests.

use std::future::Future;

use reqwest::{Method, Url};

use crate::error::Result;

/// A request as the portal sees it: method, URL, form body and extra headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalRequest {
    pub method: Method,
    pub url: Url,
    pub form: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
}

impl PortalRequest {
    pub fn get(url: Url) -> Self {
        Self {
            method: Method::GET,
            url,
            form: Vec::new(),
            headers: Vec::new(),
        }
    }

    pub fn post<K, V>(url: Url, form: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            method: Method::POST,
            url,
            form: form
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            headers: Vec::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn is_get(&self) -> bool {
        self.method == Method::GET
    }
}

/// A fully received response after redirects were followed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalResponse {
    pub status: u16,
    /// URL the request resolved to after redirects.
    pub url: Url,
    pub body: String,
}

/// Trait for sending requests to the portal.
///
/// Implementations follow redirects, keep cookies in a store shared with
/// their owner and only retry pure connection failures.
pub trait Transport {
    /// Send a request and return the final response.
    fn send(&self, request: &PortalRequest) -> impl Future<Output = Result<PortalResponse>> + Send;

    /// Value of the cookie `name` that would be sent to `url`.
    fn cookie(&self, url: &Url, name: &str) -> Option<String>;

    /// Store a cookie as if `url` had set it.
    fn set_cookie(&self, url: &Url, name: &str, value: &str, path: &str);
}

/// Find `name` in a `Cookie` header value (`a=1; b=2`).
pub(crate) fn find_cookie(header: &str, name: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then(|| value.to_string())
    })
}

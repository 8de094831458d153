use scraper::Html;
use tracing::{debug, info, warn};

use crate::config::{ClientConfig, error_codes, portal};
use crate::error::{Error, Result};
use crate::parse::parse_error_page;

use super::{PortalRequest, PortalResponse, Transport};

const SERVICE_UNAVAILABLE: u16 = 503;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Unauthenticated,
    Authenticated,
    Reauthenticating,
}

/// Classifies portal responses and recovers an expired session once.
///
/// Every response is checked in order for scheduled maintenance (HTTP 503),
/// the generic landing page (the session was not accepted) and the error page.
/// An invalid or expired session triggers one trip through the
/// authentication gateway followed by at most one replay of the request.
pub struct SessionManager<T> {
    transport: T,
    config: ClientConfig,
    state: SessionState,
}

impl<T: Transport> SessionManager<T> {
    pub fn new(transport: T, config: ClientConfig) -> Self {
        Self {
            transport,
            config,
            state: SessionState::Unauthenticated,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Cookie stored for the portal origin.
    pub fn cookie(&self, name: &str) -> Option<String> {
        self.transport.cookie(&self.config.base_url, name)
    }

    /// A session exists once the portal has issued a `userId` cookie.
    pub fn has_session(&self) -> bool {
        self.cookie(portal::USER_ID_COOKIE).is_some()
    }

    pub fn mark_unauthenticated(&mut self) {
        self.state = SessionState::Unauthenticated;
    }

    /// Send a request, recovering an invalid or expired session once.
    pub async fn execute(&mut self, request: &PortalRequest) -> Result<PortalResponse> {
        match self.dispatch(request).await {
            Ok(response) => {
                self.state = SessionState::Authenticated;
                Ok(response)
            }
            Err(Error::Api { code, description }) if error_codes::is_recoverable(code) => {
                info!("Session rejected with code {} ({}), re-authenticating", code, description);
                self.reauthenticate(request).await
            }
            Err(e) => Err(e),
        }
    }

    /// Send a request, checking only for maintenance.
    ///
    /// Used for requests whose expected outcome is the landing page.
    pub async fn execute_unclassified(
        &mut self,
        request: &PortalRequest,
    ) -> Result<PortalResponse> {
        let response = self.transport.send(request).await?;
        check_maintenance(&response)?;
        Ok(response)
    }

    async fn dispatch(&self, request: &PortalRequest) -> Result<PortalResponse> {
        let response = self.transport.send(request).await?;
        self.classify(response)
    }

    fn classify(&self, response: PortalResponse) -> Result<PortalResponse> {
        check_maintenance(&response)?;

        let path = response.url.path();
        if path == portal::LANDING_PATH {
            debug!("{} landed on the landing page", response.url);
            return Err(Error::Api {
                code: error_codes::ERROR_INVALID_SESSION,
                description: String::new(),
            });
        }
        if path.starts_with(portal::ERROR_PATH_PREFIX) {
            let (code, description) = parse_error_page(&Html::parse_document(&response.body))?;
            debug!("{} landed on the error page with code {}", response.url, code);
            return Err(Error::Api { code, description });
        }
        if response.status >= 400 {
            return Err(Error::Http(format!(
                "HTTP {} error: {}",
                response.status, response.url
            )));
        }

        Ok(response)
    }

    async fn reauthenticate(&mut self, original: &PortalRequest) -> Result<PortalResponse> {
        self.state = SessionState::Reauthenticating;

        let gateway = PortalRequest::get(self.config.auth_url.clone());
        let landed = match self.transport.send(&gateway).await {
            Ok(response) => response,
            Err(e) => {
                self.state = SessionState::Unauthenticated;
                return Err(e);
            }
        };
        if let Err(e) = check_maintenance(&landed) {
            self.state = SessionState::Unauthenticated;
            return Err(e);
        }

        if landed.url.host_str() == Some(self.config.auth_host()) {
            warn!("Authentication gateway rejected the login cookie");
            self.state = SessionState::Unauthenticated;
            return Err(Error::InvalidToken(
                "Authentication gateway did not redirect back to the portal".to_string(),
            ));
        }

        let result = if original.is_get() && landed.url == original.url {
            debug!("Gateway landed on {}, using it as the response", landed.url);
            self.classify(landed)
        } else {
            debug!("Replaying {} {}", original.method, original.url);
            self.dispatch(original).await
        };

        self.state = match &result {
            Err(e) if e.api_code().is_some_and(error_codes::is_recoverable) => {
                SessionState::Unauthenticated
            }
            Err(Error::InvalidToken(_)) => SessionState::Unauthenticated,
            _ => SessionState::Authenticated,
        };
        info!("Re-authentication finished in state {:?}", self.state);
        result
    }
}

fn check_maintenance(response: &PortalResponse) -> Result<()> {
    if response.status == SERVICE_UNAVAILABLE {
        return Err(Error::Maintenance);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::mock::{MockResponse, MockTransport};

    fn manager() -> SessionManager<MockTransport> {
        SessionManager::new(MockTransport::new(), ClientConfig::default())
    }

    fn home() -> PortalRequest {
        let config = ClientConfig::default();
        PortalRequest::get(config.endpoint(portal::HOME).unwrap())
    }

    #[tokio::test]
    async fn test_plain_response_authenticates() {
        let mut session = manager();
        session
            .transport()
            .push(MockResponse::ok("https://chunithm-net-eng.com/mobile/home/", "ok"));

        let response = session.execute(&home()).await.unwrap();
        assert_eq!(response.body, "ok");
        assert_eq!(session.state(), SessionState::Authenticated);
    }

    #[tokio::test]
    async fn test_maintenance() {
        let mut session = manager();
        session
            .transport()
            .push(MockResponse::new(503, "https://chunithm-net-eng.com/mobile/home/", ""));

        assert!(matches!(session.execute(&home()).await, Err(Error::Maintenance)));
        assert_eq!(session.state(), SessionState::Unauthenticated);
    }

    #[tokio::test]
    async fn test_non_recoverable_error_is_not_retried() {
        let mut session = manager();
        session.transport().push(MockResponse::ok(
            "https://chunithm-net-eng.com/mobile/error/",
            r#"<div class="block text_l"><p class="font_small">ERROR CODE: 100001</p><p class="font_small">An error occurred.</p></div>"#,
        ));

        let err = session.execute(&home()).await.unwrap_err();
        assert_eq!(err.api_code(), Some(100001));
        assert_eq!(session.transport().request_count(), 1);
    }

    #[tokio::test]
    async fn test_http_error_status() {
        let mut session = manager();
        session
            .transport()
            .push(MockResponse::new(500, "https://chunithm-net-eng.com/mobile/home/", ""));

        assert!(matches!(session.execute(&home()).await, Err(Error::Http(_))));
    }
}

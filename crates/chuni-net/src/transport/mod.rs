//! Session and transport management.
//!
//! This module contains:
//! - `Transport` - the seam between the session logic and the network
//! - `HttpTransport` - reqwest-backed transport with an external cookie store
//! - `SessionManager` - response classification and the single re-authentication
//! - `mock` - scripted transport for tests

mod http;
mod provider;
mod session;

#[doc(hidden)]
pub mod mock;

pub use http::*;
pub use provider::*;
pub use session::*;

//! HTTP client and request dispatch for the Whistle API.
//!
//! This module provides the main entry point [`WhistleClient`], its
//! [`ClientConfig`], and the [`OutboundRequest`] envelope used to send
//! raw requests.
//!
//! # Example
//!
//! ```no_run
//! use whistle_rs::{ClientConfig, Environment, Session, WhistleClient};
//!
//! # async fn example() -> whistle_rs::Result<()> {
//! let session = Session::from_bearer("bearer-token")?;
//! let config = ClientConfig::default().with_environment(Environment::Staging);
//! let client = WhistleClient::with_config(session, config)?;
//!
//! let me = client.users().me().await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;
mod request;

pub use config::{ClientConfig, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
pub use http::{WhistleClient, ACCEPT_LANGUAGE_VALUE, ACCEPT_VALUE, REFERER_VALUE};
pub use request::OutboundRequest;
pub(crate) use http::{ClientInner, Transport};
pub(crate) use request::segment;

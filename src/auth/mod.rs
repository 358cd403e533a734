//! Authentication and session management for the Whistle API.
//!
//! A [`Session`] is created from exactly one credential form:
//!
//! 1. **Email and password** - exchanged for a bearer token (or, in
//!    legacy mode, an API token) by the first authorized request
//! 2. **Legacy API token** - sent as `X-Whistle-AuthToken`
//! 3. **HTTP bearer token** - sent as `Authorization: Bearer`
//! 4. **Email and refresh token** - exchanged for a bearer token without
//!    sending the password again
//!
//! ```
//! use whistle_rs::Session;
//!
//! # fn example() -> whistle_rs::Result<()> {
//! // No request is made here; the login happens on first use.
//! let session = Session::from_credentials("owner@example.com", "password")?;
//! assert!(!session.is_authenticated());
//! # Ok(())
//! # }
//! ```
//!
//! Resolved credentials are cached for the lifetime of the session. An
//! expired token is not renewed automatically: the vendor's rejection
//! reaches the caller as [`Error::Unauthorized`](crate::Error::Unauthorized).

mod session;

pub use session::{
    AuthMode, Authorization, Credentials, Session, LOGIN_PATH, TOKENS_PATH, TOKEN_HEADER,
};

//! Session management for Whistle API authentication.

use reqwest::header::{HeaderName, HeaderValue, AUTHORIZATION};
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::client::{OutboundRequest, Transport};
use crate::models::User;
use crate::{Error, Result};

/// Header carrying a legacy API token.
pub const TOKEN_HEADER: &str = "x-whistle-authtoken";

/// Path of the legacy token endpoint.
pub const TOKENS_PATH: &str = "api/tokens";

/// Path of the bearer login endpoint.
pub const LOGIN_PATH: &str = "api/login";

/// Which login endpoint an email and password session uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    /// `api/login`, sent as `Authorization: Bearer`
    #[default]
    Bearer,
    /// `api/tokens`, sent as `X-Whistle-AuthToken`
    Legacy,
}

/// Credentials a session was created from.
///
/// Exactly one variant is active per session.
#[derive(Debug, Clone)]
pub enum Credentials {
    /// Email and password, exchanged for a credential on first use
    Password {
        /// Account email
        email: String,
        /// Account password
        password: SecretString,
        /// Endpoint used for the exchange
        mode: AuthMode,
    },
    /// A previously issued legacy API token
    LegacyToken(SecretString),
    /// A previously issued HTTP bearer token
    Bearer(SecretString),
    /// Email and refresh token, exchanged for a bearer on first use
    RefreshToken {
        /// Account email
        email: String,
        /// Refresh token from an earlier bearer login
        refresh_token: SecretString,
    },
}

impl Credentials {
    /// Check that every field the variant needs is present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] naming the first empty field.
    pub fn validate(&self) -> Result<()> {
        fn require(value: &str, what: &str) -> Result<()> {
            if value.trim().is_empty() {
                Err(Error::Config(format!("{} is required", what)))
            } else {
                Ok(())
            }
        }

        match self {
            Credentials::Password {
                email, password, ..
            } => {
                require(email, "valid email")?;
                require(password.expose_secret(), "valid password")
            }
            Credentials::LegacyToken(token) => require(token.expose_secret(), "valid API token"),
            Credentials::Bearer(bearer) => require(bearer.expose_secret(), "valid http bearer"),
            Credentials::RefreshToken {
                email,
                refresh_token,
            } => {
                require(email, "valid email")?;
                require(refresh_token.expose_secret(), "valid refresh token")
            }
        }
    }
}

/// The resolved credential attached to authorized requests.
#[derive(Clone)]
pub enum Authorization {
    /// Sent as `X-Whistle-AuthToken: <token>`
    Token(SecretString),
    /// Sent as `Authorization: Bearer <token>`
    Bearer(SecretString),
}

impl Authorization {
    /// The single header this credential maps to.
    pub(crate) fn header(&self) -> Result<(HeaderName, HeaderValue)> {
        let (name, value) = match self {
            Authorization::Token(token) => (
                HeaderName::from_static(TOKEN_HEADER),
                HeaderValue::from_str(token.expose_secret()),
            ),
            Authorization::Bearer(bearer) => (
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", bearer.expose_secret())),
            ),
        };

        let mut value = value
            .map_err(|_| Error::InvalidInput("Invalid token format".to_string()))?;
        value.set_sensitive(true);
        Ok((name, value))
    }
}

impl std::fmt::Debug for Authorization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Authorization::Token(_) => f.write_str("Token([REDACTED])"),
            Authorization::Bearer(_) => f.write_str("Bearer([REDACTED])"),
        }
    }
}

/// Authentication session for the Whistle API.
///
/// A session is built from one of four credential forms and resolves it
/// into an [`Authorization`] at most once. Token and bearer sessions are
/// resolved at construction; email based sessions log in on the first
/// authorized request.
///
/// # Thread Safety
///
/// `Session` is cheap to clone and can be shared across tasks. Concurrent
/// first use runs a single login; every caller observes its result. A
/// failed login is not cached, so a later request tries again.
///
/// # Example
///
/// ```
/// use whistle_rs::Session;
///
/// let session = Session::from_bearer("tok-xyz").unwrap();
/// assert!(session.is_authenticated());
///
/// assert!(Session::from_credentials("", "password").is_err());
/// ```
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    credentials: Credentials,
    state: OnceCell<SessionState>,
}

struct SessionState {
    authorization: Authorization,
    refresh_token: Option<SecretString>,
    user: Option<User>,
}

impl Session {
    /// Create a session from any credential form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if a required field is empty. No request
    /// is made.
    pub fn new(credentials: Credentials) -> Result<Self> {
        credentials.validate()?;

        let preset = match &credentials {
            Credentials::LegacyToken(token) => Some(Authorization::Token(token.clone())),
            Credentials::Bearer(bearer) => Some(Authorization::Bearer(bearer.clone())),
            Credentials::Password { .. } | Credentials::RefreshToken { .. } => None,
        };

        let state = OnceCell::new_with(preset.map(|authorization| SessionState {
            authorization,
            refresh_token: None,
            user: None,
        }));

        Ok(Self {
            inner: Arc::new(SessionInner { credentials, state }),
        })
    }

    /// Create a session that logs in through `api/login` on first use.
    pub fn from_credentials(
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        Self::new(Credentials::Password {
            email: email.into(),
            password: SecretString::from(password.into()),
            mode: AuthMode::Bearer,
        })
    }

    /// Create a session that obtains a legacy token through `api/tokens`
    /// on first use.
    pub fn from_credentials_legacy(
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        Self::new(Credentials::Password {
            email: email.into(),
            password: SecretString::from(password.into()),
            mode: AuthMode::Legacy,
        })
    }

    /// Create a session from an existing legacy API token.
    pub fn from_token(token: impl Into<String>) -> Result<Self> {
        Self::new(Credentials::LegacyToken(SecretString::from(token.into())))
    }

    /// Create a session from an existing HTTP bearer token.
    pub fn from_bearer(bearer: impl Into<String>) -> Result<Self> {
        Self::new(Credentials::Bearer(SecretString::from(bearer.into())))
    }

    /// Create a session that trades a refresh token for a bearer on first
    /// use, without sending the password again.
    pub fn from_refresh_token(
        email: impl Into<String>,
        refresh_token: impl Into<String>,
    ) -> Result<Self> {
        Self::new(Credentials::RefreshToken {
            email: email.into(),
            refresh_token: SecretString::from(refresh_token.into()),
        })
    }

    /// Create a session from environment variables.
    ///
    /// Checked in order: `WHISTLE_BEARER`, `WHISTLE_TOKEN`, then
    /// `WHISTLE_EMAIL` with `WHISTLE_PASSWORD`.
    pub fn from_env() -> Result<Self> {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());

        if let Some(bearer) = var("WHISTLE_BEARER") {
            return Self::from_bearer(bearer);
        }
        if let Some(token) = var("WHISTLE_TOKEN") {
            return Self::from_token(token);
        }
        match (var("WHISTLE_EMAIL"), var("WHISTLE_PASSWORD")) {
            (Some(email), Some(password)) => Self::from_credentials(email, password),
            _ => Err(Error::Config(
                "set WHISTLE_BEARER, WHISTLE_TOKEN, or WHISTLE_EMAIL and WHISTLE_PASSWORD"
                    .to_string(),
            )),
        }
    }

    /// The credentials this session was created from.
    pub fn credentials(&self) -> &Credentials {
        &self.inner.credentials
    }

    /// Whether a credential has been resolved and cached.
    pub fn is_authenticated(&self) -> bool {
        self.inner.state.initialized()
    }

    /// Refresh token issued by the bearer login, if one happened.
    ///
    /// Store this securely to restore the session later with
    /// [`Session::from_refresh_token`].
    pub fn refresh_token(&self) -> Option<String> {
        self.inner
            .state
            .get()
            .and_then(|s| s.refresh_token.as_ref())
            .map(|t| t.expose_secret().to_string())
    }

    /// User profile returned by the bearer login, if one happened.
    pub fn user(&self) -> Option<User> {
        self.inner.state.get().and_then(|s| s.user.clone())
    }

    /// Resolve the authorization, logging in if nothing is cached yet.
    pub(crate) async fn authorization(&self, transport: &Transport) -> Result<&Authorization> {
        let state = self
            .inner
            .state
            .get_or_try_init(|| self.login(transport))
            .await?;
        Ok(&state.authorization)
    }

    async fn login(&self, transport: &Transport) -> Result<SessionState> {
        match &self.inner.credentials {
            Credentials::Password {
                email,
                password,
                mode: AuthMode::Bearer,
            } => {
                let body = serde_json::json!({
                    "email": email,
                    "password": password.expose_secret(),
                });
                Self::bearer_login(transport, body).await
            }
            Credentials::Password {
                email,
                password,
                mode: AuthMode::Legacy,
            } => Self::token_login(transport, email, password).await,
            Credentials::RefreshToken {
                email,
                refresh_token,
            } => {
                let body = serde_json::json!({
                    "email": email,
                    "refresh_token": refresh_token.expose_secret(),
                });
                Self::bearer_login(transport, body).await
            }
            Credentials::LegacyToken(token) => Ok(SessionState {
                authorization: Authorization::Token(token.clone()),
                refresh_token: None,
                user: None,
            }),
            Credentials::Bearer(bearer) => Ok(SessionState {
                authorization: Authorization::Bearer(bearer.clone()),
                refresh_token: None,
                user: None,
            }),
        }
    }

    async fn bearer_login(transport: &Transport, body: serde_json::Value) -> Result<SessionState> {
        let request = OutboundRequest::post(LOGIN_PATH).json(&body)?.without_auth();
        let bytes = Self::login_exchange(transport, &request, StatusCode::CREATED).await?;

        let response: BearerResponse = serde_json::from_slice(&bytes)
            .map_err(|e| auth_failure(format!("malformed login response: {}", e)))?;

        if response.auth_token.trim().is_empty() {
            return Err(auth_failure("login response carried no auth_token".to_string()));
        }

        tracing::info!(endpoint = LOGIN_PATH, "login succeeded");

        Ok(SessionState {
            authorization: Authorization::Bearer(SecretString::from(response.auth_token)),
            refresh_token: response
                .refresh_token
                .filter(|t| !t.is_empty())
                .map(SecretString::from),
            user: response.user,
        })
    }

    async fn token_login(
        transport: &Transport,
        email: &str,
        password: &SecretString,
    ) -> Result<SessionState> {
        let body = serde_json::json!({
            "email": email,
            "password": password.expose_secret(),
        });
        let request = OutboundRequest::post(TOKENS_PATH).json(&body)?.without_auth();
        let bytes = Self::login_exchange(transport, &request, StatusCode::OK).await?;

        let response: TokenResponse = serde_json::from_slice(&bytes)
            .map_err(|e| auth_failure(format!("malformed token response: {}", e)))?;

        if !response.success {
            return Err(auth_failure(format!(
                "token request was refused: {}",
                response.messages.join("; ")
            )));
        }
        if response.token.trim().is_empty() {
            return Err(auth_failure("token response carried no token".to_string()));
        }

        tracing::info!(endpoint = TOKENS_PATH, "login succeeded");

        Ok(SessionState {
            authorization: Authorization::Token(SecretString::from(response.token)),
            refresh_token: None,
            user: None,
        })
    }

    /// Send a login request and return its body if the status matches.
    async fn login_exchange(
        transport: &Transport,
        request: &OutboundRequest,
        expected: StatusCode,
    ) -> Result<Vec<u8>> {
        let response = transport
            .execute(request, None)
            .await
            .map_err(|e| {
                auth_failure(format!("login request to {} failed: {}", request.path(), e))
            })?;

        let status = response.status();
        if status != expected {
            return Err(auth_failure(format!(
                "auth failed with HTTP error: {}",
                status.as_u16()
            )));
        }

        response
            .bytes()
            .await
            .map(|b| b.to_vec())
            .map_err(|e| auth_failure(format!("failed to read login response: {}", e)))
    }
}

fn auth_failure(reason: String) -> Error {
    tracing::warn!(%reason, "login failed");
    Error::Authentication(reason)
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mode = match &self.inner.credentials {
            Credentials::Password { mode, .. } => match mode {
                AuthMode::Bearer => "password",
                AuthMode::Legacy => "password (legacy)",
            },
            Credentials::LegacyToken(_) => "legacy token",
            Credentials::Bearer(_) => "bearer",
            Credentials::RefreshToken { .. } => "refresh token",
        };

        f.debug_struct("Session")
            .field("credentials", &mode)
            .field("authorization", &"[REDACTED]")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    token: String,
    #[serde(default)]
    messages: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct BearerResponse {
    #[serde(default)]
    auth_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    user: Option<User>,
}

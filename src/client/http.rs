//! HTTP client implementation for the Whistle API.

use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE, REFERER,
    USER_AGENT,
};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use url::Url;

use crate::api::{BreedsService, DevicesService, MiscService, PetsService, UsersService};
use crate::auth::{Authorization, Session};
use crate::{Error, Result};

use super::config::ClientConfig;
use super::request::OutboundRequest;

/// Referer sent with every request.
pub const REFERER_VALUE: &str = "https://app.whistle.com/";

/// Versioned media type the API negotiates on.
pub const ACCEPT_VALUE: &str = "application/vnd.whistle.com.v4+json";

/// Locale sent with every request.
pub const ACCEPT_LANGUAGE_VALUE: &str = "en-US";

/// The main client for interacting with the Whistle API.
///
/// Construction never touches the network. When the session was built
/// from an email and password, the first request that needs authorization
/// performs the login and the result is reused for the lifetime of the
/// session.
///
/// # Example
///
/// ```no_run
/// use whistle_rs::WhistleClient;
///
/// # async fn example() -> whistle_rs::Result<()> {
/// let client = WhistleClient::from_credentials("owner@example.com", "password")?;
///
/// for pet in client.pets().list().await? {
///     println!("{} ({})", pet.name, pet.id);
/// }
/// # Ok(())
/// # }
/// ```
pub struct WhistleClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) transport: Transport,
    pub(crate) session: Session,
    pub(crate) config: ClientConfig,
}

/// Executes requests against the configured base URL.
///
/// The transport never resolves credentials itself; callers hand it the
/// authorization to attach, which keeps the login path free of recursion.
pub(crate) struct Transport {
    http: reqwest::Client,
    base_url: Url,
    user_agent: HeaderValue,
}

impl WhistleClient {
    /// Create a client for `session` with the default configuration.
    pub fn new(session: Session) -> Result<Self> {
        Self::with_config(session, ClientConfig::default())
    }

    /// Create a client for `session` with a custom configuration.
    pub fn with_config(session: Session, config: ClientConfig) -> Result<Self> {
        let transport = Transport::new(&config)?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                transport,
                session,
                config,
            }),
        })
    }

    /// Create a client that logs in with email and password on first use.
    pub fn from_credentials(
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        Self::new(Session::from_credentials(email, password)?)
    }

    /// Create a client from an existing legacy API token.
    pub fn from_token(token: impl Into<String>) -> Result<Self> {
        Self::new(Session::from_token(token)?)
    }

    /// Create a client from an existing HTTP bearer token.
    pub fn from_bearer(bearer: impl Into<String>) -> Result<Self> {
        Self::new(Session::from_bearer(bearer)?)
    }

    /// Create a client that restores a bearer session from a refresh token.
    pub fn from_refresh_token(
        email: impl Into<String>,
        refresh_token: impl Into<String>,
    ) -> Result<Self> {
        Self::new(Session::from_refresh_token(email, refresh_token)?)
    }

    /// Create a client from `WHISTLE_*` environment variables.
    ///
    /// See [`Session::from_env`] and [`ClientConfig::from_env`].
    pub fn from_env() -> Result<Self> {
        Self::with_config(Session::from_env()?, ClientConfig::from_env()?)
    }

    /// Get the users service.
    pub fn users(&self) -> UsersService {
        UsersService::new(self.inner.clone())
    }

    /// Get the pets service.
    pub fn pets(&self) -> PetsService {
        PetsService::new(self.inner.clone())
    }

    /// Get the devices service.
    pub fn devices(&self) -> DevicesService {
        DevicesService::new(self.inner.clone())
    }

    /// Get the breed catalog service.
    pub fn breeds(&self) -> BreedsService {
        BreedsService::new(self.inner.clone())
    }

    /// Get the notifications, places and catalog lookups service.
    pub fn misc(&self) -> MiscService {
        MiscService::new(self.inner.clone())
    }

    /// Resolve credentials now instead of on the first authorized request.
    pub async fn authorize(&self) -> Result<()> {
        self.inner
            .session
            .authorization(&self.inner.transport)
            .await
            .map(|_| ())
    }

    /// Dispatch a raw request.
    ///
    /// The response is returned whatever its status; only transport
    /// failures and credential resolution failures are errors.
    pub async fn send(&self, request: OutboundRequest) -> Result<reqwest::Response> {
        self.inner.send(request).await
    }

    /// Get a reference to the session.
    pub fn session(&self) -> &Session {
        &self.inner.session
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }
}

impl ClientInner {
    /// Attach authorization if the request asks for it, then execute it.
    pub(crate) async fn send(&self, request: OutboundRequest) -> Result<reqwest::Response> {
        // Reject paths that leave the base URL before any login is attempted.
        self.transport.url_for(&request)?;

        let authorization = if request.requires_auth() {
            Some(self.session.authorization(&self.transport).await?)
        } else {
            None
        };

        self.transport.execute(&request, authorization).await
    }

    /// GET `path` with authorization and decode a 200 response.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.fetch(OutboundRequest::get(path), &[StatusCode::OK]).await
    }

    /// Dispatch `request` and decode the body when the status is one of
    /// `accepted`. An empty body decodes as JSON `null`.
    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        request: OutboundRequest,
        accepted: &[StatusCode],
    ) -> Result<T> {
        let response = self.send(request).await?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(Error::from_transport)?;

        if !accepted.contains(&status) {
            return Err(self.unexpected_status(status, &bytes));
        }

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(serde_json::from_value(serde_json::Value::Null)?);
        }

        Ok(serde_json::from_slice(&bytes)?)
    }

    fn unexpected_status(&self, status: StatusCode, bytes: &[u8]) -> Error {
        let body: serde_json::Value = serde_json::from_slice(bytes).unwrap_or_default();

        match status {
            StatusCode::UNAUTHORIZED => Error::Unauthorized,
            StatusCode::NOT_FOUND => {
                let message = body
                    .get("error")
                    .and_then(|m| m.as_str())
                    .unwrap_or("Resource not found")
                    .to_string();
                Error::NotFound(message)
            }
            _ => Error::from_api_response(status.as_u16(), body),
        }
    }
}

impl Transport {
    pub(crate) fn new(config: &ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;

        let mut base_url = config.resolved_base_url()?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let user_agent = HeaderValue::from_str(&config.user_agent).map_err(|_| {
            Error::Config(format!("invalid user agent: {:?}", config.user_agent))
        })?;

        Ok(Self {
            http,
            base_url,
            user_agent,
        })
    }

    /// Full URL for a request: base URL, relative path, query string.
    ///
    /// The result always stays under the base URL. Absolute URLs and dot
    /// segments are rejected with [`Error::InvalidInput`].
    pub(crate) fn url_for(&self, request: &OutboundRequest) -> Result<Url> {
        let path = request.path().trim_start_matches('/');
        let escapes = |reason: &str| {
            Error::InvalidInput(format!("{} in request path: {:?}", reason, request.path()))
        };

        if Url::parse(path).is_ok() {
            return Err(escapes("absolute URL"));
        }

        let path_part = path.split(['?', '#']).next().unwrap_or_default();
        if path_part.split('/').any(is_dot_segment) {
            return Err(escapes("dot segment"));
        }

        let mut url = self.base_url.join(path)?;
        if url.origin() != self.base_url.origin() || !url.path().starts_with(self.base_url.path())
        {
            return Err(escapes("path outside the base URL"));
        }

        if !request.query_pairs().is_empty() {
            url.query_pairs_mut().extend_pairs(request.query_pairs());
        }

        Ok(url)
    }

    /// Headers every request starts from.
    pub(crate) fn baseline_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, self.user_agent.clone());
        headers.insert(REFERER, HeaderValue::from_static(REFERER_VALUE));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_VALUE));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANGUAGE_VALUE));
        headers
    }

    /// Build and send one request.
    ///
    /// Header precedence, lowest first: baseline, authorization, the
    /// request's own overrides.
    pub(crate) async fn execute(
        &self,
        request: &OutboundRequest,
        authorization: Option<&Authorization>,
    ) -> Result<reqwest::Response> {
        let url = self.url_for(request)?;
        let mut headers = self.baseline_headers();

        if let Some(authorization) = authorization {
            let (name, value) = authorization.header()?;
            headers.insert(name, value);
        }

        for (name, value) in request.headers() {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| Error::InvalidInput(format!("invalid header name: {:?}", name)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|_| Error::InvalidInput(format!("invalid value for header {}", name)))?;
            headers.insert(name, value);
        }

        tracing::debug!(
            method = %request.method(),
            url = %url,
            auth = authorization.is_some(),
            "dispatching request"
        );

        let mut builder = self
            .http
            .request(request.method().clone(), url)
            .headers(headers);

        if let Some(body) = request.body() {
            builder = builder.body(serde_json::to_vec(body)?);
        }

        builder.send().await.map_err(Error::from_transport)
    }
}

fn is_dot_segment(segment: &str) -> bool {
    matches!(
        segment.to_ascii_lowercase().as_str(),
        "." | ".." | "%2e" | "%2e%2e" | ".%2e" | "%2e."
    )
}

impl Clone for WhistleClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for WhistleClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WhistleClient")
            .field("config", &self.inner.config)
            .field("session", &self.inner.session)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport(base: &str) -> Transport {
        let config = ClientConfig::default().with_base_url(Url::parse(base).unwrap());
        Transport::new(&config).unwrap()
    }

    #[test]
    fn test_url_join() {
        let t = transport("https://app.whistle.com");
        let url = t.url_for(&OutboundRequest::get("api/users")).unwrap();
        assert_eq!(url.as_str(), "https://app.whistle.com/api/users");
    }

    #[test]
    fn test_url_join_keeps_base_path() {
        let t = transport("http://localhost:9000/proxy");
        let url = t.url_for(&OutboundRequest::get("/api/pets/1")).unwrap();
        assert_eq!(url.as_str(), "http://localhost:9000/proxy/api/pets/1");
    }

    #[test]
    fn test_url_query_encoding() {
        let t = transport("https://app.whistle.com");
        let request = OutboundRequest::get("api/pet_foods").query("type", "dog treat");
        let url = t.url_for(&request).unwrap();
        assert_eq!(url.query(), Some("type=dog+treat"));
    }

    #[test]
    fn test_url_rejects_absolute_url() {
        let t = transport("https://app.whistle.com");
        for path in [
            "https://other.example/api/users",
            "http://app.whistle.com:8080/api/users",
        ] {
            let err = t.url_for(&OutboundRequest::get(path)).unwrap_err();
            assert!(matches!(err, Error::InvalidInput(_)), "{}: {:?}", path, err);
        }
    }

    #[test]
    fn test_url_rejects_dot_segments() {
        let t = transport("http://localhost:9000/proxy");
        for path in ["../api/users", "api/../../secret", "api/%2E%2E/x", "api/./pets"] {
            let err = t.url_for(&OutboundRequest::get(path)).unwrap_err();
            assert!(matches!(err, Error::InvalidInput(_)), "{}: {:?}", path, err);
        }
    }

    #[test]
    fn test_url_leading_slashes_stay_on_host() {
        let t = transport("https://app.whistle.com");
        let url = t.url_for(&OutboundRequest::get("//other.example/x")).unwrap();
        assert_eq!(url.as_str(), "https://app.whistle.com/other.example/x");
    }

    #[test]
    fn test_url_keeps_encoded_segment() {
        let t = transport("https://app.whistle.com");
        let url = t
            .url_for(&OutboundRequest::get("api/users/invitation_codes/ab%3Fcd"))
            .unwrap();
        assert_eq!(url.path(), "/api/users/invitation_codes/ab%3Fcd");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_baseline_headers() {
        let headers = transport("https://app.whistle.com").baseline_headers();
        assert_eq!(headers[USER_AGENT], "Mozilla/5.0 (X11; Linux x86_64)");
        assert_eq!(headers[REFERER], "https://app.whistle.com/");
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert_eq!(headers[ACCEPT], "application/vnd.whistle.com.v4+json");
        assert_eq!(headers[ACCEPT_LANGUAGE], "en-US");
    }

    #[test]
    fn test_invalid_user_agent_is_config_error() {
        let config = ClientConfig::default().with_user_agent("bad\nagent");
        assert!(matches!(Transport::new(&config), Err(Error::Config(_))));
    }
}

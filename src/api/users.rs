//! Users service for profile, billing and subscription operations.

use std::collections::HashMap;
use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::Value;

use crate::client::{segment, ClientInner, OutboundRequest};
use crate::models::{
    CancellationReason, CreditCard, Pet, SubscriptionId, Subscriptions, UserProfile,
};
use crate::{Error, Result};

/// Service for user-related operations.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: whistle_rs::WhistleClient) -> whistle_rs::Result<()> {
/// let me = client.users().me().await?;
/// println!("Hello, {}!", me.first_name);
///
/// let taken = client.users().check_email("someone@example.com").await?;
/// # Ok(())
/// # }
/// ```
pub struct UsersService {
    inner: Arc<ClientInner>,
}

impl UsersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get the current user's profile from the legacy endpoint.
    #[deprecated(note = "use `me()` instead")]
    pub async fn users(&self) -> Result<UserProfile> {
        self.inner.get("api/users").await
    }

    /// Get the current user's profile.
    pub async fn me(&self) -> Result<UserProfile> {
        #[derive(serde::Deserialize)]
        struct Response {
            user: UserProfile,
        }
        let response: Response = self.inner.get("api/users/me").await?;
        Ok(response.user)
    }

    /// Check whether `email` is already registered.
    ///
    /// The API answers `204 No Content` for a registered address; any
    /// other status means it is not.
    pub async fn check_email(&self, email: &str) -> Result<bool> {
        if email.trim().is_empty() {
            return Err(Error::InvalidInput("email must not be empty".to_string()));
        }

        // The API expects dots escaped too.
        let encoded = segment(email)?.replace('.', "%2E");

        let response = self
            .inner
            .send(OutboundRequest::get(format!("api/users/emails/{}", encoded)))
            .await?;

        Ok(response.status() == StatusCode::NO_CONTENT)
    }

    /// Get the pet an invitation code shares.
    pub async fn invitation_code(&self, code: &str) -> Result<Pet> {
        #[derive(serde::Deserialize)]
        struct Response {
            pet: Pet,
        }
        let response: Response = self
            .inner
            .get(&format!("api/users/invitation_codes/{}", segment(code)?))
            .await?;
        Ok(response.pet)
    }

    /// Get the app state flags of the current user.
    pub async fn application_state(&self) -> Result<HashMap<String, Value>> {
        #[derive(serde::Deserialize)]
        struct Response {
            #[serde(default)]
            application_state: HashMap<String, Value>,
        }
        let response: Response = self.inner.get("api/users/application_state").await?;
        Ok(response.application_state)
    }

    /// Get the card on file.
    ///
    /// This endpoint only answers to a plain JSON `Accept` header.
    pub async fn credit_card(&self) -> Result<CreditCard> {
        let request =
            OutboundRequest::get("api/users/credit_card").header("Accept", "application/json");
        self.inner.fetch(request, &[StatusCode::OK]).await
    }

    /// List the current user's subscriptions.
    pub async fn subscriptions(&self) -> Result<Subscriptions> {
        self.inner.get("api/users/subscriptions").await
    }

    /// Preview what canceling a subscription would do.
    pub async fn cancellation_preview(&self, subscription: &SubscriptionId) -> Result<Value> {
        self.inner
            .get(&format!(
                "api/users/subscriptions/{}/cancellation/preview",
                segment(subscription)?
            ))
            .await
    }

    /// List the reasons a user may give when canceling a subscription.
    pub async fn cancellation_reasons(
        &self,
        subscription: &SubscriptionId,
    ) -> Result<Vec<CancellationReason>> {
        #[derive(serde::Deserialize)]
        struct Response {
            #[serde(default)]
            cancellation_reasons: Vec<CancellationReason>,
        }
        let response: Response = self
            .inner
            .get(&format!(
                "api/users/subscriptions/{}/cancellation/reasons",
                segment(subscription)?
            ))
            .await?;
        Ok(response.cancellation_reasons)
    }
}

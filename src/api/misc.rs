//! Account-wide lookups that do not belong to a single pet or collar.

use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::Value;

use crate::client::{ClientInner, OutboundRequest};
use crate::models::{FoodType, Notification, PetFood, Place, ReverseGeocode};
use crate::{Error, Result};

/// Service for notifications, places and catalog lookups.
///
/// # Example
///
/// ```no_run
/// use whistle_rs::models::FoodType;
///
/// # async fn example(client: whistle_rs::WhistleClient) -> whistle_rs::Result<()> {
/// let treats = client.misc().pet_foods(FoodType::DogTreat).await?;
/// let address = client.misc().reverse_geocode(39.7817, -89.6501).await?;
/// println!("{}, {}", address.description.address, address.description.city);
/// # Ok(())
/// # }
/// ```
pub struct MiscService {
    inner: Arc<ClientInner>,
}

impl MiscService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List pending notifications.
    pub async fn notifications(&self) -> Result<Vec<Notification>> {
        #[derive(serde::Deserialize)]
        struct Response {
            #[serde(default)]
            items: Vec<Notification>,
        }
        let response: Response = self.inner.get("api/notifications").await?;
        Ok(response.items)
    }

    /// Search the pet food catalog.
    pub async fn pet_foods(&self, kind: FoodType) -> Result<Vec<PetFood>> {
        let request = OutboundRequest::get("api/pet_foods").query("type", kind.as_str());
        self.inner.fetch(request, &[StatusCode::OK]).await
    }

    /// Get the best address guess for a coordinate.
    pub async fn reverse_geocode(&self, latitude: f64, longitude: f64) -> Result<ReverseGeocode> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(Error::InvalidInput(format!(
                "coordinate out of range: {}, {}",
                latitude, longitude
            )));
        }

        let request = OutboundRequest::get("api/reverse_geocode")
            .query("latitude", latitude)
            .query("longitude", longitude);

        self.inner.fetch(request, &[StatusCode::OK]).await
    }

    /// List the places saved on the account.
    pub async fn places(&self) -> Result<Vec<Place>> {
        self.inner.get("api/places").await
    }

    /// List adventure categories.
    ///
    /// The API may answer `204 No Content`, which decodes as `Value::Null`.
    pub async fn adventure_categories(&self) -> Result<Value> {
        self.inner
            .fetch(
                OutboundRequest::get("api/adventures/categories"),
                &[StatusCode::OK, StatusCode::NO_CONTENT],
            )
            .await
    }
}

//! Breed catalog service.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{Animal, Breed};
use crate::Result;

/// Service for the breed catalog.
pub struct BreedsService {
    inner: Arc<ClientInner>,
}

impl BreedsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List the known breeds of an animal.
    pub async fn list(&self, animal: Animal) -> Result<Vec<Breed>> {
        #[derive(serde::Deserialize)]
        struct Response {
            #[serde(default)]
            breeds: Vec<Breed>,
        }
        let response: Response = self
            .inner
            .get(&format!("api/breeds/{}", animal.as_str()))
            .await?;
        Ok(response.breeds)
    }
}

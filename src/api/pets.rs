//! Pets service.

use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::StatusCode;
use serde_json::Value;

use crate::client::{segment, ClientInner, OutboundRequest};
use crate::models::{
    Achievement, Daily, DailyItem, HealthGraph, HealthTrends, Location, NutritionPortions, Pet,
    PetId, PetOwner, PetStatistics, TaskOccurrences, Transfer, Whereabouts,
};
use crate::{Error, Result};

/// Service for pet operations: profiles, locations, activity and health.
///
/// # Example
///
/// ```no_run
/// use chrono::{Duration, Utc};
///
/// # async fn example(client: whistle_rs::WhistleClient) -> whistle_rs::Result<()> {
/// let pets = client.pets().list().await?;
///
/// if let Some(pet) = pets.first() {
///     let now = Utc::now();
///     let trail = client
///         .pets()
///         .whereabouts(&pet.id, now - Duration::hours(6), now)
///         .await?;
///     println!("{} fixes in the last 6 hours", trail.locations.len());
/// }
/// # Ok(())
/// # }
/// ```
pub struct PetsService {
    inner: Arc<ClientInner>,
}

impl PetsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List the pets on the account.
    pub async fn list(&self) -> Result<Vec<Pet>> {
        #[derive(serde::Deserialize)]
        struct Response {
            #[serde(default)]
            pets: Vec<Pet>,
        }
        let response: Response = self.inner.get("api/pets").await?;
        Ok(response.pets)
    }

    /// List pending pet ownership transfers.
    pub async fn transfers(&self) -> Result<Vec<Transfer>> {
        #[derive(serde::Deserialize)]
        struct Response {
            #[serde(default)]
            transfers: Vec<Transfer>,
        }
        let response: Response = self.inner.get("api/pets/transfers").await?;
        Ok(response.transfers)
    }

    /// Get a single pet.
    pub async fn get(&self, pet: &PetId) -> Result<Pet> {
        #[derive(serde::Deserialize)]
        struct Response {
            pet: Pet,
        }
        let response: Response = self
            .inner
            .get(&format!("api/pets/{}", segment(pet)?))
            .await?;
        Ok(response.pet)
    }

    /// List the users with access to a pet.
    pub async fn owners(&self, pet: &PetId) -> Result<Vec<PetOwner>> {
        #[derive(serde::Deserialize)]
        struct Response {
            #[serde(default)]
            owners: Vec<PetOwner>,
        }
        let response: Response = self
            .inner
            .get(&format!("api/pets/{}/owners", segment(pet)?))
            .await?;
        Ok(response.owners)
    }

    /// Get the locations and places a pet visited between `start` and `end`.
    pub async fn whereabouts(
        &self,
        pet: &PetId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Whereabouts> {
        if start > end {
            return Err(Error::InvalidInput(format!(
                "whereabouts window starts after it ends ({} > {})",
                start, end
            )));
        }

        let path = format!("api/pets/{}/whereabouts", segment(pet)?);
        let request = OutboundRequest::get(path)
            .query("start_time", start.to_rfc3339_opts(SecondsFormat::Secs, true))
            .query("end_time", end.to_rfc3339_opts(SecondsFormat::Secs, true));

        self.inner.fetch(request, &[StatusCode::OK]).await
    }

    /// Get the most recent location fixes of a pet.
    pub async fn recent_locations(&self, pet: &PetId) -> Result<Vec<Location>> {
        #[derive(serde::Deserialize)]
        struct Response {
            #[serde(default)]
            locations: Vec<Location>,
        }
        let response: Response = self
            .inner
            .get(&format!("api/pets/{}/locations/recent_trackings", segment(pet)?))
            .await?;
        Ok(response.locations)
    }

    /// List a pet's achievements, earned or not.
    pub async fn achievements(&self, pet: &PetId) -> Result<Vec<Achievement>> {
        #[derive(serde::Deserialize)]
        struct Response {
            #[serde(default)]
            achievements: Vec<Achievement>,
        }
        let response: Response = self
            .inner
            .get(&format!("api/pets/{}/achievements", segment(pet)?))
            .await?;
        Ok(response.achievements)
    }

    /// Get aggregated activity statistics.
    pub async fn statistics(&self, pet: &PetId) -> Result<Vec<PetStatistics>> {
        #[derive(serde::Deserialize)]
        struct Response {
            #[serde(default)]
            stats: Vec<PetStatistics>,
        }
        let response: Response = self
            .inner
            .get(&format!("api/pets/{}/stats", segment(pet)?))
            .await?;
        Ok(response.stats)
    }

    /// List daily activity totals.
    pub async fn dailies(&self, pet: &PetId) -> Result<Vec<Daily>> {
        #[derive(serde::Deserialize)]
        struct Response {
            #[serde(default)]
            dailies: Vec<Daily>,
        }
        let response: Response = self
            .inner
            .get(&format!("api/pets/{}/dailies", segment(pet)?))
            .await?;
        Ok(response.dailies)
    }

    /// Get the detailed activity of one day.
    ///
    /// `day_number` is the [`Daily::day_number`] of the day.
    pub async fn daily(&self, pet: &PetId, day_number: u64) -> Result<Daily> {
        #[derive(serde::Deserialize)]
        struct Response {
            daily: Daily,
        }
        let response: Response = self
            .inner
            .get(&format!("api/pets/{}/dailies/{}", segment(pet)?, day_number))
            .await?;
        Ok(response.daily)
    }

    /// Get the timeline entries of one day.
    pub async fn daily_items(&self, pet: &PetId, day_number: u64) -> Result<Vec<DailyItem>> {
        #[derive(serde::Deserialize)]
        struct Response {
            #[serde(default)]
            daily_items: Vec<DailyItem>,
        }
        let response: Response = self
            .inner
            .get(&format!(
                "api/pets/{}/dailies/{}/daily_items",
                segment(pet)?,
                day_number
            ))
            .await?;
        Ok(response.daily_items)
    }

    /// Get the health trend report.
    pub async fn health_trends(&self, pet: &PetId) -> Result<HealthTrends> {
        self.inner
            .get(&format!("api/pets/{}/health/trends", segment(pet)?))
            .await
    }

    /// Get the daily data points of one health trend over `days` days.
    ///
    /// `trend` is a [`HealthTrend::kind`](crate::models::HealthTrend::kind)
    /// such as `"scratching"`.
    pub async fn health_graph(&self, pet: &PetId, trend: &str, days: u32) -> Result<HealthGraph> {
        if days == 0 {
            return Err(Error::InvalidInput(
                "health graph needs at least one day".to_string(),
            ));
        }

        let path = format!(
            "api/pets/{}/health/graphs/{}",
            segment(pet)?,
            segment(trend)?
        );
        let request = OutboundRequest::get(path).query("num_of_days", days);

        self.inner.fetch(request, &[StatusCode::OK]).await
    }

    /// Get suggested feeding amounts.
    pub async fn nutrition_portions(&self, pet: &PetId) -> Result<NutritionPortions> {
        self.inner
            .get(&format!("api/pets/{}/nutrition/v2/suggested_portions", segment(pet)?))
            .await
    }

    /// Get the configured food portions.
    pub async fn food_portions(&self, pet: &PetId) -> Result<Vec<Value>> {
        #[derive(serde::Deserialize)]
        struct Response {
            #[serde(default)]
            pet_food_portions: Vec<Value>,
        }
        let response: Response = self
            .inner
            .get(&format!("api/pets/{}/pet_food_portions", segment(pet)?))
            .await?;
        Ok(response.pet_food_portions)
    }

    /// Get a care task.
    pub async fn task(&self, pet: &PetId, task: &str) -> Result<Value> {
        self.inner
            .get(&format!("api/pets/{}/tasks/{}", segment(pet)?, segment(task)?))
            .await
    }

    /// List occurrences of care tasks of the given kind.
    pub async fn task_occurrences(&self, pet: &PetId, kind: &str) -> Result<TaskOccurrences> {
        let path = format!("api/pets/{}/task_occurrences/", segment(pet)?);
        let request = OutboundRequest::get(path).query("type", kind);

        self.inner.fetch(request, &[StatusCode::OK]).await
    }
}

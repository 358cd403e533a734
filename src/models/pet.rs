//! Pet, activity and health models.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::device::Device;
use super::enums::WeightType;
use super::place::{GeocodeDescription, PetFood, Place};
use super::primitives::{PetId, UserId};
use super::user::RealtimeChannel;

/// A pet tracked by the account.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Pet {
    /// Pet id
    pub id: PetId,
    /// Pet name
    pub name: String,
    /// Profile photo URLs keyed by size
    pub profile_photo_url_sizes: HashMap<String, String>,
    /// Live update channel
    pub realtime_channel: RealtimeChannel,
    /// Subscription status of the pet's collar
    pub subscription_status: Option<String>,
    /// Status of bundled partner services
    pub partner_service_status: Option<String>,
    /// Collar worn by the pet
    pub device: Option<Device>,
    /// Activity overview for the current period
    pub activity_summary: Option<ActivitySummary>,
    /// Most recent known location
    pub last_location: Option<Location>,
    /// Breed, age and weight details
    pub profile: Option<PetProfile>,
}

/// Activity overview shown on the pet dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivitySummary {
    /// Date the summary starts
    pub active_summary_start_date: Option<String>,
    /// Whether activity tracking is enabled
    pub activity_enabled: bool,
    /// Consecutive days the goal was met
    pub current_streak: u32,
    /// Active minutes so far
    pub current_minutes_active: u32,
    /// Rest minutes so far
    pub current_minutes_rest: u32,
    /// Active minutes of comparable pets
    pub similar_pets_minutes_active: f64,
    /// Rest minutes of comparable pets
    pub similar_pets_minutes_rest: f64,
    /// Lower bound of the suggested active minutes
    pub suggested_activity_range_lower: f64,
    /// Upper bound of the suggested active minutes
    pub suggested_activity_range_upper: f64,
    /// Goal in effect
    pub current_activity_goal: Option<ActivityGoal>,
    /// Goal scheduled next
    pub upcoming_activity_goal: Option<ActivityGoal>,
}

/// Daily activity goal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityGoal {
    /// Target active minutes
    pub minutes: u32,
    /// When the goal started
    pub started_at: Option<String>,
    /// Time zone of the goal
    pub time_zone: Value,
}

/// Breed, age and weight details of a pet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PetProfile {
    /// Breed
    pub breed: Option<Breed>,
    /// Date of birth
    pub date_of_birth: Option<String>,
    /// Age, months component
    pub age_in_months: u32,
    /// Age, years component
    pub age_in_years: u32,
    /// IANA time zone of the pet
    pub time_zone_name: Option<String>,
    /// Weight
    pub weight: f64,
    /// Unit of `weight`
    pub weight_type: WeightType,
    /// Species
    pub species: String,
    /// Overdue care tasks
    pub overdue_task_occurrence_count: u32,
    /// Spayed or neutered
    pub is_fixed: bool,
    /// Body condition score
    pub body_condition_score: f64,
    /// Food the pet eats
    pub pet_food: Option<PetFood>,
}

/// An entry of the breed catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Breed {
    /// Breed id
    pub id: u64,
    /// Breed name
    pub name: String,
    /// Popularity rank
    pub popularity: u32,
}

/// A pending ownership transfer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Transfer {
    /// Pet being transferred
    pub pet: Pet,
}

/// A user with access to a pet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PetOwner {
    /// User id
    pub id: UserId,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Whether this is the authenticated user
    pub current_user: bool,
    /// Whether other users can find this owner
    pub searchable: bool,
    /// Profile photo URLs keyed by size
    pub profile_photo_url_sizes: HashMap<String, String>,
    /// Email address
    pub email: String,
}

/// A tracked location fix.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// When the fix was taken
    pub timestamp: Option<String>,
    /// Accuracy radius
    pub uncertainty_meters: f64,
    /// Why the fix was recorded
    pub reason: Option<String>,
    /// Known place containing the fix
    pub place: Option<Place>,
    /// Reverse-geocoded address
    pub description: Option<GeocodeDescription>,
}

/// Locations and places visited within a time window.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Whereabouts {
    /// Location fixes
    pub locations: Vec<Location>,
    /// Places the fixes fall in
    pub places: Vec<Place>,
}

/// An achievement badge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Achievement {
    /// Achievement id
    pub id: u64,
    /// Id of the earned instance
    pub earned_achievement_id: Option<u64>,
    /// Action the badge links to
    pub actionable: Value,
    /// Title
    pub title: String,
    /// Short label
    pub short_name: String,
    /// Description
    pub description: String,
    /// Achievement kind
    #[serde(rename = "type")]
    pub kind: String,
    /// Badge background color
    pub background_color: String,
    /// Badge stroke color
    pub stroke_color: String,
    /// Badge images keyed by size
    pub badge_images: HashMap<String, String>,
    /// Rendering template
    pub template_type: String,
    /// Rendering template properties
    pub template_properties: HashMap<String, Value>,
    /// Whether the badge has been earned
    pub earned: bool,
    /// When the badge was earned
    pub earned_timestamp: Option<String>,
    /// Kind-specific properties
    pub type_properties: HashMap<String, Value>,
}

/// Aggregated activity statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PetStatistics {
    /// Average active minutes per day
    pub average_minutes_active: f64,
    /// Average rest minutes per day
    pub average_minutes_rest: f64,
    /// Average calories per day
    pub average_calories: f64,
    /// Average distance per day
    pub average_distance: f64,
    /// Unit of `average_distance`
    #[serde(rename = "distance_units")]
    pub distance_unit: String,
    /// Current goal streak
    pub current_streak: u32,
    /// Longest goal streak
    pub longest_streak: u32,
    /// Most active day
    pub most_active_day: Value,
}

/// Activity totals for one day.
///
/// The bar chart and hourly fields are only present when a single day is
/// fetched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Daily {
    /// Active-minute goal for the day
    pub activity_goal: u32,
    /// Day number, used to address the day
    pub day_number: u64,
    /// Whether the day is excluded from statistics
    pub excluded: bool,
    /// Active minutes
    pub minutes_active: u32,
    /// Rest minutes
    pub minutes_rest: u32,
    /// Calories burned
    pub calories: f64,
    /// Distance covered
    pub distance: f64,
    /// Unit of `distance`
    pub distance_units: String,
    /// Start of the day
    pub timestamp: Option<String>,
    /// Last update
    pub updated_at: Option<String>,
    /// Activity in 18 minute buckets
    pub bar_chart_18_min: Vec<u32>,
    /// Activity in 3 minute buckets
    pub bar_chart_3_min: Vec<u32>,
    /// Activity per hour
    pub hourly_activity: Vec<u32>,
    /// Goal streak as of this day
    pub current_streak: u32,
    /// Position of this day in the streak
    pub streak_day_number: u32,
    /// Calendar date
    pub date: Option<String>,
    /// Last update of the detailed data
    pub last_updated_at: Option<String>,
}

/// Timeline entry of a day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyItem {
    /// Entry kind
    #[serde(rename = "type")]
    pub kind: String,
    /// Title
    pub title: String,
    /// Entry payload
    pub data: Value,
    /// Start of the entry
    pub start_time: Option<String>,
    /// End of the entry
    pub end_time: Option<String>,
    /// Time zone of the entry
    pub time_zone: Value,
}

/// Health trend report for a pet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthTrends {
    /// Pet the report covers
    pub pet_id: PetId,
    /// Report summary
    pub health_report: Value,
    /// Last update
    pub last_updated: Option<String>,
    /// Individual trends
    pub trends: Vec<HealthTrend>,
}

/// A single health trend such as scratching or licking.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthTrend {
    /// Trend kind, used to fetch its graph
    #[serde(rename = "type")]
    pub kind: String,
    /// Title
    pub title: String,
    /// Status
    pub status: String,
    /// Metric values
    pub metrics: Vec<Value>,
    /// Thresholds separating statuses
    pub status_thresholds: Vec<HashMap<String, Value>>,
}

/// Daily data points of a health trend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthGraph {
    /// Pet the graph covers
    pub pet_id: PetId,
    /// First day of the graph
    pub start_date: Option<String>,
    /// Days covered
    pub num_of_days: u32,
    /// Overall score
    pub score: Value,
    /// Unit of the data points
    pub unit: String,
    /// Status
    pub status: String,
    /// Data points
    pub data: Vec<Value>,
    /// Thresholds separating statuses
    pub status_thresholds: Vec<HashMap<String, Value>>,
}

/// Suggested feeding amounts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NutritionPortions {
    /// Suggested portions per food
    pub pet_food_portions: Vec<Value>,
    /// Suggested daily calories
    pub suggested_calories: f64,
    /// Average daily calories burned
    pub average_calories: f64,
    /// Average daily active minutes
    pub average_minutes_active: f64,
    /// Treats
    pub treats: Vec<Value>,
}

/// Care task occurrences for a pet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskOccurrences {
    /// Pet the tasks belong to
    pub pet_id: PetId,
    /// Task occurrences
    pub task_occurrences: Vec<Value>,
}

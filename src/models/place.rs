//! Places, geocoding, food catalog and notification models.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::device::WifiNetwork;

/// A geofenced place such as home or a dog park.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Place {
    /// Place id
    pub id: u64,
    /// Display name
    pub name: String,
    /// Street address
    pub address: Option<String>,
    /// Center latitude
    pub latitude: Value,
    /// Center longitude
    pub longitude: Value,
    /// Radius of a circular fence
    pub radius_meters: f64,
    /// Fence shape
    pub shape: Option<String>,
    /// Vertices of a polygonal fence
    pub outline: Vec<LatLon>,
    /// Whether the user created the place
    pub created_by_user: bool,
    /// Pets assigned to the place
    pub pet_ids: Vec<u64>,
    /// Home WiFi network of the place
    pub wifi_network: Option<WifiNetwork>,
}

/// A coordinate pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

/// Reverse-geocoded address.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeocodeDescription {
    /// Street address
    pub address: String,
    /// City or locality
    #[serde(rename = "place")]
    pub city: String,
    /// State or region
    pub region: String,
    /// Country
    pub country: String,
}

/// Reverse-geocoding result for a coordinate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReverseGeocode {
    /// Best address guess
    pub description: GeocodeDescription,
    /// Latitude that was queried
    #[serde(rename = "query_latitude")]
    pub query_lat: Value,
    /// Longitude that was queried
    #[serde(rename = "query_longitude")]
    pub query_lon: Value,
}

/// An entry of the pet food catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PetFood {
    /// Food id
    pub id: u64,
    /// Product name
    pub name: String,
    /// Portion size, only present on a pet profile
    pub food_portion: Option<Value>,
    /// Portion unit, only present on a pet profile
    pub unit: Option<String>,
}

/// A notification shown in the app's activity feed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Notification {
    /// Who triggered the notification
    pub actor: Option<NotificationActor>,
    /// Message text
    pub message: String,
    /// What the notification is about
    pub target: Option<NotificationActor>,
    /// When the notification was created
    pub created_at: Option<String>,
    /// Whether the user has not read it yet
    pub unread: bool,
    /// Notification kind
    pub notification_type: String,
}

/// Actor or target of a notification, usually an abbreviated pet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationActor {
    /// Kind of the value
    #[serde(rename = "type")]
    pub kind: String,
    /// The value itself
    pub value: Value,
}

//! User, account and subscription models.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::device::Plan;
use super::primitives::{PetId, SubscriptionId, UserId};

/// Pub/sub channel the mobile app listens on for live updates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RealtimeChannel {
    /// Channel name
    pub channel: String,
    /// Realtime service provider
    pub service: String,
}

/// User summary embedded in login responses and subscriptions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    /// User id
    pub id: UserId,
    /// Email address
    pub email: String,
    /// Username
    pub username: String,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Account creation timestamp
    pub created_at: String,
    /// Whether this is the authenticated user
    pub current_user: bool,
    /// Profile photo URL
    pub profile_photo_url: Option<String>,
    /// Profile photo URLs keyed by size
    pub profile_photo_url_sizes: HashMap<String, String>,
    /// Live update channel
    pub realtime_channel: RealtimeChannel,
    /// Whether other users can find this user
    pub searchable: bool,
    /// Marketing email opt-in
    pub send_marketing_emails: bool,
    /// Account type
    pub user_type: String,
    /// Activation records; shape varies between endpoints
    pub user_activations: Value,
}

/// Full profile of the authenticated user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    /// User id
    pub id: UserId,
    /// Email address
    pub email: String,
    /// Username
    pub username: String,
    /// Display name
    pub name: String,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Account creation timestamp
    pub created_at: String,
    /// Whether this is the authenticated user
    pub current_user: bool,
    /// Dogs linked to the account
    pub dogs: Vec<Value>,
    /// Friends linked to the account
    pub friends: Vec<Value>,
    /// Whether there are notifications the user has not read
    pub has_unread_notifications: bool,
    /// Notification preferences
    pub notification_settings: NotificationSettings,
    /// Profile photo URL
    pub profile_photo_url: Option<String>,
    /// Profile photo URLs keyed by size
    pub profile_photo_sizes: HashMap<String, String>,
    /// Live update channel
    pub realtime_channel: RealtimeChannel,
    /// Whether other users can find this user
    pub searchable: bool,
    /// Marketing email opt-in
    pub send_marketing_emails: bool,
    /// Account type
    pub user_type: String,
    /// Device activation records
    pub user_activations: Vec<UserActivation>,
}

/// Activation progress of a device registered by the user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserActivation {
    /// Collar serial number
    pub device_serial: String,
    /// Activation status
    pub status: String,
    /// Activation milestones reached
    pub events: HashMap<String, bool>,
}

/// Email, SMS and push notification preferences.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    /// Email categories enabled
    pub email_categories: HashMap<String, bool>,
    /// Primary phone number
    pub phone_number: Option<PhoneNumber>,
    /// Push categories enabled
    pub push_categories: HashMap<String, bool>,
    /// Extra email recipients
    pub secondary_emails: Vec<String>,
    /// Extra SMS recipients
    pub secondary_phone_numbers: Vec<String>,
    /// Email delivery enabled
    pub send_email: bool,
    /// SMS delivery enabled
    pub send_sms: bool,
    /// SMS categories enabled
    pub sms_categories: HashMap<String, bool>,
}

/// A phone number on file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneNumber {
    /// Record id
    pub id: u64,
    /// Primary marker
    pub primary: Value,
    /// The number itself
    pub number: String,
    /// Whether the number has been verified
    pub verified: bool,
}

/// Card on file for subscription billing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreditCard {
    /// Card network
    pub card_type: String,
    /// Expiration month (1-12)
    pub expiration_month: u32,
    /// Expiration year
    pub expiration_year: u32,
    /// Last four digits
    #[serde(rename = "last4")]
    pub last_four: String,
    /// Billing ZIP code
    #[serde(rename = "zip")]
    pub zip_code: String,
}

/// A service subscription attached to a pet's device.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Subscription {
    /// Subscription id
    pub id: SubscriptionId,
    /// Lifecycle status
    pub status: String,
    /// When the subscription was canceled
    pub canceled_at: Option<String>,
    /// When a pending cancellation takes effect
    pub cancellation_effective_on: Option<String>,
    /// Whether the subscription ends with its contract
    pub cancel_at_end_of_contract: bool,
    /// Owner of the subscription
    pub user: Option<User>,
    /// Date the subscription is paid through
    pub paid_through: Option<String>,
    /// Plan being billed
    pub plan: Option<Plan>,
    /// Whether this is a legacy plan
    pub legacy: bool,
    /// Pet covered by the subscription
    pub pet_id: Option<PetId>,
    /// Applied coupon
    pub coupon: Option<Value>,
}

/// Subscriptions of the current user plus partner services.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Subscriptions {
    /// Active and past subscriptions
    pub subscriptions: Vec<Subscription>,
    /// Third-party services bundled with subscriptions
    pub partner_services: Vec<Value>,
}

/// A reason offered when canceling a subscription.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CancellationReason {
    /// Reason id
    pub id: u64,
    /// Short label
    pub short_name: String,
    /// Full description
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_accepts_numeric_id() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": 42,
            "email": "owner@example.com",
            "first_name": "Pat",
            "realtime_channel": { "channel": "private-user-42", "service": "pusher" }
        }))
        .unwrap();

        assert_eq!(user.id.as_str(), "42");
        assert_eq!(user.realtime_channel.service, "pusher");
        assert!(user.last_name.is_empty());
    }

    #[test]
    fn test_credit_card_renamed_fields() {
        let card: CreditCard = serde_json::from_value(serde_json::json!({
            "card_type": "visa",
            "expiration_month": 4,
            "expiration_year": 2027,
            "last4": "4242",
            "zip": "02139"
        }))
        .unwrap();

        assert_eq!(card.last_four, "4242");
        assert_eq!(card.zip_code, "02139");
    }
}

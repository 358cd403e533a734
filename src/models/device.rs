//! Collar device, plan and network models.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::primitives::DeviceSerial;
use super::user::Subscription;

/// A tracking collar.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Device {
    /// Hardware model
    pub model_id: String,
    /// Serial number
    pub serial_number: DeviceSerial,
    /// Last time the collar reported in
    pub last_check_in: Option<String>,
    /// Installed firmware
    pub firmware_version: Option<String>,
    /// Battery charge in percent
    pub battery_level: u8,
    /// Battery state
    pub battery_status: Option<String>,
    /// Whether a locate request is outstanding
    pub pending_locate: bool,
    /// Tracking mode
    pub tracking_status: Option<String>,
    /// GPS capable hardware
    pub has_gps: bool,
    /// Whether the collar needs a subscription to work
    pub requires_subscription: bool,
    /// Flashlight state
    pub flashlight_status: Option<String>,
    /// Partner integration record
    pub partner_record: Value,
    /// Whether a subscription was bundled with the purchase
    pub bundled_subscription: bool,
    /// Device configuration
    #[serde(rename = "device_configs")]
    pub device_config: HashMap<String, Value>,
    /// Battery usage statistics
    pub battery_stats: Option<BatteryStats>,
}

impl Device {
    /// Returns `true` if the battery is at or below `threshold` percent.
    pub fn battery_below(&self, threshold: u8) -> bool {
        self.battery_level <= threshold
    }
}

/// Battery usage statistics of a collar.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BatteryStats {
    /// Estimated days left
    pub battery_days_left: u32,
    /// Percent drained in the last day
    pub battery_drain_last_24_hours: f64,
    /// Total estimated battery life
    pub total_battery_life_days: f64,
    /// Usage minutes by category
    pub prior_usage_minutes: HashMap<String, Value>,
}

/// A subscription plan a collar can be put on.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Plan {
    /// Plan id
    pub id: String,
    /// Plan name
    pub name: String,
    /// Plan kind
    pub plan_type: String,
    /// Billing interval unit
    pub interval: String,
    /// Billing intervals per charge
    pub interval_count: u32,
    /// Amount charged per billing cycle
    pub full_amount: Decimal,
    /// Equivalent monthly amount
    pub monthly_amount: Decimal,
    /// ISO currency code
    pub currency: String,
    /// Days the plan can be canceled free of charge
    pub risk_free_days: u32,
    /// Savings compared to the monthly plan, in percent
    pub save_percent: Decimal,
    /// Short label
    pub short_name: String,
    /// Whether the collar is on this plan
    pub current_plan: bool,
    /// Whether this plan is preselected
    pub default_plan: bool,
    /// Whether the plan has a minimum contract
    pub requires_contract: bool,
    /// Contract interval unit
    pub contract_interval: Option<String>,
    /// Contract intervals
    pub contract_interval_count: u32,
    /// Length of the trial
    pub trial_period: u32,
    /// Unit of `trial_period`
    pub trial_period_unit: Option<String>,
}

/// Plans available for a collar.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DevicePlans {
    /// Date the current plan is paid through
    pub paid_through: Option<String>,
    /// Available plans
    pub plans: Vec<Plan>,
}

/// Subscription of a collar and its partner service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceSubscription {
    /// Subscription
    pub subscription: Option<Subscription>,
    /// Bundled partner service
    pub partner_service: Value,
}

/// A WiFi network the collar uses to save battery at home.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WifiNetwork {
    /// Network record id
    pub id: u64,
    /// Network SSID
    pub ssid: String,
    /// Display name
    pub name: String,
    /// Place the network belongs to
    pub place_id: Option<u64>,
    /// Pets using this network
    pub pet_ids: Vec<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_plan_amounts_are_decimal() {
        let plan: Plan = serde_json::from_value(serde_json::json!({
            "id": "gps-annual",
            "name": "GPS Annual",
            "full_amount": 95.4,
            "monthly_amount": "7.95",
            "currency": "usd"
        }))
        .unwrap();

        assert_eq!(plan.full_amount, dec!(95.4));
        assert_eq!(plan.monthly_amount, dec!(7.95));
    }

    #[test]
    fn test_device_battery_threshold() {
        let device: Device = serde_json::from_value(serde_json::json!({
            "serial_number": "W04-1234567",
            "battery_level": 15,
            "has_gps": true
        }))
        .unwrap();

        assert!(device.has_gps);
        assert!(device.battery_below(20));
        assert!(!device.battery_below(10));
        assert_eq!(device.serial_number.as_str(), "W04-1234567");
    }
}

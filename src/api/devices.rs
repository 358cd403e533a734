//! Devices service.

use std::sync::Arc;

use serde_json::Value;

use crate::client::{segment, ClientInner};
use crate::models::{Device, DevicePlans, DeviceSerial, DeviceSubscription, WifiNetwork};
use crate::Result;

/// Service for collar operations.
///
/// Collars are addressed by their serial number, as found in
/// [`Pet::device`](crate::models::Pet::device).
///
/// # Example
///
/// ```no_run
/// use whistle_rs::DeviceSerial;
///
/// # async fn example(client: whistle_rs::WhistleClient) -> whistle_rs::Result<()> {
/// let serial = DeviceSerial::new("W04-1234567");
/// let device = client.devices().get(&serial).await?;
/// if device.battery_below(20) {
///     println!("charge the collar ({}%)", device.battery_level);
/// }
/// # Ok(())
/// # }
/// ```
pub struct DevicesService {
    inner: Arc<ClientInner>,
}

impl DevicesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get a collar.
    pub async fn get(&self, serial: &DeviceSerial) -> Result<Device> {
        #[derive(serde::Deserialize)]
        struct Response {
            device: Device,
        }
        let response: Response = self
            .inner
            .get(&format!("api/devices/{}", segment(serial)?))
            .await?;
        Ok(response.device)
    }

    /// Get the activation status of a collar.
    pub async fn activation(&self, serial: &DeviceSerial) -> Result<Value> {
        self.inner
            .get(&format!("api/devices/{}/activation", segment(serial)?))
            .await
    }

    /// List the plans available for a collar.
    pub async fn plans(&self, serial: &DeviceSerial) -> Result<DevicePlans> {
        self.inner
            .get(&format!("api/devices/{}/plans", segment(serial)?))
            .await
    }

    /// Get the subscription a collar runs under.
    pub async fn subscription(&self, serial: &DeviceSerial) -> Result<DeviceSubscription> {
        self.inner
            .get(&format!("api/devices/{}/subscription", segment(serial)?))
            .await
    }

    /// Preview switching a collar to `plan_id`.
    pub async fn subscription_preview(
        &self,
        serial: &DeviceSerial,
        plan_id: &str,
    ) -> Result<Value> {
        self.inner
            .get(&format!(
                "api/devices/{}/subscription/previews/{}",
                segment(serial)?,
                segment(plan_id)?
            ))
            .await
    }

    /// Preview a hardware upgrade.
    pub async fn upgrade_preview(&self, serial: &DeviceSerial) -> Result<Value> {
        self.inner
            .get(&format!("api/devices/{}/upgrade/preview", segment(serial)?))
            .await
    }

    /// List the WiFi networks a collar has joined.
    pub async fn wifi_networks(&self, serial: &DeviceSerial) -> Result<Vec<WifiNetwork>> {
        #[derive(serde::Deserialize)]
        struct Response {
            #[serde(default)]
            wifi_networks: Vec<WifiNetwork>,
        }
        let response: Response = self
            .inner
            .get(&format!("api/devices/{}/wifi_networks", segment(serial)?))
            .await?;
        Ok(response.wifi_networks)
    }
}

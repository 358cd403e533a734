//! # whistle-rs
//!
//! An async Rust client for the Whistle pet tracker REST API.
//!
//! The crate covers the account, pet, collar and catalog endpoints the
//! Whistle mobile app uses, and exposes the request dispatcher for
//! anything not wrapped yet.
//!
//! ## Features
//!
//! - **Authentication**: email and password (bearer or legacy token
//!   login), existing API tokens, bearer tokens and refresh tokens
//! - **Lazy login**: clients are built offline; the first authorized
//!   request logs in, exactly once, even under concurrent use
//! - **Pets**: profiles, whereabouts, activity dailies, achievements,
//!   health trends and nutrition
//! - **Devices**: collar status, battery, plans and WiFi networks
//! - **Type Safety**: identifier newtypes and typed response models
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use whistle_rs::WhistleClient;
//!
//! #[tokio::main]
//! async fn main() -> whistle_rs::Result<()> {
//!     let client = WhistleClient::from_credentials("owner@example.com", "password")?;
//!
//!     let pets = client.pets().list().await?;
//!     println!("Found {} pets", pets.len());
//!
//!     for pet in &pets {
//!         if let Some(device) = &pet.device {
//!             println!("{}: battery at {}%", pet.name, device.battery_level);
//!         }
//!     }
//!
//!     // Persist this to skip the password next time.
//!     if let Some(refresh) = client.session().refresh_token() {
//!         println!("refresh token: {} chars", refresh.len());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Raw Requests
//!
//! ```rust,no_run
//! use whistle_rs::{OutboundRequest, WhistleClient};
//!
//! #[tokio::main]
//! async fn main() -> whistle_rs::Result<()> {
//!     let client = WhistleClient::from_bearer("bearer-token")?;
//!
//!     let request = OutboundRequest::get("api/pets/123/dailies")
//!         .header("Accept", "application/json");
//!     let response = client.send(request).await?;
//!     println!("HTTP {}", response.status());
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use error::{ApiErrorDetail, Error, Result};
pub use models::{DeviceSerial, Environment, PetId, SubscriptionId, UserId};
pub use client::{ClientConfig, OutboundRequest, WhistleClient};
pub use auth::{AuthMode, Authorization, Credentials, Session};

/// Prelude module for convenient imports.
///
/// ```rust
/// use whistle_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        // Primitives
        DeviceSerial, Environment, PetId, SubscriptionId, UserId,
        // Enums
        Animal, FoodType, WeightType,
        // Pets
        Pet, PetProfile, Location, Whereabouts, Daily, DailyItem, HealthTrends,
        // Users and devices
        UserProfile, Subscription, Device, Plan, Place,
    };
    pub use crate::client::{ClientConfig, OutboundRequest, WhistleClient};
    pub use crate::auth::{AuthMode, Credentials, Session};
}

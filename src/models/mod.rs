//! Data models for the Whistle API.
//!
//! Models are organized by domain:
//!
//! - [`primitives`] - Identifier newtypes and `Environment`
//! - [`enums`] - Catalog selectors and units
//! - [`user`] - User profile, billing and subscriptions
//! - [`pet`] - Pets, activity, locations and health
//! - [`device`] - Collars, plans and WiFi networks
//! - [`place`] - Places, geocoding, food and notifications
//!
//! The vendor does not publish a schema and omits fields freely, so most
//! fields fall back to their default when absent.

pub mod primitives;
pub mod enums;
pub mod user;
pub mod pet;
pub mod device;
pub mod place;

pub use primitives::*;
pub use enums::*;
pub use user::*;
pub use pet::*;
pub use device::*;
pub use place::*;

//! Pet summary example.
//!
//! Prints every pet on the account with its collar battery, last known
//! address and the places it visited in the last 24 hours.
//!
//! Credentials come from `WHISTLE_BEARER`, `WHISTLE_TOKEN`, or
//! `WHISTLE_EMAIL` and `WHISTLE_PASSWORD`.
//!
//! Run with: cargo run --example pet_summary

use chrono::{Duration, Utc};
use whistle_rs::WhistleClient;

#[tokio::main]
async fn main() -> whistle_rs::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = WhistleClient::from_env()?;

    let pets = client.pets().list().await?;
    println!("Found {} pet(s):", pets.len());

    let now = Utc::now();
    for pet in &pets {
        println!("\n{} ({})", pet.name, pet.id);

        if let Some(device) = &pet.device {
            let warning = if device.battery_below(20) { " - charge soon" } else { "" };
            println!("  Collar {}: {}%{}", device.serial_number, device.battery_level, warning);
        }

        if let Some(location) = &pet.last_location {
            let address = client
                .misc()
                .reverse_geocode(location.latitude, location.longitude)
                .await?;
            println!(
                "  Last seen near {}, {}",
                address.description.address, address.description.city
            );
        }

        let trail = client
            .pets()
            .whereabouts(&pet.id, now - Duration::hours(24), now)
            .await?;
        println!("  {} location fixes in the last 24h", trail.locations.len());
        for place in &trail.places {
            println!("    - {}", place.name);
        }
    }

    Ok(())
}

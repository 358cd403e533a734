//! Basic authentication example.
//!
//! Logs in with an email and password, prints the account owner and the
//! refresh token to store for next time.
//!
//! Run with: cargo run --example basic_auth

use whistle_rs::{ClientConfig, Session, WhistleClient};

#[tokio::main]
async fn main() -> whistle_rs::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let email = std::env::var("WHISTLE_EMAIL")
        .expect("WHISTLE_EMAIL environment variable required");
    let password = std::env::var("WHISTLE_PASSWORD")
        .expect("WHISTLE_PASSWORD environment variable required");

    let config = ClientConfig::from_env()?;
    println!("Connecting to Whistle {}...", config.environment);

    let session = Session::from_credentials(email, password)?;
    let client = WhistleClient::with_config(session, config)?;

    // Nothing has been sent yet; this performs the login.
    client.authorize().await?;
    println!("Successfully authenticated!");

    let me = client.users().me().await?;
    println!("\nSigned in as {} {} <{}>", me.first_name, me.last_name, me.email);

    match client.session().refresh_token() {
        Some(token) => println!("Refresh token ({} chars) available for WHISTLE_REFRESH_TOKEN", token.len()),
        None => println!("No refresh token issued"),
    }

    println!("\nDone!");
    Ok(())
}
